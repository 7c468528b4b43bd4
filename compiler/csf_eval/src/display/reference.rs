//! References into the display.

use super::Display;
use crate::ActivationId;
use csf_values::{EvalResult, SemanticError, Value};

/// A (level, slot) coordinate for a variable.
///
/// A reference owns nothing. It stays usable only while the activation that
/// issued it occupies its level; once that activation is swapped out (or
/// discarded) every access fails with a stale-reference error, and works again
/// if the activation is swapped back in.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Reference {
    pub(super) depth: usize,
    pub(super) slot: usize,
    pub(super) activation: ActivationId,
}

impl Reference {
    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn slot(&self) -> usize {
        self.slot
    }

    pub fn activation(&self) -> ActivationId {
        self.activation
    }

    pub fn get(&self, display: &Display) -> EvalResult {
        display.get(*self)
    }

    /// Store without the const check. Used for initialization.
    pub fn set(&self, display: &mut Display, value: Value) -> Result<(), SemanticError> {
        display.set(*self, value)
    }

    /// Store, refusing to overwrite a const value.
    pub fn assign(&self, display: &mut Display, value: Value) -> Result<(), SemanticError> {
        display.assign(*self, value)
    }
}
