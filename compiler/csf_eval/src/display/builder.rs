//! `DisplayBuilder` for creating a [`Display`] with non-default limits.

use super::Display;

/// Default static nesting capacity.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// What happens when a name is declared twice in the same scope.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum RedefinitionPolicy {
    /// The second declaration fails with a duplicate-definition error.
    #[default]
    Reject,
    /// The second declaration replaces the first. For variables the name
    /// moves to a fresh slot, so references to the old slot stay valid.
    ///
    /// Slots are never reclaimed, so an activation that rebinds a name in a
    /// loop grows by one slot per rebinding until it is discarded. Level 0
    /// lives as long as the display.
    Shadow,
}

/// Builder for [`Display`].
///
/// ```text
/// let display = DisplayBuilder::new()
///     .max_depth(16)
///     .redefinition(RedefinitionPolicy::Shadow)
///     .build();
/// ```
#[derive(Clone, Debug)]
pub struct DisplayBuilder {
    max_depth: usize,
    redefinition: RedefinitionPolicy,
}

impl DisplayBuilder {
    pub fn new() -> Self {
        DisplayBuilder {
            max_depth: DEFAULT_MAX_DEPTH,
            redefinition: RedefinitionPolicy::default(),
        }
    }

    /// Number of static levels, including level 0. Clamped to at least one.
    #[must_use]
    pub fn max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth.max(1);
        self
    }

    #[must_use]
    pub fn redefinition(mut self, policy: RedefinitionPolicy) -> Self {
        self.redefinition = policy;
        self
    }

    pub fn build(self) -> Display {
        Display::with_config(self.max_depth, self.redefinition)
    }
}

impl Default for DisplayBuilder {
    fn default() -> Self {
        Self::new()
    }
}
