//! RAII guard that swaps an activation back out of the display.
//!
//! Restoration runs in `Drop`, so the previous occupant of the level and the
//! previous current level come back on normal return, on error return, and
//! during unwinding alike.

use std::ops::{Deref, DerefMut};

use super::{Display, Frame};

pub(super) struct ActivationGuard<'a> {
    display: &'a mut Display,
    level: usize,
    previous: Option<Frame>,
    previous_level: usize,
}

impl<'a> ActivationGuard<'a> {
    /// Install `frame` at `level`, saving whatever was there.
    pub(super) fn install(display: &'a mut Display, level: usize, frame: Frame) -> Self {
        if display.frames.len() <= level {
            display.frames.resize_with(level + 1, || None);
        }
        let previous = display
            .frames
            .get_mut(level)
            .and_then(|slot| slot.replace(frame));
        let previous_level = std::mem::replace(&mut display.current_level, level);
        ActivationGuard {
            display,
            level,
            previous,
            previous_level,
        }
    }
}

impl Drop for ActivationGuard<'_> {
    fn drop(&mut self) {
        if let Some(slot) = self.display.frames.get_mut(self.level) {
            *slot = self.previous.take();
        }
        self.display.current_level = self.previous_level;
    }
}

impl Deref for ActivationGuard<'_> {
    type Target = Display;

    fn deref(&self) -> &Self::Target {
        self.display
    }
}

impl DerefMut for ActivationGuard<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.display
    }
}
