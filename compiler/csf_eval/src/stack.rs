//! Stack growth for deeply recursive programs.
//!
//! Every interpreted call goes through [`Display::execute`](crate::Display::execute)
//! and recurses on the host stack, so a recursive script can exhaust it long
//! before the nesting limit matters. `stacker` grows the stack on demand.

/// Run `f`, growing the stack first if less than the red zone remains.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    /// Remaining space below which the stack is grown (128KB).
    const RED_ZONE: usize = 128 * 1024;

    /// Size of each new stack segment (2MB).
    const STACK_PER_RECURSION: usize = 2 * 1024 * 1024;

    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

/// WASM manages its own stack.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
