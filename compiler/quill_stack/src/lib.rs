//! Stack growth for the recursive parts of Quill.
//!
//! The parser descends once per nested expression and the interpreter once
//! per nested expression and per user function call. Both bound their depth
//! explicitly, but the bounds are far deeper than a default 8MB main-thread
//! stack can hold, so every recursive entry point runs through
//! [`ensure_sufficient_stack`].
//!
//! On native targets the stack is extended on demand with `stacker`. On
//! `wasm32` the closure is called directly.

/// Grow when less than this much stack is left.
const RED_ZONE: usize = 128 * 1024;

/// Size of each freshly allocated stack segment.
const SEGMENT_SIZE: usize = 2 * 1024 * 1024;

/// Run `f`, first switching to a new stack segment if the current one is
/// close to exhausted.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

/// Run `f` directly.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

#[cfg(test)]
mod tests;
