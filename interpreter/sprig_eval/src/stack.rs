//! Stack headroom for deeply nested expressions.
//!
//! Evaluation is plain recursive descent, so user-program nesting maps
//! directly onto host stack depth. The evaluator's depth counter bounds
//! how far that can go, but the limit is generous enough that a thread
//! with a small default stack could still fault first; `stacker` grows
//! the stack on demand so the counter is the only cap that fires.

/// Run `f`, growing the stack first if the remaining headroom is low.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub(crate) fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    /// Remaining stack below this triggers a grow (100 KiB).
    const RED_ZONE: usize = 100 * 1024;

    /// Size of each new stack segment (1 MiB).
    const STACK_PER_RECURSION: usize = 1024 * 1024;

    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

/// wasm manages its own stack; call through directly.
#[inline]
#[cfg(target_arch = "wasm32")]
pub(crate) fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
