// ABOUTME: Blank guards that run a continuation depending on whether a string is empty.
// ABOUTME: Exactly one of yield_if_blank / yield_if_not_blank fires for any input.

/// Runs `f` only when `value` is empty, returning its result.
pub fn yield_if_blank<R>(value: &str, f: impl FnOnce() -> R) -> Option<R> {
    if value.is_empty() {
        Some(f())
    } else {
        None
    }
}

/// Runs `f` only when `value` has at least one character, returning its result.
pub fn yield_if_not_blank<R>(value: &str, f: impl FnOnce() -> R) -> Option<R> {
    if value.is_empty() {
        None
    } else {
        Some(f())
    }
}
