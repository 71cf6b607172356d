// ABOUTME: Pure string helpers: whitespace normalization and digit stripping.
// ABOUTME: Never mutate their input; empty input yields empty output.

use once_cell::sync::Lazy;
use regex::Regex;

// ASCII whitespace only; U+00A0 and other Unicode spaces are content.
static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?-u:\s)(?-u:\s)+").unwrap());
static EDGE_WHITESPACE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?-u:\s)+|(?-u:\s)+$").unwrap());

/// Normalizes whitespace in a string.
///
/// Runs of two or more ASCII whitespace characters collapse to a single
/// space, then leading and trailing ASCII whitespace is removed. A lone
/// whitespace character between words (a single tab, say) is left untouched,
/// and non-breaking spaces are treated as ordinary text.
///
/// ```
/// use tritium_kit::normalize;
///
/// assert_eq!(normalize(" foo   bar baz  floozie "), "foo bar baz floozie");
/// ```
pub fn normalize(input: &str) -> String {
    let collapsed = WHITESPACE_RUN.replace_all(input, " ");
    EDGE_WHITESPACE.replace_all(&collapsed, "").into_owned()
}

/// Removes every character that is not an ASCII digit.
pub fn strip_non_digits(input: &str) -> String {
    input.chars().filter(char::is_ascii_digit).collect()
}
