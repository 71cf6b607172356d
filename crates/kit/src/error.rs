// ABOUTME: Error types for rule loading and selector compilation.
// ABOUTME: Provides KitError enum with InvalidSelector and InvalidRules variants.

use std::fmt;
use thiserror::Error;

/// Errors surfaced by the rewriting helpers.
///
/// The helpers themselves are total over well-formed input; these variants
/// cover input the selector engine or the rule loader cannot make sense of.
#[derive(Debug, Error)]
pub enum KitError {
    /// A selector pattern failed to compile.
    #[error("invalid selector: {0}")]
    InvalidSelector(String),

    /// A rule set could not be deserialized.
    #[error("invalid rule set: {0}")]
    InvalidRules(String),
}

impl KitError {
    /// Creates an InvalidSelector error naming the offending pattern.
    pub fn invalid_selector(css: impl Into<String>) -> Self {
        KitError::InvalidSelector(css.into())
    }

    /// Creates an InvalidRules error from an underlying deserialization error.
    pub fn invalid_rules(err: impl fmt::Display) -> Self {
        KitError::InvalidRules(err.to_string())
    }

    /// Returns true if this is an InvalidSelector error.
    pub fn is_invalid_selector(&self) -> bool {
        matches!(self, KitError::InvalidSelector(_))
    }
}
