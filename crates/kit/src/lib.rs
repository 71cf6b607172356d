// ABOUTME: Main library entry point for the tritium-kit document rewriting helpers.
// ABOUTME: Re-exports the string helpers, node helpers, rule model, and Rewriter.

//! tritium-kit - helpers for rewriting HTML documents.
//!
//! The crate offers small, independent transformations that work either on
//! strings (whitespace normalization, digit stripping, path building) or on a
//! node borrowed from a [`dom_query::Document`] (attribute filtering, class
//! edits, sibling yielding). A [`Rewriter`] strings them together from a
//! declarative [`RuleSet`].
//!
//! # Example
//!
//! ```
//! use tritium_kit::{Action, Rewriter, Rule};
//!
//! let rewriter = Rewriter::builder()
//!     .rule(Rule::new("div", Action::RemoveClass { class: "foo".into() }))
//!     .fragment(true)
//!     .build();
//!
//! let html = rewriter.rewrite(r#"<div class=" foo   bar baz  floozie "></div>"#).unwrap();
//! assert_eq!(html, r#"<div class="bar baz floozie"></div>"#);
//! ```

pub mod dom;
pub mod error;
pub mod guards;
pub mod options;
pub mod paths;
pub mod rewriter;
pub mod rules;
pub mod text;

pub use crate::dom::{
    add_class, keep_only_attributes, normalize_node, remove_class, yield_to_preceding_sibling,
    NodeValue,
};
pub use crate::error::KitError;
pub use crate::guards::{yield_if_blank, yield_if_not_blank};
pub use crate::options::{Options, RewriterBuilder};
pub use crate::paths::{get_image_path, xpath_from_body};
pub use crate::rewriter::{RewriteStats, Rewriter};
pub use crate::rules::{Action, Rule, RuleSet};
pub use crate::text::{normalize, strip_non_digits};
