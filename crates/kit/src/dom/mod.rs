// ABOUTME: In-place helpers that mutate nodes of a dom_query document.
// ABOUTME: Attribute filtering, class edits, value normalization, and sibling yielding.

//! Node-level rewriting helpers.
//!
//! Every helper borrows a [`dom_query::NodeRef`] for the duration of a single
//! call. Nodes are never retained beyond it.

pub mod attributes;
pub mod classes;
pub mod compiled;
pub mod siblings;
pub mod values;

pub use attributes::keep_only_attributes;
pub use classes::{add_class, remove_class};
pub use siblings::yield_to_preceding_sibling;
pub use values::{normalize_node, NodeValue};
