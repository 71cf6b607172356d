// ABOUTME: Reading and writing a node's text content or a single attribute value.
// ABOUTME: Hosts normalize_node, the in-place variant of text normalization.

use dom_query::NodeRef;
use tracing::debug;

use crate::text::normalize;

/// Which value of a node an operation reads and writes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeValue {
    /// The node's text content.
    Text,
    /// The value of the named attribute.
    Attr(String),
}

impl NodeValue {
    /// Text content when `attribute` is `None`, otherwise that attribute.
    pub fn from_attribute(attribute: Option<&str>) -> Self {
        match attribute {
            Some(name) => NodeValue::Attr(name.to_string()),
            None => NodeValue::Text,
        }
    }
}

/// Returns the current value, or `None` when the attribute is absent.
pub fn read_value(node: &NodeRef, value: &NodeValue) -> Option<String> {
    match value {
        NodeValue::Text => Some(node.text().to_string()),
        NodeValue::Attr(name) => node.attr(name).map(|v| v.to_string()),
    }
}

/// Replaces the value.
///
/// Writing [`NodeValue::Text`] replaces all of the node's children with a
/// single text node, so nested elements such as `<b>` are flattened away.
pub fn write_value(node: &NodeRef, value: &NodeValue, content: &str) {
    match value {
        NodeValue::Text => node.set_text(content),
        NodeValue::Attr(name) => node.set_attr(name, content),
    }
}

/// Applies `f` to the value and writes the result back if it changed.
///
/// Returns true when the node was modified. Absent attributes stay absent.
pub fn rewrite_value(node: &NodeRef, value: &NodeValue, f: impl FnOnce(&str) -> String) -> bool {
    let Some(current) = read_value(node, value) else {
        return false;
    };
    let updated = f(&current);
    if updated == current {
        return false;
    }
    write_value(node, value, &updated);
    true
}

/// Normalizes whitespace of a node's text or attribute in place.
///
/// For [`NodeValue::Text`] the node's whole text content is normalized and
/// written back as one text node; child elements are not preserved. Point it
/// at leaf elements or at an attribute when markup must survive.
pub fn normalize_node(node: &NodeRef, value: &NodeValue) {
    if rewrite_value(node, value, normalize) {
        debug!(?value, "normalize_node");
    }
}
