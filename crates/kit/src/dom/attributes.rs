// ABOUTME: Attribute filtering that keeps only the attributes named in an allow list.
// ABOUTME: Matching is substring containment against the raw allow-list text.

use dom_query::NodeRef;
use tracing::debug;

/// Removes every attribute whose local name does not appear in `allow_list`.
///
/// The allow list is free text such as `"data-ur-set, data-ur-toggler-component"`.
/// An attribute is kept when its name occurs anywhere in that text, so a name
/// that happens to be a substring of an allowed name (`set` inside
/// `data-ur-set`) is kept as well. An empty allow list strips every attribute.
pub fn keep_only_attributes(node: &NodeRef, allow_list: &str) {
    let doomed: Vec<String> = node
        .attrs()
        .iter()
        .map(|attr| attr.name.local.to_string())
        .filter(|name| !allow_list.contains(name.as_str()))
        .collect();

    if doomed.is_empty() {
        return;
    }

    debug!(removed = ?doomed, "keep_only_attributes");
    for name in &doomed {
        node.remove_attr(name);
    }
}
