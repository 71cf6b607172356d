// ABOUTME: Yields the nearest preceding sibling of each node matching a search selector.
// ABOUTME: The sibling must match a target selector; unmatched search nodes are skipped.

use std::collections::HashSet;

use dom_query::{Matcher, NodeRef, Selection};
use tracing::debug;

use crate::dom::compiled::compile;
use crate::error::KitError;

/// For every descendant of `context` matching `search`, calls `f` with the
/// closest preceding element sibling that matches `target`.
///
/// Search matches are collected up front in document order. The sibling
/// lookup for each one happens when it is visited, so a continuation that
/// removes nodes affects the lookups that follow it. A sibling can be yielded
/// to more than once when it is the nearest target for several search nodes.
///
/// Returns how many times `f` was called.
pub fn yield_to_preceding_sibling<'a, F>(
    context: &NodeRef<'a>,
    search: &str,
    target: &str,
    f: F,
) -> Result<usize, KitError>
where
    F: FnMut(&NodeRef<'a>),
{
    let search_matcher = compile(search)?;
    let target_matcher = compile(target)?;
    let yielded = yield_across(
        std::slice::from_ref(context),
        &search_matcher,
        &target_matcher,
        f,
    );
    debug!(search, target, yielded, "yield_to_preceding_sibling");
    Ok(yielded)
}

/// Sibling yielding over several contexts at once.
///
/// Contexts must be in document order, as a selection returns them. A search
/// node reachable from more than one context (nested contexts) is looked up
/// once, in the position of its first appearance.
pub(crate) fn yield_across<'a, F>(
    contexts: &[NodeRef<'a>],
    search: &Matcher,
    target: &Matcher,
    mut f: F,
) -> usize
where
    F: FnMut(&NodeRef<'a>),
{
    let mut seen = HashSet::new();
    let mut matches: Vec<NodeRef<'a>> = Vec::new();
    for context in contexts {
        for node in Selection::from(context.clone()).select_matcher(search).nodes() {
            if seen.insert(node.id) {
                matches.push(node.clone());
            }
        }
    }

    let mut yielded = 0;
    for node in &matches {
        if let Some(sibling) = nearest_preceding(node, target) {
            f(&sibling);
            yielded += 1;
        }
    }
    yielded
}

fn nearest_preceding<'a>(node: &NodeRef<'a>, target: &Matcher) -> Option<NodeRef<'a>> {
    let mut current = node.prev_element_sibling();
    while let Some(sibling) = current {
        if sibling.is_match(target) {
            return Some(sibling);
        }
        current = sibling.prev_element_sibling();
    }
    None
}
