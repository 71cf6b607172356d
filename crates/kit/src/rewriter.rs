// ABOUTME: Applies a rule set to an HTML document and serializes the result.
// ABOUTME: Rules run in order; each action runs once per node its selector matches.

use dom_query::{Document, Matcher, NodeRef, Selection};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::dom::compiled::CompiledSelectors;
use crate::dom::siblings::yield_across;
use crate::dom::values::{read_value, rewrite_value};
use crate::dom::{add_class, keep_only_attributes, normalize_node, remove_class};
use crate::error::KitError;
use crate::guards::yield_if_blank;
use crate::options::{Options, RewriterBuilder};
use crate::paths::get_image_path;
use crate::rules::{Action, Rule};
use crate::text::strip_non_digits;

/// Counters describing one rewrite pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RewriteStats {
    pub rules_applied: usize,
    pub rules_skipped: usize,
    pub nodes_matched: usize,
    pub nodes_removed: usize,
}

/// Runs a configured rule set over documents.
#[derive(Debug, Clone)]
pub struct Rewriter {
    opts: Options,
    selectors: CompiledSelectors,
}

impl Rewriter {
    /// Create a Rewriter from options, compiling every selector of its rule set.
    pub fn new(opts: Options) -> Self {
        let selectors = CompiledSelectors::new(opts.rules.selectors());
        Self { opts, selectors }
    }

    pub fn builder() -> RewriterBuilder {
        RewriterBuilder::new()
    }

    pub fn options(&self) -> &Options {
        &self.opts
    }

    /// Parses `html`, applies every rule, and returns the serialized result.
    pub fn rewrite(&self, html: &str) -> Result<String, KitError> {
        self.rewrite_with_stats(html).map(|(out, _)| out)
    }

    /// Like [`Rewriter::rewrite`], also returning the pass counters.
    pub fn rewrite_with_stats(&self, html: &str) -> Result<(String, RewriteStats), KitError> {
        let doc = Document::from(html);
        let stats = self.apply(&doc)?;
        info!(
            rules_applied = stats.rules_applied,
            rules_skipped = stats.rules_skipped,
            nodes_matched = stats.nodes_matched,
            nodes_removed = stats.nodes_removed,
            "rewrite complete"
        );
        Ok((self.serialize(&doc), stats))
    }

    /// Applies every rule to an already parsed document.
    pub fn apply(&self, doc: &Document) -> Result<RewriteStats, KitError> {
        let mut stats = RewriteStats::default();
        let root = doc.root();

        for rule in &self.opts.rules.rules {
            let matcher = match self.rule_matcher(rule) {
                Ok(matcher) => matcher,
                Err(err) if self.opts.strict => return Err(err),
                Err(err) => {
                    warn!(selector = %rule.selector, error = %err, "skipping rule");
                    stats.rules_skipped += 1;
                    continue;
                }
            };

            let nodes: Vec<NodeRef> = Selection::from(root.clone())
                .select_matcher(matcher)
                .nodes()
                .to_vec();
            debug!(selector = %rule.selector, matched = nodes.len(), "applying rule");

            stats.nodes_removed += match &rule.action {
                // One lookup per search node, even when selected containers nest
                Action::RemovePrecedingSibling { search, target } => yield_across(
                    &nodes,
                    self.selectors.get(search)?,
                    self.selectors.get(target)?,
                    |sibling| sibling.remove_from_parent(),
                ),
                action => nodes.iter().map(|node| apply_action(node, action)).sum(),
            };
            stats.nodes_matched += nodes.len();
            stats.rules_applied += 1;
        }

        Ok(stats)
    }

    /// The rule's own matcher, once every selector the rule uses is known to be valid.
    fn rule_matcher(&self, rule: &Rule) -> Result<&Matcher, KitError> {
        for css in rule.action.selectors() {
            self.selectors.get(css)?;
        }
        self.selectors.get(&rule.selector)
    }

    fn serialize(&self, doc: &Document) -> String {
        if self.opts.fragment {
            doc.select("body").inner_html().to_string()
        } else {
            doc.html().to_string()
        }
    }
}

/// Runs a per-node action against one node, returning how many nodes it removed.
fn apply_action(node: &NodeRef, action: &Action) -> usize {
    let value = action.value();
    match action {
        Action::KeepOnlyAttributes { attributes } => {
            keep_only_attributes(node, attributes);
            0
        }
        Action::RemoveClass { class } => {
            remove_class(node, class);
            0
        }
        Action::AddClass { class } => {
            add_class(node, class);
            0
        }
        // Runs over the whole selection in Rewriter::apply
        Action::RemovePrecedingSibling { .. } => 0,
        Action::Normalize { .. } => {
            if let Some(value) = &value {
                normalize_node(node, value);
            }
            0
        }
        Action::StripNonDigits { .. } => {
            if let Some(value) = &value {
                rewrite_value(node, value, strip_non_digits);
            }
            0
        }
        Action::ImagePath { .. } => {
            if let Some(value) = &value {
                rewrite_value(node, value, get_image_path);
            }
            0
        }
        Action::RemoveIfBlank { .. } => {
            // Absent attributes count as blank
            let current = value
                .as_ref()
                .and_then(|v| read_value(node, v))
                .unwrap_or_default();
            yield_if_blank(&current, || node.remove_from_parent())
                .map(|_| 1)
                .unwrap_or(0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::RuleSet;

    #[test]
    fn test_rules_apply_in_order() {
        let rewriter = Rewriter::builder()
            .rule(Rule::new("div", Action::AddClass { class: "new".into() }))
            .rule(Rule::new("div", Action::RemoveClass { class: "old".into() }))
            .fragment(true)
            .build();

        let out = rewriter.rewrite(r#"<div class="old keep"></div>"#).unwrap();

        assert_eq!(out, r#"<div class="keep new"></div>"#);
    }

    #[test]
    fn test_lenient_mode_skips_invalid_rules() {
        let rewriter = Rewriter::builder()
            .rule(Rule::new("p[", Action::Normalize { attribute: None }))
            .rule(Rule::new("p", Action::Normalize { attribute: None }))
            .fragment(true)
            .build();

        let (out, stats) = rewriter.rewrite_with_stats("<p>  a   b </p>").unwrap();

        assert_eq!(out, "<p>a b</p>");
        assert_eq!(stats.rules_skipped, 1);
        assert_eq!(stats.rules_applied, 1);
        assert_eq!(stats.nodes_matched, 1);
    }

    #[test]
    fn test_strict_mode_rejects_invalid_action_selector() {
        let rewriter = Rewriter::builder()
            .rule(Rule::new(
                "ul",
                Action::RemovePrecedingSibling {
                    search: "li.sub".into(),
                    target: "li:not(".into(),
                },
            ))
            .strict(true)
            .build();

        let err = rewriter.rewrite("<ul><li>a</li></ul>").unwrap_err();

        assert!(err.is_invalid_selector());
    }

    #[test]
    fn test_remove_if_blank_counts_removals() {
        let rewriter = Rewriter::builder()
            .rule(Rule::new("span", Action::RemoveIfBlank { attribute: None }))
            .fragment(true)
            .build();

        let (out, stats) = rewriter
            .rewrite_with_stats("<p><span></span><span>x</span><span></span></p>")
            .unwrap();

        assert_eq!(out, "<p><span>x</span></p>");
        assert_eq!(stats.nodes_removed, 2);
    }

    #[test]
    fn test_remove_if_blank_treats_missing_attribute_as_blank() {
        let rewriter = Rewriter::builder()
            .rule(Rule::new(
                "a",
                Action::RemoveIfBlank {
                    attribute: Some("href".into()),
                },
            ))
            .fragment(true)
            .build();

        let out = rewriter
            .rewrite(r#"<a>none</a><a href="">empty</a><a href="/x">ok</a>"#)
            .unwrap();

        assert_eq!(out, r#"<a href="/x">ok</a>"#);
    }

    #[test]
    fn test_empty_rule_set_keeps_document() {
        let rewriter = Rewriter::new(Options {
            rules: RuleSet::new(),
            fragment: true,
            strict: true,
        });

        assert_eq!(rewriter.rewrite("<p>same</p>").unwrap(), "<p>same</p>");
    }

    #[test]
    fn test_full_document_output() {
        let rewriter = Rewriter::builder().build();

        let out = rewriter.rewrite("<p>x</p>").unwrap();

        assert!(out.starts_with("<html>"));
        assert!(out.contains("<body><p>x</p></body>"));
    }
}
