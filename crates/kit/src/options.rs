// ABOUTME: Configuration for the Rewriter: rule set, fragment output, and selector strictness.
// ABOUTME: RewriterBuilder provides a fluent API for constructing Rewriter instances.

use crate::rewriter::Rewriter;
use crate::rules::{Rule, RuleSet};

/// Configuration options for a [`Rewriter`].
#[derive(Debug, Clone, Default)]
pub struct Options {
    /// Rules applied in order to every document.
    pub rules: RuleSet,
    /// Emit only the inner HTML of `<body>` instead of the whole document.
    pub fragment: bool,
    /// Fail on an invalid selector instead of skipping the rule.
    pub strict: bool,
}

/// Builder for constructing Rewriter instances with custom configuration.
#[derive(Debug, Clone, Default)]
pub struct RewriterBuilder {
    opts: Options,
}

impl RewriterBuilder {
    /// Create a new RewriterBuilder with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the rule set.
    pub fn rules(mut self, rules: RuleSet) -> Self {
        self.opts.rules = rules;
        self
    }

    /// Append a single rule.
    pub fn rule(mut self, rule: Rule) -> Self {
        self.opts.rules.push(rule);
        self
    }

    /// Output only the body's inner HTML.
    pub fn fragment(mut self, fragment: bool) -> Self {
        self.opts.fragment = fragment;
        self
    }

    /// Treat invalid selectors as errors.
    pub fn strict(mut self, strict: bool) -> Self {
        self.opts.strict = strict;
        self
    }

    /// Build the Rewriter with the configured options.
    pub fn build(self) -> Rewriter {
        Rewriter::new(self.opts)
    }
}
