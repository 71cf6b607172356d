// ABOUTME: Declarative rewrite rules mapping CSS selectors to node helpers.
// ABOUTME: Rule sets are JSON documents deserialized with serde.

//! Rule sets for document rewriting.
//!
//! A rule set is an ordered list of rules. Each rule pairs a CSS selector
//! with an action; the action runs once per matching node.
//!
//! ```json
//! {
//!   "rules": [
//!     { "selector": "div.promo", "action": "keep_only_attributes", "attributes": "id, data-ur-set" },
//!     { "selector": "div.promo", "action": "remove_class", "class": "promo" },
//!     { "selector": "ul", "action": "remove_preceding_sibling",
//!       "search": "li.sublist", "target": "li:not(.sublist)" }
//!   ]
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::dom::NodeValue;
use crate::error::KitError;

/// What to do with every node a rule selects.
///
/// Actions with an optional `attribute` operate on the node's text content
/// when it is omitted. Rewriting text content replaces the node's children
/// with a single text node, dropping any nested markup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Action {
    /// Drop every attribute whose name is not found in `attributes`.
    KeepOnlyAttributes { attributes: String },
    /// Collapse and trim whitespace. Without `attribute`, child elements are flattened.
    Normalize {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        attribute: Option<String>,
    },
    /// Remove a whole class token.
    RemoveClass { class: String },
    /// Add class tokens that are not present yet.
    AddClass { class: String },
    /// Remove the nearest preceding `target` sibling of each `search` descendant.
    RemovePrecedingSibling { search: String, target: String },
    /// Remove the node when the value is empty.
    RemoveIfBlank {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        attribute: Option<String>,
    },
    /// Keep only ASCII digits. Without `attribute`, child elements are flattened.
    StripNonDigits {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        attribute: Option<String>,
    },
    /// Prefix an attribute value with the image directory.
    ImagePath { attribute: String },
}

impl Action {
    /// The node value this action reads, if it reads one.
    pub fn value(&self) -> Option<NodeValue> {
        match self {
            Action::Normalize { attribute }
            | Action::RemoveIfBlank { attribute }
            | Action::StripNonDigits { attribute } => {
                Some(NodeValue::from_attribute(attribute.as_deref()))
            }
            Action::ImagePath { attribute } => Some(NodeValue::Attr(attribute.clone())),
            _ => None,
        }
    }

    /// Selectors evaluated by the action itself, beyond the rule's own.
    pub fn selectors(&self) -> Vec<&str> {
        match self {
            Action::RemovePrecedingSibling { search, target } => {
                vec![search.as_str(), target.as_str()]
            }
            _ => vec![],
        }
    }
}

/// A selector paired with the action to apply to its matches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    pub selector: String,
    #[serde(flatten)]
    pub action: Action,
}

impl Rule {
    pub fn new(selector: impl Into<String>, action: Action) -> Self {
        Self {
            selector: selector.into(),
            action,
        }
    }
}

/// An ordered list of rules.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSet {
    #[serde(default)]
    pub rules: Vec<Rule>,
}

impl RuleSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a rule set from its JSON representation.
    pub fn from_json(json: &str) -> Result<Self, KitError> {
        serde_json::from_str(json).map_err(KitError::invalid_rules)
    }

    /// Serializes the rule set as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, KitError> {
        serde_json::to_string_pretty(self).map_err(KitError::invalid_rules)
    }

    /// Appends a rule.
    pub fn push(&mut self, rule: Rule) {
        self.rules.push(rule);
    }

    /// Every selector the rule set evaluates, rule selectors first.
    pub fn selectors(&self) -> Vec<&str> {
        let mut selectors: Vec<&str> = self.rules.iter().map(|r| r.selector.as_str()).collect();
        selectors.extend(self.rules.iter().flat_map(|r| r.action.selectors()));
        selectors
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl FromIterator<Rule> for RuleSet {
    fn from_iter<I: IntoIterator<Item = Rule>>(iter: I) -> Self {
        Self {
            rules: iter.into_iter().collect(),
        }
    }
}
