// ABOUTME: Whole-token class removal and addition on a node's class attribute.
// ABOUTME: Both operations leave the class attribute whitespace-normalized.

use dom_query::NodeRef;
use regex::Regex;
use tracing::{debug, warn};

use crate::text::normalize;

/// Removes a whole class from the node's `class` attribute.
///
/// Only whole words are removed: removing `product` leaves
/// `product_thumbnail` alone. The remaining value is normalized before it is
/// written back. Nodes without a `class` attribute are left untouched.
pub fn remove_class(node: &NodeRef, class_name: &str) {
    let Some(current) = node.attr("class") else {
        return;
    };

    let pattern = format!(r"\b{}\b", regex::escape(class_name));
    let re = match Regex::new(&pattern) {
        Ok(re) => re,
        Err(err) => {
            warn!(class = class_name, error = %err, "remove_class: unusable class pattern");
            return;
        }
    };

    let stripped = re.replace_all(&current, "");
    let updated = normalize(&stripped);
    debug!(class = class_name, before = %current, after = %updated, "remove_class");
    node.set_attr("class", &updated);
}

/// Adds one or more whitespace-separated classes to the node.
///
/// Tokens already present are not repeated. The attribute is created when
/// the node has none.
pub fn add_class(node: &NodeRef, class_name: &str) {
    let current = node
        .attr("class")
        .map(|v| v.to_string())
        .unwrap_or_default();

    let mut tokens: Vec<&str> = current.split_whitespace().collect();
    let before = tokens.len();
    for token in class_name.split_whitespace() {
        if !tokens.contains(&token) {
            tokens.push(token);
        }
    }

    let updated = normalize(&tokens.join(" "));
    debug!(class = class_name, added = tokens.len() - before, "add_class");
    node.set_attr("class", &updated);
}

#[cfg(test)]
mod tests {
    use super::*;
    use dom_query::Document;

    fn class_of(node: &NodeRef) -> Option<String> {
        node.attr("class").map(|v| v.to_string())
    }

    #[test]
    fn test_remove_class_normalizes_remainder() {
        let doc = Document::from(r#"<div class=" foo   bar baz  floozie "></div>"#);
        let div = doc.select("div").nodes()[0].clone();

        remove_class(&div, "foo");

        assert_eq!(class_of(&div).as_deref(), Some("bar baz floozie"));
    }

    #[test]
    fn test_remove_class_only_removes_whole_words() {
        let doc = Document::from(r#"<img class="product product_thumbnail">"#);
        let img = doc.select("img").nodes()[0].clone();

        remove_class(&img, "product");

        assert_eq!(class_of(&img).as_deref(), Some("product_thumbnail"));
    }

    #[test]
    fn test_remove_class_removes_every_occurrence() {
        let doc = Document::from(r#"<p class="a b a c a"></p>"#);
        let p = doc.select("p").nodes()[0].clone();

        remove_class(&p, "a");

        assert_eq!(class_of(&p).as_deref(), Some("b c"));
    }

    #[test]
    fn test_remove_class_without_attribute_writes_nothing() {
        let doc = Document::from("<span>x</span>");
        let span = doc.select("span").nodes()[0].clone();

        remove_class(&span, "foo");

        assert!(class_of(&span).is_none());
    }

    #[test]
    fn test_remove_class_rewrites_empty_attribute() {
        let doc = Document::from(r#"<div class=""></div><span class="   "></span>"#);
        let div = doc.select("div").nodes()[0].clone();
        let span = doc.select("span").nodes()[0].clone();

        remove_class(&div, "foo");
        remove_class(&span, "foo");

        assert_eq!(class_of(&div).as_deref(), Some(""));
        assert_eq!(class_of(&span).as_deref(), Some(""));
    }

    #[test]
    fn test_remove_class_treats_metacharacters_literally() {
        let doc = Document::from(r#"<div class="col.6 col6"></div>"#);
        let div = doc.select("div").nodes()[0].clone();

        remove_class(&div, "col.6");

        assert_eq!(class_of(&div).as_deref(), Some("col6"));
    }

    #[test]
    fn test_remove_missing_class_still_normalizes() {
        let doc = Document::from(r#"<div class="  keep   me "></div>"#);
        let div = doc.select("div").nodes()[0].clone();

        remove_class(&div, "gone");

        assert_eq!(class_of(&div).as_deref(), Some("keep me"));
    }

    #[test]
    fn test_add_class_creates_attribute() {
        let doc = Document::from("<span>x</span>");
        let span = doc.select("span").nodes()[0].clone();

        add_class(&span, "active");

        assert_eq!(class_of(&span).as_deref(), Some("active"));
    }

    #[test]
    fn test_add_class_skips_existing_tokens() {
        let doc = Document::from(r#"<li class=" item  active"></li>"#);
        let li = doc.select("li").nodes()[0].clone();

        add_class(&li, "active  open\tselected");

        assert_eq!(class_of(&li).as_deref(), Some("item active open selected"));
    }

    #[test]
    fn test_add_then_remove_round_trips_tokens() {
        let doc = Document::from(r#"<div class="base"></div>"#);
        let div = doc.select("div").nodes()[0].clone();

        add_class(&div, "extra");
        remove_class(&div, "extra");

        let class = class_of(&div).unwrap();
        assert_eq!(class, "base");
        assert!(class.split(' ').all(|t| !t.chars().any(char::is_whitespace)));
    }
}
