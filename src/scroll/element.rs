//! In-memory marker target.

use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

use super::marker::MarkerSink;
use crate::utils::html::escape_attr;

/// A detached element: tag name, attributes and class list.
///
/// Stands in for the document element when the annotator runs outside a
/// browser. Ordered collections keep rendering and JSON output stable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Element {
    pub tag: String,
    pub attributes: BTreeMap<String, String>,
    pub classes: BTreeSet<String>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Self::default()
        }
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    pub fn has_class(&self, name: &str) -> bool {
        self.classes.contains(name)
    }

    /// Render the opening tag, e.g. `<html class="at-top" data-x="1">`.
    pub fn open_tag(&self) -> String {
        let mut out = format!("<{}", self.tag);
        if !self.classes.is_empty() {
            let classes = self.classes.iter().map(String::as_str).collect::<Vec<_>>();
            out.push_str(&format!(" class=\"{}\"", escape_attr(&classes.join(" "))));
        }
        for (name, value) in &self.attributes {
            out.push_str(&format!(" {name}=\"{}\"", escape_attr(value)));
        }
        out.push('>');
        out
    }
}

impl MarkerSink for Element {
    fn set_attribute(&mut self, name: &str, value: &str) {
        self.attributes.insert(name.to_string(), value.to_string());
    }

    fn remove_attribute(&mut self, name: &str) {
        self.attributes.remove(name);
    }

    fn toggle_class(&mut self, name: &str, on: bool) {
        if on {
            self.classes.insert(name.to_string());
        } else {
            self.classes.remove(name);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_tag() {
        let mut element = Element::new("html");
        assert_eq!(element.open_tag(), "<html>");

        element.toggle_class("near-top", true);
        element.toggle_class("at-top", true);
        element.set_attribute("data-scroll-dir", "up");
        assert_eq!(
            element.open_tag(),
            r#"<html class="at-top near-top" data-scroll-dir="up">"#
        );
    }

    #[test]
    fn test_open_tag_escapes_values() {
        let mut element = Element::new("body");
        element.set_attribute("title", "a \"b\"");
        assert_eq!(element.open_tag(), r#"<body title="a &quot;b&quot;">"#);
    }

    #[test]
    fn test_toggle_and_remove_are_idempotent() {
        let mut element = Element::new("html");
        element.toggle_class("at-top", false);
        element.remove_attribute("data-at-top");
        assert_eq!(element, Element::new("html"));

        element.toggle_class("at-top", true);
        element.toggle_class("at-top", true);
        assert_eq!(element.classes.len(), 1);
    }
}
