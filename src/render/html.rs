//! Owned element-tree builder and single-pass HTML serializer.
//!
//! Every page render rebuilds its whole subtree from the data. There is no
//! diffing and no reconciliation; with a dataset this small a full rebuild
//! is the documented design choice, not an oversight.

use std::fmt::Write as _;

use html_escape::{encode_double_quoted_attribute, encode_text};

const VOID_TAGS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

/// Child of an element: a nested element, escaped text, or nothing.
/// [`Node::Empty`] children are skipped silently on serialization.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Element(Element),
    Text(String),
    Empty,
}

impl Node {
    /// Keeps `node` only when `cond` holds.
    pub fn when(cond: bool, node: Node) -> Node {
        if cond {
            node
        } else {
            Node::Empty
        }
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

impl From<&str> for Node {
    fn from(text: &str) -> Self {
        Node::Text(text.to_string())
    }
}

impl From<String> for Node {
    fn from(text: String) -> Self {
        Node::Text(text)
    }
}

/// An element under construction. Build with [`el`], serialize with
/// [`Element::to_html`].
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    tag: String,
    attrs: Vec<(String, String)>,
    children: Vec<Node>,
}

/// Builds an element from a tag name, `(name, value)` attribute pairs and a
/// list of children. Repeated `class` entries merge into one space-separated
/// attribute; an empty value marks a bare boolean attribute (`selected`,
/// `open`).
pub fn el(tag: &str, attrs: &[(&str, &str)], children: Vec<Node>) -> Element {
    let mut element = Element {
        tag: tag.to_string(),
        attrs: Vec::with_capacity(attrs.len()),
        children,
    };
    for (name, value) in attrs {
        element.set_attr(name, value);
    }
    element
}

impl Element {
    fn set_attr(&mut self, name: &str, value: &str) {
        if name == "class" {
            if let Some((_, existing)) = self.attrs.iter_mut().find(|(n, _)| n == "class") {
                existing.push(' ');
                existing.push_str(value);
                return;
            }
        }
        self.attrs.push((name.to_string(), value.to_string()));
    }

    /// The value of an attribute, if set.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Serializes the tree in one pass. Text children are escaped, attribute
    /// values are double-quoted and escaped, void elements take no closing
    /// tag.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write(&mut out);
        out
    }

    fn write(&self, out: &mut String) {
        out.push('<');
        out.push_str(&self.tag);
        for (name, value) in &self.attrs {
            out.push(' ');
            out.push_str(name);
            if !value.is_empty() {
                let _ = write!(out, "=\"{}\"", encode_double_quoted_attribute(value));
            }
        }
        out.push('>');
        if VOID_TAGS.contains(&self.tag.as_str()) {
            return;
        }
        for child in &self.children {
            match child {
                Node::Element(element) => element.write(out),
                Node::Text(text) => out.push_str(&encode_text(text)),
                Node::Empty => {}
            }
        }
        let _ = write!(out, "</{}>", self.tag);
    }
}
