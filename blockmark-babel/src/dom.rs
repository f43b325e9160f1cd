//! Markup tree input boundary
//!
//! Conversions never parse markup themselves. They walk any tree that implements [`MarkupNode`],
//! and the crate ships an implementation for the `html5ever` + `markup5ever_rcdom` DOM.

use html5ever::tendril::TendrilSink;
use html5ever::{parse_document, ParseOpts};
use markup5ever_rcdom::{Handle, NodeData, RcDom};

/// A node of a parsed markup tree
pub trait MarkupNode: Sized {
    /// Tag name as supplied by the parser, or `None` for text, comments and other non-elements
    fn element_name(&self) -> Option<String>;

    /// Attributes in document order. Empty for non-elements.
    fn attributes(&self) -> Vec<(String, String)>;

    /// Child nodes in document order
    fn child_nodes(&self) -> Vec<Self>;
}

impl MarkupNode for Handle {
    fn element_name(&self) -> Option<String> {
        match &self.data {
            NodeData::Element { name, .. } => Some(name.local.to_string()),
            _ => None,
        }
    }

    fn attributes(&self) -> Vec<(String, String)> {
        match &self.data {
            NodeData::Element { attrs, .. } => attrs
                .borrow()
                .iter()
                .map(|attr| (attr.name.local.to_string(), attr.value.to_string()))
                .collect(),
            _ => Vec::new(),
        }
    }

    fn child_nodes(&self) -> Vec<Self> {
        // <template> keeps its content in a separate fragment
        if let NodeData::Element {
            template_contents, ..
        } = &self.data
        {
            if let Some(contents) = template_contents.borrow().as_ref() {
                return contents.children.borrow().clone();
            }
        }
        self.children.borrow().clone()
    }
}

/// A markup document parsed with html5ever
pub struct HtmlDocument {
    dom: RcDom,
}

impl HtmlDocument {
    pub fn parse(source: &str) -> Self {
        let opts = ParseOpts::default();
        let dom = parse_document(RcDom::default(), opts).one(source);
        Self { dom }
    }

    /// Nodes that make up the author's markup.
    ///
    /// The tree builder always synthesizes `<html>`, `<head>` and `<body>` and hoists metadata
    /// elements such as `<link>` or `<title>` into the head, so the head's children come first,
    /// followed by the body's. The wrappers themselves are never blocks: attributes written on an
    /// explicit `<html>` or `<body>` tag are not carried over.
    pub fn top_level_nodes(&self) -> Vec<Handle> {
        let mut nodes = Vec::new();
        for child in self.dom.document.children.borrow().iter() {
            if child.element_name().as_deref() != Some("html") {
                continue;
            }
            for section in child.children.borrow().iter() {
                if matches!(section.element_name().as_deref(), Some("head" | "body")) {
                    nodes.extend(section.children.borrow().iter().cloned());
                }
            }
        }
        nodes
    }
}
