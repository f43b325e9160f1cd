//! HTML import (markup → blocks)
//!
//! Depth-first walk over a markup tree. Elements with a registered custom handler become that
//! handler's block; every other element becomes a universal element block whose children are the
//! converted child elements. Text and comment nodes are not blocks and are skipped.

use crate::block::Block;
use super::self_closing::expand_self_closing;
use crate::codec::extend_attribute_bag;
use crate::dom::{HtmlDocument, MarkupNode};
use crate::error::FormatError;
use crate::handlers::HandlerRegistry;

/// Parse markup text and convert it into top-level blocks.
///
/// Blank input yields no blocks without running the parser. Self-closing custom elements such as
/// `<Pattern slug="a" />` are closed in place, so their following siblings stay siblings.
pub fn html_to_blocks(source: &str, handlers: &HandlerRegistry) -> Result<Vec<Block>, FormatError> {
    if source.trim().is_empty() {
        return Ok(Vec::new());
    }
    let source = expand_self_closing(source, handlers);
    let document = HtmlDocument::parse(&source);
    nodes_to_blocks(&document.top_level_nodes(), handlers)
}

/// Convert the element children of a tree root
pub fn dom_to_blocks<N: MarkupNode>(
    root: &N,
    handlers: &HandlerRegistry,
) -> Result<Vec<Block>, FormatError> {
    nodes_to_blocks(&root.child_nodes(), handlers)
}

/// Convert a sequence of sibling nodes, keeping document order
pub fn nodes_to_blocks<N: MarkupNode>(
    nodes: &[N],
    handlers: &HandlerRegistry,
) -> Result<Vec<Block>, FormatError> {
    let mut blocks = Vec::with_capacity(nodes.len());
    for node in nodes {
        if let Some(block) = element_to_block(node, handlers)? {
            blocks.push(block);
        }
    }
    Ok(blocks)
}

/// Convert one node. Non-element nodes yield `None`.
pub fn element_to_block<N: MarkupNode>(
    node: &N,
    handlers: &HandlerRegistry,
) -> Result<Option<Block>, FormatError> {
    let Some(tag) = node.element_name() else {
        return Ok(None);
    };
    let tag = tag.to_lowercase();

    if let Some(handler) = handlers.lookup_by_tag(&tag) {
        return handler.to_block(node).map(Some);
    }

    let mut block = Block::element(tag);
    extend_attribute_bag(&mut block.attributes, &node.attributes());
    block.children = nodes_to_blocks(&node.child_nodes(), handlers)?;
    Ok(Some(block))
}
