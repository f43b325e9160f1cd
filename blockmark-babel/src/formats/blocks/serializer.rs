//! Block markup export (blocks → comment-delimited markup)
//!
//! Blocks without children are written as one self-closing delimiter, blocks with children as an
//! opener, the children one per line, and a closer. Blocks whose type belongs to a custom handler
//! are rendered by that handler instead. Top-level blocks are separated by a blank line.

use crate::block::{is_valid_block_type, Block};
use crate::codec::{attribute_segment, EscapePolicy};
use crate::error::FormatError;
use crate::handlers::HandlerRegistry;

const CHILD_SEPARATOR: &str = "\n";
const TOP_LEVEL_SEPARATOR: &str = "\n\n";

/// Serialize top-level blocks with one escaping policy for the whole tree
pub fn serialize_blocks(
    blocks: &[Block],
    handlers: &HandlerRegistry,
    policy: EscapePolicy,
) -> Result<String, FormatError> {
    join_blocks(blocks, handlers, policy, TOP_LEVEL_SEPARATOR)
}

/// Serialize a single block and its descendants
pub fn serialize_block(
    block: &Block,
    handlers: &HandlerRegistry,
    policy: EscapePolicy,
) -> Result<String, FormatError> {
    if !is_valid_block_type(&block.block_type) {
        return Err(FormatError::InvalidBlockType(block.block_type.clone()));
    }

    if let Some(handler) = handlers.lookup_by_block_type(&block.block_type) {
        return handler.to_html(block);
    }

    let block_type = &block.block_type;
    let attributes = attribute_segment(&block.attributes, policy)?;

    if block.is_void() {
        return Ok(format!("<!-- wp:{block_type}{attributes} /-->"));
    }

    let children = join_blocks(&block.children, handlers, policy, CHILD_SEPARATOR)?;
    Ok(format!(
        "<!-- wp:{block_type}{attributes} -->\n{children}\n<!-- /wp:{block_type} -->"
    ))
}

fn join_blocks(
    blocks: &[Block],
    handlers: &HandlerRegistry,
    policy: EscapePolicy,
    separator: &str,
) -> Result<String, FormatError> {
    let rendered = blocks
        .iter()
        .map(|block| serialize_block(block, handlers, policy))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(rendered.join(separator))
}
