//! `<Navigation>` ⇄ `core/navigation`
//!
//! `ref` points at a stored navigation post, so it is carried as a JSON number.

use super::{find_attribute, render_element, scalar_attribute, CustomElement};
use crate::block::Block;
use crate::error::FormatError;

const HANDLER: CustomElement = CustomElement::Navigation;

pub(super) fn to_block(attributes: &[(String, String)]) -> Result<Block, FormatError> {
    let mut block = Block::new(HANDLER.block_type());

    if let Some(reference) = find_attribute(attributes, "ref") {
        let id: u64 = reference.trim().parse().map_err(|_| {
            FormatError::handler(
                HANDLER.name(),
                format!("'ref' must be a numeric post id, got '{reference}'"),
            )
        })?;
        block = block.with_attribute("ref", id);
    }
    if let Some(overlay) = find_attribute(attributes, "overlayMenu") {
        block = block.with_attribute("overlayMenu", overlay);
    }
    if let Some(class) = find_attribute(attributes, "class") {
        block = block.with_attribute("className", class);
    }
    Ok(block)
}

pub(super) fn to_html(block: &Block) -> Result<String, FormatError> {
    let mut attributes = Vec::new();
    if let Some(reference) = scalar_attribute(HANDLER, block, "ref")? {
        attributes.push(("ref", reference));
    }
    if let Some(overlay) = scalar_attribute(HANDLER, block, "overlayMenu")? {
        attributes.push(("overlayMenu", overlay));
    }
    if let Some(class) = scalar_attribute(HANDLER, block, "className")? {
        attributes.push(("class", class));
    }
    Ok(render_element(HANDLER.tag_name(), &attributes))
}
