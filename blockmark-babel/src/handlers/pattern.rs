//! `<Pattern>` ⇄ `core/pattern`

use super::{find_attribute, render_element, scalar_attribute, CustomElement};
use crate::block::Block;
use crate::error::FormatError;

const HANDLER: CustomElement = CustomElement::Pattern;

pub(super) fn to_block(attributes: &[(String, String)]) -> Result<Block, FormatError> {
    let slug = find_attribute(attributes, "slug")
        .ok_or_else(|| FormatError::handler(HANDLER.name(), "missing required 'slug' attribute"))?;

    let mut block = Block::new(HANDLER.block_type()).with_attribute("slug", slug);
    if let Some(class) = find_attribute(attributes, "class") {
        block = block.with_attribute("className", class);
    }
    Ok(block)
}

pub(super) fn to_html(block: &Block) -> Result<String, FormatError> {
    let slug = scalar_attribute(HANDLER, block, "slug")?
        .ok_or_else(|| FormatError::handler(HANDLER.name(), "block has no 'slug' attribute"))?;

    let mut attributes = vec![("slug", slug)];
    if let Some(class) = scalar_attribute(HANDLER, block, "className")? {
        attributes.push(("class", class));
    }
    Ok(render_element(HANDLER.tag_name(), &attributes))
}
