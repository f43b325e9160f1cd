//! `<TemplatePart>` ⇄ `core/template-part`

use super::{find_attribute, render_element, scalar_attribute, CustomElement};
use crate::block::Block;
use crate::error::FormatError;

const HANDLER: CustomElement = CustomElement::TemplatePart;

/// (markup attribute, block attribute) in output order, after the slug
const OPTIONAL_ATTRIBUTES: [(&str, &str); 4] = [
    ("theme", "theme"),
    ("area", "area"),
    ("tagName", "tagName"),
    ("class", "className"),
];

pub(super) fn to_block(attributes: &[(String, String)]) -> Result<Block, FormatError> {
    let slug = find_attribute(attributes, "slug")
        .ok_or_else(|| FormatError::handler(HANDLER.name(), "missing required 'slug' attribute"))?;

    let mut block = Block::new(HANDLER.block_type()).with_attribute("slug", slug);
    for (markup_name, block_key) in OPTIONAL_ATTRIBUTES {
        if let Some(value) = find_attribute(attributes, markup_name) {
            block = block.with_attribute(block_key, value);
        }
    }
    Ok(block)
}

pub(super) fn to_html(block: &Block) -> Result<String, FormatError> {
    let slug = scalar_attribute(HANDLER, block, "slug")?
        .ok_or_else(|| FormatError::handler(HANDLER.name(), "block has no 'slug' attribute"))?;

    let mut attributes = vec![("slug", slug)];
    for (markup_name, block_key) in OPTIONAL_ATTRIBUTES {
        if let Some(value) = scalar_attribute(HANDLER, block, block_key)? {
            attributes.push((markup_name, value));
        }
    }
    Ok(render_element(HANDLER.tag_name(), &attributes))
}
