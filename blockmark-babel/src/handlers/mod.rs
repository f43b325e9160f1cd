//! Custom element handlers
//!
//!     A custom element is a markup tag with its own block type, e.g. `<Pattern slug="hero">` for
//!     `core/pattern`. Each handler translates in both directions:
//!     - `to_block`: element → block. The handler picks the attributes it understands; anything
//!       else on the element, children included, is dropped.
//!     - `to_html`: block → markup fragment. Handlers write plain tags rather than block comments,
//!       so custom elements keep their own surface syntax.
//!
//!     The set of handlers is closed: [`CustomElement`] enumerates every one of them and a
//!     [`HandlerRegistry`] indexes the enabled subset by tag name and by block type.
//!
//! | Handler      | Tag              | Block type           | Attributes (markup ⇄ block)                         |
//! |--------------|------------------|----------------------|-----------------------------------------------------|
//! | Pattern      | `<Pattern>`      | `core/pattern`       | slug (required), class ⇄ className                  |
//! | TemplatePart | `<TemplatePart>` | `core/template-part` | slug (required), theme, area, tagName, class ⇄ className |
//! | Navigation   | `<Navigation>`   | `core/navigation`    | ref (post id), overlayMenu, class ⇄ className       |

mod navigation;
mod pattern;
pub mod registry;
mod template_part;

pub use registry::{HandlerRegistry, HandlerRegistryBuilder};

use crate::block::Block;
use crate::codec::escape_attribute_value;
use crate::dom::MarkupNode;
use crate::error::FormatError;
use serde_json::Value;

/// Every custom element translator known to the crate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CustomElement {
    Pattern,
    TemplatePart,
    Navigation,
}

impl CustomElement {
    pub const ALL: [CustomElement; 3] = [
        CustomElement::Pattern,
        CustomElement::TemplatePart,
        CustomElement::Navigation,
    ];

    /// Configuration name of the handler
    pub fn name(self) -> &'static str {
        match self {
            CustomElement::Pattern => "pattern",
            CustomElement::TemplatePart => "template-part",
            CustomElement::Navigation => "navigation",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|handler| handler.name() == name)
    }

    /// Tag name as written in markup
    pub fn tag_name(self) -> &'static str {
        match self {
            CustomElement::Pattern => "Pattern",
            CustomElement::TemplatePart => "TemplatePart",
            CustomElement::Navigation => "Navigation",
        }
    }

    pub fn block_type(self) -> &'static str {
        match self {
            CustomElement::Pattern => "core/pattern",
            CustomElement::TemplatePart => "core/template-part",
            CustomElement::Navigation => "core/navigation",
        }
    }

    /// Convert a markup element into this handler's block
    pub fn to_block<N: MarkupNode>(self, element: &N) -> Result<Block, FormatError> {
        let attributes = element.attributes();
        let mut block = match self {
            CustomElement::Pattern => pattern::to_block(&attributes)?,
            CustomElement::TemplatePart => template_part::to_block(&attributes)?,
            CustomElement::Navigation => navigation::to_block(&attributes)?,
        };
        block.block_type = self.block_type().to_string();
        Ok(block)
    }

    /// Render a block of this handler's type as a markup fragment
    pub fn to_html(self, block: &Block) -> Result<String, FormatError> {
        match self {
            CustomElement::Pattern => pattern::to_html(block),
            CustomElement::TemplatePart => template_part::to_html(block),
            CustomElement::Navigation => navigation::to_html(block),
        }
    }
}

/// Case-insensitive attribute lookup on a markup element
pub(crate) fn find_attribute<'a>(attributes: &'a [(String, String)], name: &str) -> Option<&'a str> {
    attributes
        .iter()
        .find(|(key, _)| key.eq_ignore_ascii_case(name))
        .map(|(_, value)| value.as_str())
}

/// Read a scalar block attribute as markup text.
///
/// Strings, numbers and booleans are accepted; any other JSON value is a handler error.
pub(crate) fn scalar_attribute(
    handler: CustomElement,
    block: &Block,
    key: &str,
) -> Result<Option<String>, FormatError> {
    match block.attributes.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(text)) => Ok(Some(text.clone())),
        Some(Value::Number(number)) => Ok(Some(number.to_string())),
        Some(Value::Bool(flag)) => Ok(Some(flag.to_string())),
        Some(other) => Err(FormatError::handler(
            handler.name(),
            format!("attribute '{key}' must be a scalar, found {other}"),
        )),
    }
}

/// Render `<Tag name="value" ...></Tag>` with every value escaped
pub(crate) fn render_element(tag: &str, attributes: &[(&str, String)]) -> String {
    let mut html = format!("<{tag}");
    for (name, value) in attributes {
        html.push_str(&format!(" {name}=\"{}\"", escape_attribute_value(value)));
    }
    html.push_str(&format!("></{tag}>"));
    html
}
