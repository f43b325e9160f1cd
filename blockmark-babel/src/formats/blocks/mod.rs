//! Block markup format implementation
//!
//! The comment-delimited serialization the block editor stores:
//!
//! ```text
//! <!-- wp:core/group {"tagName":"main"} -->
//! <!-- wp:universal/element {"tagName":"img","src":"a.png"} /-->
//! <Pattern slug="hero"></Pattern>
//! <!-- /wp:core/group -->
//! ```
//!
//! Attribute bags are written as comment-safe JSON (see [`crate::codec`]). Whether backslashes in
//! that JSON are doubled depends on the destination, carried by the conversion context's
//! [`EscapePolicy`](crate::codec::EscapePolicy). Parsing must use the same policy as serializing.

mod parser;
mod serializer;

pub use parser::parse_block_markup;
pub use serializer::{serialize_block, serialize_blocks};

use crate::block::Block;
use crate::error::FormatError;
use crate::format::{ConversionContext, Format};

/// Format implementation for comment-delimited block markup
#[derive(Debug, Default)]
pub struct BlockMarkupFormat;

impl Format for BlockMarkupFormat {
    fn name(&self) -> &str {
        "blocks"
    }

    fn description(&self) -> &str {
        "Comment-delimited block editor markup"
    }

    fn file_extensions(&self) -> &[&str] {
        &["blocks"]
    }

    fn supports_parsing(&self) -> bool {
        true
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn parse(&self, source: &str, ctx: &ConversionContext) -> Result<Vec<Block>, FormatError> {
        parse_block_markup(source, ctx.handlers, ctx.escape)
    }

    fn serialize(&self, blocks: &[Block], ctx: &ConversionContext) -> Result<String, FormatError> {
        serialize_blocks(blocks, ctx.handlers, ctx.escape)
    }
}
