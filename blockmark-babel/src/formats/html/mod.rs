//! HTML format implementation
//!
//! Import only: markup is turned into blocks, never the other way round. Rendering blocks back to
//! plain HTML is the platform's job.
//!
//! # Library Choice
//!
//! We use the `html5ever` + `markup5ever_rcdom` ecosystem for parsing:
//! - `html5ever`: Browser-grade HTML5 parser from the Servo project
//! - `markup5ever_rcdom`: Reference-counted DOM tree implementation
//!
//! The parser handles malformed markup the way browsers do, which matters for hand-written
//! templates. It also lowercases every tag and attribute name, so `<TemplatePart tagName="x">`
//! arrives as `templatepart` with a `tagname` attribute.
//!
//! # Element Mapping
//!
//! | Markup                      | Block                                                      |
//! |-----------------------------|------------------------------------------------------------|
//! | Registered custom element   | The handler's block type and the attributes it extracts    |
//! | Any other element           | `universal/element` with `tagName` + every attribute       |
//! | `style="..."`               | `data-style` attribute (the `style` key never appears)     |
//! | Text, comments, doctype     | Skipped                                                    |
//!
//! A registered custom element may be written self-closing (`<Pattern slug="a" />`). HTML ignores
//! `/>` on non-void elements, so those tags are expanded to an explicit pair before parsing.

mod parser;
mod self_closing;

pub use parser::{dom_to_blocks, element_to_block, html_to_blocks, nodes_to_blocks};

use crate::block::Block;
use crate::error::FormatError;
use crate::format::{ConversionContext, Format};

/// Format implementation for HTML markup
#[derive(Debug, Default)]
pub struct HtmlFormat;

impl Format for HtmlFormat {
    fn name(&self) -> &str {
        "html"
    }

    fn description(&self) -> &str {
        "HTML templates with custom elements"
    }

    fn file_extensions(&self) -> &[&str] {
        &["html", "htm"]
    }

    fn supports_parsing(&self) -> bool {
        true
    }

    fn parse(&self, source: &str, ctx: &ConversionContext) -> Result<Vec<Block>, FormatError> {
        html_to_blocks(source, ctx.handlers)
    }
}
