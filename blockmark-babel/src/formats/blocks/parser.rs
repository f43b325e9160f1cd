//! Block markup import (comment-delimited markup → blocks)
//!
//! Recognizes the three delimiter shapes written by the serializer:
//!
//!     <!-- wp:type {attributes} /-->     self-closing
//!     <!-- wp:type {attributes} -->      opener
//!     <!-- /wp:type -->                  closer
//!
//! Anything between delimiters is freeform markup. It is handed to the HTML importer with the
//! same handler registry, which is how `<Pattern ...></Pattern>` fragments written by custom
//! handlers come back as their blocks. Ordinary comments stay part of the freeform text.

use crate::block::{is_valid_block_type, Block};
use crate::codec::{decode_block_attributes, EscapePolicy};
use crate::error::FormatError;
use crate::formats::html::html_to_blocks;
use crate::handlers::HandlerRegistry;

const COMMENT_OPEN: &str = "<!--";
const COMMENT_CLOSE: &str = "-->";

#[derive(Debug, PartialEq)]
enum Delimiter<'a> {
    Opener {
        block_type: &'a str,
        attributes: Option<&'a str>,
        void: bool,
    },
    Closer {
        block_type: &'a str,
    },
}

/// Classify the text between `<!--` and `-->`. Plain comments yield `None`.
fn parse_delimiter(comment: &str) -> Option<Delimiter<'_>> {
    let body = comment.trim();

    if let Some(rest) = body.strip_prefix("/wp:") {
        let block_type = rest.trim();
        return is_valid_block_type(block_type).then_some(Delimiter::Closer { block_type });
    }

    let rest = body.strip_prefix("wp:")?;
    let (rest, void) = match rest.strip_suffix('/') {
        Some(rest) => (rest.trim_end(), true),
        None => (rest, false),
    };
    let (block_type, attributes) = match rest.find(char::is_whitespace) {
        Some(index) => (&rest[..index], Some(rest[index..].trim())),
        None => (rest, None),
    };
    if !is_valid_block_type(block_type) {
        return None;
    }

    Some(Delimiter::Opener {
        block_type,
        attributes: attributes.filter(|text| !text.is_empty()),
        void,
    })
}

struct BlockParser<'a> {
    handlers: &'a HandlerRegistry,
    policy: EscapePolicy,
    open: Vec<Block>,
    output: Vec<Block>,
    freeform: String,
}

impl<'a> BlockParser<'a> {
    fn new(handlers: &'a HandlerRegistry, policy: EscapePolicy) -> Self {
        Self {
            handlers,
            policy,
            open: Vec::new(),
            output: Vec::new(),
            freeform: String::new(),
        }
    }

    fn attach(&mut self, block: Block) {
        match self.open.last_mut() {
            Some(parent) => parent.push_child(block),
            None => self.output.push(block),
        }
    }

    fn flush_freeform(&mut self) -> Result<(), FormatError> {
        if self.freeform.trim().is_empty() {
            self.freeform.clear();
            return Ok(());
        }
        let blocks = html_to_blocks(&self.freeform, self.handlers)?;
        self.freeform.clear();
        for block in blocks {
            self.attach(block);
        }
        Ok(())
    }

    fn apply(&mut self, delimiter: Delimiter<'_>) -> Result<(), FormatError> {
        match delimiter {
            Delimiter::Opener {
                block_type,
                attributes,
                void,
            } => {
                let mut block = Block::new(block_type);
                if let Some(encoded) = attributes {
                    block.attributes = decode_block_attributes(encoded, self.policy)?;
                }
                if void {
                    self.attach(block);
                } else {
                    self.open.push(block);
                }
            }
            Delimiter::Closer { block_type } => {
                let block = self.open.pop().ok_or_else(|| {
                    FormatError::ParseError(format!(
                        "Closing delimiter for '{block_type}' has no matching opener"
                    ))
                })?;
                if block.block_type != block_type {
                    return Err(FormatError::ParseError(format!(
                        "Closing delimiter for '{block_type}' does not match open block '{}'",
                        block.block_type
                    )));
                }
                self.attach(block);
            }
        }
        Ok(())
    }

    fn finish(self) -> Result<Vec<Block>, FormatError> {
        if let Some(block) = self.open.last() {
            return Err(FormatError::ParseError(format!(
                "Block '{}' is never closed",
                block.block_type
            )));
        }
        Ok(self.output)
    }
}

/// Parse comment-delimited block markup into top-level blocks.
///
/// `policy` must match the one the markup was serialized with.
pub fn parse_block_markup(
    source: &str,
    handlers: &HandlerRegistry,
    policy: EscapePolicy,
) -> Result<Vec<Block>, FormatError> {
    if source.trim().is_empty() {
        return Ok(Vec::new());
    }

    let mut parser = BlockParser::new(handlers, policy);
    let mut rest = source;

    while let Some(start) = rest.find(COMMENT_OPEN) {
        let body_start = start + COMMENT_OPEN.len();
        let Some(body_len) = rest[body_start..].find(COMMENT_CLOSE) else {
            break;
        };
        let consumed = body_start + body_len + COMMENT_CLOSE.len();

        match parse_delimiter(&rest[body_start..body_start + body_len]) {
            Some(delimiter) => {
                parser.freeform.push_str(&rest[..start]);
                parser.flush_freeform()?;
                parser.apply(delimiter)?;
            }
            None => parser.freeform.push_str(&rest[..consumed]),
        }
        rest = &rest[consumed..];
    }

    parser.freeform.push_str(rest);
    parser.flush_freeform()?;
    parser.finish()
}
