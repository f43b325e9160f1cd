//! JSON dump of block trees
//!
//! Each block is an object with `type`, `attributes` and `children`, in that order. Useful for
//! inspecting what the HTML importer produced and for feeding blocks from other tools.

use crate::block::Block;
use crate::error::FormatError;
use crate::format::{ConversionContext, Format};

#[derive(Debug, Default)]
pub struct JsonFormat;

impl Format for JsonFormat {
    fn name(&self) -> &str {
        "json"
    }

    fn description(&self) -> &str {
        "Block trees as JSON"
    }

    fn file_extensions(&self) -> &[&str] {
        &["json"]
    }

    fn supports_parsing(&self) -> bool {
        true
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn parse(&self, source: &str, _ctx: &ConversionContext) -> Result<Vec<Block>, FormatError> {
        if source.trim().is_empty() {
            return Ok(Vec::new());
        }
        serde_json::from_str(source)
            .map_err(|e| FormatError::ParseError(format!("Invalid block JSON: {e}")))
    }

    fn serialize(&self, blocks: &[Block], _ctx: &ConversionContext) -> Result<String, FormatError> {
        serde_json::to_string_pretty(blocks)
            .map_err(|e| FormatError::SerializationError(e.to_string()))
    }
}
