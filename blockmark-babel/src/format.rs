//! Format trait definition
//!
//! This module defines the core Format trait that all format implementations must implement.
//! The trait provides a uniform interface for turning text into Block trees and back.

use crate::block::Block;
use crate::codec::EscapePolicy;
use crate::error::FormatError;
use crate::handlers::HandlerRegistry;

/// Everything a single conversion needs besides its input.
///
/// Passed explicitly to every parse and serialize call; there is no ambient registry.
#[derive(Debug, Clone, Copy)]
pub struct ConversionContext<'a> {
    pub handlers: &'a HandlerRegistry,
    pub escape: EscapePolicy,
}

impl<'a> ConversionContext<'a> {
    pub fn new(handlers: &'a HandlerRegistry) -> Self {
        Self {
            handlers,
            escape: EscapePolicy::default(),
        }
    }

    pub fn with_escape(mut self, escape: impl Into<EscapePolicy>) -> Self {
        self.escape = escape.into();
        self
    }
}

/// Trait for document formats
///
/// Implementors provide conversion between a string representation and a Block tree.
/// Formats can support parsing, serialization, or both.
///
/// # Examples
///
/// ```ignore
/// struct MyFormat;
///
/// impl Format for MyFormat {
///     fn name(&self) -> &str {
///         "my-format"
///     }
///
///     fn supports_parsing(&self) -> bool {
///         true
///     }
///
///     fn parse(&self, source: &str, ctx: &ConversionContext) -> Result<Vec<Block>, FormatError> {
///         // Parse source to blocks
///         todo!()
///     }
/// }
/// ```
pub trait Format: Send + Sync {
    /// The name of this format (e.g., "html", "blocks", "json")
    fn name(&self) -> &str;

    /// Optional description of this format
    fn description(&self) -> &str {
        ""
    }

    /// File extensions associated with this format, without the leading dot.
    ///
    /// Used for automatic format detection from filenames.
    fn file_extensions(&self) -> &[&str] {
        &[]
    }

    /// Whether this format supports parsing (source → blocks)
    fn supports_parsing(&self) -> bool {
        false
    }

    /// Whether this format supports serialization (blocks → source)
    fn supports_serialization(&self) -> bool {
        false
    }

    /// Parse source text into top-level blocks
    ///
    /// Default implementation returns NotSupported error.
    fn parse(&self, _source: &str, _ctx: &ConversionContext) -> Result<Vec<Block>, FormatError> {
        Err(FormatError::NotSupported(format!(
            "Format '{}' does not support parsing",
            self.name()
        )))
    }

    /// Serialize top-level blocks into source text
    ///
    /// Default implementation returns NotSupported error.
    fn serialize(&self, _blocks: &[Block], _ctx: &ConversionContext) -> Result<String, FormatError> {
        Err(FormatError::NotSupported(format!(
            "Format '{}' does not support serialization",
            self.name()
        )))
    }
}
