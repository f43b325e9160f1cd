//! Error types for conversion and registry operations

/// Errors that can occur while converting between markup and blocks
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FormatError {
    /// Format not found in registry
    #[error("Format '{0}' not found")]
    FormatNotFound(String),
    /// Error during parsing
    #[error("Parse error: {0}")]
    ParseError(String),
    /// Error during serialization
    #[error("Serialization error: {0}")]
    SerializationError(String),
    /// Format does not support the requested direction
    #[error("Operation not supported: {0}")]
    NotSupported(String),
    /// A custom element handler rejected its input
    #[error("Handler '{handler}' failed: {message}")]
    Handler {
        handler: &'static str,
        message: String,
    },
    /// The block type cannot be written as a delimiter
    #[error("Invalid block type '{0}'")]
    InvalidBlockType(String),
}

impl FormatError {
    pub(crate) fn handler(handler: &'static str, message: impl Into<String>) -> Self {
        FormatError::Handler {
            handler,
            message: message.into(),
        }
    }
}

/// Configuration errors raised while assembling a [`crate::HandlerRegistry`]
///
/// These are startup failures; a registry that was built successfully never
/// produces them again.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    #[error("a handler for tag <{0}> is already registered")]
    DuplicateTag(String),
    #[error("unknown custom element handler '{0}'")]
    UnknownHandler(String),
}
