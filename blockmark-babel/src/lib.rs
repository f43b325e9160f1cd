//! Conversion between HTML templates and comment-delimited block documents
//!
//!     This crate turns hand-written HTML, sprinkled with a few custom elements, into the block
//!     trees a block editor stores, and writes those trees back out as comment-delimited block
//!     markup. It is a pure lib: it powers blockmark-cli but supposes no shell environment, prints
//!     nothing and logs nothing. Failures are returned, never reported.
//!
//! Architecture
//!
//!     Every conversion goes through the Block tree (./block.rs): a type, an ordered attribute bag
//!     and ordered children. Formats only convert between their text and that tree.
//!
//!     The file structure :
//!     .
//!     ├── block.rs                # Block, the canonical node
//!     ├── codec.rs                # Attribute escaping, style rewrite, comment-safe JSON
//!     ├── dom.rs                  # MarkupNode input boundary + html5ever document
//!     ├── error.rs
//!     ├── format.rs               # Format trait + ConversionContext
//!     ├── registry.rs             # FormatRegistry for discovery and selection
//!     ├── handlers
//!     │   ├── <element>.rs        # One custom element translator each
//!     │   └── registry.rs         # HandlerRegistry, immutable once built
//!     └── formats
//!         ├── html                # markup → blocks
//!         ├── blocks              # blocks ⇄ block markup
//!         └── json                # blocks ⇄ JSON
//!
//! Custom Elements
//!
//!     A small closed set of elements (`<Pattern>`, `<TemplatePart>`, `<Navigation>`) map to
//!     dedicated block types in both directions. Which of them are active is decided by the host
//!     when it builds the HandlerRegistry; everything else becomes a `universal/element` block.
//!     The registry is built once, never mutated, and handed to each conversion through a
//!     ConversionContext, so any number of conversions may share it across threads.
//!
//! Escaping
//!
//!     Attribute bags are embedded as JSON inside markup comments. The JSON is written so that it
//!     can never close the comment, and backslashes are optionally doubled depending on where the
//!     markup is headed (see codec::Destination). The same policy must be used to read it back.
//!
//! Testing
//!     tests
//!     ├── lib.rs
//!     ├── <format>
//!     │   ├── mod.rs
//!     │   └── <testname>.rs
//!     └── fixtures
//!         └── <docname>.html
//!
//!     Note that rust does not by default discover tests in subdirectories, so we need to include these
//!     in the mod.
//!
pub mod block;
pub mod codec;
pub mod dom;
pub mod error;
pub mod format;
pub mod formats;
pub mod handlers;
pub mod registry;

pub use block::{Attributes, Block, UNIVERSAL_ELEMENT};
pub use codec::{Destination, EscapePolicy};
pub use error::{FormatError, RegistryError};
pub use format::{ConversionContext, Format};
pub use handlers::{CustomElement, HandlerRegistry};
pub use registry::FormatRegistry;

/// Parses HTML text into top-level blocks.
///
/// Blank input yields an empty list.
pub fn html_to_blocks(source: &str, handlers: &HandlerRegistry) -> Result<Vec<Block>, FormatError> {
    formats::html::html_to_blocks(source, handlers)
}

/// Serializes blocks to block markup.
///
/// `double_escape` selects the backslash policy for the whole tree; pass a [`Destination`] or an
/// [`EscapePolicy`] for clarity, or a plain `bool`.
pub fn serialize_blocks(
    blocks: &[Block],
    handlers: &HandlerRegistry,
    double_escape: impl Into<EscapePolicy>,
) -> Result<String, FormatError> {
    formats::blocks::serialize_blocks(blocks, handlers, double_escape.into())
}

/// Parses block markup back into blocks, undoing the given escaping policy.
pub fn parse_block_markup(
    source: &str,
    handlers: &HandlerRegistry,
    double_escape: impl Into<EscapePolicy>,
) -> Result<Vec<Block>, FormatError> {
    formats::blocks::parse_block_markup(source, handlers, double_escape.into())
}
