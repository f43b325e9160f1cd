//! Attribute codec
//!
//!     Every attribute value that leaves this crate goes through here, so the escaping rules
//!     cannot drift between the generic encoder and the custom element handlers.
//!
//!     There are two surfaces:
//!     - Tag attributes, written by handlers as `name="value"`. Values are entity escaped with
//!       [`escape_attribute_value`].
//!     - Block attributes, written as a JSON object inside a `<!-- wp:... -->` comment. The object
//!       is produced by `serde_json` through [`CommentSafeFormatter`], which keeps the text valid
//!       JSON while making sure it can never close the comment or be mistaken for markup.
//!
//!     Block attributes also honour an [`EscapePolicy`]. Content destinations store markup that is
//!     unslashed once more before use, so their backslashes are doubled.

use crate::block::{Attributes, TAG_NAME_KEY};
use crate::error::FormatError;
use serde::{Deserialize, Serialize};
use serde_json::ser::{CharEscape, CompactFormatter, Formatter};
use serde_json::Value;
use std::borrow::Cow;
use std::io;

pub const STYLE_ATTRIBUTE: &str = "style";

/// Inline styles live under this key in block attributes. A literal `style` attribute breaks the
/// editor's live preview, so it is never written back out.
pub const DATA_STYLE_ATTRIBUTE: &str = "data-style";

/// A markup attribute literally named `tagName` is kept under this key, so it cannot replace the
/// tag name of a universal element.
pub const DATA_TAG_NAME_ATTRIBUTE: &str = "data-tagName";

/// Escape a value for a double-quoted markup attribute.
///
/// `&` is replaced first so the entities produced for the other characters are not encoded twice.
pub fn escape_attribute_value(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Name under which a markup attribute is stored in a generic attribute bag
pub fn attribute_key(name: &str) -> &str {
    if name.eq_ignore_ascii_case(STYLE_ATTRIBUTE) {
        DATA_STYLE_ATTRIBUTE
    } else if name == TAG_NAME_KEY {
        DATA_TAG_NAME_ATTRIBUTE
    } else {
        name
    }
}

/// Build a generic attribute bag from markup attributes, in document order.
///
/// `style` is moved to `data-style`. Everything else, templating directives included, is carried
/// over untouched. When an element has both `style` and `data-style`, the later one wins.
pub fn attribute_bag(attributes: &[(String, String)]) -> Attributes {
    let mut bag = Attributes::new();
    extend_attribute_bag(&mut bag, attributes);
    bag
}

pub(crate) fn extend_attribute_bag(bag: &mut Attributes, attributes: &[(String, String)]) {
    for (name, value) in attributes {
        bag.insert(
            attribute_key(name).to_string(),
            Value::String(value.clone()),
        );
    }
}

/// How backslashes in encoded block attributes are written
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EscapePolicy {
    /// JSON text is embedded as-is
    #[default]
    Single,
    /// Every backslash of the JSON text is escaped once more
    DoubleBackslashes,
}

impl EscapePolicy {
    pub fn doubles_backslashes(self) -> bool {
        self == EscapePolicy::DoubleBackslashes
    }
}

impl From<bool> for EscapePolicy {
    fn from(double_escape: bool) -> Self {
        if double_escape {
            EscapePolicy::DoubleBackslashes
        } else {
            EscapePolicy::Single
        }
    }
}

/// Where serialized block markup ends up
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Destination {
    /// Post content and patterns, which may embed escaped code samples
    #[default]
    Content,
    /// Page-level templates holding only structural content
    Page,
}

impl Destination {
    pub fn name(self) -> &'static str {
        match self {
            Destination::Content => "content",
            Destination::Page => "page",
        }
    }

    pub fn escape_policy(self) -> EscapePolicy {
        match self {
            Destination::Content => EscapePolicy::DoubleBackslashes,
            Destination::Page => EscapePolicy::Single,
        }
    }
}

impl From<Destination> for EscapePolicy {
    fn from(destination: Destination) -> Self {
        destination.escape_policy()
    }
}

/// Compact JSON formatter whose output is safe inside an HTML comment.
///
/// Quotes inside strings become `\u0022`, `<`, `>` and `&` become their `\u` forms and every
/// `--` pair becomes `\u002d\u002d`.
#[derive(Debug, Clone, Copy, Default)]
pub struct CommentSafeFormatter;

impl Formatter for CommentSafeFormatter {
    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        let bytes = fragment.as_bytes();
        let mut start = 0;
        let mut index = 0;
        while index < bytes.len() {
            let replacement = match bytes[index] {
                b'<' => Some((b"\\u003c".as_slice(), 1)),
                b'>' => Some((b"\\u003e".as_slice(), 1)),
                b'&' => Some((b"\\u0026".as_slice(), 1)),
                b'-' if bytes.get(index + 1) == Some(&b'-') => {
                    Some((b"\\u002d\\u002d".as_slice(), 2))
                }
                _ => None,
            };
            match replacement {
                Some((escaped, width)) => {
                    writer.write_all(&bytes[start..index])?;
                    writer.write_all(escaped)?;
                    index += width;
                    start = index;
                }
                None => index += 1,
            }
        }
        writer.write_all(&bytes[start..])
    }

    fn write_char_escape<W>(&mut self, writer: &mut W, char_escape: CharEscape) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        match char_escape {
            CharEscape::Quote => writer.write_all(b"\\u0022"),
            other => CompactFormatter.write_char_escape(writer, other),
        }
    }
}

/// Encode a block attribute object as comment-safe JSON text
pub fn encode_block_attributes(
    attributes: &Attributes,
    policy: EscapePolicy,
) -> Result<String, FormatError> {
    let mut output = Vec::new();
    let mut serializer = serde_json::Serializer::with_formatter(&mut output, CommentSafeFormatter);
    attributes.serialize(&mut serializer).map_err(|e| {
        FormatError::SerializationError(format!("Attribute encoding failed: {e}"))
    })?;

    let json = String::from_utf8(output)
        .map_err(|e| FormatError::SerializationError(format!("UTF-8 conversion failed: {e}")))?;

    Ok(match policy {
        EscapePolicy::Single => json,
        EscapePolicy::DoubleBackslashes => json.replace('\\', "\\\\"),
    })
}

/// The attribute segment of a block delimiter: empty, or a space followed by the encoded object
pub fn attribute_segment(
    attributes: &Attributes,
    policy: EscapePolicy,
) -> Result<String, FormatError> {
    if attributes.is_empty() {
        return Ok(String::new());
    }
    Ok(format!(" {}", encode_block_attributes(attributes, policy)?))
}

/// Decode block attribute text written by [`encode_block_attributes`] under the same policy
pub fn decode_block_attributes(
    encoded: &str,
    policy: EscapePolicy,
) -> Result<Attributes, FormatError> {
    let json = match policy {
        EscapePolicy::Single => Cow::Borrowed(encoded),
        EscapePolicy::DoubleBackslashes => Cow::Owned(encoded.replace("\\\\", "\\")),
    };

    match serde_json::from_str::<Value>(&json) {
        Ok(Value::Object(attributes)) => Ok(attributes),
        Ok(other) => Err(FormatError::ParseError(format!(
            "Block attributes must be a JSON object, found {other}"
        ))),
        Err(e) => Err(FormatError::ParseError(format!(
            "Invalid block attributes '{encoded}': {e}"
        ))),
    }
}
