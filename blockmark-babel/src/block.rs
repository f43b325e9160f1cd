//! The Block tree
//!
//! A [`Block`] is the canonical structured node shared by every conversion
//! direction: a type name, an ordered attribute object and ordered children.
//! Block trees are plain owned values; each conversion builds its own.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Ordered attribute object carried by a block.
///
/// Key order is insertion order (`serde_json` is built with `preserve_order`).
pub type Attributes = Map<String, Value>;

/// Block type used for every element that has no custom handler.
pub const UNIVERSAL_ELEMENT: &str = "universal/element";

/// Attribute key holding the original tag name of a universal element.
pub const TAG_NAME_KEY: &str = "tagName";

/// Whether a type name can be written as a block delimiter and read back.
///
/// The name must be non-empty and free of whitespace. It must not end in `/`, which reads as the
/// self-closing marker, and must not contain `--`, which could end the comment.
pub fn is_valid_block_type(name: &str) -> bool {
    !name.is_empty()
        && !name.contains(char::is_whitespace)
        && !name.ends_with('/')
        && !name.contains("--")
}

/// One layout unit of a block document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    #[serde(rename = "type")]
    pub block_type: String,
    #[serde(default)]
    pub attributes: Attributes,
    #[serde(default)]
    pub children: Vec<Block>,
}

impl Block {
    /// Create a block with no attributes and no children
    pub fn new(block_type: impl Into<String>) -> Self {
        Self {
            block_type: block_type.into(),
            attributes: Attributes::new(),
            children: Vec::new(),
        }
    }

    /// Create a universal element block for the given tag
    pub fn element(tag_name: impl Into<String>) -> Self {
        let tag_name: String = tag_name.into();
        Self::new(UNIVERSAL_ELEMENT).with_attribute(TAG_NAME_KEY, tag_name)
    }

    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    pub fn with_children(mut self, children: Vec<Block>) -> Self {
        self.children = children;
        self
    }

    pub fn push_child(&mut self, child: Block) {
        self.children.push(child);
    }

    /// Serialized as a single self-closing delimiter when true
    pub fn is_void(&self) -> bool {
        self.children.is_empty()
    }

    pub fn is_universal_element(&self) -> bool {
        self.block_type == UNIVERSAL_ELEMENT
    }

    /// The original tag name of a universal element block
    pub fn tag_name(&self) -> Option<&str> {
        if !self.is_universal_element() {
            return None;
        }
        self.attributes.get(TAG_NAME_KEY).and_then(Value::as_str)
    }

    /// Look up a string-valued attribute
    pub fn attribute_str(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).and_then(Value::as_str)
    }
}
