//! Handler registry
//!
//! Indexes the enabled custom element handlers by tag name (case-insensitive) and by block type
//! (exact). A registry is assembled once through [`HandlerRegistryBuilder`] and never changes
//! afterwards, so a single instance can be shared by reference across threads.

use super::CustomElement;
use crate::error::RegistryError;
use std::collections::HashMap;

/// Read-only lookup tables for custom element handlers
///
/// # Examples
///
/// ```ignore
/// let registry = HandlerRegistry::builder()
///     .register(CustomElement::Pattern)?
///     .build();
///
/// assert!(registry.lookup_by_tag("PATTERN").is_some());
/// assert!(registry.lookup_by_block_type("core/pattern").is_some());
/// ```
#[derive(Debug, Clone, Default)]
pub struct HandlerRegistry {
    by_tag: HashMap<String, CustomElement>,
    by_block_type: HashMap<String, CustomElement>,
}

impl HandlerRegistry {
    pub fn builder() -> HandlerRegistryBuilder {
        HandlerRegistryBuilder::default()
    }

    /// A registry with no custom elements; every tag takes the generic path
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a registry from a fixed set of handlers
    pub fn new(
        handlers: impl IntoIterator<Item = CustomElement>,
    ) -> Result<Self, RegistryError> {
        let mut builder = Self::builder();
        for handler in handlers {
            builder = builder.register(handler)?;
        }
        Ok(builder.build())
    }

    /// Create a registry with every built-in handler
    pub fn with_defaults() -> Result<Self, RegistryError> {
        Self::new(CustomElement::ALL)
    }

    /// Build a registry from handler names, as they appear in configuration
    pub fn from_names<S: AsRef<str>>(names: &[S]) -> Result<Self, RegistryError> {
        let handlers = names
            .iter()
            .map(|name| {
                let name = name.as_ref();
                CustomElement::from_name(name)
                    .ok_or_else(|| RegistryError::UnknownHandler(name.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(handlers)
    }

    /// Find the handler for a markup tag, ignoring case
    pub fn lookup_by_tag(&self, tag_name: &str) -> Option<CustomElement> {
        self.by_tag.get(&tag_name.to_lowercase()).copied()
    }

    /// Find the handler for a block type, matching exactly
    pub fn lookup_by_block_type(&self, block_type: &str) -> Option<CustomElement> {
        self.by_block_type.get(block_type).copied()
    }

    /// Registered handlers, sorted
    pub fn handlers(&self) -> Vec<CustomElement> {
        let mut handlers: Vec<_> = self.by_tag.values().copied().collect();
        handlers.sort();
        handlers
    }

    pub fn is_empty(&self) -> bool {
        self.by_tag.is_empty()
    }
}

/// Collects handlers and rejects duplicates before the registry is frozen
#[derive(Debug, Default)]
pub struct HandlerRegistryBuilder {
    registry: HandlerRegistry,
}

impl HandlerRegistryBuilder {
    /// Register a handler
    ///
    /// Fails if the handler is already registered. Every handler owns exactly one tag and one
    /// block type, so a taken tag also means a taken block type.
    pub fn register(mut self, handler: CustomElement) -> Result<Self, RegistryError> {
        let tag = handler.tag_name().to_lowercase();
        if self.registry.by_tag.contains_key(&tag) {
            return Err(RegistryError::DuplicateTag(tag));
        }

        self.registry.by_tag.insert(tag, handler);
        self.registry
            .by_block_type
            .insert(handler.block_type().to_string(), handler);
        Ok(self)
    }

    pub fn build(self) -> HandlerRegistry {
        self.registry
    }
}
