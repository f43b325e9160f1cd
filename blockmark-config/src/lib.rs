//! Shared configuration loader for the blockmark toolchain.
//!
//! `defaults/blockmark.default.toml` is embedded into every binary so that docs and
//! runtime behavior stay in sync. Applications layer user-specific files on top
//! of those defaults via [`Loader`] before deserializing into [`BlockmarkConfig`].

use blockmark_babel::{Destination, EscapePolicy, HandlerRegistry, RegistryError};
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/blockmark.default.toml");

/// File picked up from the working directory when present.
pub const LOCAL_CONFIG_FILE: &str = "blockmark.toml";

/// Top-level configuration consumed by blockmark applications.
#[derive(Debug, Clone, Deserialize)]
pub struct BlockmarkConfig {
    pub handlers: HandlersConfig,
    pub convert: ConvertConfig,
    pub pattern: PatternConfig,
}

/// Which custom elements are translated.
#[derive(Debug, Clone, Deserialize)]
pub struct HandlersConfig {
    #[serde(default)]
    pub enabled: Vec<String>,
}

impl HandlersConfig {
    /// Build the handler registry for the enabled names.
    ///
    /// Unknown or repeated names are configuration errors.
    pub fn registry(&self) -> Result<HandlerRegistry, RegistryError> {
        HandlerRegistry::from_names(self.enabled.as_slice())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ConvertConfig {
    pub destination: Destination,
}

impl ConvertConfig {
    pub fn escape_policy(&self) -> EscapePolicy {
        self.destination.escape_policy()
    }
}

/// Pattern registration header written in front of converted files.
#[derive(Debug, Clone, Deserialize)]
pub struct PatternConfig {
    pub header: bool,
    pub namespace: String,
    #[serde(default)]
    pub categories: Vec<String>,
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (useful for CLI settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<BlockmarkConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<BlockmarkConfig, ConfigError> {
    Loader::new().build()
}
