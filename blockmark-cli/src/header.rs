//! Pattern registration header
//!
//! Converted markup can be dropped straight into a theme's `patterns/` directory when it starts
//! with the PHP doc block the platform reads pattern metadata from:
//!
//! ```text
//! <?php
//! /**
//!  * Title: Hero Banner
//!  * Slug: theme/hero-banner
//!  * Categories: featured, banner
//!  */
//! ?>
//! ```

use std::path::Path;

/// Extension used for files that carry a header
pub const HEADER_EXTENSION: &str = "php";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternHeader {
    pub title: String,
    pub slug: String,
    pub categories: Vec<String>,
}

impl PatternHeader {
    /// Header for a source file, derived from its stem.
    ///
    /// Returns `None` when the path has no usable file stem.
    pub fn for_path(path: &Path, namespace: &str, categories: &[String]) -> Option<Self> {
        let stem = path.file_stem()?.to_str()?;
        if stem.is_empty() {
            return None;
        }
        let slug = if namespace.is_empty() {
            stem.to_string()
        } else {
            format!("{namespace}/{stem}")
        };
        Some(Self {
            title: title_from_stem(stem),
            slug,
            categories: categories.to_vec(),
        })
    }

    pub fn render(&self) -> String {
        let mut header = String::from("<?php\n/**\n");
        header.push_str(&format!(" * Title: {}\n", self.title));
        header.push_str(&format!(" * Slug: {}\n", self.slug));
        if !self.categories.is_empty() {
            header.push_str(&format!(" * Categories: {}\n", self.categories.join(", ")));
        }
        header.push_str(" */\n?>\n");
        header
    }
}

/// `hero-banner` → `Hero Banner`
pub fn title_from_stem(stem: &str) -> String {
    stem.split(['-', '_', ' ', '.'])
        .filter(|word| !word.is_empty())
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
