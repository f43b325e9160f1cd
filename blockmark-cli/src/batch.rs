//! Converting one file or a whole directory tree
//!
//! A failed file never stops a directory run. Each failure is logged and counted, and the caller
//! decides the exit status from the returned summary.

use crate::header::{PatternHeader, HEADER_EXTENSION};
use anyhow::{bail, Context, Result};
use blockmark_babel::{ConversionContext, FormatError, FormatRegistry};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, error, info};

/// Settings for the pattern header, when one is written
#[derive(Debug, Clone)]
pub struct HeaderSettings {
    pub namespace: String,
    pub categories: Vec<String>,
}

/// One conversion job: source and target format plus what goes around the output
pub struct Conversion<'a> {
    pub formats: &'a FormatRegistry,
    pub ctx: ConversionContext<'a>,
    pub from: String,
    pub to: String,
    pub header: Option<HeaderSettings>,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BatchSummary {
    pub converted: usize,
    pub failed: usize,
}

impl<'a> Conversion<'a> {
    /// Convert source text, without any header
    pub fn convert_source(&self, source: &str) -> Result<String, FormatError> {
        let blocks = self.formats.parse(source, &self.from, &self.ctx)?;
        debug!(blocks = blocks.len(), from = %self.from, "parsed input");
        self.formats.serialize(&blocks, &self.to, &self.ctx)
    }

    /// Read and convert a file, prefixing the pattern header when configured
    pub fn convert_file(&self, path: &Path) -> Result<String> {
        let source = fs::read_to_string(path)
            .with_context(|| format!("Error reading file '{}'", path.display()))?;
        let converted = self
            .convert_source(&source)
            .with_context(|| format!("Error converting '{}'", path.display()))?;

        let mut output = String::new();
        if let Some(header) = self.pattern_header(path) {
            output.push_str(&header.render());
        }
        output.push_str(&converted);
        if !output.ends_with('\n') {
            output.push('\n');
        }
        Ok(output)
    }

    fn pattern_header(&self, path: &Path) -> Option<PatternHeader> {
        let settings = self.header.as_ref()?;
        PatternHeader::for_path(path, &settings.namespace, &settings.categories)
    }

    /// Extension for converted files in directory mode
    pub fn output_extension(&self) -> Result<String> {
        if self.header.is_some() {
            return Ok(HEADER_EXTENSION.to_string());
        }
        let format = self.formats.get(&self.to)?;
        Ok(format
            .file_extensions()
            .first()
            .map(|ext| ext.to_string())
            .unwrap_or_else(|| format.name().to_string()))
    }

    /// Convert every matching file under `input_dir` into `output_dir`, keeping relative paths
    pub fn convert_directory(&self, input_dir: &Path, output_dir: &Path) -> Result<BatchSummary> {
        let format = self.formats.get(&self.from)?;
        let extensions = format.file_extensions();
        if extensions.is_empty() {
            bail!("Format '{}' has no file extensions to match", self.from);
        }

        let inputs = collect_files(input_dir, extensions)
            .with_context(|| format!("Error reading directory '{}'", input_dir.display()))?;
        let extension = self.output_extension()?;
        info!(files = inputs.len(), input = %input_dir.display(), "converting directory");

        let mut summary = BatchSummary::default();
        for input in inputs {
            let target = output_path(input_dir, &input, output_dir, &extension)?;
            match self.convert_file(&input).and_then(|output| write_output(&target, &output)) {
                Ok(()) => {
                    debug!(input = %input.display(), output = %target.display(), "converted");
                    summary.converted += 1;
                }
                Err(err) => {
                    error!("{err:#}");
                    summary.failed += 1;
                }
            }
        }

        info!(
            converted = summary.converted,
            failed = summary.failed,
            "directory conversion finished"
        );
        Ok(summary)
    }
}

/// Write converted text, creating parent directories as needed
pub fn write_output(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Error creating directory '{}'", parent.display()))?;
        }
    }
    fs::write(path, contents).with_context(|| format!("Error writing file '{}'", path.display()))
}

/// Files below `dir` whose extension is one of `extensions`, sorted for a stable order.
///
/// Symlinked directories are not followed, so a link cycle cannot recurse forever.
pub fn collect_files(dir: &Path, extensions: &[&str]) -> io::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    walk(dir, extensions, &mut files)?;
    files.sort();
    Ok(files)
}

fn walk(dir: &Path, extensions: &[&str], files: &mut Vec<PathBuf>) -> io::Result<()> {
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if entry.file_type()?.is_dir() {
            walk(&path, extensions, files)?;
        } else if path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| extensions.contains(&ext))
        {
            files.push(path);
        }
    }
    Ok(())
}

/// Mirror `input` from `input_root` into `output_root` with a new extension
pub fn output_path(
    input_root: &Path,
    input: &Path,
    output_root: &Path,
    extension: &str,
) -> Result<PathBuf> {
    let relative = input.strip_prefix(input_root).with_context(|| {
        format!(
            "'{}' is not inside '{}'",
            input.display(),
            input_root.display()
        )
    })?;
    Ok(output_root.join(relative).with_extension(extension))
}
