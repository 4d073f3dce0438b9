// src/config/options.rs
use std::path::{Path, PathBuf};
use super::consts::*;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppOptions {
    /// Saved copy of the event page
    pub input: Option<PathBuf>,
    pub output: OutputOptions,
    pub table: TableSource,
}

/// Where the translation rules come from.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum TableSource {
    #[default]
    BuiltIn,
    /// JSON array of `[source, key]` pairs, applied in file order.
    File(PathBuf),
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Json,
    Tsv,
}

impl OutputFormat {
    pub fn ext(&self) -> &'static str {
        match self { OutputFormat::Json => "json", OutputFormat::Tsv => "tsv" }
    }

    pub fn label(&self) -> &'static str {
        match self { OutputFormat::Json => "JSON", OutputFormat::Tsv => "TSV" }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OutputOptions {
    pub format: OutputFormat,
    /// TSV only: emit a header row
    pub include_headers: bool,
    path: Option<PathBuf>,
}

impl OutputOptions {
    /// User-chosen path, or `out/result.<ext>` for the current format.
    pub fn out_path(&self) -> PathBuf {
        match &self.path {
            Some(p) => p.clone(),
            None => PathBuf::from(DEFAULT_OUT_DIR)
                .join(format!("{}.{}", DEFAULT_FILE, self.format.ext())),
        }
    }

    pub fn set_path(&mut self, text: &str) {
        let s = text.trim();
        self.path = if s.is_empty() { None } else { Some(PathBuf::from(s)) };
    }

    pub fn has_custom_path(&self) -> bool { self.path.is_some() }

    pub fn custom_path(&self) -> Option<&Path> { self.path.as_deref() }
}
