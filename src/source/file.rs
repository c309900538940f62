//! File-backed document source.

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use flate2::read::GzDecoder;
use serde_json::value::RawValue;
use serde_json::Deserializer;

use super::{apply_query, DocumentSource, SourceEntry};
use crate::detect::{detect_format_from_bytes, is_gzip, DocumentLayout};
use crate::error::{Error, Result};
use crate::extract::DocumentQuery;

/// Reads documents from a JSON array or NDJSON export, optionally gzipped.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
    name: String,
}

impl FileSource {
    /// Create a source for the export at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path.display().to_string();
        Self { path, name }
    }

    /// Get the export path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load every document in the export, ignoring any query.
    pub fn load_all(&self) -> Result<Vec<SourceEntry>> {
        let raw = fs::read(&self.path)?;
        parse_export(&raw)
    }
}

impl DocumentSource for FileSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn fetch(&self, query: &DocumentQuery) -> Result<Vec<SourceEntry>> {
        let entries = self.load_all()?;
        let total = entries.len();
        let selected = apply_query(entries, query);
        log::debug!(
            "{}: selected {} of {} documents",
            self.name,
            selected.len(),
            total
        );
        Ok(selected)
    }
}

/// Parse export bytes into document entries.
///
/// The export is split into documents before any document is decoded, so
/// a document that fails to decode (for example, one nested past the JSON
/// decoder's depth limit) becomes an `Err` entry instead of failing the
/// whole export.
pub fn parse_export(raw: &[u8]) -> Result<Vec<SourceEntry>> {
    let data = if is_gzip(raw) {
        let mut inflated = Vec::new();
        GzDecoder::new(raw)
            .read_to_end(&mut inflated)
            .map_err(|e| Error::Source(format!("gzip decode failed: {}", e)))?;
        inflated
    } else {
        raw.to_vec()
    };

    let format = detect_format_from_bytes(&data)?;
    let text = std::str::from_utf8(&data)
        .map_err(|e| Error::Source(format!("export is not valid UTF-8: {}", e)))?;
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);

    match format.layout {
        DocumentLayout::JsonArray => parse_array(text),
        DocumentLayout::Ndjson => parse_stream(text),
    }
}

fn parse_array(text: &str) -> Result<Vec<SourceEntry>> {
    let elements: Vec<&RawValue> = serde_json::from_str(text)
        .map_err(|e| Error::Source(format!("invalid JSON array: {}", e)))?;
    Ok(elements.into_iter().map(decode).collect())
}

/// Documents one per line, or any run of whitespace-separated objects
/// (a single pretty-printed object included).
fn parse_stream(text: &str) -> Result<Vec<SourceEntry>> {
    let mut entries = Vec::new();
    for raw in Deserializer::from_str(text).into_iter::<&RawValue>() {
        let raw = raw.map_err(|e| Error::Source(format!("line {}: {}", e.line(), e)))?;
        entries.push(decode(raw));
    }
    Ok(entries)
}

fn decode(raw: &RawValue) -> SourceEntry {
    serde_json::from_str(raw.get()).map_err(|e| {
        log::debug!("Undecodable document: {}", e);
        Error::from(e)
    })
}
