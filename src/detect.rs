//! Document export format detection.

use crate::error::{Error, Result};
use flate2::read::GzDecoder;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Gzip magic bytes.
const GZIP_MAGIC: &[u8] = &[0x1f, 0x8b];

/// UTF-8 byte order mark.
const UTF8_BOM: &[u8] = &[0xef, 0xbb, 0xbf];

/// Bytes inspected when sniffing a file.
const SNIFF_LEN: u64 = 4096;

/// How documents are laid out in an export.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentLayout {
    /// A single JSON array of documents
    JsonArray,
    /// A stream of JSON objects: one per line, or pretty-printed
    Ndjson,
}

/// Export format information.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportFormat {
    /// Layout of the (decompressed) content
    pub layout: DocumentLayout,
    /// Whether the content is gzip-compressed
    pub compressed: bool,
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let layout = match self.layout {
            DocumentLayout::JsonArray => "JSON array",
            DocumentLayout::Ndjson => "NDJSON",
        };
        if self.compressed {
            write!(f, "{} (gzip)", layout)
        } else {
            write!(f, "{}", layout)
        }
    }
}

/// Detect the export format of a file.
///
/// # Example
/// ```no_run
/// use fontsift::detect::detect_format_from_path;
///
/// let format = detect_format_from_path("production.ndjson.gz").unwrap();
/// println!("Format: {}", format);
/// ```
pub fn detect_format_from_path<P: AsRef<Path>>(path: P) -> Result<ExportFormat> {
    let file = File::open(path)?;
    let mut header = Vec::new();
    BufReader::new(file).take(SNIFF_LEN).read_to_end(&mut header)?;
    detect_format_from_bytes(&header)
}

/// Detect the export format from the leading bytes of an export.
///
/// Compressed input is sniffed through a gzip decoder, so a truncated
/// gzip prefix is enough.
pub fn detect_format_from_bytes(data: &[u8]) -> Result<ExportFormat> {
    if is_gzip(data) {
        let mut inner = Vec::new();
        // A truncated stream still yields its leading bytes before erroring
        let _ = GzDecoder::new(data).take(SNIFF_LEN).read_to_end(&mut inner);
        let layout = detect_layout(&inner)?;
        return Ok(ExportFormat {
            layout,
            compressed: true,
        });
    }

    Ok(ExportFormat {
        layout: detect_layout(data)?,
        compressed: false,
    })
}

fn detect_layout(data: &[u8]) -> Result<DocumentLayout> {
    let data = data.strip_prefix(UTF8_BOM).unwrap_or(data);
    match data.iter().find(|b| !b.is_ascii_whitespace()) {
        Some(b'[') => Ok(DocumentLayout::JsonArray),
        Some(b'{') => Ok(DocumentLayout::Ndjson),
        _ => Err(Error::UnknownFormat),
    }
}

/// Check if bytes start with the gzip magic number.
pub fn is_gzip(data: &[u8]) -> bool {
    data.starts_with(GZIP_MAGIC)
}

/// Check if a file looks like a document export.
pub fn is_document_export<P: AsRef<Path>>(path: P) -> bool {
    detect_format_from_path(path).is_ok()
}
