//! Integration tests for file-backed sources and format detection.

use std::io::Write;

use flate2::write::GzEncoder;
use flate2::Compression;
use tempfile::NamedTempFile;

use fontsift::detect::{detect_format_from_path, is_document_export};
use fontsift::{
    extract_from_file, DocumentLayout, DocumentSource, Error, FileSource, FontSift, RunConfig,
};

const NDJSON: &str = concat!(
    r#"{"_id": "a", "_type": "post", "body": "<p style=\"font-family: Georgia\">One</p>"}"#,
    "\n",
    r#"{"_id": "b", "_type": "page", "body": "<p class=\"font-inter\">Two</p>"}"#,
    "\n",
    r#"{"_id": "c", "_type": "post", "body": "<p style=\"font-family: Georgia\">Three</p>"}"#,
    "\n",
);

fn write_temp(suffix: &str, data: &[u8]) -> NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
    file.write_all(data).unwrap();
    file.flush().unwrap();
    file
}

fn gzip(data: &[u8]) -> Vec<u8> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(data).unwrap();
    encoder.finish().unwrap()
}

#[test]
fn test_ndjson_file() {
    let file = write_temp(".ndjson", NDJSON.as_bytes());
    let result = extract_from_file(file.path(), &RunConfig::default()).unwrap();

    assert_eq!(result.total_documents, 3);
    assert_eq!(result.summary.unique_fonts, 2);
    assert_eq!(result.summary.most_used_font, "Georgia");
}

#[test]
fn test_json_array_file() {
    let json = r#"[
        {"_id": "a", "_type": "post", "content": [
            {"_type": "block", "style": "h2", "children": [{"_type": "span", "text": "Title", "marks": []}]}
        ]}
    ]"#;
    let file = write_temp(".json", json.as_bytes());
    let result = extract_from_file(file.path(), &RunConfig::default()).unwrap();

    assert_eq!(result.total_documents, 1);
    let heading = result.find_family("heading").unwrap();
    assert_eq!(heading.font_size.as_deref(), Some("xl"));
    assert_eq!(heading.usage()[0].field_path, "content[0]");
    assert_eq!(heading.usage()[0].content, "Title");
}

#[test]
fn test_gzip_file() {
    let file = write_temp(".ndjson.gz", &gzip(NDJSON.as_bytes()));

    let format = detect_format_from_path(file.path()).unwrap();
    assert_eq!(format.layout, DocumentLayout::Ndjson);
    assert!(format.compressed);

    let result = extract_from_file(file.path(), &RunConfig::default()).unwrap();
    assert_eq!(result.total_documents, 3);
}

#[test]
fn test_file_source_applies_query() {
    let file = write_temp(".ndjson", NDJSON.as_bytes());
    let source = FileSource::new(file.path());
    let query = RunConfig::new()
        .with_document_types(["post"])
        .with_max_documents(1)
        .query()
        .unwrap();

    let entries = source.fetch(&query).unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].as_ref().unwrap().str_field("_id"), Some("a"));
    assert_eq!(source.load_all().unwrap().len(), 3);
}

#[test]
fn test_builder_run_file() {
    let file = write_temp(".ndjson", NDJSON.as_bytes());
    let out = FontSift::new()
        .document_types(["page"])
        .run_file(file.path())
        .unwrap();

    assert_eq!(out.result().total_documents, 1);
    assert_eq!(out.result().summary.most_used_font, "inter");
}

#[test]
fn test_is_document_export() {
    let file = write_temp(".json", b"  [ ]");
    assert!(is_document_export(file.path()));

    let file = write_temp(".txt", b"plain text");
    assert!(!is_document_export(file.path()));
}

// ==================== Edge Case Tests ====================

#[test]
fn test_missing_file_is_io_error() {
    let err = extract_from_file("/nonexistent/export.ndjson", &RunConfig::default()).unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}

#[test]
fn test_broken_line_aborts_run() {
    let data = format!("{}{{broken}}\n", NDJSON);
    let file = write_temp(".ndjson", data.as_bytes());

    let err = extract_from_file(file.path(), &RunConfig::default()).unwrap_err();
    assert!(matches!(err, Error::Source(ref msg) if msg.starts_with("line 4")));
}

#[test]
fn test_deeply_nested_document_in_file() {
    let deep = format!("{}\"x\"{}", "[".repeat(200), "]".repeat(200));
    let data = format!(r#"{{"_id": "deep", "_type": "post", "body": {}}}"#, deep) + "\n" + NDJSON;
    let file = write_temp(".ndjson.gz", &gzip(data.as_bytes()));

    let result = extract_from_file(file.path(), &RunConfig::default()).unwrap();
    assert_eq!(result.total_documents, 4);
    assert_eq!(result.errors.len(), 1);
    assert!(result.errors[0].starts_with("Error processing document #0:"));
    assert_eq!(result.summary.most_used_font, "Georgia");
}

#[test]
fn test_pretty_printed_object_file() {
    let json = "{\n  \"_id\": \"a\",\n  \"_type\": \"post\",\n  \"body\": \"<p class=\\\"family-lora\\\">x</p>\"\n}\n";
    let file = write_temp(".json", json.as_bytes());

    let result = extract_from_file(file.path(), &RunConfig::default()).unwrap();
    assert_eq!(result.total_documents, 1);
    assert!(result.errors.is_empty());
    assert_eq!(result.summary.most_used_font, "lora");
}

#[test]
fn test_empty_file_is_unknown_format() {
    let file = write_temp(".json", b"");
    let err = extract_from_file(file.path(), &RunConfig::default()).unwrap_err();
    assert!(matches!(err, Error::UnknownFormat));
}
