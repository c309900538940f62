//! Rendering module for exporting and displaying extraction results.

mod json;
mod report;
mod sink;
mod text;

pub use json::{report_to_json, to_json, JsonFormat};
pub use report::{FontEntry, FontReport};
pub use sink::JsonExportSink;
pub use text::{describe_font, to_text, TextOptions};
