//! Report sinks that write run outcomes.

use std::io::Write;

use serde::Serialize;

use super::{report_to_json, FontReport, JsonFormat};
use crate::error::{Error, Result};
use crate::extract::ReportSink;
use crate::model::ExtractionResult;

/// Writes the export JSON of a run to a writer.
///
/// A failed run is written as `{"error": "<message>"}`. Write failures are
/// kept and can be taken with [`JsonExportSink::take_error`].
pub struct JsonExportSink<W: Write> {
    writer: W,
    format: JsonFormat,
    error: Option<Error>,
}

impl<W: Write> JsonExportSink<W> {
    /// Create a sink writing to `writer`.
    pub fn new(writer: W, format: JsonFormat) -> Self {
        Self {
            writer,
            format,
            error: None,
        }
    }

    /// Take the write error, if any occurred.
    pub fn take_error(&mut self) -> Option<Error> {
        self.error.take()
    }

    /// Consume the sink, returning the writer.
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_str(&mut self, content: &str) -> Result<()> {
        self.writer.write_all(content.as_bytes())?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()?;
        Ok(())
    }

    fn keep(&mut self, outcome: Result<()>) {
        if let Err(e) = outcome {
            log::error!("Failed to write report: {}", e);
            self.error = Some(e);
        }
    }
}

#[derive(Serialize)]
struct ErrorReport<'a> {
    error: &'a str,
}

impl<W: Write> ReportSink for JsonExportSink<W> {
    fn report(&mut self, result: &ExtractionResult) {
        let outcome = report_to_json(&FontReport::from_result(result), self.format)
            .and_then(|json| self.write_str(&json));
        self.keep(outcome);
    }

    fn report_error(&mut self, message: &str) {
        let outcome = serde_json::to_string(&ErrorReport { error: message })
            .map_err(Error::from)
            .and_then(|json| self.write_str(&json));
        self.keep(outcome);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sink_writes_report() {
        let mut sink = JsonExportSink::new(Vec::new(), JsonFormat::Compact);
        sink.report(&ExtractionResult::new(0, Vec::new(), Vec::new()));
        assert!(sink.take_error().is_none());

        let text = String::from_utf8(sink.into_inner()).unwrap();
        assert!(text.contains("\"mostUsedFont\":\"None\""));
        assert!(text.ends_with('\n'));
    }

    #[test]
    fn test_sink_writes_error() {
        let mut sink = JsonExportSink::new(Vec::new(), JsonFormat::Pretty);
        sink.report_error("Document source error: offline");

        let text = String::from_utf8(sink.into_inner()).unwrap();
        assert_eq!(text, "{\"error\":\"Document source error: offline\"}\n");
    }
}
