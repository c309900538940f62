//! Plain text summary rendering.

use std::fmt::Write;

use crate::model::{ExtractionResult, FontData};

/// Options for the text summary.
#[derive(Debug, Clone)]
pub struct TextOptions {
    /// Maximum number of fonts listed (0 = all)
    pub max_fonts: usize,

    /// Whether to list usage locations under each font
    pub show_usage: bool,
}

impl TextOptions {
    /// Create new text options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Limit the number of fonts listed.
    pub fn with_max_fonts(mut self, max: usize) -> Self {
        self.max_fonts = max;
        self
    }

    /// List usage locations under each font.
    pub fn with_usage(mut self, show: bool) -> Self {
        self.show_usage = show;
        self
    }
}

impl Default for TextOptions {
    fn default() -> Self {
        Self {
            max_fonts: 0,
            show_usage: false,
        }
    }
}

/// Render a human-readable summary of a result.
pub fn to_text(result: &ExtractionResult, options: &TextOptions) -> String {
    let mut out = String::new();
    let summary = &result.summary;

    let _ = writeln!(out, "Documents analyzed: {}", result.total_documents);
    let _ = writeln!(out, "Unique fonts: {}", summary.unique_fonts);
    let _ = writeln!(out, "Total usages: {}", summary.total_usages);
    let _ = writeln!(out, "Most used font: {}", summary.most_used_font);

    if !result.fonts_found.is_empty() {
        let _ = writeln!(out, "\nFonts:");
        let limit = if options.max_fonts == 0 {
            result.fonts_found.len()
        } else {
            options.max_fonts
        };

        for font in result.fonts_found.iter().take(limit) {
            let _ = writeln!(
                out,
                "  {} ({} usage{})",
                describe_font(font),
                font.usage_count(),
                if font.usage_count() == 1 { "" } else { "s" }
            );
            if options.show_usage {
                for usage in font.usage() {
                    let _ = writeln!(
                        out,
                        "    {}:{} {}",
                        usage.document_id, usage.field_path, usage.content
                    );
                }
            }
        }

        let hidden = result.fonts_found.len().saturating_sub(limit);
        if hidden > 0 {
            let _ = writeln!(out, "  ... and {} more", hidden);
        }
    }

    if !result.errors.is_empty() {
        let _ = writeln!(out, "\nErrors:");
        for error in &result.errors {
            let _ = writeln!(out, "  {}", error);
        }
    }

    out
}

/// Describe a font as `family [size weight style]`.
pub fn describe_font(font: &FontData) -> String {
    let attrs: Vec<&str> = [&font.font_size, &font.font_weight, &font.font_style]
        .into_iter()
        .filter_map(|a| a.as_deref())
        .collect();

    if attrs.is_empty() {
        font.font_family.clone()
    } else {
        format!("{} [{}]", font.font_family, attrs.join(" "))
    }
}
