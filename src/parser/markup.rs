//! Locating `style="..."` and `class="..."` attributes inside markup strings.

use regex::Regex;

/// Finds attribute values in strings that embed HTML-like markup.
///
/// A string may hold several elements (concatenated markup), so every
/// occurrence is returned in order of appearance.
///
/// Attribute names must start the string or follow whitespace, so
/// `data-style` and `subclass` are not matched. Attributes with no space
/// between them (`class="a"style="..."`) are skipped as well.
pub struct AttributeScanner {
    style_regex: Regex,
    class_regex: Regex,
}

impl AttributeScanner {
    /// Create a new scanner.
    pub fn new() -> Self {
        Self {
            style_regex: Regex::new(r#"(?i)(?:^|\s)style\s*=\s*(?:"([^"]*)"|'([^']*)')"#).unwrap(),
            class_regex: Regex::new(r#"(?i)(?:^|\s)class\s*=\s*(?:"([^"]*)"|'([^']*)')"#).unwrap(),
        }
    }

    /// All `style` attribute values in `text`.
    pub fn style_attributes<'a>(&self, text: &'a str) -> Vec<&'a str> {
        attribute_values(&self.style_regex, text)
    }

    /// All `class` attribute values in `text`.
    pub fn class_attributes<'a>(&self, text: &'a str) -> Vec<&'a str> {
        attribute_values(&self.class_regex, text)
    }
}

impl Default for AttributeScanner {
    fn default() -> Self {
        Self::new()
    }
}

fn attribute_values<'a>(regex: &Regex, text: &'a str) -> Vec<&'a str> {
    regex
        .captures_iter(text)
        .filter_map(|caps| caps.get(1).or_else(|| caps.get(2)))
        .map(|m| m.as_str())
        .collect()
}
