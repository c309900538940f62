//! Inline `style` attribute parsing.

use regex::Regex;

use crate::model::FontProperties;

/// Extracts font properties from a CSS declaration block.
///
/// This is a pattern matcher over `property: value` pairs, not a CSS
/// parser: there is no cascade, no shorthand expansion (`font: ...` is
/// ignored), and values pass through unvalidated.
pub struct StyleAttributeParser {
    declaration_regex: Regex,
}

impl StyleAttributeParser {
    /// Create a new style attribute parser.
    pub fn new() -> Self {
        Self {
            declaration_regex: Regex::new(r"(?i)(?:^|;)\s*([a-z-]+)\s*:\s*([^;]*)").unwrap(),
        }
    }

    /// Parse a declaration block such as `font-family: Georgia; font-size: 14px`.
    ///
    /// Property names match case-insensitively and the first occurrence of
    /// a property wins. Declarations with an empty value are skipped.
    pub fn parse(&self, style: &str) -> FontProperties {
        let mut props = FontProperties::default();

        for caps in self.declaration_regex.captures_iter(style) {
            let name = caps[1].to_ascii_lowercase();
            let Some(slot) = property_slot(&mut props, &name) else {
                continue;
            };
            if slot.is_some() {
                continue;
            }

            let value = if name == "font-family" {
                strip_quotes(&caps[2])
            } else {
                caps[2].trim().to_string()
            };
            if !value.is_empty() {
                *slot = Some(value);
            }
        }

        props
    }
}

impl Default for StyleAttributeParser {
    fn default() -> Self {
        Self::new()
    }
}

fn property_slot<'a>(props: &'a mut FontProperties, name: &str) -> Option<&'a mut Option<String>> {
    match name {
        "font-family" => Some(&mut props.font_family),
        "font-size" => Some(&mut props.font_size),
        "font-weight" => Some(&mut props.font_weight),
        "font-style" => Some(&mut props.font_style),
        "line-height" => Some(&mut props.line_height),
        "letter-spacing" => Some(&mut props.letter_spacing),
        "text-transform" => Some(&mut props.text_transform),
        "text-decoration" => Some(&mut props.text_decoration),
        "color" => Some(&mut props.color),
        _ => None,
    }
}

fn strip_quotes(value: &str) -> String {
    value
        .chars()
        .filter(|c| *c != '"' && *c != '\'')
        .collect::<String>()
        .trim()
        .to_string()
}
