//! Heuristic font detection from CSS class names.

use regex::Regex;

use crate::model::FontProperties;

/// Extracts font hints from utility-style class names.
///
/// Family detection tries each pattern against every token before moving
/// to the next pattern, so pattern priority beats token order.
pub struct ClassNameParser {
    family_patterns: Vec<Regex>,
    size_regex: Regex,
    weight_regex: Regex,
}

impl ClassNameParser {
    /// Create a new class name parser.
    pub fn new() -> Self {
        Self {
            family_patterns: vec![
                Regex::new(r"(?i)^font-([a-z][a-z0-9-]*)$").unwrap(),
                Regex::new(r"(?i)^family-([a-z][a-z0-9-]*)$").unwrap(),
                Regex::new(r"(?i)^(serif|sans-serif|monospace|cursive|fantasy)$").unwrap(),
                Regex::new(r"(?i)^(arial|helvetica|times|georgia|verdana|courier)$").unwrap(),
            ],
            size_regex: Regex::new(r"(?i)^text-(xs|sm|base|lg|xl|[2-6]xl)$").unwrap(),
            weight_regex: Regex::new(
                r"(?i)^font-(thin|light|normal|medium|semibold|bold|extrabold|black)$",
            )
            .unwrap(),
        }
    }

    /// Parse a class attribute value such as `font-serif text-lg font-bold`.
    pub fn parse(&self, class_names: &str) -> FontProperties {
        let tokens: Vec<&str> = class_names.split_whitespace().collect();

        FontProperties {
            font_family: self.family(&tokens),
            font_size: first_capture(&self.size_regex, &tokens).map(|s| s.to_ascii_lowercase()),
            font_weight: first_capture(&self.weight_regex, &tokens)
                .map(|s| s.to_ascii_lowercase()),
            ..Default::default()
        }
    }

    fn family(&self, tokens: &[&str]) -> Option<String> {
        for pattern in &self.family_patterns {
            for token in tokens {
                // `font-bold` is a weight, not a family called "bold"
                if self.weight_regex.is_match(token) {
                    continue;
                }
                if let Some(caps) = pattern.captures(token) {
                    return Some(caps[1].replace('-', " "));
                }
            }
        }
        None
    }
}

impl Default for ClassNameParser {
    fn default() -> Self {
        Self::new()
    }
}

fn first_capture<'a>(regex: &Regex, tokens: &[&'a str]) -> Option<&'a str> {
    tokens
        .iter()
        .find_map(|&token| regex.captures(token).and_then(|c| c.get(1)).map(|m| m.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weight_and_size_without_family() {
        let parser = ClassNameParser::new();
        let props = parser.parse("font-bold text-lg");
        assert_eq!(props.font_weight.as_deref(), Some("bold"));
        assert_eq!(props.font_size.as_deref(), Some("lg"));
        assert_eq!(props.font_family, None);
    }

    #[test]
    fn test_font_prefix_family() {
        let parser = ClassNameParser::new();
        let props = parser.parse("hero font-open-sans text-2xl font-semibold");
        assert_eq!(props.font_family.as_deref(), Some("open sans"));
        assert_eq!(props.font_size.as_deref(), Some("2xl"));
        assert_eq!(props.font_weight.as_deref(), Some("semibold"));
    }

    #[test]
    fn test_family_prefix() {
        let parser = ClassNameParser::new();
        let props = parser.parse("family-playfair-display");
        assert_eq!(props.font_family.as_deref(), Some("playfair display"));
    }

    #[test]
    fn test_pattern_priority_over_token_order() {
        let parser = ClassNameParser::new();
        let props = parser.parse("georgia family-lora");
        assert_eq!(props.font_family.as_deref(), Some("lora"));
    }

    #[test]
    fn test_generic_and_well_known_families() {
        let parser = ClassNameParser::new();
        assert_eq!(parser.parse("monospace").font_family.as_deref(), Some("monospace"));
        assert_eq!(parser.parse("sans-serif").font_family.as_deref(), Some("sans serif"));
        assert_eq!(parser.parse("card Arial").font_family.as_deref(), Some("Arial"));
    }

    #[test]
    fn test_size_scale_vocabulary() {
        let parser = ClassNameParser::new();
        assert_eq!(parser.parse("text-6xl").font_size.as_deref(), Some("6xl"));
        assert_eq!(parser.parse("text-base").font_size.as_deref(), Some("base"));
        assert_eq!(parser.parse("text-7xl").font_size, None);
        assert_eq!(parser.parse("text-center").font_size, None);
    }

    #[test]
    fn test_no_match() {
        let parser = ClassNameParser::new();
        assert!(parser.parse("container mx-auto").is_empty());
        assert!(parser.parse("").is_empty());
    }
}
