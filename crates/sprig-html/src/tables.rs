//! Name tables that steer tokenization.
//!
//! All lookups are ASCII case-insensitive; the tables themselves hold the
//! lower-case form of each name.

/// Elements that cannot have children and close on their start tag.
pub const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "basefont", "br", "col", "command", "embed", "frame", "hr", "img", "input",
    "isindex", "keygen", "link", "meta", "param", "source", "track", "wbr",
];

/// Elements whose content is captured verbatim up to the matching end tag.
pub const RAW_TEXT_ELEMENTS: &[&str] = &["script", "style"];

/// Attributes that take their own name as value when written without one.
pub const BOOLEAN_ATTRIBUTES: &[&str] = &[
    "autofocus",
    "autoplay",
    "async",
    "checked",
    "controls",
    "defer",
    "disabled",
    "hidden",
    "loop",
    "multiple",
    "open",
    "readonly",
    "required",
    "scoped",
    "selected",
];

fn contains(table: &[impl AsRef<str>], name: &str) -> bool {
    table.iter().any(|entry| entry.as_ref().eq_ignore_ascii_case(name))
}

/// Whether `name` is a boolean attribute.
#[must_use]
pub fn is_boolean_attribute(name: &str) -> bool {
    contains(BOOLEAN_ATTRIBUTES, name)
}

/// Element tables used by a [`Parser`](crate::Parser).
///
/// The default configuration holds [`VOID_ELEMENTS`] and
/// [`RAW_TEXT_ELEMENTS`]. A configuration is fixed once it is handed to a
/// parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParserConfig {
    void_elements: Vec<String>,
    raw_text_elements: Vec<String>,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            void_elements: VOID_ELEMENTS.iter().map(|&s| s.to_string()).collect(),
            raw_text_elements: RAW_TEXT_ELEMENTS.iter().map(|&s| s.to_string()).collect(),
        }
    }
}

impl ParserConfig {
    /// Treat `name` as an additional void element.
    #[must_use]
    pub fn with_void_element(mut self, name: &str) -> Self {
        self.void_elements.push(name.to_ascii_lowercase());
        self
    }

    /// Capture the content of `name` elements as raw text.
    #[must_use]
    pub fn with_raw_text_tag(mut self, name: &str) -> Self {
        self.raw_text_elements.push(name.to_ascii_lowercase());
        self
    }

    /// Whether `name` closes on its start tag.
    #[must_use]
    pub fn is_void(&self, name: &str) -> bool {
        contains(&self.void_elements, name)
    }

    /// Whether `name` holds raw text.
    ///
    /// Raw-text handling takes precedence over void handling for a name
    /// present in both tables.
    #[must_use]
    pub fn is_raw_text(&self, name: &str) -> bool {
        contains(&self.raw_text_elements, name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookups_ignore_case() {
        let config = ParserConfig::default();
        assert!(config.is_void("IMG"));
        assert!(config.is_raw_text("Script"));
        assert!(!config.is_void("div"));
        assert!(is_boolean_attribute("DISABLED"));
        assert!(!is_boolean_attribute("href"));
    }

    #[test]
    fn test_extra_tags() {
        let config = ParserConfig::default()
            .with_raw_text_tag("TEXTAREA")
            .with_void_element("slot");
        assert!(config.is_raw_text("textarea"));
        assert!(config.is_void("SLOT"));
        assert!(config.is_raw_text("style"));
    }
}
