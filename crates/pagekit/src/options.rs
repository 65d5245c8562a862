// ABOUTME: Configuration options for the row highlighter and the HTML-to-text renderer.
// ABOUTME: TextOptionsBuilder provides a fluent API; both option sets deserialize from partial JSON.

use serde::{Deserialize, Serialize};

use crate::error::{PageError, Result};

/// Tag that identifies a row-like element.
pub const DEFAULT_ROW_TAG: &str = "tr";

/// Class applied to the currently highlighted row.
pub const DEFAULT_HIGHLIGHT_CLASS: &str = "highlight";

/// Settings for a [`SelectionController`](crate::dom::highlight::SelectionController).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HighlightOptions {
    pub row_tag: String,
    pub highlight_class: String,
}

impl Default for HighlightOptions {
    fn default() -> Self {
        Self {
            row_tag: DEFAULT_ROW_TAG.to_string(),
            highlight_class: DEFAULT_HIGHLIGHT_CLASS.to_string(),
        }
    }
}

impl HighlightOptions {
    pub fn row_tag(mut self, tag: impl Into<String>) -> Self {
        self.row_tag = tag.into();
        self
    }

    pub fn highlight_class(mut self, class: impl Into<String>) -> Self {
        self.highlight_class = class.into();
        self
    }
}

/// Settings for [`html_to_text_with`](crate::formats::html_to_text_with).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextOptions {
    /// Separate paragraphs with a blank line instead of a single newline.
    pub paragraph_spacing: bool,
    /// Inserted between adjacent table cells of the same row.
    pub cell_separator: String,
    /// Extra tags whose content is dropped, on top of script/style/head and friends.
    pub skip_tags: Vec<String>,
}

impl Default for TextOptions {
    fn default() -> Self {
        Self {
            paragraph_spacing: true,
            cell_separator: "\t".to_string(),
            skip_tags: Vec::new(),
        }
    }
}

impl TextOptions {
    pub fn builder() -> TextOptionsBuilder {
        TextOptionsBuilder::new()
    }

    /// Parse options from a JSON document. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| PageError::config("text", e))
    }

    /// True if `tag` was listed in `skip_tags` (ASCII case-insensitive).
    pub fn skips(&self, tag: &str) -> bool {
        self.skip_tags.iter().any(|t| t.eq_ignore_ascii_case(tag))
    }
}

/// Builder for [`TextOptions`].
#[derive(Debug, Clone, Default)]
pub struct TextOptionsBuilder {
    opts: TextOptions,
}

impl TextOptionsBuilder {
    pub fn new() -> Self {
        Self {
            opts: TextOptions::default(),
        }
    }

    /// Toggle blank lines between paragraphs.
    pub fn paragraph_spacing(mut self, enabled: bool) -> Self {
        self.opts.paragraph_spacing = enabled;
        self
    }

    /// Set the separator placed between table cells.
    pub fn cell_separator(mut self, separator: impl Into<String>) -> Self {
        self.opts.cell_separator = separator.into();
        self
    }

    /// Drop the content of `tag` from the output.
    pub fn skip_tag(mut self, tag: impl Into<String>) -> Self {
        self.opts.skip_tags.push(tag.into());
        self
    }

    pub fn build(self) -> TextOptions {
        self.opts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn highlight_defaults() {
        let opts = HighlightOptions::default();
        assert_eq!(opts.row_tag, "tr");
        assert_eq!(opts.highlight_class, "highlight");
    }

    #[test]
    fn builder_overrides_defaults() {
        let opts = TextOptions::builder()
            .paragraph_spacing(false)
            .cell_separator(" | ")
            .skip_tag("nav")
            .build();
        assert!(!opts.paragraph_spacing);
        assert_eq!(opts.cell_separator, " | ");
        assert!(opts.skips("NAV"));
        assert!(!opts.skips("div"));
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let opts = TextOptions::from_json(r#"{"skip_tags": ["aside"]}"#).unwrap();
        assert!(opts.paragraph_spacing);
        assert_eq!(opts.cell_separator, "\t");
        assert_eq!(opts.skip_tags, vec!["aside".to_string()]);
    }

    #[test]
    fn malformed_json_is_config_error() {
        let err = TextOptions::from_json("{not json").unwrap_err();
        assert!(err.is_config());
    }
}
