// ABOUTME: Error types for the fallible edges of the page helpers.
// ABOUTME: Provides PageError with InvalidSelector and Config variants.

use thiserror::Error;

/// Errors from selector lookups and option loading.
///
/// The core helpers (`highlight_row`, `register_enter`, `html_to_text`) never
/// return it; they degrade to a no-op or best-effort result instead.
#[derive(Debug, Error)]
pub enum PageError {
    /// A CSS selector did not parse.
    #[error("invalid selector {selector:?}")]
    InvalidSelector { selector: String },

    /// Options could not be deserialized.
    #[error("invalid {subject} config: {source}")]
    Config {
        subject: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

impl PageError {
    pub fn invalid_selector(selector: impl Into<String>) -> Self {
        PageError::InvalidSelector {
            selector: selector.into(),
        }
    }

    pub fn config(subject: &'static str, source: serde_json::Error) -> Self {
        PageError::Config { subject, source }
    }

    pub fn is_invalid_selector(&self) -> bool {
        matches!(self, PageError::InvalidSelector { .. })
    }

    pub fn is_config(&self) -> bool {
        matches!(self, PageError::Config { .. })
    }
}

/// Convenience alias used across the crate.
pub type Result<T> = std::result::Result<T, PageError>;
