// ABOUTME: Main library entry point for the igps page helpers.
// ABOUTME: Re-exports the public API: SelectionController, KeyBindings, html_to_text, options and errors.

//! Page helpers for table-driven pages.
//!
//! Three independent helpers, each usable on its own:
//!
//! - [`SelectionController`] highlights the table row enclosing an element and
//!   restores the previously highlighted one, so at most one row is marked.
//! - [`KeyBindings`] binds Enter-key callbacks to elements, one key-press
//!   handler per element.
//! - [`html_to_text`] renders an HTML fragment to plain text.
//!
//! # Example
//!
//! ```
//! use dom_query::Document;
//! use igps_pagekit::SelectionController;
//!
//! let mut doc = Document::from(r#"<table><tr class="row"><td id="c">x</td></tr></table>"#);
//! let mut rows = SelectionController::new();
//! rows.highlight_row_matching(&mut doc, "#c").unwrap();
//! assert!(doc.html().contains(r#"<tr class="highlight">"#));
//! ```

pub mod dom;
pub mod error;
pub mod events;
pub mod formats;
pub mod options;

pub use crate::dom::highlight::{find_row, SelectionController};
pub use crate::dom::RowTree;
pub use crate::error::{PageError, Result};
pub use crate::events::bindings::KeyBindings;
pub use crate::events::{extract_key_code, EventFlow, KeyEvent, ENTER_KEY_CODE};
pub use crate::formats::{decode_html, html_to_text, html_to_text_with};
pub use crate::options::{HighlightOptions, TextOptions, TextOptionsBuilder};
