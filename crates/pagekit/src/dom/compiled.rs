// ABOUTME: Compiled CSS selectors shared across lookups, keyed by selector text.
// ABOUTME: Rejected selectors are remembered so bad input never reaches the parser twice.

use std::collections::HashMap;
use std::sync::RwLock;

use dom_query::{Document, Matcher, NodeId};
use once_cell::sync::Lazy;

use crate::error::{PageError, Result};

/// `None` records a selector that failed to parse.
static MATCHERS: Lazy<RwLock<HashMap<String, Option<Matcher>>>> =
    Lazy::new(|| RwLock::new(HashMap::new()));

/// Returns the compiled matcher for `css`, compiling it on first use.
pub fn matcher(css: &str) -> Result<Matcher> {
    let cached = MATCHERS
        .read()
        .unwrap_or_else(|e| e.into_inner())
        .get(css)
        .cloned();

    let compiled = match cached {
        Some(entry) => entry,
        None => MATCHERS
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .entry(css.to_string())
            .or_insert_with(|| Matcher::new(css).ok())
            .clone(),
    };
    compiled.ok_or_else(|| PageError::invalid_selector(css))
}

/// Returns the id of the first node matching `css`, or `None` if nothing matches.
///
/// A selector that does not parse is an error rather than an empty match.
pub fn select_first(doc: &Document, css: &str) -> Result<Option<NodeId>> {
    let matcher = matcher(css)?;
    let selection = doc.select_matcher(&matcher);
    Ok(selection.nodes().first().map(|node| node.id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_selector_compiles_once_and_stays_valid() {
        assert!(matcher("tr.row").is_ok());
        assert!(matcher("tr.row").is_ok());
    }

    #[test]
    fn rejected_selector_stays_rejected() {
        for _ in 0..2 {
            assert!(matches!(matcher("[[[invalid"), Err(e) if e.is_invalid_selector()));
        }
    }

    #[test]
    fn select_first_finds_node() {
        let doc = Document::from("<table><tr><td id='a'>x</td></tr></table>");
        assert!(select_first(&doc, "#a").unwrap().is_some());
        assert!(select_first(&doc, "#missing").unwrap().is_none());
    }

    #[test]
    fn select_first_rejects_bad_selector() {
        let doc = Document::from("<p>x</p>");
        let err = select_first(&doc, "td[").unwrap_err();
        assert!(err.is_invalid_selector());
    }
}
