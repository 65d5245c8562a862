// ABOUTME: Single-row highlighting for tables: marks the row enclosing an element.
// ABOUTME: SelectionController restores the previously marked row before marking a new one.

//! Row highlighting.
//!
//! A [`SelectionController`] remembers at most one highlighted row together
//! with the `class` value it carried before. Every call first puts that row
//! back the way it was, so no two rows ever carry the highlight class set by
//! the same controller. Tables that need independent selections each get
//! their own controller.

use dom_query::{Document, NodeId};
use tracing::{debug, trace};

use crate::dom::compiled::select_first;
use crate::dom::RowTree;
use crate::error::Result;
use crate::options::HighlightOptions;

#[derive(Debug, Clone, PartialEq, Eq)]
struct Remembered<H> {
    row: H,
    previous_class: Option<String>,
}

/// Owns the "currently highlighted row" slot for one table or list.
#[derive(Debug, Clone)]
pub struct SelectionController<H> {
    options: HighlightOptions,
    current: Option<Remembered<H>>,
}

impl<H> Default for SelectionController<H> {
    fn default() -> Self {
        Self {
            options: HighlightOptions::default(),
            current: None,
        }
    }
}

impl<H: Copy + Eq + std::fmt::Debug> SelectionController<H> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: HighlightOptions) -> Self {
        Self {
            options,
            current: None,
        }
    }

    pub fn options(&self) -> &HighlightOptions {
        &self.options
    }

    /// The row currently carrying the highlight class, if any.
    pub fn current(&self) -> Option<H> {
        self.current.as_ref().map(|r| r.row)
    }

    /// Class the current row had before it was highlighted.
    pub fn previous_class(&self) -> Option<&str> {
        self.current
            .as_ref()
            .and_then(|r| r.previous_class.as_deref())
    }

    /// Highlights the row that is, or encloses, `element`.
    ///
    /// The previously highlighted row is restored first, unconditionally. If
    /// `element` is `None` or has no enclosing row the call only clears.
    /// Returns the newly highlighted row.
    pub fn highlight_row<T>(&mut self, tree: &mut T, element: Option<H>) -> Option<H>
    where
        T: RowTree<Handle = H>,
    {
        self.clear(tree);

        let row = find_row(tree, element?, &self.options.row_tag)?;
        let previous_class = tree.class_name(row);
        tree.set_class_name(row, Some(&self.options.highlight_class));
        debug!(?row, ?previous_class, "highlighted row");

        self.current = Some(Remembered {
            row,
            previous_class,
        });
        Some(row)
    }

    /// Restores the highlighted row, if any, and forgets it. Returns the restored row.
    pub fn clear<T>(&mut self, tree: &mut T) -> Option<H>
    where
        T: RowTree<Handle = H>,
    {
        let remembered = self.current.take()?;
        tree.set_class_name(remembered.row, remembered.previous_class.as_deref());
        trace!(row = ?remembered.row, "restored row class");
        Some(remembered.row)
    }
}

impl SelectionController<NodeId> {
    /// Highlights the row enclosing the first node matching `css`.
    ///
    /// A selector that matches nothing clears the highlight; a selector that
    /// does not parse is an error and leaves the current highlight untouched.
    pub fn highlight_row_matching(&mut self, doc: &mut Document, css: &str) -> Result<Option<NodeId>> {
        let element = select_first(doc, css)?;
        Ok(self.highlight_row(doc, element))
    }
}

/// Walks from `element` through its ancestors to the first element tagged `row_tag`.
pub fn find_row<T: RowTree>(tree: &T, element: T::Handle, row_tag: &str) -> Option<T::Handle> {
    let mut node = element;
    loop {
        if tree
            .tag_name(node)
            .is_some_and(|tag| tag.eq_ignore_ascii_case(row_tag))
        {
            return Some(node);
        }
        node = tree.parent(node)?;
    }
}
