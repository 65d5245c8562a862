// ABOUTME: Document access seam for the row highlighter.
// ABOUTME: Defines the RowTree trait and implements it for dom_query's mutable Document.

//! DOM utilities for row highlighting.
//!
//! The highlighter only needs four things from a document: parent traversal,
//! tag-name inspection, and reading/writing the `class` attribute. Those are
//! captured by [`RowTree`] so the selection logic stays independent of the
//! concrete tree. [`dom_query::Document`] is the implementation used in
//! practice; its nodes are addressed by [`dom_query::NodeId`].

pub mod compiled;
pub mod highlight;

use dom_query::{Document, NodeId};

/// Minimal view of a document tree needed to find and mark rows.
pub trait RowTree {
    /// Cheap, copyable reference to a node in the tree.
    type Handle: Copy + Eq + std::fmt::Debug;

    /// Parent of `node`, or `None` at the root or for a stale handle.
    fn parent(&self, node: Self::Handle) -> Option<Self::Handle>;

    /// Tag name of an element; `None` for non-element nodes.
    fn tag_name(&self, node: Self::Handle) -> Option<String>;

    /// Value of the `class` attribute; `None` when the attribute is absent.
    fn class_name(&self, node: Self::Handle) -> Option<String>;

    /// Set the `class` attribute, or remove it when `class` is `None`.
    fn set_class_name(&mut self, node: Self::Handle, class: Option<&str>);
}

impl RowTree for Document {
    type Handle = NodeId;

    fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.tree.get(&node)?.parent().map(|p| p.id)
    }

    fn tag_name(&self, node: NodeId) -> Option<String> {
        self.tree
            .get(&node)?
            .node_name()
            .map(|name| name.to_string())
    }

    fn class_name(&self, node: NodeId) -> Option<String> {
        self.tree
            .get(&node)?
            .attr("class")
            .map(|class| class.to_string())
    }

    fn set_class_name(&mut self, node: NodeId, class: Option<&str>) {
        let Some(node) = self.tree.get(&node) else {
            return;
        };
        match class {
            Some(class) => node.set_attr("class", class),
            None => node.remove_attr("class"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::compiled::select_first;

    fn node(doc: &Document, css: &str) -> NodeId {
        select_first(doc, css).unwrap().unwrap()
    }

    #[test]
    fn parent_walks_to_enclosing_element() {
        let doc = Document::from("<table><tr id='r'><td id='c'>x</td></tr></table>");
        let cell = node(&doc, "#c");
        let row = node(&doc, "#r");
        assert_eq!(doc.parent(cell), Some(row));
        assert_eq!(doc.tag_name(row).as_deref(), Some("tr"));
    }

    #[test]
    fn class_round_trip_and_removal() {
        let mut doc = Document::from("<div id='d'>x</div>");
        let div = node(&doc, "#d");
        assert_eq!(doc.class_name(div), None);

        doc.set_class_name(div, Some("on"));
        assert_eq!(doc.class_name(div).as_deref(), Some("on"));

        doc.set_class_name(div, None);
        assert_eq!(doc.class_name(div), None);
    }
}
