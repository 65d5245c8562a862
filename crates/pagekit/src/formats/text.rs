// ABOUTME: Block/inline aware renderer that turns a parsed HTML tree into plain text.
// ABOUTME: Approximates a browser's rendered text: collapses whitespace, breaks lines around blocks.

use std::collections::HashSet;

use ego_tree::NodeRef;
use once_cell::sync::Lazy;
use scraper::Node;

use crate::options::TextOptions;

/// Elements whose content never shows up in rendered text.
const HIDDEN_TAGS: &[&str] = &["script", "style", "noscript", "template", "head", "title"];

/// Elements whose text keeps its whitespace verbatim.
const PREFORMATTED_TAGS: &[&str] = &["pre", "textarea", "listing", "plaintext", "xmp"];

/// Elements laid out as blocks: each starts and ends on its own line.
static BLOCK_TAGS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "address", "article", "aside", "blockquote", "body", "caption", "center", "dd", "details",
        "dialog", "dir", "div", "dl", "dt", "fieldset", "figcaption", "figure", "footer", "form",
        "h1", "h2", "h3", "h4", "h5", "h6", "header", "hgroup", "hr", "html", "legend", "li",
        "main", "menu", "nav", "ol", "p", "pre", "section", "summary", "table", "tbody", "tfoot",
        "thead", "tr", "ul",
    ]
    .into_iter()
    .collect()
});

/// Accumulates rendered text while walking the tree in document order.
pub(crate) struct TextRenderer<'a> {
    opts: &'a TextOptions,
    out: String,
    pending_breaks: usize,
    /// Breaks owed before the current table row, not yet written.
    row_breaks: usize,
}

impl<'a> TextRenderer<'a> {
    pub(crate) fn new(opts: &'a TextOptions) -> Self {
        Self {
            opts,
            out: String::new(),
            pending_breaks: 0,
            row_breaks: 0,
        }
    }

    pub(crate) fn finish(mut self) -> String {
        let kept = self.out.trim_end_matches(|c: char| c == '\n' || c == ' ').len();
        self.out.truncate(kept);
        self.out
    }

    pub(crate) fn walk(&mut self, node: NodeRef<Node>, preformatted: bool) {
        match node.value() {
            Node::Text(text) => self.push_text(text, preformatted),
            Node::Element(el) => {
                let name = el.name();
                if HIDDEN_TAGS.contains(&name) || self.opts.skips(name) {
                    return;
                }
                match name {
                    "br" => {
                        self.line_break();
                        return;
                    }
                    "td" | "th" if follows_cell(node) => self.cell_separator(),
                    _ => {}
                }

                let breaks = self.breaks_around(name);
                self.request_breaks(breaks);
                if name == "tr" {
                    self.row_breaks = self.pending_breaks;
                }
                let preformatted = preformatted || PREFORMATTED_TAGS.contains(&name);
                for child in node.children() {
                    self.walk(child, preformatted);
                }
                self.request_breaks(breaks);
            }
            Node::Document | Node::Fragment => {
                for child in node.children() {
                    self.walk(child, preformatted);
                }
            }
            _ => {}
        }
    }

    fn breaks_around(&self, name: &str) -> usize {
        if name == "p" && self.opts.paragraph_spacing {
            2
        } else if BLOCK_TAGS.contains(name) {
            1
        } else {
            0
        }
    }

    fn request_breaks(&mut self, count: usize) {
        self.pending_breaks = self.pending_breaks.max(count);
    }

    fn push_text(&mut self, text: &str, preformatted: bool) {
        if preformatted {
            if !text.is_empty() {
                self.flush_breaks();
                self.out.push_str(text);
            }
            return;
        }

        for c in text.chars() {
            if c.is_ascii_whitespace() {
                if !self.at_line_start() && !self.out.ends_with(|c: char| c.is_ascii_whitespace()) {
                    self.out.push(' ');
                }
            } else {
                self.flush_breaks();
                self.out.push(c);
            }
        }
    }

    fn line_break(&mut self) {
        if self.out.is_empty() {
            return;
        }
        self.flush_breaks();
        self.trim_trailing_spaces();
        self.out.push('\n');
    }

    fn cell_separator(&mut self) {
        // Breaks requested inside the previous cell stay on the row's line; the
        // row's own break is still owed when its earlier cells rendered nothing.
        self.pending_breaks = std::mem::take(&mut self.row_breaks);
        self.flush_breaks();
        self.trim_trailing_spaces();
        self.out.push_str(&self.opts.cell_separator);
    }

    /// Emits pending breaks, counting newlines already written by `<br>`.
    fn flush_breaks(&mut self) {
        let wanted = std::mem::take(&mut self.pending_breaks);
        self.row_breaks = 0;
        if wanted == 0 || self.out.is_empty() {
            return;
        }
        self.trim_trailing_spaces();
        let existing = self.out.chars().rev().take_while(|c| *c == '\n').count();
        for _ in existing..wanted {
            self.out.push('\n');
        }
    }

    fn at_line_start(&self) -> bool {
        self.out.is_empty() || self.out.ends_with('\n') || self.pending_breaks > 0
    }

    fn trim_trailing_spaces(&mut self) {
        let kept = self.out.trim_end_matches(' ').len();
        self.out.truncate(kept);
    }
}

/// True if an earlier sibling of `node` is a table cell.
fn follows_cell(node: NodeRef<Node>) -> bool {
    node.prev_siblings().any(|sibling| {
        matches!(sibling.value(), Node::Element(el) if matches!(el.name(), "td" | "th"))
    })
}
