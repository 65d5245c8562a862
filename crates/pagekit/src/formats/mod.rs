// ABOUTME: HTML to plain text conversion.
// ABOUTME: Parses a fragment with scraper and renders it with block/inline aware line breaking.

//! Plain text conversion.
//!
//! There is no layout engine here, so the rendered text of a browser is
//! approximated: tags are classified as block (own line), inline (nothing),
//! preformatted (whitespace kept) or hidden (dropped). The parser corrects
//! malformed markup the same way browsers do, so conversion never fails.
//! Markup is not sanitized; it is only parsed, never executed.

pub mod charset;
mod text;

use scraper::Html;
use tracing::trace;

use crate::options::TextOptions;
use text::TextRenderer;

pub use charset::decode_html;

/// Converts an HTML fragment to its rendered plain text using default options.
///
/// ```
/// assert_eq!(igps_pagekit::html_to_text("<b>Hi</b> <i>there</i>"), "Hi there");
/// ```
pub fn html_to_text(html: &str) -> String {
    html_to_text_with(html, &TextOptions::default())
}

/// Converts an HTML fragment to plain text with explicit options.
pub fn html_to_text_with(html: &str, opts: &TextOptions) -> String {
    let fragment = Html::parse_fragment(html);
    let mut renderer = TextRenderer::new(opts);
    renderer.walk(fragment.tree.root(), false);
    let text = renderer.finish();
    trace!(input_len = html.len(), output_len = text.len(), "rendered html to text");
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inline_tags_are_stripped() {
        assert_eq!(html_to_text("<b>Hi</b> <i>there</i>"), "Hi there");
        assert_eq!(html_to_text("<b>bold</b><i>it</i>"), "boldit");
    }

    #[test]
    fn entities_are_decoded() {
        assert_eq!(html_to_text("Tom &amp; Jerry &lt;3"), "Tom & Jerry <3");
    }

    #[test]
    fn whitespace_collapses() {
        assert_eq!(html_to_text("  lots   of\n\n spaces  "), "lots of spaces");
        assert_eq!(html_to_text("a <span> </span> b"), "a b");
    }

    #[test]
    fn blocks_break_lines() {
        assert_eq!(html_to_text("<div>one</div><div>two</div>"), "one\ntwo");
        assert_eq!(html_to_text("<ul><li>one</li><li>two</li></ul>"), "one\ntwo");
        assert_eq!(html_to_text("<h1>Title</h1>body"), "Title\nbody");
    }

    #[test]
    fn paragraphs_get_blank_line() {
        assert_eq!(html_to_text("<p>one</p>\n<p>two</p>"), "one\n\ntwo");

        let opts = TextOptions::builder().paragraph_spacing(false).build();
        assert_eq!(html_to_text_with("<p>one</p><p>two</p>", &opts), "one\ntwo");
    }

    #[test]
    fn br_is_a_newline() {
        assert_eq!(html_to_text("line<br>break"), "line\nbreak");
        assert_eq!(html_to_text("<div>a <br> b</div>"), "a\nb");
    }

    #[test]
    fn table_cells_are_tab_separated() {
        let html = "<table><tr><td>a</td><td>b</td></tr><tr><td>c</td> <td>d</td></tr></table>";
        assert_eq!(html_to_text(html), "a\tb\nc\td");
    }

    #[test]
    fn empty_first_cell_keeps_row_on_its_own_line() {
        let html = "<table><tr><td>a</td><td>b</td></tr><tr><td></td><td>c</td></tr></table>";
        assert_eq!(html_to_text(html), "a\tb\n\tc");

        let html = "<table><tr><td>a</td></tr><tr><td><script>x()</script></td><td>c</td></tr></table>";
        assert_eq!(html_to_text(html), "a\n\tc");
    }

    #[test]
    fn blocks_inside_cells_stay_on_row_line() {
        let html = "<table><tr><td><div>a</div></td><td>b</td></tr></table>";
        assert_eq!(html_to_text(html), "a\tb");
    }

    #[test]
    fn leading_and_trailing_br_are_dropped() {
        assert_eq!(html_to_text("<br>a"), "a");
        assert_eq!(html_to_text("a<br>"), "a");
        assert_eq!(html_to_text("<br><br>a<br><br>"), "a");
        assert_eq!(html_to_text("a<br><br>b"), "a\n\nb");
    }

    #[test]
    fn hidden_and_skipped_tags_drop_content() {
        assert_eq!(html_to_text("<script>alert(1)</script>ok<style>p{}</style>"), "ok");

        let opts = TextOptions::builder().skip_tag("nav").build();
        assert_eq!(html_to_text_with("<nav>menu</nav><p>body</p>", &opts), "body");
    }

    #[test]
    fn preformatted_text_keeps_whitespace() {
        assert_eq!(html_to_text("<pre>a  b\n  c</pre>"), "a  b\n  c");
    }

    #[test]
    fn malformed_markup_is_tolerated() {
        assert_eq!(html_to_text("<p>a<p>b"), "a\n\nb");
        assert_eq!(html_to_text("<b>unclosed <i>tags"), "unclosed tags");
        assert_eq!(html_to_text(""), "");
    }
}
