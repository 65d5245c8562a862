// ABOUTME: Decodes raw HTML bytes to a String whatever their character encoding.
// ABOUTME: Uses a BOM, then a <meta> charset declaration, then chardetng detection.

use chardetng::EncodingDetector;
use encoding_rs::Encoding;
use once_cell::sync::Lazy;
use regex::bytes::Regex;

/// How far into the document a `<meta>` charset declaration is looked for.
const PRESCAN_LIMIT: usize = 1024;

static META_CHARSET: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)<meta[^>]*?charset\s*=\s*["']?\s*([a-z0-9_:.\-]+)"#)
        .expect("meta charset pattern is valid")
});

/// Decodes HTML bytes to text. Never fails: undecodable sequences become U+FFFD.
///
/// A byte order mark wins, then a `<meta charset>` (or `http-equiv`
/// content-type) declaration near the top, then statistical detection.
pub fn decode_html(bytes: &[u8]) -> String {
    let encoding = declared_encoding(bytes).unwrap_or_else(|| {
        let mut detector = EncodingDetector::new();
        detector.feed(bytes, true);
        detector.guess(None, true)
    });
    // decode() honors a BOM over the chosen encoding.
    let (decoded, used, had_errors) = encoding.decode(bytes);
    tracing::debug!(encoding = used.name(), had_errors, "decoded html bytes");
    decoded.into_owned()
}

fn declared_encoding(bytes: &[u8]) -> Option<&'static Encoding> {
    let head = &bytes[..bytes.len().min(PRESCAN_LIMIT)];
    let label = META_CHARSET.captures(head)?.get(1)?;
    Encoding::for_label(label.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn utf8_passes_through() {
        assert_eq!(decode_html("<p>Café</p>".as_bytes()), "<p>Café</p>");
    }

    #[test]
    fn latin1_bytes_are_detected() {
        let html = b"<p>Un caf\xe9 cr\xe8me et une cr\xe8me br\xfbl\xe9e, s'il vous pla\xeet.</p>";
        assert_eq!(
            decode_html(html),
            "<p>Un café crème et une crème brûlée, s'il vous plaît.</p>"
        );
    }

    #[test]
    fn meta_charset_is_honored() {
        let html = b"<meta charset=\"windows-1251\"><p>\xcf\xf0\xe8\xe2\xe5\xf2</p>";
        assert!(decode_html(html).contains("Привет"));

        let html = b"<meta http-equiv=\"Content-Type\" content=\"text/html; charset=ISO-8859-2\"><p>\xb1</p>";
        assert!(decode_html(html).contains('ą'));
    }

    #[test]
    fn bom_overrides_declaration() {
        let mut html = vec![0xEF, 0xBB, 0xBF];
        html.extend_from_slice("<meta charset=\"latin1\"><p>Café</p>".as_bytes());
        assert!(decode_html(&html).ends_with("<p>Café</p>"));
    }
}
