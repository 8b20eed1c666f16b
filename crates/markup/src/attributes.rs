//! Attribute scanning over the raw bytes of a start tag.

use crate::event::{Attribute, TextPoint, TextSpan};
use std::borrow::Cow;
use ui5lint_syntax::LineIndex;

/// Scan the attributes of a start tag.
///
/// `content` is the tag text between `<` and `>` (or `/>`), starting with the
/// tag name; `offset` is the stream offset of its first byte. Malformed
/// attributes are kept as far as they can be read.
pub(crate) fn scan_attributes(
    content: &[u8],
    name_len: usize,
    offset: usize,
    index: &LineIndex,
) -> Vec<Attribute> {
    let mut attributes = Vec::new();
    let mut i = name_len;

    loop {
        i = skip_whitespace(content, i);
        if i >= content.len() {
            break;
        }

        let name_start = i;
        while i < content.len() && !content[i].is_ascii_whitespace() && content[i] != b'=' {
            i += 1;
        }
        if i == name_start {
            // Stray `=`
            i += 1;
            continue;
        }
        let name_end = i;

        let after_name = skip_whitespace(content, i);
        let (value_start, value_end) = if content.get(after_name) == Some(&b'=') {
            i = skip_whitespace(content, after_name + 1);
            match content.get(i) {
                Some(&quote @ (b'"' | b'\'')) => {
                    let start = i + 1;
                    i = start;
                    while i < content.len() && content[i] != quote {
                        i += 1;
                    }
                    let end = i;
                    i = (i + 1).min(content.len());
                    (start, end)
                }
                _ => {
                    let start = i;
                    while i < content.len() && !content[i].is_ascii_whitespace() {
                        i += 1;
                    }
                    (start, i)
                }
            }
        } else {
            (name_end, name_end)
        };

        let raw_value = String::from_utf8_lossy(&content[value_start..value_end]);
        attributes.push(Attribute {
            name: String::from_utf8_lossy(&content[name_start..name_end]).into_owned(),
            value: unescape(raw_value),
            name_span: span(offset + name_start, offset + name_end, index),
            value_span: span(offset + value_start, offset + value_end, index),
        });
    }

    attributes
}

fn skip_whitespace(content: &[u8], mut i: usize) -> usize {
    while i < content.len() && content[i].is_ascii_whitespace() {
        i += 1;
    }
    i
}

fn unescape(raw: Cow<'_, str>) -> String {
    match quick_xml::escape::unescape(&raw) {
        Ok(value) => value.into_owned(),
        Err(err) => {
            tracing::trace!(error = %err, "Keeping attribute value with invalid escape as-is");
            raw.into_owned()
        }
    }
}

pub(crate) fn point(offset: usize, index: &LineIndex) -> TextPoint {
    TextPoint {
        offset,
        line_col: index.line_col(offset).unwrap_or_default(),
    }
}

pub(crate) fn span(start: usize, end: usize, index: &LineIndex) -> TextSpan {
    TextSpan {
        start: point(start, index),
        end: point(end, index),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan(tag: &str) -> Vec<Attribute> {
        let text = format!("<{tag}>");
        let name_len = tag.find(char::is_whitespace).unwrap_or(tag.len());
        scan_attributes(tag.as_bytes(), name_len, 1, &LineIndex::new(&text))
    }

    #[test]
    fn test_quoted_values() {
        let attrs = scan(r#"Button text="Save" press='.onSave'"#);
        assert_eq!(attrs.len(), 2);
        assert_eq!(attrs[0].name, "text");
        assert_eq!(attrs[0].value, "Save");
        assert_eq!(attrs[1].name, "press");
        assert_eq!(attrs[1].value, ".onSave");
    }

    #[test]
    fn test_value_span_excludes_quotes() {
        let attrs = scan(r#"Button text="Save""#);
        // `<Button text="` is 14 bytes
        assert_eq!(attrs[0].value_span.range().start, 14);
        assert_eq!(attrs[0].value_span.range().end, 18);
        assert_eq!(attrs[0].name_span.start.line_col.character, 8);
    }

    #[test]
    fn test_entities_are_unescaped() {
        let attrs = scan(r#"Text text="a &amp; b""#);
        assert_eq!(attrs[0].value, "a & b");
    }

    #[test]
    fn test_attribute_without_value() {
        let attrs = scan("input disabled");
        assert_eq!(attrs[0].name, "disabled");
        assert_eq!(attrs[0].value, "");
    }

    #[test]
    fn test_spaces_around_equals() {
        let attrs = scan(r#"Text text = "x" id=y"#);
        assert_eq!(attrs[0].value, "x");
        assert_eq!(attrs[1].name, "id");
        assert_eq!(attrs[1].value, "y");
    }
}
