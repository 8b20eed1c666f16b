use std::ops::BitOr;
use ui5lint_syntax::SyntaxNode;
use ui5lint_types::{LineCol, OffsetRange};

/// Set of event kinds a caller subscribes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EventKinds(u8);

impl EventKinds {
    pub const NONE: Self = Self(0);
    pub const OPEN_TAG: Self = Self(1);
    pub const CLOSE_TAG: Self = Self(1 << 1);
    pub const COMMENT: Self = Self(1 << 2);
    pub const ALL: Self = Self(Self::OPEN_TAG.0 | Self::CLOSE_TAG.0 | Self::COMMENT.0);

    /// Returns `true` if every kind of `other` is part of `self`.
    #[must_use]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }
}

impl Default for EventKinds {
    fn default() -> Self {
        Self::ALL
    }
}

impl BitOr for EventKinds {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

/// A point in the markup stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TextPoint {
    /// Byte offset from the start of the stream
    pub offset: usize,
    /// Zero-based line and UTF-16 column
    pub line_col: LineCol,
}

/// A start / end pair of points, end exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TextSpan {
    pub start: TextPoint,
    pub end: TextPoint,
}

impl TextSpan {
    /// Byte range of the span
    #[must_use]
    pub const fn range(&self) -> OffsetRange {
        OffsetRange::new(self.start.offset, self.end.offset)
    }
}

impl SyntaxNode for TextSpan {
    fn text_range(&self) -> OffsetRange {
        self.range()
    }
}

/// An attribute of a start tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    /// Qualified name, including any namespace prefix
    pub name: String,
    /// Unescaped value, empty for attributes without a value
    pub value: String,
    pub name_span: TextSpan,
    /// Span of the value without its quotes
    pub value_span: TextSpan,
}

/// A tag and its attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    /// Qualified name, including any namespace prefix
    pub name: String,
    pub attributes: Vec<Attribute>,
    /// Span of the start tag, `<` through `>`
    pub open: TextSpan,
    /// Span of the end tag; equals `open` for self-closing tags and is
    /// `None` until the tag is closed
    pub close: Option<TextSpan>,
    pub self_closing: bool,
}

impl Tag {
    /// Look up an attribute by its qualified name.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&Attribute> {
        self.attributes.iter().find(|attr| attr.name == name)
    }

    /// Local part of the tag name, without namespace prefix
    #[must_use]
    pub fn local_name(&self) -> &str {
        self.name
            .rsplit_once(':')
            .map_or(self.name.as_str(), |(_, local)| local)
    }
}

/// A comment and its span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    /// Text between `<!--` and `-->`
    pub text: String,
    /// Span including the delimiters
    pub span: TextSpan,
}

/// A tokenizer event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MarkupEvent {
    OpenTag(Tag),
    CloseTag(Tag),
    Comment(Comment),
}

impl MarkupEvent {
    /// Kind of this event
    #[must_use]
    pub const fn kind(&self) -> EventKinds {
        match self {
            Self::OpenTag(_) => EventKinds::OPEN_TAG,
            Self::CloseTag(_) => EventKinds::CLOSE_TAG,
            Self::Comment(_) => EventKinds::COMMENT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_kinds() {
        let kinds = EventKinds::OPEN_TAG | EventKinds::COMMENT;
        assert!(kinds.contains(EventKinds::OPEN_TAG));
        assert!(kinds.contains(EventKinds::COMMENT));
        assert!(!kinds.contains(EventKinds::CLOSE_TAG));
        assert!(EventKinds::default().contains(kinds));
        assert!(!EventKinds::NONE.contains(EventKinds::COMMENT));
    }

    #[test]
    fn test_local_name() {
        let tag = Tag {
            name: "mvc:View".to_string(),
            attributes: Vec::new(),
            open: TextSpan::default(),
            close: None,
            self_closing: false,
        };
        assert_eq!(tag.local_name(), "View");
    }
}
