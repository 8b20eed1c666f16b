//! Entry points driving the tokenizer over sync and async byte sources.

use crate::counting::CountingReader;
use crate::error::{Result, TokenizerError};
use crate::event::{EventKinds, MarkupEvent};
use crate::tokenizer::Tokenizer;
use quick_xml::reader::{Config, Reader};
use std::io::Read;
use std::path::Path;
use tokio::io::AsyncRead;

/// Tokenize a markup stream, calling `handler` for every event of `kinds`.
///
/// Events are delivered in document order while the stream is read; the
/// input is never held in memory as a whole. Returns once the end of input is
/// reached, or with the first read or syntax error.
pub fn parse_xml<R, F>(source: R, kinds: EventKinds, handler: F) -> Result<()>
where
    R: Read,
    F: FnMut(MarkupEvent),
{
    let mut reader = Reader::from_reader(std::io::BufReader::new(CountingReader::new(source)));
    configure(reader.config_mut());
    let mut tokenizer = Tokenizer::new(kinds, handler);
    let mut buf = Vec::new();

    loop {
        let start = position(&reader);
        let event = reader
            .read_event_into(&mut buf)
            .map_err(|err| TokenizerError::from_xml(err, position(&reader)))?;
        let end = position(&reader);
        let index = reader.get_ref().get_ref().line_index();
        if !tokenizer.handle(event, start, end, index) {
            return Ok(());
        }
        buf.clear();
    }
}

/// Async variant of [`parse_xml`] for `tokio` byte sources.
pub async fn parse_xml_async<R, F>(source: R, kinds: EventKinds, handler: F) -> Result<()>
where
    R: AsyncRead + Unpin,
    F: FnMut(MarkupEvent),
{
    let mut reader = Reader::from_reader(tokio::io::BufReader::new(CountingReader::new(source)));
    configure(reader.config_mut());
    let mut tokenizer = Tokenizer::new(kinds, handler);
    let mut buf = Vec::new();

    loop {
        let start = position(&reader);
        let event = match reader.read_event_into_async(&mut buf).await {
            Ok(event) => event,
            Err(err) => return Err(TokenizerError::from_xml(err, position(&reader))),
        };
        let end = position(&reader);
        let index = reader.get_ref().get_ref().line_index();
        if !tokenizer.handle(event, start, end, index) {
            return Ok(());
        }
        buf.clear();
    }
}

/// Tokenize a markup file from disk.
#[tracing::instrument(skip_all, fields(path = %path.display()))]
pub async fn parse_xml_file<F>(path: &Path, kinds: EventKinds, handler: F) -> Result<()>
where
    F: FnMut(MarkupEvent),
{
    let file = tokio::fs::File::open(path).await?;
    parse_xml_async(file, kinds, handler).await
}

fn configure(config: &mut Config) {
    // Markup is linted as written: tolerate mismatched and stray end tags
    // and report whitespace text so offsets stay contiguous.
    config.check_end_names = false;
    config.allow_unmatched_ends = true;
    config.check_comments = false;
    config.expand_empty_elements = false;
    config.trim_text_start = false;
    config.trim_text_end = false;
}

fn position<R>(reader: &Reader<R>) -> usize {
    usize::try_from(reader.buffer_position()).unwrap_or(usize::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Tag;

    fn collect(text: &str, kinds: EventKinds) -> Vec<MarkupEvent> {
        let mut events = Vec::new();
        parse_xml(text.as_bytes(), kinds, |event| events.push(event)).unwrap();
        events
    }

    fn tag(event: &MarkupEvent) -> &Tag {
        match event {
            MarkupEvent::OpenTag(tag) | MarkupEvent::CloseTag(tag) => tag,
            MarkupEvent::Comment(_) => panic!("expected a tag event"),
        }
    }

    #[test]
    fn test_events_in_document_order() {
        let events = collect(
            "<mvc:View xmlns:mvc=\"sap.ui.core.mvc\">\n  <!-- note -->\n  <Button/>\n</mvc:View>",
            EventKinds::ALL,
        );
        let kinds: Vec<_> = events.iter().map(MarkupEvent::kind).collect();
        assert_eq!(
            kinds,
            [
                EventKinds::OPEN_TAG,
                EventKinds::COMMENT,
                EventKinds::OPEN_TAG,
                EventKinds::CLOSE_TAG,
                EventKinds::CLOSE_TAG,
            ]
        );
        assert_eq!(tag(&events[4]).name, "mvc:View");
    }

    #[test]
    fn test_only_subscribed_kinds_are_emitted() {
        let events = collect("<a><!-- x --><b/></a>", EventKinds::COMMENT);
        assert_eq!(events.len(), 1);
        assert!(matches!(&events[0], MarkupEvent::Comment(c) if c.text == " x "));
    }

    #[test]
    fn test_tag_positions() {
        let text = "<View>\n  <Text text=\"a\" />\n</View>";
        let events = collect(text, EventKinds::ALL);

        let view = tag(&events[0]);
        assert_eq!(view.open.range().start, 0);
        assert_eq!(view.open.range().end, 6);

        let text_tag = tag(&events[1]);
        assert!(text_tag.self_closing);
        assert_eq!(text_tag.open.start.line_col.line, 1);
        assert_eq!(text_tag.open.start.line_col.character, 2);
        assert_eq!(text_tag.close, Some(text_tag.open));
        assert_eq!(text_tag.attribute("text").map(|a| a.value.as_str()), Some("a"));

        let close = tag(&events[3]);
        let close_span = close.close.unwrap();
        assert_eq!(close_span.start.line_col.line, 2);
        assert_eq!(close_span.start.line_col.character, 0);
        assert_eq!(close_span.range().end, text.len());
        assert_eq!(close.open.range().start, 0);
    }

    #[test]
    fn test_comment_span_covers_delimiters() {
        let text = "<a>\n\u{e4}<!-- ui5lint-disable -->\n</a>";
        let events = collect(text, EventKinds::COMMENT);
        let MarkupEvent::Comment(comment) = &events[0] else {
            panic!("expected a comment");
        };
        assert_eq!(comment.text, " ui5lint-disable ");
        assert_eq!(comment.span.range().start, text.find("<!--").unwrap());
        // The two-byte character counts as one UTF-16 unit
        assert_eq!(comment.span.start.line_col.character, 1);
        assert_eq!(comment.span.end.offset, text.find("\n</a>").unwrap());
    }

    #[test]
    fn test_mismatched_end_tags_are_tolerated() {
        let events = collect("<a><b></a></c>", EventKinds::CLOSE_TAG);
        assert_eq!(events.len(), 1);
        assert_eq!(tag(&events[0]).name, "a");
    }

    #[test]
    fn test_malformed_markup_is_an_error() {
        let result = parse_xml("<a><!-- unterminated".as_bytes(), EventKinds::ALL, |_| {});
        assert!(matches!(result, Err(TokenizerError::Syntax { .. })));
    }

    #[tokio::test]
    async fn test_async_matches_sync() {
        let text = "<a x=\"1\">\n<!-- c -->\n<b/></a>";
        let mut events = Vec::new();
        parse_xml_async(text.as_bytes(), EventKinds::ALL, |event| events.push(event))
            .await
            .unwrap();
        assert_eq!(events, collect(text, EventKinds::ALL));
    }
}
