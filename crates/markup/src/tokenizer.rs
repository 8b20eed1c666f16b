//! Tag tracking on top of raw XML events.

use crate::attributes::{scan_attributes, span};
use crate::event::{Comment, EventKinds, MarkupEvent, Tag, TextSpan};
use quick_xml::events::{BytesStart, Event};
use ui5lint_syntax::LineIndex;

/// Turns raw reader events into [`MarkupEvent`]s for one stream.
///
/// Open tags are kept on a stack so a close event carries the attributes of
/// its tag as well as both spans.
pub(crate) struct Tokenizer<F> {
    kinds: EventKinds,
    handler: F,
    open: Vec<Tag>,
}

impl<F: FnMut(MarkupEvent)> Tokenizer<F> {
    pub(crate) fn new(kinds: EventKinds, handler: F) -> Self {
        Self {
            kinds,
            handler,
            open: Vec::new(),
        }
    }

    /// Handle the event read between stream offsets `start` and `end`.
    ///
    /// Returns `false` once the end of input is reached.
    pub(crate) fn handle(
        &mut self,
        event: Event<'_>,
        start: usize,
        end: usize,
        index: &LineIndex,
    ) -> bool {
        match event {
            Event::Start(start_tag) => {
                let tag = open_tag(&start_tag, start, end, index, false);
                if self.kinds.contains(EventKinds::OPEN_TAG) {
                    (self.handler)(MarkupEvent::OpenTag(tag.clone()));
                }
                self.open.push(tag);
            }
            Event::Empty(start_tag) => {
                let mut tag = open_tag(&start_tag, start, end, index, true);
                tag.close = Some(tag.open);
                if self.kinds.contains(EventKinds::OPEN_TAG) {
                    (self.handler)(MarkupEvent::OpenTag(tag.clone()));
                }
                if self.kinds.contains(EventKinds::CLOSE_TAG) {
                    (self.handler)(MarkupEvent::CloseTag(tag));
                }
            }
            Event::End(end_tag) => {
                self.close(end_tag.name().as_ref(), span(start, end, index));
            }
            Event::Comment(text) => {
                if self.kinds.contains(EventKinds::COMMENT) {
                    (self.handler)(MarkupEvent::Comment(Comment {
                        text: String::from_utf8_lossy(&text).into_owned(),
                        span: span(start, end, index),
                    }));
                }
            }
            Event::Eof => {
                if !self.open.is_empty() {
                    tracing::trace!(unclosed = self.open.len(), "Input ended with open tags");
                }
                return false;
            }
            _ => {}
        }
        true
    }

    fn close(&mut self, name: &[u8], close_span: TextSpan) {
        let name = String::from_utf8_lossy(name);
        let Some(depth) = self.open.iter().rposition(|tag| tag.name == name) else {
            tracing::trace!(tag = %name, "Ignoring end tag without matching start tag");
            return;
        };

        let implicitly_closed = self.open.len() - depth - 1;
        if implicitly_closed > 0 {
            tracing::trace!(tag = %name, implicitly_closed, "End tag closes nested open tags");
        }
        self.open.truncate(depth + 1);

        if let Some(mut tag) = self.open.pop() {
            tag.close = Some(close_span);
            if self.kinds.contains(EventKinds::CLOSE_TAG) {
                (self.handler)(MarkupEvent::CloseTag(tag));
            }
        }
    }
}

fn open_tag(
    start_tag: &BytesStart<'_>,
    start: usize,
    end: usize,
    index: &LineIndex,
    self_closing: bool,
) -> Tag {
    let name = start_tag.name();
    let content: &[u8] = start_tag;
    Tag {
        name: String::from_utf8_lossy(name.as_ref()).into_owned(),
        // Tag content starts after `<`
        attributes: scan_attributes(content, name.as_ref().len(), start + 1, index),
        open: span(start, end, index),
        close: None,
        self_closing,
    }
}
