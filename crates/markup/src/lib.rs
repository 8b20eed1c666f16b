//! # Streaming markup tokenizer
//!
//! Reads XML (and XML-like HTML) incrementally and emits the events a
//! detection pass subscribes to: tag opens, tag closes and comments. Every
//! event carries exact start / end positions as byte offsets plus zero-based
//! line / UTF-16 column pairs.
//!
//! ```rust,ignore
//! parse_xml(reader, EventKinds::COMMENT, |event| {
//!     if let MarkupEvent::Comment(comment) = event {
//!         println!("{}: {}", comment.span.start.line_col.line, comment.text);
//!     }
//! })?;
//! ```
//!
//! Positions are tracked by feeding every byte read from the source into a
//! [`LineIndex`](ui5lint_syntax::LineIndex) before the tokenizer sees it, so
//! the input is never buffered as a whole.

mod attributes;
mod counting;
mod error;
mod event;
mod parse;
mod tokenizer;

pub use error::{Result, TokenizerError};
pub use event::{Attribute, Comment, EventKinds, MarkupEvent, Tag, TextPoint, TextSpan};
pub use parse::{parse_xml, parse_xml_async, parse_xml_file};
