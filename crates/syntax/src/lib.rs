//! # Source text and positions
//!
//! This crate turns byte spans of syntax nodes into reportable positions.
//!
//! ## Pipeline
//!
//! ```rust,ignore
//! let file = SourceFile::new("/resources/app/Component.js", text);
//! let trace = TraceMap::parse(&source_map_json)?;
//! let range = resolve_positions(&node_span, &file, Some(&trace))?;
//! ```
//!
//! - [`LineIndex`] converts byte offsets to zero-based line / UTF-16 column
//!   pairs. It can be built from a complete text or fed incrementally, which is
//!   how the markup tokenizer tracks positions while streaming.
//! - [`TraceMap`] wraps an encoded source map and answers "original position
//!   for generated position" queries, refusing sectioned (bundle) maps.
//! - [`resolve_positions`] combines both for any [`SyntaxNode`].
//! - [`parse_script`] parses ECMAScript/TypeScript with swc and collects its
//!   comments, so directives can be read from scripts as well as markup.

mod line_index;
mod node;
mod position;
mod script;
mod source_file;
mod trace_map;

pub use line_index::LineIndex;
pub use node::SyntaxNode;
pub use position::{resolve_positions, PositionError};
pub use script::{parse_script, CommentKind, ParsedScript, ScriptComment, ScriptError};
pub use source_file::SourceFile;
pub use trace_map::{TraceMap, TraceMapError};

// Re-export foundation types for convenience
pub use ui5lint_types::{LineCol, OffsetRange, Position, PositionRange, ResourcePath};
