//! Foundation types for ui5lint.
//!
//! This crate provides the shared vocabulary of the linting core: how files
//! are identified, how locations inside them are expressed and how autofixes
//! are described. It only depends on `serde`, so every layer (including the
//! external formatting layer) can serialize these types.
//!
//! # Type Categories
//!
//! - **File types**: [`ResourcePath`], [`FileKind`]
//! - **Position types**: [`Position`], [`PositionRange`], [`LineCol`], [`OffsetRange`]
//! - **Edit types**: [`TextEdit`], [`CodeFix`]

mod edits;
mod file;
mod path;
mod position;

pub use edits::{CodeFix, TextEdit};
pub use file::FileKind;
pub use path::ResourcePath;
pub use position::{LineCol, OffsetRange, Position, PositionRange};
