//! Position and range types for source locations.

use serde::{Deserialize, Serialize};
use std::num::NonZeroU32;

/// Byte offset range in a source file.
///
/// Used internally by syntax nodes and tokenizer events. Byte offsets are
/// converted to line/column [`Position`]s before they are reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct OffsetRange {
    /// Start byte offset (inclusive)
    pub start: usize,
    /// End byte offset (exclusive)
    pub end: usize,
}

impl OffsetRange {
    /// Create a new offset range.
    #[must_use]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Create a zero-width range at a specific offset.
    #[must_use]
    pub const fn at(offset: usize) -> Self {
        Self {
            start: offset,
            end: offset,
        }
    }

    /// Returns the length of this range in bytes, or `None` if the range is inverted.
    #[must_use]
    pub const fn len(&self) -> Option<usize> {
        self.end.checked_sub(self.start)
    }

    /// Returns `true` if this is a zero-width range.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns `true` if `start` lies after `end`.
    #[must_use]
    pub const fn is_inverted(&self) -> bool {
        self.start > self.end
    }
}

impl std::fmt::Display for OffsetRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// Zero-based line/column pair.
///
/// This is the internal coordinate space of the tokenizer, the line index and
/// source-map lookups. `character` counts UTF-16 code units from the start of
/// the line, which is the unit source maps and ECMAScript tooling use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct LineCol {
    /// Line number (0-indexed)
    pub line: u32,
    /// Character offset within the line (0-indexed, UTF-16 code units)
    pub character: u32,
}

impl LineCol {
    /// Create a new zero-based line/column pair.
    #[must_use]
    pub const fn new(line: u32, character: u32) -> Self {
        Self { line, character }
    }
}

impl PartialOrd for LineCol {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for LineCol {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        match self.line.cmp(&other.line) {
            std::cmp::Ordering::Equal => self.character.cmp(&other.character),
            ord => ord,
        }
    }
}

/// Reported position in a source file (1-based, aligned with most IDEs).
///
/// Both coordinates are stored as [`NonZeroU32`], so a position with a line or
/// column below 1 cannot be constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    line: NonZeroU32,
    column: NonZeroU32,
}

impl Position {
    /// The first column of the first line, used for file-level diagnostics.
    pub const FILE_START: Self = Self {
        line: NonZeroU32::MIN,
        column: NonZeroU32::MIN,
    };

    /// Create a position from 1-based coordinates.
    ///
    /// Returns `None` if either coordinate is 0.
    #[must_use]
    pub fn new(line: u32, column: u32) -> Option<Self> {
        Some(Self {
            line: NonZeroU32::new(line)?,
            column: NonZeroU32::new(column)?,
        })
    }

    /// Convert a zero-based [`LineCol`] into a 1-based position.
    #[must_use]
    pub fn from_line_col(line_col: LineCol) -> Self {
        Self {
            line: NonZeroU32::MIN.saturating_add(line_col.line),
            column: NonZeroU32::MIN.saturating_add(line_col.character),
        }
    }

    /// Line number (1-based)
    #[must_use]
    pub const fn line(self) -> u32 {
        self.line.get()
    }

    /// Column number (1-based)
    #[must_use]
    pub const fn column(self) -> u32 {
        self.column.get()
    }
}

impl PartialOrd for Position {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Position {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        match self.line.cmp(&other.line) {
            std::cmp::Ordering::Equal => self.column.cmp(&other.column),
            ord => ord,
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Start and end position of a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PositionRange {
    /// Start position (inclusive)
    pub start: Position,
    /// End position (exclusive)
    pub end: Position,
}

impl PositionRange {
    /// Create a new range.
    #[must_use]
    pub const fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }
}
