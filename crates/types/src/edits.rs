//! Autofix descriptors attached to lint messages.

use crate::OffsetRange;
use serde::{Deserialize, Serialize};

/// Replacement of a byte range in the *generated* file text.
///
/// Fixes are expressed in the coordinate space of the file the detection pass
/// analyzed; applying them is up to the consumer of the lint results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextEdit {
    /// Byte offset range to replace
    pub range: OffsetRange,
    /// Replacement text (empty string means deletion)
    pub replacement: String,
}

impl TextEdit {
    /// Replace `start..end` with `replacement`.
    #[must_use]
    pub fn replace(start: usize, end: usize, replacement: impl Into<String>) -> Self {
        Self {
            range: OffsetRange::new(start, end),
            replacement: replacement.into(),
        }
    }

    /// Insert `text` at `offset`.
    #[must_use]
    pub fn insert(offset: usize, text: impl Into<String>) -> Self {
        Self::replace(offset, offset, text)
    }

    /// Delete `start..end`.
    #[must_use]
    pub fn delete(start: usize, end: usize) -> Self {
        Self::replace(start, end, String::new())
    }

    fn overlaps(&self, other: &Self) -> bool {
        // Two insertions at the same point are ambiguous as well
        (self.range.start < other.range.end && other.range.start < self.range.end)
            || self.range == other.range
    }
}

/// A structured autofix: a labelled set of edits applied together.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeFix {
    /// Short description of what the fix does
    pub description: String,
    /// Edits in ascending offset order
    pub edits: Vec<TextEdit>,
}

impl CodeFix {
    /// Create a fix; edits are sorted by start offset.
    #[must_use]
    pub fn new(description: impl Into<String>, mut edits: Vec<TextEdit>) -> Self {
        edits.sort_by_key(|edit| (edit.range.start, edit.range.end));
        Self {
            description: description.into(),
            edits,
        }
    }

    /// Returns `true` if any edit of `self` touches a range edited by `other`.
    ///
    /// Consumers applying several fixes to one file skip conflicting ones.
    #[must_use]
    pub fn conflicts_with(&self, other: &Self) -> bool {
        self.edits
            .iter()
            .any(|edit| other.edits.iter().any(|theirs| edit.overlaps(theirs)))
    }
}
