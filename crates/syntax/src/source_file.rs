use crate::LineIndex;
use std::sync::Arc;
use ui5lint_types::{FileKind, ResourcePath};

/// A file loaded for analysis: its path, its text and the line index over it.
///
/// The line index is built once on construction so every position lookup of
/// the file's reporter is a binary search.
#[derive(Debug, Clone)]
pub struct SourceFile {
    path: ResourcePath,
    text: Arc<str>,
    line_index: LineIndex,
}

impl SourceFile {
    /// Load a file from its resource path and text.
    #[must_use]
    pub fn new(path: impl Into<ResourcePath>, text: impl Into<Arc<str>>) -> Self {
        let text = text.into();
        let line_index = LineIndex::new(&text);
        Self {
            path: path.into(),
            text,
            line_index,
        }
    }

    /// Resource path of the (possibly generated) file
    #[must_use]
    pub fn path(&self) -> &ResourcePath {
        &self.path
    }

    /// Full file text
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Line index over the file text
    #[must_use]
    pub fn line_index(&self) -> &LineIndex {
        &self.line_index
    }

    /// Kind of the file, derived from its extension
    #[must_use]
    pub fn kind(&self) -> Option<FileKind> {
        FileKind::from_path(self.path.as_str())
    }
}
