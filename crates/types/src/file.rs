//! File classification: [`FileKind`].

use std::path::Path;

/// Syntactic kind of an analyzed file (determines how comments are scanned).
///
/// Detection passes decide what to look for; the core only needs to know
/// whether a file is tokenized as markup or parsed as a script.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileKind {
    /// ECMAScript modules (.js, .mjs, .cjs)
    JavaScript,
    /// TypeScript sources and declaration overlays (.ts, .d.ts)
    TypeScript,
    /// XML views and fragments (.xml)
    Xml,
    /// HTML bootstrap pages (.html, .htm)
    Html,
}

impl FileKind {
    /// Detect the kind from a file path based on its extension.
    ///
    /// Returns `None` for files the linter does not scan.
    #[must_use]
    pub fn from_path(path: impl AsRef<Path>) -> Option<Self> {
        let extension = path.as_ref().extension()?.to_str()?;

        match extension.to_ascii_lowercase().as_str() {
            "js" | "mjs" | "cjs" => Some(Self::JavaScript),
            "ts" | "mts" | "cts" => Some(Self::TypeScript),
            "xml" => Some(Self::Xml),
            "html" | "htm" => Some(Self::Html),
            _ => None,
        }
    }

    /// Returns `true` for files that go through the markup tokenizer.
    #[must_use]
    pub const fn is_markup(self) -> bool {
        matches!(self, Self::Xml | Self::Html)
    }

    /// Returns `true` for files that go through the script parser.
    #[must_use]
    pub const fn is_script(self) -> bool {
        matches!(self, Self::JavaScript | Self::TypeScript)
    }
}
