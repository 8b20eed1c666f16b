//! [`ResourcePath`], the join key between reporters, the context and results.

use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Normalized POSIX-style path of a resource inside the analyzed project.
///
/// Construction normalizes the input: backslashes become `/`, repeated slashes
/// collapse, `.` segments are dropped and `..` segments remove their parent.
/// Two paths naming the same file therefore compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct ResourcePath(Arc<str>);

impl ResourcePath {
    /// Create a normalized resource path.
    #[must_use]
    pub fn new(path: impl AsRef<str>) -> Self {
        Self(Arc::from(normalize(path.as_ref())))
    }

    /// Get the path as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Directory portion of the path (`dirname`).
    ///
    /// Returns `"/"` for top-level absolute paths and `"."` for bare file names.
    #[must_use]
    pub fn parent(&self) -> Self {
        match self.0.rfind('/') {
            Some(0) => Self(Arc::from("/")),
            Some(index) => Self(Arc::from(&self.0[..index])),
            None => Self(Arc::from(".")),
        }
    }

    /// Join a relative path onto this one (`path.posix.join` semantics).
    ///
    /// The relative part is always appended, even when it starts with `/`.
    #[must_use]
    pub fn join(&self, relative: &str) -> Self {
        Self::new(format!("{}/{relative}", self.0))
    }

    /// File name (last segment).
    #[must_use]
    pub fn file_name(&self) -> &str {
        self.0.rsplit('/').next().unwrap_or(&self.0)
    }
}

impl std::fmt::Display for ResourcePath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for ResourcePath {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<&str> for ResourcePath {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<ResourcePath> for String {
    fn from(value: ResourcePath) -> Self {
        value.0.to_string()
    }
}

fn normalize(path: &str) -> String {
    let path = path.replace('\\', "/");
    let absolute = path.starts_with('/');
    let mut segments: Vec<&str> = Vec::new();

    for segment in path.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                if segments.last().is_some_and(|last| *last != "..") {
                    segments.pop();
                } else if !absolute {
                    // Relative paths keep leading parent references
                    segments.push("..");
                }
            }
            other => segments.push(other),
        }
    }

    let joined = segments.join("/");
    match (absolute, joined.is_empty()) {
        (true, _) => format!("/{joined}"),
        (false, true) => ".".to_string(),
        (false, false) => joined,
    }
}
