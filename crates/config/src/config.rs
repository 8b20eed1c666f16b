use crate::{ConfigError, Result};
use glob::{MatchOptions, Pattern};
use serde::{Deserialize, Serialize};

const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: false,
};

/// Linter configuration.
///
/// Every field is optional in the config file:
///
/// ```yaml
/// ignores: ["webapp/thirdparty/**"]
/// coverage: true
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LinterConfig {
    /// Glob patterns of resource paths that never receive results
    pub ignores: Vec<String>,

    /// Record coverage entries for code the detection passes could not fully
    /// analyze
    pub coverage: bool,

    /// Keep the detailed explanation of messages and coverage entries
    pub details: bool,
}

impl LinterConfig {
    /// Compile the ignore patterns.
    pub fn ignore_matcher(&self) -> Result<IgnoreMatcher> {
        IgnoreMatcher::new(self.ignores.as_slice())
    }
}

/// Compiled ignore patterns.
#[derive(Debug, Clone, Default)]
pub struct IgnoreMatcher {
    patterns: Vec<Pattern>,
}

impl IgnoreMatcher {
    pub fn new<S: AsRef<str>>(patterns: &[S]) -> Result<Self> {
        let patterns = patterns
            .iter()
            .map(|pattern| {
                let pattern = pattern.as_ref();
                Pattern::new(pattern).map_err(|source| ConfigError::InvalidPattern {
                    pattern: pattern.to_string(),
                    source,
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { patterns })
    }

    /// Returns `true` if any pattern matches `path`.
    ///
    /// Patterns match the path as given and, for absolute paths, the path
    /// without its leading slash, so `webapp/**` matches `/webapp/Component.js`.
    #[must_use]
    pub fn is_match(&self, path: &str) -> bool {
        self.patterns.iter().any(|pattern| matches(pattern, path))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

fn matches(pattern: &Pattern, path: &str) -> bool {
    pattern.matches_with(path, MATCH_OPTIONS)
        || path
            .strip_prefix('/')
            .is_some_and(|relative| pattern.matches_with(relative, MATCH_OPTIONS))
}
