use crate::suppression::apply_directives;
use crate::{CoverageInfo, Directive, LintMessage, RawLintMessage};
use dashmap::DashMap;
use serde::Serialize;
use ui5lint_config::{ConfigError, IgnoreMatcher, LinterConfig};
use ui5lint_syntax::ResourcePath;

#[derive(Debug, Default)]
struct FileEntry {
    messages: Vec<RawLintMessage>,
    coverage_info: Vec<CoverageInfo>,
    directives: Vec<Directive>,
}

/// The results of one file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LintResult {
    pub file_path: ResourcePath,
    pub messages: Vec<LintMessage>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub coverage_info: Vec<CoverageInfo>,
}

/// Run-scoped store of messages, coverage records and directives per file.
///
/// The store is append-only and shared by all reporters of a run. Each file
/// entry is locked on its own, so reporters of different files never wait on
/// each other and concurrent appends to one file stay whole.
#[derive(Debug)]
pub struct LinterContext {
    files: DashMap<ResourcePath, FileEntry>,
    ignores: IgnoreMatcher,
    coverage: bool,
    details: bool,
}

impl Default for LinterContext {
    fn default() -> Self {
        Self {
            files: DashMap::new(),
            ignores: IgnoreMatcher::default(),
            coverage: false,
            details: false,
        }
    }
}

impl LinterContext {
    /// Create a context for a run with the given configuration.
    pub fn new(config: &LinterConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            files: DashMap::new(),
            ignores: config.ignore_matcher()?,
            coverage: config.coverage,
            details: config.details,
        })
    }

    /// Returns `true` if results for `path` are discarded.
    #[must_use]
    pub fn is_ignored(&self, path: &ResourcePath) -> bool {
        self.ignores.is_match(path.as_str())
    }

    /// Coverage records of `path` added so far
    #[must_use]
    pub fn get_coverage_info(&self, path: &ResourcePath) -> Vec<CoverageInfo> {
        self.files
            .get(path)
            .map(|entry| entry.coverage_info.clone())
            .unwrap_or_default()
    }

    /// Append messages to `path`.
    pub fn add_linting_messages(&self, path: &ResourcePath, messages: Vec<RawLintMessage>) {
        if messages.is_empty() || self.skip(path) {
            return;
        }
        tracing::trace!(path = %path, count = messages.len(), "Adding messages");
        self.files
            .entry(path.clone())
            .or_default()
            .messages
            .extend(messages);
    }

    /// Append coverage records to `path`.
    ///
    /// Dropped unless coverage is enabled.
    pub fn add_coverage_info(&self, path: &ResourcePath, coverage_info: Vec<CoverageInfo>) {
        if coverage_info.is_empty() || !self.coverage || self.skip(path) {
            return;
        }
        let coverage_info = coverage_info.into_iter().map(|mut info| {
            if !self.details {
                info.message_details = None;
            }
            info
        });
        self.files
            .entry(path.clone())
            .or_default()
            .coverage_info
            .extend(coverage_info);
    }

    /// Append directives to `path`.
    pub fn add_directives(&self, path: &ResourcePath, directives: Vec<Directive>) {
        if directives.is_empty() || self.skip(path) {
            return;
        }
        self.files
            .entry(path.clone())
            .or_default()
            .directives
            .extend(directives);
    }

    /// Messages of `path` as added, before suppression
    #[must_use]
    pub fn messages(&self, path: &ResourcePath) -> Vec<RawLintMessage> {
        self.files
            .get(path)
            .map(|entry| entry.messages.clone())
            .unwrap_or_default()
    }

    /// Directives of `path` as added
    #[must_use]
    pub fn directives(&self, path: &ResourcePath) -> Vec<Directive> {
        self.files
            .get(path)
            .map(|entry| entry.directives.clone())
            .unwrap_or_default()
    }

    /// Finish the run: apply directives and return one result per file,
    /// ordered by path.
    ///
    /// Files whose messages are all suppressed still yield a result when they
    /// have coverage records.
    #[must_use]
    pub fn into_results(self) -> Vec<LintResult> {
        let details = self.details;
        let mut results: Vec<_> = self
            .files
            .into_iter()
            .filter_map(|(path, entry)| {
                let messages: Vec<_> = apply_directives(entry.messages, &entry.directives)
                    .into_iter()
                    .map(|message| LintMessage::from_raw(message, details))
                    .collect();
                if messages.is_empty() && entry.coverage_info.is_empty() {
                    return None;
                }
                Some(LintResult {
                    file_path: path,
                    messages,
                    coverage_info: entry.coverage_info,
                })
            })
            .collect();

        results.sort_by(|a, b| a.file_path.cmp(&b.file_path));
        tracing::debug!(files = results.len(), "Collected lint results");
        results
    }

    fn skip(&self, path: &ResourcePath) -> bool {
        let ignored = self.is_ignored(path);
        if ignored {
            tracing::trace!(path = %path, "Skipping ignored path");
        }
        ignored
    }
}
