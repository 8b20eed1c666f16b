//! Suppression directives embedded in comments.
//!
//! ```xml
//! <!-- ui5lint-disable-next-line no-deprecated-api -- migrated in 2.0 -->
//! ```
//!
//! ```js
//! // ui5lint-disable no-globals, no-deprecated-api
//! ```

use crate::LintError;
use regex::Regex;
use serde::Serialize;
use std::io::Read;
use std::sync::LazyLock;
use tokio::io::AsyncRead;
use ui5lint_markup::{parse_xml, parse_xml_async, EventKinds, MarkupEvent};
use ui5lint_syntax::{parse_script, LineCol, Position, SourceFile};
use ui5lint_types::FileKind;

/// `ui5lint-(enable|disable)[-line|-next-line] [rule[, rule]*] [-- note]`,
/// searched anywhere in the comment text and running to its end.
static DIRECTIVE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\s*ui5lint-(enable|disable)(?:-((?:next-)?line))?(\s+(?:[\w-]+\s*,\s*)*(?:\s*[\w-]+))?\s*,?\s*(?:--[\s\S]*?)?$",
    )
    .unwrap_or_else(|err| unreachable!("invalid directive pattern: {err}"))
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum DirectiveAction {
    Enable,
    Disable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum DirectiveScope {
    /// Only the line of the directive
    Line,
    /// Only the line after the directive
    NextLine,
}

/// A parsed `ui5lint-enable` / `ui5lint-disable` comment.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Directive {
    pub action: DirectiveAction,
    /// `None` applies from the directive onward
    pub scope: Option<DirectiveScope>,
    /// Rules the directive applies to; empty means all rules
    pub rule_names: Vec<String>,
    /// 1-based start of the comment
    pub position: Position,
}

impl Directive {
    #[must_use]
    pub const fn line(&self) -> u32 {
        self.position.line()
    }

    #[must_use]
    pub const fn column(&self) -> u32 {
        self.position.column()
    }

    /// Returns `true` if the directive covers `rule`.
    #[must_use]
    pub fn covers_rule(&self, rule: &str) -> bool {
        self.rule_names.is_empty() || self.rule_names.iter().any(|name| name == rule)
    }
}

/// Parse a directive from comment text (without comment delimiters).
///
/// `start` is the zero-based position of the comment; the directive is
/// anchored there, converted to 1-based.
#[must_use]
pub fn extract_directive(text: &str, start: LineCol) -> Option<Directive> {
    let captures = DIRECTIVE.captures(text)?;

    let action = match &captures[1] {
        "enable" => DirectiveAction::Enable,
        _ => DirectiveAction::Disable,
    };
    let scope = captures.get(2).map(|scope| match scope.as_str() {
        "line" => DirectiveScope::Line,
        _ => DirectiveScope::NextLine,
    });
    let rule_names = captures
        .get(3)
        .map(|rules| {
            rules
                .as_str()
                .split(',')
                .map(|rule| rule.trim().to_string())
                .collect()
        })
        .unwrap_or_default();

    Some(Directive {
        action,
        scope,
        rule_names,
        position: Position::from_line_col(start),
    })
}

/// Collect the directives of a markup stream.
///
/// Only comment events are requested from the tokenizer.
pub fn collect_markup_directives<R: Read>(source: R) -> Result<Vec<Directive>, LintError> {
    let mut directives = Vec::new();
    parse_xml(source, EventKinds::COMMENT, |event| {
        if let MarkupEvent::Comment(comment) = event {
            directives.extend(extract_directive(&comment.text, comment.span.start.line_col));
        }
    })?;
    tracing::debug!(directives = directives.len(), "Collected markup directives");
    Ok(directives)
}

/// Async variant of [`collect_markup_directives`].
pub async fn collect_markup_directives_async<R: AsyncRead + Unpin>(
    source: R,
) -> Result<Vec<Directive>, LintError> {
    let mut directives = Vec::new();
    parse_xml_async(source, EventKinds::COMMENT, |event| {
        if let MarkupEvent::Comment(comment) = event {
            directives.extend(extract_directive(&comment.text, comment.span.start.line_col));
        }
    })
    .await?;
    tracing::debug!(directives = directives.len(), "Collected markup directives");
    Ok(directives)
}

/// Collect the directives of a JavaScript or TypeScript file.
pub fn collect_script_directives(file: &SourceFile) -> Result<Vec<Directive>, LintError> {
    let parsed = parse_script(file)?;
    let index = file.line_index();
    let directives: Vec<_> = parsed
        .comments
        .iter()
        .filter_map(|comment| {
            let start = index.line_col(comment.range.start)?;
            extract_directive(&comment.text, start)
        })
        .collect();
    tracing::debug!(directives = directives.len(), "Collected script directives");
    Ok(directives)
}

/// Collect the directives of a loaded file, dispatching on its kind.
#[tracing::instrument(skip(file), fields(path = %file.path()))]
pub fn collect_directives(file: &SourceFile) -> Result<Vec<Directive>, LintError> {
    match file.kind() {
        Some(kind) if kind.is_markup() => collect_markup_directives(file.text().as_bytes()),
        Some(FileKind::JavaScript | FileKind::TypeScript) => collect_script_directives(file),
        _ => Err(LintError::UnsupportedFile {
            path: file.path().clone(),
        }),
    }
}
