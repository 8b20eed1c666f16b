use crate::{
    resolve_links, CoverageInfo, LinterContext, MessageArgs, MessageId, RawLintMessage,
    ReporterCoverageInfo, Ui5TypeInfo,
};
use std::collections::HashMap;
use ui5lint_syntax::{
    resolve_positions, Position, PositionError, PositionRange, ResourcePath, SourceFile,
    SyntaxNode, TraceMap,
};
use ui5lint_types::CodeFix;

/// Optional parts of a reported message.
#[derive(Clone, Default)]
pub struct MessageOptions<'n> {
    /// Node locating the message; without one the message is placed at 1:1
    pub node: Option<&'n dyn SyntaxNode>,
    pub type_info: Option<Ui5TypeInfo>,
    pub fix: Option<CodeFix>,
}

impl<'n> MessageOptions<'n> {
    #[must_use]
    pub fn at(node: &'n dyn SyntaxNode) -> Self {
        Self {
            node: Some(node),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_type_info(mut self, type_info: Ui5TypeInfo) -> Self {
        self.type_info = Some(type_info);
        self
    }

    #[must_use]
    pub fn with_fix(mut self, fix: CodeFix) -> Self {
        self.fix = Some(fix);
        self
    }
}

impl std::fmt::Debug for MessageOptions<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MessageOptions")
            .field("range", &self.node.map(|node| node.text_range()))
            .field("type_info", &self.type_info)
            .field("fix", &self.fix)
            .finish()
    }
}

/// Collects the messages of one file analysis.
///
/// A detection pass creates one reporter per file, adds messages and
/// coverage records while walking the file and finally calls
/// [`flush`](Self::flush), which deduplicates the messages and hands them to
/// the context. Nothing reaches the context before the flush; dropping a
/// reporter discards everything it collected.
///
/// When the analyzed file was generated, pass its source map: positions are
/// then traced back and results are recorded under the original file.
#[derive(Debug)]
pub struct SourceFileReporter<'a> {
    context: &'a LinterContext,
    file: &'a SourceFile,
    trace: Option<TraceMap>,
    original_path: ResourcePath,
    messages: Vec<RawLintMessage>,
    coverage_info: Vec<CoverageInfo>,
}

impl<'a> SourceFileReporter<'a> {
    #[must_use]
    pub fn new(context: &'a LinterContext, file: &'a SourceFile, source_map: Option<&str>) -> Self {
        let trace = source_map.and_then(|payload| match TraceMap::parse(payload) {
            Ok(trace) if trace.is_usable() => Some(trace),
            Ok(_) => None,
            Err(err) => {
                tracing::warn!(
                    path = %file.path(),
                    error = %err,
                    "Ignoring malformed source map"
                );
                None
            }
        });

        let original_path = trace
            .as_ref()
            .and_then(TraceMap::primary_source)
            .map_or_else(
                || file.path().clone(),
                |source| file.path().parent().join(source),
            );
        if &original_path != file.path() {
            tracing::debug!(
                path = %file.path(),
                original = %original_path,
                "Reporting for original source"
            );
        }

        Self {
            context,
            file,
            trace,
            original_path,
            messages: Vec::new(),
            coverage_info: Vec::new(),
        }
    }

    /// Path the results are recorded under
    #[must_use]
    pub fn original_path(&self) -> &ResourcePath {
        &self.original_path
    }

    /// Resolve the 1-based positions of `node`, traced to the original file.
    pub fn positions_for(&self, node: &dyn SyntaxNode) -> Result<PositionRange, PositionError> {
        resolve_positions(node, self.file, self.trace.as_ref())
    }

    /// Add a message located at the start of `options.node`.
    pub fn add_message(
        &mut self,
        args: MessageArgs,
        options: MessageOptions<'_>,
    ) -> Result<(), PositionError> {
        let position = match options.node {
            Some(node) => self.positions_for(node)?.start,
            None => Position::FILE_START,
        };

        self.messages.push(RawLintMessage {
            args,
            position: Some(position),
            fix: options.fix,
            type_info: options.type_info,
        });
        Ok(())
    }

    /// Add a coverage record located at the start of its node.
    pub fn add_coverage_info(
        &mut self,
        coverage: ReporterCoverageInfo<'_>,
    ) -> Result<(), PositionError> {
        let start = self.positions_for(coverage.node)?.start;
        self.coverage_info.push(CoverageInfo {
            category: coverage.category,
            line: start.line(),
            column: start.column(),
            message: coverage.message.to_string(),
            message_details: coverage.message_details.map(resolve_links),
        });
        Ok(())
    }

    /// Deduplicate the collected messages and add them to the context.
    pub fn flush(self) {
        if self.messages.is_empty() && self.coverage_info.is_empty() {
            return;
        }

        let collected = self.messages.len();
        let messages = deduplicate(self.messages);
        tracing::debug!(
            path = %self.original_path,
            collected,
            kept = messages.len(),
            coverage = self.coverage_info.len(),
            "Flushing reporter"
        );

        self.context
            .add_linting_messages(&self.original_path, messages);
        self.context
            .add_coverage_info(&self.original_path, self.coverage_info);
    }
}

/// Drop repeated messages and global-access messages that share their
/// position with another kind of message.
///
/// Messages are grouped by position in first-seen order. Within a group a
/// message with the same arguments as an earlier one is dropped. Messages
/// without a position come first, in insertion order.
fn deduplicate(messages: Vec<RawLintMessage>) -> Vec<RawLintMessage> {
    let mut unpositioned = Vec::new();
    let mut groups: Vec<Vec<RawLintMessage>> = Vec::new();
    let mut group_index: HashMap<Position, usize> = HashMap::new();

    for message in messages {
        let Some(position) = message.position else {
            unpositioned.push(message);
            continue;
        };
        let index = *group_index.entry(position).or_insert_with(|| {
            groups.push(Vec::new());
            groups.len() - 1
        });
        let group = &mut groups[index];
        if group.iter().all(|kept| kept.args != message.args) {
            group.push(message);
        }
    }

    let mut kept = unpositioned;
    for group in groups {
        let drop_globals =
            group.len() > 1 && group.iter().any(|message| message.id() != MessageId::NoGlobals);
        kept.extend(
            group
                .into_iter()
                .filter(|message| !(drop_globals && message.id() == MessageId::NoGlobals)),
        );
    }
    kept
}

#[cfg(test)]
mod tests {
    use super::*;

    fn global(name: &str, position: Option<Position>) -> RawLintMessage {
        RawLintMessage::new(
            MessageArgs::NoGlobals {
                variable_name: name.to_string(),
                namespace: name.to_string(),
            },
            position,
        )
    }

    fn deprecated(name: &str, position: Option<Position>) -> RawLintMessage {
        RawLintMessage::new(
            MessageArgs::DeprecatedApiAccess {
                api_name: name.to_string(),
                details: None,
            },
            position,
        )
    }

    #[test]
    fn test_global_dropped_next_to_other_message() {
        let at = Position::new(3, 7);
        let kept = deduplicate(vec![global("jQuery", at), deprecated("jQuery.sap", at)]);
        assert_eq!(kept, [deprecated("jQuery.sap", at)]);
    }

    #[test]
    fn test_lone_global_is_kept() {
        let kept = deduplicate(vec![global("sap", Position::new(1, 1))]);
        assert_eq!(kept.len(), 1);
    }

    #[test]
    fn test_globals_only_group_is_kept() {
        let at = Position::new(2, 2);
        let kept = deduplicate(vec![global("a", at), global("b", at)]);
        assert_eq!(kept.len(), 2);
    }

    #[test]
    fn test_identical_messages_at_one_position_are_dropped() {
        let at = Position::new(1, 1);
        let kept = deduplicate(vec![
            deprecated("jQuery.sap", at),
            deprecated("jQuery.sap", at),
            deprecated("jQuery.sap", Position::new(2, 1)),
        ]);
        assert_eq!(
            kept,
            [
                deprecated("jQuery.sap", at),
                deprecated("jQuery.sap", Position::new(2, 1)),
            ]
        );
    }

    #[test]
    fn test_identical_globals_collapse_to_one() {
        let at = Position::new(4, 2);
        let kept = deduplicate(vec![global("sap", at), global("sap", at)]);
        assert_eq!(kept, [global("sap", at)]);
    }

    #[test]
    fn test_unpositioned_messages_bypass_grouping() {
        let kept = deduplicate(vec![
            deprecated("x", Position::new(1, 1)),
            global("a", None),
            deprecated("y", None),
        ]);
        assert_eq!(
            kept,
            [
                global("a", None),
                deprecated("y", None),
                deprecated("x", Position::new(1, 1)),
            ]
        );
    }

    #[test]
    fn test_group_order_is_first_seen() {
        let first = Position::new(5, 1);
        let second = Position::new(2, 1);
        let kept = deduplicate(vec![
            deprecated("a", first),
            deprecated("b", second),
            deprecated("c", first),
        ]);
        assert_eq!(
            kept,
            [
                deprecated("a", first),
                deprecated("c", first),
                deprecated("b", second),
            ]
        );
    }
}
