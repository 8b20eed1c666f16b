//! Application of directives to reported messages.

use crate::{Directive, DirectiveAction, DirectiveScope, RawLintMessage};
use ui5lint_syntax::Position;

/// Returns `true` if the directives suppress `rule` at `position`.
///
/// `directives` must be in document order. Each directive that covers the
/// rule and reaches the position decides in turn, so the last one wins:
/// a `line` directive reaches its own line, a `next-line` directive the
/// following line and an unscoped directive everything from its start on.
#[must_use]
pub fn is_suppressed(rule: &str, position: Position, directives: &[Directive]) -> bool {
    directives
        .iter()
        .rev()
        .find(|directive| directive.covers_rule(rule) && reaches(directive, position))
        .is_some_and(|directive| directive.action == DirectiveAction::Disable)
}

fn reaches(directive: &Directive, position: Position) -> bool {
    match directive.scope {
        Some(DirectiveScope::Line) => position.line() == directive.line(),
        Some(DirectiveScope::NextLine) => position.line() == directive.line() + 1,
        None => directive.position <= position,
    }
}

/// Drop the messages suppressed by `directives`.
///
/// Messages without a position are never suppressed.
#[must_use]
pub fn apply_directives(
    messages: Vec<RawLintMessage>,
    directives: &[Directive],
) -> Vec<RawLintMessage> {
    if directives.is_empty() {
        return messages;
    }

    let mut ordered = directives.to_vec();
    ordered.sort_by_key(|directive| directive.position);

    let before = messages.len();
    let kept: Vec<_> = messages
        .into_iter()
        .filter(|message| {
            message
                .position
                .is_none_or(|position| !is_suppressed(message.rule(), position, &ordered))
        })
        .collect();

    if kept.len() < before {
        tracing::debug!(suppressed = before - kept.len(), "Applied directives");
    }
    kept
}
