//! ECMAScript / TypeScript parsing with comment collection.

use crate::SourceFile;
use swc_core::common::comments::{self, SingleThreadedComments};
use swc_core::common::{BytePos, Spanned};
use swc_core::ecma::ast::Module;
use swc_core::ecma::parser::{EsSyntax, Parser, StringInput, Syntax, TsSyntax};
use thiserror::Error;
use ui5lint_types::{FileKind, OffsetRange, ResourcePath};

/// Errors raised while parsing a script file.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScriptError {
    #[error("{path} is not a script file")]
    UnsupportedFile { path: ResourcePath },

    #[error("Failed to parse {path}: {message} (at offset {offset})")]
    Parse {
        path: ResourcePath,
        message: String,
        offset: usize,
    },
}

/// Comment delimiter style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommentKind {
    /// `// ...`
    Line,
    /// `/* ... */`
    Block,
}

/// A comment of a script file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptComment {
    pub kind: CommentKind,
    /// Comment text without delimiters
    pub text: String,
    /// Byte range including delimiters
    pub range: OffsetRange,
}

/// A parsed script: its module AST and all of its comments in source order.
///
/// Spans of `module` start at byte 0 of the file, so AST nodes can be passed
/// to the reporter as [`SyntaxNode`](crate::SyntaxNode)s.
#[derive(Debug)]
pub struct ParsedScript {
    pub module: Module,
    pub comments: Vec<ScriptComment>,
}

/// Parse a JavaScript or TypeScript file.
///
/// Recoverable syntax errors are logged and skipped; only a failure to
/// produce a module at all is returned as [`ScriptError::Parse`].
#[tracing::instrument(skip(file), fields(path = %file.path()))]
pub fn parse_script(file: &SourceFile) -> Result<ParsedScript, ScriptError> {
    let syntax = match file.kind() {
        Some(FileKind::JavaScript) => Syntax::Es(EsSyntax::default()),
        Some(FileKind::TypeScript) => Syntax::Typescript(TsSyntax {
            dts: file.path().as_str().ends_with(".d.ts"),
            ..TsSyntax::default()
        }),
        _ => {
            return Err(ScriptError::UnsupportedFile {
                path: file.path().clone(),
            })
        }
    };

    let text = file.text();
    let end = BytePos(u32::try_from(text.len()).unwrap_or(u32::MAX));
    let store = SingleThreadedComments::default();
    let mut parser = Parser::new(syntax, StringInput::new(text, BytePos(0), end), Some(&store));

    let module = parser.parse_module().map_err(|err| {
        let offset = err.span().lo.0 as usize;
        ScriptError::Parse {
            path: file.path().clone(),
            message: err.into_kind().msg().to_string(),
            offset,
        }
    })?;

    let recovered = parser.take_errors();
    if !recovered.is_empty() {
        tracing::debug!(errors = recovered.len(), "Recovered from syntax errors");
    }

    let comments = collect_comments(&store);
    tracing::trace!(comments = comments.len(), "Parsed script");
    Ok(ParsedScript { module, comments })
}

fn collect_comments(store: &SingleThreadedComments) -> Vec<ScriptComment> {
    let (leading, trailing) = store.borrow_all();
    let mut collected: Vec<ScriptComment> = leading
        .values()
        .chain(trailing.values())
        .flatten()
        .map(|comment| ScriptComment {
            kind: match comment.kind {
                comments::CommentKind::Line => CommentKind::Line,
                comments::CommentKind::Block => CommentKind::Block,
            },
            text: comment.text.to_string(),
            range: OffsetRange::new(comment.span.lo.0 as usize, comment.span.hi.0 as usize),
        })
        .collect();

    collected.sort_by_key(|comment| comment.range.start);
    collected.dedup_by_key(|comment| comment.range.start);
    collected
}
