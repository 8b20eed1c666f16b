use thiserror::Error;
use ui5lint_markup::TokenizerError;
use ui5lint_syntax::{ResourcePath, ScriptError};

/// Fatal errors of a file analysis.
///
/// A file that fails with one of these produces no result at all, never an
/// empty one.
#[derive(Debug, Clone, Error)]
pub enum LintError {
    #[error(transparent)]
    Markup(#[from] TokenizerError),

    #[error(transparent)]
    Script(#[from] ScriptError),

    #[error("{path} is neither markup nor a script")]
    UnsupportedFile { path: ResourcePath },
}

pub type Result<T> = std::result::Result<T, LintError>;
