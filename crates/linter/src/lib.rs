//! # Reporting core
//!
//! Detection passes report raw findings through a [`SourceFileReporter`],
//! one per analyzed file. The reporter resolves node positions (tracing them
//! through the file's source map when it has one), drops redundant
//! global-access messages on flush and appends the rest to the run-wide
//! [`LinterContext`]. Directives read from comments are added to the context
//! as well and applied when the run's results are collected.
//!
//! ```rust,ignore
//! let context = LinterContext::new(&config)?;
//!
//! let mut reporter = SourceFileReporter::new(&context, &file, source_map);
//! reporter.add_message(
//!     MessageArgs::NoGlobals { variable_name: "jQuery".into(), namespace: "jQuery".into() },
//!     MessageOptions::at(&node.span),
//! )?;
//! reporter.flush();
//!
//! context.add_directives(file.path(), collect_directives(&file)?);
//! let results = context.into_results();
//! ```

mod context;
mod coverage;
mod directives;
mod error;
mod links;
mod messages;
mod reporter;
mod suppression;

pub use context::{LintResult, LinterContext};
pub use coverage::{CoverageCategory, CoverageInfo, ReporterCoverageInfo};
pub use directives::{
    collect_directives, collect_markup_directives, collect_markup_directives_async,
    collect_script_directives, extract_directive, Directive, DirectiveAction, DirectiveScope,
};
pub use error::{LintError, Result};
pub use links::resolve_links;
pub use messages::{
    rules, LintMessage, MessageArgs, MessageId, RawLintMessage, Ui5TypeInfo, Ui5TypeKind,
};
pub use reporter::{MessageOptions, SourceFileReporter};
pub use suppression::{apply_directives, is_suppressed};

/// Prelude module for convenient imports.
///
/// ```rust,ignore
/// use ui5lint_linter::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        LinterContext, MessageArgs, MessageOptions, ReporterCoverageInfo, SourceFileReporter,
    };
    pub use ui5lint_syntax::{SourceFile, SyntaxNode};
}
