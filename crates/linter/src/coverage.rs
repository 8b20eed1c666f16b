use serde::Serialize;
use ui5lint_syntax::SyntaxNode;

/// Why a code location could not be fully analyzed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum CoverageCategory {
    /// A call whose callee type could not be determined
    CallExpressionUnknownType,
}

/// A coverage record of a file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CoverageInfo {
    pub category: CoverageCategory,
    /// 1-based
    pub line: u32,
    /// 1-based
    pub column: u32,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_details: Option<String>,
}

/// Coverage as reported by a detection pass, located by a syntax node.
#[derive(Clone, Copy)]
pub struct ReporterCoverageInfo<'n> {
    pub node: &'n dyn SyntaxNode,
    pub category: CoverageCategory,
    pub message: &'n str,
    /// May contain `{@link ...}` markup
    pub message_details: Option<&'n str>,
}

impl std::fmt::Debug for ReporterCoverageInfo<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReporterCoverageInfo")
            .field("range", &self.node.text_range())
            .field("category", &self.category)
            .field("message", &self.message)
            .field("message_details", &self.message_details)
            .finish()
    }
}
