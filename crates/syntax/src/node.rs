use ui5lint_types::OffsetRange;

/// Anything that occupies a byte range of the analyzed file.
///
/// Detection passes hand their AST nodes to the reporter through this trait.
/// swc spans implement it directly, provided the module was parsed with
/// [`parse_script`](crate::parse_script) (which starts positions at byte 0).
pub trait SyntaxNode {
    /// Byte range of the node in the file text
    fn text_range(&self) -> OffsetRange;
}

impl SyntaxNode for OffsetRange {
    fn text_range(&self) -> OffsetRange {
        *self
    }
}

impl SyntaxNode for swc_core::common::Span {
    fn text_range(&self) -> OffsetRange {
        OffsetRange::new(self.lo.0 as usize, self.hi.0 as usize)
    }
}

impl<T: SyntaxNode + ?Sized> SyntaxNode for &T {
    fn text_range(&self) -> OffsetRange {
        (**self).text_range()
    }
}
