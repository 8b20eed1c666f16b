//! Position resolution for syntax nodes.

use crate::{SourceFile, SyntaxNode, TraceMap};
use thiserror::Error;
use ui5lint_types::{LineCol, OffsetRange, Position, PositionRange, ResourcePath};

/// A node span that cannot be converted to a position.
///
/// Both variants are defects in the calling detection pass, never a property
/// of the analyzed data, so they are reported instead of being clamped.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PositionError {
    #[error("Node span {range} in {path} is inverted")]
    InvertedSpan {
        path: ResourcePath,
        range: OffsetRange,
    },

    #[error("Node span {range} lies outside of {path} ({len} bytes)")]
    OutOfBounds {
        path: ResourcePath,
        range: OffsetRange,
        len: usize,
    },
}

/// Resolve the start and end position of `node` in `file`.
///
/// Positions are 1-based. When `trace` is usable, both coordinates are traced
/// back to the original file; a coordinate without a mapping keeps its
/// generated value.
pub fn resolve_positions<N: SyntaxNode + ?Sized>(
    node: &N,
    file: &SourceFile,
    trace: Option<&TraceMap>,
) -> Result<PositionRange, PositionError> {
    let range = node.text_range();
    if range.is_inverted() {
        return Err(PositionError::InvertedSpan {
            path: file.path().clone(),
            range,
        });
    }

    let index = file.line_index();
    let out_of_bounds = || PositionError::OutOfBounds {
        path: file.path().clone(),
        range,
        len: index.len(),
    };
    let start = index.line_col(range.start).ok_or_else(out_of_bounds)?;
    let end = index.line_col(range.end).ok_or_else(out_of_bounds)?;

    let trace = trace.filter(|trace| trace.is_usable());
    Ok(PositionRange::new(
        to_position(start, trace),
        to_position(end, trace),
    ))
}

fn to_position(generated: LineCol, trace: Option<&TraceMap>) -> Position {
    let traced = trace.and_then(|trace| trace.original_position_for(generated));
    if trace.is_some() && traced.is_none() {
        tracing::trace!(
            line = generated.line,
            character = generated.character,
            "No source mapping for position, using generated coordinates"
        );
    }
    Position::from_line_col(traced.unwrap_or(generated))
}

#[cfg(test)]
mod tests {
    use super::*;

    const CODE: &str = "sap.ui.define([], function() {\n  jQuery.sap.log.info(\"x\");\n});\n";

    fn file() -> SourceFile {
        SourceFile::new("/resources/app/dist/Component.js", CODE)
    }

    #[test]
    fn test_offset_zero_is_first_line_first_column() {
        let range = resolve_positions(&OffsetRange::at(0), &file(), None).unwrap();
        assert_eq!(range.start, Position::FILE_START);
        assert_eq!(range.end, Position::FILE_START);
    }

    #[test]
    fn test_positions_are_one_based() {
        let start = CODE.find("jQuery").unwrap();
        let node = OffsetRange::new(start, start + "jQuery".len());
        let range = resolve_positions(&node, &file(), None).unwrap();

        assert_eq!((range.start.line(), range.start.column()), (2, 3));
        assert_eq!((range.end.line(), range.end.column()), (2, 9));
    }

    #[test]
    fn test_inverted_span_is_rejected() {
        let err = resolve_positions(&OffsetRange::new(10, 2), &file(), None).unwrap_err();
        assert!(matches!(err, PositionError::InvertedSpan { .. }));
    }

    #[test]
    fn test_out_of_bounds_span_is_rejected() {
        let node = OffsetRange::new(0, CODE.len() + 1);
        let err = resolve_positions(&node, &file(), None).unwrap_err();
        assert!(matches!(err, PositionError::OutOfBounds { .. }));
    }

    #[test]
    fn test_unusable_trace_keeps_generated_coordinates() {
        let trace = TraceMap::parse(
            r#"{"version":3,"sources":["../src/Component.js"],"names":[],"mappings":""}"#,
        )
        .unwrap();
        let start = CODE.find("jQuery").unwrap();
        let range = resolve_positions(&OffsetRange::at(start), &file(), Some(&trace)).unwrap();
        assert_eq!((range.start.line(), range.start.column()), (2, 3));
    }

    #[test]
    fn test_trace_maps_to_original_coordinates() {
        // Zero-based 1:2 of the generated file maps to 4:2 of the source
        let trace = TraceMap::parse(
            r#"{"version":3,"sources":["../src/Component.js"],"names":[],"mappings":";EAIE"}"#,
        )
        .unwrap();
        let start = CODE.find("jQuery").unwrap();
        let range = resolve_positions(&OffsetRange::at(start), &file(), Some(&trace)).unwrap();
        assert_eq!((range.start.line(), range.start.column()), (5, 3));
    }

    #[test]
    fn test_unmapped_coordinate_falls_back() {
        let trace = TraceMap::parse(
            r#"{"version":3,"sources":["../src/Component.js"],"names":[],"mappings":";EAIE"}"#,
        )
        .unwrap();
        // Line 3 of the generated file has no segments
        let start = CODE.find("});").unwrap();
        let range = resolve_positions(&OffsetRange::at(start), &file(), Some(&trace)).unwrap();
        assert_eq!((range.start.line(), range.start.column()), (3, 1));
    }
}
