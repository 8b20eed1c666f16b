//! Source-map trace adapter.

use serde::de::IgnoredAny;
use serde::Deserialize;
use thiserror::Error;
use ui5lint_types::LineCol;

/// Errors raised while reading a source map payload.
#[derive(Debug, Error)]
pub enum TraceMapError {
    #[error("Source map is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to decode source map mappings: {0}")]
    Decode(#[from] sourcemap::Error),
}

/// The fields of an encoded (v3) source map that decide whether it is usable.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct EncodedSourceMap {
    #[serde(default)]
    mappings: Option<String>,
    #[serde(default)]
    sections: Option<IgnoredAny>,
    #[serde(default)]
    sources: Vec<Option<String>>,
}

/// A parsed source map, usable for tracing generated positions back to the
/// originally authored file.
///
/// Only maps with a non-empty `mappings` string and without `sections` are
/// usable. Sectioned maps only appear in bundles, whose files are linted as
/// their individual sources instead; an empty mapping string cannot map
/// anything. Unusable maps are kept as a value so callers branch on
/// [`TraceMap::is_usable`] instead of handling failures.
#[derive(Debug, Clone, Default)]
pub struct TraceMap {
    decoded: Option<sourcemap::SourceMap>,
    primary_source: Option<String>,
}

impl TraceMap {
    /// Parse an encoded source map payload.
    pub fn parse(payload: &str) -> Result<Self, TraceMapError> {
        let encoded: EncodedSourceMap = serde_json::from_str(payload)?;

        if encoded.sections.is_some() {
            tracing::debug!("Ignoring sectioned source map");
            return Ok(Self::default());
        }
        if encoded.mappings.as_deref().unwrap_or_default().is_empty() {
            tracing::debug!("Ignoring source map without mappings");
            return Ok(Self::default());
        }

        let decoded = sourcemap::SourceMap::from_slice(payload.as_bytes())?;
        let primary_source = encoded
            .sources
            .into_iter()
            .next()
            .flatten()
            .filter(|source| !source.is_empty() && source != "UNKNOWN");

        tracing::trace!(
            tokens = decoded.get_token_count(),
            primary_source = ?primary_source,
            "Parsed source map"
        );

        Ok(Self {
            decoded: Some(decoded),
            primary_source,
        })
    }

    /// Returns `true` if the map can trace positions.
    #[must_use]
    pub const fn is_usable(&self) -> bool {
        self.decoded.is_some()
    }

    /// The first declared original source, relative to the generated file.
    ///
    /// The entry is taken as written; `sourceRoot` is not applied.
    #[must_use]
    pub fn primary_source(&self) -> Option<&str> {
        self.primary_source.as_deref()
    }

    /// Original position of a generated position.
    ///
    /// Returns `None` when the map is unusable or has no segment covering the
    /// position on the same generated line.
    #[must_use]
    pub fn original_position_for(&self, generated: LineCol) -> Option<LineCol> {
        let map = self.decoded.as_ref()?;
        let token = map.lookup_token(generated.line, generated.character)?;
        if token.get_dst_line() != generated.line {
            return None;
        }
        token
            .get_source()
            .map(|_| LineCol::new(token.get_src_line(), token.get_src_col()))
    }
}
