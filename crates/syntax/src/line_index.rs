use ui5lint_types::LineCol;

/// A character whose UTF-8 and UTF-16 lengths differ.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct WideChar {
    /// Byte offset of the lead byte
    offset: usize,
    utf8_len: u8,
    utf16_len: u8,
}

/// Line index for a file (for position conversions).
///
/// Maps byte offsets to zero-based line / UTF-16 column pairs with a binary
/// search over line starts. Non-ASCII characters are recorded as they are
/// seen, so columns match what editors and source maps count.
///
/// The index can be fed incrementally with [`LineIndex::extend`]; a lookup is
/// valid for any offset up to the number of bytes seen so far.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineIndex {
    /// Byte offset of the start of each line
    line_starts: Vec<usize>,
    /// Multi-byte characters in ascending offset order
    wide_chars: Vec<WideChar>,
    /// Number of bytes seen
    len: usize,
}

impl Default for LineIndex {
    fn default() -> Self {
        Self {
            line_starts: vec![0],
            wide_chars: Vec::new(),
            len: 0,
        }
    }
}

impl LineIndex {
    /// Create a line index from complete source text
    #[must_use]
    pub fn new(text: &str) -> Self {
        let mut index = Self::default();
        index.extend(text.as_bytes());
        index
    }

    /// Append the next chunk of bytes.
    ///
    /// Chunks may split multi-byte characters; only lead bytes are inspected.
    pub fn extend(&mut self, bytes: &[u8]) {
        for (i, &byte) in bytes.iter().enumerate() {
            let offset = self.len + i;
            let (utf8_len, utf16_len) = match byte {
                b'\n' => {
                    self.line_starts.push(offset + 1);
                    continue;
                }
                0xC0..=0xDF => (2, 1),
                0xE0..=0xEF => (3, 1),
                0xF0..=0xF7 => (4, 2),
                // ASCII, continuation bytes and invalid lead bytes
                _ => continue,
            };
            self.wide_chars.push(WideChar {
                offset,
                utf8_len,
                utf16_len,
            });
        }
        self.len += bytes.len();
    }

    /// Convert a byte offset to a zero-based line/column position.
    ///
    /// Returns `None` if the offset lies beyond the bytes seen so far.
    #[must_use]
    pub fn line_col(&self, offset: usize) -> Option<LineCol> {
        if offset > self.len {
            return None;
        }

        let line = self
            .line_starts
            .binary_search(&offset)
            .unwrap_or_else(|i| i.saturating_sub(1));
        let line_start = self.line_starts[line];

        let from = self.wide_chars.partition_point(|c| c.offset < line_start);
        let to = self.wide_chars.partition_point(|c| c.offset < offset);
        let correction: usize = self.wide_chars[from..to]
            .iter()
            .map(|c| usize::from(c.utf8_len - c.utf16_len))
            .sum();
        let character = (offset - line_start).saturating_sub(correction);

        Some(LineCol::new(
            u32::try_from(line).unwrap_or(u32::MAX),
            u32::try_from(character).unwrap_or(u32::MAX),
        ))
    }

    /// Get the byte offset of the start of a line
    #[must_use]
    pub fn line_start(&self, line: usize) -> Option<usize> {
        self.line_starts.get(line).copied()
    }

    /// Get the number of lines
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Number of bytes indexed
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if no bytes have been indexed
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }
}
