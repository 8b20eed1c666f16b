//! Test inputs.

use std::io::{self, Read};
use std::pin::Pin;
use std::task::{Context, Poll};
use tokio::io::{AsyncRead, ReadBuf};

/// Encoded v3 source map with the given sources and mappings.
#[must_use]
pub fn source_map(sources: &[&str], mappings: &str) -> String {
    serde_json::json!({
        "version": 3,
        "sources": sources,
        "names": [],
        "mappings": mappings,
    })
    .to_string()
}

/// A byte source that hands out at most `chunk_size` bytes per read.
///
/// Used to check that streaming consumers give the same results no matter
/// where the input is split, including inside multi-byte characters.
#[derive(Debug, Clone)]
pub struct ChunkedReader {
    bytes: Vec<u8>,
    pos: usize,
    chunk_size: usize,
}

impl ChunkedReader {
    /// # Panics
    ///
    /// Panics if `chunk_size` is zero.
    #[must_use]
    pub fn new(text: &str, chunk_size: usize) -> Self {
        assert!(chunk_size > 0, "chunk size must be positive");
        Self {
            bytes: text.as_bytes().to_vec(),
            pos: 0,
            chunk_size,
        }
    }

    fn next_chunk(&mut self, capacity: usize) -> &[u8] {
        let len = self
            .chunk_size
            .min(capacity)
            .min(self.bytes.len() - self.pos);
        let chunk = &self.bytes[self.pos..self.pos + len];
        self.pos += len;
        chunk
    }
}

impl Read for ChunkedReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let chunk = self.next_chunk(buf.len());
        let len = chunk.len();
        buf[..len].copy_from_slice(chunk);
        Ok(len)
    }
}

impl AsyncRead for ChunkedReader {
    fn poll_read(
        self: Pin<&mut Self>,
        _cx: &mut Context<'_>,
        buf: &mut ReadBuf<'_>,
    ) -> Poll<io::Result<()>> {
        let remaining = buf.remaining();
        let chunk = self.get_mut().next_chunk(remaining);
        buf.put_slice(chunk);
        Poll::Ready(Ok(()))
    }
}
