//! Readers that feed every byte they hand out into a line index.

use std::io::{self, Read};
use std::pin::Pin;
use std::task::{Context, Poll};
use tokio::io::{AsyncRead, ReadBuf};
use ui5lint_syntax::LineIndex;

/// Wraps a byte source and indexes lines as bytes are read.
///
/// The index always covers at least every byte the tokenizer has consumed,
/// so positions of an event can be resolved as soon as it is emitted.
#[derive(Debug)]
pub(crate) struct CountingReader<R> {
    inner: R,
    index: LineIndex,
}

impl<R> CountingReader<R> {
    pub(crate) fn new(inner: R) -> Self {
        Self {
            inner,
            index: LineIndex::default(),
        }
    }

    pub(crate) fn line_index(&self) -> &LineIndex {
        &self.index
    }
}

impl<R: Read> Read for CountingReader<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let read = self.inner.read(buf)?;
        self.index.extend(&buf[..read]);
        Ok(read)
    }
}

impl<R: AsyncRead + Unpin> AsyncRead for CountingReader<R> {
    fn poll_read(
        self: Pin<&mut Self>,
        cx: &mut Context<'_>,
        buf: &mut ReadBuf<'_>,
    ) -> Poll<io::Result<()>> {
        let this = self.get_mut();
        let before = buf.filled().len();
        let polled = Pin::new(&mut this.inner).poll_read(cx, buf);
        if let Poll::Ready(Ok(())) = polled {
            this.index.extend(&buf.filled()[before..]);
        }
        polled
    }
}
