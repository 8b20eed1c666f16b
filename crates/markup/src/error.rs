use std::io;
use std::sync::Arc;
use thiserror::Error;

/// Errors raised while tokenizing a markup stream.
///
/// Both variants are fatal for the stream: events emitted before the error
/// stay delivered, no further events follow.
#[derive(Debug, Clone, Error)]
pub enum TokenizerError {
    #[error("Failed to read markup: {0}")]
    Io(Arc<io::Error>),

    #[error("Malformed markup at byte {offset}: {source}")]
    Syntax {
        offset: usize,
        #[source]
        source: Arc<quick_xml::Error>,
    },
}

impl TokenizerError {
    pub(crate) fn from_xml(err: quick_xml::Error, offset: usize) -> Self {
        match err {
            quick_xml::Error::Io(err) => Self::Io(err),
            err => Self::Syntax {
                offset,
                source: Arc::new(err),
            },
        }
    }
}

impl From<io::Error> for TokenizerError {
    fn from(err: io::Error) -> Self {
        Self::Io(Arc::new(err))
    }
}

pub type Result<T> = std::result::Result<T, TokenizerError>;
