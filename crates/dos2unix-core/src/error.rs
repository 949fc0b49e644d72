// crates/dos2unix-core/src/error.rs

use std::io;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, TranscodeError>;

/// A transcode aborted by its source or sink.
///
/// `written` is the number of bytes the sink had accepted before the failure.
/// Those bytes are not rolled back.
#[derive(Debug, Error)]
pub enum TranscodeError {
    #[error("read failed after {written} bytes written: {source}")]
    Read {
        written: u64,
        #[source]
        source: io::Error,
    },

    #[error("write failed after {written} bytes written: {source}")]
    Write {
        written: u64,
        #[source]
        source: io::Error,
    },
}

impl TranscodeError {
    pub fn written(&self) -> u64 {
        match self {
            TranscodeError::Read { written, .. } | TranscodeError::Write { written, .. } => *written,
        }
    }

    pub fn kind(&self) -> io::ErrorKind {
        self.io_error().kind()
    }

    pub fn io_error(&self) -> &io::Error {
        match self {
            TranscodeError::Read { source, .. } | TranscodeError::Write { source, .. } => source,
        }
    }
}

impl From<TranscodeError> for io::Error {
    fn from(e: TranscodeError) -> Self {
        let kind = e.kind();
        io::Error::new(kind, e)
    }
}
