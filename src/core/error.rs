use std::io;
use std::path::PathBuf;

/// Exit status for a file that could not be opened.
pub const EXIT_SOURCE_UNAVAILABLE: u8 = 1;

/// Exit status for an I/O fault after the file was opened (sysexits `EX_IOERR`).
pub const EXIT_IO_FAULT: u8 = 74;

#[derive(Debug, thiserror::Error)]
pub enum DigestError {
    #[error("cannot open {}: {}", .path.display(), .source)]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("read failed: {0}")]
    ReadFault(#[source] io::Error),

    #[error("compression failed: {0}")]
    CompressFault(#[source] io::Error),
}

impl DigestError {
    pub fn exit_code(&self) -> u8 {
        match self {
            DigestError::SourceUnavailable { .. } => EXIT_SOURCE_UNAVAILABLE,
            DigestError::ReadFault(_) | DigestError::CompressFault(_) => EXIT_IO_FAULT,
        }
    }
}
