use crate::core::config::PipelineConfig;
use crate::core::error::DigestError;
use crate::core::hashing::{Digest, HashWriter};
use log::{debug, error, info, trace};
use std::fs::File;
use std::io::{self, Read, Write};
use std::path::Path;

/// Result of one run: the digest plus byte accounting on both sides of the
/// compressor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PipelineOutcome {
    pub digest: Digest,
    pub bytes_read: u64,
    pub bytes_compressed: u64,
}

/// Digest the gzip-compressed contents of the file at `path`.
pub fn digest_file(path: &Path, config: &PipelineConfig) -> Result<Digest, DigestError> {
    debug!("Pipeline config: {:?}", config);

    let file = File::open(path).map_err(|source| {
        debug!("Cannot open {}: {}", path.display(), source);
        DigestError::SourceUnavailable {
            path: path.to_path_buf(),
            source,
        }
    })?;
    debug!("Opened: {}", path.display());

    let outcome = digest_reader(file, config).map_err(|err| {
        error!("{}: {}", path.display(), err);
        err
    })?;

    info!(
        "Digested {} ({} bytes read, {} bytes compressed)",
        path.display(),
        outcome.bytes_read,
        outcome.bytes_compressed
    );

    Ok(outcome.digest)
}

/// Digest the gzip-compressed contents of any byte source.
pub fn digest_reader<R: Read>(
    mut reader: R,
    config: &PipelineConfig,
) -> Result<PipelineOutcome, DigestError> {
    let mut encoder = config.gz_builder().write(HashWriter::new(), config.level);
    let mut buffer = vec![0u8; config.buffer_size.max(1)];
    let mut bytes_read: u64 = 0;

    // Finished once at the end, never flushed in between.
    loop {
        let count = match reader.read(&mut buffer) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(DigestError::ReadFault(e)),
        };
        trace!("Chunk: {} bytes", count);

        encoder
            .write_all(&buffer[..count])
            .map_err(DigestError::CompressFault)?;
        bytes_read += count as u64;
    }

    let sink = encoder.finish().map_err(DigestError::CompressFault)?;
    let bytes_compressed = sink.written();

    Ok(PipelineOutcome {
        digest: sink.finalize(),
        bytes_read,
        bytes_compressed,
    })
}
