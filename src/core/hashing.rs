use sha2::{Digest as _, Sha256};
use std::fmt;
use std::io::{self, Write};

/// Finalized SHA-256 value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Digest([u8; 32]);

impl Digest {
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.as_bytes()))
    }
}

/// `Write` sink that feeds every byte into a SHA-256 state.
pub struct HashWriter {
    hasher: Sha256,
    written: u64,
}

impl HashWriter {
    pub fn new() -> Self {
        Self {
            hasher: Sha256::new(),
            written: 0,
        }
    }

    /// Number of bytes hashed so far.
    pub fn written(&self) -> u64 {
        self.written
    }

    pub fn finalize(self) -> Digest {
        let mut out = [0u8; 32];
        out.copy_from_slice(&self.hasher.finalize());
        Digest(out)
    }
}

impl Default for HashWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl Write for HashWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.hasher.update(buf);
        self.written += buf.len() as u64;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
