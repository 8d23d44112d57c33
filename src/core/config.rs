use flate2::{Compression, GzBuilder};

/// Gzip header OS byte for "unknown".
pub const OS_UNKNOWN: u8 = 255;

/// Compressor settings and read buffer size.
///
/// Every gzip header field that could vary between runs is pinned here, so the
/// compressed stream, and therefore the digest, depends on file content only.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PipelineConfig {
    pub buffer_size: usize,
    pub level: Compression,
    pub mtime: u32,
    pub operating_system: u8,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            buffer_size: 4096,
            level: Compression::new(6),
            mtime: 0,
            operating_system: OS_UNKNOWN,
        }
    }
}

impl PipelineConfig {
    pub fn gz_builder(&self) -> GzBuilder {
        GzBuilder::new()
            .mtime(self.mtime)
            .operating_system(self.operating_system)
    }
}

/// Returns the pinned defaults. Nothing is read from disk or the environment.
pub fn load_config() -> PipelineConfig {
    PipelineConfig::default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_is_pinned() {
        let config = load_config();
        assert_eq!(config.buffer_size, 4096);
        assert_eq!(config.level, Compression::default());
        assert_eq!(config.mtime, 0);
        assert_eq!(config.operating_system, OS_UNKNOWN);
    }

    #[test]
    fn test_gz_builder_header() {
        let config = PipelineConfig::default();
        let mut encoder = config.gz_builder().write(Vec::new(), config.level);
        encoder.write_all(b"header check").unwrap();
        let bytes = encoder.finish().unwrap();

        // magic, CM=deflate, FLG=0, MTIME=0, XFL=0, OS=255
        assert_eq!(
            &bytes[..10],
            &[0x1f, 0x8b, 0x08, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xff]
        );
    }
}
