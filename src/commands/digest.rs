use crate::core::config::load_config;
use crate::core::pipeline::digest_file;
use anyhow::{Context, Result};
use std::io::{self, Write};
use std::path::Path;

pub fn run(path: &Path) -> Result<()> {
    let config = load_config();
    let digest = digest_file(path, &config)?;

    writeln!(io::stdout().lock(), "{}", digest).context("Failed to write digest")?;

    Ok(())
}
