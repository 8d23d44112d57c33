mod commands;
mod core;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::error;

use crate::core::error::{DigestError, EXIT_IO_FAULT};

/// Print the SHA-256 of a file's gzip-compressed contents
#[derive(Parser)]
#[command(name = "gzdigest", version)]
#[command(about = "SHA-256 digest of a file's gzip-compressed byte stream", long_about = None)]
struct Cli {
    /// File to digest
    path: PathBuf,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    match commands::digest::run(&cli.path) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let code = match err.downcast_ref::<DigestError>() {
                Some(digest_err) => digest_err.exit_code(),
                None => {
                    error!("{:#}", err);
                    EXIT_IO_FAULT
                }
            };
            ExitCode::from(code)
        }
    }
}
