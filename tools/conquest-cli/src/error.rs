use std::io;

use thiserror::Error;

use conquest_core::error::CommandError;

/// Errors that end the interactive session.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("fatal: {0}")]
    Fatal(CommandError),
}
