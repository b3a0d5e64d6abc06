use std::io;
use thiserror::Error;

use crate::adapter::Aborted;
use crate::io::IoError;

/// Top-level application errors unifying all layer errors
#[derive(Error, Debug)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("CSV IO error: {0}")]
    CsvIo(#[from] IoError),

    #[error(transparent)]
    Aborted(#[from] Aborted),

    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),
}
