use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SplitError {
    #[error("Failed to read source: {0}")]
    SourceRead(io::Error),

    #[error("Failed to create output directory {path}: {source}")]
    CreateDirFailed { path: PathBuf, source: io::Error },

    #[error("Failed to write range file {path}: {source}")]
    WriteFailed { path: PathBuf, source: io::Error },

    #[error("Refusing to use {0:?} as a range file name")]
    UnsafePrefix(String),
}
