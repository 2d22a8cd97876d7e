use std::path::PathBuf;

use thiserror::Error;

use crate::frame::FrameError;

#[derive(Debug, Error)]
pub enum PreviewError {
    #[error("cannot read animation source {path}: {source}")]
    MissingInputFile { path: PathBuf, #[source] source: std::io::Error },
    #[error("malformed header for block at line {line}: {reason}")]
    MalformedBlockHeader { line: usize, reason: String },
    #[error("malformed frame in block `{block}` at line {line}: {source}")]
    MalformedFrameLine { block: String, line: usize, #[source] source: FrameError },
    #[error("cannot create output directory {path}: {source}")]
    OutputDirectory { path: PathBuf, #[source] source: std::io::Error },
    #[error("cannot write preview {path}: {source}")]
    OutputWriteFailure { path: PathBuf, #[source] source: std::io::Error },
    #[error("invalid config {path}: {reason}")]
    Config { path: PathBuf, reason: String },
}

pub type Result<T> = std::result::Result<T, PreviewError>;
