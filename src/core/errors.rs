use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("project path must be absolute: {}", .0.display())]
    InvalidPath(PathBuf),
    #[error("failed to read project directory: {0}")]
    ReadDirectory(String),
    #[error("failed to write snapshot file: {0}")]
    WriteFile(String),
}
