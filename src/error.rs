//! Error types

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error when accessing `{}`", .0.display())]
    Io(PathBuf, #[source] std::io::Error),

    #[error("invalid JSON in `{}`", .0.display())]
    Json(PathBuf, #[source] serde_json::Error),

    #[error("template file not found: {}", .0.display())]
    MissingTemplate(PathBuf),

    #[error("body directory not found: {}", .0.display())]
    MissingDirectory(PathBuf),

    #[error("invalid color `{0}`, expected #rgb or #rrggbb")]
    InvalidColor(String),
}
