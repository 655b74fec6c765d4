use std::path::PathBuf;

use thiserror::Error;

/// Problems with the command line, reported before any traversal starts.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("--level requires a non-negative integer argument, got '{0}'")]
    InvalidLevel(String),

    #[error("'{}' is not a valid directory", .0.display())]
    InvalidPath(PathBuf),
}
