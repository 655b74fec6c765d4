pub mod cli;
pub mod core;
pub mod error;
pub mod fs;
pub mod models;

use path_clean::PathClean;
use std::io;
use std::path::{Path, PathBuf};

pub use crate::core::{IgnoreSet, RenderOptions, WalkSummary, walk_tree};
pub use error::CliError;

/// Absolute, lexically normalized form of `root_path` for the header line.
/// Symlinks are not resolved.
pub fn root_display_path(root_path: &Path) -> io::Result<PathBuf> {
    Ok(std::path::absolute(root_path)?.clean())
}
