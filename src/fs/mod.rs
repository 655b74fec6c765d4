mod real;

#[cfg(test)]
mod mock;

pub use real::RealFileSystem;

#[cfg(test)]
pub use mock::MockFileSystem;

use anyhow::Result;
use async_trait::async_trait;
use std::path::Path;

use crate::models::FsEntry;

/// Directory listing seam used by the traversal.
///
/// Implementations return entries in no particular order. I/O failures should
/// carry the underlying `std::io::Error` so callers can tell a denied listing
/// apart from other failures.
#[async_trait]
pub trait FileSystem: Send + Sync {
    async fn read_dir(&self, dir: &Path) -> Result<Vec<FsEntry>>;
}
