use anyhow::Result;
use async_trait::async_trait;
use std::fs::DirEntry;
use std::io;
use std::path::Path;
use tokio::task;

use crate::models::{EntryKind, FsEntry};

use super::FileSystem;

pub struct RealFileSystem;

#[async_trait]
impl FileSystem for RealFileSystem {
    async fn read_dir(&self, dir: &Path) -> Result<Vec<FsEntry>> {
        let dir = dir.to_path_buf();
        task::spawn_blocking(move || {
            let mut entries = Vec::new();
            // The handle is dropped at the end of this loop.
            for entry in skip_unreadable(&dir, std::fs::read_dir(&dir)?) {
                entries.push(FsEntry {
                    path: entry.path(),
                    name: entry.file_name().to_string_lossy().into_owned(),
                    kind: classify(&entry),
                });
            }
            Ok(entries)
        })
        .await?
    }
}

/// Drop entries the OS failed to return, logging each one.
fn skip_unreadable<'a, T, I>(dir: &'a Path, entries: I) -> impl Iterator<Item = T> + 'a
where
    I: IntoIterator<Item = io::Result<T>>,
    I::IntoIter: 'a,
{
    entries.into_iter().filter_map(move |entry| match entry {
        Ok(entry) => Some(entry),
        Err(err) => {
            log::warn!("skipping unreadable entry in {}: {err}", dir.display());
            None
        }
    })
}

fn classify(entry: &DirEntry) -> EntryKind {
    let file_type = match entry.file_type() {
        Ok(file_type) => file_type,
        Err(err) => {
            log::debug!("cannot stat {}: {err}", entry.path().display());
            return EntryKind::Other;
        }
    };

    let file_type = if file_type.is_symlink() {
        // Follow the link; a dangling one stays a leaf.
        match std::fs::metadata(entry.path()) {
            Ok(metadata) => metadata.file_type(),
            Err(_) => return EntryKind::Other,
        }
    } else {
        file_type
    };

    if file_type.is_dir() {
        EntryKind::Directory
    } else if file_type.is_file() {
        EntryKind::File
    } else {
        EntryKind::Other
    }
}
