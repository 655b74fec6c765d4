use anyhow::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::models::{EntryKind, FsEntry};

use super::FileSystem;

#[derive(Clone, Debug)]
enum Response {
    Ok(Vec<FsEntry>),
    Err(io::ErrorKind, String),
}

#[derive(Clone, Default)]
pub struct MockFileSystem {
    inner: Arc<Mutex<Inner>>,
}

#[derive(Default)]
struct Inner {
    responses: HashMap<PathBuf, Response>,
    calls: Vec<PathBuf>,
}

impl MockFileSystem {
    pub fn set_dir_entries(&self, dir: impl Into<PathBuf>, entries: Vec<FsEntry>) {
        let mut inner = self.inner.lock().expect("mock fs lock");
        inner.responses.insert(dir.into(), Response::Ok(entries));
    }

    /// Shorthand for a listing of `(name, kind)` pairs under `dir`.
    pub fn set_children(&self, dir: &str, children: &[(&str, EntryKind)]) {
        let entries = children
            .iter()
            .map(|&(name, kind)| FsEntry {
                path: Path::new(dir).join(name),
                name: name.to_owned(),
                kind,
            })
            .collect();
        self.set_dir_entries(dir, entries);
    }

    pub fn set_error(
        &self,
        dir: impl Into<PathBuf>,
        kind: io::ErrorKind,
        message: impl Into<String>,
    ) {
        let mut inner = self.inner.lock().expect("mock fs lock");
        inner
            .responses
            .insert(dir.into(), Response::Err(kind, message.into()));
    }

    pub fn set_permission_denied(&self, dir: impl Into<PathBuf>) {
        self.set_error(dir, io::ErrorKind::PermissionDenied, "Permission denied");
    }

    pub fn calls(&self) -> Vec<PathBuf> {
        let inner = self.inner.lock().expect("mock fs lock");
        inner.calls.clone()
    }
}

#[async_trait]
impl FileSystem for MockFileSystem {
    async fn read_dir(&self, dir: &Path) -> Result<Vec<FsEntry>> {
        let mut inner = self.inner.lock().expect("mock fs lock");
        inner.calls.push(dir.to_path_buf());

        match inner.responses.get(dir) {
            Some(Response::Ok(entries)) => Ok(entries.clone()),
            Some(Response::Err(kind, message)) => {
                Err(io::Error::new(*kind, message.clone()).into())
            }
            None => Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("no mock response for {}", dir.display()),
            )
            .into()),
        }
    }
}
