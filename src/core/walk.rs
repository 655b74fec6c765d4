use std::io::{self, Write};
use std::path::Path;

use anyhow::Context;

use crate::core::ignore::IgnoreSet;
use crate::core::render::write_line;
use crate::fs::FileSystem;
use crate::models::{Connector, FsEntry, LineLabel, TreeLine};

/// Per-invocation traversal settings.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Names excluded at every depth
    pub ignore: IgnoreSet,
    /// Directory levels to expand below the root (None means unlimited).
    /// With `Some(0)` only the root's own entries are listed.
    pub max_depth: Option<usize>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            ignore: IgnoreSet::defaults(),
            max_depth: None,
        }
    }
}

impl RenderOptions {
    /// Whether a directory listed at `depth` may be expanded.
    fn expands_at(&self, depth: usize) -> bool {
        self.max_depth.is_none_or(|max| depth < max)
    }
}

/// What a traversal printed.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct WalkSummary {
    pub directories: usize,
    pub files: usize,
    pub unreadable: usize,
}

/// A listed directory whose entries are still being printed.
struct Frame {
    entries: std::vec::IntoIter<FsEntry>,
    ancestors: Vec<bool>,
    depth: usize,
}

struct Walker<'a, F, W> {
    fs: &'a F,
    options: &'a RenderOptions,
    writer: &'a mut W,
    summary: WalkSummary,
}

/// Print the tree below `root` to `writer`, depth-first and pre-order.
///
/// Directories that cannot be listed (the root included) produce a single
/// terminal line in place of their children and the walk carries on. Only
/// failures to write to `writer` are returned as errors.
pub async fn walk_tree<F, W>(
    fs: &F,
    root: &Path,
    options: &RenderOptions,
    writer: &mut W,
) -> anyhow::Result<WalkSummary>
where
    F: FileSystem,
    W: Write,
{
    let mut walker = Walker {
        fs,
        options,
        writer,
        summary: WalkSummary::default(),
    };

    let mut stack = Vec::new();
    if let Some(frame) = walker.open(root, Vec::new(), 0).await? {
        stack.push(frame);
    }

    while let Some(frame) = stack.last_mut() {
        let Some(entry) = frame.entries.next() else {
            stack.pop();
            continue;
        };

        let connector = if frame.entries.as_slice().is_empty() {
            Connector::Terminal
        } else {
            Connector::Branch
        };
        walker.emit(&TreeLine {
            ancestors: &frame.ancestors,
            connector,
            label: LineLabel::Entry(&entry.name),
        })?;

        if !entry.is_dir() {
            walker.summary.files += 1;
            continue;
        }
        walker.summary.directories += 1;

        if !options.expands_at(frame.depth) {
            continue;
        }

        let mut ancestors = frame.ancestors.clone();
        ancestors.push(connector.has_more());
        let depth = frame.depth + 1;

        if let Some(child) = walker.open(&entry.path, ancestors, depth).await? {
            stack.push(child);
        }
    }

    log::debug!("walked {}: {:?}", root.display(), walker.summary);
    Ok(walker.summary)
}

impl<F, W> Walker<'_, F, W>
where
    F: FileSystem,
    W: Write,
{
    async fn open(
        &mut self,
        dir: &Path,
        ancestors: Vec<bool>,
        depth: usize,
    ) -> anyhow::Result<Option<Frame>> {
        match list_visible(self.fs, dir, &self.options.ignore).await {
            Ok(entries) => Ok(Some(Frame {
                entries: entries.into_iter(),
                ancestors,
                depth,
            })),
            Err(err) => {
                log::warn!("{err:#}");
                self.summary.unreadable += 1;
                self.emit(&TreeLine {
                    ancestors: &ancestors,
                    connector: Connector::Terminal,
                    label: failure_label(&err),
                })?;
                Ok(None)
            }
        }
    }

    fn emit(&mut self, line: &TreeLine<'_>) -> anyhow::Result<()> {
        write_line(self.writer, line).context("failed to write tree output")
    }
}

/// List `dir`, drop ignored names, and sort by name.
pub async fn list_visible<F: FileSystem>(
    fs: &F,
    dir: &Path,
    ignore: &IgnoreSet,
) -> anyhow::Result<Vec<FsEntry>> {
    let mut entries = fs
        .read_dir(dir)
        .await
        .with_context(|| format!("cannot list {}", dir.display()))?;

    let listed = entries.len();
    entries.retain(|entry| !ignore.matches(&entry.name));
    entries.sort_by(|a, b| a.name.cmp(&b.name));

    log::debug!(
        "listed {}: {} entries, {} ignored",
        dir.display(),
        entries.len(),
        listed - entries.len()
    );
    Ok(entries)
}

fn failure_label(err: &anyhow::Error) -> LineLabel<'static> {
    match err.chain().find_map(|cause| cause.downcast_ref::<io::Error>()) {
        Some(io_err) if io_err.kind() == io::ErrorKind::PermissionDenied => {
            LineLabel::PermissionDenied
        }
        Some(io_err) => LineLabel::Unreadable(io_err.to_string()),
        None => LineLabel::Unreadable(err.root_cause().to_string()),
    }
}
