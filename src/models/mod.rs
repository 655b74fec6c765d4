mod entry;
mod line;

pub use entry::{EntryKind, FsEntry};
pub use line::{Connector, LineLabel, TreeLine};
