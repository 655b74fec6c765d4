pub mod ignore;
pub mod render;
pub mod walk;

pub use ignore::{DEFAULT_IGNORE, IgnoreSet};
pub use walk::{RenderOptions, WalkSummary, list_visible, walk_tree};
