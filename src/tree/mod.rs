//! Directory size tree
//!
//! - `TreeBuilder`: walks a directory depth-first and builds the full tree in memory
//! - `sort_descending_by_size`: orders every level largest-first
//! - `format_human_size`: human-readable sizes for console messages

mod builder;
mod node;
mod sort;
mod utils;

pub use builder::{FileListing, TreeBuilder, read_files};
pub use node::{DirectoryNode, FileEntry};
pub use sort::sort_descending_by_size;
pub use utils::format_human_size;
