//! Largest-first ordering of a size tree

use super::node::DirectoryNode;

/// Reorder files and subdirectories of `node` and of every directory below
/// it by descending size. Entries of equal size keep their relative order.
pub fn sort_descending_by_size(node: &mut DirectoryNode) {
    for dir in &mut node.subdirectories {
        sort_descending_by_size(dir);
    }

    // sort_by is stable
    node.subdirectories.sort_by(|a, b| b.total_size.cmp(&a.total_size));
    node.files.sort_by(|a, b| b.size.cmp(&a.size));
}
