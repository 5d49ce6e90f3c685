//! TreeBuilder - walks a directory and builds the full size tree in memory

use std::fs::{self, DirEntry};
use std::io::{self, ErrorKind};
use std::path::{Path, PathBuf};

use log::{debug, trace, warn};

use super::node::{DirectoryNode, FileEntry};

/// Files of one directory that could be measured, and their combined size.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct FileListing {
    pub total_bytes: u64,
    pub entries: Vec<FileEntry>,
}

/// Immediate children of a directory, split by kind and sorted by name.
struct DirListing {
    files: Vec<PathBuf>,
    subdirectories: Vec<PathBuf>,
}

/// Depth-first builder for `DirectoryNode` trees.
///
/// Directories that cannot be listed because of missing permissions become
/// inaccessible zero-size nodes, and files whose metadata cannot be read are
/// left out. Every other I/O error aborts the build.
#[derive(Debug, Clone, Default)]
pub struct TreeBuilder;

impl TreeBuilder {
    pub fn new() -> Self {
        Self
    }

    /// Build the tree rooted at `root`.
    ///
    /// A root that cannot be listed is treated like any nested directory and
    /// yields an inaccessible node. A missing root fails with `NotFound`.
    pub fn build(&self, root: &Path) -> io::Result<DirectoryNode> {
        self.build_dir(root)
    }

    fn build_dir(&self, path: &Path) -> io::Result<DirectoryNode> {
        trace!("visiting {}", path.display());
        self.build_from_listing(path, list_dir(path))
    }

    /// Turn the outcome of listing `path` into a node. A denied listing gives
    /// an inaccessible node, any other listing error is returned.
    fn build_from_listing(
        &self,
        path: &Path,
        listing: io::Result<DirListing>,
    ) -> io::Result<DirectoryNode> {
        let name = node_name(path);
        let listing = match listing {
            Ok(listing) => listing,
            Err(e) if is_access_denied(&e) => {
                warn!("cannot read directory '{}': {}", path.display(), e);
                return Ok(DirectoryNode::inaccessible(name));
            }
            Err(e) => return Err(e),
        };

        let files = read_files(&listing.files)?;
        let mut node = DirectoryNode::new(name);
        node.total_size = files.total_bytes;
        node.files = files.entries;

        for dir in &listing.subdirectories {
            node.push_subdirectory(self.build_dir(dir)?);
        }

        Ok(node)
    }
}

/// Measure every file in `paths`, skipping the ones whose metadata is unreadable.
pub fn read_files(paths: &[PathBuf]) -> io::Result<FileListing> {
    let mut listing = FileListing::default();

    for path in paths {
        // Symlinks are measured, never followed
        let metadata = match fs::symlink_metadata(path) {
            Ok(m) => m,
            Err(e) if is_unreadable_file(&e) => {
                debug!("skipping file '{}': {}", path.display(), e);
                continue;
            }
            Err(e) => return Err(e),
        };

        let size = metadata.len();
        listing.total_bytes += size;
        listing.entries.push(FileEntry::new(node_name(path), size));
    }

    Ok(listing)
}

fn list_dir(path: &Path) -> io::Result<DirListing> {
    let mut entries = fs::read_dir(path)?.collect::<io::Result<Vec<DirEntry>>>()?;
    entries.sort_by_key(|e| e.file_name());

    let mut listing = DirListing {
        files: Vec::new(),
        subdirectories: Vec::new(),
    };

    for entry in entries {
        let file_type = match entry.file_type() {
            Ok(t) => t,
            Err(e) if is_unreadable_file(&e) => {
                debug!("skipping entry '{}': {}", entry.path().display(), e);
                continue;
            }
            Err(e) => return Err(e),
        };

        if file_type.is_dir() {
            listing.subdirectories.push(entry.path());
        } else {
            listing.files.push(entry.path());
        }
    }

    Ok(listing)
}

/// Last path component, or the path as given when there is none (`.`, `/`).
fn node_name(path: &Path) -> String {
    path.file_name()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

fn is_access_denied(err: &io::Error) -> bool {
    err.kind() == ErrorKind::PermissionDenied
}

/// Per-file failures that drop the file instead of failing the directory.
fn is_unreadable_file(err: &io::Error) -> bool {
    matches!(
        err.kind(),
        ErrorKind::InvalidFilename | ErrorKind::NotFound | ErrorKind::PermissionDenied
    )
}
