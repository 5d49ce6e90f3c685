//! Size tree types built by `TreeBuilder` and consumed by the report and JSON output

use serde::Serialize;

/// A single file and its length in bytes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileEntry {
    pub name: String,
    pub size: u64,
}

impl FileEntry {
    pub fn new(name: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            size,
        }
    }
}

/// One directory with its direct files, its subdirectories and the
/// aggregated size of everything beneath it.
///
/// `total_size` is the sum of `files[..].size` and
/// `subdirectories[..].total_size`. A directory whose contents could not be
/// listed has `accessible == false`, no children and a size of zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DirectoryNode {
    pub name: String,
    pub total_size: u64,
    pub accessible: bool,
    pub subdirectories: Vec<DirectoryNode>,
    pub files: Vec<FileEntry>,
}

impl DirectoryNode {
    /// Empty, accessible directory.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            total_size: 0,
            accessible: true,
            subdirectories: Vec::new(),
            files: Vec::new(),
        }
    }

    /// Directory whose contents could not be enumerated.
    pub fn inaccessible(name: impl Into<String>) -> Self {
        Self {
            accessible: false,
            ..Self::new(name)
        }
    }

    /// Append a file and account for its size.
    pub fn push_file(&mut self, file: FileEntry) {
        self.total_size += file.size;
        self.files.push(file);
    }

    /// Append a finished subtree and account for its size.
    pub fn push_subdirectory(&mut self, dir: DirectoryNode) {
        self.total_size += dir.total_size;
        self.subdirectories.push(dir);
    }

    /// Size recomputed from the direct children only.
    ///
    /// Equals `total_size` for every node of a well-formed tree.
    pub fn computed_size(&self) -> u64 {
        let files: u64 = self.files.iter().map(|f| f.size).sum();
        let dirs: u64 = self.subdirectories.iter().map(|d| d.total_size).sum();
        files + dirs
    }

    /// Number of directories below this one (not counting itself).
    pub fn directory_count(&self) -> usize {
        self.subdirectories
            .iter()
            .map(|d| 1 + d.directory_count())
            .sum()
    }

    /// Number of files anywhere below this directory.
    pub fn file_count(&self) -> usize {
        self.files.len()
            + self
                .subdirectories
                .iter()
                .map(DirectoryNode::file_count)
                .sum::<usize>()
    }

    /// Number of directories, this one included, that could not be listed.
    pub fn inaccessible_count(&self) -> usize {
        usize::from(!self.accessible)
            + self
                .subdirectories
                .iter()
                .map(DirectoryNode::inaccessible_count)
                .sum::<usize>()
    }
}
