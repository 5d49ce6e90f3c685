//! sizetree - directory sizes, largest first, as an indented text report

pub mod output;
pub mod tree;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use output::{
    Console, ConsoleConfig, DEFAULT_INDENT_STEP, ReportConfig, ReportFormatter, is_write_denied,
    print_json, render, resolve_output_path, write_report,
};
pub use tree::{
    DirectoryNode, FileEntry, TreeBuilder, format_human_size, sort_descending_by_size,
};
