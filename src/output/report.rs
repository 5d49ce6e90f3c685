//! Indented size report
//!
//! Each directory is rendered as its own line, followed by its
//! subdirectories (recursively) and then its files, one indent step deeper:
//!
//! ```text
//! A    300b
//!   B    200b
//!     f2.txt    200b
//!   f1.txt    100b
//! ```

use std::io::{self, Write};

use crate::tree::DirectoryNode;

use super::config::ReportConfig;

/// Separator between an entry name and its size.
const SIZE_SEPARATOR: &str = "    ";

#[cfg(windows)]
pub const LINE_ENDING: &str = "\r\n";
#[cfg(not(windows))]
pub const LINE_ENDING: &str = "\n";

/// Render `root` into report lines, `indent_step` spaces per level.
pub fn render(root: &DirectoryNode, indent_step: usize) -> Vec<String> {
    let mut lines = Vec::new();
    render_node(root, 0, indent_step, &mut lines);
    lines
}

fn render_node(node: &DirectoryNode, indent: usize, step: usize, lines: &mut Vec<String>) {
    lines.push(format_line(indent, &node.name, node.total_size));

    let child_indent = indent + step;
    for dir in &node.subdirectories {
        render_node(dir, child_indent, step, lines);
    }
    for file in &node.files {
        lines.push(format_line(child_indent, &file.name, file.size));
    }
}

fn format_line(indent: usize, name: &str, size: u64) -> String {
    format!("{:indent$}{name}{SIZE_SEPARATOR}{size}b", "")
}

/// Formatter for the plain-text report.
pub struct ReportFormatter {
    config: ReportConfig,
}

impl ReportFormatter {
    pub fn new(config: ReportConfig) -> Self {
        Self { config }
    }

    pub fn lines(&self, root: &DirectoryNode) -> Vec<String> {
        render(root, self.config.indent_step)
    }

    pub fn write_to<W: Write>(&self, root: &DirectoryNode, out: &mut W) -> io::Result<()> {
        write_lines(out, &self.lines(root))
    }
}

/// Write `lines` to `out`, each terminated by `LINE_ENDING`.
pub fn write_lines<W: Write>(out: &mut W, lines: &[String]) -> io::Result<()> {
    for line in lines {
        out.write_all(line.as_bytes())?;
        out.write_all(LINE_ENDING.as_bytes())?;
    }
    out.flush()
}
