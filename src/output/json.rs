//! JSON output formatting

use std::io;

use crate::tree::DirectoryNode;

/// Print the size tree as pretty-printed JSON to stdout.
pub fn print_json(node: &DirectoryNode) -> io::Result<()> {
    println!("{}", to_json(node)?);
    Ok(())
}

pub fn to_json(node: &DirectoryNode) -> io::Result<String> {
    serde_json::to_string_pretty(node).map_err(io::Error::other)
}
