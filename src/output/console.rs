//! Status and warning messages on stderr

use std::io::{self, Write};
use std::path::Path;

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::tree::{DirectoryNode, format_human_size};

use super::config::ConsoleConfig;

/// Coloured progress messages for the CLI. Stdout stays reserved for
/// report and JSON output.
pub struct Console {
    config: ConsoleConfig,
    stderr: StandardStream,
}

impl Console {
    pub fn new(config: ConsoleConfig) -> Self {
        let choice = if config.use_color {
            ColorChoice::Auto
        } else {
            ColorChoice::Never
        };
        Self {
            config,
            stderr: StandardStream::stderr(choice),
        }
    }

    /// Progress line, suppressed in quiet mode.
    pub fn status(&mut self, message: &str) -> io::Result<()> {
        if self.config.quiet {
            return Ok(());
        }
        writeln!(self.stderr, "{}", message)
    }

    pub fn warning(&mut self, message: &str) -> io::Result<()> {
        let mut yellow = ColorSpec::new();
        yellow.set_fg(Some(Color::Yellow)).set_bold(true);
        self.stderr.set_color(&yellow)?;
        write!(self.stderr, "warning:")?;
        self.stderr.reset()?;
        writeln!(self.stderr, " {}", message)
    }

    /// Totals for the scan plus the top-level directories, largest first
    /// when the tree is sorted.
    pub fn summary(&mut self, tree: &DirectoryNode) -> io::Result<()> {
        if self.config.quiet {
            return Ok(());
        }

        writeln!(
            self.stderr,
            "Scanned {} directories, {} files ({})",
            tree.directory_count(),
            tree.file_count(),
            format_human_size(tree.total_size)
        )?;

        let mut dir_color = ColorSpec::new();
        dir_color.set_fg(Some(Color::Blue)).set_bold(true);

        for dir in &tree.subdirectories {
            write!(self.stderr, "  ")?;
            self.stderr.set_color(&dir_color)?;
            write!(self.stderr, "{}", dir.name)?;
            self.stderr.reset()?;
            writeln!(self.stderr, "  {}", format_human_size(dir.total_size))?;
        }

        Ok(())
    }

    pub fn writing(&mut self, path: &Path) -> io::Result<()> {
        self.status(&format!("Writing to {}", path.display()))
    }
}
