//! Output configuration types

/// Default number of spaces added per nesting level.
pub const DEFAULT_INDENT_STEP: usize = 2;

/// Configuration for the text report.
#[derive(Debug, Clone)]
pub struct ReportConfig {
    /// Spaces added per nesting level
    pub indent_step: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            indent_step: DEFAULT_INDENT_STEP,
        }
    }
}

/// Configuration for status messages on stderr.
#[derive(Debug, Clone, Default)]
pub struct ConsoleConfig {
    pub use_color: bool,
    /// Suppress progress messages (warnings are still shown)
    pub quiet: bool,
}
