//! Report formatting and output
//!
//! # Module Structure
//!
//! - `config` - Output configuration types
//! - `report` - Indented plain-text size report
//! - `writer` - Report file naming and persistence
//! - `json` - JSON output
//! - `console` - Status and warning messages on stderr

mod config;
mod console;
mod json;
mod report;
mod writer;

pub use config::{ConsoleConfig, DEFAULT_INDENT_STEP, ReportConfig};
pub use console::Console;
pub use json::{print_json, to_json};
pub use report::{LINE_ENDING, ReportFormatter, render, write_lines};
pub use writer::{
    default_report_name, ensure_txt_extension, is_write_denied, resolve_output_path, write_report,
};
