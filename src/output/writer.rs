//! Report file naming and persistence

use std::fs::File;
use std::io::{self, BufWriter};
use std::path::{Path, PathBuf};

use super::report::write_lines;

const REPORT_EXTENSION: &str = ".txt";

/// Default report file name for a scan of `root`: `<dir name>_sizes.txt`.
pub fn default_report_name(root: &Path) -> String {
    let stem = root
        .file_name()
        .map(|s| s.to_string_lossy().into_owned())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| "directory".to_string());
    format!("{}_sizes{}", stem, REPORT_EXTENSION)
}

/// Append `.txt` to the file name unless it already ends with it (any case).
///
/// An existing other extension is kept: `report.log` becomes `report.log.txt`.
pub fn ensure_txt_extension(path: &Path) -> PathBuf {
    let has_txt = path
        .file_name()
        .map(|n| n.to_string_lossy().to_lowercase().ends_with(REPORT_EXTENSION))
        .unwrap_or(false);

    if has_txt {
        path.to_path_buf()
    } else {
        let mut name = path.as_os_str().to_os_string();
        name.push(REPORT_EXTENSION);
        PathBuf::from(name)
    }
}

/// Where the report for a scan of `root` goes.
///
/// Without an explicit `output` the name is derived from `root`. Relative
/// paths are resolved against `root`.
pub fn resolve_output_path(root: &Path, output: Option<&Path>) -> PathBuf {
    let path = match output {
        Some(p) => ensure_txt_extension(p),
        None => PathBuf::from(default_report_name(root)),
    };

    if path.is_absolute() {
        path
    } else {
        root.join(path)
    }
}

/// Write failures that are reported as a warning instead of failing the run.
pub fn is_write_denied(err: &io::Error) -> bool {
    err.kind() == io::ErrorKind::PermissionDenied
}

/// Write report lines to `path`, replacing any existing file.
pub fn write_report(path: &Path, lines: &[String]) -> io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_lines(&mut writer, lines)
}
