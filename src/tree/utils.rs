//! Shared helpers for size trees

/// Binary unit suffixes used by `format_human_size`, smallest first.
const UNITS: [&str; 5] = ["B", "K", "M", "G", "T"];

/// Size for console summaries: whole bytes below 1 KiB, otherwise one
/// decimal in the largest 1024-based unit that keeps the value >= 1.
pub fn format_human_size(bytes: u64) -> String {
    if bytes < 1024 {
        return format!("{}B", bytes);
    }

    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    format!("{:.1}{}", value, UNITS[unit])
}
