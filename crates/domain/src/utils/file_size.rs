//! Human readable byte sizes

use crate::constants::FILE_SIZE_UNITS;

/// Format a byte count with binary (1024) units, e.g. `1536` → `"1.5 KB"`.
///
/// Values are rounded to two decimals and trailing zeros are dropped.
/// Anything at or above a gigabyte is expressed in GB.
#[allow(clippy::cast_precision_loss)]
pub fn format_file_size(bytes: u64) -> String {
    if bytes == 0 {
        return format!("0 {}", FILE_SIZE_UNITS[0]);
    }

    let mut unit = 0;
    let mut scaled = bytes;
    while scaled >= 1024 && unit + 1 < FILE_SIZE_UNITS.len() {
        scaled /= 1024;
        unit += 1;
    }

    let value = bytes as f64 / 1024_f64.powi(unit as i32);
    let rounded = format!("{value:.2}");
    let trimmed = rounded.trim_end_matches('0').trim_end_matches('.');
    format!("{trimmed} {}", FILE_SIZE_UNITS[unit])
}
