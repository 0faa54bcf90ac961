use chrono::{DateTime, TimeZone, Utc};

const SIZE_UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];

/// Formats a byte count for display, e.g. `1536` becomes `"1.5 KB"`.
/// At most two decimals are kept and trailing zeros are dropped.
pub fn format_file_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let mut unit = 0;
    while unit + 1 < SIZE_UNITS.len() && bytes >= 1024u64.pow(unit as u32 + 1) {
        unit += 1;
    }

    let value = bytes as f64 / 1024f64.powi(unit as i32);
    let rounded = format!("{:.2}", value);
    let rounded = rounded.trim_end_matches('0').trim_end_matches('.');
    format!("{} {}", rounded, SIZE_UNITS[unit])
}

/// Formats a timestamp the way the zh-CN locale does: `2025/12/6 07:05:09`
pub fn format_zh_cn_timestamp<Tz: TimeZone>(dt: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    dt.format("%Y/%-m/%-d %H:%M:%S").to_string()
}

/// Compact date stamp used in exported file names, taken in UTC
pub fn date_stamp<Tz: TimeZone>(dt: &DateTime<Tz>) -> String {
    dt.with_timezone(&Utc).format("%Y%m%d").to_string()
}
