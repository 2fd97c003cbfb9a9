use chrono::{DateTime, NaiveDateTime};

pub const SERVER_INFO_PATH: &str = "/api/server-info";
pub const HISTORY_PATH: &str = "/api/history";
pub const UPLOAD_MULTIPLE_PATH: &str = "/api/upload-multiple";

/// Multipart field name shared by every file of a batch.
pub const UPLOAD_FIELD: &str = "files";

pub const NETWORK_ERROR_MESSAGE: &str = "Network error";
pub const UPLOAD_FAILED_MESSAGE: &str = "Upload failed";

const SIZE_UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];
const SIZE_STEP: f64 = 1024.0;
const DISPLAY_TIME_FORMAT: &str = "%Y/%m/%d %H:%M:%S";
const NAIVE_ISO_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// Render a byte count with base-1024 units and at most two decimals.
pub fn format_file_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= SIZE_STEP && unit < SIZE_UNITS.len() - 1 {
        value /= SIZE_STEP;
        unit += 1;
    }

    let rounded = (value * 100.0).round() / 100.0;
    format!("{} {}", rounded, SIZE_UNITS[unit])
}

/// Parse either an RFC 3339 timestamp or the naive `isoformat()` output of
/// the companion server. Offsets are dropped; the wall-clock time is kept.
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let trimmed = raw.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(parsed.naive_local());
    }
    NaiveDateTime::parse_from_str(trimmed, NAIVE_ISO_FORMAT).ok()
}

pub fn format_timestamp(raw: &str) -> String {
    match parse_timestamp(raw) {
        Some(parsed) => parsed.format(DISPLAY_TIME_FORMAT).to_string(),
        None => raw.to_string(),
    }
}

pub fn batch_label(file_count: usize) -> String {
    if file_count == 1 {
        "1 file".to_string()
    } else {
        format!("{} files", file_count)
    }
}
