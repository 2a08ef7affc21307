const BYTES_PER_MEGABYTE: f64 = 1024.0 * 1024.0;

/// Percentage of `total` covered by `downloaded`.
///
/// An unknown or zero total yields `None` rather than dividing by zero.
///
/// # Examples
///
/// ```
/// use indexsync_fetch::core::percentage;
///
/// assert_eq!(percentage(8, Some(16)), Some(50.0));
/// assert_eq!(percentage(8, Some(0)), None);
/// assert_eq!(percentage(8, None), None);
/// ```
pub fn percentage(downloaded: u64, total: Option<u64>) -> Option<f64> {
    match total {
        Some(total) if total > 0 => Some(downloaded as f64 / total as f64 * 100.0),
        _ => None,
    }
}

/// Byte count expressed in mebibytes.
pub fn megabytes(bytes: u64) -> f64 {
    bytes as f64 / BYTES_PER_MEGABYTE
}

/// Parses a `Content-Length` header value.
///
/// Malformed values are treated as absent.
pub fn parse_content_length(value: &str) -> Option<u64> {
    value.trim().parse::<u64>().ok()
}
