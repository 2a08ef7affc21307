use std::path::Path;

use crate::error::{FetchError, Result};

/// Extension every output file must carry.
pub const JSON_EXTENSION: &str = "json";

/// Returns `true` if the HTTP status code is in the 2xx success range.
///
/// # Examples
///
/// ```
/// use indexsync_fetch::core::is_success;
///
/// assert!(is_success(200));
/// assert!(is_success(204));
/// assert!(!is_success(304));
/// assert!(!is_success(404));
/// ```
pub fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

/// Returns `true` if `path` ends in a `.json` extension.
///
/// The comparison is case-sensitive, and a bare `.json` file name has no
/// extension at all.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use indexsync_fetch::core::has_json_extension;
///
/// assert!(has_json_extension(Path::new("index.json")));
/// assert!(!has_json_extension(Path::new("index.txt")));
/// assert!(!has_json_extension(Path::new("index.JSON")));
/// ```
pub fn has_json_extension(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == JSON_EXTENSION)
}

/// Fails with [`FetchError::InvalidExtension`] unless `path` ends in `.json`.
pub fn ensure_json_extension(path: &Path) -> Result<()> {
    if has_json_extension(path) {
        Ok(())
    } else {
        Err(FetchError::InvalidExtension {
            path: path.to_path_buf(),
        })
    }
}
