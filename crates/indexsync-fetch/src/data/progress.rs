use std::fmt;

use super::options::FetchPhase;
use crate::core::{megabytes, percentage};

/// Snapshot of a single download, handed to the progress sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    /// Current phase of the download.
    pub phase: FetchPhase,

    /// Bytes received so far.
    pub bytes_downloaded: u64,

    /// Total expected bytes, from the `Content-Length` header.
    ///
    /// `None` when the server did not declare a length.
    pub total_bytes: Option<u64>,
}

impl Progress {
    pub(crate) fn connected(total_bytes: Option<u64>) -> Self {
        Self {
            phase: FetchPhase::Connecting,
            bytes_downloaded: 0,
            total_bytes,
        }
    }

    /// Percentage of the declared total received so far.
    ///
    /// Returns `None` when the total is unknown or zero.
    #[must_use]
    pub fn percentage(&self) -> Option<f64> {
        percentage(self.bytes_downloaded, self.total_bytes)
    }

    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.phase == FetchPhase::Completed
    }
}

impl fmt::Display for Progress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.phase {
            FetchPhase::Connecting => match self.total_bytes {
                Some(total) => write!(f, "Connected, expecting {total} bytes"),
                None => write!(f, "Connected, total size unknown"),
            },
            FetchPhase::Downloading => match (self.total_bytes, self.percentage()) {
                (Some(total), Some(pct)) => write!(
                    f,
                    "Downloaded {} of {} bytes ({:.2}%)",
                    self.bytes_downloaded, total, pct
                ),
                _ => write!(
                    f,
                    "Downloaded {} bytes (total size unknown)",
                    self.bytes_downloaded
                ),
            },
            FetchPhase::Completed => write!(
                f,
                "Download complete. Total size: {:.2} MB.",
                megabytes(self.bytes_downloaded)
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn downloading(bytes_downloaded: u64, total_bytes: Option<u64>) -> Progress {
        Progress {
            phase: FetchPhase::Downloading,
            bytes_downloaded,
            total_bytes,
        }
    }

    #[test]
    fn test_display_known_total() {
        assert_eq!(
            downloading(8, Some(16)).to_string(),
            "Downloaded 8 of 16 bytes (50.00%)"
        );
    }

    #[test]
    fn test_display_unknown_total() {
        assert_eq!(
            downloading(8, None).to_string(),
            "Downloaded 8 bytes (total size unknown)"
        );
        // A zero Content-Length is reported like a missing one.
        assert_eq!(
            downloading(8, Some(0)).to_string(),
            "Downloaded 8 bytes (total size unknown)"
        );
    }

    #[test]
    fn test_display_completed() {
        let progress = Progress {
            phase: FetchPhase::Completed,
            bytes_downloaded: 3 * 1024 * 1024 / 2,
            total_bytes: None,
        };
        assert!(progress.is_completed());
        assert_eq!(progress.to_string(), "Download complete. Total size: 1.50 MB.");
    }

    #[test]
    fn test_display_connected() {
        assert_eq!(
            Progress::connected(Some(17)).to_string(),
            "Connected, expecting 17 bytes"
        );
        assert_eq!(
            Progress::connected(None).to_string(),
            "Connected, total size unknown"
        );
    }
}
