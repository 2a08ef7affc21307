//! Streaming HTTP download of a JSON index to disk.
//!
//! # Architecture
//!
//! This crate follows the three-layer pattern:
//! - [`data`] - Immutable options and progress types
//! - [`core`] - Pure checks and progress arithmetic
//! - [`effects`] - I/O operations behind the [`HttpClient`] trait
//!
//! # Key Features
//!
//! - **Lazy**: [`Fetcher::chunks`] sends nothing until the stream is polled
//! - **Backpressure**: one chunk is read from the network per poll, and [`write_json`]
//!   writes it before polling again
//! - **Fail-Fast**: no retries; a bad extension, status or transport failure surfaces
//!   immediately
//! - **Injectable Progress**: callers install a sink via [`FetchOptions::on_progress`];
//!   [`log_progress`] is the `tracing`-backed default

pub mod core;
pub mod data;
pub mod effects;
mod error;

use std::path::Path;

pub use crate::core::{has_json_extension, is_success};
pub use data::{FetchOptions, FetchPhase, Progress, ProgressCallback};
pub use effects::{
    BoxStream, ChunkStream, Fetcher, HttpClient, HttpResponse, log_progress, write_chunks,
    write_json,
};
pub use error::{BoxError, FetchError, Result};

#[cfg(feature = "reqwest")]
pub use effects::{ClientSettings, ReqwestClient};
#[cfg(feature = "reqwest")]
pub use reqwest::Url;

/// Download `url` into `output`, which must end in `.json`.
///
/// Returns the number of bytes written.
pub async fn sync<C: HttpClient>(fetcher: &Fetcher<C>, url: &str, output: &Path) -> Result<u64> {
    let chunks = fetcher.chunks(url);
    write_json(chunks, output).await
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use tempfile::tempdir;

    use super::*;
    use crate::effects::mock::MockHttpClient;

    #[tokio::test]
    async fn test_sync_round_trip() {
        let dir = tempdir().unwrap();
        let output = dir.path().join("index.json");
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let fetcher = Fetcher::new(MockHttpClient::ok([&b"{\"key\": "[..], b"\"value\"}"]))
            .with_options(FetchOptions::default().on_progress(Arc::new(move |p: &Progress| {
                sink.lock().unwrap().push(*p);
            })));

        let written = sync(&fetcher, "http://localhost/", &output).await.unwrap();

        assert_eq!(written, 16);
        assert_eq!(std::fs::read(&output).unwrap(), br#"{"key": "value"}"#);
        let last = *seen.lock().unwrap().last().unwrap();
        assert!(last.is_completed());
        assert_eq!(last.bytes_downloaded, written);
    }

    #[tokio::test]
    async fn test_sync_txt_output_makes_no_request() {
        let dir = tempdir().unwrap();
        let output = dir.path().join("out.txt");
        let fetcher = Fetcher::new(MockHttpClient::ok([br#"{"key": "value"}"#]));

        let err = sync(&fetcher, "http://localhost/", &output).await.unwrap_err();

        assert!(matches!(err, FetchError::InvalidExtension { .. }));
        assert_eq!(fetcher.client().calls(), 0);
        assert!(!output.exists());
    }
}
