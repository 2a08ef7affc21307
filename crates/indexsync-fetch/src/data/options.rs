use std::fmt;
use std::sync::Arc;

use super::progress::Progress;

/// Phases of a download.
///
/// Downloads move through these in order:
/// Connecting → Downloading → Completed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FetchPhase {
    /// Response headers accepted, body not read yet.
    #[default]
    Connecting,

    /// A chunk has just been received.
    Downloading,

    /// The server closed the body cleanly.
    ///
    /// Terminal state for successful downloads.
    Completed,
}

impl fmt::Display for FetchPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchPhase::Connecting => write!(f, "Connecting"),
            FetchPhase::Downloading => write!(f, "Downloading"),
            FetchPhase::Completed => write!(f, "Completed"),
        }
    }
}

/// Sink receiving every progress snapshot.
pub type ProgressCallback = Arc<dyn Fn(&Progress) + Send + Sync>;

/// Configuration for a [`Fetcher`](crate::Fetcher).
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use indexsync_fetch::{FetchOptions, FetchPhase, Progress};
///
/// let options = FetchOptions::default().on_progress(Arc::new(|progress: &Progress| {
///     if progress.phase == FetchPhase::Completed {
///         println!("{progress}");
///     }
/// }));
/// assert!(options.on_progress.is_some());
/// ```
#[derive(Clone, Default)]
pub struct FetchOptions {
    /// Progress callback.
    ///
    /// Invoked once when the response headers are accepted, after every chunk
    /// and once more when the body ends. The callback runs before the chunk
    /// is handed to the consumer.
    ///
    /// Default: None
    pub on_progress: Option<ProgressCallback>,
}

impl fmt::Debug for FetchOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FetchOptions")
            .field("on_progress", &self.on_progress.as_ref().map(|_| "{ ... }"))
            .finish()
    }
}

impl FetchOptions {
    /// Set the progress callback.
    #[must_use]
    pub fn on_progress(mut self, on_progress: ProgressCallback) -> Self {
        self.on_progress = Some(on_progress);
        self
    }
}
