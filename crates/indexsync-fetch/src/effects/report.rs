use crate::data::{FetchPhase, Progress};

/// Progress sink that logs each snapshot through `tracing`.
///
/// Chunk and completion lines go out at `info`; the connection line at `debug`.
pub fn log_progress(progress: &Progress) {
    match progress.phase {
        FetchPhase::Connecting => tracing::debug!("{progress}"),
        FetchPhase::Downloading | FetchPhase::Completed => tracing::info!("{progress}"),
    }
}
