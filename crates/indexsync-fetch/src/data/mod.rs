//! Immutable data types for fetching operations.
//!
//! Options configure a [`Fetcher`](crate::Fetcher); progress snapshots are what it
//! hands to the installed progress sink.

pub mod options;
pub mod progress;

pub use options::{FetchOptions, FetchPhase, ProgressCallback};
pub use progress::Progress;
