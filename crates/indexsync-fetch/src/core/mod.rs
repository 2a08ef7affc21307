//! Pure checks and arithmetic used by the fetcher and writer.
//!
//! Nothing in here touches the network or the filesystem.

mod progress;
mod validation;

pub use progress::{megabytes, parse_content_length, percentage};
pub use validation::{ensure_json_extension, has_json_extension, is_success};
