//! I/O: the HTTP client seam, the lazy chunk stream and the file writer.

mod fetcher;
mod http;
mod report;
mod writer;

#[cfg(feature = "reqwest")]
mod client;

pub use fetcher::{ChunkStream, Fetcher};
pub use http::{BoxStream, HttpClient, HttpResponse};
pub use report::log_progress;
pub use writer::{write_chunks, write_json};

#[cfg(feature = "reqwest")]
pub use client::ClientSettings;
#[cfg(feature = "reqwest")]
pub use http::ReqwestClient;

#[cfg(test)]
pub(crate) use http::mock;
