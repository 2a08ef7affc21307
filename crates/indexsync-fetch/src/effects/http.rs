use std::future::Future;
use std::pin::Pin;

use bytes::Bytes;
use futures_util::Stream;

/// A boxed stream type for HTTP response bodies.
pub type BoxStream<'a, T> = Pin<Box<dyn Stream<Item = T> + Send + 'a>>;

/// Status line, declared length and body of an HTTP response.
///
/// The body has not been read when this is returned; dropping it closes the
/// connection.
pub struct HttpResponse<E> {
    pub status: u16,

    /// Parsed `Content-Length` header, `None` if absent or malformed.
    pub content_length: Option<u64>,

    pub body: BoxStream<'static, Result<Bytes, E>>,
}

/// Asynchronous HTTP client abstraction.
///
/// Implementations issue a plain GET and hand back the response without
/// judging its status; the [`Fetcher`](crate::Fetcher) decides what counts as
/// success.
///
/// # Implementations
///
/// - [`ReqwestClient`]: Production implementation using `reqwest`
/// - Mock implementations for testing
pub trait HttpClient: Send + Sync {
    /// Error type for transport failures.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Send a GET request for `url` and return once the response headers
    /// have arrived.
    ///
    /// # Errors
    ///
    /// Returns an error if no response could be obtained (DNS failure,
    /// refused connection, TLS failure, ...). HTTP error statuses are not
    /// errors at this level.
    fn get(
        &self,
        url: &str,
    ) -> impl Future<Output = Result<HttpResponse<Self::Error>, Self::Error>> + Send;
}

#[cfg(feature = "reqwest")]
mod reqwest_impl {
    use reqwest::header::CONTENT_LENGTH;

    use super::*;
    use crate::core::parse_content_length;
    use crate::effects::client::ClientSettings;
    use crate::error::Result;

    /// Production HTTP client implementation using reqwest.
    pub struct ReqwestClient {
        client: reqwest::Client,
    }

    impl ReqwestClient {
        /// Create a new ReqwestClient with default configuration.
        pub fn new() -> Result<Self> {
            Self::with_settings(ClientSettings::default())
        }

        pub fn with_settings(settings: ClientSettings) -> Result<Self> {
            Ok(Self {
                client: settings.build()?,
            })
        }
    }

    impl HttpClient for ReqwestClient {
        type Error = reqwest::Error;

        async fn get(
            &self,
            url: &str,
        ) -> std::result::Result<HttpResponse<Self::Error>, Self::Error> {
            let response = self.client.get(url).send().await?;

            let status = response.status().as_u16();
            let content_length = response
                .headers()
                .get(CONTENT_LENGTH)
                .and_then(|v| v.to_str().ok())
                .and_then(parse_content_length);

            Ok(HttpResponse {
                status,
                content_length,
                body: Box::pin(response.bytes_stream()),
            })
        }
    }
}

#[cfg(feature = "reqwest")]
pub use reqwest_impl::ReqwestClient;
