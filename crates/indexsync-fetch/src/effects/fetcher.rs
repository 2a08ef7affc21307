use bytes::Bytes;
use futures_util::{StreamExt, stream};

use crate::core::is_success;
use crate::data::{FetchOptions, FetchPhase, Progress};
use crate::effects::http::{BoxStream, HttpClient};
use crate::error::{FetchError, Result};

/// Lazy, single-pass stream of response body chunks in arrival order.
pub type ChunkStream<'a> = BoxStream<'a, Result<Bytes>>;

/// Turns a URL into a [`ChunkStream`], reporting progress as chunks arrive.
pub struct Fetcher<C: HttpClient> {
    client: C,
    options: FetchOptions,
}

enum State<E> {
    Pending {
        url: String,
    },
    Streaming {
        url: String,
        body: BoxStream<'static, std::result::Result<Bytes, E>>,
        progress: Progress,
    },
}

impl<C: HttpClient> Fetcher<C> {
    pub fn new(client: C) -> Self {
        Self {
            client,
            options: FetchOptions::default(),
        }
    }

    pub fn with_options(mut self, options: FetchOptions) -> Self {
        self.options = options;
        self
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    /// Stream the body of `url`.
    ///
    /// Nothing is sent until the stream is first polled. Each poll reads at
    /// most one chunk from the network, so the download never runs ahead of
    /// the consumer. A non-2xx status ends the stream with
    /// [`FetchError::HttpStatus`] before any chunk is yielded, and the stream
    /// yields nothing after its first error.
    ///
    /// Dropping the stream early closes the connection.
    pub fn chunks<'a>(&'a self, url: &str) -> ChunkStream<'a> {
        let state = State::Pending {
            url: url.to_owned(),
        };
        Box::pin(stream::try_unfold(state, move |state| self.advance(state)))
    }

    async fn advance(
        &self,
        state: State<C::Error>,
    ) -> Result<Option<(Bytes, State<C::Error>)>> {
        let (url, mut body, mut progress) = match state {
            State::Pending { url } => {
                let (body, progress) = self.connect(&url).await?;
                (url, body, progress)
            }
            State::Streaming {
                url,
                body,
                progress,
            } => (url, body, progress),
        };

        match body.next().await {
            Some(Ok(chunk)) => {
                progress.phase = FetchPhase::Downloading;
                progress.bytes_downloaded += chunk.len() as u64;
                self.report(&progress);
                Ok(Some((
                    chunk,
                    State::Streaming {
                        url,
                        body,
                        progress,
                    },
                )))
            }
            Some(Err(e)) => {
                tracing::debug!(
                    %url,
                    bytes_downloaded = progress.bytes_downloaded,
                    "response body failed: {e}"
                );
                Err(FetchError::network(e))
            }
            None => {
                progress.phase = FetchPhase::Completed;
                self.report(&progress);
                Ok(None)
            }
        }
    }

    async fn connect(
        &self,
        url: &str,
    ) -> Result<(BoxStream<'static, std::result::Result<Bytes, C::Error>>, Progress)> {
        tracing::debug!(url, "sending GET request");
        let response = self.client.get(url).await.map_err(FetchError::network)?;

        tracing::debug!(
            url,
            status = response.status,
            content_length = ?response.content_length,
            "received response headers"
        );
        if !is_success(response.status) {
            return Err(FetchError::HttpStatus {
                status: response.status,
                url: url.to_owned(),
            });
        }

        let progress = Progress::connected(response.content_length);
        self.report(&progress);
        Ok((response.body, progress))
    }

    fn report(&self, progress: &Progress) {
        if let Some(ref callback) = self.options.on_progress {
            callback(progress);
        }
    }
}
