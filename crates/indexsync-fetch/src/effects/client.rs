use std::time::Duration;

use reqwest::{Client, Proxy, Url};

use crate::error::{FetchError, Result};

/// Transport settings for [`ReqwestClient`](crate::ReqwestClient).
///
/// These shape how the connection is made, never what is requested: no
/// headers or credentials are added to the request.
#[derive(Clone, Debug, Default)]
pub struct ClientSettings {
    pub proxies: Option<Vec<Url>>,
    pub connect_timeout: Option<Duration>,
}

impl ClientSettings {
    /// Route requests through `proxy`. May be called repeatedly.
    #[must_use]
    pub fn proxy(mut self, proxy: Url) -> Self {
        self.proxies.get_or_insert_with(Vec::new).push(proxy);
        self
    }

    #[must_use]
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    /// Proxies split by scheme: `https` proxies carry HTTPS requests, all
    /// others carry plain HTTP requests.
    pub fn proxy_routes(&self) -> (Vec<Url>, Vec<Url>) {
        self.proxies
            .iter()
            .flatten()
            .cloned()
            .partition(|u| u.scheme() == "https")
    }

    pub fn build(self) -> Result<Client> {
        let mut cb = Client::builder();

        let (secure, insecure) = self.proxy_routes();
        for url in secure {
            cb = cb.proxy(Proxy::https(url).map_err(client_error)?);
        }
        for url in insecure {
            cb = cb.proxy(Proxy::http(url).map_err(client_error)?);
        }

        if let Some(timeout) = self.connect_timeout {
            cb = cb.connect_timeout(timeout);
        }

        cb.build().map_err(client_error)
    }
}

fn client_error(err: reqwest::Error) -> FetchError {
    FetchError::Client(err.to_string())
}
