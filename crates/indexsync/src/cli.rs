use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use indexsync_fetch::{ClientSettings, Url};

#[derive(Clone, Debug, Parser)]
#[command(
    name = "indexsync",
    version = env!("CARGO_PKG_VERSION"),
    about = "Fetch a JSON index over HTTP and save it to a file",
    long_about = None
)]
pub struct Cli {
    /// URL to fetch the index from
    #[arg(long)]
    pub url: String,

    /// File to save the index to; must end in `.json`
    #[arg(long)]
    pub output: PathBuf,

    /// Proxy to route the request through (repeatable)
    #[arg(long = "proxy", value_name = "URL")]
    pub proxies: Vec<Url>,

    /// Seconds to wait for the connection to be established
    #[arg(long, value_name = "SECONDS")]
    pub connect_timeout: Option<u64>,
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn client_settings(&self) -> ClientSettings {
        let mut settings = ClientSettings::default();
        for proxy in &self.proxies {
            settings = settings.proxy(proxy.clone());
        }
        if let Some(secs) = self.connect_timeout {
            settings = settings.connect_timeout(Duration::from_secs(secs));
        }
        settings
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_url_and_output() {
        let cli = Cli::try_parse_from([
            "indexsync",
            "--url",
            "http://localhost:8000/",
            "--output",
            "blogs.json",
        ])
        .unwrap();

        assert_eq!(cli.url, "http://localhost:8000/");
        assert_eq!(cli.output, PathBuf::from("blogs.json"));
        assert!(cli.proxies.is_empty());
        assert!(cli.connect_timeout.is_none());

        let settings = cli.client_settings();
        assert!(settings.proxies.is_none());
        assert!(settings.connect_timeout.is_none());
    }

    #[test]
    fn test_requires_both_flags() {
        assert!(Cli::try_parse_from(["indexsync", "--url", "http://localhost/"]).is_err());
        assert!(Cli::try_parse_from(["indexsync", "--output", "blogs.json"]).is_err());
    }

    #[test]
    fn test_transport_settings() {
        let cli = Cli::try_parse_from([
            "indexsync",
            "--url",
            "http://localhost/",
            "--output",
            "blogs.json",
            "--proxy",
            "http://127.0.0.1:3128",
            "--proxy",
            "http://127.0.0.1:3129",
            "--connect-timeout",
            "10",
        ])
        .unwrap();

        let settings = cli.client_settings();
        assert_eq!(settings.proxies.map(|p| p.len()), Some(2));
        assert_eq!(settings.connect_timeout, Some(Duration::from_secs(10)));
    }

    #[test]
    fn test_rejects_malformed_proxy() {
        let result = Cli::try_parse_from([
            "indexsync",
            "--url",
            "http://localhost/",
            "--output",
            "blogs.json",
            "--proxy",
            "not a url",
        ]);
        assert!(result.is_err());
    }
}
