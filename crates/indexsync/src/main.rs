mod cli;
mod logging;

use std::sync::Arc;

use anyhow::{Context, Result};
use indexsync_fetch::{FetchOptions, Fetcher, ReqwestClient, log_progress};

#[tokio::main]
async fn main() -> Result<()> {
    logging::init();

    let args = cli::Cli::parse_args();
    tracing::debug!(?args, "starting");

    let client = ReqwestClient::with_settings(args.client_settings())
        .context("Failed to set up HTTP client")?;
    let fetcher =
        Fetcher::new(client).with_options(FetchOptions::default().on_progress(Arc::new(log_progress)));

    let written = indexsync_fetch::sync(&fetcher, &args.url, &args.output)
        .await
        .with_context(|| {
            format!(
                "Failed to save {} to {}",
                args.url,
                args.output.display()
            )
        })?;

    tracing::debug!(bytes = written, path = %args.output.display(), "saved");
    Ok(())
}
