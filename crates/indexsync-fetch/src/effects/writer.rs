use std::path::Path;
use std::pin::pin;

use bytes::Bytes;
use futures_util::{Stream, TryStreamExt};
use tokio::fs::File;
use tokio::io::{AsyncWrite, AsyncWriteExt};

use crate::core::ensure_json_extension;
use crate::error::Result;

/// Persist a chunk stream to `path`, returning the number of bytes written.
///
/// The extension is checked before the stream is polled, so a bad path fails
/// without any network activity. The first chunk is pulled before the file is
/// created: a request rejected outright leaves nothing on disk, while an
/// empty body still produces an empty file. Existing files are truncated.
///
/// Errors from the stream or the disk are returned as-is and whatever was
/// written up to that point stays on disk.
pub async fn write_json<S>(chunks: S, path: &Path) -> Result<u64>
where
    S: Stream<Item = Result<Bytes>>,
{
    ensure_json_extension(path)?;

    let mut chunks = pin!(chunks);
    let first = chunks.try_next().await?;

    let mut file = File::create(path).await?;
    tracing::debug!(path = %path.display(), "opened output file");

    let mut written = 0u64;
    if let Some(chunk) = first {
        file.write_all(&chunk).await?;
        written += chunk.len() as u64;
    }
    let drained = write_chunks(chunks, &mut file).await;
    // In-flight writes must land before an error is reported.
    let flushed = file.flush().await;
    written += drained?;
    flushed?;

    file.sync_all().await?;
    tracing::debug!(path = %path.display(), bytes = written, "output file written");

    Ok(written)
}

/// Drain `chunks` into `writer`, one `write_all` per chunk, in order.
pub async fn write_chunks<S, W>(chunks: S, writer: &mut W) -> Result<u64>
where
    S: Stream<Item = Result<Bytes>>,
    W: AsyncWrite + Unpin,
{
    let mut chunks = pin!(chunks);
    let mut written = 0u64;

    while let Some(chunk) = chunks.try_next().await? {
        writer.write_all(&chunk).await?;
        written += chunk.len() as u64;
    }
    writer.flush().await?;

    Ok(written)
}
