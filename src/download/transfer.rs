//! Streaming media bytes to disk.

use std::fmt::Display;
use std::path::Path;

use futures::{Stream, StreamExt};
use indicatif::ProgressBar;
use reqwest::Response;
use tokio::fs::{self, File};
use tokio::io::AsyncWriteExt;

use crate::error::{Error, Result};
use crate::fs::partial_path;
use crate::output::create_download_bar;

/// Write an HTTP response body to `path`.
pub async fn write_response(response: Response, path: &Path, show_progress: bool) -> Result<()> {
    let progress = show_progress.then(|| create_download_bar(response.content_length().unwrap_or(0)));

    let result = write_stream(response.bytes_stream(), path, progress.as_ref()).await;

    if let Some(pb) = progress {
        pb.finish_and_clear();
    }

    let written = result?;
    tracing::debug!("Wrote {} bytes to {}", written, path.display());
    Ok(())
}

/// Stream chunks into `path`, going through a `.part` sibling.
///
/// The partial file is renamed into place only once every chunk has been
/// written, and removed if the stream fails.
pub async fn write_stream<S, B, E>(
    stream: S,
    path: &Path,
    progress: Option<&ProgressBar>,
) -> Result<u64>
where
    S: Stream<Item = std::result::Result<B, E>>,
    B: AsRef<[u8]>,
    E: Display,
{
    let partial = partial_path(path);

    match copy_stream(stream, &partial, progress).await {
        Ok(written) => match fs::rename(&partial, path).await {
            Ok(()) => Ok(written),
            Err(e) => {
                let _ = fs::remove_file(&partial).await;
                Err(e.into())
            }
        },
        Err(e) => {
            let _ = fs::remove_file(&partial).await;
            Err(e)
        }
    }
}

async fn copy_stream<S, B, E>(stream: S, path: &Path, progress: Option<&ProgressBar>) -> Result<u64>
where
    S: Stream<Item = std::result::Result<B, E>>,
    B: AsRef<[u8]>,
    E: Display,
{
    let mut file = File::create(path).await?;
    let mut stream = std::pin::pin!(stream);
    let mut downloaded: u64 = 0;

    while let Some(chunk) = stream.next().await {
        let chunk = chunk.map_err(|e| Error::Download(format!("Stream error: {}", e)))?;
        let bytes = chunk.as_ref();
        file.write_all(bytes).await?;
        downloaded += bytes.len() as u64;

        if let Some(pb) = progress {
            pb.set_position(downloaded);
        }
    }

    file.flush().await?;

    Ok(downloaded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::stream;

    #[tokio::test]
    async fn test_write_stream_renames_into_place() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("alice_123.png");

        let chunks = vec![Ok::<_, String>(b"abc".to_vec()), Ok(b"def".to_vec())];
        let written = write_stream(stream::iter(chunks), &path, None).await.unwrap();

        assert_eq!(written, 6);
        assert_eq!(std::fs::read(&path).unwrap(), b"abcdef");
        assert!(!partial_path(&path).exists());
    }

    #[tokio::test]
    async fn test_failed_stream_leaves_nothing_behind() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bob_456.mp4");

        let chunks = vec![Ok(b"abc".to_vec()), Err("connection reset".to_string())];
        let err = write_stream(stream::iter(chunks), &path, None)
            .await
            .unwrap_err();

        assert!(matches!(err, Error::Download(_)));
        assert!(!path.exists());
        assert!(!partial_path(&path).exists());
    }

    #[tokio::test]
    async fn test_failed_rename_removes_partial() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("alice_123.png");
        std::fs::create_dir(&path).unwrap();
        std::fs::write(path.join("occupied"), b"x").unwrap();

        let chunks = vec![Ok::<_, String>(b"abc".to_vec())];
        let err = write_stream(stream::iter(chunks), &path, None)
            .await
            .unwrap_err();

        assert!(matches!(err, Error::Io(_)));
        assert!(!partial_path(&path).exists());
    }
}
