//! Download orchestration: resolve, transfer, extract, verify.

use crate::api::PostProvider;
use crate::error::{Error, Result};
use crate::fs::{ensure_dir, resolve_directory};
use crate::media::AudioExtractor;
use crate::post::{parse_post_code, MediaKind, PostMetadata};

use super::request::{plan_file_names, DownloadOutcome, DownloadRequest};

/// A post together with its classified media kind.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedPost {
    pub post: PostMetadata,
    pub kind: MediaKind,
}

/// Downloads posts through a provider and an audio extractor.
pub struct Downloader<P, A> {
    provider: P,
    extractor: A,
}

impl<P: PostProvider, A: AudioExtractor> Downloader<P, A> {
    pub fn new(provider: P, extractor: A) -> Self {
        Self {
            provider,
            extractor,
        }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub fn extractor(&self) -> &A {
        &self.extractor
    }

    /// Fetch metadata for the post a URL points at.
    pub async fn fetch_post(&self, url: &str) -> Result<PostMetadata> {
        let code = parse_post_code(url)?;
        tracing::debug!("Fetching post {}", code);
        self.provider.fetch_post(&code).await
    }

    /// Fetch and classify the post a URL points at.
    pub async fn resolve(&self, url: &str) -> Result<ResolvedPost> {
        let post = self.fetch_post(url).await?;
        let kind = post.media_kind()?;
        Ok(ResolvedPost { post, kind })
    }

    /// File extension the post at `url` downloads as.
    pub async fn media_extension(&self, url: &str) -> Result<&'static str> {
        Ok(self.resolve(url).await?.kind.extension())
    }

    /// Download a post, extracting its audio when requested.
    pub async fn download(&self, request: &DownloadRequest) -> Result<DownloadOutcome> {
        let post = self.fetch_post(&request.url).await?;
        let plan = plan_file_names(&post, &request.extension)?;

        let directory = resolve_directory(request.directory.as_deref());
        ensure_dir(&directory).await?;

        let download_path = directory.join(&plan.download_name);
        tracing::info!(
            "Downloading {} to {}",
            plan.download_name,
            directory.display()
        );

        self.provider
            .download_post(&post, &download_path)
            .await
            .map_err(download_stage)?;

        if !download_path.exists() {
            return Err(Error::FileMissing(download_path));
        }

        let (video_path, video_removed) = match plan.audio {
            Some(format) => {
                tracing::info!("Extracting {} audio from {}", format, plan.download_name);
                self.extractor
                    .extract_audio(&download_path, format, !request.keep_video)
                    .await
                    .map_err(extraction_stage)?;
                let removed = !download_path.exists();
                (Some(download_path), removed)
            }
            None => (None, false),
        };

        let path = directory.join(&plan.final_name);
        if !path.exists() {
            return Err(Error::FileMissing(path));
        }

        tracing::info!("Downloaded: {}", path.display());

        Ok(DownloadOutcome {
            post,
            path,
            video_path,
            video_removed,
        })
    }
}

/// Attribute transport and filesystem failures to the download stage.
fn download_stage(err: Error) -> Error {
    match err {
        Error::Io(e) => Error::Download(e.to_string()),
        Error::Http(e) => Error::Download(e.to_string()),
        other => other,
    }
}

/// Attribute filesystem failures to the extraction stage.
fn extraction_stage(err: Error) -> Error {
    match err {
        Error::Io(e) => Error::AudioExtraction(e.to_string()),
        other => other,
    }
}
