//! In-memory providers for tests.

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::api::PostProvider;
use crate::error::{Error, Result};
use crate::media::{audio_path_for, AudioExtractor, AudioFormat};
use crate::post::PostMetadata;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Transfer {
    Write,
    Fail,
    Nothing,
}

/// Serves one post and writes placeholder bytes on download.
pub struct FakeProvider {
    post: PostMetadata,
    transfer: Transfer,
    fetched: Mutex<Vec<String>>,
    downloaded: Mutex<Vec<PathBuf>>,
}

impl FakeProvider {
    pub fn with_post(author: &str, post_id: &str, type_tag: &str) -> Self {
        Self {
            post: PostMetadata::new(author, post_id, type_tag),
            transfer: Transfer::Write,
            fetched: Mutex::new(Vec::new()),
            downloaded: Mutex::new(Vec::new()),
        }
    }

    pub fn failing_download(mut self) -> Self {
        self.transfer = Transfer::Fail;
        self
    }

    pub fn writing_nothing(mut self) -> Self {
        self.transfer = Transfer::Nothing;
        self
    }

    pub fn fetched_codes(&self) -> Vec<String> {
        self.fetched.lock().unwrap().clone()
    }

    pub fn downloaded_paths(&self) -> Vec<PathBuf> {
        self.downloaded.lock().unwrap().clone()
    }
}

#[async_trait]
impl PostProvider for FakeProvider {
    async fn fetch_post(&self, shortcode: &str) -> Result<PostMetadata> {
        self.fetched.lock().unwrap().push(shortcode.to_string());
        let mut post = self.post.clone();
        post.shortcode = shortcode.to_string();
        Ok(post)
    }

    async fn download_post(&self, _post: &PostMetadata, target: &Path) -> Result<()> {
        self.downloaded.lock().unwrap().push(target.to_path_buf());
        match self.transfer {
            Transfer::Write => {
                tokio::fs::write(target, b"media bytes").await?;
                Ok(())
            }
            Transfer::Fail => Err(Error::Download("connection reset".to_string())),
            Transfer::Nothing => Ok(()),
        }
    }
}

/// Writes an empty audio file next to the video.
#[derive(Default)]
pub struct FakeExtractor {
    fail: bool,
}

impl FakeExtractor {
    pub fn failing() -> Self {
        Self { fail: true }
    }
}

#[async_trait]
impl AudioExtractor for FakeExtractor {
    async fn extract_audio(
        &self,
        video: &Path,
        format: AudioFormat,
        delete_video: bool,
    ) -> Result<PathBuf> {
        if self.fail {
            return Err(Error::AudioExtraction("no audio stream".to_string()));
        }

        let output = audio_path_for(video, format);
        tokio::fs::write(&output, b"audio bytes").await?;
        if delete_video {
            tokio::fs::remove_file(video).await?;
        }
        Ok(output)
    }
}
