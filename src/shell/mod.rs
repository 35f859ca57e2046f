//! Interactive download shell.
//!
//! `state` holds the pure form state machine, `Shell` runs the operations
//! the form triggers, and `terminal` drives both from prompts.

pub mod state;
pub mod terminal;

use crate::api::PostProvider;
use crate::download::Downloader;
use crate::media::AudioExtractor;

pub use state::{Notice, Phase, ShellEvent, ShellState};
pub use terminal::run_interactive;

/// Performs the "Get post" and "Download" actions of the form.
pub struct Shell<P, A> {
    downloader: Downloader<P, A>,
    keep_video: bool,
}

impl<P: PostProvider, A: AudioExtractor> Shell<P, A> {
    pub fn new(downloader: Downloader<P, A>, keep_video: bool) -> Self {
        Self {
            downloader,
            keep_video,
        }
    }

    pub fn downloader(&self) -> &Downloader<P, A> {
        &self.downloader
    }

    /// Resolve the post behind the entered URL.
    pub async fn get_post(&self, state: ShellState) -> ShellState {
        if !state.can_get_post() {
            return state;
        }

        match self.downloader.resolve(state.url.trim()).await {
            Ok(resolved) => {
                tracing::debug!(
                    "Resolved {} post {} by {}",
                    resolved.kind,
                    resolved.post.post_id,
                    resolved.post.author
                );
                state.apply(ShellEvent::PostFetched(resolved))
            }
            Err(e) => {
                tracing::warn!("Failed to fetch post: {}", e);
                state.apply(ShellEvent::FetchFailed(e.to_string()))
            }
        }
    }

    /// Download the resolved post with the selected options.
    pub async fn download(&self, state: ShellState) -> ShellState {
        let Some(request) = state.download_request(self.keep_video) else {
            return state;
        };

        tracing::debug!("Download request: {:?}", request);

        match self.downloader.download(&request).await {
            Ok(outcome) => state.apply(ShellEvent::DownloadSucceeded(outcome.path)),
            Err(e) => {
                tracing::warn!("Download failed: {}", e);
                state.apply(ShellEvent::DownloadFailed(e.to_string()))
            }
        }
    }
}
