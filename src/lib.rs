//! InstaSaver - download public Instagram posts.
//!
//! This library resolves Instagram post URLs, downloads the post's image or
//! video and can reduce videos to their audio track.
//!
//! # Features
//!
//! - Post and reel URL validation
//! - Media kind detection (image vs video)
//! - `{author}_{post_id}.{ext}` file naming
//! - Audio-only downloads via ffmpeg (mp3 or wav)
//! - An interactive prompt shell built on an immutable form state machine
//!
//! # Example
//!
//! ```no_run
//! use instasaver::{Config, DownloadRequest, Downloader, FfmpegExtractor, InstagramApi};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::default();
//!     let api = InstagramApi::new(config.instagram.clone(), true)?;
//!     let downloader = Downloader::new(api, FfmpegExtractor::new(config.ffmpeg.path.clone()));
//!
//!     let outcome = downloader
//!         .download(&DownloadRequest::new("https://www.instagram.com/p/ABC123/"))
//!         .await?;
//!     println!("saved {}", outcome.path.display());
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod download;
pub mod error;
pub mod fs;
pub mod media;
pub mod output;
pub mod post;
pub mod shell;

#[cfg(test)]
pub(crate) mod testing;

// Re-exports for convenience
pub use api::{InstagramApi, PostProvider};
pub use config::Config;
pub use download::{DownloadOutcome, DownloadRequest, Downloader, ExtensionChoice};
pub use error::{Error, Result};
pub use media::{AudioExtractor, AudioFormat, FfmpegExtractor};
pub use post::{parse_post_code, MediaKind, PostMetadata};
pub use shell::{Shell, ShellEvent, ShellState};
