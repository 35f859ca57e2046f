//! Post provider module.
//!
//! This module provides:
//! - The `PostProvider` seam the downloader talks to
//! - An HTTP client for Instagram's public GraphQL endpoint
//! - GraphQL response types

pub mod client;
pub mod types;

use std::path::Path;

use async_trait::async_trait;

use crate::error::Result;
use crate::post::PostMetadata;

pub use client::{parse_post_response, InstagramApi};

/// Source of post metadata and media bytes.
#[async_trait]
pub trait PostProvider: Send + Sync {
    /// Fetch metadata for the post with the given shortcode.
    async fn fetch_post(&self, shortcode: &str) -> Result<PostMetadata>;

    /// Write the post's media to `target`.
    async fn download_post(&self, post: &PostMetadata, target: &Path) -> Result<()>;
}
