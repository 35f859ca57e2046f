//! Post metadata as reported by a provider.

use chrono::{DateTime, Utc};

use crate::error::Result;
use crate::post::kind::MediaKind;

/// Attributes of a single post.
#[derive(Debug, Clone, PartialEq)]
pub struct PostMetadata {
    /// Owner's username.
    pub author: String,

    /// Numeric post identifier.
    pub post_id: String,

    /// Shortcode from the post URL.
    pub shortcode: String,

    /// Raw type tag (e.g. `XDTGraphVideo`).
    pub type_tag: String,

    /// Full resolution image URL.
    pub display_url: Option<String>,

    /// Video URL, present for video posts.
    pub video_url: Option<String>,

    pub caption: Option<String>,

    pub taken_at: Option<DateTime<Utc>>,
}

impl PostMetadata {
    pub fn new(
        author: impl Into<String>,
        post_id: impl Into<String>,
        type_tag: impl Into<String>,
    ) -> Self {
        Self {
            author: author.into(),
            post_id: post_id.into(),
            shortcode: String::new(),
            type_tag: type_tag.into(),
            display_url: None,
            video_url: None,
            caption: None,
            taken_at: None,
        }
    }

    /// Classify this post's media.
    pub fn media_kind(&self) -> Result<MediaKind> {
        MediaKind::from_type_tag(&self.type_tag)
    }

    /// URL of the file a download of this post should fetch.
    pub fn media_url(&self) -> Option<&str> {
        match self.media_kind() {
            Ok(MediaKind::Video) => self.video_url.as_deref(),
            Ok(MediaKind::Image) => self.display_url.as_deref(),
            Err(_) => None,
        }
    }

    /// Base file name without extension: `{author}_{post_id}`.
    pub fn file_stem(&self) -> String {
        format!("{}_{}", self.author, self.post_id)
    }
}
