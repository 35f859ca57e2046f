//! Media kind classification.

use std::fmt;

use crate::error::{Error, Result};

/// Primary content of a post.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    Video,
}

impl MediaKind {
    /// Classify a provider type tag.
    ///
    /// Both the legacy (`GraphImage`) and current (`XDTGraphImage`) tag names
    /// are accepted. Carousels (`GraphSidecar`) and anything else are rejected.
    pub fn from_type_tag(tag: &str) -> Result<Self> {
        match tag.strip_prefix("XDT").unwrap_or(tag) {
            "GraphImage" => Ok(MediaKind::Image),
            "GraphVideo" => Ok(MediaKind::Video),
            _ => Err(Error::UnsupportedMediaType(tag.to_string())),
        }
    }

    /// File extension a download of this kind is written with.
    pub fn extension(&self) -> &'static str {
        match self {
            MediaKind::Image => "png",
            MediaKind::Video => "mp4",
        }
    }

    pub fn is_video(&self) -> bool {
        matches!(self, MediaKind::Video)
    }
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MediaKind::Image => write!(f, "image"),
            MediaKind::Video => write!(f, "video"),
        }
    }
}
