//! Post URL validation and shortcode extraction.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::{Error, Result};

/// Host segment every post link must carry.
pub const INSTAGRAM_HOST: &str = "www.instagram.com";

static SHORTCODE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").expect("shortcode pattern is valid"));

/// Kind of post a link points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    /// `/p/{code}` links (images and videos).
    Post,
    /// `/reel/{code}` links.
    Reel,
}

impl LinkKind {
    fn from_segment(segment: &str) -> Option<Self> {
        match segment {
            "p" => Some(LinkKind::Post),
            "reel" => Some(LinkKind::Reel),
            _ => None,
        }
    }
}

impl fmt::Display for LinkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LinkKind::Post => write!(f, "p"),
            LinkKind::Reel => write!(f, "reel"),
        }
    }
}

/// A validated post link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostLink {
    pub kind: LinkKind,
    pub code: String,
}

/// Parse a post URL into its kind and shortcode.
///
/// The URL is split on `/` with empty segments dropped, so
/// `https://www.instagram.com/p/ABC123/` yields
/// `["https:", "www.instagram.com", "p", "ABC123"]`. Segment two must be the
/// Instagram host and segment three must be `p` or `reel`.
pub fn parse_post_link(url: &str) -> Result<PostLink> {
    let url = url.trim();
    let segments: Vec<&str> = url.split('/').filter(|s| !s.is_empty()).collect();

    match segments.get(1) {
        Some(&INSTAGRAM_HOST) => {}
        _ => {
            return Err(Error::InvalidLink(format!(
                "'{}' is not an Instagram link",
                url
            )))
        }
    }

    let kind = segments
        .get(2)
        .and_then(|s| LinkKind::from_segment(s))
        .ok_or_else(|| Error::InvalidLink(format!("'{}' does not point at a post or reel", url)))?;

    // Anything glued onto the code (query string, fragment) is not part of it
    let code = segments
        .get(3)
        .map(|s| s.split(['?', '#']).next().unwrap_or_default())
        .unwrap_or_default();

    if code.is_empty() {
        return Err(Error::InvalidLink(format!("'{}' has no post code", url)));
    }

    if !SHORTCODE_PATTERN.is_match(code) {
        return Err(Error::InvalidLink(format!(
            "'{}' is not a valid post code",
            code
        )));
    }

    tracing::debug!("URL is valid, post code: {}", code);

    Ok(PostLink {
        kind,
        code: code.to_string(),
    })
}

/// Extract only the shortcode from a post URL.
pub fn parse_post_code(url: &str) -> Result<String> {
    parse_post_link(url).map(|link| link.code)
}
