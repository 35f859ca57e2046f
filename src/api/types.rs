//! GraphQL response type definitions.

use chrono::{DateTime, TimeZone, Utc};
use serde::Deserialize;

use crate::post::PostMetadata;

/// Top-level GraphQL query response.
#[derive(Debug, Deserialize)]
pub struct GraphqlResponse {
    #[serde(default)]
    pub data: Option<GraphqlData>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// `data` object of a shortcode query.
#[derive(Debug, Deserialize)]
pub struct GraphqlData {
    /// Null when the post is private, deleted or the request was blocked.
    #[serde(default, alias = "shortcode_media")]
    pub xdt_shortcode_media: Option<ShortcodeMedia>,
}

/// A post as returned by the shortcode query.
#[derive(Debug, Clone, Deserialize)]
pub struct ShortcodeMedia {
    #[serde(rename = "__typename")]
    pub typename: String,
    pub id: String,
    pub shortcode: String,
    pub owner: Owner,
    #[serde(default)]
    pub display_url: Option<String>,
    #[serde(default)]
    pub video_url: Option<String>,
    #[serde(default)]
    pub taken_at_timestamp: Option<i64>,
    #[serde(default)]
    pub edge_media_to_caption: Option<CaptionEdges>,
}

/// Post owner.
#[derive(Debug, Clone, Deserialize)]
pub struct Owner {
    pub username: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CaptionEdges {
    #[serde(default)]
    pub edges: Vec<CaptionEdge>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CaptionEdge {
    pub node: CaptionNode,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CaptionNode {
    pub text: String,
}

impl ShortcodeMedia {
    fn caption(&self) -> Option<String> {
        self.edge_media_to_caption
            .as_ref()
            .and_then(|c| c.edges.first())
            .map(|edge| edge.node.text.clone())
    }
}

impl From<ShortcodeMedia> for PostMetadata {
    fn from(media: ShortcodeMedia) -> Self {
        let caption = media.caption();
        let taken_at: Option<DateTime<Utc>> = media
            .taken_at_timestamp
            .and_then(|ts| Utc.timestamp_opt(ts, 0).single());

        PostMetadata {
            author: media.owner.username,
            post_id: media.id,
            shortcode: media.shortcode,
            type_tag: media.typename,
            display_url: media.display_url,
            video_url: media.video_url,
            caption,
            taken_at,
        }
    }
}
