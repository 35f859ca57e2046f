//! Instagram HTTP client.

use std::path::Path;

use async_trait::async_trait;
use reqwest::{header, Client, Response};

use crate::api::types::GraphqlResponse;
use crate::api::PostProvider;
use crate::config::InstagramConfig;
use crate::download::transfer::write_response;
use crate::error::{Error, Result};
use crate::post::PostMetadata;

/// Instagram public GraphQL client.
pub struct InstagramApi {
    client: Client,
    config: InstagramConfig,
    show_progress: bool,
}

impl InstagramApi {
    /// Create a new API client.
    pub fn new(config: InstagramConfig, show_progress: bool) -> Result<Self> {
        let client = Client::builder()
            .user_agent(&config.user_agent)
            .cookie_store(true)
            .build()
            .map_err(|e| Error::Api(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            config,
            show_progress,
        })
    }

    /// Build common headers for GraphQL requests.
    fn build_headers(&self) -> Result<header::HeaderMap> {
        let mut headers = header::HeaderMap::new();

        let app_id = header::HeaderValue::from_str(&self.config.app_id)
            .map_err(|e| Error::Api(format!("Invalid app ID header: {}", e)))?;

        headers.insert(header::ACCEPT, header::HeaderValue::from_static("*/*"));
        headers.insert(
            header::ORIGIN,
            header::HeaderValue::from_static("https://www.instagram.com"),
        );
        headers.insert(
            header::REFERER,
            header::HeaderValue::from_static("https://www.instagram.com/"),
        );
        headers.insert("x-ig-app-id", app_id);

        Ok(headers)
    }

    /// Query post metadata by shortcode.
    pub async fn get_post(&self, shortcode: &str) -> Result<PostMetadata> {
        let variables = serde_json::json!({ "shortcode": shortcode }).to_string();
        let form = [
            ("doc_id", self.config.doc_id.as_str()),
            ("variables", variables.as_str()),
            ("server_timestamps", "true"),
        ];

        tracing::debug!("POST {} for {}", self.config.graphql_url, shortcode);

        let response = self
            .client
            .post(&self.config.graphql_url)
            .headers(self.build_headers()?)
            .form(&form)
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("Response status: {}", status);

        if status == 429 {
            return Err(Error::RateLimited(60));
        }

        if status == 401 || status == 403 {
            return Err(Error::PostUnavailable(format!(
                "{} requires login (HTTP {})",
                shortcode, status
            )));
        }

        if !status.is_success() {
            return Err(Error::Api(format!(
                "Post lookup failed: HTTP {}",
                status
            )));
        }

        let text = response.text().await?;
        parse_post_response(&text, shortcode)
    }

    /// Start a download of a media URL.
    pub async fn download_file(&self, url: &str) -> Result<Response> {
        let response = self
            .client
            .get(url)
            .header(header::REFERER, "https://www.instagram.com/")
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Error::Download(format!(
                "Failed to download file: HTTP {}",
                response.status()
            )));
        }

        Ok(response)
    }
}

#[async_trait]
impl PostProvider for InstagramApi {
    async fn fetch_post(&self, shortcode: &str) -> Result<PostMetadata> {
        self.get_post(shortcode).await
    }

    async fn download_post(&self, post: &PostMetadata, target: &Path) -> Result<()> {
        let url = post.media_url().ok_or_else(|| {
            Error::Download(format!("Post {} has no downloadable media", post.post_id))
        })?;

        let response = self
            .download_file(url)
            .await
            .map_err(|e| match e {
                Error::Http(err) => Error::Download(err.to_string()),
                other => other,
            })?;

        write_response(response, target, self.show_progress).await
    }
}

/// Parse a shortcode query response body.
pub fn parse_post_response(text: &str, shortcode: &str) -> Result<PostMetadata> {
    if text.contains("require_login") || text.contains("not-logged-in") {
        return Err(Error::PostUnavailable(format!(
            "{} requires login",
            shortcode
        )));
    }

    let response: GraphqlResponse = serde_json::from_str(text).map_err(|e| {
        Error::Api(format!(
            "Failed to parse post: {} - Response: {}",
            e,
            text.chars().take(500).collect::<String>()
        ))
    })?;

    if response.status.as_deref() == Some("fail") {
        return Err(Error::Api(
            response
                .message
                .unwrap_or_else(|| "Post lookup failed".to_string()),
        ));
    }

    let media = response
        .data
        .and_then(|d| d.xdt_shortcode_media)
        .ok_or_else(|| {
            Error::PostUnavailable(format!("{} is private, deleted or blocked", shortcode))
        })?;

    Ok(media.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIDEO_RESPONSE: &str = r#"{
        "data": {
            "xdt_shortcode_media": {
                "__typename": "XDTGraphVideo",
                "id": "3012345678901234567",
                "shortcode": "XYZ",
                "owner": {"id": "42", "username": "bob"},
                "display_url": "https://scontent.cdninstagram.com/v/thumb.jpg",
                "video_url": "https://scontent.cdninstagram.com/v/clip.mp4",
                "is_video": true,
                "taken_at_timestamp": 1700000000,
                "edge_media_to_caption": {"edges": [{"node": {"text": "sunset"}}]}
            }
        },
        "extensions": {"is_final": true},
        "status": "ok"
    }"#;

    #[test]
    fn test_parse_video_post() {
        let post = parse_post_response(VIDEO_RESPONSE, "XYZ").unwrap();
        assert_eq!(post.author, "bob");
        assert_eq!(post.post_id, "3012345678901234567");
        assert_eq!(post.shortcode, "XYZ");
        assert_eq!(post.type_tag, "XDTGraphVideo");
        assert_eq!(post.caption.as_deref(), Some("sunset"));
        assert_eq!(post.taken_at.map(|t| t.timestamp()), Some(1700000000));
        assert_eq!(
            post.media_url(),
            Some("https://scontent.cdninstagram.com/v/clip.mp4")
        );
    }

    #[test]
    fn test_parse_legacy_image_post() {
        let body = r#"{"data": {"shortcode_media": {
            "__typename": "GraphImage",
            "id": "123",
            "shortcode": "ABC123",
            "owner": {"username": "alice"},
            "display_url": "https://scontent.cdninstagram.com/v/pic.jpg"
        }}, "status": "ok"}"#;

        let post = parse_post_response(body, "ABC123").unwrap();
        assert_eq!(post.author, "alice");
        assert_eq!(post.file_stem(), "alice_123");
        assert!(post.caption.is_none());
    }

    #[test]
    fn test_null_media_is_unavailable() {
        let body = r#"{"data": {"xdt_shortcode_media": null}, "status": "ok"}"#;
        assert!(matches!(
            parse_post_response(body, "XYZ"),
            Err(Error::PostUnavailable(_))
        ));
    }

    #[test]
    fn test_login_wall() {
        let body = r#"{"message": "require_login", "status": "fail"}"#;
        assert!(matches!(
            parse_post_response(body, "XYZ"),
            Err(Error::PostUnavailable(_))
        ));
    }

    #[test]
    fn test_failure_status() {
        let body = r#"{"message": "Please wait a few minutes", "status": "fail"}"#;
        match parse_post_response(body, "XYZ") {
            Err(Error::Api(msg)) => assert_eq!(msg, "Please wait a few minutes"),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_long_non_ascii_body() {
        let body = format!("<html>{}é</html>", "a".repeat(493));
        match parse_post_response(&body, "XYZ") {
            Err(Error::Api(msg)) => assert!(msg.contains("<html>aaa")),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_download_post_without_media_url() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("bob_456.mp4");
        let api = InstagramApi::new(InstagramConfig::default(), false).unwrap();
        let post = PostMetadata::new("bob", "456", "XDTGraphVideo");

        let err = api.download_post(&post, &target).await.unwrap_err();

        assert!(matches!(err, Error::Download(_)));
        assert!(!target.exists());
    }

    #[test]
    fn test_garbage_body() {
        assert!(matches!(
            parse_post_response("<html>", "XYZ"),
            Err(Error::Api(_))
        ));
    }
}
