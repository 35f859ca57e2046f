//! Download requests, file naming and outcomes.

use std::path::PathBuf;

use crate::error::{Error, Result};
use crate::fs::post_file_name;
use crate::media::AudioFormat;
use crate::post::{MediaKind, PostMetadata};

/// How the extension of the downloaded file is chosen.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ExtensionChoice {
    /// From the post's media kind.
    #[default]
    Auto,
    /// Download the video, then keep only its audio.
    Audio(AudioFormat),
    /// Caller-supplied extension, used as is.
    Literal(String),
}

impl ExtensionChoice {
    /// Interpret a user-entered extension. Audio extensions select extraction.
    pub fn from_user(extension: Option<&str>) -> Self {
        match extension.map(str::trim).filter(|e| !e.is_empty()) {
            None => ExtensionChoice::Auto,
            Some(ext) => match ext.parse::<AudioFormat>() {
                Ok(format) => ExtensionChoice::Audio(format),
                Err(_) => ExtensionChoice::Literal(ext.trim_start_matches('.').to_string()),
            },
        }
    }
}

/// A single download to perform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadRequest {
    pub url: String,

    /// Target directory. Empty or missing means the platform download folder.
    pub directory: Option<PathBuf>,

    pub extension: ExtensionChoice,

    /// Keep the video after its audio has been extracted.
    pub keep_video: bool,
}

impl DownloadRequest {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            directory: None,
            extension: ExtensionChoice::Auto,
            keep_video: false,
        }
    }
}

/// File names a download goes through.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilePlan {
    /// Name the provider writes to.
    pub download_name: String,

    /// Name that must exist once everything has finished.
    pub final_name: String,

    /// Audio to extract, if any.
    pub audio: Option<AudioFormat>,
}

/// Derive the file names for `post` under the given extension choice.
pub fn plan_file_names(post: &PostMetadata, choice: &ExtensionChoice) -> Result<FilePlan> {
    let name = |ext: &str| post_file_name(&post.author, &post.post_id, ext);

    match choice {
        ExtensionChoice::Auto => {
            let file = name(post.media_kind()?.extension())?;
            Ok(FilePlan {
                download_name: file.clone(),
                final_name: file,
                audio: None,
            })
        }
        ExtensionChoice::Audio(format) => {
            if post.media_kind()? != MediaKind::Video {
                return Err(Error::UnsupportedMediaType(format!(
                    "{} (audio can only be extracted from videos)",
                    post.type_tag
                )));
            }
            Ok(FilePlan {
                download_name: name(MediaKind::Video.extension())?,
                final_name: name(format.extension())?,
                audio: Some(*format),
            })
        }
        ExtensionChoice::Literal(ext) => {
            let file = name(ext)?;
            Ok(FilePlan {
                download_name: file.clone(),
                final_name: file,
                audio: None,
            })
        }
    }
}

/// Result of a successful download.
#[derive(Debug, Clone)]
pub struct DownloadOutcome {
    pub post: PostMetadata,

    /// The file the user asked for.
    pub path: PathBuf,

    /// Intermediate video for audio downloads.
    pub video_path: Option<PathBuf>,

    /// Whether the intermediate video was removed.
    pub video_removed: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_default_name() {
        let post = PostMetadata::new("alice", "123", "GraphImage");
        let plan = plan_file_names(&post, &ExtensionChoice::Auto).unwrap();
        assert_eq!(plan.download_name, "alice_123.png");
        assert_eq!(plan.final_name, "alice_123.png");
        assert_eq!(plan.audio, None);
    }

    #[test]
    fn test_video_audio_names() {
        let post = PostMetadata::new("bob", "456", "GraphVideo");
        let plan = plan_file_names(&post, &ExtensionChoice::Audio(AudioFormat::Mp3)).unwrap();
        assert_eq!(plan.download_name, "bob_456.mp4");
        assert_eq!(plan.final_name, "bob_456.mp3");
        assert_eq!(plan.audio, Some(AudioFormat::Mp3));
    }

    #[test]
    fn test_literal_extension() {
        let post = PostMetadata::new("alice", "123", "GraphImage");
        let plan =
            plan_file_names(&post, &ExtensionChoice::Literal("jpg".to_string())).unwrap();
        assert_eq!(plan.final_name, "alice_123.jpg");
    }

    #[test]
    fn test_literal_extension_skips_classification() {
        let post = PostMetadata::new("carol", "789", "GraphSidecar");
        assert!(plan_file_names(&post, &ExtensionChoice::Literal("jpg".into())).is_ok());
        assert!(matches!(
            plan_file_names(&post, &ExtensionChoice::Auto),
            Err(Error::UnsupportedMediaType(_))
        ));
    }

    #[test]
    fn test_audio_from_image_rejected() {
        let post = PostMetadata::new("alice", "123", "GraphImage");
        assert!(matches!(
            plan_file_names(&post, &ExtensionChoice::Audio(AudioFormat::Wav)),
            Err(Error::UnsupportedMediaType(_))
        ));
    }

    #[test]
    fn test_extension_from_user() {
        assert_eq!(ExtensionChoice::from_user(None), ExtensionChoice::Auto);
        assert_eq!(ExtensionChoice::from_user(Some("  ")), ExtensionChoice::Auto);
        assert_eq!(
            ExtensionChoice::from_user(Some("wav")),
            ExtensionChoice::Audio(AudioFormat::Wav)
        );
        assert_eq!(
            ExtensionChoice::from_user(Some(".jpg")),
            ExtensionChoice::Literal("jpg".to_string())
        );
    }
}
