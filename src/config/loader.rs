//! Configuration structures and loading logic.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::fs::default_download_dir;
use crate::media::AudioFormat;

/// Main configuration structure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub options: OptionsConfig,

    #[serde(default)]
    pub instagram: InstagramConfig,

    #[serde(default)]
    pub ffmpeg: FfmpegConfig,
}

/// Download options configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct OptionsConfig {
    /// Directory downloads land in. Empty means the platform download folder.
    #[serde(default)]
    pub download_directory: Option<PathBuf>,

    /// Audio format preselected for audio-only downloads.
    #[serde(default)]
    pub audio_format: AudioFormat,

    /// Whether to keep the video after extracting its audio.
    #[serde(default)]
    pub keep_video: bool,

    /// Whether to show download progress.
    #[serde(default = "default_true")]
    pub show_progress: bool,
}

impl Default for OptionsConfig {
    fn default() -> Self {
        Self {
            download_directory: None,
            audio_format: AudioFormat::default(),
            keep_video: false,
            show_progress: true,
        }
    }
}

/// Instagram endpoint configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct InstagramConfig {
    /// Browser user agent string.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Web application ID sent as `X-IG-App-ID`.
    #[serde(default = "default_app_id")]
    pub app_id: String,

    /// Persisted GraphQL query document ID for post lookups.
    #[serde(default = "default_doc_id")]
    pub doc_id: String,

    /// GraphQL query endpoint.
    #[serde(default = "default_graphql_url")]
    pub graphql_url: String,
}

impl Default for InstagramConfig {
    fn default() -> Self {
        Self {
            user_agent: default_user_agent(),
            app_id: default_app_id(),
            doc_id: default_doc_id(),
            graphql_url: default_graphql_url(),
        }
    }
}

/// External ffmpeg configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct FfmpegConfig {
    /// Path or name of the ffmpeg executable.
    #[serde(default = "default_ffmpeg_path")]
    pub path: PathBuf,
}

impl Default for FfmpegConfig {
    fn default() -> Self {
        Self {
            path: default_ffmpeg_path(),
        }
    }
}

fn default_user_agent() -> String {
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/125.0.0.0 Safari/537.36".to_string()
}

fn default_app_id() -> String {
    "936619743392459".to_string()
}

fn default_doc_id() -> String {
    "8845758582119845".to_string()
}

fn default_graphql_url() -> String {
    "https://www.instagram.com/graphql/query/".to_string()
}

fn default_ffmpeg_path() -> PathBuf {
    PathBuf::from("ffmpeg")
}

fn default_true() -> bool {
    true
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::Config(format!("Configuration file not found: {}", path.display()))
            } else {
                Error::Io(e)
            }
        })?;

        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Get the effective download directory.
    pub fn download_directory(&self) -> PathBuf {
        self.options
            .download_directory
            .clone()
            .filter(|dir| !dir.as_os_str().is_empty())
            .unwrap_or_else(default_download_dir)
    }
}
