//! Error types for the instasaver application.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the application.
#[derive(Error, Debug)]
pub enum Error {
    // Link and post errors
    #[error("Invalid Instagram link: {0}")]
    InvalidLink(String),

    #[error("Unsupported media type: {0}")]
    UnsupportedMediaType(String),

    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid configuration value for '{field}': {message}")]
    ConfigValidation { field: String, message: String },

    // Provider errors
    #[error("API error: {0}")]
    Api(String),

    #[error("Post unavailable: {0}")]
    PostUnavailable(String),

    #[error("Rate limited, retry after {0} seconds")]
    RateLimited(u64),

    // Stage errors
    #[error("Download failed: {0}")]
    Download(String),

    #[error("Audio extraction failed: {0}")]
    AudioExtraction(String),

    #[error("FFmpeg not found. Please install ffmpeg and ensure it's in your PATH.")]
    FFmpegNotFound,

    #[error("Expected file was not written: {}", .0.display())]
    FileMissing(PathBuf),

    // File system errors
    #[error("Invalid filename: {0}")]
    InvalidFilename(String),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // HTTP errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    // Serialization errors
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    // Interactive prompt errors
    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::Config(_) | Error::ConfigValidation { .. } | Error::TomlParse(_) => {
                exit_codes::CONFIG_ERROR
            }
            Error::Api(_)
            | Error::PostUnavailable(_)
            | Error::RateLimited(_)
            | Error::Http(_) => exit_codes::API_ERROR,
            Error::Download(_)
            | Error::AudioExtraction(_)
            | Error::FFmpegNotFound
            | Error::FileMissing(_) => exit_codes::DOWNLOAD_ERROR,
            Error::InvalidLink(_) | Error::UnsupportedMediaType(_) => exit_codes::INPUT_ERROR,
            Error::Prompt(_) => exit_codes::ABORT,
            Error::InvalidFilename(_) | Error::Io(_) => exit_codes::UNEXPECTED_ERROR,
        }
    }
}

/// Process exit codes.
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const ABORT: i32 = 1;
    pub const API_ERROR: i32 = 2;
    pub const CONFIG_ERROR: i32 = 3;
    pub const DOWNLOAD_ERROR: i32 = 4;
    pub const INPUT_ERROR: i32 = 5;
    pub const UNEXPECTED_ERROR: i32 = 6;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_by_class() {
        assert_eq!(
            Error::InvalidLink("x".into()).exit_code(),
            exit_codes::INPUT_ERROR
        );
        assert_eq!(
            Error::AudioExtraction("x".into()).exit_code(),
            exit_codes::DOWNLOAD_ERROR
        );
        assert_eq!(
            Error::FileMissing(PathBuf::from("/tmp/a.mp3")).exit_code(),
            exit_codes::DOWNLOAD_ERROR
        );
        assert_eq!(Error::Config("x".into()).exit_code(), exit_codes::CONFIG_ERROR);
        assert_eq!(
            Error::PostUnavailable("x".into()).exit_code(),
            exit_codes::API_ERROR
        );
    }

    #[test]
    fn test_file_missing_message() {
        let err = Error::FileMissing(PathBuf::from("/tmp/alice_1.png"));
        assert_eq!(err.to_string(), "Expected file was not written: /tmp/alice_1.png");
    }
}
