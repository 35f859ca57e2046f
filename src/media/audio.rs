//! Audio track extraction.

use std::path::{Path, PathBuf};
use std::process::Stdio;

use async_trait::async_trait;
use tokio::fs;
use tokio::process::Command;

use crate::error::{Error, Result};
use crate::media::format::AudioFormat;

/// Something that can pull the audio track out of a video file.
#[async_trait]
pub trait AudioExtractor: Send + Sync {
    /// Write the audio of `video` to a sibling file with `format`'s extension.
    ///
    /// The video is removed afterwards when `delete_video` is set. Returns
    /// the path of the audio file.
    async fn extract_audio(
        &self,
        video: &Path,
        format: AudioFormat,
        delete_video: bool,
    ) -> Result<PathBuf>;
}

/// Path of the audio file extracted from `video`.
pub fn audio_path_for(video: &Path, format: AudioFormat) -> PathBuf {
    video.with_extension(format.extension())
}

/// Extracts audio by running the ffmpeg executable.
#[derive(Debug, Clone)]
pub struct FfmpegExtractor {
    program: PathBuf,
}

impl FfmpegExtractor {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    fn build_args(video: &Path, output: &Path, format: AudioFormat) -> Vec<String> {
        let mut args: Vec<String> = ["-y", "-hide_banner", "-loglevel", "error", "-i"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        args.push(path_arg(video));
        args.push("-vn".to_string());
        args.extend(format.codec_args().iter().map(|s| s.to_string()));
        args.push(path_arg(output));
        args
    }
}

/// Render a path so ffmpeg never mistakes it for an option.
fn path_arg(path: &Path) -> String {
    if path.is_relative() {
        Path::new(".").join(path).to_string_lossy().into_owned()
    } else {
        path.to_string_lossy().into_owned()
    }
}

impl Default for FfmpegExtractor {
    fn default() -> Self {
        Self::new("ffmpeg")
    }
}

#[async_trait]
impl AudioExtractor for FfmpegExtractor {
    async fn extract_audio(
        &self,
        video: &Path,
        format: AudioFormat,
        delete_video: bool,
    ) -> Result<PathBuf> {
        if !video.exists() {
            return Err(Error::AudioExtraction(format!(
                "Video file not found: {}",
                video.display()
            )));
        }

        let output = audio_path_for(video, format);
        tracing::debug!("Extracting {} audio to {}", format, output.display());

        let result = Command::new(&self.program)
            .args(Self::build_args(video, &output, format))
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .output()
            .await
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    Error::FFmpegNotFound
                } else {
                    Error::AudioExtraction(format!("Failed to run ffmpeg: {}", e))
                }
            })?;

        if !result.status.success() {
            let stderr = String::from_utf8_lossy(&result.stderr);
            return Err(Error::AudioExtraction(format!(
                "ffmpeg exited with status {}: {}",
                result.status,
                stderr.trim()
            )));
        }

        if delete_video && output.exists() {
            tracing::debug!("Deleting video file {}", video.display());
            fs::remove_file(video).await?;
        }

        Ok(output)
    }
}
