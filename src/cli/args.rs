//! Command-line argument definitions using clap.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::config::Config;
use crate::download::ExtensionChoice;
use crate::media::AudioFormat;

/// Instagram post downloader CLI.
#[derive(Parser, Debug)]
#[command(
    name = "instasaver",
    version,
    about = "Download public Instagram posts",
    long_about = "Download the image or video of a public Instagram post, optionally keeping only its audio.\n\n\
                  Without --url an interactive prompt asks for the post and the download options."
)]
pub struct Args {
    /// Post or reel URL to download. Skips the interactive prompt.
    #[arg(short, long)]
    pub url: Option<String>,

    /// Directory for downloads (defaults to the platform download folder).
    #[arg(short = 'd', long = "directory")]
    pub download_directory: Option<PathBuf>,

    /// Keep only the audio track of a video post.
    #[arg(short, long, value_enum)]
    pub audio: Option<AudioFormatArg>,

    /// Save under this extension instead of the detected one.
    #[arg(short, long, conflicts_with = "audio")]
    pub extension: Option<String>,

    /// Keep the video after extracting its audio.
    #[arg(long)]
    pub keep_video: bool,

    /// Path to the ffmpeg executable.
    #[arg(long, env = "INSTASAVER_FFMPEG")]
    pub ffmpeg: Option<PathBuf>,

    /// Path to configuration file.
    #[arg(short, long, default_value = "instasaver.toml")]
    pub config: PathBuf,

    /// Hide download progress information.
    #[arg(long, short)]
    pub quiet: bool,

    /// Enable debug logging.
    #[arg(long)]
    pub debug: bool,
}

/// CLI audio format argument.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum AudioFormatArg {
    Mp3,
    Wav,
}

impl From<AudioFormatArg> for AudioFormat {
    fn from(arg: AudioFormatArg) -> Self {
        match arg {
            AudioFormatArg::Mp3 => AudioFormat::Mp3,
            AudioFormatArg::Wav => AudioFormat::Wav,
        }
    }
}

impl Args {
    /// Merge CLI arguments into an existing config, overriding where specified.
    pub fn merge_into_config(&self, config: &mut Config) {
        if let Some(dir) = &self.download_directory {
            config.options.download_directory = Some(dir.clone());
        }

        if let Some(audio) = self.audio {
            config.options.audio_format = audio.into();
        }

        if let Some(ffmpeg) = &self.ffmpeg {
            config.ffmpeg.path = ffmpeg.clone();
        }

        // Boolean flags (only override if set to non-default)
        if self.keep_video {
            config.options.keep_video = true;
        }

        if self.quiet {
            config.options.show_progress = false;
        }
    }

    /// Extension choice for a non-interactive download.
    pub fn extension_choice(&self) -> ExtensionChoice {
        match self.audio {
            Some(audio) => ExtensionChoice::Audio(audio.into()),
            None => ExtensionChoice::from_user(self.extension.as_deref()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_overrides() {
        let args = Args::parse_from([
            "instasaver",
            "--url",
            "https://www.instagram.com/reel/XYZ/",
            "-d",
            "/data/insta",
            "--audio",
            "wav",
            "--keep-video",
            "--quiet",
        ]);

        let mut config = Config::default();
        args.merge_into_config(&mut config);

        assert_eq!(config.download_directory(), PathBuf::from("/data/insta"));
        assert_eq!(config.options.audio_format, AudioFormat::Wav);
        assert!(config.options.keep_video);
        assert!(!config.options.show_progress);
        assert_eq!(args.extension_choice(), ExtensionChoice::Audio(AudioFormat::Wav));
    }

    #[test]
    fn test_defaults_leave_config_alone() {
        let args = Args::parse_from(["instasaver"]);
        let mut config = Config::default();
        config.options.keep_video = true;
        args.merge_into_config(&mut config);

        assert!(config.options.keep_video);
        assert!(config.options.show_progress);
        assert_eq!(args.config, PathBuf::from("instasaver.toml"));
        assert_eq!(args.extension_choice(), ExtensionChoice::Auto);
    }

    #[test]
    fn test_literal_extension() {
        let args = Args::parse_from(["instasaver", "-e", "jpg"]);
        assert_eq!(
            args.extension_choice(),
            ExtensionChoice::Literal("jpg".to_string())
        );
    }

    #[test]
    fn test_audio_and_extension_conflict() {
        assert!(Args::try_parse_from(["instasaver", "--audio", "mp3", "-e", "jpg"]).is_err());
    }
}
