//! Audio output formats.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Formats audio can be extracted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AudioFormat {
    #[default]
    Mp3,
    Wav,
}

impl AudioFormat {
    /// All supported formats, in the order they are offered to the user.
    pub const ALL: [AudioFormat; 2] = [AudioFormat::Mp3, AudioFormat::Wav];

    /// File extension (without dot).
    pub fn extension(&self) -> &'static str {
        match self {
            AudioFormat::Mp3 => "mp3",
            AudioFormat::Wav => "wav",
        }
    }

    /// Encoder arguments passed to ffmpeg.
    pub fn codec_args(&self) -> &'static [&'static str] {
        match self {
            AudioFormat::Mp3 => &["-acodec", "libmp3lame", "-q:a", "2"],
            AudioFormat::Wav => &["-acodec", "pcm_s16le", "-ar", "44100"],
        }
    }
}

impl fmt::Display for AudioFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.extension())
    }
}

impl FromStr for AudioFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim_start_matches('.').to_lowercase().as_str() {
            "mp3" => Ok(AudioFormat::Mp3),
            "wav" => Ok(AudioFormat::Wav),
            _ => Err(format!("Unknown audio format: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        assert_eq!("mp3".parse::<AudioFormat>().unwrap(), AudioFormat::Mp3);
        assert_eq!("WAV".parse::<AudioFormat>().unwrap(), AudioFormat::Wav);
        assert_eq!(".wav".parse::<AudioFormat>().unwrap(), AudioFormat::Wav);
        assert!("ogg".parse::<AudioFormat>().is_err());
    }

    #[test]
    fn test_display_matches_extension() {
        for format in AudioFormat::ALL {
            assert_eq!(format.to_string(), format.extension());
        }
    }
}
