//! Media processing module.

pub mod audio;
pub mod format;

pub use audio::{audio_path_for, AudioExtractor, FfmpegExtractor};
pub use format::AudioFormat;
