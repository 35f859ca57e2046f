//! View-model state for the download form.
//!
//! State is immutable: every user action or finished operation is an
//! `ShellEvent`, and `ShellState::apply` maps the current state to the next.

use std::path::PathBuf;

use crate::download::{DownloadRequest, ExtensionChoice, ResolvedPost};
use crate::media::AudioFormat;

/// Where the form is in its workflow.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Phase {
    /// Waiting for input. "Get post" is disabled.
    #[default]
    Idle,
    /// URL and directory entered. "Get post" is enabled.
    Ready,
    /// Post resolved. "Download" is enabled.
    PostFetched(ResolvedPost),
}

/// A dialog to show the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Info(String),
    Error(String),
}

/// Something that happened in the form.
#[derive(Debug, Clone)]
pub enum ShellEvent {
    UrlChanged(String),
    DirectoryChanged(String),
    /// The "Clear" button next to the URL field.
    ClearUrl,
    AudioOnlyToggled(bool),
    AudioFormatSelected(AudioFormat),
    PostFetched(ResolvedPost),
    FetchFailed(String),
    DownloadSucceeded(PathBuf),
    DownloadFailed(String),
    /// Clear every field and start over.
    Reset,
}

/// Complete state of the download form.
#[derive(Debug, Clone, PartialEq)]
pub struct ShellState {
    pub url: String,
    pub directory: String,

    /// Used when the directory field is left empty.
    pub default_directory: Option<PathBuf>,

    pub audio_only: bool,
    pub audio_format: AudioFormat,
    pub phase: Phase,
    pub notice: Option<Notice>,
}

impl ShellState {
    pub fn new(default_directory: Option<PathBuf>, audio_format: AudioFormat) -> Self {
        Self {
            url: String::new(),
            directory: String::new(),
            default_directory,
            audio_only: false,
            audio_format,
            phase: Phase::Idle,
            notice: None,
        }
    }

    /// Produce the state that follows `event`.
    pub fn apply(self, event: ShellEvent) -> Self {
        // Any new event dismisses the previous dialog
        let state = Self {
            notice: None,
            ..self
        };

        match event {
            ShellEvent::UrlChanged(url) => Self {
                url,
                phase: Phase::Idle,
                audio_only: false,
                ..state
            }
            .gate(),
            ShellEvent::DirectoryChanged(directory) => Self { directory, ..state }.gate(),
            ShellEvent::ClearUrl => Self {
                url: String::new(),
                phase: Phase::Idle,
                audio_only: false,
                ..state
            }
            .gate(),
            ShellEvent::AudioOnlyToggled(on) => Self {
                audio_only: on && state.audio_controls_visible(),
                ..state
            },
            ShellEvent::AudioFormatSelected(audio_format) => Self {
                audio_format,
                ..state
            },
            ShellEvent::PostFetched(resolved) => {
                if !state.can_get_post() {
                    return state;
                }
                let audio_only = state.audio_only && resolved.kind.is_video();
                Self {
                    phase: Phase::PostFetched(resolved),
                    audio_only,
                    ..state
                }
            }
            ShellEvent::FetchFailed(message) => Self {
                notice: Some(Notice::Error(message)),
                ..state
            },
            ShellEvent::DownloadSucceeded(path) => Self {
                notice: Some(Notice::Info(format!(
                    "File successfully downloaded to {}",
                    path.display()
                ))),
                ..Self::new(state.default_directory, state.audio_format)
            },
            ShellEvent::DownloadFailed(message) => Self {
                notice: Some(Notice::Error(message)),
                ..state
            },
            ShellEvent::Reset => Self::new(state.default_directory, state.audio_format),
        }
    }

    /// Re-evaluate whether "Get post" is available after a field edit.
    fn gate(self) -> Self {
        if !self.fields_complete() {
            return Self {
                phase: Phase::Idle,
                audio_only: false,
                ..self
            };
        }

        match self.phase {
            Phase::Idle => Self {
                phase: Phase::Ready,
                ..self
            },
            _ => self,
        }
    }

    fn fields_complete(&self) -> bool {
        !self.url.trim().is_empty() && self.effective_directory().is_some()
    }

    /// Directory the download will land in.
    pub fn effective_directory(&self) -> Option<PathBuf> {
        let entered = self.directory.trim();
        if entered.is_empty() {
            self.default_directory.clone()
        } else {
            Some(PathBuf::from(entered))
        }
    }

    pub fn can_get_post(&self) -> bool {
        !matches!(self.phase, Phase::Idle)
    }

    pub fn can_download(&self) -> bool {
        matches!(self.phase, Phase::PostFetched(_))
    }

    /// The post resolved for the current URL, if any.
    pub fn resolved(&self) -> Option<&ResolvedPost> {
        match &self.phase {
            Phase::PostFetched(resolved) => Some(resolved),
            _ => None,
        }
    }

    /// Audio-only controls are offered for video posts only.
    pub fn audio_controls_visible(&self) -> bool {
        self.resolved().map(|r| r.kind.is_video()).unwrap_or(false)
    }

    /// The download the "Download" button would start.
    pub fn download_request(&self, keep_video: bool) -> Option<DownloadRequest> {
        if !self.can_download() {
            return None;
        }

        let extension = if self.audio_only && self.audio_controls_visible() {
            ExtensionChoice::Audio(self.audio_format)
        } else {
            ExtensionChoice::Auto
        };

        Some(DownloadRequest {
            url: self.url.trim().to_string(),
            directory: self.effective_directory(),
            extension,
            keep_video,
        })
    }
}
