//! Download module.
//!
//! This module provides:
//! - Download requests and file naming
//! - The download orchestrator
//! - Streaming of media bytes to disk

pub mod orchestrator;
pub mod request;
pub mod transfer;

pub use orchestrator::{Downloader, ResolvedPost};
pub use request::{plan_file_names, DownloadOutcome, DownloadRequest, ExtensionChoice, FilePlan};
pub use transfer::{write_response, write_stream};
