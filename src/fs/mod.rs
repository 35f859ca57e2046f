//! Filesystem module.
//!
//! Provides:
//! - Download directory resolution
//! - Filename generation and sanitizing

pub mod naming;
pub mod paths;

pub use naming::{partial_path, post_file_name, sanitize_filename};
pub use paths::{default_download_dir, ensure_dir, resolve_directory};
