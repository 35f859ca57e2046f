//! Post resolution module.
//!
//! Provides:
//! - Post URL validation and shortcode extraction
//! - Media kind classification
//! - Post metadata representation

pub mod kind;
pub mod link;
pub mod metadata;

pub use kind::MediaKind;
pub use link::{parse_post_code, parse_post_link, LinkKind, PostLink, INSTAGRAM_HOST};
pub use metadata::PostMetadata;
