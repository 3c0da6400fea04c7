//! Content module - post records and the manifests they are loaded from

pub mod manifest;
mod post;

pub use manifest::load_posts;
pub use post::{ExcerptMode, PageContext, Post};
