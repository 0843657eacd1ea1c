//! Template fetching and manifests
//!
//! This module provides:
//! - The template manifest (which files are emitted, which one has variants)
//! - Template fetching from remote URLs or local directories

pub mod fetcher;
pub mod manifest;

pub use fetcher::{TemplateFetcher, TemplateSource};
pub use manifest::{TemplateFile, TemplateManifest};
