//! Marker-driven template customization
//!
//! This module provides:
//! - The section model for variant templates (`//split//<id>` markers)
//! - Variant filtering for the field selector template
//! - Comment stripping, runtime directive policy and import alias rewrites
//!
//! Everything here is plain text processing; no template is parsed as code.

pub mod blocks;
pub mod matchers;
pub mod selector;
pub mod transformer;
pub mod variant;

pub use blocks::{filter_source, split_sections, Section, SectionTag};
pub use selector::SelectorTransformer;
pub use transformer::{FileTransformer, Transform};
pub use variant::FieldVariant;
