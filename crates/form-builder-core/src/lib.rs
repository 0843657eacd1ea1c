//! Form Builder Core - template customization for the form builder components
//!
//! The published components are plain source templates. One of them, the field
//! selector, holds a section per field kind marked by `//split//<id>` comment
//! lines; the others only need import aliases and the runtime directive
//! adjusted to the user's project.
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Layer 1: Text Transforms** - Section filtering, comment stripping, directive
//!   policy and alias rewrites over owned strings (`transform`)
//! - **Layer 2: Generation** - `ProductConfig`, template fetching, tsconfig alias
//!   resolution and the per-file pipeline (`templates`, `resolve`, `pipeline`)
//! - **Layer 3: CLI/TUI Interface** - Optional cliclack-based prompts (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based TUI prompts module
//!
//! # Example Usage (without TUI)
//!
//! ```ignore
//! use form_builder_core::transform::{FieldVariant, SelectorTransformer, Transform};
//!
//! let emitted = SelectorTransformer::new(template)
//!     .filter_variants(&[FieldVariant::Text, FieldVariant::Select])
//!     .strip_comments()
//!     .runtime_directive(true)
//!     .replace_aliases("~/components", "~/lib/utils")
//!     .into_file();
//! ```

pub mod config;
pub mod error;
pub mod pipeline;
pub mod product;
pub mod resolve;
pub mod templates;
pub mod transform;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use config::Configuration;
pub use error::{FetchError, ResolveError};
pub use pipeline::{generate, run_plain, GenerationReport};
pub use product::ProductConfig;
pub use templates::{TemplateFetcher, TemplateFile, TemplateManifest, TemplateSource};
pub use transform::{FieldVariant, FileTransformer, SelectorTransformer, Transform};

#[cfg(feature = "tui")]
pub use tui::run;
