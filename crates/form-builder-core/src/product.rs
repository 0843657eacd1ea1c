//! Product configuration trait for CLI binaries
//!
//! This trait defines where a product's templates live and where its
//! generated components are placed in the user's project.

use crate::templates::manifest::TemplateManifest;

/// Configuration trait for a component distribution
///
/// Each binary implements this trait to define:
/// - Product identity (name, display name)
/// - Template source URLs
/// - The set of template files and which one carries variant sections
/// - Output placement and documentation links
pub trait ProductConfig: Clone + Send + Sync + 'static {
    /// Internal product name (used for CLI command, env vars)
    fn name(&self) -> &'static str;

    /// Human-readable display name
    fn display_name(&self) -> &'static str;

    /// Default URL of the directory holding the raw template files
    fn default_template_url(&self) -> &'static str;

    /// Environment variable name for overriding template URL
    fn template_url_env(&self) -> &'static str;

    /// Directory created under the resolved components path
    fn output_dir_name(&self) -> &'static str;

    /// Files fetched and emitted on every run
    fn manifest(&self) -> TemplateManifest;

    /// URL for product documentation
    fn docs_url(&self) -> &'static str;

    /// User agent string for HTTP requests
    fn user_agent(&self) -> &'static str {
        self.name()
    }
}
