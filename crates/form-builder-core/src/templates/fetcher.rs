//! Template fetching from remote (raw GitHub) or local directory
//!
//! Remote templates are plain files under a base URL; local templates are
//! plain files under a directory. Both are read as UTF-8 text.

use super::manifest::TemplateManifest;
use crate::error::FetchError;
use crate::product::ProductConfig;
use anyhow::{Context, Result};
use std::path::PathBuf;
use tokio::fs;
use url::Url;

/// Name of the optional manifest inside a local template directory
pub const MANIFEST_FILE: &str = "template.yaml";

/// Template source - either remote URL or local directory
#[derive(Debug, Clone)]
pub enum TemplateSource {
    Remote(Url),
    Local(PathBuf),
}

impl TemplateSource {
    /// Create a remote template source from a product config
    pub fn from_config<C: ProductConfig>(config: &C) -> Result<Self> {
        let url_str = std::env::var(config.template_url_env())
            .unwrap_or_else(|_| config.default_template_url().to_string());
        let url =
            Url::parse(&url_str).with_context(|| format!("Invalid template URL: {}", url_str))?;
        Ok(Self::Remote(url))
    }

    /// Create a local template source from a path
    pub fn local(path: PathBuf) -> Self {
        Self::Local(path)
    }
}

/// Template fetcher - handles retrieving templates from remote or local sources
pub struct TemplateFetcher {
    source: TemplateSource,
    client: reqwest::Client,
}

impl TemplateFetcher {
    /// Create a new fetcher with a custom user agent
    pub fn new(source: TemplateSource, user_agent: &str) -> Self {
        Self {
            source,
            client: reqwest::Client::builder()
                .user_agent(user_agent)
                .build()
                .unwrap_or_else(|_| reqwest::Client::new()),
        }
    }

    /// Create a fetcher from a product config
    pub fn from_config<C: ProductConfig>(config: &C) -> Result<Self> {
        let source = TemplateSource::from_config(config)?;
        Ok(Self::new(source, config.user_agent()))
    }

    /// Create a fetcher for local templates
    pub fn from_local(path: PathBuf, user_agent: &str) -> Self {
        Self::new(TemplateSource::local(path), user_agent)
    }

    /// Build a URL by appending a path segment, preserving query parameters
    fn build_url(base: &Url, path_segment: &str) -> std::result::Result<Url, FetchError> {
        let mut url = base.clone();
        url.path_segments_mut()
            .map_err(|_| FetchError::Url {
                file: path_segment.to_string(),
                reason: format!("URL cannot have path segments: {}", base),
            })?
            .pop_if_empty()
            .push(path_segment);
        Ok(url)
    }

    /// Load the manifest for this source
    ///
    /// A local directory may override the product's files with its own
    /// `template.yaml`; remote sources always use `default`.
    pub async fn fetch_manifest(&self, default: TemplateManifest) -> Result<TemplateManifest> {
        match &self.source {
            TemplateSource::Remote(_) => Ok(default),
            TemplateSource::Local(path) => {
                let manifest_path = path.join(MANIFEST_FILE);
                if !manifest_path.exists() {
                    return Ok(default);
                }
                let content = fs::read_to_string(&manifest_path)
                    .await
                    .with_context(|| format!("Failed to read {}", manifest_path.display()))?;
                tracing::debug!(path = %manifest_path.display(), "using local template manifest");
                TemplateManifest::parse(&content)
                    .with_context(|| format!("Failed to parse {}", manifest_path.display()))
            }
        }
    }

    /// Fetch one template file as text
    pub async fn fetch_file(&self, file_path: &str) -> std::result::Result<String, FetchError> {
        match &self.source {
            TemplateSource::Remote(base_url) => {
                let url = Self::build_url(base_url, file_path)?;
                tracing::debug!(%url, "fetching template");
                let response = self.client.get(url.clone()).send().await.map_err(|source| {
                    FetchError::Request {
                        url: url.to_string(),
                        source,
                    }
                })?;

                if !response.status().is_success() {
                    return Err(FetchError::Status {
                        url: url.to_string(),
                        status: response.status(),
                    });
                }

                response.text().await.map_err(|source| FetchError::Request {
                    url: url.to_string(),
                    source,
                })
            }
            TemplateSource::Local(path) => {
                let full_path = path.join(file_path);
                tracing::debug!(path = %full_path.display(), "reading template");
                fs::read_to_string(&full_path)
                    .await
                    .map_err(|source| FetchError::Read {
                        path: full_path,
                        source,
                    })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::templates::manifest::TemplateFile;
    use tempfile::TempDir;

    #[test]
    fn test_build_url_appends_to_directory() {
        let base = Url::parse("https://example.com/repo/main/form-builder/").unwrap();
        let url = TemplateFetcher::build_url(&base, "field-selector.tsx").unwrap();
        assert_eq!(
            url.as_str(),
            "https://example.com/repo/main/form-builder/field-selector.tsx"
        );
    }

    #[test]
    fn test_build_url_preserves_query() {
        let base = Url::parse("https://example.com/templates?ref=dev").unwrap();
        let url = TemplateFetcher::build_url(&base, "types.ts").unwrap();
        assert_eq!(url.as_str(), "https://example.com/templates/types.ts?ref=dev");
    }

    #[tokio::test]
    async fn test_fetch_local_file() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("types.ts"), "export type A = 1;\n").unwrap();

        let fetcher = TemplateFetcher::from_local(dir.path().to_path_buf(), "test");
        let content = fetcher.fetch_file("types.ts").await.unwrap();
        assert_eq!(content, "export type A = 1;\n");
    }

    #[tokio::test]
    async fn test_fetch_missing_local_file_reports_path() {
        let dir = TempDir::new().unwrap();
        let fetcher = TemplateFetcher::from_local(dir.path().to_path_buf(), "test");

        let err = fetcher.fetch_file("missing.ts").await.unwrap_err();
        assert!(matches!(err, FetchError::Read { .. }));
        assert!(err.to_string().contains("missing.ts"));
    }

    #[tokio::test]
    async fn test_local_manifest_overrides_default() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join(MANIFEST_FILE),
            "files:\n  - file: only.ts\n",
        )
        .unwrap();
        let default = TemplateManifest {
            files: vec![TemplateFile::plain("types.ts")],
        };

        let fetcher = TemplateFetcher::from_local(dir.path().to_path_buf(), "test");
        let manifest = fetcher.fetch_manifest(default).await.unwrap();
        assert_eq!(manifest.files, vec![TemplateFile::plain("only.ts")]);
    }

    #[tokio::test]
    async fn test_missing_local_manifest_uses_default() {
        let dir = TempDir::new().unwrap();
        let default = TemplateManifest {
            files: vec![TemplateFile::plain("types.ts")],
        };

        let fetcher = TemplateFetcher::from_local(dir.path().to_path_buf(), "test");
        let manifest = fetcher.fetch_manifest(default.clone()).await.unwrap();
        assert_eq!(manifest, default);
    }
}
