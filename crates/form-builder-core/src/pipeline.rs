//! Generation pipeline: resolve destination, fetch, transform, write
//!
//! Each file is fetched, transformed and written independently. A failure on
//! one file is recorded in the report and does not stop the others; files
//! already written are left in place.

use crate::config::Configuration;
use crate::error::ResolveError;
use crate::product::ProductConfig;
use crate::resolve::resolve_alias_dir;
use crate::templates::{TemplateFetcher, TemplateFile, TemplateManifest};
use crate::transform::{FileTransformer, SelectorTransformer, Transform};
use anyhow::{Context, Result};
use colored::Colorize;
use futures::future::join_all;
use std::path::{Path, PathBuf};
use tokio::fs;

/// Result of generating one template file
#[derive(Debug)]
pub struct FileOutcome {
    pub file: String,
    pub result: Result<PathBuf>,
}

/// Per-file results of a generation run, in manifest order
#[derive(Debug)]
pub struct GenerationReport {
    pub output_dir: PathBuf,
    pub files: Vec<FileOutcome>,
}

impl GenerationReport {
    pub fn written(&self) -> impl Iterator<Item = &Path> {
        self.files
            .iter()
            .filter_map(|outcome| outcome.result.as_ref().ok().map(PathBuf::as_path))
    }

    pub fn failures(&self) -> impl Iterator<Item = (&str, &anyhow::Error)> {
        self.files.iter().filter_map(|outcome| match &outcome.result {
            Ok(_) => None,
            Err(e) => Some((outcome.file.as_str(), e)),
        })
    }

    pub fn is_success(&self) -> bool {
        self.failures().next().is_none()
    }
}

/// Directory the generated files go to: `<components alias dir>/<product dir>`
pub fn resolve_output_dir<C: ProductConfig>(
    product: &C,
    project_dir: &Path,
    config: &Configuration,
) -> std::result::Result<PathBuf, ResolveError> {
    let components_dir = resolve_alias_dir(project_dir, &config.components_alias)?;
    Ok(components_dir.join(product.output_dir_name()))
}

/// Turn one template source into the text written for this configuration
///
/// The variant file is filtered and stripped of comments first; every file
/// then gets the directive policy and the alias rewrite. Only client files
/// carry the directive; it is removed from the rest.
pub fn transform_file(file: &TemplateFile, source: String, config: &Configuration) -> String {
    if file.variants {
        let selector = SelectorTransformer::new(source)
            .filter_variants(&config.selected_variants)
            .strip_comments();
        apply_common(selector, file, config)
    } else {
        apply_common(FileTransformer::new(source), file, config)
    }
}

fn apply_common<T: Transform>(
    transformer: T,
    file: &TemplateFile,
    config: &Configuration,
) -> String {
    transformer
        .runtime_directive(config.include_runtime_directive && file.client)
        .replace_aliases(&config.components_alias, &config.utils_alias)
        .into_file()
}

/// Generate every manifest file into `output_dir`
///
/// Files are processed concurrently; the report keeps manifest order.
pub async fn generate(
    fetcher: &TemplateFetcher,
    manifest: &TemplateManifest,
    config: &Configuration,
    output_dir: &Path,
) -> Result<GenerationReport> {
    fs::create_dir_all(output_dir)
        .await
        .with_context(|| format!("Failed to create directory: {}", output_dir.display()))?;

    let jobs = manifest.files.iter().map(|file| async move {
        let result = generate_file(fetcher, file, config, output_dir).await;
        if let Err(e) = &result {
            tracing::warn!(file = %file.file, error = %e, "template file failed");
        }
        FileOutcome {
            file: file.file.clone(),
            result,
        }
    });

    Ok(GenerationReport {
        output_dir: output_dir.to_path_buf(),
        files: join_all(jobs).await,
    })
}

async fn generate_file(
    fetcher: &TemplateFetcher,
    file: &TemplateFile,
    config: &Configuration,
    output_dir: &Path,
) -> Result<PathBuf> {
    let source = fetcher.fetch_file(&file.file).await?;
    let emitted = transform_file(file, source, config);

    let target_path = output_dir.join(&file.file);
    if let Some(parent) = target_path.parent() {
        fs::create_dir_all(parent)
            .await
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    fs::write(&target_path, emitted)
        .await
        .with_context(|| format!("Failed to write file: {}", target_path.display()))?;

    tracing::debug!(path = %target_path.display(), variants = file.variants, "wrote template file");
    Ok(target_path)
}

/// Template fetcher for a local directory, or the product's remote source
pub fn setup_fetcher<C: ProductConfig>(
    product: &C,
    template_dir: Option<&Path>,
) -> Result<TemplateFetcher> {
    match template_dir {
        Some(path) => Ok(TemplateFetcher::from_local(
            path.to_path_buf(),
            product.user_agent(),
        )),
        None => TemplateFetcher::from_config(product),
    }
}

/// Run without prompts, printing plain progress lines
///
/// Destination resolution happens before anything is written; per-file
/// failures are reported and turn into an error once every file was tried.
pub async fn run_plain<C: ProductConfig>(
    product: &C,
    project_dir: &Path,
    config: &Configuration,
    template_dir: Option<&Path>,
) -> Result<GenerationReport> {
    let output_dir = resolve_output_dir(product, project_dir, config)?;
    let fetcher = setup_fetcher(product, template_dir)?;
    let manifest = fetcher.fetch_manifest(product.manifest()).await?;

    println!(
        "{}",
        format!(
            "Generating {} ({})...",
            product.display_name(),
            config.variant_names().join(", ")
        )
        .cyan()
        .bold()
    );
    println!();

    let report = generate(&fetcher, &manifest, config, &output_dir).await?;
    print_report(&report);

    let failed = report.failures().count();
    if failed > 0 {
        anyhow::bail!("{} template file(s) could not be generated", failed);
    }

    Ok(report)
}

/// Print a plain (non-interactive) summary of a run
pub fn print_report(report: &GenerationReport) {
    for outcome in &report.files {
        match &outcome.result {
            Ok(path) => println!("  {} {} {}", "->".blue(), outcome.file, path.display()),
            Err(e) => {
                println!("  {} {} {}", "->".blue(), outcome.file, "failed".red());
                eprintln!("    Error: {:#}", e);
            }
        }
    }

    println!();
    println!(
        "{} {} file(s) in {}",
        "Wrote".green().bold(),
        report.written().count(),
        report.output_dir.display()
    );
}
