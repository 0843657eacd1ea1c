//! Charm-style CLI prompts using cliclack

use crate::config::Configuration;
use crate::pipeline::{self, GenerationReport};
use crate::product::ProductConfig;
use crate::transform::matchers::{DEFAULT_COMPONENTS_ALIAS, DEFAULT_UTILS_ALIAS};
use crate::transform::FieldVariant;
use anyhow::Result;
use std::path::{Path, PathBuf};

/// CLI arguments for the init command
#[derive(Debug, Clone, Default)]
pub struct InitArgs {
    /// Project directory holding tsconfig.json
    pub cwd: Option<PathBuf>,

    /// Local directory to use for templates instead of fetching from remote
    pub template_dir: Option<PathBuf>,

    /// Import alias for components
    pub components: Option<String>,

    /// Import alias for utils
    pub utils: Option<String>,

    /// Whether to emit the "use client" directive
    pub rsc: Option<bool>,

    /// Field variants to include
    pub fields: Option<Vec<FieldVariant>>,

    /// Auto-confirm all prompts (non-interactive mode)
    pub yes: bool,
}

impl InitArgs {
    /// Configuration from flags alone, defaults filling the gaps
    pub fn configuration(&self) -> Configuration {
        let defaults = Configuration::default();
        Configuration {
            components_alias: self
                .components
                .clone()
                .unwrap_or(defaults.components_alias),
            utils_alias: self.utils.clone().unwrap_or(defaults.utils_alias),
            include_runtime_directive: self.rsc.unwrap_or(defaults.include_runtime_directive),
            selected_variants: self
                .fields
                .clone()
                .unwrap_or(defaults.selected_variants),
        }
    }

    /// Absolute project directory
    pub fn project_dir(&self) -> PathBuf {
        let current_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        match &self.cwd {
            Some(dir) if dir.is_absolute() => dir.clone(),
            Some(dir) => current_dir.join(dir),
            None => current_dir,
        }
    }
}

/// Run the CLI with interactive prompts
pub async fn run<C: ProductConfig>(config: &C, args: InitArgs) -> Result<GenerationReport> {
    cliclack::intro(config.display_name())?;

    // Step 1: Check the project directory before asking anything
    let project_dir = args.project_dir();
    if !project_dir.is_dir() {
        anyhow::bail!("The directory {} does not exist", project_dir.display());
    }

    // Step 2: Collect configuration
    let configuration = collect_configuration(&args)?;

    // Step 3: Resolve where the components go
    let output_dir = pipeline::resolve_output_dir(config, &project_dir, &configuration)?;
    cliclack::log::info(format!("Output directory: {}", output_dir.display()))?;

    // Step 4: Setup template fetcher
    let fetcher = setup_fetcher(config, args.template_dir.as_deref())?;
    let manifest = fetcher.fetch_manifest(config.manifest()).await?;

    // Step 5: Generate files
    let spinner = cliclack::spinner();
    spinner.start("Generating components...");
    let report =
        pipeline::generate(&fetcher, &manifest, &configuration, &output_dir).await?;
    spinner.stop(format!(
        "Created {} files in {}",
        report.written().count(),
        output_dir.display()
    ));

    // Step 6: Report per file
    print_outcomes(&report)?;

    let failed = report.failures().count();
    if failed > 0 {
        anyhow::bail!("{} template file(s) could not be generated", failed);
    }

    cliclack::outro(format!("Docs: {}", config.docs_url()))?;
    Ok(report)
}

fn setup_fetcher<C: ProductConfig>(
    config: &C,
    template_dir: Option<&Path>,
) -> Result<crate::templates::TemplateFetcher> {
    match template_dir {
        Some(path) => cliclack::log::info(format!("Using local templates from {}", path.display()))?,
        None => cliclack::log::info("Using remote templates")?,
    }
    pipeline::setup_fetcher(config, template_dir)
}

fn collect_configuration(args: &InitArgs) -> Result<Configuration> {
    if args.yes {
        let configuration = args.configuration();
        cliclack::log::info(format!(
            "Using {} / {} (--yes mode)",
            configuration.components_alias, configuration.utils_alias
        ))?;
        return Ok(configuration);
    }

    let components_alias = match &args.components {
        Some(alias) => alias.clone(),
        None => input_alias("components", DEFAULT_COMPONENTS_ALIAS)?,
    };

    let utils_alias = match &args.utils {
        Some(alias) => alias.clone(),
        None => input_alias("utils", DEFAULT_UTILS_ALIAS)?,
    };

    let include_runtime_directive = match args.rsc {
        Some(rsc) => rsc,
        None => cliclack::confirm("Are you using React Server Components?")
            .initial_value(true)
            .interact()?,
    };

    let selected_variants = match &args.fields {
        Some(fields) => fields.clone(),
        None => select_fields()?,
    };

    let names: Vec<&str> = selected_variants.iter().map(|v| v.display_name()).collect();
    cliclack::log::success(format!("Fields: {}", names.join(", ")))?;

    Ok(Configuration {
        components_alias,
        utils_alias,
        include_runtime_directive,
        selected_variants,
    })
}

fn input_alias(name: &str, default: &str) -> Result<String> {
    let input: String = cliclack::input(format!("Configure the import alias for {}", name))
        .placeholder(default)
        .default_input(default)
        .interact()?;

    Ok(if input.trim().is_empty() {
        default.to_string()
    } else {
        input.trim().to_string()
    })
}

fn select_fields() -> Result<Vec<FieldVariant>> {
    let mut multi = cliclack::multiselect("Select the fields you want to include");
    for variant in FieldVariant::ALL {
        multi = multi.item(variant, variant.display_name(), variant.id());
    }

    let selected: Vec<FieldVariant> = multi
        .initial_values(vec![FieldVariant::Text])
        .required(true)
        .interact()?;

    if selected.is_empty() {
        anyhow::bail!("Select at least one field.");
    }
    Ok(selected)
}

fn print_outcomes(report: &GenerationReport) -> Result<()> {
    for outcome in &report.files {
        match &outcome.result {
            Ok(path) => cliclack::log::success(format!("{}", path.display()))?,
            Err(e) => cliclack::log::error(format!("{}: {:#}", outcome.file, e))?,
        }
    }
    Ok(())
}
