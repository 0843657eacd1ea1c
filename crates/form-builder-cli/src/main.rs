//! Form Builder CLI - Add the form builder components to a React project

use anyhow::Result;
use clap::{Parser, Subcommand};
use form_builder_core::transform::FieldVariant;
use form_builder_core::tui::InitArgs;
use form_builder_core::{ProductConfig, TemplateFile, TemplateManifest};
use std::path::PathBuf;
use tracing::Level;

/// Form builder product configuration
#[derive(Clone)]
pub struct FormBuilderConfig;

impl ProductConfig for FormBuilderConfig {
    fn name(&self) -> &'static str {
        "form-builder"
    }

    fn display_name(&self) -> &'static str {
        "React Form Builder"
    }

    fn default_template_url(&self) -> &'static str {
        "https://raw.githubusercontent.com/seifmegahed/form-builder/main/apps/example/src/components/form-builder/"
    }

    fn template_url_env(&self) -> &'static str {
        "FORM_BUILDER_TEMPLATE_URL"
    }

    fn output_dir_name(&self) -> &'static str {
        "form-builder"
    }

    fn manifest(&self) -> TemplateManifest {
        TemplateManifest {
            files: vec![
                TemplateFile::with_variants("field-selector.tsx").client(),
                TemplateFile::plain("field-wrapper.tsx").client(),
                TemplateFile::plain("generator.tsx").client(),
                TemplateFile::plain("index.ts"),
                TemplateFile::plain("types.ts"),
                TemplateFile::plain("utils.ts"),
            ],
        }
    }

    fn docs_url(&self) -> &'static str {
        "https://github.com/seifmegahed/form-builder"
    }
}

#[derive(Parser, Debug)]
#[command(name = "form-builder")]
#[command(about = "CLI to add a react form builder component to your project")]
#[command(version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Print debug logs to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Add the form builder components to a project
    Init(CliInitArgs),
}

#[derive(Parser, Debug)]
pub struct CliInitArgs {
    /// Project directory containing tsconfig.json
    #[arg(short, long)]
    pub cwd: Option<PathBuf>,

    /// Local directory to use for templates instead of fetching from remote (for development use)
    #[arg(long = "template-dir")]
    pub template_dir: Option<PathBuf>,

    /// Import alias for components (default: @/components)
    #[arg(long)]
    pub components: Option<String>,

    /// Import alias for utils (default: @/lib/utils)
    #[arg(long)]
    pub utils: Option<String>,

    /// Whether the project uses React Server Components ("use client" directive)
    #[arg(long, value_name = "BOOL")]
    pub rsc: Option<bool>,

    /// Fields to include (comma-separated: text,select,textarea,checkbox,date-picker,combo-select)
    #[arg(short, long, value_delimiter = ',', value_enum)]
    pub fields: Option<Vec<FieldVariant>>,

    /// Skip all prompts and use flags or defaults (non-interactive mode)
    #[arg(short, long)]
    pub yes: bool,
}

impl From<CliInitArgs> for InitArgs {
    fn from(args: CliInitArgs) -> Self {
        InitArgs {
            cwd: args.cwd,
            template_dir: args.template_dir,
            components: args.components,
            utils: args.utils,
            rsc: args.rsc,
            fields: args.fields,
            yes: args.yes,
        }
    }
}

fn init_logging(verbose: bool) {
    tracing_subscriber::fmt()
        .with_max_level(if verbose { Level::DEBUG } else { Level::WARN })
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

async fn init(config: &FormBuilderConfig, args: InitArgs) -> Result<()> {
    if args.yes {
        // Plain output, no prompts
        let configuration = args.configuration();
        form_builder_core::run_plain(
            config,
            &args.project_dir(),
            &configuration,
            args.template_dir.as_deref(),
        )
        .await?;
        return Ok(());
    }

    // Run the TUI application with the init args
    let result = form_builder_core::run(config, args).await.map(|_| ());

    // Ensure cursor is visible on normal exit
    let _ = console::Term::stderr().show_cursor();

    result
}

#[tokio::main]
async fn main() -> Result<()> {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully; partially written files stay as they are
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    let args = Args::parse();
    init_logging(args.verbose);
    let config = FormBuilderConfig;

    match args.command {
        Some(Command::Init(init_args)) => init(&config, init_args.into()).await,
        // No subcommand provided, default to init behavior (interactive mode)
        None => init(&config, InitArgs::default()).await,
    }
}
