//! sbom-spdx: convert cataloged SBOM graphs into SPDX 2.2 JSON.

#![allow(clippy::needless_pass_by_value)]

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use sbom_spdx::{
    cli,
    config::{self, AppConfig, CONFIG_FILE_NAMES},
    pipeline::exit_codes,
};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "sbom-spdx")]
#[command(author = "Binarly.io")]
#[command(version)]
#[command(about = "Convert cataloged SBOMs into SPDX 2.2 JSON", long_about = None)]
#[command(after_help = "EXIT CODES:
    0  Document written
    2  Relationships were dropped (with --fail-on-warning)
    3  Error occurred

EXAMPLES:
    # Convert a catalog to SPDX JSON on stdout
    sbom-spdx convert catalog.json

    # Write a compact document and fail CI if anything was dropped
    sbom-spdx convert catalog.json -O sbom.spdx.json --compact --fail-on-warning

    # Preview what a conversion would drop
    sbom-spdx inspect catalog.json")]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

// ============================================================================
// Command argument structs
// ============================================================================

/// Arguments for the `convert` subcommand
#[derive(Parser)]
struct ConvertArgs {
    /// Path to the catalog JSON
    input: PathBuf,

    /// Output file path (stdout if not specified)
    #[arg(short = 'O', long)]
    output_file: Option<PathBuf>,

    /// Emit compact JSON instead of indented
    #[arg(long)]
    compact: bool,

    /// Exit with code 2 when relationships could not be represented
    #[arg(long)]
    fail_on_warning: bool,

    #[command(flatten)]
    document: DocumentArgs,
}

/// Arguments for the `inspect` subcommand
#[derive(Parser)]
struct InspectArgs {
    /// Path to the catalog JSON
    input: PathBuf,

    /// Print the summary as JSON
    #[arg(long)]
    json: bool,

    #[command(flatten)]
    document: DocumentArgs,
}

/// Document settings shared by `convert` and `inspect`
#[derive(Parser)]
struct DocumentArgs {
    /// Organization named in the document creators
    #[arg(long, env = "SBOM_SPDX_ORGANIZATION")]
    organization: Option<String>,

    /// Base URI for document namespaces
    #[arg(long, env = "SBOM_SPDX_NAMESPACE_BASE")]
    namespace_base: Option<String>,

    /// SPDX license list version recorded in creation info
    #[arg(long)]
    license_list_version: Option<String>,
}

impl DocumentArgs {
    /// Overlay these flags on a builder; unset flags leave the default in place
    fn apply(self, mut builder: sbom_spdx::AppConfigBuilder) -> sbom_spdx::AppConfigBuilder {
        if let Some(organization) = self.organization {
            builder = builder.organization(organization);
        }
        if let Some(base) = self.namespace_base {
            builder = builder.namespace_base(base);
        }
        if let Some(version) = self.license_list_version {
            builder = builder.license_list_version(version);
        }
        builder
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a catalog into an SPDX 2.2 JSON document
    Convert(ConvertArgs),

    /// Summarize what a conversion would produce and drop
    Inspect(InspectArgs),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Generate JSON Schema for the config file format
    ConfigSchema {
        /// Write schema to file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show, discover, or initialize configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Sub-subcommands for the `config` command
#[derive(Subcommand)]
enum ConfigAction {
    /// Print current effective configuration (merged from defaults + file)
    Show,
    /// Print config file search paths and discovered config file
    Path,
    /// Generate an example .sbom-spdx.yaml in the current directory
    Init,
}

fn main() {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(io::stderr),
        )
        .init();

    match run(cli) {
        Ok(code) => {
            if code != exit_codes::SUCCESS {
                std::process::exit(code);
            }
        }
        Err(err) => {
            eprintln!("Error: {err:#}");
            std::process::exit(exit_codes::ERROR);
        }
    }
}

/// Dispatch to command handlers, returning the exit code
fn run(cli: Cli) -> Result<i32> {
    match cli.command {
        Commands::Convert(args) => {
            let overrides = args
                .document
                .apply(AppConfig::builder())
                .output_file(args.output_file)
                .pretty(!args.compact)
                .fail_on_warning(args.fail_on_warning)
                .build();
            let (config, loaded_from) =
                AppConfig::from_file_with_overrides(cli.config.as_deref(), &overrides);
            if let Some(path) = &loaded_from {
                tracing::debug!("Loaded config from {:?}", path);
            }
            cli::run_convert(args.input, config, cli.quiet)
        }

        Commands::Inspect(args) => {
            let overrides = args.document.apply(AppConfig::builder()).build();
            let (config, _) =
                AppConfig::from_file_with_overrides(cli.config.as_deref(), &overrides);
            cli::run_inspect(args.input, config.document, args.json, cli.quiet)?;
            Ok(exit_codes::SUCCESS)
        }

        Commands::Completions { shell } => {
            generate(shell, &mut Cli::command(), "sbom-spdx", &mut io::stdout());
            Ok(exit_codes::SUCCESS)
        }

        Commands::ConfigSchema { output } => {
            let schema = config::generate_json_schema();
            match output {
                Some(path) => {
                    std::fs::write(&path, &schema)
                        .with_context(|| format!("failed to write {}", path.display()))?;
                    eprintln!("Schema written to {}", path.display());
                }
                None => {
                    println!("{schema}");
                }
            }
            Ok(exit_codes::SUCCESS)
        }

        Commands::Config { action } => {
            run_config_action(action, cli.config)?;
            Ok(exit_codes::SUCCESS)
        }
    }
}

fn run_config_action(action: ConfigAction, explicit: Option<PathBuf>) -> Result<()> {
    match action {
        ConfigAction::Show => {
            let (config, loaded_from) = config::load_or_default(explicit.as_deref());
            if let Some(path) = &loaded_from {
                eprintln!("# Loaded from: {}", path.display());
            } else {
                eprintln!("# No config file found; showing defaults");
            }
            let yaml = serde_yaml::to_string(&config).context("failed to serialize config")?;
            print!("{yaml}");
            Ok(())
        }
        ConfigAction::Path => {
            let search_paths: [Option<String>; 3] = [
                std::env::current_dir().ok().map(|p| p.display().to_string()),
                config::user_config_dir().map(|p| p.display().to_string()),
                ::dirs::home_dir().map(|p| p.display().to_string()),
            ];
            eprintln!("Config file search paths (in order):");
            for path in search_paths.into_iter().flatten() {
                eprintln!("  {path}");
            }
            eprintln!();
            eprintln!("Recognized file names:");
            for name in CONFIG_FILE_NAMES {
                eprintln!("  {name}");
            }
            eprintln!();
            match config::discover_config_file(explicit.as_deref()) {
                Some(path) => eprintln!("Active config file: {}", path.display()),
                None => eprintln!("No config file found."),
            }
            Ok(())
        }
        ConfigAction::Init => {
            let target = std::env::current_dir()
                .context("cannot determine current directory")?
                .join(".sbom-spdx.yaml");
            if target.exists() {
                anyhow::bail!(
                    "{} already exists. Remove it first to re-initialize.",
                    target.display()
                );
            }
            std::fs::write(&target, config::generate_example_config())
                .with_context(|| format!("failed to write {}", target.display()))?;
            eprintln!("Created {}", target.display());
            Ok(())
        }
    }
}
