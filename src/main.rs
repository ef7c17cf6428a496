//! usn-digest: Ubuntu Security Notice digest reporter
//!
//! Parses `ubuntu-security-announce` digests, keeps the notices that apply
//! to the target releases, enriches them from the Ubuntu security website
//! and prints a TSV or JSON report.

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use usn_digest::{
    cli,
    config::{self, AppConfig, ConfigOverrides},
    pipeline::exit_codes,
    reports::ReportFormat,
};

#[derive(Parser)]
#[command(name = "usn-digest")]
#[command(version)]
#[command(about = "Filter and enrich Ubuntu Security Notice digests", long_about = None)]
#[command(after_help = "EXIT CODES:
    0  Report written
    3  Error occurred

EXAMPLES:
    # TSV report of notices affecting 24.04
    usn-digest report digest.txt

    # JSON report without network lookups
    usn-digest report digest.txt -f json --offline

    # Notices for 22.04, four lookups in flight, written to a file
    usn-digest report digest.txt --release 22.04 --release '22.04 LTS' --jobs 4 -O usn.tsv")]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Only log warnings and errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    /// Path to config file
    #[arg(long, global = true, env = "USN_DIGEST_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a digest and print the report
    Report(ReportArgs),

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

#[derive(Parser)]
struct ReportArgs {
    /// Digest file to read
    input: PathBuf,

    /// Output format
    #[arg(short = 'f', long = "format", value_enum)]
    format: Option<ReportFormat>,

    /// Write the report to a file instead of stdout
    #[arg(short = 'O', long)]
    output_file: Option<PathBuf>,

    /// Target release label; repeat for several (default: 24.04, 24.04 LTS)
    #[arg(long = "release", value_name = "LABEL")]
    releases: Vec<String>,

    /// Skip network lookups; enrichment fields become Unknown
    #[arg(long)]
    offline: bool,

    /// Number of notices enriched concurrently
    #[arg(short, long)]
    jobs: Option<usize>,

    /// Per-request timeout in seconds
    #[arg(long, value_name = "SECS")]
    api_timeout: Option<u64>,
}

/// Sub-subcommands for the `config` command
#[derive(Subcommand)]
enum ConfigAction {
    /// Print current effective configuration (merged from defaults + file)
    Show,
    /// Print config file search paths and discovered config file
    Path,
    /// Generate an example .usn-digest.yaml in the current directory
    Init,
}

fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "warn"
    } else {
        "info"
    };
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

    let code = match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:#}");
            exit_codes::ERROR
        }
    };
    std::process::exit(code);
}

fn run(cli: Cli) -> Result<i32> {
    match cli.command {
        Commands::Report(args) => {
            let overrides = ConfigOverrides {
                target_releases: args.releases,
                offline: args.offline,
                timeout_secs: args.api_timeout,
                max_concurrent: args.jobs,
                format: args.format,
                file: args.output_file,
            };
            let (config, loaded_from) =
                AppConfig::from_file_with_overrides(cli.config.as_deref(), &overrides)
                    .context("failed to load configuration")?;
            if let Some(path) = &loaded_from {
                tracing::debug!("Using config file {}", path.display());
            }

            cli::run_report(&args.input, &config)
        }

        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "usn-digest", &mut io::stdout());
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
                None => println!("{schema}"),
            }
            Ok(exit_codes::SUCCESS)
        }

        Commands::Config { action } => match action {
            ConfigAction::Show => {
                let (config, loaded_from) = config::load_config(cli.config.as_deref())
                    .context("failed to load configuration")?;
                match &loaded_from {
                    Some(path) => eprintln!("# Loaded from: {}", path.display()),
                    None => eprintln!("# No config file found; showing defaults"),
                }
                let yaml = serde_yaml::to_string(&config).context("failed to serialize config")?;
                print!("{yaml}");
                Ok(exit_codes::SUCCESS)
            }
            ConfigAction::Path => {
                eprintln!("Config file search paths (in order):");
                for dir in config::config_search_dirs() {
                    eprintln!("  {}", dir.display());
                }
                eprintln!();
                eprintln!("Recognized file names:");
                for name in config::CONFIG_FILE_NAMES {
                    eprintln!("  {name}");
                }
                eprintln!();
                match config::discover_config_file(cli.config.as_deref()) {
                    Some(path) => eprintln!("Active config file: {}", path.display()),
                    None => eprintln!("No config file found."),
                }
                Ok(exit_codes::SUCCESS)
            }
            ConfigAction::Init => {
                let target = std::env::current_dir()
                    .context("cannot determine current directory")?
                    .join(".usn-digest.yaml");
                if target.exists() {
                    anyhow::bail!(
                        "{} already exists. Remove it first to re-initialize.",
                        target.display()
                    );
                }
                std::fs::write(&target, config::generate_example_config())
                    .with_context(|| format!("failed to write {}", target.display()))?;
                eprintln!("Created {}", target.display());
                Ok(exit_codes::SUCCESS)
            }
        },
    }
}
