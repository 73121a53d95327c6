//! product-ranker: deterministic product scoring and ranking
//!
//! Ranks a batch of scraped product listings by value and explains the winner.

#![allow(clippy::needless_pass_by_value)]

use anyhow::{Context, Result};
use clap::{Args, CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use product_ranker::{
    cli,
    config::{self, AppConfig, ConfigPreset, CONFIG_FILE_NAMES},
    pipeline::exit_codes,
    reports::ReportFormat,
};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "product-ranker")]
#[command(version)]
#[command(about = "Deterministic product scoring and ranking", long_about = None)]
#[command(after_help = "EXIT CODES:
    0  Success
    3  Error occurred

EXAMPLES:
    # Rank a scraped batch with auto-detected output
    product-ranker rank batch.json

    # Add sentiment scores and show the breakdown
    product-ranker rank batch.json --sentiments sentiments.json --breakdown -o table

    # JSON for scripts
    product-ranker rank - -o json < batch.json > ranking.json

    # How many units is this listing?
    product-ranker quantity \"Vitamin C 500mg, 120 Capsules\" --price 14.99")]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Disable colored output (also respects `NO_COLOR` env)
    #[arg(long, global = true)]
    no_color: bool,

    /// Path to configuration file
    #[arg(long, global = true, env = "PRODUCT_RANKER_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Arguments for the `rank` subcommand
#[derive(Args)]
struct RankArgs {
    /// Batch file: a JSON array of listings or an object with `products`
    /// (use `-` for stdin)
    batch: PathBuf,

    /// JSON object mapping product ids to 0-100 sentiment scores
    #[arg(long)]
    sentiments: Option<PathBuf>,

    /// Explanation text to use instead of the generated summary
    #[arg(long)]
    narrative: Option<String>,

    /// Output format (auto detects TTY: table if interactive, summary otherwise)
    #[arg(short, long, default_value = "auto")]
    output: ReportFormat,

    /// Output file path (stdout if not specified)
    #[arg(short = 'O', long)]
    output_file: Option<PathBuf>,

    /// Show per-dimension sub-scores
    #[arg(long)]
    breakdown: bool,

    /// Show only the top N listings
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    limit: Option<u64>,

    /// Configuration preset: default, compact, detailed, machine
    #[arg(long)]
    preset: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Score and rank a batch of listings
    Rank(RankArgs),

    /// Extract the unit count from listing titles
    Quantity {
        /// Listing titles
        #[arg(required = true)]
        titles: Vec<String>,

        /// Total price, to also print the per-unit price
        #[arg(long)]
        price: Option<f64>,
    },

    /// Build a fallback search query from a listing title
    Query {
        /// Listing title
        title: String,

        /// Maximum number of keywords (overrides config)
        #[arg(long)]
        max_keywords: Option<usize>,
    },

    /// Print the dimension weight vectors
    Weights {
        /// Show only the with-sentiment vector
        #[arg(long, conflicts_with = "no_sentiment")]
        sentiment: bool,

        /// Show only the without-sentiment vector
        #[arg(long)]
        no_sentiment: bool,
    },

    /// Show, discover, or initialize configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Sub-subcommands for the `config` command
#[derive(Subcommand)]
enum ConfigAction {
    /// Print current effective configuration (merged from defaults + file)
    Show,
    /// Print config file search paths and discovered config file
    Path,
    /// Generate an example .product-ranker.yaml in the current directory
    Init,
    /// Print the JSON Schema for the config file format
    Schema {
        /// Write schema to file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();

    // Initialize logging; reports go to stdout, logs to stderr
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

    if let Err(err) = run(cli) {
        eprintln!("Error: {err:#}");
        std::process::exit(exit_codes::ERROR);
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Rank(args) => {
            let (file_config, loaded_from) = config::load_or_default(cli.config.as_deref());
            if let Some(path) = &loaded_from {
                tracing::debug!("Using config {}", path.display());
            }
            let overrides = AppConfig::builder()
                .output_format(args.output)
                .output_file(args.output_file)
                .no_color(cli.no_color)
                .show_breakdown(args.breakdown)
                .limit(args.limit.and_then(|n| usize::try_from(n).ok()))
                .build();
            let config =
                cli::resolve_rank_config(file_config, args.preset.as_deref(), &overrides)?;

            let exit_code = cli::run_rank(cli::RankCommand {
                batch_path: args.batch,
                sentiments_path: args.sentiments,
                narrative: args.narrative,
                config,
                quiet: cli.quiet,
            })?;
            exit_with(exit_code)
        }

        Commands::Quantity { titles, price } => {
            let (config, _) = config::load_or_default(cli.config.as_deref());
            exit_with(cli::run_quantity(&titles, price, &config)?)
        }

        Commands::Query {
            title,
            max_keywords,
        } => {
            let (config, _) = config::load_or_default(cli.config.as_deref());
            exit_with(cli::run_query(&title, max_keywords, &config)?)
        }

        Commands::Weights {
            sentiment,
            no_sentiment,
        } => {
            let filter = match (sentiment, no_sentiment) {
                (true, _) => Some(true),
                (_, true) => Some(false),
                _ => None,
            };
            exit_with(cli::run_weights(filter)?)
        }

        Commands::Config { action } => match action {
            ConfigAction::Show => {
                let (config, loaded_from) = config::load_or_default(cli.config.as_deref());
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
                    std::env::current_dir()
                        .ok()
                        .map(|p| p.display().to_string()),
                    config::user_config_dir().map(|p| p.display().to_string()),
                    dirs::home_dir().map(|p| p.display().to_string()),
                ];
                eprintln!("Config file search paths (in order, git root after the first):");
                for path in search_paths.into_iter().flatten() {
                    eprintln!("  {path}");
                }
                eprintln!();
                eprintln!("Recognized file names:");
                for name in CONFIG_FILE_NAMES {
                    eprintln!("  {name}");
                }
                eprintln!();
                eprintln!("Presets:");
                for preset in ConfigPreset::all() {
                    eprintln!("  {:<10} {}", preset.name(), preset.description());
                }
                eprintln!();
                match config::discover_config_file(cli.config.as_deref()) {
                    Some(path) => eprintln!("Active config file: {}", path.display()),
                    None => eprintln!("No config file found."),
                }
                Ok(())
            }
            ConfigAction::Init => {
                let target = std::env::current_dir()
                    .context("cannot determine current directory")?
                    .join(CONFIG_FILE_NAMES[0]);
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
            ConfigAction::Schema { output } => {
                let schema =
                    config::generate_json_schema().context("failed to serialize schema")?;
                match output {
                    Some(path) => {
                        std::fs::write(&path, &schema)
                            .with_context(|| format!("failed to write {}", path.display()))?;
                        eprintln!("Schema written to {}", path.display());
                    }
                    None => println!("{schema}"),
                }
                Ok(())
            }
        },

        Commands::Completions { shell } => {
            generate(shell, &mut Cli::command(), "product-ranker", &mut io::stdout());
            Ok(())
        }
    }
}

/// Exit the process when a handler asks for a non-zero code.
fn exit_with(exit_code: i32) -> Result<()> {
    if exit_code != 0 {
        std::process::exit(exit_code);
    }
    Ok(())
}
