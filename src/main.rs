//! folio: a single-page portfolio for the terminal.

use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use folio::{cli, PrintFormat};

#[derive(Parser)]
#[command(name = "folio")]
#[command(version)]
#[command(about = "A single-page portfolio for the terminal", long_about = None)]
#[command(after_help = "EXAMPLES:
    # Browse interactively (default)
    folio

    # Start with a specific theme
    folio show --theme light

    # Plain text for pagers and pipes
    folio print | less

    # Machine-readable output
    folio print --format json > portfolio.json")]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Arguments for the `show` subcommand
#[derive(Parser)]
struct ShowArgs {
    /// Theme to start with (dark, light, high-contrast); persisted for
    /// later runs
    #[arg(long)]
    theme: Option<String>,
}

/// Arguments for the `print` subcommand
#[derive(Parser)]
struct PrintArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    format: PrintFormat,

    /// Output file path (stdout if not specified)
    #[arg(short = 'O', long)]
    output: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse the portfolio interactively (default)
    Show(ShowArgs),

    /// Print the portfolio to stdout
    Print(PrintArgs),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() -> Result<()> {
    let args = Cli::parse();

    // Initialize logging
    let log_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    match args.command {
        None => cli::run_show(None),
        Some(Commands::Show(show)) => cli::run_show(show.theme),
        Some(Commands::Print(print)) => cli::run_print(print.format, print.output),
        Some(Commands::Completions { shell }) => {
            generate(shell, &mut Cli::command(), "folio", &mut io::stdout());
            Ok(())
        }
    }
}
