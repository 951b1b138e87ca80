//! ohlczoom CLI - fetch OHLC series and replay pinch-to-zoom views.

use anyhow::Result;
use clap::{Args, CommandFactory, Parser, Subcommand};
use ohlczoom_lib::Field;
use std::path::PathBuf;

mod commands;
mod display;
mod telemetry;

use display::{Format, TickScopeArg};

#[derive(Parser)]
#[command(name = "ohlczoom")]
#[command(about = "Fetch OHLC series and replay pinch-to-zoom chart views", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Quiet mode (suppress progress and log output)
    #[arg(short, long, global = true)]
    quiet: bool,
}

/// Where the series comes from.
#[derive(Args, Clone, Debug)]
struct SourceArgs {
    /// History endpoint URL. Defaults to the AAPL history endpoint.
    #[arg(long, conflicts_with = "input")]
    url: Option<String>,

    /// Read the `{ symbol, data }` envelope from a local JSON file instead
    #[arg(long)]
    input: Option<PathBuf>,
}

/// How the view is set up before any interaction.
#[derive(Args, Clone, Debug)]
struct ViewArgs {
    /// View config file (JSON)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Fields to hide, comma separated (open,high,low,close)
    #[arg(long, value_delimiter = ',')]
    hide: Vec<Field>,

    /// Fields the value axis spans (overrides the config file)
    #[arg(long, value_enum)]
    tick_scope: Option<TickScopeArg>,
}

/// Where and how the frame is written.
#[derive(Args, Clone, Debug)]
struct OutputArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value = "csv")]
    format: Format,

    /// Output file path. Defaults to stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Download the raw series and export it
    Fetch {
        /// History endpoint URL. Defaults to the AAPL history endpoint.
        #[arg(long)]
        url: Option<String>,

        /// Output file path. Defaults to <symbol>.<format>
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "csv")]
        format: Format,
    },

    /// Render one chart frame at a zoom factor
    View {
        #[command(flatten)]
        source: SourceArgs,

        #[command(flatten)]
        view: ViewArgs,

        #[command(flatten)]
        output: OutputArgs,

        /// Zoom factor, applied as a single pinch from 1
        #[arg(long, default_value = "1")]
        factor: f64,
    },

    /// Apply a scripted event sequence and print each step
    Replay {
        /// Comma separated events: start, update:<delta>, end, pinch:<delta>,
        /// toggle:<field>, reset
        #[arg(long)]
        events: String,

        #[command(flatten)]
        source: SourceArgs,

        #[command(flatten)]
        view: ViewArgs,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Explore the chart with interactive prompts
    Interactive {
        #[command(flatten)]
        source: SourceArgs,

        #[command(flatten)]
        view: ViewArgs,

        /// Format used by "show frame"
        #[arg(short, long, value_enum, default_value = "csv")]
        format: Format,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    telemetry::init(cli.verbose, cli.quiet);

    // Show help if no command provided
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    match command {
        Commands::Fetch {
            url,
            output,
            format,
        } => commands::fetch::fetch(url, output, format, cli.quiet).await,
        Commands::View {
            source,
            view,
            output,
            factor,
        } => commands::view::view(source, view, output, factor, cli.quiet).await,
        Commands::Replay {
            events,
            source,
            view,
            output,
        } => commands::replay::replay(&events, source, view, output, cli.quiet).await,
        Commands::Interactive {
            source,
            view,
            format,
        } => commands::interactive::interactive(source, view, format, cli.quiet).await,
    }
}
