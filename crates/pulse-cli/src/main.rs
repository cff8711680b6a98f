use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

mod analyze;
mod report;


#[derive(Debug, Parser)]
#[command(name = "pulse-cli")]
#[command(about = "ChannelPulse command line interface")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Analyze a frozen post snapshot and print the channel report.
    Analyze(AnalyzeArgs),
    /// Fetch a live audience snapshot and print it as JSON.
    Audience {
        /// Channel username (bare, `@name`, or a pasted link).
        #[arg(long)]
        channel: String,
    },
}

#[derive(Debug, Args)]
struct AnalyzeArgs {
    /// Path to a JSON array of raw posts.
    #[arg(long)]
    input: PathBuf,

    /// Channel username (bare, `@name`, or a pasted link).
    #[arg(long)]
    channel: String,

    /// Optional audience snapshot JSON file.
    #[arg(long)]
    audience: Option<PathBuf>,

    /// Niche override: it, news, sport, business, finance, other.
    /// Classified from the channel name when omitted.
    #[arg(long)]
    niche: Option<String>,

    /// Analysis mode: quick (3-post minimum) or deep (5-post minimum).
    #[arg(long, default_value = "quick")]
    mode: String,

    /// Maximum number of posts to analyze; defaults to PULSE_POST_LIMIT.
    #[arg(long)]
    limit: Option<usize>,

    /// Print the report as JSON instead of text.
    #[arg(long, default_value_t = false)]
    json: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = pulse_core::load_app_config()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_level)),
        )
        .init();

    let cli = Cli::parse();
    match cli.command {
        Some(Commands::Analyze(args)) => analyze::run_analyze(&config, &args)?,
        Some(Commands::Audience { channel }) => analyze::run_audience(&config, &channel).await?,
        None => println!("pulse-cli: use `analyze` or `audience` (see --help)"),
    }

    Ok(())
}
