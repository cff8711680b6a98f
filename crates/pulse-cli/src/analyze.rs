//! Command handlers for the CLI.
//!
//! These are called from `main` after config and logging are established.
//! File and argument problems surface as `anyhow` errors at the binary
//! boundary; the analysis itself cannot fail.

use std::path::Path;

use pulse_analytics::{run_analysis, AnalysisMode, AnalysisOptions, AnalysisPolicy};
use pulse_core::{
    normalize_username, AppConfig, AudienceSnapshot, CpmTable, Niche, RawPost,
};
use pulse_telemetr::{AudienceProvider, TelemetrClient};

use crate::report::render_report;
use crate::AnalyzeArgs;

/// Run the analysis pipeline over a frozen post snapshot and print the
/// report.
pub(crate) fn run_analyze(config: &AppConfig, args: &AnalyzeArgs) -> anyhow::Result<()> {
    let raw_posts = load_posts(&args.input)?;
    tracing::debug!(
        posts = raw_posts.len(),
        input = %args.input.display(),
        "loaded post snapshot"
    );
    let audience = args
        .audience
        .as_deref()
        .map(load_audience)
        .transpose()?;

    let rates = match config.rates_path.as_deref() {
        Some(path) => CpmTable::load(path)?,
        None => CpmTable::default(),
    };

    let options = AnalysisOptions {
        channel: normalize_username(&args.channel),
        niche: args.niche.as_deref().map(parse_niche).transpose()?,
        mode: parse_mode(&args.mode)?,
        post_limit: args.limit.unwrap_or(config.post_limit),
    };

    let report = run_analysis(
        &raw_posts,
        audience.as_ref(),
        &options,
        &AnalysisPolicy::with_rates(rates),
    );

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", render_report(&report));
    }

    Ok(())
}

/// Fetch a live audience snapshot through the Telemetr client and print it
/// as JSON.
pub(crate) async fn run_audience(config: &AppConfig, channel: &str) -> anyhow::Result<()> {
    let api_key = config
        .telemetr_api_key
        .as_deref()
        .ok_or_else(|| anyhow::anyhow!("TELEMETR_API_KEY is not set"))?;

    let client = TelemetrClient::new(api_key, config.telemetr_timeout_secs)?;
    let channel = normalize_username(channel);

    match client.audience_snapshot(&channel).await? {
        Some(snapshot) => println!("{}", serde_json::to_string_pretty(&snapshot)?),
        None => println!("no audience data for @{channel}"),
    }

    Ok(())
}

fn load_posts(path: &Path) -> anyhow::Result<Vec<RawPost>> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("failed to read posts file {}: {e}", path.display()))?;
    let posts: Vec<RawPost> = serde_json::from_str(&content)
        .map_err(|e| anyhow::anyhow!("failed to parse posts file {}: {e}", path.display()))?;
    Ok(posts)
}

fn load_audience(path: &Path) -> anyhow::Result<AudienceSnapshot> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("failed to read audience file {}: {e}", path.display()))?;
    let snapshot: AudienceSnapshot = serde_json::from_str(&content)
        .map_err(|e| anyhow::anyhow!("failed to parse audience file {}: {e}", path.display()))?;
    Ok(snapshot)
}

fn parse_niche(raw: &str) -> anyhow::Result<Niche> {
    match raw.to_lowercase().as_str() {
        "it" => Ok(Niche::It),
        "news" => Ok(Niche::News),
        "sport" => Ok(Niche::Sport),
        "business" => Ok(Niche::Business),
        "finance" => Ok(Niche::Finance),
        "other" => Ok(Niche::Other),
        other => anyhow::bail!(
            "unknown niche '{other}' (expected it, news, sport, business, finance, other)"
        ),
    }
}

fn parse_mode(raw: &str) -> anyhow::Result<AnalysisMode> {
    match raw.to_lowercase().as_str() {
        "quick" => Ok(AnalysisMode::Quick),
        "deep" => Ok(AnalysisMode::Deep),
        other => anyhow::bail!("unknown mode '{other}' (expected quick or deep)"),
    }
}
