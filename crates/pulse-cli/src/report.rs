//! Plain-text rendering of a channel report.
//!
//! Display rounding happens here and only here; the pipeline keeps exact
//! values.

use std::fmt::Write as _;

use pulse_analytics::{ChannelReport, SampleStatus};

/// Renders the report as the text block the CLI prints.
#[must_use]
pub(crate) fn render_report(report: &ChannelReport) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "Channel: @{} (niche: {})", report.channel, report.niche);
    let _ = writeln!(out, "Posts analyzed: {}", report.records.len());

    if let SampleStatus::Insufficient { have, need } = report.sample {
        let _ = writeln!(
            out,
            "warning: only {have} usable posts (need {need}); treat the numbers below as indicative"
        );
    }

    let _ = writeln!(
        out,
        "Views: avg {:.0} | peak {} | latest {}",
        report.stats.mean_views, report.stats.peak_views, report.stats.latest_views
    );

    match report.timing.best_hour {
        Some(hour) => {
            let _ = writeln!(
                out,
                "Best posting hour: {hour:02}:00 MSK ({:+.1}% vs average)",
                report.timing.uplift_pct
            );
        }
        None => {
            let _ = writeln!(out, "Best posting hour: unknown (no timed posts)");
        }
    }
    for bucket in &report.timing.buckets {
        let _ = writeln!(
            out,
            "  {:02}:00 — avg {:.0} views over {} post(s)",
            bucket.hour, bucket.mean_views, bucket.sample_count
        );
    }

    let _ = writeln!(out, "Audience quality: {}/100", report.quality.value);
    for reason in &report.quality.reasons {
        let _ = writeln!(out, "  - {reason}");
    }
    let _ = writeln!(out, "Fake audience probability: {}/100", report.fraud.value);
    for reason in &report.fraud.reasons {
        let _ = writeln!(out, "  - {reason}");
    }

    let _ = writeln!(
        out,
        "Price per post: ${:.2} now, ${:.2} after schedule optimization (CPM {:.0})",
        report.monetization.current, report.monetization.optimized, report.monetization.cpm
    );

    let _ = writeln!(out, "Recommendations:");
    for line in &report.quality.recommendations {
        let _ = writeln!(out, "  * {line}");
    }
    for line in &report.fraud.recommendations {
        let _ = writeln!(out, "  * {line}");
    }

    out
}
