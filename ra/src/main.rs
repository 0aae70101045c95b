//! Report corpus analyzer CLI entry point
//!
//! No flags: reads `./config.json` for the reports directory and writes
//! its artifacts under `statistics/`.

use std::fs;
use std::path::Path;

use colored::Colorize;
use eyre::{Context, Result};
use tracing::warn;

use reportstats::analyzer::{self, AnalysisResult};
use reportstats::chart::{self, ChartError};
use reportstats::report;
use reportstats::tokenize::{DEFAULT_TOP_N, UnicodeTokenizer};
use weekreport::config::Config;

fn setup_logging() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()),
        )
        .init();
}

fn main() -> Result<()> {
    setup_logging();

    let config = Config::load(None);

    let result = analyzer::analyze_all(&config.reports_dir, &UnicodeTokenizer, DEFAULT_TOP_N)?;

    let stats_dir = Path::new(report::STATS_DIR);
    fs::create_dir_all(stats_dir).context("Failed to create statistics directory")?;

    render_charts(&result, stats_dir);

    let generated_at = chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
    let markdown = report::render_markdown(&result, &generated_at);

    let report_path = stats_dir.join(report::report_filename());
    fs::write(&report_path, markdown).context(format!("Failed to write report {}", report_path.display()))?;

    println!(
        "\n{} Analysis report written: {}",
        "✓".green(),
        report_path.display().to_string().cyan()
    );
    println!("  Reports analyzed: {}", result.report_count);
    println!("  Total characters: {}", result.total_chars);
    println!("  Average characters: {:.2}", result.average_chars);

    Ok(())
}

/// Best-effort chart rendering; a missing renderer only suppresses images
fn render_charts(result: &AnalysisResult, stats_dir: &Path) {
    let renderer = chart::detect_renderer();

    if !result.trend.is_empty() {
        match renderer.trend_chart(&result.trend, &stats_dir.join(report::TREND_CHART)) {
            Ok(()) => println!("{} Trend chart written", "✓".green()),
            Err(ChartError::Unavailable { hint }) => {
                warn!("Charts skipped: no renderer installed ({hint})");
                return;
            }
            Err(e) => warn!("Trend chart failed: {e}"),
        }
    }

    let top = result.top_words(DEFAULT_TOP_N);
    if !top.is_empty() {
        match renderer.word_cloud(&top, &stats_dir.join(report::WORD_CLOUD)) {
            Ok(()) => println!("{} Word cloud written", "✓".green()),
            Err(ChartError::Unavailable { hint }) => {
                warn!("Charts skipped: no renderer installed ({hint})");
            }
            Err(e) => warn!("Word cloud failed: {e}"),
        }
    }
}
