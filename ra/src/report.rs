//! Markdown analysis report
//!
//! The summary document embeds the aggregate numbers, the global top-10
//! words, and references to the chart images. Charts are best-effort; the
//! references are written either way so the reader knows where to look.

use chrono::Local;

use crate::analyzer::AnalysisResult;
use crate::tokenize::DEFAULT_TOP_N;

/// Directory where analysis artifacts are written
pub const STATS_DIR: &str = "statistics";

/// Trend chart artifact name
pub const TREND_CHART: &str = "trend_chart.png";

/// Word cloud artifact name
pub const WORD_CLOUD: &str = "word_cloud.png";

/// Render the Markdown analysis report
pub fn render_markdown(result: &AnalysisResult, generated_at: &str) -> String {
    let mut report = format!(
        "# Report analysis\nGenerated: {generated_at}\n\n\
         ## Overall statistics\n\
         - Reports: {}\n\
         - Total characters: {}\n\
         - Average characters: {:.2}\n\n\
         ## Top words (Top {DEFAULT_TOP_N})\n",
        result.report_count, result.total_chars, result.average_chars,
    );

    for (word, freq) in result.top_words(DEFAULT_TOP_N) {
        report.push_str(&format!("- {word}: {freq}\n"));
    }

    report.push_str(&format!(
        "\n## Charts\n\
         1. Length trend: {STATS_DIR}/{TREND_CHART}\n\
         2. Word cloud: {STATS_DIR}/{WORD_CLOUD}\n\n\
         ## Conclusions\n\
         1. The length trend shows how detailed the reports have been over time\n\
         2. The top words reflect the main areas of work\n\
         3. The charts give a visual read on how report quality evolves\n"
    ));

    report
}

/// Output file name for today's analysis report
pub fn report_filename() -> String {
    format!("analysis_report_{}.md", Local::now().format("%Y%m%d"))
}
