//! reportstats - report corpus statistics and word-frequency analyzer
//!
//! Scans the generator's reports directory, computes per-file length
//! statistics and word frequency through a tokenizer collaborator, and
//! aggregates totals, averages, and a length trend across the corpus. The
//! summary is a Markdown report; chart images come from an external
//! plotting collaborator and are best-effort.
//!
//! # Modules
//!
//! - [`analyzer`] - Per-file statistics and corpus aggregation
//! - [`tokenize`] - Tokenizer collaborator and frequency counting
//! - [`chart`] - Chart rendering collaborator
//! - [`report`] - Markdown summary output

pub mod analyzer;
pub mod chart;
pub mod report;
pub mod tokenize;

// Re-export commonly used types
pub use analyzer::{AnalysisResult, FileStats, analyze_all, analyze_file, date_label};
pub use chart::{ChartError, ChartRenderer, MatplotlibChart, NullChart, detect_renderer};
pub use report::{STATS_DIR, TREND_CHART, WORD_CLOUD, render_markdown, report_filename};
pub use tokenize::{DEFAULT_TOP_N, STOP_WORDS, Tokenizer, UnicodeTokenizer, word_frequency};
