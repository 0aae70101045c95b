//! Report corpus analysis
//!
//! Every `*.txt` file in the reports directory is read independently;
//! per-file statistics feed an aggregate that is recomputed from scratch on
//! each run. Unreadable files are skipped, never fatal.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use eyre::{Context, Result};
use tracing::{debug, warn};

use crate::tokenize::{Tokenizer, word_frequency};

/// Statistics for a single report file
#[derive(Debug, Clone)]
pub struct FileStats {
    /// Unicode scalar values in the file
    pub char_count: usize,

    /// Segments split on blank-line boundaries
    pub paragraph_count: usize,

    pub line_count: usize,

    /// Per-file top-N word frequencies
    pub top_words: Vec<(String, usize)>,
}

/// Aggregate statistics for the whole corpus
#[derive(Debug, Default)]
pub struct AnalysisResult {
    pub report_count: usize,
    pub total_chars: usize,

    /// total / count, 0.0 for an empty corpus
    pub average_chars: f64,

    /// (date label, char count) per file, sorted by label
    pub trend: Vec<(String, usize)>,

    /// Global word -> frequency, summed from the per-file top-N lists
    pub word_freq: BTreeMap<String, usize>,
}

impl AnalysisResult {
    /// Global top `n` words, ties broken alphabetically
    pub fn top_words(&self, n: usize) -> Vec<(String, usize)> {
        let mut ranked: Vec<(String, usize)> = self
            .word_freq
            .iter()
            .map(|(word, count)| (word.clone(), *count))
            .collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        ranked.truncate(n);
        ranked
    }

    /// Fold one per-file top-N list into the global table (summed, not
    /// re-ranked until final output)
    pub fn merge_word_counts(&mut self, counts: &[(String, usize)]) {
        for (word, count) in counts {
            *self.word_freq.entry(word.clone()).or_insert(0) += count;
        }
    }
}

/// Analyze a single report file
pub fn analyze_file(path: &Path, tokenizer: &dyn Tokenizer, top_n: usize) -> Result<FileStats> {
    let content = fs::read_to_string(path).context(format!("Failed to read report {}", path.display()))?;

    Ok(FileStats {
        char_count: content.chars().count(),
        paragraph_count: content.split("\n\n").count(),
        line_count: content.lines().count(),
        top_words: word_frequency(&content, tokenizer, top_n),
    })
}

/// Trend label for a report file
///
/// The trailing underscore-delimited segment of the stem:
/// `alice_weekly_2024-01-07.txt` -> `2024-01-07`. A stem without
/// underscores degenerates to the whole stem but still counts toward
/// totals.
pub fn date_label(path: &Path) -> String {
    let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or("");
    stem.rsplit('_').next().unwrap_or(stem).to_string()
}

/// Analyze every `*.txt` report in the directory
pub fn analyze_all(reports_dir: &str, tokenizer: &dyn Tokenizer, top_n: usize) -> Result<AnalysisResult> {
    let mut result = AnalysisResult::default();

    let pattern = format!("{}/*.txt", reports_dir.trim_end_matches('/'));
    let paths = glob::glob(&pattern).context(format!("Invalid reports pattern: {pattern}"))?;

    for entry in paths {
        let path = match entry {
            Ok(path) => path,
            Err(e) => {
                warn!("Skipping unreadable directory entry: {e}");
                continue;
            }
        };

        let stats = match analyze_file(&path, tokenizer, top_n) {
            Ok(stats) => stats,
            Err(e) => {
                warn!("Skipping {}: {e:#}", path.display());
                continue;
            }
        };

        debug!(path = %path.display(), chars = stats.char_count, "Analyzed report");

        result.report_count += 1;
        result.total_chars += stats.char_count;
        result.trend.push((date_label(&path), stats.char_count));
        result.merge_word_counts(&stats.top_words);
    }

    if result.report_count > 0 {
        result.average_chars = result.total_chars as f64 / result.report_count as f64;
    }

    // Date-like labels sort correctly as plain strings
    result.trend.sort();

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenize::UnicodeTokenizer;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn counts(pairs: &[(&str, usize)]) -> Vec<(String, usize)> {
        pairs.iter().map(|(w, c)| (w.to_string(), *c)).collect()
    }

    #[test]
    fn test_merge_word_counts_sums() {
        let mut result = AnalysisResult::default();
        result.merge_word_counts(&counts(&[("设计", 5)]));
        result.merge_word_counts(&counts(&[("设计", 3), ("测试", 2)]));

        assert_eq!(result.word_freq["设计"], 8);
        assert_eq!(result.word_freq["测试"], 2);
    }

    #[test]
    fn test_empty_corpus_average_is_zero() {
        let temp = TempDir::new().unwrap();
        let reports_dir = temp.path().join("reports");
        fs::create_dir_all(&reports_dir).unwrap();

        let result = analyze_all(&reports_dir.to_string_lossy(), &UnicodeTokenizer, 10).unwrap();

        assert_eq!(result.report_count, 0);
        assert_eq!(result.total_chars, 0);
        assert_eq!(result.average_chars, 0.0);
        assert!(result.trend.is_empty());
    }

    #[test]
    fn test_date_label_takes_trailing_segment() {
        assert_eq!(date_label(&PathBuf::from("reports/alice_weekly_2024-01-07.txt")), "2024-01-07");
        assert_eq!(date_label(&PathBuf::from("reports/nounderscores.txt")), "nounderscores");
    }

    #[test]
    fn test_analyze_file_basic_counts() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("r.txt");
        fs::write(&path, "first paragraph here\n\nsecond paragraph here\n").unwrap();

        let stats = analyze_file(&path, &UnicodeTokenizer, 10).unwrap();

        assert_eq!(stats.paragraph_count, 2);
        assert_eq!(stats.line_count, 3);
        assert_eq!(stats.char_count, "first paragraph here\n\nsecond paragraph here\n".chars().count());
        assert!(stats.top_words.iter().any(|(w, c)| w == "paragraph" && *c == 2));
    }

    #[test]
    fn test_analyze_all_aggregates() {
        let temp = TempDir::new().unwrap();
        let reports_dir = temp.path().join("reports");
        fs::create_dir_all(&reports_dir).unwrap();

        fs::write(reports_dir.join("alice_2024-01-14.txt"), "design design review").unwrap();
        fs::write(reports_dir.join("alice_2024-01-07.txt"), "design work").unwrap();
        // Non-txt files are ignored
        fs::write(reports_dir.join("notes.md"), "ignored").unwrap();

        let result = analyze_all(&reports_dir.to_string_lossy(), &UnicodeTokenizer, 10).unwrap();

        assert_eq!(result.report_count, 2);
        assert_eq!(result.total_chars, "design design review".chars().count() + "design work".chars().count());
        assert!((result.average_chars - result.total_chars as f64 / 2.0).abs() < f64::EPSILON);

        // Trend sorted by label
        assert_eq!(result.trend[0].0, "2024-01-07");
        assert_eq!(result.trend[1].0, "2024-01-14");

        // Global frequency summed across files
        assert_eq!(result.word_freq["design"], 3);
    }

    #[test]
    fn test_analyze_all_skips_unreadable_files() {
        let temp = TempDir::new().unwrap();
        let reports_dir = temp.path().join("reports");
        fs::create_dir_all(&reports_dir).unwrap();

        fs::write(reports_dir.join("good_2024-01-07.txt"), "fine content").unwrap();
        // Invalid UTF-8 makes the read fail; the file is skipped, not fatal
        fs::write(reports_dir.join("bad_2024-01-08.txt"), [0xff, 0xfe, 0x80]).unwrap();

        let result = analyze_all(&reports_dir.to_string_lossy(), &UnicodeTokenizer, 10).unwrap();

        assert_eq!(result.report_count, 1);
        assert_eq!(result.trend.len(), 1);
    }

    #[test]
    fn test_top_words_ranks_global_table() {
        let mut result = AnalysisResult::default();
        result.merge_word_counts(&counts(&[("alpha", 1), ("beta", 5), ("gamma", 3)]));

        let top = result.top_words(2);
        assert_eq!(top, counts(&[("beta", 5), ("gamma", 3)]));
    }
}
