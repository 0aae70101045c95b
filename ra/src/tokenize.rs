//! Tokenization collaborator
//!
//! Word segmentation is a capability boundary: the analyzer only needs an
//! ordered token stream. The built-in tokenizer splits on Unicode word
//! boundaries; a smarter segmenter can be dropped in behind the trait.

use std::collections::HashMap;

use unicode_segmentation::UnicodeSegmentation;

/// Words excluded from frequency counting
pub const STOP_WORDS: &[&str] = &["的", "了", "和", "是", "就", "都", "而", "及", "与", "着"];

/// Default number of top words kept per file and reported globally
pub const DEFAULT_TOP_N: usize = 10;

/// Capability boundary for word segmentation
pub trait Tokenizer {
    /// Split text into an ordered sequence of tokens
    fn tokenize(&self, text: &str) -> Vec<String>;
}

/// Built-in tokenizer over UAX#29 word boundaries
#[derive(Debug, Default)]
pub struct UnicodeTokenizer;

impl Tokenizer for UnicodeTokenizer {
    fn tokenize(&self, text: &str) -> Vec<String> {
        text.unicode_words().map(str::to_string).collect()
    }
}

/// Count token frequency and keep the top `n`
///
/// Tokens of a single character and stop words are dropped before
/// counting. Ties rank alphabetically so output is stable.
pub fn word_frequency(text: &str, tokenizer: &dyn Tokenizer, n: usize) -> Vec<(String, usize)> {
    let mut counts: HashMap<String, usize> = HashMap::new();

    for token in tokenizer.tokenize(text) {
        if token.chars().count() <= 1 || STOP_WORDS.contains(&token.as_str()) {
            continue;
        }
        *counts.entry(token).or_insert(0) += 1;
    }

    let mut ranked: Vec<(String, usize)> = counts.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    ranked.truncate(n);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_splits_words() {
        let tokens = UnicodeTokenizer.tokenize("design work, design review");
        assert_eq!(tokens, vec!["design", "work", "design", "review"]);
    }

    #[test]
    fn test_word_frequency_counts_and_ranks() {
        let freq = word_frequency("aa bb aa cc aa bb", &UnicodeTokenizer, 10);
        assert_eq!(
            freq,
            vec![("aa".to_string(), 3), ("bb".to_string(), 2), ("cc".to_string(), 1)]
        );
    }

    #[test]
    fn test_word_frequency_drops_short_tokens() {
        let freq = word_frequency("a b a longer longer", &UnicodeTokenizer, 10);
        assert_eq!(freq, vec![("longer".to_string(), 2)]);
    }

    #[test]
    fn test_word_frequency_drops_stop_words() {
        // Stop-word filtering applies whatever the segmenter yields
        let freq = word_frequency("的 的 设计 设计 测试", &UnicodeTokenizer, 10);
        assert!(freq.iter().all(|(word, _)| word != "的"));
        assert!(freq.iter().any(|(word, _)| word == "设计"));
    }

    #[test]
    fn test_word_frequency_truncates_to_n() {
        let freq = word_frequency("aa bb cc dd ee", &UnicodeTokenizer, 2);
        assert_eq!(freq.len(), 2);
    }

    #[test]
    fn test_word_frequency_ties_rank_alphabetically() {
        let freq = word_frequency("bb aa", &UnicodeTokenizer, 10);
        assert_eq!(freq, vec![("aa".to_string(), 1), ("bb".to_string(), 1)]);
    }
}
