// SPDX-License-Identifier: PMPL-1.0-or-later
//! Readability metrics: syllable estimation, Gunning-Fog index and jargon ratio.
//!
//! These are heuristics. Syllables are approximated by counting vowel runs
//! and sentences by splitting on terminal punctuation, which is good enough
//! to rank paragraphs against a threshold but is not linguistically exact.

use crate::vocabulary::Vocabulary;
use regex::Regex;
use std::sync::LazyLock;

/// Paragraphs scoring above this Gunning-Fog index are flagged
pub const FOG_THRESHOLD: f64 = 12.0;

/// Paragraphs with a higher share of uncommon words are flagged
pub const JARGON_THRESHOLD: f64 = 0.2;

/// Words with at least this many syllables count as complex
pub const COMPLEX_WORD_SYLLABLES: usize = 3;

static VOWEL_RUN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[aeiouy]{1,2}").expect("valid regex"));

static WORD_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b\w+\b").expect("valid regex"));

/// Estimate syllables as the number of 1-2 character vowel runs.
///
/// A run of three vowels counts twice (`"eau"` is `"ea"` + `"u"`).
pub fn count_syllables(word: &str) -> usize {
    VOWEL_RUN_RE.find_iter(&word.to_lowercase()).count()
}

/// Non-blank fragments between `.`, `?` and `!`
pub fn sentences(text: &str) -> Vec<&str> {
    text.split(['.', '?', '!'])
        .filter(|s| !s.trim().is_empty())
        .collect()
}

/// Word tokens (`\w+` between word boundaries)
pub fn words(text: &str) -> Vec<&str> {
    WORD_RE.find_iter(text).map(|m| m.as_str()).collect()
}

/// Gunning-Fog index: `0.4 * (words/sentences + 100 * complex/words)`.
///
/// `None` when the text has no sentences or no words; such blocks are
/// skipped rather than scored.
pub fn gunning_fog(text: &str) -> Option<f64> {
    let sentence_count = sentences(text).len();
    let words = words(text);
    if sentence_count == 0 || words.is_empty() {
        return None;
    }

    let complex = words
        .iter()
        .filter(|w| count_syllables(w) >= COMPLEX_WORD_SYLLABLES)
        .count();
    let word_count = words.len() as f64;

    Some(0.4 * (word_count / sentence_count as f64 + 100.0 * complex as f64 / word_count))
}

/// Share of lowercased words not found in `vocabulary`, `None` for no words
pub fn jargon_ratio(text: &str, vocabulary: &Vocabulary) -> Option<f64> {
    let lowered = text.to_lowercase();
    let words = words(&lowered);
    if words.is_empty() {
        return None;
    }

    let uncommon = words.iter().filter(|w| !vocabulary.contains(w)).count();
    Some(uncommon as f64 / words.len() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_syllable_count() {
        assert_eq!(count_syllables("cat"), 1);
        assert_eq!(count_syllables("hello"), 2);
        assert!(count_syllables("beautiful") >= 2);
        assert_eq!(count_syllables("beautiful"), 4);
        assert_eq!(count_syllables("RHYTHM"), 1);
        assert_eq!(count_syllables("queue"), 2);
        assert_eq!(count_syllables("xyz"), 1);
        assert_eq!(count_syllables("brr"), 0);
        assert_eq!(count_syllables(""), 0);
    }

    #[test]
    fn test_sentences_skip_blank_fragments() {
        assert_eq!(sentences("One. Two?! Three"), vec!["One", " Two", " Three"]);
        assert!(sentences("...  ").is_empty());
    }

    #[test]
    fn test_words_include_digits() {
        assert_eq!(words("It's 2024, ok?"), vec!["It", "s", "2024", "ok"]);
    }

    #[test]
    fn test_gunning_fog_simple_text() {
        // 6 words, 2 sentences, no complex words: 0.4 * 3 = 1.2
        let fog = gunning_fog("The cat sat. The dog ran.").expect("scored");
        assert!((fog - 1.2).abs() < 1e-9, "got {}", fog);
    }

    #[test]
    fn test_gunning_fog_complex_text() {
        let text = "Institutional interoperability necessitates comprehensive \
                    organizational harmonization of heterogeneous infrastructure";
        let fog = gunning_fog(text).expect("scored");
        assert!(fog > FOG_THRESHOLD, "got {}", fog);
    }

    #[test]
    fn test_gunning_fog_skips_empty() {
        assert!(gunning_fog("").is_none());
        assert!(gunning_fog("   ").is_none());
        assert!(gunning_fog("?!.").is_none());
    }

    #[test]
    fn test_jargon_ratio() {
        let vocab = Vocabulary::from_words(["the", "cat", "sat"]);
        assert_eq!(jargon_ratio("The cat sat", &vocab), Some(0.0));
        assert_eq!(jargon_ratio("The cat sat quietly", &vocab), Some(0.25));
        assert!(jargon_ratio("", &vocab).is_none());
    }
}
