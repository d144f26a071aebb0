//! Filler-word classification.
//!
//! A transcript is a *genuine* interruption when it carries at least one word
//! that is not a configured filler ("uh", "umm", ...). Matching ignores case
//! and the punctuation speech-to-text engines attach to words.

use std::collections::HashSet;
use std::fmt;

/// Filler words used when none are configured.
pub const DEFAULT_FILLER_WORDS: [&str; 4] = ["uh", "umm", "hmm", "haan"];

/// Characters stripped from both ends of every word before comparison.
const STRIPPED_PUNCTUATION: [char; 4] = ['.', ',', '?', '!'];

/// An immutable, case-insensitive set of filler words.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FillerSet {
    words: HashSet<String>,
}

impl FillerSet {
    /// Builds a set from arbitrary words.
    ///
    /// Entries are normalized the same way transcript words are, so `"Umm,"`
    /// and `"umm"` name the same filler. Entries that normalize to nothing
    /// are dropped.
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| clean_word(&w.as_ref().trim().to_lowercase()).to_string())
            .filter(|w| !w.is_empty())
            .collect();
        Self { words }
    }

    /// Parses a comma-separated list such as `"uh, umm,hmm"`.
    pub fn parse_list(raw: &str) -> Self {
        Self::new(raw.split(','))
    }

    /// Returns `true` if `word` is a filler, ignoring case and punctuation.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(clean_word(&word.trim().to_lowercase()))
    }

    /// Number of distinct filler words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns `true` if no filler word is configured.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Returns `true` if `text` contains at least one non-filler word.
    ///
    /// Empty text, whitespace, and words made only of punctuation carry no
    /// signal and never count as genuine.
    pub fn is_genuine_interruption(&self, text: &str) -> bool {
        let normalized = text.to_lowercase();
        normalized
            .split_whitespace()
            .map(clean_word)
            .any(|word| !word.is_empty() && !self.words.contains(word))
    }
}

impl Default for FillerSet {
    fn default() -> Self {
        Self::new(DEFAULT_FILLER_WORDS)
    }
}

impl fmt::Display for FillerSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut words: Vec<&str> = self.words.iter().map(String::as_str).collect();
        words.sort_unstable();
        write!(f, "{}", words.join(","))
    }
}

fn clean_word(word: &str) -> &str {
    word.trim_matches(STRIPPED_PUNCTUATION.as_slice())
}

/// Free-function form of [`FillerSet::is_genuine_interruption`].
pub fn is_genuine_interruption(text: &str, fillers: &FillerSet) -> bool {
    fillers.is_genuine_interruption(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_fillers_is_not_genuine() {
        let fillers = FillerSet::default();
        assert!(!fillers.is_genuine_interruption("uh umm hmm"));
        assert!(!fillers.is_genuine_interruption("Haan... UMM?"));
    }

    #[test]
    fn test_single_real_word_is_genuine() {
        let fillers = FillerSet::default();
        assert!(fillers.is_genuine_interruption("umm okay stop"));
        assert!(fillers.is_genuine_interruption("wait uh umm"));
        assert!(fillers.is_genuine_interruption("uh hmm no hmm uh"));
    }

    #[test]
    fn test_punctuation_is_stripped() {
        let fillers = FillerSet::default();
        assert!(fillers.is_genuine_interruption("Stop!"));
        assert_eq!(
            fillers.is_genuine_interruption("Stop!"),
            fillers.is_genuine_interruption("stop")
        );
        assert!(!fillers.is_genuine_interruption("umm, uh."));
        assert!(!fillers.is_genuine_interruption("?hmm!"));
    }

    #[test]
    fn test_empty_and_punctuation_only_are_not_genuine() {
        let fillers = FillerSet::default();
        assert!(!fillers.is_genuine_interruption(""));
        assert!(!fillers.is_genuine_interruption("   "));
        assert!(!fillers.is_genuine_interruption("... ?! ,"));
    }

    #[test]
    fn test_classification_is_repeatable() {
        let fillers = FillerSet::default();
        for text in ["umm okay stop", "uh", "", "Stop!", "hmm, haan"] {
            assert_eq!(
                fillers.is_genuine_interruption(text),
                is_genuine_interruption(text, &fillers)
            );
        }
    }

    #[test]
    fn test_parse_list_normalizes_entries() {
        let fillers = FillerSet::parse_list(" Uh, UMM ,,hmm. ");
        assert_eq!(fillers.len(), 3);
        assert!(fillers.contains("uh"));
        assert!(fillers.contains("Umm!"));
        assert!(fillers.contains("hmm"));
        assert!(!fillers.contains("haan"));
        assert_eq!(fillers.to_string(), "hmm,uh,umm");
    }

    #[test]
    fn test_empty_set_treats_every_word_as_genuine() {
        let fillers = FillerSet::parse_list(" , ");
        assert!(fillers.is_empty());
        assert!(fillers.is_genuine_interruption("uh"));
        assert!(!fillers.is_genuine_interruption(" "));
    }
}
