#![allow(dead_code)]

//! Text normalization — lowercases, strips everything but `a-z`, collapses
//! whitespace and removes English stopwords.

use std::collections::HashSet;

use serde::Serialize;

/// English stopword list (NLTK corpus, 179 entries).
///
/// Entries with apostrophes are kept for completeness; they can never match a
/// normalized token because punctuation is stripped before stopword removal.
const ENGLISH_STOPWORDS: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "you're", "you've",
    "you'll", "you'd", "your", "yours", "yourself", "yourselves", "he", "him", "his", "himself",
    "she", "she's", "her", "hers", "herself", "it", "it's", "its", "itself", "they", "them",
    "their", "theirs", "themselves", "what", "which", "who", "whom", "this", "that", "that'll",
    "these", "those", "am", "is", "are", "was", "were", "be", "been", "being", "have", "has",
    "had", "having", "do", "does", "did", "doing", "a", "an", "the", "and", "but", "if", "or",
    "because", "as", "until", "while", "of", "at", "by", "for", "with", "about", "against",
    "between", "into", "through", "during", "before", "after", "above", "below", "to", "from",
    "up", "down", "in", "out", "on", "off", "over", "under", "again", "further", "then", "once",
    "here", "there", "when", "where", "why", "how", "all", "any", "both", "each", "few", "more",
    "most", "other", "some", "such", "no", "nor", "not", "only", "own", "same", "so", "than",
    "too", "very", "s", "t", "can", "will", "just", "don", "don't", "should", "should've", "now",
    "d", "ll", "m", "o", "re", "ve", "y", "ain", "aren", "aren't", "couldn", "couldn't", "didn",
    "didn't", "doesn", "doesn't", "hadn", "hadn't", "hasn", "hasn't", "haven", "haven't", "isn",
    "isn't", "ma", "mightn", "mightn't", "mustn", "mustn't", "needn", "needn't", "shan",
    "shan't", "shouldn", "shouldn't", "wasn", "wasn't", "weren", "weren't", "won", "won't",
    "wouldn", "wouldn't",
];

/// Immutable stopword set. Built once at startup and shared by reference.
#[derive(Debug, Clone)]
pub struct Stopwords {
    words: HashSet<&'static str>,
}

impl Stopwords {
    pub fn english() -> Self {
        Self {
            words: ENGLISH_STOPWORDS.iter().copied().collect(),
        }
    }

    pub fn contains(&self, token: &str) -> bool {
        self.words.contains(token)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }
}

/// Text after normalization: lowercase `a-z` words separated by single spaces.
///
/// Only [`TextNormalizer`] can build one, so every value upholds that shape.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct NormalizedText(String);

impl NormalizedText {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whitespace-separated tokens, duplicates included.
    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.0.split_whitespace()
    }
}

pub struct TextNormalizer<'a> {
    stopwords: &'a Stopwords,
}

impl<'a> TextNormalizer<'a> {
    pub fn new(stopwords: &'a Stopwords) -> Self {
        Self { stopwords }
    }

    /// Normalizes raw text. Total over any input; never fails.
    pub fn normalize(&self, raw: &str) -> NormalizedText {
        let cleaned: String = raw
            .to_lowercase()
            .chars()
            .map(|c| {
                if c.is_ascii_lowercase() || c.is_whitespace() {
                    c
                } else {
                    ' '
                }
            })
            .collect();

        // split_whitespace both collapses runs and trims the ends.
        let kept: Vec<&str> = cleaned
            .split_whitespace()
            .filter(|token| !self.stopwords.contains(token))
            .collect();

        NormalizedText(kept.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn normalize(raw: &str) -> NormalizedText {
        TextNormalizer::new(&Stopwords::english()).normalize(raw)
    }

    #[test]
    fn test_english_list_has_nltk_size() {
        assert_eq!(Stopwords::english().len(), 179);
    }

    #[test]
    fn test_lowercases_and_strips_punctuation() {
        let text = normalize("Senior RUST engineer: Tokio/Axum!");
        assert_eq!(text.as_str(), "senior rust engineer tokio axum");
    }

    #[test]
    fn test_digits_and_symbols_become_separators() {
        let text = normalize("C++ 5+ years, node.js & html5");
        assert_eq!(text.as_str(), "c years node js html");
    }

    #[test]
    fn test_collapses_whitespace_and_trims() {
        let text = normalize("  python\t\n\n   docker   ");
        assert_eq!(text.as_str(), "python docker");
    }

    #[test]
    fn test_removes_stopwords() {
        let text = normalize("I know Python and React, used Docker daily.");
        assert_eq!(text.as_str(), "know python react used docker daily");
    }

    #[test]
    fn test_contraction_fragments_are_stopwords() {
        // "don't" splits into "don" and "t", both of which are listed.
        let text = normalize("Don't stop learning");
        assert_eq!(text.as_str(), "stop learning");
    }

    #[test]
    fn test_non_ascii_letters_are_stripped() {
        let text = normalize("Café résumé naïve");
        // "ve" is itself a stopword fragment.
        assert_eq!(text.as_str(), "caf r sum na");
    }

    #[test]
    fn test_empty_and_punctuation_only_yield_empty() {
        assert!(normalize("").is_empty());
        assert!(normalize("!!! ... 123 ---").is_empty());
        assert!(normalize("the and of").is_empty());
    }

    #[test]
    fn test_normalization_is_idempotent() {
        let samples = [
            "Looking for Python, React, Docker experience.",
            "  MACHINE-learning & NLP (CNN) @ scale!! ",
            "",
            "a b c d e f g",
        ];
        for raw in samples {
            let once = normalize(raw);
            let twice = normalize(once.as_str());
            assert_eq!(once, twice, "not idempotent for {raw:?}");
        }
    }

    #[test]
    fn test_tokens_keep_duplicates() {
        let text = normalize("rust rust go");
        assert_eq!(text.tokens().collect::<Vec<_>>(), vec!["rust", "rust", "go"]);
    }
}
