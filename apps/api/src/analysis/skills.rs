#![allow(dead_code)]

//! Skill vocabulary and extraction.
//!
//! Skills are single lowercase tokens. A normalized text's skill set is the
//! intersection of its unique tokens with the vocabulary; multi-word skills
//! ("machine learning") are only ever seen as their separate tokens.

use std::collections::{BTreeSet, HashSet};
use std::path::Path;
use std::sync::Arc;

use serde::Serialize;
use thiserror::Error;

use crate::analysis::normalizer::NormalizedText;

/// Built-in ATS skill list.
const DEFAULT_SKILLS: &[&str] = &[
    "python", "java", "javascript", "react", "next", "node", "express",
    "html", "css", "bootstrap", "mysql", "mongodb", "docker",
    "aws", "cloud", "rest", "api", "git", "github",
    "data", "structures", "algorithms", "dsa",
    "machine", "learning", "ai", "nlp", "cnn",
    "selenium", "automation", "sql",
];

#[derive(Debug, Error)]
pub enum VocabularyError {
    #[error("Failed to read skill vocabulary from {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid skill token '{0}': skills must be single words of letters a-z")]
    InvalidToken(String),

    #[error("Skill vocabulary is empty")]
    Empty,
}

/// Read-only set of skill tokens. Never mutated after construction.
#[derive(Debug, Clone)]
pub struct SkillVocabulary {
    tokens: HashSet<String>,
}

impl Default for SkillVocabulary {
    fn default() -> Self {
        Self {
            tokens: DEFAULT_SKILLS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl SkillVocabulary {
    /// Builds a vocabulary from arbitrary tokens. Tokens are trimmed and
    /// lowercased; anything that would not survive normalization as a single
    /// word is rejected, since it could never match.
    pub fn from_tokens<I, S>(tokens: I) -> Result<Self, VocabularyError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = HashSet::new();
        for raw in tokens {
            let token = raw.as_ref().trim().to_lowercase();
            if token.is_empty() {
                continue;
            }
            if !token.chars().all(|c| c.is_ascii_lowercase()) {
                return Err(VocabularyError::InvalidToken(token));
            }
            set.insert(token);
        }

        if set.is_empty() {
            return Err(VocabularyError::Empty);
        }
        Ok(Self { tokens: set })
    }

    /// Parses a vocabulary listing: tokens separated by newlines or commas,
    /// `#` starts a comment that runs to the end of the line.
    pub fn parse(listing: &str) -> Result<Self, VocabularyError> {
        let tokens = listing
            .lines()
            .map(|line| line.split('#').next().unwrap_or(""))
            .flat_map(|line| line.split(','));
        Self::from_tokens(tokens)
    }

    pub fn from_file(path: &Path) -> Result<Self, VocabularyError> {
        let listing = std::fs::read_to_string(path).map_err(|source| VocabularyError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::parse(&listing)
    }

    pub fn contains(&self, token: &str) -> bool {
        self.tokens.contains(token)
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }
}

/// A set of detected skills, kept sorted so reports are stable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SkillSet(BTreeSet<String>);

impl SkillSet {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, skill: &str) -> bool {
        self.0.contains(skill)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn intersection(&self, other: &SkillSet) -> SkillSet {
        SkillSet(self.0.intersection(&other.0).cloned().collect())
    }

    /// Skills in `self` that `other` lacks.
    pub fn difference(&self, other: &SkillSet) -> SkillSet {
        SkillSet(self.0.difference(&other.0).cloned().collect())
    }
}

impl<S: Into<String>> FromIterator<S> for SkillSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        SkillSet(iter.into_iter().map(Into::into).collect())
    }
}

#[derive(Debug, Clone)]
pub struct SkillExtractor {
    vocabulary: Arc<SkillVocabulary>,
}

impl SkillExtractor {
    pub fn new(vocabulary: Arc<SkillVocabulary>) -> Self {
        Self { vocabulary }
    }

    pub fn extract_skills(&self, text: &NormalizedText) -> SkillSet {
        text.tokens()
            .filter(|token| self.vocabulary.contains(token))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::normalizer::{Stopwords, TextNormalizer};

    fn normalized(raw: &str) -> NormalizedText {
        TextNormalizer::new(&Stopwords::english()).normalize(raw)
    }

    fn default_extractor() -> SkillExtractor {
        SkillExtractor::new(Arc::new(SkillVocabulary::default()))
    }

    #[test]
    fn test_default_vocabulary_size() {
        assert_eq!(SkillVocabulary::default().len(), 31);
    }

    #[test]
    fn test_extracts_only_vocabulary_tokens() {
        let skills = default_extractor()
            .extract_skills(&normalized("Shipped Python services on AWS with Kubernetes"));
        assert_eq!(skills.iter().collect::<Vec<_>>(), vec!["aws", "python"]);
    }

    #[test]
    fn test_duplicates_collapse() {
        let skills = default_extractor().extract_skills(&normalized("docker docker DOCKER"));
        assert_eq!(skills.len(), 1);
        assert!(skills.contains("docker"));
    }

    #[test]
    fn test_multi_word_skill_seen_as_separate_tokens() {
        let skills = default_extractor().extract_skills(&normalized("Machine Learning"));
        assert!(skills.contains("machine"));
        assert!(skills.contains("learning"));
        assert!(!skills.contains("machine learning"));
    }

    #[test]
    fn test_dotted_names_split_before_matching() {
        // "node.js" normalizes to "node js"; only "node" is a vocabulary token.
        let skills = default_extractor().extract_skills(&normalized("Node.js and Next.js"));
        assert_eq!(skills.iter().collect::<Vec<_>>(), vec!["next", "node"]);
    }

    #[test]
    fn test_empty_text_has_no_skills() {
        assert!(default_extractor().extract_skills(&normalized("")).is_empty());
    }

    #[test]
    fn test_injected_vocabulary_is_used() {
        let vocabulary = SkillVocabulary::from_tokens(["rust", "tokio"]).unwrap();
        let extractor = SkillExtractor::new(Arc::new(vocabulary));
        let skills = extractor.extract_skills(&normalized("Rust, Tokio and Python"));
        assert_eq!(skills.iter().collect::<Vec<_>>(), vec!["rust", "tokio"]);
    }

    #[test]
    fn test_from_tokens_lowercases_and_trims() {
        let vocabulary = SkillVocabulary::from_tokens(["  Rust ", "GO", ""]).unwrap();
        assert_eq!(vocabulary.len(), 2);
        assert!(vocabulary.contains("rust"));
        assert!(vocabulary.contains("go"));
    }

    #[test]
    fn test_from_tokens_rejects_multi_word_and_symbols() {
        assert!(matches!(
            SkillVocabulary::from_tokens(["machine learning"]),
            Err(VocabularyError::InvalidToken(_))
        ));
        assert!(matches!(
            SkillVocabulary::from_tokens(["c++"]),
            Err(VocabularyError::InvalidToken(_))
        ));
    }

    #[test]
    fn test_from_tokens_rejects_empty() {
        assert!(matches!(
            SkillVocabulary::from_tokens(Vec::<String>::new()),
            Err(VocabularyError::Empty)
        ));
    }

    #[test]
    fn test_parse_listing_with_comments_and_commas() {
        let listing = "# backend\nrust, go\n\nkafka # streaming\n";
        let vocabulary = SkillVocabulary::parse(listing).unwrap();
        assert_eq!(vocabulary.len(), 3);
        assert!(vocabulary.contains("kafka"));
    }

    #[test]
    fn test_from_file_reports_missing_path() {
        let err = SkillVocabulary::from_file(Path::new("/nonexistent/skills.txt")).unwrap_err();
        assert!(matches!(err, VocabularyError::Io { .. }));
        assert!(err.to_string().contains("/nonexistent/skills.txt"));
    }

    #[test]
    fn test_skill_set_intersection_and_difference() {
        let resume: SkillSet = ["python", "react"].into_iter().collect();
        let job: SkillSet = ["python", "docker"].into_iter().collect();
        assert_eq!(resume.intersection(&job).iter().collect::<Vec<_>>(), vec!["python"]);
        assert_eq!(job.difference(&resume).iter().collect::<Vec<_>>(), vec!["docker"]);
    }
}
