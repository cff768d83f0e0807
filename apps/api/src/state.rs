use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::info;

use crate::analysis::combiner::{MatchScorer, ScoreCombiner};
use crate::analysis::normalizer::Stopwords;
use crate::analysis::skills::{SkillExtractor, SkillVocabulary};
use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Scoring backend. Stopwords and skill vocabulary inside it are built
    /// once here and only read afterwards.
    pub scorer: Arc<dyn MatchScorer>,
}

impl AppState {
    pub fn from_config(config: Config) -> Result<Self> {
        let stopwords = Arc::new(Stopwords::english());

        let vocabulary = match &config.skill_vocabulary_path {
            Some(path) => SkillVocabulary::from_file(path)
                .with_context(|| format!("Could not load skill vocabulary from {}", path.display()))?,
            None => SkillVocabulary::default(),
        };
        info!(
            "Skill vocabulary loaded ({} skills, {} stopwords)",
            vocabulary.len(),
            stopwords.len()
        );

        let extractor = SkillExtractor::new(Arc::new(vocabulary));
        let scorer = Arc::new(ScoreCombiner::new(stopwords, extractor));

        Ok(AppState { config, scorer })
    }
}
