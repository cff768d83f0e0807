#![allow(dead_code)]

//! Score combination — blends lexical similarity and skill overlap into the
//! final ATS score.
//!
//! `final = 0.3 × similarity + 0.7 × skill`, where `skill` is the share of
//! the job's skills that the resume also mentions. All three percentages are
//! rounded to two decimals only after blending.
//!
//! `AppState` holds an `Arc<dyn MatchScorer>`; `ScoreCombiner` is the only
//! backend today.

use std::sync::Arc;

use serde::Serialize;
use tracing::debug;

use crate::analysis::normalizer::{Stopwords, TextNormalizer};
use crate::analysis::similarity::{raw_similarity, round2};
use crate::analysis::skills::{SkillExtractor, SkillSet};

pub const SIMILARITY_WEIGHT: f64 = 0.3;
pub const SKILL_WEIGHT: f64 = 0.7;

// ────────────────────────────────────────────────────────────────────────────
// Output data models
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreWeights {
    pub similarity: f64,
    pub skill: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            similarity: SIMILARITY_WEIGHT,
            skill: SKILL_WEIGHT,
        }
    }
}

/// The three percentages handed to the display layer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreTriple {
    pub final_score: f64,
    pub similarity_score: f64,
    pub skill_score: f64,
}

impl ScoreTriple {
    /// Final score clamped to the chart's 0–100 axis.
    pub fn bar_percentage(&self) -> f64 {
        self.final_score.clamp(0.0, 100.0)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SkillBreakdown {
    pub resume: SkillSet,
    pub job: SkillSet,
    /// Job skills the resume also mentions.
    pub matched: SkillSet,
    /// Job skills the resume lacks.
    pub missing: SkillSet,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchReport {
    pub scores: ScoreTriple,
    pub skills: SkillBreakdown,
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// Scores a resume against a job description. Total over all string input.
pub trait MatchScorer: Send + Sync {
    fn score(&self, resume_raw: &str, job_raw: &str) -> MatchReport;
}

// ────────────────────────────────────────────────────────────────────────────
// ScoreCombiner
// ────────────────────────────────────────────────────────────────────────────

pub struct ScoreCombiner {
    stopwords: Arc<Stopwords>,
    extractor: SkillExtractor,
    weights: ScoreWeights,
}

impl ScoreCombiner {
    pub fn new(stopwords: Arc<Stopwords>, extractor: SkillExtractor) -> Self {
        Self {
            stopwords,
            extractor,
            weights: ScoreWeights::default(),
        }
    }

    pub fn weights(&self) -> ScoreWeights {
        self.weights
    }

    pub fn combine(&self, resume_raw: &str, job_raw: &str) -> ScoreTriple {
        self.score(resume_raw, job_raw).scores
    }
}

impl MatchScorer for ScoreCombiner {
    fn score(&self, resume_raw: &str, job_raw: &str) -> MatchReport {
        let normalizer = TextNormalizer::new(&self.stopwords);
        let resume = normalizer.normalize(resume_raw);
        let job = normalizer.normalize(job_raw);

        let similarity = raw_similarity(&resume, &job);

        let resume_skills = self.extractor.extract_skills(&resume);
        let job_skills = self.extractor.extract_skills(&job);
        let matched = resume_skills.intersection(&job_skills);
        let missing = job_skills.difference(&resume_skills);

        let skill = skill_overlap(matched.len(), job_skills.len());
        let final_score = self.weights.similarity * similarity + self.weights.skill * skill;

        debug!(
            resume_tokens = resume.tokens().count(),
            job_tokens = job.tokens().count(),
            resume_skills = resume_skills.len(),
            job_skills = job_skills.len(),
            matched_skills = matched.len(),
            "Scored resume against job description"
        );

        MatchReport {
            scores: ScoreTriple {
                final_score: round2(final_score),
                similarity_score: round2(similarity),
                skill_score: round2(skill),
            },
            skills: SkillBreakdown {
                resume: resume_skills,
                job: job_skills,
                matched,
                missing,
            },
        }
    }
}

/// Percentage of job skills covered. Zero when the job lists none.
fn skill_overlap(matched: usize, job_total: usize) -> f64 {
    if job_total == 0 {
        return 0.0;
    }
    matched as f64 / job_total as f64 * 100.0
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
