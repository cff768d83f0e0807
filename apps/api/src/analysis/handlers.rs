//! Axum route handlers for the Analysis API.

use axum::{
    extract::{Multipart, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::analysis::combiner::{ScoreTriple, SkillBreakdown};
use crate::errors::AppError;
use crate::extraction::{extract_resume_text, extractor_for, Extraction};
use crate::state::AppState;

const MISSING_INPUT_MESSAGE: &str = "Please upload resume and paste job description";

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct AnalyzeTextRequest {
    #[serde(default)]
    pub resume_text: String,
    pub job_description: String,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub analysis_id: Uuid,
    pub scores: ScoreTriple,
    /// Final score clamped to 0–100 for bar rendering.
    pub bar_percentage: f64,
    pub skills: SkillBreakdown,
    pub extraction: Extraction,
}

struct ResumeUpload {
    content_type: Option<String>,
    file_name: Option<String>,
    bytes: Vec<u8>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/analyze
///
/// Multipart form with a `resume` file (PDF or plain text) and a
/// `job_description` text field. An unreadable resume is scored as empty
/// text rather than rejected.
pub async fn handle_analyze(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let mut resume: Option<ResumeUpload> = None;
    let mut job_description: Option<String> = None;

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "resume" => {
                let content_type = field.content_type().map(str::to_string);
                let file_name = field.file_name().map(str::to_string);
                let bytes = field.bytes().await?.to_vec();
                resume = Some(ResumeUpload {
                    content_type,
                    file_name,
                    bytes,
                });
            }
            "job_description" => job_description = Some(field.text().await?),
            _ => {}
        }
    }

    let (resume, job_description) = match (resume, job_description) {
        (Some(resume), Some(job)) if !job.trim().is_empty() => (resume, job),
        _ => return Err(AppError::Validation(MISSING_INPUT_MESSAGE.to_string())),
    };

    let extractor = extractor_for(resume.content_type.as_deref(), resume.file_name.as_deref());
    let extraction = extract_resume_text(extractor, resume.bytes).await;

    Ok(Json(run_analysis(&state, extraction, &job_description)))
}

/// POST /api/v1/analyze/text
///
/// Same scoring for callers that already hold the resume as text.
pub async fn handle_analyze_text(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeTextRequest>,
) -> Result<Json<AnalyzeResponse>, AppError> {
    if request.job_description.trim().is_empty() {
        return Err(AppError::Validation(
            "job_description cannot be empty".to_string(),
        ));
    }

    let extraction = Extraction::text(request.resume_text);
    Ok(Json(run_analysis(
        &state,
        extraction,
        &request.job_description,
    )))
}

fn run_analysis(state: &AppState, extraction: Extraction, job_description: &str) -> AnalyzeResponse {
    let analysis_id = Uuid::new_v4();
    let report = state.scorer.score(extraction.as_str(), job_description);

    info!(
        %analysis_id,
        final_score = report.scores.final_score,
        similarity_score = report.scores.similarity_score,
        skill_score = report.scores.skill_score,
        resume_empty = extraction.is_empty(),
        "Analysis complete"
    );

    AnalyzeResponse {
        analysis_id,
        bar_percentage: report.scores.bar_percentage(),
        scores: report.scores,
        skills: report.skills,
        extraction,
    }
}
