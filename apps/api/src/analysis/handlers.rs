//! Axum route handlers for the Analysis API.

use anyhow::Context;
use axum::{
    extract::{Multipart, State},
    Json,
};
use bytes::Bytes;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::analysis::analyse_resume;
use crate::analysis::models::AnalysisReport;
use crate::errors::AppError;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct AnalyseTextRequest {
    pub resume_text: String,
    #[serde(default)]
    pub jd_text: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct AnalyseResponse {
    pub analysis_id: Uuid,
    pub analysed_at: DateTime<Utc>,
    pub report: AnalysisReport,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/analyse
///
/// Multipart upload: `resume` (PDF bytes, required) and `jd_text` (optional).
/// A PDF without a text layer is not an error; it analyses as empty text.
pub async fn handle_analyse_upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<AnalyseResponse>, AppError> {
    let mut resume: Option<Bytes> = None;
    let mut jd_text: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Malformed multipart body: {e}")))?
    {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "resume" => {
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::Validation(format!("Failed to read resume: {e}")))?;
                resume = Some(bytes);
            }
            "jd_text" => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| AppError::Validation(format!("Failed to read jd_text: {e}")))?;
                jd_text = Some(text);
            }
            other => tracing::debug!(field = other, "Ignoring unexpected multipart field"),
        }
    }

    let resume = resume
        .filter(|bytes| !bytes.is_empty())
        .ok_or_else(|| AppError::Validation("resume file is required".to_string()))?;

    let decoder = state.decoder.clone();
    let text = tokio::task::spawn_blocking(move || decoder.decode(&resume))
        .await
        .context("Resume decoding task failed")?;

    Ok(Json(run_analysis(&state, &text, jd_text.as_deref())))
}

/// POST /api/v1/analyse/text
///
/// Analyses text that was already extracted by the caller.
pub async fn handle_analyse_text(
    State(state): State<AppState>,
    Json(request): Json<AnalyseTextRequest>,
) -> Json<AnalyseResponse> {
    Json(run_analysis(
        &state,
        &request.resume_text,
        request.jd_text.as_deref(),
    ))
}

fn run_analysis(state: &AppState, text: &str, jd_text: Option<&str>) -> AnalyseResponse {
    let analysis_id = Uuid::new_v4();
    let report = analyse_resume(text, jd_text, state.config.preview_chars);

    if text.is_empty() {
        tracing::warn!(%analysis_id, "No text available; resume scored as empty");
    }
    info!(
        %analysis_id,
        bytes = text.len(),
        skills_found = report.skills.len(),
        score = report.score,
        band = report.score_band.label(),
        "Resume analysed"
    );

    AnalyseResponse {
        analysis_id,
        analysed_at: Utc::now(),
        report,
    }
}
