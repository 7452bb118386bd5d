//! Axum route handlers for the analysis pipeline: JSON API and HTML form.

use axum::{
    extract::{Multipart, State},
    response::{Html, IntoResponse, Response},
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::pages;
use crate::pipeline::{run_pipeline, PipelineOutput};
use crate::routes::upload::{read_submission, resolve_inputs};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

/// Absent fields deserialize as empty and fail validation.
#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub resume: String,
    #[serde(default)]
    pub job_desc: String,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub analysis: String,
    pub letter: String,
    pub model: String,
    pub generated_at: DateTime<Utc>,
}

impl AnalyzeResponse {
    fn new(output: PipelineOutput, model: &str) -> Self {
        Self {
            analysis: output.analysis,
            letter: output.letter,
            model: model.to_string(),
            generated_at: Utc::now(),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/analyze
///
/// Runs the pipeline over raw resume and job description text.
pub async fn handle_analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let output = run_pipeline(state.model.as_ref(), request.resume, request.job_desc).await?;
    Ok(Json(AnalyzeResponse::new(output, state.model.model_name())))
}

/// POST /api/v1/analyze/upload
///
/// Same as `/api/v1/analyze`, but the resume arrives as a multipart file upload.
pub async fn handle_analyze_upload(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let output = analyze_submission(&state, multipart).await?;
    Ok(Json(AnalyzeResponse::new(output, state.model.model_name())))
}

/// GET /
pub async fn handle_form() -> Html<String> {
    Html(pages::form_page(None))
}

/// POST /
///
/// Form submission. Renders the result page, or the form again with the error.
pub async fn handle_form_submit(State(state): State<AppState>, multipart: Multipart) -> Response {
    match analyze_submission(&state, multipart).await {
        Ok(output) => Html(pages::result_page(&output, state.model.model_name())).into_response(),
        Err(err) => {
            let (status, _, message) = err.parts();
            (status, Html(pages::form_page(Some(&message)))).into_response()
        }
    }
}

async fn analyze_submission(
    state: &AppState,
    multipart: Multipart,
) -> Result<PipelineOutput, AppError> {
    let submission = read_submission(multipart).await?;
    let (resume, job_desc) = resolve_inputs(submission).await?;
    Ok(run_pipeline(state.model.as_ref(), resume, job_desc).await?)
}
