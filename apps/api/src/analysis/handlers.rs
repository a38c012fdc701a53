//! Axum route handlers for the Analysis API.

use axum::{
    extract::{multipart::Field, Multipart, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use bytes::Bytes;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::analysis::models::CareerAnalysisResult;
use crate::documents::extract_text;
use crate::errors::AppError;
use crate::export::report::{render_text_report, report_filename};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub resume_text: String,
    pub job_posting_text: String,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub analysis: CareerAnalysisResult,
}

// ────────────────────────────────────────────────────────────────────────────
// Helpers
// ────────────────────────────────────────────────────────────────────────────

fn require_text(value: &str, field: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

fn run_analysis(state: &AppState, resume_text: &str, job_posting_text: &str) -> CareerAnalysisResult {
    let analysis = state.analyzer.analyze(resume_text, job_posting_text);
    info!(
        overall = analysis.overall_score,
        ats = analysis.ats_compatibility_score,
        skills = analysis.skills_match_score,
        "Analysis complete"
    );
    analysis
}

fn multipart_error(e: axum::extract::multipart::MultipartError) -> AppError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge(e.body_text())
    } else {
        AppError::Validation(format!("Malformed multipart body: {}", e.body_text()))
    }
}

/// Reads one upload part into text. File parts are decoded by type; plain form
/// fields are taken as UTF-8.
async fn read_document(field: Field<'_>, name: &str, max_bytes: usize) -> Result<String, AppError> {
    let filename = field
        .file_name()
        .map(str::to_string)
        .unwrap_or_else(|| format!("{name}.txt"));
    let content_type = field.content_type().map(str::to_string);
    let data: Bytes = field.bytes().await.map_err(multipart_error)?;

    if data.len() > max_bytes {
        return Err(AppError::PayloadTooLarge(format!(
            "{name} is {} bytes; the limit is {max_bytes}",
            data.len()
        )));
    }

    decode_document(filename, content_type, data).await
}

/// Document parsing is CPU-bound and `pdf-extract` can panic on malformed
/// files, so it runs on the blocking pool. A panicked parse is reported like
/// any other unreadable document.
async fn decode_document(
    filename: String,
    content_type: Option<String>,
    data: Bytes,
) -> Result<String, AppError> {
    let name = filename.clone();
    let decoded = tokio::task::spawn_blocking(move || {
        extract_text(&filename, content_type.as_deref(), &data)
    })
    .await
    .map_err(|e| {
        if e.is_panic() {
            AppError::UnprocessableEntity(format!("could not read '{name}': the document is malformed"))
        } else {
            AppError::Internal(anyhow::anyhow!("document extraction task failed: {e}"))
        }
    })?;

    Ok(decoded?)
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/analyze
///
/// Runs the full career analysis over a resume and a job posting.
pub async fn handle_analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>, AppError> {
    require_text(&request.resume_text, "resume_text")?;
    require_text(&request.job_posting_text, "job_posting_text")?;

    let analysis = run_analysis(&state, &request.resume_text, &request.job_posting_text);
    Ok(Json(AnalyzeResponse { analysis }))
}

/// POST /api/v1/analyze/upload
///
/// Multipart form with `resume` and `job_posting` parts. Each part may be a PDF,
/// a text file, or a plain form field. If either document cannot be read the
/// analysis is not run.
pub async fn handle_analyze_upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let max_bytes = state.config.max_upload_bytes;
    let mut resume_text = None;
    let mut job_posting_text = None;

    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        match field.name() {
            Some("resume") => resume_text = Some(read_document(field, "resume", max_bytes).await?),
            Some("job_posting") => {
                job_posting_text = Some(read_document(field, "job_posting", max_bytes).await?)
            }
            _ => continue,
        }
    }

    let resume_text = resume_text
        .ok_or_else(|| AppError::Validation("Multipart form must include a resume part".to_string()))?;
    let job_posting_text = job_posting_text.ok_or_else(|| {
        AppError::Validation("Multipart form must include a job_posting part".to_string())
    })?;
    require_text(&resume_text, "resume")?;
    require_text(&job_posting_text, "job_posting")?;

    let analysis = run_analysis(&state, &resume_text, &job_posting_text);
    Ok(Json(AnalyzeResponse { analysis }))
}

/// POST /api/v1/analyze/report
///
/// Same input as `/analyze`; responds with the plain-text report as a download.
pub async fn handle_analyze_report(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<impl IntoResponse, AppError> {
    require_text(&request.resume_text, "resume_text")?;
    require_text(&request.job_posting_text, "job_posting_text")?;

    let analysis = run_analysis(&state, &request.resume_text, &request.job_posting_text);
    let filename = report_filename(Utc::now().date_naive());

    Ok((
        [
            (header::CONTENT_TYPE, "text/plain; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{filename}\""),
            ),
        ],
        render_text_report(&analysis),
    ))
}
