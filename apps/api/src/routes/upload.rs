//! Multipart form handling shared by the HTML form and the upload API.

use axum::{
    extract::{multipart::MultipartError, Multipart},
    http::StatusCode,
};
use bytes::Bytes;
use tracing::info;

use crate::documents;
use crate::errors::AppError;

/// Shown when either the resume file or the job description is absent.
pub const MISSING_INPUT_MESSAGE: &str = "⚠ Please upload both resume and job description.";

#[derive(Debug)]
pub struct ResumeUpload {
    pub file_name: String,
    pub data: Bytes,
}

/// Raw form fields as submitted. Either may be missing.
#[derive(Debug, Default)]
pub struct Submission {
    pub resume: Option<ResumeUpload>,
    pub job_desc: Option<String>,
}

/// Reads the `resume` file and `job_desc` text fields. Unknown fields are skipped.
pub async fn read_submission(mut multipart: Multipart) -> Result<Submission, AppError> {
    let mut submission = Submission::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| multipart_error(e, "Malformed form data"))?
    {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("resume") => {
                let file_name = field.file_name().unwrap_or_default().to_string();
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| multipart_error(e, "Could not read resume"))?;
                // Browsers send an empty, unnamed part when no file was chosen.
                if !file_name.is_empty() {
                    submission.resume = Some(ResumeUpload { file_name, data });
                }
            }
            Some("job_desc") => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| multipart_error(e, "Could not read job description"))?;
                submission.job_desc = Some(text);
            }
            _ => {}
        }
    }

    Ok(submission)
}

/// Body-limit overflows surface as 413; anything else is a malformed request.
fn multipart_error(err: MultipartError, context: &str) -> AppError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge(format!("{context}: upload exceeds the size limit"))
    } else {
        AppError::Validation(format!("{context}: {}", err.body_text()))
    }
}

/// Checks both inputs are present and extracts the resume text.
/// Returns `(resume, job_desc)`.
pub async fn resolve_inputs(submission: Submission) -> Result<(String, String), AppError> {
    let job_desc = submission.job_desc.filter(|j| !j.trim().is_empty());
    let (upload, job_desc) = match (submission.resume, job_desc) {
        (Some(upload), Some(job_desc)) => (upload, job_desc),
        _ => return Err(AppError::Validation(MISSING_INPUT_MESSAGE.to_string())),
    };

    let file_name = upload.file_name.clone();
    let size = upload.data.len();

    // pdf-extract is CPU-bound and may panic on malformed input; keep it off the runtime.
    let resume = tokio::task::spawn_blocking(move || {
        documents::extract_text(&upload.file_name, &upload.data)
    })
    .await
    .map_err(|e| AppError::UnprocessableEntity(format!("could not read '{file_name}': {e}")))??;

    info!(
        "Extracted {} chars from '{}' ({} bytes)",
        resume.len(),
        file_name,
        size
    );

    // A 0-byte text file or an image-only PDF counts as no resume at all.
    if resume.trim().is_empty() {
        return Err(AppError::Validation(MISSING_INPUT_MESSAGE.to_string()));
    }

    Ok((resume, job_desc))
}
