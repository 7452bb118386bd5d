pub mod analyze;
pub mod health;
pub mod upload;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        // HTML form
        .route("/", get(analyze::handle_form).post(analyze::handle_form_submit))
        // JSON API
        .route("/api/v1/analyze", post(analyze::handle_analyze))
        .route("/api/v1/analyze/upload", post(analyze::handle_analyze_upload))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::config::Config;
    use crate::llm_client::fakes::{Reply, ScriptedModel, SAMPLE_ANALYSIS};

    const BOUNDARY: &str = "fitletter-test-boundary";

    fn test_app(model: Arc<ScriptedModel>) -> Router {
        test_app_with(model, &[])
    }

    /// Like `test_app`, with extra env overrides on top of the API key.
    fn test_app_with(model: Arc<ScriptedModel>, overrides: &[(&str, &str)]) -> Router {
        let config = Config::from_lookup(|key| {
            if key == "GOOGLE_API_KEY" {
                return Some("test-key".to_string());
            }
            overrides
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| v.to_string())
        })
        .unwrap();
        build_router(AppState { model, config })
    }

    fn json_request(body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/v1/analyze")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    /// Builds a multipart body; `file` is `(file_name, contents)`.
    fn multipart_request(
        uri: &str,
        file: Option<(&str, &str)>,
        job_desc: Option<&str>,
    ) -> Request<Body> {
        let mut body = String::new();
        if let Some((name, contents)) = file {
            body.push_str(&format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"resume\"; filename=\"{name}\"\r\nContent-Type: text/plain\r\n\r\n{contents}\r\n"
            ));
        }
        if let Some(text) = job_desc {
            body.push_str(&format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"job_desc\"\r\n\r\n{text}\r\n"
            ));
        }
        body.push_str(&format!("--{BOUNDARY}--\r\n"));

        Request::builder()
            .method("POST")
            .uri(uri)
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(body))
            .unwrap()
    }

    async fn body_string(response: axum::response::Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let app = test_app(Arc::new(ScriptedModel::happy_path()));
        let response = app
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body: Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn test_analyze_returns_analysis_and_letter() {
        let model = Arc::new(ScriptedModel::happy_path());
        let app = test_app(model.clone());

        let response = app
            .oneshot(json_request(json!({
                "resume": "Jane Doe — six years of Rust",
                "job_desc": "Senior Engineer"
            })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body: Value = serde_json::from_str(&body_string(response).await).unwrap();
        let analysis = body["analysis"].as_str().unwrap();
        assert!(analysis.contains("Candidate Strengths"));
        assert!(analysis.contains("Areas for Improvement"));
        assert!(analysis.contains("Role Fit Recommendation"));
        assert!(!body["letter"].as_str().unwrap().is_empty());
        assert_eq!(body["model"], "scripted-test-model");
        assert!(body["generated_at"].is_string());
        assert_eq!(model.call_count(), 2);
    }

    #[tokio::test]
    async fn test_empty_resume_is_rejected_without_model_call() {
        let model = Arc::new(ScriptedModel::happy_path());
        let app = test_app(model.clone());

        let response = app
            .oneshot(json_request(json!({"resume": "", "job_desc": "Senior Engineer"})))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert_eq!(model.call_count(), 0);
    }

    #[tokio::test]
    async fn test_absent_job_desc_is_rejected() {
        let model = Arc::new(ScriptedModel::happy_path());
        let app = test_app(model.clone());

        let response = app
            .oneshot(json_request(json!({"resume": "Jane Doe"})))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(model.call_count(), 0);
    }

    #[tokio::test]
    async fn test_letter_failure_returns_error_without_partial_result() {
        let model = Arc::new(ScriptedModel::new(vec![
            Reply::text(SAMPLE_ANALYSIS),
            Reply::quota_exceeded(),
        ]));
        let app = test_app(model.clone());

        let response = app
            .oneshot(json_request(json!({
                "resume": "Jane Doe",
                "job_desc": "Senior Engineer"
            })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let text = body_string(response).await;
        assert!(!text.contains("Candidate Strengths"));
        let body: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(body["error"]["code"], "LLM_ERROR");
        assert!(body.get("analysis").is_none());
        assert_eq!(model.call_count(), 2);
    }

    #[tokio::test]
    async fn test_form_page_renders() {
        let app = test_app(Arc::new(ScriptedModel::happy_path()));
        let response = app
            .oneshot(Request::get("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert!(body_string(response).await.contains("multipart/form-data"));
    }

    #[tokio::test]
    async fn test_form_without_file_shows_message() {
        let model = Arc::new(ScriptedModel::happy_path());
        let app = test_app(model.clone());

        let response = app
            .oneshot(multipart_request("/", None, Some("Senior Engineer")))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let html = body_string(response).await;
        assert!(html.contains("Please upload both resume and job description."));
        assert_eq!(model.call_count(), 0);
    }

    #[tokio::test]
    async fn test_form_submission_renders_results() {
        let model = Arc::new(ScriptedModel::happy_path());
        let app = test_app(model.clone());

        let response = app
            .oneshot(multipart_request(
                "/",
                Some(("resume.txt", "Jane Doe\nRust, Tokio, Postgres")),
                Some("Senior Engineer"),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let html = body_string(response).await;
        assert!(html.contains("Resume Analysis"));
        assert!(html.contains("Dear Hiring Manager,"));
        assert!(model.prompts()[0].contains("Rust, Tokio, Postgres"));
    }

    #[tokio::test]
    async fn test_upload_api_returns_json() {
        let model = Arc::new(ScriptedModel::happy_path());
        let app = test_app(model.clone());

        let response = app
            .oneshot(multipart_request(
                "/api/v1/analyze/upload",
                Some(("resume.md", "# Jane Doe\nStaff engineer")),
                Some("Platform Engineer"),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body: Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert!(body["letter"].as_str().unwrap().starts_with("Dear Hiring Manager,"));
        let prompts = model.prompts();
        assert!(prompts[1].contains("Staff engineer"));
        assert!(prompts[1].contains("Platform Engineer"));
    }

    #[tokio::test]
    async fn test_form_with_empty_resume_file_shows_message() {
        let model = Arc::new(ScriptedModel::happy_path());
        let app = test_app(model.clone());

        let response = app
            .oneshot(multipart_request(
                "/",
                Some(("resume.txt", "")),
                Some("Senior Engineer"),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let html = body_string(response).await;
        assert!(html.contains("Please upload both resume and job description."));
        assert_eq!(model.call_count(), 0);
    }

    #[tokio::test]
    async fn test_oversized_upload_is_413() {
        let model = Arc::new(ScriptedModel::happy_path());
        let app = test_app_with(model.clone(), &[("MAX_UPLOAD_BYTES", "64")]);
        let resume = "Rust engineer. ".repeat(40);

        let response = app
            .oneshot(multipart_request(
                "/api/v1/analyze/upload",
                Some(("resume.txt", &resume)),
                Some("Senior Engineer"),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
        let body: Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(body["error"]["code"], "PAYLOAD_TOO_LARGE");
        assert_eq!(model.call_count(), 0);
    }
}
