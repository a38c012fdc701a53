pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::analysis::handlers;
use crate::state::AppState;

/// Room for multipart boundaries and part headers on top of the two documents.
const MULTIPART_OVERHEAD_BYTES: usize = 64 * 1024;

pub fn build_router(state: AppState) -> Router {
    let upload_limit = state.config.max_upload_bytes * 2 + MULTIPART_OVERHEAD_BYTES;

    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/analyze", post(handlers::handle_analyze))
        .route(
            "/api/v1/analyze/upload",
            post(handlers::handle_analyze_upload).layer(DefaultBodyLimit::max(upload_limit)),
        )
        .route("/api/v1/analyze/report", post(handlers::handle_analyze_report))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::analysis::engine::CareerAnalyzer;
    use crate::config::Config;

    const BOUNDARY: &str = "career-advisor-test-boundary";

    const RESUME: &str = "Backend engineer with 6 years of experience.\n\
        - Built Python and Django services handling 20,000 users.\n\
        - Reduced infrastructure cost by 25% with Docker.";
    const JOB: &str = "Backend Engineer at Globex\n\
        Location: Denver, CO\n\
        4+ years of experience. Python, Django and PostgreSQL required.";

    fn router_with(config: Config) -> Router {
        build_router(AppState::new(CareerAnalyzer::default(), config))
    }

    fn router() -> Router {
        router_with(Config::default())
    }

    fn json_request(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    /// (name, filename, content type, bytes)
    fn multipart_request(parts: &[(&str, Option<&str>, &str, &[u8])]) -> Request<Body> {
        let mut body = Vec::new();
        for (name, filename, content_type, data) in parts {
            body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
            match filename {
                Some(f) => body.extend_from_slice(
                    format!("Content-Disposition: form-data; name=\"{name}\"; filename=\"{f}\"\r\n")
                        .as_bytes(),
                ),
                None => body.extend_from_slice(
                    format!("Content-Disposition: form-data; name=\"{name}\"\r\n").as_bytes(),
                ),
            }
            body.extend_from_slice(format!("Content-Type: {content_type}\r\n\r\n").as_bytes());
            body.extend_from_slice(data);
            body.extend_from_slice(b"\r\n");
        }
        body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());

        Request::builder()
            .method("POST")
            .uri("/api/v1/analyze/upload")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(body))
            .unwrap()
    }

    /// One-page PDF whose content stream selects a font the page never declares.
    fn pdf_with_undeclared_font() -> Vec<u8> {
        let content = "BT /F9 12 Tf 72 720 Td (Hello) Tj ET";
        let objects = [
            "<< /Type /Catalog /Pages 2 0 R >>".to_string(),
            "<< /Type /Pages /Kids [3 0 R] /Count 1 >>".to_string(),
            "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 612 792] /Resources << >> /Contents 4 0 R >>"
                .to_string(),
            format!("<< /Length {} >>\nstream\n{content}\nendstream", content.len()),
        ];

        let mut pdf = b"%PDF-1.4\n".to_vec();
        let mut offsets = Vec::new();
        for (i, object) in objects.iter().enumerate() {
            offsets.push(pdf.len());
            pdf.extend_from_slice(format!("{} 0 obj\n{object}\nendobj\n", i + 1).as_bytes());
        }
        let xref_start = pdf.len();
        pdf.extend_from_slice(format!("xref\n0 {}\n0000000000 65535 f \n", objects.len() + 1).as_bytes());
        for offset in offsets {
            pdf.extend_from_slice(format!("{offset:010} 00000 n \n").as_bytes());
        }
        pdf.extend_from_slice(
            format!(
                "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{xref_start}\n%%EOF\n",
                objects.len() + 1
            )
            .as_bytes(),
        );
        pdf
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let body = to_bytes(response.into_body(), 1024 * 1024).await.unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let response = router()
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["status"], "ok");
        assert_eq!(body["service"], "career-advisor-api");
    }

    #[tokio::test]
    async fn test_analyze_returns_camel_case_result() {
        let response = router()
            .oneshot(json_request(
                "/api/v1/analyze",
                json!({ "resume_text": RESUME, "job_posting_text": JOB }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        let analysis = &body["analysis"];
        let overall = analysis["overallScore"].as_u64().unwrap();
        assert!(overall <= 100);
        assert_eq!(analysis["experienceAlignmentScore"], 100);
        assert!(analysis["coverLetter"]["content"]
            .as_str()
            .unwrap()
            .contains("Globex"));
        assert_eq!(analysis["skillsAnalysis"]["skillGaps"][0]["skill"], "PostgreSQL");
    }

    #[tokio::test]
    async fn test_analyze_rejects_blank_input() {
        let response = router()
            .oneshot(json_request(
                "/api/v1/analyze",
                json!({ "resume_text": "   ", "job_posting_text": JOB }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert_eq!(body["error"]["message"], "resume_text cannot be empty");
    }

    #[tokio::test]
    async fn test_report_is_a_text_attachment() {
        let response = router()
            .oneshot(json_request(
                "/api/v1/analyze/report",
                json!({ "resume_text": RESUME, "job_posting_text": JOB }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "text/plain; charset=utf-8"
        );
        let disposition = response.headers()[header::CONTENT_DISPOSITION]
            .to_str()
            .unwrap()
            .to_string();
        assert!(disposition.starts_with("attachment; filename=\"career-analysis-report-"));
        assert!(disposition.ends_with(".txt\""));

        let body = to_bytes(response.into_body(), 1024 * 1024).await.unwrap();
        let text = String::from_utf8(body.to_vec()).unwrap();
        assert!(text.contains("EXECUTIVE SUMMARY"));
    }

    #[tokio::test]
    async fn test_upload_with_text_parts() {
        let response = router()
            .oneshot(multipart_request(&[
                ("resume", Some("resume.txt"), "text/plain", RESUME.as_bytes()),
                ("job_posting", None, "text/plain", JOB.as_bytes()),
            ]))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert!(body["analysis"]["atsCompatibilityScore"].is_u64());
    }

    #[tokio::test]
    async fn test_upload_unreadable_document_is_unprocessable() {
        let response = router()
            .oneshot(multipart_request(&[
                ("resume", Some("resume.pdf"), "application/pdf", b"definitely not a pdf".as_slice()),
                ("job_posting", None, "text/plain", JOB.as_bytes()),
            ]))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body = body_json(response).await;
        assert_eq!(body["error"]["code"], "UNPROCESSABLE_ENTITY");
    }

    #[tokio::test]
    async fn test_upload_pdf_with_undeclared_font_is_unprocessable() {
        let pdf = pdf_with_undeclared_font();
        let response = router()
            .oneshot(multipart_request(&[
                ("resume", Some("cv.pdf"), "application/pdf", pdf.as_slice()),
                ("job_posting", None, "text/plain", JOB.as_bytes()),
            ]))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body = body_json(response).await;
        assert_eq!(body["error"]["code"], "UNPROCESSABLE_ENTITY");
        assert!(body["error"]["message"].as_str().unwrap().contains("cv.pdf"));
    }

    #[tokio::test]
    async fn test_upload_requires_both_parts() {
        let response = router()
            .oneshot(multipart_request(&[(
                "resume",
                Some("resume.txt"),
                "text/plain",
                RESUME.as_bytes(),
            )]))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_upload_over_limit_is_rejected() {
        let config = Config {
            max_upload_bytes: 16,
            ..Config::default()
        };
        let response = router_with(config)
            .oneshot(multipart_request(&[
                ("resume", Some("resume.txt"), "text/plain", RESUME.as_bytes()),
                ("job_posting", None, "text/plain", JOB.as_bytes()),
            ]))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    }
}
