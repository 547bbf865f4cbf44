mod analyze;
mod report;

use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    http::{header, HeaderName, Method, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use sentilens_core::ErrorResponse;
use sentilens_report::ReportError;
use sentilens_sentiment::{AnalysisError, Analyzer};
use serde::Serialize;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::middleware::{request_id, REQUEST_ID_HEADER};

#[derive(Clone)]
pub struct AppState {
    pub analyzer: Arc<Analyzer>,
}

/// Failure envelope plus the HTTP status derived from its code.
#[derive(Debug)]
pub struct ApiError(ErrorResponse);

#[derive(Debug, Serialize, PartialEq, Eq)]
struct HealthData {
    status: &'static str,
}

impl ApiError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self(ErrorResponse::new(code, message))
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new("bad_request", message)
    }

    pub fn payload_too_large() -> Self {
        Self::new("payload_too_large", "Uploaded content is too large")
    }

    fn status(&self) -> StatusCode {
        match self.0.code.as_str() {
            "empty_input" | "unsupported_type" | "no_usable_content" | "bad_request" => {
                StatusCode::BAD_REQUEST
            }
            "extraction_failure" => StatusCode::UNPROCESSABLE_ENTITY,
            "payload_too_large" => StatusCode::PAYLOAD_TOO_LARGE,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        (self.status(), Json(self.0)).into_response()
    }
}

impl From<AnalysisError> for ApiError {
    fn from(error: AnalysisError) -> Self {
        if let AnalysisError::ExtractionFailure { source } = &error {
            tracing::warn!(error = %source, "document extraction failed");
        }
        Self::new(error.code(), error.to_string())
    }
}

impl From<ReportError> for ApiError {
    fn from(error: ReportError) -> Self {
        tracing::error!(error = %error, "report rendering failed");
        Self::new(error.code(), "Could not generate report")
    }
}

fn build_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([
            header::CONTENT_TYPE,
            HeaderName::from_static(REQUEST_ID_HEADER),
        ])
        .expose_headers([
            header::CONTENT_DISPOSITION,
            HeaderName::from_static(REQUEST_ID_HEADER),
        ])
}

pub fn build_app(state: AppState, max_upload_bytes: usize) -> Router {
    Router::new()
        .route("/api/v1/health", get(health))
        .route("/api/v1/analyze", post(analyze::analyze))
        .route("/api/v1/report", post(report::report))
        .layer(
            ServiceBuilder::new()
                .layer(build_cors())
                .layer(axum::middleware::from_fn(request_id))
                .layer(TraceLayer::new_for_http())
                .layer(DefaultBodyLimit::max(max_upload_bytes)),
        )
        .with_state(state)
}

async fn health() -> impl IntoResponse {
    Json(HealthData { status: "ok" })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use sentilens_sentiment::ExtractorConfig;
    use tower::ServiceExt;
    use wiremock::matchers::method;
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const BOUNDARY: &str = "sentilens-test-boundary";
    const TEST_UPLOAD_LIMIT: usize = 1024 * 1024;

    fn test_app_with_limit(max_upload_bytes: usize) -> Router {
        let analyzer = Analyzer::new(&ExtractorConfig::default()).expect("analyzer");
        build_app(
            AppState {
                analyzer: Arc::new(analyzer),
            },
            max_upload_bytes,
        )
    }

    fn test_app() -> Router {
        test_app_with_limit(TEST_UPLOAD_LIMIT)
    }

    /// Encode text fields plus an optional `file` part as multipart/form-data.
    fn multipart_body(fields: &[(&str, &str)], file: Option<(&str, &[u8])>) -> Vec<u8> {
        let mut body = Vec::new();
        for (name, value) in fields {
            body.extend_from_slice(
                format!(
                    "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
                )
                .as_bytes(),
            );
        }
        if let Some((filename, bytes)) = file {
            body.extend_from_slice(
                format!(
                    "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"file\"; filename=\"{filename}\"\r\nContent-Type: application/octet-stream\r\n\r\n"
                )
                .as_bytes(),
            );
            body.extend_from_slice(bytes);
            body.extend_from_slice(b"\r\n");
        }
        body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
        body
    }

    fn analyze_request(body: Vec<u8>) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/v1/analyze")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(body))
            .expect("request")
    }

    fn report_request(json: &serde_json::Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/v1/report")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .expect("request")
    }

    async fn json_body(response: axum::response::Response) -> serde_json::Value {
        let body = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body bytes");
        serde_json::from_slice(&body).expect("json parse")
    }

    // -------------------------------------------------------------------------
    // Error mapping
    // -------------------------------------------------------------------------

    #[test]
    fn api_error_codes_map_to_statuses() {
        let cases = [
            ("empty_input", StatusCode::BAD_REQUEST),
            ("unsupported_type", StatusCode::BAD_REQUEST),
            ("no_usable_content", StatusCode::BAD_REQUEST),
            ("bad_request", StatusCode::BAD_REQUEST),
            ("extraction_failure", StatusCode::UNPROCESSABLE_ENTITY),
            ("payload_too_large", StatusCode::PAYLOAD_TOO_LARGE),
            ("render_failure", StatusCode::INTERNAL_SERVER_ERROR),
            ("internal_error", StatusCode::INTERNAL_SERVER_ERROR),
        ];
        for (code, status) in cases {
            let response = ApiError::new(code, "message").into_response();
            assert_eq!(response.status(), status, "code {code}");
        }
    }

    #[test]
    fn analysis_error_keeps_code_and_message() {
        let error = ApiError::from(AnalysisError::NoUsableContent { min_chars: 5 });
        assert_eq!(error.0.code, "no_usable_content");
        assert_eq!(error.0.message, "Provide more text for analysis");
        assert_eq!(error.0.status, "error");
    }

    // -------------------------------------------------------------------------
    // Health and request ids
    // -------------------------------------------------------------------------

    #[tokio::test]
    async fn health_returns_ok_with_request_id() {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .uri("/api/v1/health")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("response");

        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers().contains_key(REQUEST_ID_HEADER));
        assert_eq!(json_body(response).await, serde_json::json!({"status": "ok"}));
    }

    #[tokio::test]
    async fn incoming_request_id_is_echoed() {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .uri("/api/v1/health")
                    .header(REQUEST_ID_HEADER, "abc-123")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("response");

        assert_eq!(
            response
                .headers()
                .get(REQUEST_ID_HEADER)
                .and_then(|v| v.to_str().ok()),
            Some("abc-123")
        );
    }

    // -------------------------------------------------------------------------
    // Analyze
    // -------------------------------------------------------------------------

    #[tokio::test]
    async fn analyze_text_returns_success_envelope() {
        let body = multipart_body(
            &[
                ("analysis_type", "text"),
                ("text", "I absolutely love this, it's wonderful!"),
            ],
            None,
        );
        let response = test_app()
            .oneshot(analyze_request(body))
            .await
            .expect("response");

        assert_eq!(response.status(), StatusCode::OK);
        let json = json_body(response).await;
        assert_eq!(json["status"], "success");
        assert_eq!(json["analysis_type"], "text");
        assert_eq!(json["text"], "I absolutely love this, it's wonderful!");
        assert_eq!(json["analysis"]["sentiment"], "Positive");
        assert_eq!(json["analysis"]["confidence"], "High");
        assert_eq!(json["analysis"]["emoji"], "\u{1F60A}");
        assert_eq!(json["analysis"]["color"], "#28a745");
        assert_eq!(json["analysis"]["word_count"], 6);
        assert_eq!(json["analysis"]["character_count"], 39);
        assert_eq!(
            json["analysis"]["details"],
            "The text shows positive sentiment with high confidence."
        );
    }

    #[tokio::test]
    async fn analysis_type_defaults_to_text() {
        let body = multipart_body(&[("text", "This is a table.")], None);
        let response = test_app()
            .oneshot(analyze_request(body))
            .await
            .expect("response");

        assert_eq!(response.status(), StatusCode::OK);
        let json = json_body(response).await;
        assert_eq!(json["analysis_type"], "text");
        assert_eq!(json["analysis"]["sentiment"], "Neutral");
        assert_eq!(json["analysis"]["confidence"], "Low");
    }

    #[tokio::test]
    async fn short_text_is_no_usable_content() {
        let body = multipart_body(&[("analysis_type", "text"), ("text", "meh.")], None);
        let response = test_app()
            .oneshot(analyze_request(body))
            .await
            .expect("response");

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = json_body(response).await;
        assert_eq!(json["status"], "error");
        assert_eq!(json["code"], "no_usable_content");
    }

    #[tokio::test]
    async fn missing_text_is_empty_input() {
        let body = multipart_body(&[("analysis_type", "text")], None);
        let response = test_app()
            .oneshot(analyze_request(body))
            .await
            .expect("response");

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = json_body(response).await;
        assert_eq!(json["code"], "empty_input");
        assert_eq!(json["message"], "No text provided");
    }

    #[tokio::test]
    async fn missing_url_is_bad_request() {
        let body = multipart_body(&[("analysis_type", "url")], None);
        let response = test_app()
            .oneshot(analyze_request(body))
            .await
            .expect("response");

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = json_body(response).await;
        assert_eq!(json["code"], "bad_request");
        assert_eq!(json["message"], "No URL provided");
    }

    #[tokio::test]
    async fn missing_file_is_bad_request() {
        let body = multipart_body(&[("analysis_type", "file")], None);
        let response = test_app()
            .oneshot(analyze_request(body))
            .await
            .expect("response");

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(json_body(response).await["message"], "No file provided");
    }

    #[tokio::test]
    async fn executable_upload_is_unsupported_type() {
        let body = multipart_body(
            &[("analysis_type", "file")],
            Some(("setup.exe", b"MZ\x90\x00")),
        );
        let response = test_app()
            .oneshot(analyze_request(body))
            .await
            .expect("response");

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(json_body(response).await["code"], "unsupported_type");
    }

    #[tokio::test]
    async fn txt_upload_is_analyzed() {
        let body = multipart_body(
            &[("analysis_type", "file")],
            Some(("review.txt", b"The staff were rude and the room was dirty.")),
        );
        let response = test_app()
            .oneshot(analyze_request(body))
            .await
            .expect("response");

        assert_eq!(response.status(), StatusCode::OK);
        let json = json_body(response).await;
        assert_eq!(json["analysis_type"], "file");
        assert_eq!(json["analysis"]["sentiment"], "Negative");
    }

    #[tokio::test]
    async fn corrupt_docx_is_unprocessable() {
        let body = multipart_body(
            &[("analysis_type", "file")],
            Some(("broken.docx", b"not a zip archive at all")),
        );
        let response = test_app()
            .oneshot(analyze_request(body))
            .await
            .expect("response");

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(json_body(response).await["code"], "extraction_failure");
    }

    #[tokio::test]
    async fn oversized_upload_is_rejected() {
        let big = "good ".repeat(200);
        let body = multipart_body(&[("analysis_type", "text"), ("text", &big)], None);
        let response = test_app_with_limit(256)
            .oneshot(analyze_request(body))
            .await
            .expect("response");

        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
        assert_eq!(json_body(response).await["code"], "payload_too_large");
    }

    #[tokio::test]
    async fn non_multipart_body_is_bad_request() {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/v1/analyze")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from("{}"))
                    .expect("request"),
            )
            .await
            .expect("response");

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(json_body(response).await["status"], "error");
    }

    #[tokio::test]
    async fn url_analysis_uses_page_text() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("content-type", "text/html")
                    .set_body_string(
                        "<html><body><p>The service was terrible and the food was awful.</p></body></html>",
                    ),
            )
            .mount(&server)
            .await;

        let url = server.uri();
        let body = multipart_body(&[("analysis_type", "url"), ("url", &url)], None);
        let response = test_app()
            .oneshot(analyze_request(body))
            .await
            .expect("response");

        assert_eq!(response.status(), StatusCode::OK);
        let json = json_body(response).await;
        assert_eq!(json["analysis_type"], "url");
        assert_eq!(json["analysis"]["sentiment"], "Negative");
    }

    // -------------------------------------------------------------------------
    // Report
    // -------------------------------------------------------------------------

    #[tokio::test]
    async fn report_returns_pdf_attachment() {
        let analyze_body = multipart_body(
            &[("text", "I absolutely love this, it's wonderful!")],
            None,
        );
        let analyzed = json_body(
            test_app()
                .oneshot(analyze_request(analyze_body))
                .await
                .expect("response"),
        )
        .await;

        let response = test_app()
            .oneshot(report_request(&serde_json::json!({
                "text": analyzed["text"],
                "analysis": analyzed["analysis"],
            })))
            .await
            .expect("response");

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).and_then(|v| v.to_str().ok()),
            Some("application/pdf")
        );
        let disposition = response
            .headers()
            .get(header::CONTENT_DISPOSITION)
            .and_then(|v| v.to_str().ok())
            .expect("content-disposition")
            .to_string();
        assert!(disposition.starts_with("attachment; filename=\"sentiment_report_"));
        assert!(disposition.ends_with(".pdf\""));

        let body = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body bytes");
        assert!(body.starts_with(b"%PDF-"));
    }

    #[tokio::test]
    async fn report_without_analysis_is_rejected() {
        let response = test_app()
            .oneshot(report_request(&serde_json::json!({ "text": "some text" })))
            .await
            .expect("response");

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = json_body(response).await;
        assert_eq!(json["code"], "bad_request");
        assert_eq!(json["message"], "No data provided for report");
    }

    #[tokio::test]
    async fn report_with_blank_text_is_rejected() {
        let response = test_app()
            .oneshot(report_request(&serde_json::json!({
                "text": "   ",
                "analysis": {
                    "sentiment": "Neutral",
                    "polarity": 0.0,
                    "subjectivity": 0.0,
                    "vader_compound": 0.0,
                    "confidence": "Low",
                    "word_count": 0,
                    "character_count": 0
                }
            })))
            .await
            .expect("response");

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            json_body(response).await["message"],
            "No data provided for report"
        );
    }

    #[tokio::test]
    async fn malformed_report_json_is_bad_request() {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/v1/report")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from("{not json"))
                    .expect("request"),
            )
            .await
            .expect("response");

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(json_body(response).await["code"], "bad_request");
    }
}
