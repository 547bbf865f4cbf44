use axum::{
    extract::rejection::JsonRejection,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Extension, Json,
};
use chrono::Local;
use serde::Deserialize;
use sentilens_core::{truncate_with_ellipsis, AnalysisPayload};

use crate::middleware::RequestId;

use super::ApiError;

/// Characters of the posted text kept as the rebuilt result's preview.
const RESULT_PREVIEW_CHARS: usize = 500;

/// Body of a report request: the preview text and analysis object from an
/// earlier analyze response.
#[derive(Debug, Deserialize)]
pub(super) struct ReportRequest {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub analysis: Option<AnalysisPayload>,
}

pub(super) async fn report(
    Extension(req_id): Extension<RequestId>,
    payload: Result<Json<ReportRequest>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(request) = payload.map_err(|rejection| {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            ApiError::payload_too_large()
        } else {
            ApiError::bad_request(rejection.body_text())
        }
    })?;

    let (text, analysis) = match request {
        ReportRequest {
            text,
            analysis: Some(analysis),
        } if !text.trim().is_empty() => (text, analysis),
        _ => return Err(ApiError::bad_request("No data provided for report")),
    };

    let result = analysis.into_result(truncate_with_ellipsis(&text, RESULT_PREVIEW_CHARS));
    let generated_at = Local::now();
    let bytes = tokio::task::spawn_blocking(move || {
        sentilens_report::render_at(&result, &text, generated_at)
    })
    .await
    .map_err(|e| {
        tracing::error!(request_id = %req_id.0, error = %e, "report task failed");
        ApiError::new("internal_error", "report generation failed")
    })??;

    let filename = sentilens_report::report_filename(generated_at);
    tracing::info!(request_id = %req_id.0, file = %filename, size = bytes.len(), "report rendered");

    Ok((
        [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{filename}\""),
            ),
        ],
        bytes,
    )
        .into_response())
}
