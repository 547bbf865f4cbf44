use axum::{
    extract::{multipart::{MultipartError, MultipartRejection}, Multipart, State},
    http::StatusCode,
    Extension, Json,
};
use sentilens_core::AnalyzeResponse;
use sentilens_sentiment::RawInput;

use crate::middleware::RequestId;

use super::{ApiError, AppState};

/// Fields of an analyze form. Unknown parts are ignored.
#[derive(Debug, Default)]
struct AnalyzeForm {
    analysis_type: Option<String>,
    text: Option<String>,
    url: Option<String>,
    file: Option<UploadedFile>,
}

#[derive(Debug)]
struct UploadedFile {
    filename: String,
    bytes: Vec<u8>,
}

impl AnalyzeForm {
    async fn read(mut multipart: Multipart) -> Result<Self, ApiError> {
        let mut form = Self::default();
        while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
            let name = field.name().unwrap_or_default().to_string();
            match name.as_str() {
                "analysis_type" => {
                    form.analysis_type = Some(field.text().await.map_err(multipart_error)?);
                }
                "text" => {
                    form.text = Some(field.text().await.map_err(multipart_error)?);
                }
                "url" => {
                    form.url = Some(field.text().await.map_err(multipart_error)?);
                }
                "file" => {
                    let filename = field.file_name().unwrap_or_default().to_string();
                    let bytes = field.bytes().await.map_err(multipart_error)?;
                    form.file = Some(UploadedFile {
                        filename,
                        bytes: bytes.to_vec(),
                    });
                }
                other => tracing::debug!(field = other, "ignoring unknown form field"),
            }
        }
        Ok(form)
    }

    /// Pick the input named by `analysis_type` (default `text`).
    fn into_input(self) -> Result<RawInput, ApiError> {
        let analysis_type = self
            .analysis_type
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .unwrap_or("text")
            .to_ascii_lowercase();

        match analysis_type.as_str() {
            "text" => Ok(RawInput::Text(self.text.unwrap_or_default())),
            "url" => match self.url {
                Some(url) if !url.trim().is_empty() => Ok(RawInput::Url(url)),
                _ => Err(ApiError::bad_request("No URL provided")),
            },
            "file" => match self.file {
                Some(file) if !file.filename.trim().is_empty() => Ok(RawInput::Document {
                    bytes: file.bytes,
                    filename: file.filename,
                }),
                _ => Err(ApiError::bad_request("No file provided")),
            },
            other => Err(ApiError::bad_request(format!("Unknown analysis type: {other}"))),
        }
    }
}

fn multipart_error(error: MultipartError) -> ApiError {
    if error.status() == StatusCode::PAYLOAD_TOO_LARGE {
        ApiError::payload_too_large()
    } else {
        ApiError::bad_request(error.body_text())
    }
}

pub(super) async fn analyze(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<AnalyzeResponse>, ApiError> {
    let multipart = multipart.map_err(|rejection| ApiError::bad_request(rejection.body_text()))?;
    let input = AnalyzeForm::read(multipart).await?.into_input()?;
    let kind = input.kind();

    let outcome = state.analyzer.analyze(input).await.map_err(|e| {
        tracing::info!(
            request_id = %req_id.0,
            source = kind.as_str(),
            code = e.code(),
            "analysis rejected"
        );
        ApiError::from(e)
    })?;

    Ok(Json(AnalyzeResponse::new(outcome.source_kind, &outcome.result)))
}
