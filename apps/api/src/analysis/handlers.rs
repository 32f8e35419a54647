use axum::{
    extract::{multipart::MultipartError, Multipart, State},
    http::StatusCode,
    Json,
};
use bytes::Bytes;
use serde::Serialize;
use tracing::{info, info_span, Instrument};
use uuid::Uuid;

use crate::analysis::document::FileKind;
use crate::analysis::models::AnalysisResult;
use crate::errors::AppError;
use crate::extraction::ExtractionError;
use crate::state::AppState;

/// Multipart field carrying the resume file.
pub const UPLOAD_FIELD: &str = "resume";

#[derive(Debug, Serialize)]
pub struct CheckResponse {
    #[serde(flatten)]
    pub analysis: AnalysisResult,
    pub file_type: FileKind,
    pub word_count: usize,
    pub page_count: u32,
}

struct Upload {
    file_name: String,
    kind: FileKind,
    bytes: Bytes,
}

/// POST /api/check
pub async fn handle_check(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<CheckResponse>, AppError> {
    let span = info_span!("check", request_id = %Uuid::new_v4());
    check(state, multipart).instrument(span).await.map(Json)
}

async fn check(state: AppState, mut multipart: Multipart) -> Result<CheckResponse, AppError> {
    let upload = read_upload(&mut multipart, state.config.max_upload_bytes).await?;
    info!(
        "Received {} ({}, {} bytes)",
        upload.file_name,
        upload.kind,
        upload.bytes.len()
    );

    let extracted = state.extractor.extract(upload.bytes, upload.kind).await?;
    if !extracted.has_text() {
        return Err(ExtractionError::NoText.into());
    }
    let word_count = extracted.word_count();
    let page_count = extracted.page_count;

    let analyzer = state.analyzer.clone();
    let kind = upload.kind;
    let analysis = tokio::task::spawn_blocking(move || {
        analyzer.analyze(&extracted.text, extracted.page_count, kind)
    })
    .await
    .map_err(|e| AppError::Internal(anyhow::anyhow!("Analysis task failed: {e}")))?;

    info!(
        "Checked {}: score {}/100, {} words, {} page(s)",
        upload.file_name, analysis.overall_score, word_count, page_count
    );

    Ok(CheckResponse {
        analysis,
        file_type: kind,
        word_count,
        page_count,
    })
}

/// Pulls the first `resume` field, validating name, extension and size.
async fn read_upload(multipart: &mut Multipart, limit: usize) -> Result<Upload, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| multipart_error(e, limit))?
    {
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }

        let file_name = field.file_name().unwrap_or_default().trim().to_string();
        if file_name.is_empty() {
            return Err(AppError::Validation("No file selected".to_string()));
        }
        let kind = FileKind::from_file_name(&file_name).ok_or_else(|| {
            AppError::UnsupportedFormat("Only PDF and DOCX files are supported".to_string())
        })?;

        let bytes = field.bytes().await.map_err(|e| multipart_error(e, limit))?;
        if bytes.len() > limit {
            return Err(AppError::PayloadTooLarge(limit));
        }

        return Ok(Upload {
            file_name,
            kind,
            bytes,
        });
    }

    Err(AppError::Validation("No file uploaded".to_string()))
}

fn multipart_error(err: MultipartError, limit: usize) -> AppError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge(limit)
    } else {
        AppError::Validation(format!("Invalid upload: {}", err.body_text()))
    }
}
