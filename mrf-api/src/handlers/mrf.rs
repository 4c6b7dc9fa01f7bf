//! MRF File Handlers
//!
//! Generation, listing, detail lookup and download of MRF files.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use mrf_core::{raw_row_from_json, ClaimValidator, RawRow};
use mrf_storage::MrfFileInfo;
use validator::Validate;

use crate::{
    dto::{GenerateMrfRequest, GenerateMrfResponse},
    error::{ApiError, ApiResult},
    state::AppState,
};

const MISSING_INPUT: &str = "Missing claims or customer";

/// Validate, transform and store a batch of approved claims
///
/// Rows are numbered from 1 in validation errors. If any row fails, nothing
/// is stored and the response lists every failing row.
pub async fn generate_mrf(
    State(state): State<AppState>,
    payload: Result<Json<GenerateMrfRequest>, JsonRejection>,
) -> ApiResult<Json<GenerateMrfResponse>> {
    let Json(request) = payload.map_err(|rejection| {
        tracing::debug!(error = %rejection.body_text(), "Rejected malformed generate request");
        ApiError::bad_request(MISSING_INPUT)
    })?;

    request
        .validate()
        .map_err(|_| ApiError::bad_request(MISSING_INPUT))?;
    let (Some(claims), Some(customer)) = (request.claim_rows(), request.customer_name()) else {
        return Err(ApiError::bad_request(MISSING_INPUT));
    };

    let rows: Vec<RawRow> = claims.iter().map(raw_row_from_json).collect();
    let report = ClaimValidator::without_header().validate(&rows);
    if !report.is_clean() {
        tracing::info!(
            customer = %customer,
            rejected = report.errors.len(),
            "Rejected MRF generation with invalid claims"
        );
        return Err(ApiError::validation(
            format!("{} claim(s) failed validation", report.errors.len()),
            report.errors,
        ));
    }

    let document = state.transformer.transform(&report.records, customer)?;
    let entry = state.catalog.store(&document, customer).await?;

    Ok(Json(GenerateMrfResponse {
        success: true,
        file_id: entry.id,
        filename: entry.filename,
        message: format!("Generated MRF for {}", customer),
    }))
}

/// List every generated file, newest first
pub async fn list_mrf_files(State(state): State<AppState>) -> Json<Vec<MrfFileInfo>> {
    Json(state.catalog.list().await)
}

/// Get the catalog details of one file
pub async fn get_file_details(
    State(state): State<AppState>,
    Path(file_id): Path<String>,
) -> ApiResult<Json<MrfFileInfo>> {
    let info = state.catalog.get(&file_id).await?;
    Ok(Json(info))
}

/// Download the stored document as an attachment
pub async fn download_mrf(
    State(state): State<AppState>,
    Path(file_id): Path<String>,
) -> ApiResult<impl IntoResponse> {
    let file = state.catalog.retrieve(&file_id).await?;

    tracing::debug!(file_id = %file_id, filename = %file.filename, "Serving MRF download");

    let headers = [
        (header::CONTENT_TYPE, "application/json".to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", file.filename),
        ),
    ];

    Ok((StatusCode::OK, headers, file.bytes))
}
