use super::protocol::{
    CreateStringRequest, ErrorResponse, FilterParams, HealthResponse, NATURAL_LANGUAGE_SEGMENT,
    NaturalLanguageParams,
};
use super::service::StringService;
use crate::analysis::types::StringRecord;
use crate::error::AnalyzerError;
use crate::query::types::{FilterOutcome, PredicateSet};

use axum::{
    Json,
    extract::{Extension, Path, Query},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::sync::Arc;

pub type ApiError = (StatusCode, Json<ErrorResponse>);

pub fn status_for(err: &AnalyzerError) -> StatusCode {
    match err {
        AnalyzerError::InvalidInput(_)
        | AnalyzerError::InvalidFilter(_)
        | AnalyzerError::UnparseableQuery(_) => StatusCode::BAD_REQUEST,
        AnalyzerError::Conflict => StatusCode::CONFLICT,
        AnalyzerError::NotFound => StatusCode::NOT_FOUND,
    }
}

fn error_response(err: AnalyzerError) -> ApiError {
    let status = status_for(&err);
    tracing::debug!("Request failed with {}: {}", status, err);
    (
        status,
        Json(ErrorResponse {
            detail: err.to_string(),
        }),
    )
}

pub async fn handle_create_string(
    Extension(service): Extension<Arc<StringService>>,
    Json(req): Json<CreateStringRequest>,
) -> Result<(StatusCode, Json<StringRecord>), ApiError> {
    match service.analyze_and_store(&req.value) {
        Ok(record) => Ok((StatusCode::CREATED, Json(record))),
        Err(e) => Err(error_response(e)),
    }
}

pub async fn handle_get_string(
    Extension(service): Extension<Arc<StringService>>,
    Path(value): Path<String>,
) -> Result<Json<StringRecord>, ApiError> {
    service.fetch(&value).map(Json).map_err(error_response)
}

pub async fn handle_delete_string(
    Extension(service): Extension<Arc<StringService>>,
    Path(value): Path<String>,
) -> Result<StatusCode, ApiError> {
    match service.delete(&value) {
        Ok(()) => Ok(StatusCode::NO_CONTENT),
        Err(e) => Err(error_response(e)),
    }
}

pub async fn handle_filter_strings(
    Extension(service): Extension<Arc<StringService>>,
    Query(params): Query<FilterParams>,
) -> Result<Json<FilterOutcome>, ApiError> {
    let predicates = PredicateSet::try_from(params).map_err(error_response)?;
    service.filter(predicates).map(Json).map_err(error_response)
}

pub async fn handle_natural_language_filter(
    Extension(service): Extension<Arc<StringService>>,
    Query(params): Query<NaturalLanguageParams>,
) -> Result<Response, ApiError> {
    match params.query {
        Some(query) => service
            .query_natural_language(&query)
            .map(|outcome| Json(outcome).into_response())
            .map_err(error_response),
        // No query: the path names a stored value, as with `/strings/:value`
        None => service
            .fetch(NATURAL_LANGUAGE_SEGMENT)
            .map(|record| Json(record).into_response())
            .map_err(error_response),
    }
}

pub async fn handle_delete_natural_language_segment(
    Extension(service): Extension<Arc<StringService>>,
) -> Result<StatusCode, ApiError> {
    handle_delete_string(
        Extension(service),
        Path(NATURAL_LANGUAGE_SEGMENT.to_string()),
    )
    .await
}

pub async fn handle_health(
    Extension(service): Extension<Arc<StringService>>,
) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        records: service.store().len(),
    })
}
