// SPDX-License-Identifier: Apache-2.0

use crate::catalog::Snapshot;
use crate::http::request_tracing::RequestTrace;
use crate::AppState;
use axum::extract::{Path, Query, State};
use axum::http::{header, HeaderMap, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::{Extension, Json};
use cloudpath_api::{
    batch_comparison_dto, certification_detail_dto, certification_list_dto, compare_options_dto,
    comparison_dto, explorer_dto, map_error, openapi_v1_spec, parse_batch_compare_params_with_max,
    parse_cert_id, parse_compare_params, parse_filter_params, providers_dto, relations_dto,
    ApiError, BatchComparisonDto, CertificationDetailDto, CertificationListDto, ComparisonDto,
    ExplorerResponseDto, RelationsResponseDto, VersionDto, API_VERSION,
};
use cloudpath_model::CertificationRecord;
use cloudpath_query::{
    compare_ids, compare_many_ids, compare_options, count_by_provider, learning_path,
    relations_of,
};
use serde::Serialize;
use serde_json::json;
use std::collections::{BTreeMap, HashMap};
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::{debug, warn};

type HandlerResult<T> = Result<T, ApiError>;

pub(crate) fn api_error_response(status: StatusCode, err: ApiError) -> Response {
    let body = Json(json!({"error": err}));
    (status, body).into_response()
}

pub(crate) fn if_none_match(headers: &HeaderMap) -> Option<&str> {
    headers.get("if-none-match").and_then(|v| v.to_str().ok())
}

pub(crate) fn put_cache_headers(headers: &mut HeaderMap, etag: &str) {
    headers.insert("cache-control", HeaderValue::from_static("no-cache"));
    if let Ok(value) = HeaderValue::from_str(etag) {
        headers.insert("etag", value);
    }
}

/// A body computed from one snapshot, tagged with that snapshot's ETag.
struct Tagged<T> {
    etag: String,
    body: T,
}

fn tagged<T>(snapshot: &Snapshot, body: T) -> Tagged<T> {
    Tagged {
        etag: format!("\"{}\"", snapshot.digest),
        body,
    }
}

fn respond_tagged<T: Serialize>(
    trace: &RequestTrace,
    headers: &HeaderMap,
    result: HandlerResult<Tagged<T>>,
) -> Response {
    let response = result.and_then(|Tagged { etag, body }| {
        let mut response = if if_none_match(headers) == Some(etag.as_str()) {
            StatusCode::NOT_MODIFIED.into_response()
        } else {
            json_response(&body)?
        };
        put_cache_headers(response.headers_mut(), &etag);
        Ok(response)
    });
    response.unwrap_or_else(|err| error_response(trace, err))
}

fn respond<T: Serialize>(trace: &RequestTrace, result: HandlerResult<T>) -> Response {
    result
        .and_then(|body| json_response(&body))
        .unwrap_or_else(|err| error_response(trace, err))
}

pub(crate) fn serialize_payload<T: Serialize>(body: &T) -> HandlerResult<Vec<u8>> {
    serde_json::to_vec(body).map_err(|e| {
        warn!("json serialization failed: {e}");
        ApiError::internal()
    })
}

fn json_response<T: Serialize>(body: &T) -> HandlerResult<Response> {
    let bytes = serialize_payload(body)?;
    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        bytes,
    )
        .into_response())
}

fn error_response(trace: &RequestTrace, err: ApiError) -> Response {
    let err = err.with_request_id(trace.request_id.clone());
    let status = StatusCode::from_u16(map_error(&err).status_code)
        .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    if status.is_server_error() {
        warn!(code = err.code.as_str(), "request failed: {}", err.message);
    } else {
        debug!(code = err.code.as_str(), "request rejected: {}", err.message);
    }
    api_error_response(status, err)
}

fn to_btree(params: HashMap<String, String>) -> BTreeMap<String, String> {
    params.into_iter().collect()
}

async fn snapshot(state: &AppState) -> HandlerResult<Arc<Snapshot>> {
    state
        .catalog
        .current()
        .await
        .ok_or_else(|| ApiError::data_unavailable("record set not loaded"))
}

fn focus<'a>(snapshot: &'a Snapshot, raw_id: &str) -> HandlerResult<&'a CertificationRecord> {
    let id = parse_cert_id(raw_id)?;
    snapshot
        .records
        .get(&id)
        .ok_or_else(|| ApiError::not_found(&id))
}

pub(crate) async fn healthz_handler() -> &'static str {
    "ok"
}

pub(crate) async fn readyz_handler(
    State(state): State<AppState>,
    Extension(trace): Extension<RequestTrace>,
) -> Response {
    let result = if !state.accepting_requests.load(Ordering::Relaxed) {
        Err(ApiError::data_unavailable("server is draining"))
    } else {
        snapshot(&state)
            .await
            .map(|s| json!({"status": "ready", "records": s.records.len()}))
    };
    respond(&trace, result)
}

pub(crate) async fn openapi_handler() -> Json<serde_json::Value> {
    Json(openapi_v1_spec())
}

pub(crate) async fn version_handler(State(state): State<AppState>) -> Json<VersionDto> {
    let current = state.catalog.current().await;
    Json(VersionDto {
        service: crate::CRATE_NAME.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        api_version: API_VERSION.to_string(),
        dataset_digest: current.as_ref().map(|s| s.digest.clone()),
        record_count: current.as_ref().map_or(0, |s| s.records.len()),
    })
}

pub(crate) async fn providers_handler(
    State(state): State<AppState>,
    Extension(trace): Extension<RequestTrace>,
    headers: HeaderMap,
) -> Response {
    let result = snapshot(&state)
        .await
        .map(|s| tagged(&s, providers_dto(&count_by_provider(s.records.as_ref()))));
    respond_tagged(&trace, &headers, result)
}

async fn certifications(
    state: &AppState,
    params: HashMap<String, String>,
) -> HandlerResult<Tagged<CertificationListDto>> {
    let filter = parse_filter_params(&to_btree(params))?;
    let s = snapshot(state).await?;
    Ok(tagged(&s, certification_list_dto(&filter.select(s.records.as_ref()))))
}

pub(crate) async fn certifications_handler(
    State(state): State<AppState>,
    Extension(trace): Extension<RequestTrace>,
    headers: HeaderMap,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    respond_tagged(&trace, &headers, certifications(&state, params).await)
}

async fn certification(state: &AppState, id: &str) -> HandlerResult<Tagged<CertificationDetailDto>> {
    let s = snapshot(state).await?;
    let record = focus(&s, id)?;
    let body = certification_detail_dto(&learning_path(record, &s.records));
    Ok(tagged(&s, body))
}

pub(crate) async fn certification_handler(
    State(state): State<AppState>,
    Extension(trace): Extension<RequestTrace>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Response {
    respond_tagged(&trace, &headers, certification(&state, &id).await)
}

async fn relations(state: &AppState, id: &str) -> HandlerResult<Tagged<RelationsResponseDto>> {
    let s = snapshot(state).await?;
    let record = focus(&s, id)?;
    let body = relations_dto(record, &relations_of(record, &s.records));
    Ok(tagged(&s, body))
}

pub(crate) async fn relations_handler(
    State(state): State<AppState>,
    Extension(trace): Extension<RequestTrace>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Response {
    respond_tagged(&trace, &headers, relations(&state, &id).await)
}

async fn explorer(
    state: &AppState,
    params: HashMap<String, String>,
) -> HandlerResult<Tagged<ExplorerResponseDto>> {
    let filter = parse_filter_params(&to_btree(params))?;
    let s = snapshot(state).await?;
    Ok(tagged(&s, explorer_dto(&filter.group(s.records.as_ref()))))
}

pub(crate) async fn explorer_handler(
    State(state): State<AppState>,
    Extension(trace): Extension<RequestTrace>,
    headers: HeaderMap,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    respond_tagged(&trace, &headers, explorer(&state, params).await)
}

async fn compare(state: &AppState, params: HashMap<String, String>) -> HandlerResult<Tagged<ComparisonDto>> {
    let parsed = parse_compare_params(&to_btree(params))?;
    let s = snapshot(state).await?;
    let comparison = compare_ids(&s.records, &parsed.left, &parsed.right)?;
    Ok(tagged(&s, comparison_dto(&comparison)))
}

pub(crate) async fn compare_handler(
    State(state): State<AppState>,
    Extension(trace): Extension<RequestTrace>,
    headers: HeaderMap,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    respond_tagged(&trace, &headers, compare(&state, params).await)
}

async fn compare_batch(
    state: &AppState,
    params: HashMap<String, String>,
) -> HandlerResult<Tagged<BatchComparisonDto>> {
    let parsed = parse_batch_compare_params_with_max(&to_btree(params), state.api.max_batch_ids)?;
    let s = snapshot(state).await?;
    let comparisons = compare_many_ids(&s.records, parsed.ids.as_slice())?;
    Ok(tagged(&s, batch_comparison_dto(&comparisons)))
}

pub(crate) async fn compare_batch_handler(
    State(state): State<AppState>,
    Extension(trace): Extension<RequestTrace>,
    headers: HeaderMap,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    respond_tagged(&trace, &headers, compare_batch(&state, params).await)
}

pub(crate) async fn compare_options_handler(
    State(state): State<AppState>,
    Extension(trace): Extension<RequestTrace>,
    headers: HeaderMap,
) -> Response {
    let result = snapshot(&state)
        .await
        .map(|s| tagged(&s, compare_options_dto(&compare_options(s.records.as_ref()))));
    respond_tagged(&trace, &headers, result)
}
