// SPDX-License-Identifier: Apache-2.0

use crate::catalog::Catalog;
use crate::config::ApiConfig;
use crate::http::handlers;
use crate::middleware::request_tracing::request_tracing_middleware;
use axum::middleware::from_fn_with_state;
use axum::routing::get;
use axum::Router;
use std::sync::atomic::{AtomicBool, AtomicU64};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub api: ApiConfig,
    pub(crate) request_id_seed: Arc<AtomicU64>,
    pub accepting_requests: Arc<AtomicBool>,
}

impl AppState {
    #[must_use]
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self::with_config(catalog, ApiConfig::default())
    }

    #[must_use]
    pub fn with_config(catalog: Arc<Catalog>, api: ApiConfig) -> Self {
        Self {
            catalog,
            api,
            request_id_seed: Arc::new(AtomicU64::new(1)),
            accepting_requests: Arc::new(AtomicBool::new(true)),
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(handlers::healthz_handler))
        .route("/readyz", get(handlers::readyz_handler))
        .route("/v1/openapi.json", get(handlers::openapi_handler))
        .route("/v1/version", get(handlers::version_handler))
        .route("/v1/providers", get(handlers::providers_handler))
        .route("/v1/certifications", get(handlers::certifications_handler))
        .route(
            "/v1/certifications/:id",
            get(handlers::certification_handler),
        )
        .route(
            "/v1/certifications/:id/relations",
            get(handlers::relations_handler),
        )
        .route("/v1/explorer", get(handlers::explorer_handler))
        .route("/v1/compare", get(handlers::compare_handler))
        .route("/v1/compare/batch", get(handlers::compare_batch_handler))
        .route(
            "/v1/compare/options",
            get(handlers::compare_options_handler),
        )
        .layer(from_fn_with_state(
            state.clone(),
            request_tracing_middleware,
        ))
        .with_state(state)
}
