// SPDX-License-Identifier: Apache-2.0

#![forbid(unsafe_code)]
//! HTTP server for CloudPath record sets.

mod app;
mod catalog;
mod config;
mod http;
mod middleware;
mod store;

pub use app::{build_router, AppState};
pub use catalog::{Catalog, CatalogError, Snapshot};
pub use config::{
    validate_startup_config, ApiConfig, ServerConfig, DEFAULT_BIND_ADDR, ENV_CLOUDPATH_BIND,
    ENV_CLOUDPATH_MAX_BATCH_IDS, ENV_CLOUDPATH_RELOAD_INTERVAL_MS, ENV_CLOUDPATH_SHUTDOWN_DRAIN_MS,
    MIN_RELOAD_INTERVAL,
};
pub use http::request_tracing::RequestTrace;
pub use store::{FileRecordSource, RecordSource, SourceError, StaticRecordSource};

pub const CRATE_NAME: &str = "cloudpath-server";
