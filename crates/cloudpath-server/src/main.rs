// SPDX-License-Identifier: Apache-2.0

#![forbid(unsafe_code)]

use cloudpath_core::{resolve_data_path, ENV_CLOUDPATH_LOG_JSON};
use cloudpath_server::{
    build_router, validate_startup_config, ApiConfig, AppState, Catalog, FileRecordSource,
    ServerConfig, DEFAULT_BIND_ADDR, ENV_CLOUDPATH_BIND, ENV_CLOUDPATH_MAX_BATCH_IDS,
    ENV_CLOUDPATH_RELOAD_INTERVAL_MS, ENV_CLOUDPATH_SHUTDOWN_DRAIN_MS,
};
use std::env;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn env_bool(name: &str, default: bool) -> bool {
    env::var(name)
        .ok()
        .and_then(|v| match v.as_str() {
            "1" | "true" | "TRUE" | "yes" | "YES" => Some(true),
            "0" | "false" | "FALSE" | "no" | "NO" => Some(false),
            _ => None,
        })
        .unwrap_or(default)
}

fn env_u64(name: &str, default: u64) -> u64 {
    env::var(name)
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(default)
}

fn env_usize(name: &str, default: usize) -> usize {
    env::var(name)
        .ok()
        .and_then(|v| v.parse::<usize>().ok())
        .unwrap_or(default)
}

fn env_duration_ms(name: &str, default_ms: u64) -> Duration {
    Duration::from_millis(env_u64(name, default_ms))
}

async fn wait_for_shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};
        match (
            signal(SignalKind::terminate()),
            signal(SignalKind::interrupt()),
        ) {
            (Ok(mut sigterm), Ok(mut sigint)) => {
                tokio::select! {
                    _ = sigterm.recv() => {}
                    _ = sigint.recv() => {}
                }
            }
            _ => {
                warn!("unix signal registration failed, falling back to ctrl-c");
                let _ = tokio::signal::ctrl_c().await;
            }
        }
    }
    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if env_bool(ENV_CLOUDPATH_LOG_JSON, true) {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}

#[tokio::main]
async fn main() -> Result<(), String> {
    init_tracing();

    let server_cfg = ServerConfig {
        bind_addr: env::var(ENV_CLOUDPATH_BIND).unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string()),
        data_path: resolve_data_path(None),
        reload_interval: env_duration_ms(ENV_CLOUDPATH_RELOAD_INTERVAL_MS, 0),
        shutdown_drain: env_duration_ms(ENV_CLOUDPATH_SHUTDOWN_DRAIN_MS, 2000),
    };
    let api_cfg = ApiConfig {
        max_batch_ids: env_usize(
            ENV_CLOUDPATH_MAX_BATCH_IDS,
            ApiConfig::default().max_batch_ids,
        ),
    };
    validate_startup_config(&server_cfg, &api_cfg)?;

    let source = Arc::new(FileRecordSource::new(server_cfg.data_path.clone()));
    let catalog = Catalog::new(source);
    // Serve even when the first load fails; readiness reports 503 until a reload succeeds.
    if let Err(e) = catalog.reload().await {
        error!("initial record set load failed: {e}");
    }
    if !server_cfg.reload_interval.is_zero() {
        catalog.spawn_reload_loop(server_cfg.reload_interval);
    }

    let state = AppState::with_config(catalog, api_cfg);
    let app = build_router(state.clone());

    let listener = TcpListener::bind(&server_cfg.bind_addr)
        .await
        .map_err(|e| format!("bind {} failed: {e}", server_cfg.bind_addr))?;
    info!(
        bind = %server_cfg.bind_addr,
        data_path = %server_cfg.data_path.display(),
        "cloudpath-server listening"
    );
    let accepting = state.accepting_requests.clone();
    let drain = server_cfg.shutdown_drain;
    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            wait_for_shutdown_signal().await;
            accepting.store(false, Ordering::Relaxed);
            info!(drain_ms = drain.as_millis() as u64, "shutdown requested, draining");
            tokio::time::sleep(drain).await;
        })
        .await
        .map_err(|e| format!("server failed: {e}"))
}
