// SPDX-License-Identifier: Apache-2.0

use cloudpath_query::MAX_COMPARE_SET;
use serde::Serialize;
use std::path::PathBuf;
use std::time::Duration;

pub const ENV_CLOUDPATH_BIND: &str = "CLOUDPATH_BIND";
pub const ENV_CLOUDPATH_RELOAD_INTERVAL_MS: &str = "CLOUDPATH_RELOAD_INTERVAL_MS";
pub const ENV_CLOUDPATH_MAX_BATCH_IDS: &str = "CLOUDPATH_MAX_BATCH_IDS";
pub const ENV_CLOUDPATH_SHUTDOWN_DRAIN_MS: &str = "CLOUDPATH_SHUTDOWN_DRAIN_MS";

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
/// Smallest non-zero reload interval accepted at startup.
pub const MIN_RELOAD_INTERVAL: Duration = Duration::from_millis(250);

#[derive(Debug, Clone, Serialize)]
pub struct ServerConfig {
    pub bind_addr: String,
    pub data_path: PathBuf,
    /// Zero disables background reload.
    pub reload_interval: Duration,
    pub shutdown_drain: Duration,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            data_path: PathBuf::from(cloudpath_core::DEFAULT_DATA_PATH),
            reload_interval: Duration::ZERO,
            shutdown_drain: Duration::from_millis(2000),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ApiConfig {
    pub max_batch_ids: usize,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            max_batch_ids: MAX_COMPARE_SET,
        }
    }
}

pub fn validate_startup_config(server: &ServerConfig, api: &ApiConfig) -> Result<(), String> {
    if server.bind_addr.parse::<std::net::SocketAddr>().is_err() {
        return Err(format!("invalid bind address: {}", server.bind_addr));
    }
    if server.data_path.as_os_str().is_empty() {
        return Err("data path must be non-empty".to_string());
    }
    if !server.reload_interval.is_zero() && server.reload_interval < MIN_RELOAD_INTERVAL {
        return Err(format!(
            "reload interval must be 0 or >= {}ms",
            MIN_RELOAD_INTERVAL.as_millis()
        ));
    }
    if api.max_batch_ids < 2 || api.max_batch_ids > MAX_COMPARE_SET {
        return Err(format!(
            "max batch ids must be between 2 and {MAX_COMPARE_SET}"
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_pass_validation() {
        validate_startup_config(&ServerConfig::default(), &ApiConfig::default())
            .expect("defaults valid");
    }

    #[test]
    fn startup_config_validation_rejects_bad_values() {
        let api = ApiConfig::default();
        let server = ServerConfig {
            bind_addr: "not-an-addr".to_string(),
            ..ServerConfig::default()
        };
        let err = validate_startup_config(&server, &api).expect_err("bad bind");
        assert!(err.contains("bind address"));

        let server = ServerConfig {
            reload_interval: Duration::from_millis(10),
            ..ServerConfig::default()
        };
        let err = validate_startup_config(&server, &api).expect_err("fast reload");
        assert!(err.contains("reload interval"));

        let api = ApiConfig { max_batch_ids: 1 };
        let err = validate_startup_config(&ServerConfig::default(), &api).expect_err("batch");
        assert!(err.contains("max batch ids"));
    }
}
