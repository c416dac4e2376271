// SPDX-License-Identifier: Apache-2.0

#![forbid(unsafe_code)]
//! Shared primitives used by every CloudPath crate.

mod error;

pub mod canonical;

pub use error::{ExitCode, MachineError};

pub const CRATE_NAME: &str = "cloudpath-core";

pub const ENV_CLOUDPATH_LOG_JSON: &str = "CLOUDPATH_LOG_JSON";
pub const ENV_CLOUDPATH_DATA_PATH: &str = "CLOUDPATH_DATA_PATH";
pub const DEFAULT_DATA_PATH: &str = "data/certs.json";

#[must_use]
pub fn sha256_hex(bytes: &[u8]) -> String {
    canonical::stable_hash_hex(bytes)
}

#[must_use]
pub fn resolve_data_path(explicit: Option<&str>) -> std::path::PathBuf {
    if let Some(path) = explicit.map(str::trim).filter(|p| !p.is_empty()) {
        return std::path::PathBuf::from(path);
    }
    if let Ok(from_env) = std::env::var(ENV_CLOUDPATH_DATA_PATH) {
        let trimmed = from_env.trim();
        if !trimmed.is_empty() {
            return std::path::PathBuf::from(trimmed);
        }
    }
    std::path::PathBuf::from(DEFAULT_DATA_PATH)
}
