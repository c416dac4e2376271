// SPDX-License-Identifier: Apache-2.0

use crate::{CliError, OutputMode};
use cloudpath_core::{canonical, resolve_data_path, ExitCode, MachineError};
use cloudpath_model::RecordSet;
use serde::Serialize;
use serde_json::json;
use std::path::{Path, PathBuf};

/// Prints `payload` as canonical JSON under `--json`, otherwise the human rendering.
pub(crate) fn emit_ok<T: Serialize>(
    output_mode: OutputMode,
    payload: &T,
    human: impl FnOnce() -> String,
) -> Result<(), CliError> {
    if output_mode.json {
        let bytes = canonical::stable_json_bytes(payload)
            .map_err(|e| CliError::internal(e.to_string()))?;
        let text = String::from_utf8(bytes).map_err(|e| CliError::internal(e.to_string()))?;
        println!("{text}");
    } else {
        println!("{}", human());
    }
    Ok(())
}

pub(crate) fn data_path(explicit: Option<&Path>) -> PathBuf {
    resolve_data_path(explicit.and_then(Path::to_str))
}

pub(crate) fn load_records(path: &Path) -> Result<RecordSet, CliError> {
    let bytes = std::fs::read(path).map_err(|e| CliError {
        exit_code: ExitCode::DependencyFailure,
        machine: MachineError::new("data_unreadable", &format!("failed to read record file: {e}"))
            .with_detail("path", &path.display().to_string()),
    })?;
    RecordSet::from_json_slice(&bytes).map_err(|e| CliError {
        exit_code: ExitCode::Validation,
        machine: MachineError::new("validation_error", &e.to_string())
            .with_detail("path", &path.display().to_string()),
    })
}

pub(crate) fn run_openapi_generate(out: PathBuf, output_mode: OutputMode) -> Result<(), CliError> {
    let spec = cloudpath_api::openapi_v1_spec();
    let bytes =
        canonical::stable_json_bytes(&spec).map_err(|e| CliError::internal(e.to_string()))?;
    if let Some(parent) = out.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| CliError::internal(e.to_string()))?;
    }
    std::fs::write(&out, &bytes).map_err(|e| CliError::internal(e.to_string()))?;
    let payload = json!({
        "command": "openapi generate",
        "status": "ok",
        "out": &out,
        "sha256": cloudpath_core::sha256_hex(&bytes),
    });
    emit_ok(output_mode, &payload, || {
        format!("wrote {}", out.display())
    })
}
