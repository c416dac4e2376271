// SPDX-License-Identifier: Apache-2.0

use crate::helpers::{emit_ok, load_records};
use crate::{CliError, OutputMode};
use cloudpath_api::{certification_detail_dto, comparison_dto, explorer_dto};
use cloudpath_core::{ExitCode, MachineError};
use cloudpath_model::{CertificationRecord, Level, Provider};
use cloudpath_query::{
    compare_ids, count_by_provider, learning_path, ExplorerFilter, QueryError, QueryErrorCode,
    ResolvedRef,
};
use serde_json::json;
use std::collections::BTreeSet;
use std::fmt::Write as _;
use std::path::Path;

const MISSING_REF: &str = "N/A";

impl From<QueryError> for CliError {
    fn from(err: QueryError) -> Self {
        let exit_code = match err.code {
            QueryErrorCode::InvalidInput => ExitCode::Usage,
            QueryErrorCode::NotFound | QueryErrorCode::DataUnavailable => ExitCode::Validation,
        };
        Self {
            exit_code,
            machine: MachineError::new(err.code.as_str(), &err.message),
        }
    }
}

fn label(record: &CertificationRecord) -> String {
    if record.exam_code.is_empty() {
        format!("{} ({})", record.name, record.id)
    } else {
        format!("{} ({}, {})", record.name, record.id, record.exam_code)
    }
}

pub(crate) fn validate_catalog(path: &Path, output_mode: OutputMode) -> Result<(), CliError> {
    let records = load_records(path)?;
    let digest = records
        .digest()
        .map_err(|e| CliError::internal(e.to_string()))?;
    let counts = count_by_provider(&records);
    let providers: serde_json::Map<String, serde_json::Value> = Provider::ALL
        .iter()
        .map(|p| (p.as_str().to_string(), json!(counts.get(p).copied().unwrap_or(0))))
        .collect();
    let payload = json!({
        "command": "catalog validate",
        "status": "ok",
        "path": path,
        "records": records.len(),
        "providers": providers,
        "digest": digest,
    });
    emit_ok(output_mode, &payload, || {
        format!(
            "catalog validation: OK ({} records, digest {digest})",
            records.len()
        )
    })
}

pub(crate) fn compare(
    data: &Path,
    left: &str,
    right: &str,
    output_mode: OutputMode,
) -> Result<(), CliError> {
    let records = load_records(data)?;
    let comparison = compare_ids(&records, left, right)?;
    let dto = comparison_dto(&comparison);
    emit_ok(output_mode, &dto, || {
        let s = &dto.summary;
        let mut out = format!("{}\n  vs {}\n", label(&dto.left), label(&dto.right));
        let _ = writeln!(out, "  level difference   {:>7}", s.level_difference);
        let _ = writeln!(out, "  role overlap       {:>6.1}%", s.role_overlap_percent);
        let _ = writeln!(out, "  domain overlap     {:>6.1}%", s.domain_overlap_percent);
        let _ = writeln!(out, "  cost delta         {:>7}", s.cost_delta);
        let _ = write!(out, "  duration delta (h) {:>7}", s.duration_delta);
        out
    })
}

pub(crate) fn explore(
    data: &Path,
    providers: Vec<Provider>,
    levels: Vec<Level>,
    code: &str,
    output_mode: OutputMode,
) -> Result<(), CliError> {
    let records = load_records(data)?;
    let filter = ExplorerFilter::new(providers.into_iter().collect::<BTreeSet<_>>(), code)
        .with_levels(levels.into_iter().collect());
    let buckets = filter.group(&records);
    let dto = explorer_dto(&buckets);
    emit_ok(output_mode, &dto, || {
        if buckets.is_empty() {
            return "no certifications match".to_string();
        }
        let mut out = String::new();
        for (level, group) in buckets.iter() {
            let _ = writeln!(out, "{level} ({})", group.len());
            for record in group {
                let _ = writeln!(out, "  [{}] {}", record.provider, label(record));
            }
        }
        out.trim_end().to_string()
    })
}

fn render_ref(resolved: &ResolvedRef<'_>) -> String {
    match resolved.record {
        Some(record) => label(record),
        None => format!("{} {MISSING_REF}", resolved.id),
    }
}

pub(crate) fn path(data: &Path, id: &str, output_mode: OutputMode) -> Result<(), CliError> {
    let records = load_records(data)?;
    let trimmed = id.trim();
    if trimmed.is_empty() {
        return Err(QueryError::invalid_input("certification id is required").into());
    }
    let focus = records
        .get(trimmed)
        .ok_or_else(|| QueryError::not_found(trimmed))?;
    let path = learning_path(focus, &records);
    let dto = certification_detail_dto(&path);
    emit_ok(output_mode, &dto, || {
        let mut out = String::from("Prerequisites:\n");
        if path.prerequisites.is_empty() {
            out.push_str("  (none)\n");
        }
        for r in &path.prerequisites {
            let _ = writeln!(out, "  {}", render_ref(r));
        }
        let _ = writeln!(out, "Current:\n  {}", label(path.current));
        out.push_str("Next:\n");
        if path.successors.is_empty() {
            out.push_str("  (none)\n");
        }
        for r in &path.successors {
            let _ = writeln!(out, "  {}", render_ref(r));
        }
        out.trim_end().to_string()
    })
}
