// SPDX-License-Identifier: Apache-2.0

use crate::errors::ApiError;
use cloudpath_model::{Level, Provider, ID_MAX_LEN};
use cloudpath_query::{ExplorerFilter, MAX_COMPARE_SET};
use std::collections::{BTreeMap, BTreeSet};
use std::str::FromStr;

pub const MAX_CODE_QUERY_BYTES: usize = 64;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompareParams {
    pub left: String,
    pub right: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchCompareParams {
    pub ids: Vec<String>,
}

pub fn parse_compare_params(query: &BTreeMap<String, String>) -> Result<CompareParams, ApiError> {
    let left = required_id(query, "left")?;
    let right = required_id(query, "right")?;
    if left.to_lowercase() == right.to_lowercase() {
        return Err(ApiError::invalid_param("right", &right));
    }
    Ok(CompareParams { left, right })
}

pub fn parse_batch_compare_params(
    query: &BTreeMap<String, String>,
) -> Result<BatchCompareParams, ApiError> {
    parse_batch_compare_params_with_max(query, MAX_COMPARE_SET)
}

pub fn parse_batch_compare_params_with_max(
    query: &BTreeMap<String, String>,
    max_ids: usize,
) -> Result<BatchCompareParams, ApiError> {
    let raw = query
        .get("ids")
        .ok_or_else(|| ApiError::missing_param("ids"))?;
    let mut ids = Vec::new();
    let mut seen = BTreeSet::new();
    for part in raw.split(',') {
        let id = part.trim();
        if id.is_empty() {
            continue;
        }
        check_id_len("ids", id)?;
        if !seen.insert(id.to_lowercase()) {
            return Err(ApiError::invalid_param("ids", raw));
        }
        ids.push(id.to_string());
    }
    if ids.len() < 2 || ids.len() > max_ids {
        return Err(ApiError::invalid_param("ids", raw));
    }
    Ok(BatchCompareParams { ids })
}

/// `provider` and `level` are comma lists; `code` is a loose exam-code query.
pub fn parse_filter_params(query: &BTreeMap<String, String>) -> Result<ExplorerFilter, ApiError> {
    let providers = parse_list::<Provider>(query, "provider")?;
    let levels = parse_list::<Level>(query, "level")?;
    let code = query.get("code").map(String::as_str).unwrap_or_default();
    if code.len() > MAX_CODE_QUERY_BYTES {
        return Err(ApiError::invalid_param("code", code));
    }
    Ok(ExplorerFilter::new(providers, code).with_levels(levels))
}

/// Path segment id: trimmed, non-empty, bounded.
pub fn parse_cert_id(raw: &str) -> Result<String, ApiError> {
    let id = raw.trim();
    if id.is_empty() {
        return Err(ApiError::missing_param("id"));
    }
    check_id_len("id", id)?;
    Ok(id.to_string())
}

fn required_id(query: &BTreeMap<String, String>, name: &str) -> Result<String, ApiError> {
    let value = query
        .get(name)
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
        .ok_or_else(|| ApiError::missing_param(name))?;
    check_id_len(name, value)?;
    Ok(value.to_string())
}

fn check_id_len(name: &str, id: &str) -> Result<(), ApiError> {
    if id.len() > ID_MAX_LEN {
        return Err(ApiError::invalid_param(name, id));
    }
    Ok(())
}

fn parse_list<T: FromStr + Ord>(
    query: &BTreeMap<String, String>,
    name: &str,
) -> Result<BTreeSet<T>, ApiError> {
    let Some(raw) = query.get(name) else {
        return Ok(BTreeSet::new());
    };
    let mut out = BTreeSet::new();
    for part in raw.split(',') {
        let value = part.trim();
        if value.is_empty() {
            continue;
        }
        let parsed = value
            .parse::<T>()
            .map_err(|_| ApiError::invalid_param(name, raw))?;
        out.insert(parsed);
    }
    Ok(out)
}
