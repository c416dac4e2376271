// SPDX-License-Identifier: Apache-2.0

use crate::normalize::normalize_tags;
use crate::query_error::QueryError;
use cloudpath_model::{CertificationRecord, RecordSet};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Largest set the compare view accepts at once.
pub const MAX_COMPARE_SET: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonSummary {
    pub level_difference: i32,
    pub role_overlap_percent: f64,
    pub domain_overlap_percent: f64,
    pub cost_delta: i64,
    pub duration_delta: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Comparison<'a> {
    pub left: &'a CertificationRecord,
    pub right: &'a CertificationRecord,
    pub summary: ComparisonSummary,
}

/// Side-by-side summary of two records. Total: comparing a record with
/// itself is allowed and yields a zero delta with full tag overlap.
#[must_use]
pub fn compare(left: &CertificationRecord, right: &CertificationRecord) -> ComparisonSummary {
    let l = left.numeric_facts();
    let r = right.numeric_facts();
    ComparisonSummary {
        level_difference: left.level.rank() - right.level.rank(),
        role_overlap_percent: overlap_percent(&left.role, &right.role),
        domain_overlap_percent: overlap_percent(&left.domains, &right.domains),
        cost_delta: i64::from(l.cost) - i64::from(r.cost),
        duration_delta: i64::from(l.duration_hours) - i64::from(r.duration_hours),
    }
}

/// Jaccard overlap of two tag lists as a percentage with one decimal.
/// Two empty sets overlap 0%.
#[must_use]
pub fn overlap_percent<S: AsRef<str>>(left: &[S], right: &[S]) -> f64 {
    let left = normalize_tags(left);
    let right = normalize_tags(right);
    jaccard_percent(&left, &right)
}

fn jaccard_percent(left: &BTreeSet<String>, right: &BTreeSet<String>) -> f64 {
    let union = left.union(right).count();
    if union == 0 {
        return 0.0;
    }
    let shared = left.intersection(right).count();
    round_tenths(shared, union)
}

// f64::round rounds half away from zero.
fn round_tenths(part: usize, whole: usize) -> f64 {
    let tenths = (part as f64 * 1000.0 / whole as f64).round();
    tenths / 10.0
}

/// Resolves both ids against the set and compares them.
pub fn compare_ids<'a>(
    set: &'a RecordSet,
    left_id: &str,
    right_id: &str,
) -> Result<Comparison<'a>, QueryError> {
    let left_id = required_id("left", left_id)?;
    let right_id = required_id("right", right_id)?;
    if left_id.to_lowercase() == right_id.to_lowercase() {
        return Err(QueryError::invalid_input(format!(
            "cannot compare {left_id} with itself"
        )));
    }
    let left = resolve(set, left_id)?;
    let right = resolve(set, right_id)?;
    Ok(Comparison {
        left,
        right,
        summary: compare(left, right),
    })
}

/// Every unordered pair `(i, j)` with `i < j`, in input order.
#[must_use]
pub fn compare_many<'a>(records: &[&'a CertificationRecord]) -> Vec<Comparison<'a>> {
    let mut out = Vec::new();
    for (i, &left) in records.iter().enumerate() {
        for &right in &records[i + 1..] {
            out.push(Comparison {
                left,
                right,
                summary: compare(left, right),
            });
        }
    }
    out
}

pub fn compare_many_ids<'a, S: AsRef<str>>(
    set: &'a RecordSet,
    ids: &[S],
) -> Result<Vec<Comparison<'a>>, QueryError> {
    if ids.len() < 2 || ids.len() > MAX_COMPARE_SET {
        return Err(QueryError::invalid_input(format!(
            "compare needs between 2 and {MAX_COMPARE_SET} ids, got {}",
            ids.len()
        )));
    }
    let mut seen = BTreeSet::new();
    let mut records = Vec::with_capacity(ids.len());
    for raw in ids {
        let id = required_id("ids", raw.as_ref())?;
        if !seen.insert(id.to_lowercase()) {
            return Err(QueryError::invalid_input(format!("duplicate id: {id}")));
        }
        records.push(resolve(set, id)?);
    }
    Ok(compare_many(&records))
}

fn required_id<'s>(name: &str, raw: &'s str) -> Result<&'s str, QueryError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(QueryError::invalid_input(format!("{name} id is required")));
    }
    Ok(trimmed)
}

fn resolve<'a>(set: &'a RecordSet, id: &str) -> Result<&'a CertificationRecord, QueryError> {
    set.get(id).ok_or_else(|| QueryError::not_found(id))
}
