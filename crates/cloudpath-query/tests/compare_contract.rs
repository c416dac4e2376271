// SPDX-License-Identifier: Apache-2.0

use cloudpath_model::{CertId, CertificationRecord, Level, Provider, RecordSet};
use cloudpath_query::{compare, compare_ids, compare_many, compare_many_ids, QueryErrorCode};

fn record(id: &str, level: Level) -> CertificationRecord {
    CertificationRecord::new(CertId::parse(id).expect("id"), Provider::Aws, level)
}

fn tags(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| (*v).to_string()).collect()
}

fn associate_and_professional() -> (CertificationRecord, CertificationRecord) {
    let mut a = record("aws-saa", Level::Associate);
    a.role = tags(&["Developer", "Ops"]);
    a.cost = Some(150);
    a.duration_hours = Some(30);
    let mut b = record("aws-sap", Level::Professional);
    b.role = tags(&["Ops", "Security"]);
    b.cost = Some(225);
    b.duration_hours = Some(50);
    (a, b)
}

#[test]
fn associate_versus_professional_summary() {
    let (a, b) = associate_and_professional();
    let summary = compare(&a, &b);
    assert_eq!(summary.level_difference, -1);
    assert_eq!(summary.role_overlap_percent, 33.3);
    assert_eq!(summary.domain_overlap_percent, 0.0);
    assert_eq!(summary.cost_delta, -75);
    assert_eq!(summary.duration_delta, -20);
}

#[test]
fn summary_serializes_with_camel_case_keys() {
    let (a, b) = associate_and_professional();
    let value = serde_json::to_value(compare(&a, &b)).expect("encode");
    assert_eq!(value["levelDifference"], -1);
    assert_eq!(value["roleOverlapPercent"], 33.3);
    assert_eq!(value["domainOverlapPercent"], 0.0);
    assert_eq!(value["costDelta"], -75);
    assert_eq!(value["durationDelta"], -20);
}

#[test]
fn self_comparison_is_neutral() {
    let (a, _) = associate_and_professional();
    let summary = compare(&a, &a);
    assert_eq!(summary.level_difference, 0);
    assert_eq!(summary.cost_delta, 0);
    assert_eq!(summary.duration_delta, 0);
    assert_eq!(summary.role_overlap_percent, 100.0);
    // No domains on either side.
    assert_eq!(summary.domain_overlap_percent, 0.0);
}

#[test]
fn expert_and_professional_share_rank_and_specialty_is_unranked() {
    let expert = record("x", Level::Expert);
    let professional = record("p", Level::Professional);
    let specialty = record("s", Level::Specialty);
    assert_eq!(compare(&expert, &professional).level_difference, 0);
    assert_eq!(compare(&specialty, &professional).level_difference, -3);
}

#[test]
fn absent_numeric_fields_count_as_zero() {
    let mut a = record("a", Level::Associate);
    a.cost = Some(300);
    let b = record("b", Level::Associate);
    let summary = compare(&a, &b);
    assert_eq!(summary.cost_delta, 300);
    assert_eq!(summary.duration_delta, 0);
}

#[test]
fn overlap_ignores_tag_case_and_whitespace() {
    let mut a = record("a", Level::Associate);
    a.domains = tags(&[" Networking", "Storage"]);
    let mut b = record("b", Level::Associate);
    b.domains = tags(&["networking ", "STORAGE", "storage"]);
    assert_eq!(compare(&a, &b).domain_overlap_percent, 100.0);
}

fn set() -> RecordSet {
    let (a, b) = associate_and_professional();
    RecordSet::new(vec![a, b, record("aws-clf", Level::Fundamental)]).expect("set")
}

#[test]
fn compare_ids_resolves_case_insensitively() {
    let set = set();
    let cmp = compare_ids(&set, "AWS-SAA", " aws-sap ").expect("compare");
    assert_eq!(cmp.left.id.as_str(), "aws-saa");
    assert_eq!(cmp.right.id.as_str(), "aws-sap");
    assert_eq!(cmp.summary.level_difference, -1);
}

#[test]
fn compare_ids_rejects_bad_input() {
    let set = set();
    let blank = compare_ids(&set, "", "aws-sap").expect_err("blank");
    assert_eq!(blank.code, QueryErrorCode::InvalidInput);
    let same = compare_ids(&set, "aws-saa", "AWS-SAA").expect_err("same");
    assert_eq!(same.code, QueryErrorCode::InvalidInput);
    let missing = compare_ids(&set, "aws-saa", "nope").expect_err("missing");
    assert_eq!(missing.code, QueryErrorCode::NotFound);
    assert!(missing.message.contains("nope"));
}

#[test]
fn compare_many_emits_pairs_in_input_order() {
    let set = set();
    let records: Vec<&CertificationRecord> = set.iter().collect();
    let pairs = compare_many(&records);
    let ids: Vec<(&str, &str)> = pairs
        .iter()
        .map(|p| (p.left.id.as_str(), p.right.id.as_str()))
        .collect();
    assert_eq!(
        ids,
        vec![
            ("aws-saa", "aws-sap"),
            ("aws-saa", "aws-clf"),
            ("aws-sap", "aws-clf"),
        ]
    );
    assert!(compare_many(&records[..1]).is_empty());
}

#[test]
fn compare_many_ids_bounds_and_duplicates() {
    let set = set();
    assert_eq!(compare_many_ids(&set, &["aws-saa", "aws-sap"]).expect("pair").len(), 1);
    assert_eq!(
        compare_many_ids(&set, &["aws-saa", "aws-sap", "aws-clf"])
            .expect("triple")
            .len(),
        3
    );
    let one = compare_many_ids(&set, &["aws-saa"]).expect_err("one");
    assert_eq!(one.code, QueryErrorCode::InvalidInput);
    let four = compare_many_ids(&set, &["a", "b", "c", "d"]).expect_err("four");
    assert_eq!(four.code, QueryErrorCode::InvalidInput);
    let dup = compare_many_ids(&set, &["aws-saa", "AWS-SAA"]).expect_err("dup");
    assert_eq!(dup.code, QueryErrorCode::InvalidInput);
    let unknown = compare_many_ids(&set, &["aws-saa", "ghost"]).expect_err("unknown");
    assert_eq!(unknown.code, QueryErrorCode::NotFound);
}
