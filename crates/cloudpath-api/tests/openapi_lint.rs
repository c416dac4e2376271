// SPDX-License-Identifier: Apache-2.0

use cloudpath_api::openapi::{openapi_v1_spec, referenced_schemas};
use cloudpath_api::ApiErrorCode;
use cloudpath_core::canonical;
use serde_json::Value;

#[test]
fn openapi_paths_and_component_schemas_are_lexicographically_sorted() {
    let spec = openapi_v1_spec();
    assert_sorted_object(spec.get("paths").expect("paths"));
    let schemas = spec
        .get("components")
        .and_then(|v| v.get("schemas"))
        .expect("components.schemas");
    assert_sorted_object(schemas);
}

#[test]
fn openapi_schema_lint_rules_hold() {
    let spec = openapi_v1_spec();
    assert_eq!(spec["openapi"], "3.0.3");
    assert_eq!(spec["info"]["version"], "v1");

    let api_error = &spec["components"]["schemas"]["ApiError"];
    assert_eq!(api_error["type"], "object");
    assert_eq!(api_error["additionalProperties"], Value::Bool(false));

    let required = api_error["required"]
        .as_array()
        .expect("ApiError.required array")
        .iter()
        .map(|v| v.as_str().expect("required string"))
        .collect::<Vec<_>>();
    assert_eq!(required, vec!["code", "message", "details", "request_id"]);
}

#[test]
fn every_ref_points_at_a_defined_schema() {
    let spec = openapi_v1_spec();
    let schemas = spec["components"]["schemas"]
        .as_object()
        .expect("schemas object");
    for name in referenced_schemas(&spec) {
        assert!(schemas.contains_key(&name), "undefined schema ref: {name}");
    }
}

#[test]
fn error_code_enum_lists_every_code() {
    let spec = openapi_v1_spec();
    let listed = spec["components"]["schemas"]["ApiErrorCode"]["enum"]
        .as_array()
        .expect("enum")
        .iter()
        .map(|v| v.as_str().expect("code").to_string())
        .collect::<Vec<_>>();
    for code in ApiErrorCode::ALL {
        let encoded = serde_json::to_value(code).expect("encode code");
        assert_eq!(encoded, code.as_str());
        assert!(listed.iter().any(|c| c == code.as_str()), "{code:?} missing");
    }
}

#[test]
fn every_served_route_is_documented() {
    let spec = openapi_v1_spec();
    let paths = spec["paths"].as_object().expect("paths");
    for route in [
        "/healthz",
        "/readyz",
        "/v1/version",
        "/v1/openapi.json",
        "/v1/providers",
        "/v1/certifications",
        "/v1/certifications/{id}",
        "/v1/certifications/{id}/relations",
        "/v1/explorer",
        "/v1/compare",
        "/v1/compare/batch",
        "/v1/compare/options",
    ] {
        assert!(paths.contains_key(route), "undocumented route: {route}");
    }
    assert_eq!(paths.len(), 12);
}

#[test]
fn data_routes_document_not_modified() {
    let spec = openapi_v1_spec();
    let paths = spec["paths"].as_object().expect("paths");
    for (path, item) in paths {
        let documented = item["get"]["responses"].get("304").is_some();
        let serves_data = path.starts_with("/v1/")
            && !matches!(path.as_str(), "/v1/version" | "/v1/openapi.json");
        assert_eq!(documented, serves_data, "{path}");
    }
}

#[test]
fn openapi_bytes_are_deterministic() {
    let a = canonical::stable_json_hash_hex(&openapi_v1_spec()).expect("hash a");
    let b = canonical::stable_json_hash_hex(&openapi_v1_spec()).expect("hash b");
    assert_eq!(a, b);
}

fn assert_sorted_object(value: &Value) {
    let object = value.as_object().expect("json object");
    let observed = object.keys().map(String::as_str).collect::<Vec<_>>();
    let mut sorted = observed.clone();
    sorted.sort_unstable();
    assert_eq!(observed, sorted);
}
