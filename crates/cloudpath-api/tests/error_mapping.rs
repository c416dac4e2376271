// SPDX-License-Identifier: Apache-2.0

use cloudpath_api::error_mapping::{map_error, API_ERROR_SCHEMA_REF};
use cloudpath_api::{ApiError, ApiErrorCode};
use serde_json::json;

#[test]
fn api_error_mapping_is_centralized_and_stable() {
    let expected = [
        (ApiErrorCode::InvalidQueryParameter, 400),
        (ApiErrorCode::MissingParameter, 400),
        (ApiErrorCode::CertificationNotFound, 404),
        (ApiErrorCode::DataUnavailable, 503),
        (ApiErrorCode::Internal, 500),
    ];
    for (code, status) in expected {
        let err = ApiError::new(code, "x", json!({}), "req-1");
        let mapping = map_error(&err);
        assert_eq!(mapping.status_code, status, "{code:?}");
        assert_eq!(mapping.schema_ref, API_ERROR_SCHEMA_REF);
    }
}

#[test]
fn api_error_wire_shape_is_strict() {
    let err = ApiError::not_found("az-999").with_request_id("req-7");
    let value = serde_json::to_value(&err).expect("encode");
    assert_eq!(
        value,
        json!({
            "code": "CertificationNotFound",
            "message": "certification not found: az-999",
            "details": {"id": "az-999"},
            "request_id": "req-7"
        })
    );
    let extra = json!({"code": "Internal", "message": "m", "details": {}, "request_id": "r", "x": 1});
    assert!(serde_json::from_value::<ApiError>(extra).is_err());
}
