// SPDX-License-Identifier: Apache-2.0

use cloudpath_query::{QueryError, QueryErrorCode};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

pub const UNKNOWN_REQUEST_ID: &str = "req-unknown";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ApiErrorCode {
    InvalidQueryParameter,
    MissingParameter,
    CertificationNotFound,
    DataUnavailable,
    Internal,
}

impl ApiErrorCode {
    pub const ALL: [Self; 5] = [
        Self::InvalidQueryParameter,
        Self::MissingParameter,
        Self::CertificationNotFound,
        Self::DataUnavailable,
        Self::Internal,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InvalidQueryParameter => "InvalidQueryParameter",
            Self::MissingParameter => "MissingParameter",
            Self::CertificationNotFound => "CertificationNotFound",
            Self::DataUnavailable => "DataUnavailable",
            Self::Internal => "Internal",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ApiError {
    pub code: ApiErrorCode,
    pub message: String,
    pub details: Value,
    pub request_id: String,
}

impl ApiError {
    #[must_use]
    pub fn new(
        code: ApiErrorCode,
        message: impl Into<String>,
        details: Value,
        request_id: impl Into<String>,
    ) -> Self {
        Self {
            code,
            message: message.into(),
            details,
            request_id: request_id.into(),
        }
    }

    #[must_use]
    pub fn with_request_id(mut self, request_id: impl Into<String>) -> Self {
        self.request_id = request_id.into();
        self
    }

    #[must_use]
    pub fn invalid_param(name: &str, value: &str) -> Self {
        Self::new(
            ApiErrorCode::InvalidQueryParameter,
            format!("invalid query parameter: {name}"),
            json!({"field_errors":[{"parameter": name, "reason": "invalid", "value": value}]}),
            UNKNOWN_REQUEST_ID,
        )
    }

    #[must_use]
    pub fn missing_param(name: &str) -> Self {
        Self::new(
            ApiErrorCode::MissingParameter,
            format!("missing query parameter: {name}"),
            json!({"parameter": name}),
            UNKNOWN_REQUEST_ID,
        )
    }

    #[must_use]
    pub fn not_found(id: &str) -> Self {
        Self::new(
            ApiErrorCode::CertificationNotFound,
            format!("certification not found: {id}"),
            json!({"id": id}),
            UNKNOWN_REQUEST_ID,
        )
    }

    #[must_use]
    pub fn data_unavailable(message: impl Into<String>) -> Self {
        Self::new(
            ApiErrorCode::DataUnavailable,
            message,
            json!({}),
            UNKNOWN_REQUEST_ID,
        )
    }

    /// Internal failures never leak their cause to the client.
    #[must_use]
    pub fn internal() -> Self {
        Self::new(
            ApiErrorCode::Internal,
            "internal error",
            json!({}),
            UNKNOWN_REQUEST_ID,
        )
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code.as_str(), self.message)
    }
}
impl std::error::Error for ApiError {}

impl From<QueryError> for ApiError {
    fn from(value: QueryError) -> Self {
        let code = match value.code {
            QueryErrorCode::InvalidInput => ApiErrorCode::InvalidQueryParameter,
            QueryErrorCode::NotFound => ApiErrorCode::CertificationNotFound,
            QueryErrorCode::DataUnavailable => ApiErrorCode::DataUnavailable,
        };
        Self::new(code, value.message, json!({}), UNKNOWN_REQUEST_ID)
    }
}

const _: fn() = || {
    fn assert_traits<T: Serialize + for<'de> Deserialize<'de>>() {}
    assert_traits::<ApiErrorCode>();
};
