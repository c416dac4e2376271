// SPDX-License-Identifier: Apache-2.0

#![forbid(unsafe_code)]
//! Transport-neutral HTTP contract: query parameter parsing, response DTOs,
//! error codes with their status mapping, and the OpenAPI document.

pub mod convert;
pub mod dto;
pub mod error_mapping;
mod errors;
pub mod openapi;
pub mod params;

pub use convert::{
    batch_comparison_dto, certification_detail_dto, certification_list_dto, compare_options_dto,
    comparison_dto, explorer_dto, providers_dto, relations_dto,
};
pub use dto::{
    BatchComparisonDto, CertRefDto, CertificationDetailDto, CertificationListDto,
    CompareOptionGroupDto, CompareOptionsDto, ComparisonDto, ExplorerResponseDto, LevelBucketDto,
    ProviderCountDto, ProvidersResponseDto, RelatedDto, RelationsResponseDto, VersionDto,
};
pub use error_mapping::{map_error, ApiErrorMapping};
pub use errors::{ApiError, ApiErrorCode, UNKNOWN_REQUEST_ID};
pub use openapi::openapi_v1_spec;
pub use params::{
    parse_batch_compare_params, parse_batch_compare_params_with_max, parse_cert_id,
    parse_compare_params, parse_filter_params, BatchCompareParams, CompareParams,
};

pub const CRATE_NAME: &str = "cloudpath-api";
pub const API_VERSION: &str = "v1";
