// SPDX-License-Identifier: Apache-2.0

use cloudpath_model::{CertId, CertificationRecord, Level, Provider};
use cloudpath_query::{ComparisonSummary, RelationKind};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VersionDto {
    pub service: String,
    pub version: String,
    pub api_version: String,
    pub dataset_digest: Option<String>,
    pub record_count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProviderCountDto {
    pub provider: Provider,
    pub display_name: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProvidersResponseDto {
    pub providers: Vec<ProviderCountDto>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CertificationListDto {
    pub count: usize,
    pub certifications: Vec<CertificationRecord>,
}

/// A prerequisite or successor reference; `record` is null when dangling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CertRefDto {
    pub id: CertId,
    pub record: Option<CertificationRecord>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CertificationDetailDto {
    pub certification: CertificationRecord,
    pub prerequisites: Vec<CertRefDto>,
    pub successors: Vec<CertRefDto>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RelatedDto {
    pub id: CertId,
    pub relation: RelationKind,
    pub emphasized: bool,
    pub dimmed: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RelationsResponseDto {
    pub focus: CertId,
    pub relations: Vec<RelatedDto>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LevelBucketDto {
    pub level: Level,
    pub certifications: Vec<CertificationRecord>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExplorerResponseDto {
    pub count: usize,
    pub buckets: Vec<LevelBucketDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ComparisonDto {
    pub left: CertificationRecord,
    pub right: CertificationRecord,
    pub summary: ComparisonSummary,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BatchComparisonDto {
    pub comparisons: Vec<ComparisonDto>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CompareOptionGroupDto {
    pub provider: Provider,
    pub certifications: Vec<CertificationRecord>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CompareOptionsDto {
    pub groups: Vec<CompareOptionGroupDto>,
}
