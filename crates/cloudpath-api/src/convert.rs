// SPDX-License-Identifier: Apache-2.0

use crate::dto::{
    BatchComparisonDto, CertRefDto, CertificationDetailDto, CertificationListDto,
    CompareOptionGroupDto, CompareOptionsDto, ComparisonDto, ExplorerResponseDto, LevelBucketDto,
    ProviderCountDto, ProvidersResponseDto, RelatedDto, RelationsResponseDto,
};
use cloudpath_model::{CertificationRecord, Provider};
use cloudpath_query::{Comparison, LearningPath, LevelBuckets, ProviderGroup, RelatedRecord, ResolvedRef};
use std::collections::BTreeMap;

fn owned(records: &[&CertificationRecord]) -> Vec<CertificationRecord> {
    records.iter().map(|r| (*r).clone()).collect()
}

fn cert_ref(resolved: &ResolvedRef<'_>) -> CertRefDto {
    CertRefDto {
        id: resolved.id.clone(),
        record: resolved.record.cloned(),
    }
}

#[must_use]
pub fn certification_list_dto(records: &[&CertificationRecord]) -> CertificationListDto {
    CertificationListDto {
        count: records.len(),
        certifications: owned(records),
    }
}

#[must_use]
pub fn providers_dto(counts: &BTreeMap<Provider, usize>) -> ProvidersResponseDto {
    let providers = Provider::ALL
        .iter()
        .map(|provider| ProviderCountDto {
            provider: *provider,
            display_name: provider.display_name().to_string(),
            count: counts.get(provider).copied().unwrap_or(0),
        })
        .collect();
    ProvidersResponseDto { providers }
}

#[must_use]
pub fn certification_detail_dto(path: &LearningPath<'_>) -> CertificationDetailDto {
    CertificationDetailDto {
        certification: path.current.clone(),
        prerequisites: path.prerequisites.iter().map(cert_ref).collect(),
        successors: path.successors.iter().map(cert_ref).collect(),
    }
}

#[must_use]
pub fn relations_dto(focus: &CertificationRecord, related: &[RelatedRecord<'_>]) -> RelationsResponseDto {
    RelationsResponseDto {
        focus: focus.id.clone(),
        relations: related
            .iter()
            .map(|r| RelatedDto {
                id: r.id.clone(),
                relation: r.highlight.relation,
                emphasized: r.highlight.emphasized,
                dimmed: r.highlight.dimmed,
            })
            .collect(),
    }
}

#[must_use]
pub fn explorer_dto(buckets: &LevelBuckets<'_>) -> ExplorerResponseDto {
    ExplorerResponseDto {
        count: buckets.record_count(),
        buckets: buckets
            .iter()
            .map(|(level, records)| LevelBucketDto {
                level,
                certifications: owned(records),
            })
            .collect(),
    }
}

#[must_use]
pub fn comparison_dto(comparison: &Comparison<'_>) -> ComparisonDto {
    ComparisonDto {
        left: comparison.left.clone(),
        right: comparison.right.clone(),
        summary: comparison.summary,
    }
}

#[must_use]
pub fn batch_comparison_dto(comparisons: &[Comparison<'_>]) -> BatchComparisonDto {
    BatchComparisonDto {
        comparisons: comparisons.iter().map(comparison_dto).collect(),
    }
}

#[must_use]
pub fn compare_options_dto(groups: &[ProviderGroup<'_>]) -> CompareOptionsDto {
    CompareOptionsDto {
        groups: groups
            .iter()
            .map(|g| CompareOptionGroupDto {
                provider: g.provider,
                certifications: owned(&g.records),
            })
            .collect(),
    }
}
