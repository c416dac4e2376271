// SPDX-License-Identifier: Apache-2.0

#![forbid(unsafe_code)]
//! Pure queries over an immutable [`cloudpath_model::RecordSet`]: pairwise
//! comparison, one-hop relation resolution, and explorer grouping.

mod compare;
mod explore;
mod normalize;
mod query_error;
mod relation;
mod stats;

pub use compare::{
    compare, compare_ids, compare_many, compare_many_ids, overlap_percent, Comparison,
    ComparisonSummary, MAX_COMPARE_SET,
};
pub use explore::{filter_and_group, ExplorerFilter, ExplorerMatcher, LevelBuckets};
pub use normalize::{fold, normalize_exam_code, normalize_tags};
pub use query_error::{QueryError, QueryErrorCode};
pub use relation::{
    classify, highlight, learning_path, relations_of, resolve_refs, Highlight, LearningPath,
    RelatedRecord, RelationKind, ResolvedRef,
};
pub use stats::{compare_options, count_by_provider, ProviderGroup};

pub const CRATE_NAME: &str = "cloudpath-query";
