// SPDX-License-Identifier: Apache-2.0

use crate::normalize::normalize_exam_code;
use cloudpath_model::{CertificationRecord, Level, Provider};
use std::collections::{BTreeMap, BTreeSet};

/// Explorer controls. Empty sets and an empty code query filter nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExplorerFilter {
    pub providers: BTreeSet<Provider>,
    pub levels: BTreeSet<Level>,
    pub code_query: String,
}

impl ExplorerFilter {
    #[must_use]
    pub fn new(providers: BTreeSet<Provider>, code_query: impl Into<String>) -> Self {
        Self {
            providers,
            levels: BTreeSet::new(),
            code_query: code_query.into(),
        }
    }

    #[must_use]
    pub fn with_levels(mut self, levels: BTreeSet<Level>) -> Self {
        self.levels = levels;
        self
    }

    #[must_use]
    pub fn matcher(&self) -> ExplorerMatcher<'_> {
        ExplorerMatcher {
            filter: self,
            code: normalize_exam_code(&self.code_query),
        }
    }

    /// Flat list of matching records in input order.
    #[must_use]
    pub fn select<'a, I>(&self, records: I) -> Vec<&'a CertificationRecord>
    where
        I: IntoIterator<Item = &'a CertificationRecord>,
    {
        let matcher = self.matcher();
        records.into_iter().filter(|r| matcher.matches(r)).collect()
    }

    #[must_use]
    pub fn group<'a, I>(&self, records: I) -> LevelBuckets<'a>
    where
        I: IntoIterator<Item = &'a CertificationRecord>,
    {
        let mut buckets = LevelBuckets::default();
        for record in self.select(records) {
            buckets.push(record);
        }
        buckets
    }
}

/// An [`ExplorerFilter`] with its code query normalized once.
#[derive(Debug)]
pub struct ExplorerMatcher<'f> {
    filter: &'f ExplorerFilter,
    code: String,
}

impl ExplorerMatcher<'_> {
    #[must_use]
    pub fn matches(&self, record: &CertificationRecord) -> bool {
        let f = self.filter;
        (f.providers.is_empty() || f.providers.contains(&record.provider))
            && (f.levels.is_empty() || f.levels.contains(&record.level))
            && (self.code.is_empty() || normalize_exam_code(&record.exam_code).contains(&self.code))
    }
}

/// Records bucketed by level. Iteration follows [`Level::DISPLAY_ORDER`]
/// and skips empty levels; each bucket keeps input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LevelBuckets<'a> {
    buckets: BTreeMap<Level, Vec<&'a CertificationRecord>>,
}

impl<'a> LevelBuckets<'a> {
    fn push(&mut self, record: &'a CertificationRecord) {
        self.buckets.entry(record.level).or_default().push(record);
    }

    #[must_use]
    pub fn get(&self, level: Level) -> Option<&[&'a CertificationRecord]> {
        self.buckets.get(&level).map(Vec::as_slice)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Level, &[&'a CertificationRecord])> + '_ {
        self.buckets
            .iter()
            .map(|(level, records)| (*level, records.as_slice()))
    }

    #[must_use]
    pub fn levels(&self) -> Vec<Level> {
        self.buckets.keys().copied().collect()
    }

    /// Number of non-empty buckets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    #[must_use]
    pub fn record_count(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }
}

/// Provider and exam-code filtering followed by level bucketing.
#[must_use]
pub fn filter_and_group<'a, I>(
    records: I,
    provider_filter: &BTreeSet<Provider>,
    code_query: &str,
) -> LevelBuckets<'a>
where
    I: IntoIterator<Item = &'a CertificationRecord>,
{
    ExplorerFilter::new(provider_filter.clone(), code_query).group(records)
}
