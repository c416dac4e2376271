// SPDX-License-Identifier: Apache-2.0

use cloudpath_model::{CertificationRecord, Provider};
use std::collections::BTreeMap;

/// Count per provider. Every provider is present, with 0 when absent.
#[must_use]
pub fn count_by_provider<'a, I>(records: I) -> BTreeMap<Provider, usize>
where
    I: IntoIterator<Item = &'a CertificationRecord>,
{
    let mut counts: BTreeMap<Provider, usize> = Provider::ALL.iter().map(|p| (*p, 0)).collect();
    for record in records {
        *counts.entry(record.provider).or_insert(0) += 1;
    }
    counts
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderGroup<'a> {
    pub provider: Provider,
    pub records: Vec<&'a CertificationRecord>,
}

/// Picker options for the compare view: providers in [`Provider::ALL`] order,
/// each group sorted by difficulty with unspecified last. Empty providers are skipped.
#[must_use]
pub fn compare_options<'a, I>(records: I) -> Vec<ProviderGroup<'a>>
where
    I: IntoIterator<Item = &'a CertificationRecord>,
{
    let mut grouped: BTreeMap<Provider, Vec<&'a CertificationRecord>> = BTreeMap::new();
    for record in records {
        grouped.entry(record.provider).or_default().push(record);
    }
    Provider::ALL
        .iter()
        .filter_map(|provider| {
            let mut records = grouped.remove(provider)?;
            records.sort_by_key(|r| r.difficulty.map_or(u8::MAX, |d| d.order()));
            Some(ProviderGroup {
                provider: *provider,
                records,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use cloudpath_model::{CertId, Difficulty, Level};

    fn record(id: &str, provider: Provider, difficulty: Option<Difficulty>) -> CertificationRecord {
        let mut r = CertificationRecord::new(CertId::parse(id).expect("id"), provider, Level::Associate);
        r.difficulty = difficulty;
        r
    }

    #[test]
    fn counts_cover_every_provider() {
        let records = vec![record("a", Provider::Gcp, None)];
        let counts = count_by_provider(&records);
        assert_eq!(counts.len(), 3);
        assert_eq!(counts[&Provider::Aws], 0);
        assert_eq!(counts[&Provider::Gcp], 1);
    }

    #[test]
    fn options_sort_by_difficulty_and_keep_ties_stable() {
        let records = vec![
            record("none", Provider::Aws, None),
            record("adv", Provider::Aws, Some(Difficulty::Advanced)),
            record("beg-1", Provider::Aws, Some(Difficulty::Beginner)),
            record("gcp", Provider::Gcp, None),
            record("beg-2", Provider::Aws, Some(Difficulty::Beginner)),
        ];
        let groups = compare_options(&records);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].provider, Provider::Aws);
        let ids: Vec<&str> = groups[0].records.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["beg-1", "beg-2", "adv", "none"]);
        assert_eq!(groups[1].provider, Provider::Gcp);
    }
}
