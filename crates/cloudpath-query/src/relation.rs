// SPDX-License-Identifier: Apache-2.0

use cloudpath_model::{CertId, CertificationRecord, RecordSet};
use serde::{Deserialize, Serialize};

/// How a candidate relates to the focus record, one hop out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelationKind {
    #[serde(rename = "self")]
    Itself,
    Prerequisite,
    Successor,
    Unrelated,
}

impl RelationKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Itself => "self",
            Self::Prerequisite => "prerequisite",
            Self::Successor => "successor",
            Self::Unrelated => "unrelated",
        }
    }
}

/// First match wins: identity, then prerequisites, then successors.
/// Ids compare case-insensitively, the same way `RecordSet::get` resolves them;
/// a record listing itself as a prerequisite is still `Itself`.
#[must_use]
pub fn classify(focus: &CertificationRecord, candidate: &CertificationRecord) -> RelationKind {
    let key = candidate.id.lookup_key();
    let listed = |ids: &[CertId]| ids.iter().any(|id| id.lookup_key() == key);
    if focus.id.lookup_key() == key {
        RelationKind::Itself
    } else if listed(&focus.prerequisites) {
        RelationKind::Prerequisite
    } else if listed(&focus.leads_to) {
        RelationKind::Successor
    } else {
        RelationKind::Unrelated
    }
}

/// A reference after lookup. `record` is `None` for dangling ids.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedRef<'a> {
    pub id: &'a CertId,
    pub record: Option<&'a CertificationRecord>,
}

impl ResolvedRef<'_> {
    #[must_use]
    pub fn is_missing(&self) -> bool {
        self.record.is_none()
    }
}

/// Looks up every id in order. Never fails; unknown ids resolve to `None`.
#[must_use]
pub fn resolve_refs<'a>(ids: &'a [CertId], set: &'a RecordSet) -> Vec<ResolvedRef<'a>> {
    ids.iter()
        .map(|id| ResolvedRef {
            id,
            record: set.get(id.as_str()),
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Highlight {
    pub relation: RelationKind,
    /// Prerequisite or successor within the focus provider.
    pub emphasized: bool,
    pub dimmed: bool,
}

/// Explorer highlighting. Path emphasis stays inside the focus provider;
/// a cross-provider prerequisite is reported but dimmed.
#[must_use]
pub fn highlight(focus: &CertificationRecord, candidate: &CertificationRecord) -> Highlight {
    let relation = classify(focus, candidate);
    let same_provider = focus.provider == candidate.provider;
    let on_path = matches!(
        relation,
        RelationKind::Prerequisite | RelationKind::Successor
    );
    Highlight {
        relation,
        emphasized: on_path && same_provider,
        dimmed: relation == RelationKind::Unrelated || !same_provider,
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RelatedRecord<'a> {
    pub id: &'a CertId,
    #[serde(flatten)]
    pub highlight: Highlight,
}

/// `highlight` against every record of the set, in set order.
#[must_use]
pub fn relations_of<'a>(focus: &CertificationRecord, set: &'a RecordSet) -> Vec<RelatedRecord<'a>> {
    set.iter()
        .map(|candidate| RelatedRecord {
            id: &candidate.id,
            highlight: highlight(focus, candidate),
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LearningPath<'a> {
    pub prerequisites: Vec<ResolvedRef<'a>>,
    pub current: &'a CertificationRecord,
    pub successors: Vec<ResolvedRef<'a>>,
}

#[must_use]
pub fn learning_path<'a>(focus: &'a CertificationRecord, set: &'a RecordSet) -> LearningPath<'a> {
    LearningPath {
        prerequisites: resolve_refs(&focus.prerequisites, set),
        current: focus,
        successors: resolve_refs(&focus.leads_to, set),
    }
}
