// SPDX-License-Identifier: Apache-2.0

use crate::ids::CertId;
use crate::record_set::ValidationError;
use crate::taxonomy::{Difficulty, Level, Provider};
use serde::{Deserialize, Serialize};

pub const PASS_SCORE_MAX: u32 = 100;

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Resources {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub udemy: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub coursera: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub youtube: Vec<String>,
}

impl Resources {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.udemy.is_empty() && self.coursera.is_empty() && self.youtube.is_empty()
    }
}

/// One certification as loaded from the record source.
///
/// Numeric attributes stay optional here; [`CertificationRecord::numeric_facts`]
/// is the single place where an absent value becomes 0.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CertificationRecord {
    pub id: CertId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub exam_code: String,
    pub provider: Provider,
    pub level: Level,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(default)]
    pub role: Vec<String>,
    #[serde(default, alias = "focusAreas")]
    pub domains: Vec<String>,
    #[serde(default)]
    pub prerequisites: Vec<CertId>,
    #[serde(default)]
    pub leads_to: Vec<CertId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost: Option<u32>,
    #[serde(default, alias = "duration", skip_serializing_if = "Option::is_none")]
    pub duration_hours: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<Difficulty>,
    #[serde(default, alias = "passScore", skip_serializing_if = "Option::is_none")]
    pub pass_score_percent: Option<u32>,
    #[serde(default, alias = "validity", skip_serializing_if = "Option::is_none")]
    pub validity_years: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub official_link: Option<String>,
    #[serde(default, skip_serializing_if = "Resources::is_empty")]
    pub resources: Resources,
}

/// Numeric attributes with the absent-means-zero default applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NumericFacts {
    pub cost: u32,
    pub duration_hours: u32,
    pub pass_score_percent: u32,
    pub validity_years: u32,
}

impl CertificationRecord {
    #[must_use]
    pub fn new(id: CertId, provider: Provider, level: Level) -> Self {
        Self {
            id,
            name: String::new(),
            exam_code: String::new(),
            provider,
            level,
            description: String::new(),
            role: Vec::new(),
            domains: Vec::new(),
            prerequisites: Vec::new(),
            leads_to: Vec::new(),
            cost: None,
            duration_hours: None,
            difficulty: None,
            pass_score_percent: None,
            validity_years: None,
            official_link: None,
            resources: Resources::default(),
        }
    }

    #[must_use]
    pub fn numeric_facts(&self) -> NumericFacts {
        NumericFacts {
            cost: self.cost.unwrap_or(0),
            duration_hours: self.duration_hours.unwrap_or(0),
            pass_score_percent: self.pass_score_percent.unwrap_or(0),
            validity_years: self.validity_years.unwrap_or(0),
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(score) = self.pass_score_percent {
            if score > PASS_SCORE_MAX {
                return Err(ValidationError(format!(
                    "record {}: passScorePercent {score} exceeds {PASS_SCORE_MAX}",
                    self.id
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_facts_default_absent_fields_to_zero() {
        let mut record = CertificationRecord::new(
            CertId::parse("az-900").expect("id"),
            Provider::Azure,
            Level::Fundamental,
        );
        record.cost = Some(99);
        let facts = record.numeric_facts();
        assert_eq!(facts.cost, 99);
        assert_eq!(facts.duration_hours, 0);
        assert_eq!(facts.validity_years, 0);
    }

    #[test]
    fn validate_rejects_pass_score_above_hundred() {
        let mut record = CertificationRecord::new(
            CertId::parse("gcp-ace").expect("id"),
            Provider::Gcp,
            Level::Associate,
        );
        record.pass_score_percent = Some(101);
        let err = record.validate().expect_err("invalid score");
        assert!(err.0.contains("gcp-ace"));
    }
}
