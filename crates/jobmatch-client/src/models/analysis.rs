use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Qualitative score for one evaluation axis.
///
/// Totally ordered from `VeryLow` to `VeryHigh`; `Unknown` marks an absent or
/// failed evaluation and does not compare against the ordered levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchLevel {
    VeryLow,
    Low,
    Medium,
    High,
    VeryHigh,
    Unknown,
}

impl MatchLevel {
    fn rank(self) -> Option<u8> {
        match self {
            MatchLevel::VeryLow => Some(0),
            MatchLevel::Low => Some(1),
            MatchLevel::Medium => Some(2),
            MatchLevel::High => Some(3),
            MatchLevel::VeryHigh => Some(4),
            MatchLevel::Unknown => None,
        }
    }

    /// Display label for presentation layers.
    pub fn label(self) -> &'static str {
        match self {
            MatchLevel::VeryLow => "Very Low",
            MatchLevel::Low => "Low",
            MatchLevel::Medium => "Medium",
            MatchLevel::High => "High",
            MatchLevel::VeryHigh => "Very High",
            MatchLevel::Unknown => "Unknown",
        }
    }
}

impl PartialOrd for MatchLevel {
    // `Unknown == Unknown` per PartialEq, so the pair must compare equal
    // here as well; the sentinel stays unordered against the ranked levels.
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self.rank(), other.rank()) {
            (Some(a), Some(b)) => Some(a.cmp(&b)),
            (None, None) => Some(Ordering::Equal),
            _ => None,
        }
    }
}

/// One evaluated dimension of a job match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Criteria {
    pub name: String,
    pub match_level: MatchLevel,
    pub comment: String,
}

impl Criteria {
    /// Placeholder for a criterion the service did not evaluate.
    pub fn unknown(name: &str) -> Self {
        Self {
            name: name.to_string(),
            match_level: MatchLevel::Unknown,
            comment: String::new(),
        }
    }
}

/// Canonical analysis shape returned to the presentation layer.
///
/// Exactly these seven criteria are always present; the normalizer repairs
/// missing ones to `Unknown` placeholders rather than dropping them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobAnalysis {
    pub company_name: String,
    pub role_name: String,
    pub role_fit: Criteria,
    pub tech_stack: Criteria,
    pub career_education: Criteria,
    pub location: Criteria,
    pub compensation: Criteria,
    pub culture: Criteria,
    pub growth_potential: Criteria,
    pub total_match_level: MatchLevel,
    pub key_strengths: Vec<String>,
    pub key_concerns: Vec<String>,
}

/// One persisted, timestamped outcome of a submission.
/// Immutable once created; removed only by explicit deletion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub id: String,
    pub timestamp: DateTime<Utc>,
    pub analysis: JobAnalysis,
}

impl AnalysisResult {
    /// UUIDv7 ids are unique and sort by creation time, so history ordering
    /// survives serialization.
    pub fn new(analysis: JobAnalysis) -> Self {
        Self {
            id: Uuid::now_v7().to_string(),
            timestamp: Utc::now(),
            analysis,
        }
    }
}
