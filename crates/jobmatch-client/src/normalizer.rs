//! Turns an untyped service response into the canonical [`JobAnalysis`]
//! shape. Never errors and never mutates its input: untrusted structures are
//! replaced by a deterministic placeholder so the caller always has a
//! renderable value, and partially shaped responses are repaired field by
//! field with `Unknown` defaults.

use serde_json::Value;

use crate::models::{Criteria, JobAnalysis, MatchLevel};

const PLACEHOLDER_COMPANY: &str = "Sample Company";
const PLACEHOLDER_ROLE: &str = "Sample Role";
const FAILURE_TITLE: &str = "Error";

const ROLE_FIT: &str = "Role Fit";
const TECH_STACK: &str = "Tech Stack";
const CAREER_EDUCATION: &str = "Career & Education";
const LOCATION: &str = "Location";
const COMPENSATION: &str = "Compensation";
const CULTURE: &str = "Culture";
const GROWTH_POTENTIAL: &str = "Growth Potential";

/// Normalizes a parsed response body. The structure is trusted when both
/// `company_name` and `role_name` are present as non-empty strings; every
/// other field is then repaired individually. Anything else falls back to
/// the placeholder analysis.
pub fn normalize(raw: &Value) -> JobAnalysis {
    match (string_field(raw, "company_name"), string_field(raw, "role_name")) {
        (Some(company_name), Some(role_name)) => repair(raw, company_name, role_name),
        _ => placeholder(),
    }
}

fn repair(raw: &Value, company_name: String, role_name: String) -> JobAnalysis {
    JobAnalysis {
        company_name,
        role_name,
        role_fit: criterion(raw, "role_fit", ROLE_FIT),
        tech_stack: criterion(raw, "tech_stack", TECH_STACK),
        career_education: criterion(raw, "career_education", CAREER_EDUCATION),
        location: criterion(raw, "location", LOCATION),
        compensation: criterion(raw, "compensation", COMPENSATION),
        culture: criterion(raw, "culture", CULTURE),
        growth_potential: criterion(raw, "growth_potential", GROWTH_POTENTIAL),
        total_match_level: raw
            .get("total_match_level")
            .and_then(|v| serde_json::from_value(v.clone()).ok())
            .unwrap_or(MatchLevel::Unknown),
        key_strengths: string_list(raw, "key_strengths"),
        key_concerns: string_list(raw, "key_concerns"),
    }
}

/// Fixed, fully populated analysis used when the response cannot be trusted.
/// Keeps the presentation layer renderable while the service contract is
/// still settling.
pub fn placeholder() -> JobAnalysis {
    JobAnalysis {
        company_name: PLACEHOLDER_COMPANY.to_string(),
        role_name: PLACEHOLDER_ROLE.to_string(),
        role_fit: example(
            ROLE_FIT,
            MatchLevel::High,
            "Responsibilities line up with recent backend work",
        ),
        tech_stack: example(
            TECH_STACK,
            MatchLevel::VeryHigh,
            "Primary stack overlaps with the listed requirements",
        ),
        career_education: example(
            CAREER_EDUCATION,
            MatchLevel::Medium,
            "Experience level sits near the posted range",
        ),
        location: example(
            LOCATION,
            MatchLevel::High,
            "Within commuting distance or remote-friendly",
        ),
        compensation: example(
            COMPENSATION,
            MatchLevel::Medium,
            "Posting does not state a salary band",
        ),
        culture: example(CULTURE, MatchLevel::High, "Team values emphasize autonomy"),
        growth_potential: example(
            GROWTH_POTENTIAL,
            MatchLevel::High,
            "Role includes ownership of a new product area",
        ),
        total_match_level: MatchLevel::High,
        key_strengths: vec![
            "Strong overlap with the required stack".to_string(),
            "Relevant domain experience".to_string(),
        ],
        key_concerns: vec!["Compensation range not disclosed".to_string()],
    }
}

/// Synthetic record for a failed submission: every criterion `Unknown`, the
/// diagnostic text preserved in `key_concerns` so the failure stays visible
/// in history.
pub fn failure_analysis(diagnostic: &str) -> JobAnalysis {
    JobAnalysis {
        company_name: FAILURE_TITLE.to_string(),
        role_name: FAILURE_TITLE.to_string(),
        role_fit: Criteria::unknown(ROLE_FIT),
        tech_stack: Criteria::unknown(TECH_STACK),
        career_education: Criteria::unknown(CAREER_EDUCATION),
        location: Criteria::unknown(LOCATION),
        compensation: Criteria::unknown(COMPENSATION),
        culture: Criteria::unknown(CULTURE),
        growth_potential: Criteria::unknown(GROWTH_POTENTIAL),
        total_match_level: MatchLevel::Unknown,
        key_strengths: Vec::new(),
        key_concerns: vec![diagnostic.to_string()],
    }
}

fn string_field(raw: &Value, key: &str) -> Option<String> {
    raw.get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(String::from)
}

fn criterion(raw: &Value, key: &str, name: &str) -> Criteria {
    raw.get(key)
        .and_then(|v| serde_json::from_value(v.clone()).ok())
        .unwrap_or_else(|| Criteria::unknown(name))
}

fn string_list(raw: &Value, key: &str) -> Vec<String> {
    raw.get(key)
        .and_then(|v| serde_json::from_value(v.clone()).ok())
        .unwrap_or_default()
}

fn example(name: &str, match_level: MatchLevel, comment: &str) -> Criteria {
    Criteria {
        name: name.to_string(),
        match_level,
        comment: comment.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn trusted_response() -> Value {
        json!({
            "company_name": "Acme",
            "role_name": "Engineer",
            "role_fit": {"name": "Role Fit", "match_level": "high", "comment": "solid"},
            "tech_stack": {"name": "Tech Stack", "match_level": "very_high", "comment": "rust"},
            "career_education": {"name": "Career & Education", "match_level": "medium", "comment": ""},
            "location": {"name": "Location", "match_level": "high", "comment": "remote"},
            "compensation": {"name": "Compensation", "match_level": "low", "comment": "below range"},
            "culture": {"name": "Culture", "match_level": "high", "comment": ""},
            "growth_potential": {"name": "Growth Potential", "match_level": "high", "comment": ""},
            "total_match_level": "high",
            "key_strengths": ["rust", "distributed systems"],
            "key_concerns": ["salary"]
        })
    }

    #[test]
    fn test_trusted_response_keeps_company_and_role() {
        let analysis = normalize(&trusted_response());
        assert_eq!(analysis.company_name, "Acme");
        assert_eq!(analysis.role_name, "Engineer");
        assert_eq!(analysis.total_match_level, MatchLevel::High);
        assert_eq!(analysis.tech_stack.match_level, MatchLevel::VeryHigh);
        assert_eq!(analysis.key_strengths, vec!["rust", "distributed systems"]);
    }

    #[test]
    fn test_missing_criterion_repaired_to_unknown() {
        let mut raw = trusted_response();
        raw.as_object_mut().unwrap().remove("compensation");
        raw.as_object_mut().unwrap().remove("total_match_level");

        let analysis = normalize(&raw);
        assert_eq!(analysis.compensation.match_level, MatchLevel::Unknown);
        assert_eq!(analysis.compensation.name, "Compensation");
        assert_eq!(analysis.total_match_level, MatchLevel::Unknown);
        // The untouched criteria survive as-is.
        assert_eq!(analysis.role_fit.match_level, MatchLevel::High);
    }

    #[test]
    fn test_missing_company_name_falls_back_to_placeholder() {
        let analysis = normalize(&json!({"role_name": "Engineer"}));
        assert_eq!(analysis.company_name, "Sample Company");
        assert_eq!(analysis.total_match_level, MatchLevel::High);
        assert!(!analysis.key_strengths.is_empty());
    }

    #[test]
    fn test_empty_strings_are_not_trusted() {
        let analysis = normalize(&json!({"company_name": "", "role_name": "Engineer"}));
        assert_eq!(analysis.company_name, "Sample Company");
    }

    #[test]
    fn test_null_body_falls_back_to_placeholder() {
        let analysis = normalize(&Value::Null);
        assert_eq!(analysis.company_name, "Sample Company");
        assert_eq!(analysis.role_name, "Sample Role");
    }

    #[test]
    fn test_failure_analysis_shape() {
        let analysis = failure_analysis("internal error");
        assert_eq!(analysis.company_name, "Error");
        assert_eq!(analysis.total_match_level, MatchLevel::Unknown);
        assert_eq!(analysis.role_fit.match_level, MatchLevel::Unknown);
        assert!(analysis.key_strengths.is_empty());
        assert_eq!(analysis.key_concerns, vec!["internal error"]);
    }
}
