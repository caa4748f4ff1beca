use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Outcome of the binary qualification gate.
///
/// `qualified` is derived from the first line of the model response only —
/// a deliberately crude heuristic. The full raw text is kept for audit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QualificationVerdict {
    pub qualified: bool,
    pub raw_explanation: String,
}

/// Verbatim model output for a single criterion.
///
/// No numeric parsing happens in-core: if a downstream consumer wants the
/// 1–10 score as a number, it extracts it from `raw_response` itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CriterionScore {
    pub criterion: String,
    pub raw_response: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScreeningStatus {
    Qualified,
    #[serde(rename = "Not Qualified")]
    NotQualified,
    Failed,
}

/// Terminal per-resume output of the pipeline. Assembled once, never mutated.
///
/// Field population rules:
/// - `Qualified`: qualification_details + scores (one entry per bank
///   criterion) + extracted_text
/// - `NotQualified`: qualification_details only
/// - `Failed`: error_detail only
///
/// Construct through `qualified` / `not_qualified` / `failed` so the rules
/// cannot be violated by hand-assembly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationRecord {
    pub resume_id: String,
    pub status: ScreeningStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub qualification_details: Option<String>,
    /// BTreeMap keeps serialization order deterministic.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scores: Option<BTreeMap<String, CriterionScore>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extracted_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_detail: Option<String>,
}

impl EvaluationRecord {
    pub fn qualified(
        resume_id: &str,
        qualification_details: String,
        scores: BTreeMap<String, CriterionScore>,
        extracted_text: String,
    ) -> Self {
        Self {
            resume_id: resume_id.to_string(),
            status: ScreeningStatus::Qualified,
            qualification_details: Some(qualification_details),
            scores: Some(scores),
            extracted_text: Some(extracted_text),
            error_detail: None,
        }
    }

    pub fn not_qualified(resume_id: &str, qualification_details: String) -> Self {
        Self {
            resume_id: resume_id.to_string(),
            status: ScreeningStatus::NotQualified,
            qualification_details: Some(qualification_details),
            scores: None,
            extracted_text: None,
            error_detail: None,
        }
    }

    pub fn failed(resume_id: &str, error_detail: String) -> Self {
        Self {
            resume_id: resume_id.to_string(),
            status: ScreeningStatus::Failed,
            qualification_details: None,
            scores: None,
            extracted_text: None,
            error_detail: Some(error_detail),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_serializes_with_original_labels() {
        assert_eq!(
            serde_json::to_string(&ScreeningStatus::Qualified).unwrap(),
            "\"Qualified\""
        );
        assert_eq!(
            serde_json::to_string(&ScreeningStatus::NotQualified).unwrap(),
            "\"Not Qualified\""
        );
        assert_eq!(
            serde_json::to_string(&ScreeningStatus::Failed).unwrap(),
            "\"Failed\""
        );
    }

    #[test]
    fn test_failed_record_has_only_error_detail() {
        let record = EvaluationRecord::failed("r1.pdf", "boom".to_string());
        assert_eq!(record.status, ScreeningStatus::Failed);
        assert_eq!(record.error_detail.as_deref(), Some("boom"));
        assert!(record.qualification_details.is_none());
        assert!(record.scores.is_none());
        assert!(record.extracted_text.is_none());
    }

    #[test]
    fn test_not_qualified_record_omits_optional_fields_in_json() {
        let record =
            EvaluationRecord::not_qualified("r1.pdf", "NO, insufficient experience".to_string());
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["status"], "Not Qualified");
        assert_eq!(json["qualification_details"], "NO, insufficient experience");
        assert!(json.get("scores").is_none());
        assert!(json.get("extracted_text").is_none());
        assert!(json.get("error_detail").is_none());
    }

    #[test]
    fn test_qualified_record_round_trips() {
        let mut scores = BTreeMap::new();
        scores.insert(
            "Leadership and Teamwork".to_string(),
            CriterionScore {
                criterion: "Leadership and Teamwork".to_string(),
                raw_response: "Score: 8\nProven leadership.".to_string(),
            },
        );
        let record = EvaluationRecord::qualified(
            "r1.pdf",
            "YES — 3 years at Google".to_string(),
            scores,
            "resume text".to_string(),
        );

        let json = serde_json::to_string(&record).unwrap();
        let back: EvaluationRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }
}
