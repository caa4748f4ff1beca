//! Qualification gate — binary admit/reject decision applied before the
//! multi-criterion pass. A cost-control gate: a resume that fails one cheap
//! call never costs N criterion calls.

use std::sync::Arc;

use crate::errors::ScreenError;
use crate::llm_client::LanguageModel;
use crate::models::QualificationVerdict;
use crate::screening::prompts::{
    POSITIVE_TOKEN, QUALIFICATION_PROMPT_TEMPLATE, QUALIFICATION_SYSTEM, SAMPLING_TEMPERATURE,
};

pub struct QualificationGate {
    llm: Arc<dyn LanguageModel>,
}

impl QualificationGate {
    pub fn new(llm: Arc<dyn LanguageModel>) -> Self {
        Self { llm }
    }

    /// One LanguageModel call, one verdict. The verdict comes from the FIRST
    /// line of the response only: a case-insensitive positive token admits,
    /// everything else rejects (fail-closed). The full raw text is returned
    /// for audit regardless of outcome.
    ///
    /// No retry here — transport failures propagate as
    /// `QualificationCheckFailed`.
    pub async fn evaluate(&self, resume_text: &str) -> Result<QualificationVerdict, ScreenError> {
        let prompt = QUALIFICATION_PROMPT_TEMPLATE.replace("{resume_text}", resume_text);

        let raw_explanation = self
            .llm
            .complete(QUALIFICATION_SYSTEM, &prompt, SAMPLING_TEMPERATURE)
            .await
            .map_err(|e| ScreenError::QualificationCheckFailed(e.to_string()))?;

        let qualified = raw_explanation
            .lines()
            .next()
            .map(|line| line.to_uppercase().contains(POSITIVE_TOKEN))
            .unwrap_or(false);

        Ok(QualificationVerdict {
            qualified,
            raw_explanation,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::mock::MockLanguageModel;

    fn gate(llm: MockLanguageModel) -> QualificationGate {
        QualificationGate::new(Arc::new(llm))
    }

    #[tokio::test]
    async fn test_positive_first_line_qualifies() {
        let gate = gate(
            MockLanguageModel::new().with_reply("YES – 3 years at Google\nStrong experience."),
        );
        let verdict = gate.evaluate("resume").await.unwrap();
        assert!(verdict.qualified);
        assert!(verdict.raw_explanation.contains("Strong experience."));
    }

    #[tokio::test]
    async fn test_token_match_is_case_insensitive() {
        let gate = gate(MockLanguageModel::new().with_reply("yes, the candidate qualifies"));
        assert!(gate.evaluate("resume").await.unwrap().qualified);
    }

    #[tokio::test]
    async fn test_negative_first_line_rejects() {
        let gate = gate(MockLanguageModel::new().with_reply("NO, insufficient experience"));
        let verdict = gate.evaluate("resume").await.unwrap();
        assert!(!verdict.qualified);
        assert_eq!(verdict.raw_explanation, "NO, insufficient experience");
    }

    #[tokio::test]
    async fn test_token_on_later_line_still_rejects() {
        // Only the first line counts.
        let gate = gate(MockLanguageModel::new().with_reply("Unclear.\nYES on paper though."));
        assert!(!gate.evaluate("resume").await.unwrap().qualified);
    }

    #[tokio::test]
    async fn test_empty_response_fails_closed() {
        let gate = gate(MockLanguageModel::new().with_reply(""));
        assert!(!gate.evaluate("resume").await.unwrap().qualified);
    }

    #[tokio::test]
    async fn test_transport_failure_propagates() {
        let gate = gate(MockLanguageModel::new().with_failure("overloaded"));
        let err = gate.evaluate("resume").await.unwrap_err();
        assert!(matches!(err, ScreenError::QualificationCheckFailed(_)));
    }

    #[tokio::test]
    async fn test_call_shape_embeds_resume_and_uses_hr_system_role() {
        let llm = Arc::new(MockLanguageModel::new().with_reply("YES"));
        let gate = QualificationGate::new(llm.clone());
        gate.evaluate("worked 4 years at Meta").await.unwrap();

        let calls = llm.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].system, QUALIFICATION_SYSTEM);
        assert_eq!(calls[0].temperature, SAMPLING_TEMPERATURE);
        assert!(calls[0].prompt.contains("worked 4 years at Meta"));
        assert!(calls[0].prompt.contains("Tier 1 company"));
    }
}
