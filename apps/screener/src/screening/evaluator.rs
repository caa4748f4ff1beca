//! Criterion evaluator — produces a grounded, explainable score for one
//! criterion via a single few-shot LLM call.

use std::sync::Arc;

use crate::errors::ScreenError;
use crate::llm_client::LanguageModel;
use crate::models::CriterionScore;
use crate::screening::exemplars::{Exemplar, ExemplarBank};
use crate::screening::prompts::{
    CRITERION_PROMPT_TEMPLATE, CRITERION_SYSTEM, SAMPLING_TEMPERATURE,
};

pub struct CriterionEvaluator {
    llm: Arc<dyn LanguageModel>,
    bank: Arc<ExemplarBank>,
}

impl CriterionEvaluator {
    pub fn new(llm: Arc<dyn LanguageModel>, bank: Arc<ExemplarBank>) -> Self {
        Self { llm, bank }
    }

    /// One LanguageModel call grounded on up to three exemplars for the
    /// criterion. The model is instructed to return a single 1–10 score plus
    /// justification; the response is stored VERBATIM — the pipeline never
    /// parses a number out of it.
    ///
    /// `weight` is an extensibility point: the orchestrator currently passes
    /// a fixed constant for every criterion, and non-default weights are
    /// untested.
    pub async fn evaluate(
        &self,
        resume_text: &str,
        criterion: &str,
        weight: u32,
    ) -> Result<CriterionScore, ScreenError> {
        let examples = render_exemplars(&self.bank.exemplars_for(criterion));

        let prompt = CRITERION_PROMPT_TEMPLATE
            .replace("{criterion}", criterion)
            .replace("{weight}", &weight.to_string())
            .replace("{examples}", &examples)
            .replace("{resume_text}", resume_text);

        let raw_response = self
            .llm
            .complete(CRITERION_SYSTEM, &prompt, SAMPLING_TEMPERATURE)
            .await
            .map_err(|e| ScreenError::CriterionEvaluationFailed {
                criterion: criterion.to_string(),
                message: e.to_string(),
            })?;

        Ok(CriterionScore {
            criterion: criterion.to_string(),
            raw_response,
        })
    }
}

/// Renders exemplars as numbered (Criterion / Resume / Score / Explanation)
/// blocks, in the order the bank returned them.
fn render_exemplars(exemplars: &[&Exemplar]) -> String {
    exemplars
        .iter()
        .enumerate()
        .map(|(i, ex)| {
            format!(
                "Example {}:\nCriterion: {}\nResume: {}\nScore: {}\nExplanation: {}",
                i + 1,
                ex.criterion,
                ex.sample_text,
                ex.score,
                ex.rationale
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
