//! Screening pipeline — sequences fetch → extract → gate → score and
//! assembles exactly one `EvaluationRecord` per input resume, regardless of
//! what fails along the way.

use std::collections::BTreeMap;
use std::sync::Arc;

use tracing::{info, warn};

use crate::errors::ScreenError;
use crate::extract::TextExtractor;
use crate::llm_client::LanguageModel;
use crate::models::EvaluationRecord;
use crate::screening::evaluator::CriterionEvaluator;
use crate::screening::exemplars::ExemplarBank;
use crate::screening::gate::QualificationGate;
use crate::source::DocumentSource;

/// Every criterion is currently weighted the same. The per-call weight
/// parameter stays as an extensibility point for differential weighting.
pub const DEFAULT_CRITERION_WEIGHT: u32 = 10;

pub struct ScreeningPipeline {
    source: Arc<dyn DocumentSource>,
    extractor: Arc<dyn TextExtractor>,
    gate: QualificationGate,
    evaluator: CriterionEvaluator,
    bank: Arc<ExemplarBank>,
}

impl ScreeningPipeline {
    pub fn new(
        source: Arc<dyn DocumentSource>,
        extractor: Arc<dyn TextExtractor>,
        llm: Arc<dyn LanguageModel>,
        bank: ExemplarBank,
    ) -> Self {
        let bank = Arc::new(bank);
        Self {
            source,
            extractor,
            gate: QualificationGate::new(llm.clone()),
            evaluator: CriterionEvaluator::new(llm, bank.clone()),
            bank,
        }
    }

    /// Screens one resume. Never errors: every per-resume failure is caught
    /// here and converted into a `Failed` record, so one bad resume cannot
    /// abort a batch.
    pub async fn process(&self, resume_id: &str) -> EvaluationRecord {
        info!("Screening {resume_id}");

        match self.run(resume_id).await {
            Ok(record) => record,
            Err(e) => {
                warn!("Screening {resume_id} failed: {e}");
                EvaluationRecord::failed(resume_id, e.to_string())
            }
        }
    }

    /// Screens a batch. Exactly one record per input id, in input order.
    pub async fn process_batch(&self, resume_ids: &[String]) -> Vec<EvaluationRecord> {
        let mut records = Vec::with_capacity(resume_ids.len());
        for resume_id in resume_ids {
            records.push(self.process(resume_id).await);
        }
        records
    }

    /// The fallible per-resume state machine:
    /// fetch → extract → gate → (NotQualified | score every bank criterion).
    ///
    /// Scoring is strict all-or-nothing: if any single criterion call fails,
    /// the whole resume fails — a qualification-passed-but-partially-scored
    /// record must never be observable.
    async fn run(&self, resume_id: &str) -> Result<EvaluationRecord, ScreenError> {
        let bytes = self.source.fetch(resume_id).await?;
        let resume_text = self.extractor.extract(&bytes)?;

        let verdict = self.gate.evaluate(&resume_text).await?;
        if !verdict.qualified {
            info!("{resume_id}: not qualified");
            return Ok(EvaluationRecord::not_qualified(
                resume_id,
                verdict.raw_explanation,
            ));
        }

        let mut scores = BTreeMap::new();
        for criterion in self.bank.criteria() {
            let score = self
                .evaluator
                .evaluate(&resume_text, criterion, DEFAULT_CRITERION_WEIGHT)
                .await?;
            scores.insert(criterion.clone(), score);
        }

        info!("{resume_id}: qualified, {} criteria scored", scores.len());
        Ok(EvaluationRecord::qualified(
            resume_id,
            verdict.raw_explanation,
            scores,
            resume_text,
        ))
    }
}
