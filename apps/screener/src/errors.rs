use thiserror::Error;

/// Per-resume pipeline error.
/// Every variant except `EmptyExemplarBank` is non-fatal to a batch run:
/// the pipeline converts it into a `Failed` record at its boundary.
#[derive(Debug, Error)]
pub enum ScreenError {
    #[error("Document source unavailable: {0}")]
    SourceUnavailable(String),

    #[error("Text extraction failed: {0}")]
    ExtractionFailed(String),

    #[error("Qualification check failed: {0}")]
    QualificationCheckFailed(String),

    #[error("Evaluation failed for criterion '{criterion}': {message}")]
    CriterionEvaluationFailed { criterion: String, message: String },

    /// Startup configuration error — the only fatal kind.
    #[error("Exemplar bank is empty — at least one exemplar is required")]
    EmptyExemplarBank,
}
