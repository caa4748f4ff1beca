// All LLM prompt constants for the screening module.
// Templates use {placeholder} markers; candidate-supplied text is always
// substituted last so resume content cannot clobber an unfilled marker.

/// Sampling temperature for every screening call. Non-zero by design:
/// repeated runs on the same resume may word verdicts differently, and in
/// rare cases flip them. Accepted property, not a bug.
pub const SAMPLING_TEMPERATURE: f32 = 0.7;

/// Case-insensitive token that must appear in the FIRST line of the
/// qualification response for a candidate to pass the gate. Anything else —
/// ambiguity, hedging, malformed output — fails closed.
pub const POSITIVE_TOKEN: &str = "YES";

/// System role for the qualification gate call.
pub const QUALIFICATION_SYSTEM: &str = "You are an HR assistant evaluating resumes.";

/// Qualification gate prompt. Replace `{resume_text}` before sending.
pub const QUALIFICATION_PROMPT_TEMPLATE: &str = r#"Analyze the following resume and determine if the candidate meets these criteria:
1. Has at least 2 years of relevant experience
2. Has worked at a Tier 1 company (Google, Amazon, Microsoft, Meta, Apple)

Please provide a clear YES/NO answer with a brief explanation.

Resume Text:
{resume_text}"#;

/// System role for per-criterion scoring calls.
pub const CRITERION_SYSTEM: &str = "You are an HR assistant.";

/// Per-criterion scoring prompt.
/// Replace: {criterion}, {weight}, {examples}, then {resume_text} last.
pub const CRITERION_PROMPT_TEMPLATE: &str = r#"You are an expert HR assistant evaluating resumes. Below is a candidate's resume and the criterion for evaluation:

Criterion: {criterion}
Weight: {weight}

### Candidate's Resume:
{resume_text}

### Examples of Evaluation:
{examples}

Using the examples, evaluate the resume:
- Provide a single score (1-10).
- Provide a justification for the score."#;
