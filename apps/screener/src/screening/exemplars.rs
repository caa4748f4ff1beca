//! Exemplar bank — the static few-shot grounding set for criterion scoring.
//!
//! The set of evaluation criteria is DERIVED from the bank, never declared
//! separately: a criterion exists exactly because at least one exemplar
//! carries its name. This keeps exemplar coverage and evaluation coverage
//! coupled by construction.

use serde::{Deserialize, Serialize};

use crate::errors::ScreenError;

/// Only the first N exemplars per criterion are ever sent to the model.
/// Selection is positional (declaration order), not ranked — reproducibility
/// over optimality.
pub const MAX_EXEMPLARS_PER_CRITERION: usize = 3;

/// A labeled sample used as few-shot grounding for one criterion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exemplar {
    pub criterion: String,
    pub sample_text: String,
    /// 1–10.
    pub score: u8,
    pub rationale: String,
}

/// Immutable, loaded once at process start.
pub struct ExemplarBank {
    exemplars: Vec<Exemplar>,
    criteria: Vec<String>,
}

impl ExemplarBank {
    /// Fails on an empty input — an empty bank means nothing can ever be
    /// scored, which is a configuration error, fatal at startup.
    pub fn new(exemplars: Vec<Exemplar>) -> Result<Self, ScreenError> {
        if exemplars.is_empty() {
            return Err(ScreenError::EmptyExemplarBank);
        }

        let mut criteria: Vec<String> = Vec::new();
        for exemplar in &exemplars {
            if !criteria.contains(&exemplar.criterion) {
                criteria.push(exemplar.criterion.clone());
            }
        }

        Ok(Self {
            exemplars,
            criteria,
        })
    }

    /// The bank shipped with the screener.
    pub fn builtin() -> Self {
        Self::new(builtin_exemplars()).expect("built-in exemplar bank is non-empty")
    }

    /// Up to `MAX_EXEMPLARS_PER_CRITERION` exemplars, in declaration order.
    pub fn exemplars_for(&self, criterion: &str) -> Vec<&Exemplar> {
        self.exemplars
            .iter()
            .filter(|e| e.criterion == criterion)
            .take(MAX_EXEMPLARS_PER_CRITERION)
            .collect()
    }

    /// Distinct criterion names in first-appearance order. Every qualified
    /// resume is scored against exactly this set.
    pub fn criteria(&self) -> &[String] {
        &self.criteria
    }
}

fn exemplar(criterion: &str, sample_text: &str, score: u8, rationale: &str) -> Exemplar {
    Exemplar {
        criterion: criterion.to_string(),
        sample_text: sample_text.to_string(),
        score,
        rationale: rationale.to_string(),
    }
}

fn builtin_exemplars() -> Vec<Exemplar> {
    vec![
        exemplar(
            "LLM Experience and Knowledge",
            "Built a chatbot for multiple PDFs and videos using LangChain, NLTK, and SpaCy, and deployed it via Streamlit.",
            7,
            "Demonstrates advanced proficiency in working with LLMs, integrating them into applications, and deploying solutions effectively.",
        ),
        exemplar(
            "LLM Experience and Knowledge",
            "Made a project on Retrieval-Augmented Generation (RAG) development and Large Language Models (LLMs).",
            9,
            "Shows theoretical knowledge and interest in state-of-the-art techniques but lacks practical project implementation.",
        ),
        exemplar(
            "LLM Experience and Knowledge",
            "Participated in academic research exploring applications of LLMs in education.",
            5,
            "Limited scope of application and lacks substantial implementation experience.",
        ),
        exemplar(
            "LLM Experience and Knowledge",
            "Conducted a basic study of ChatGPT's capabilities for answering domain-specific queries.",
            2,
            "Minimal hands-on work, focused more on exploration than implementation or deployment.",
        ),
        exemplar(
            "Good Institute (IIT or NIT)",
            "Student at one of the old IITs",
            10,
            "IIT is among the top institutions in India, reflecting strong academic credentials and a competitive environment.",
        ),
        exemplar(
            "Good Institute (IIT or NIT)",
            "Graduate from NIT Suratkal in Computer Science.",
            8,
            "NIT Suratkal is a prestigious institution with a strong focus on technical education and research.",
        ),
        exemplar(
            "Good Institute (IIT or NIT)",
            "Student at a private engineering college with good regional reputation.",
            6,
            "While the institution is not IIT/NIT, it is still reputable in a regional context.",
        ),
        exemplar(
            "Generative AI Experience",
            "Developed a virtual try-on system using GANs, PyTorch, and OpenCV.",
            10,
            "Demonstrates expertise in Generative AI, leveraging advanced techniques for real-world applications.",
        ),
        exemplar(
            "Generative AI Experience",
            "Explored GAN-based image generation as part of an academic project.",
            7,
            "Theoretical knowledge with limited practical experience in implementing and deploying systems.",
        ),
        exemplar(
            "Generative AI Experience",
            "Built a simple image generator using a pre-trained GAN model.",
            5,
            "Basic implementation using pre-trained models without significant customization or original contributions.",
        ),
        exemplar(
            "Generative AI Experience",
            "Read research papers on diffusion models and GANs.",
            3,
            "Shows interest and theoretical knowledge but lacks hands-on experience.",
        ),
        exemplar(
            "Leadership and Teamwork",
            "Led a team for a fraud detection model.",
            8,
            "Proven leadership and teamwork skills.",
        ),
        exemplar(
            "Leadership and Teamwork",
            "Organized a hackathon for 200 participants.",
            5,
            "Moderate leadership experience.",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_bank_is_a_startup_error() {
        let result = ExemplarBank::new(vec![]);
        assert!(matches!(result, Err(ScreenError::EmptyExemplarBank)));
    }

    #[test]
    fn test_criteria_are_distinct_in_first_appearance_order() {
        let bank = ExemplarBank::builtin();
        assert_eq!(
            bank.criteria(),
            &[
                "LLM Experience and Knowledge".to_string(),
                "Good Institute (IIT or NIT)".to_string(),
                "Generative AI Experience".to_string(),
                "Leadership and Teamwork".to_string(),
            ]
        );
    }

    #[test]
    fn test_criteria_count_matches_distinct_names() {
        let bank = ExemplarBank::new(vec![
            exemplar("A", "x", 1, "r"),
            exemplar("B", "y", 2, "r"),
            exemplar("A", "z", 3, "r"),
        ])
        .unwrap();
        assert_eq!(bank.criteria().len(), 2);
    }

    #[test]
    fn test_exemplars_for_caps_at_three_in_declaration_order() {
        let bank = ExemplarBank::builtin();
        // "LLM Experience and Knowledge" declares four exemplars; only the
        // first three are selected.
        let selected = bank.exemplars_for("LLM Experience and Knowledge");
        assert_eq!(selected.len(), MAX_EXEMPLARS_PER_CRITERION);
        assert!(selected[0].sample_text.starts_with("Built a chatbot"));
        assert!(selected[1].sample_text.starts_with("Made a project"));
        assert!(selected[2].sample_text.starts_with("Participated in"));
    }

    #[test]
    fn test_exemplars_for_unknown_criterion_is_empty() {
        let bank = ExemplarBank::builtin();
        assert!(bank.exemplars_for("Underwater Basket Weaving").is_empty());
    }
}
