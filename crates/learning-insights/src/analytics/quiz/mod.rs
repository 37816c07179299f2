mod banks;

use serde::Serialize;
use tracing::debug;

use super::domain::QuizQuestion;
use banks::{DEVOPS_BANK, GENERAL_BANK, JAVA_BACKEND_BANK};

/// Subject category selected from a module code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QuizCategory {
    #[serde(rename = "devops")]
    DevOps,
    JavaBackend,
    General,
}

impl QuizCategory {
    pub fn bank(&self) -> &'static [QuizQuestion] {
        match self {
            QuizCategory::DevOps => &DEVOPS_BANK,
            QuizCategory::JavaBackend => &JAVA_BACKEND_BANK,
            QuizCategory::General => &GENERAL_BANK,
        }
    }
}

/// Evaluated in order; the first rule with a keyword inside the code wins.
const CLASSIFICATION_RULES: [(&[&str], QuizCategory); 2] = [
    (
        &[
            "devops",
            "ci/cd",
            "docker",
            "k8s",
            "kubernetes",
            "cloud",
            "microservice",
        ],
        QuizCategory::DevOps,
    ),
    (&["java", "spring", "jee", "backend"], QuizCategory::JavaBackend),
];

pub fn classify(module_code: &str) -> QuizCategory {
    let code = module_code.to_lowercase();
    CLASSIFICATION_RULES
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|keyword| code.contains(keyword)))
        .map(|(_, category)| *category)
        .unwrap_or(QuizCategory::General)
}

/// Questions for a module's category.
///
/// `difficulty` is accepted for API compatibility but does not select or filter questions;
/// the whole bank is returned as stored.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuizSet {
    pub module_code: String,
    pub category: QuizCategory,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<String>,
    pub questions: Vec<QuizQuestion>,
}

pub fn generate_quiz(module_code: &str, difficulty: Option<&str>) -> QuizSet {
    let category = classify(module_code);
    debug!(module_code, ?category, difficulty, "selected question bank");

    QuizSet {
        module_code: module_code.to_string(),
        category,
        difficulty: difficulty.map(str::to_string),
        questions: category.bank().to_vec(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(set: &QuizSet) -> Vec<u32> {
        set.questions.iter().map(|question| question.id).collect()
    }

    #[test]
    fn devops_codes_select_infrastructure_bank() {
        let set = generate_quiz("DevOps101", None);
        assert_eq!(set.category, QuizCategory::DevOps);
        assert_eq!(ids(&set), vec![101, 102, 103, 104, 105]);
    }

    #[test]
    fn java_codes_select_backend_bank() {
        let set = generate_quiz("javabackend", Some("advanced"));
        assert_eq!(set.category, QuizCategory::JavaBackend);
        assert_eq!(ids(&set), vec![201, 202, 203, 204, 205]);
    }

    #[test]
    fn other_codes_fall_back_to_general_bank() {
        let set = generate_quiz("MATH101", None);
        assert_eq!(set.category, QuizCategory::General);
        assert_eq!(ids(&set), vec![901, 902, 903]);
    }

    #[test]
    fn infrastructure_keywords_take_priority() {
        assert_eq!(classify("spring-cloud-300"), QuizCategory::DevOps);
        assert_eq!(classify("Backend-K8S"), QuizCategory::DevOps);
        assert_eq!(classify("JEE-401"), QuizCategory::JavaBackend);
    }

    #[test]
    fn difficulty_does_not_change_selection() {
        let easy = generate_quiz("docker-lab", Some("beginner"));
        let hard = generate_quiz("docker-lab", Some("advanced"));
        assert_eq!(easy.questions, hard.questions);
    }

    #[test]
    fn every_question_has_a_valid_answer() {
        for category in [
            QuizCategory::DevOps,
            QuizCategory::JavaBackend,
            QuizCategory::General,
        ] {
            for question in category.bank() {
                assert_eq!(question.options.len(), 4);
                assert!(question.correct_index < 4, "question {}", question.id);
            }
        }
    }
}
