use std::fmt;

use serde::{Deserialize, Serialize};

/// Difficulty tier shared by modules and resources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DifficultyTier {
    Beginner,
    Intermediate,
    Advanced,
}

/// Delivery format of a learning resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    Video,
    Article,
    Exercise,
    Quiz,
}

/// Engagement snapshot for a single student.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentRecord {
    pub student_id: u32,
    pub name: String,
    pub avg_score: f64,
    pub attendance_rate: f64,
    pub assignment_completion: f64,
    pub forum_participation: u32,
    pub study_hours_per_week: f64,
    pub previous_modules_passed: u32,
}

/// Course module metadata used for topic matching.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModuleRecord {
    pub module_code: String,
    pub name: String,
    pub difficulty: DifficultyTier,
    pub topics: Vec<String>,
    pub avg_pass_rate: f64,
}

/// Entry of the fixed resource catalog.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ResourceRecord {
    pub resource_id: &'static str,
    pub title: &'static str,
    pub url: &'static str,
    #[serde(rename = "type")]
    pub kind: ResourceKind,
    pub topics: &'static [&'static str],
    pub difficulty: DifficultyTier,
}

impl ResourceRecord {
    pub fn covers_any<'a, I>(&self, topics: I) -> bool
    where
        I: IntoIterator<Item = &'a str>,
    {
        topics
            .into_iter()
            .any(|topic| self.topics.iter().any(|own| *own == topic))
    }
}

/// Multiple-choice question with exactly four options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuizQuestion {
    pub id: u32,
    pub question: &'static str,
    pub options: [&'static str; 4],
    pub correct_index: u8,
}

/// Coarse classification of failure likelihood.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Student identifier as supplied by the caller.
///
/// The simulated scoring path accepts identifiers that may not parse as integers, so the raw
/// form is kept and echoed back unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StudentKey {
    Id(i64),
    Raw(String),
}

impl StudentKey {
    pub fn numeric(&self) -> Option<i64> {
        match self {
            StudentKey::Id(id) => Some(*id),
            StudentKey::Raw(raw) => raw.trim().parse().ok(),
        }
    }
}

impl From<u32> for StudentKey {
    fn from(value: u32) -> Self {
        StudentKey::Id(i64::from(value))
    }
}

impl fmt::Display for StudentKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StudentKey::Id(id) => write!(f, "{id}"),
            StudentKey::Raw(raw) => f.write_str(raw),
        }
    }
}

/// Client-side signals that replace stored reference data for one request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InjectedMetrics {
    #[serde(default)]
    pub avg_score: Option<f64>,
    #[serde(default, rename = "num_of_prev_attempts", alias = "prev_attempts")]
    pub prev_attempts: Option<u32>,
}

impl InjectedMetrics {
    /// True when no recognised signal was sent, e.g. `{}` or only unknown keys.
    pub fn is_empty(&self) -> bool {
        self.avg_score.is_none() && self.prev_attempts.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PredictionResult {
    pub student_id: StudentKey,
    pub module_code: String,
    pub success_proba: f64,
    pub risk_level: RiskLevel,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    pub resource_id: &'static str,
    pub title: &'static str,
    pub url: &'static str,
    #[serde(rename = "type")]
    pub kind: ResourceKind,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecommendationResult {
    pub student_id: u32,
    pub module_code: String,
    pub recommendations: Vec<Recommendation>,
}
