//! Prediction, recommendation and quiz selection over the embedded reference catalogs.

mod catalog;
pub mod domain;
pub mod lookup;
pub mod quiz;
pub mod recommendations;
pub mod router;
pub mod scoring;
pub mod service;
pub mod validation;

pub use domain::{
    DifficultyTier, InjectedMetrics, ModuleRecord, PredictionResult, QuizQuestion, Recommendation,
    RecommendationResult, ResourceKind, ResourceRecord, RiskLevel, StudentKey, StudentRecord,
};
pub use lookup::{ReferenceData, StaticCatalog, DEFAULT_RESOURCE_LIMIT};
pub use quiz::{QuizCategory, QuizSet};
pub use router::analytics_router;
pub use scoring::{RiskScoringEngine, RiskThresholds, ScoringConfig, ScoringPath};
pub use service::LearningInsightsService;
