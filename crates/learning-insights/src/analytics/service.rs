use std::sync::Arc;

use tracing::{debug, info};

use super::domain::{
    InjectedMetrics, ModuleRecord, PredictionResult, RecommendationResult, StudentKey,
    StudentRecord,
};
use super::lookup::{ReferenceData, DEFAULT_RESOURCE_LIMIT};
use super::quiz::{generate_quiz, QuizSet};
use super::recommendations::recommend;
use super::scoring::{RiskScoringEngine, ScoringConfig};

/// Facade composing reference lookups, the risk scorer and the content selectors.
pub struct LearningInsightsService<D> {
    data: Arc<D>,
    engine: RiskScoringEngine,
    resource_limit: usize,
}

impl<D> LearningInsightsService<D>
where
    D: ReferenceData + 'static,
{
    pub fn new(data: Arc<D>, config: ScoringConfig) -> Self {
        Self {
            data,
            engine: RiskScoringEngine::new(config),
            resource_limit: DEFAULT_RESOURCE_LIMIT,
        }
    }

    pub fn with_resource_limit(mut self, limit: usize) -> Self {
        self.resource_limit = limit;
        self
    }

    /// Scores injected metrics when any signal is supplied, the stored profile otherwise.
    pub fn predict(
        &self,
        student_id: u32,
        module_code: &str,
        metrics: Option<&InjectedMetrics>,
    ) -> PredictionResult {
        if let Some(metrics) = metrics.filter(|metrics| !metrics.is_empty()) {
            info!(student_id, module_code, "scoring injected metrics");
            return self
                .engine
                .injected(StudentKey::from(student_id), module_code, metrics);
        }

        let student = self.data.resolve_student(student_id);
        let module = self.data.resolve_module(module_code);
        self.engine.heuristic(&student, &module, module_code)
    }

    pub fn simulate(&self, student: StudentKey, module_code: &str) -> PredictionResult {
        self.engine.simulated(student, module_code)
    }

    pub fn recommend(&self, student_id: u32, module_code: &str) -> RecommendationResult {
        let result = recommend(
            self.data.as_ref(),
            student_id,
            module_code,
            self.resource_limit,
        );
        debug!(
            student_id,
            module_code,
            count = result.recommendations.len(),
            "built recommendations"
        );
        result
    }

    pub fn quiz(&self, module_code: &str, difficulty: Option<&str>) -> QuizSet {
        generate_quiz(module_code, difficulty)
    }

    pub fn students(&self) -> Vec<StudentRecord> {
        self.data.students()
    }

    pub fn modules(&self) -> Vec<ModuleRecord> {
        self.data.modules()
    }
}
