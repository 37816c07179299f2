mod config;
mod policy;
mod rules;
mod simulation;

pub use config::{RiskThresholds, ScoringConfig};

use serde::Serialize;
use tracing::debug;

use super::domain::{InjectedMetrics, ModuleRecord, PredictionResult, StudentKey, StudentRecord};
use policy::finish;
use rules::{heuristic_probability, injected_probability};
use simulation::{simulated_probability, simulation_seed};

const INJECTED_MESSAGE: &str = "Real-time prediction (injected metrics)";
const SIMULATED_MESSAGE: &str = "Simulation (missing data)";

/// Which computation produced a prediction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoringPath {
    Heuristic,
    Injected,
    Simulated,
}

/// Stateless scorer turning student signals into a probability and risk tier.
///
/// Every path is infallible: missing inputs take configured defaults and probabilities are
/// clamped before they are reported.
#[derive(Debug, Clone, Default)]
pub struct RiskScoringEngine {
    config: ScoringConfig,
}

impl RiskScoringEngine {
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Scores the stored profile. Capped at 1.0 rather than the signal cap.
    pub fn heuristic(
        &self,
        student: &StudentRecord,
        module: &ModuleRecord,
        module_code: &str,
    ) -> PredictionResult {
        let probability = heuristic_probability(student, &self.config);
        let (success_proba, risk_level) = finish(probability, 1.0, &self.config.heuristic_tiers);
        debug!(
            path = ?ScoringPath::Heuristic,
            student_id = student.student_id,
            module_code,
            success_proba,
            "scored stored profile"
        );

        PredictionResult {
            student_id: StudentKey::from(student.student_id),
            module_code: module_code.to_string(),
            success_proba,
            risk_level,
            message: format!("Prediction for {} in {}", student.name, module.name),
        }
    }

    pub fn injected(
        &self,
        student: StudentKey,
        module_code: &str,
        metrics: &InjectedMetrics,
    ) -> PredictionResult {
        let probability = injected_probability(metrics, &self.config);
        self.signal_result(ScoringPath::Injected, student, module_code, probability)
    }

    /// Reproducible stand-in used when no real signal exists for the pair.
    pub fn simulated(&self, student: StudentKey, module_code: &str) -> PredictionResult {
        let seed = simulation_seed(&student, module_code, self.config.fallback_seed);
        let probability = simulated_probability(seed, &self.config);
        self.signal_result(ScoringPath::Simulated, student, module_code, probability)
    }

    fn signal_result(
        &self,
        path: ScoringPath,
        student: StudentKey,
        module_code: &str,
        probability: f64,
    ) -> PredictionResult {
        let (success_proba, risk_level) = finish(
            probability,
            self.config.signal_cap,
            &self.config.signal_tiers,
        );
        debug!(?path, %student, module_code, success_proba, "scored signal");

        let message = match path {
            ScoringPath::Simulated => SIMULATED_MESSAGE,
            _ => INJECTED_MESSAGE,
        };

        PredictionResult {
            student_id: student,
            module_code: module_code.to_string(),
            success_proba,
            risk_level,
            message: message.to_string(),
        }
    }
}
