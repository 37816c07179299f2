use serde::{Deserialize, Serialize};

use super::super::domain::RiskLevel;

/// Probability cut-offs for one scoring path. Both bounds are exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskThresholds {
    pub low_above: f64,
    pub medium_above: f64,
}

impl RiskThresholds {
    /// Cut-offs applied to the stored-profile heuristic.
    pub const HEURISTIC: Self = Self {
        low_above: 0.8,
        medium_above: 0.6,
    };

    /// Wider medium band for injected and simulated signals.
    pub const SIGNAL: Self = Self {
        low_above: 0.75,
        medium_above: 0.45,
    };

    pub fn classify(&self, probability: f64) -> RiskLevel {
        if probability > self.low_above {
            RiskLevel::Low
        } else if probability > self.medium_above {
            RiskLevel::Medium
        } else {
            RiskLevel::High
        }
    }
}

/// Weights and bounds used by the scoring engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    pub heuristic_tiers: RiskThresholds,
    pub signal_tiers: RiskThresholds,
    pub study_hours_divisor: f64,
    pub max_study_bonus: f64,
    pub signal_cap: f64,
    pub default_injected_score: f64,
    pub first_attempt_bonus: f64,
    pub repeat_attempt_penalty: f64,
    pub repeat_attempt_threshold: u32,
    pub simulation_floor: f64,
    pub simulation_ceiling: f64,
    pub fallback_seed: i64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            heuristic_tiers: RiskThresholds::HEURISTIC,
            signal_tiers: RiskThresholds::SIGNAL,
            study_hours_divisor: 40.0,
            max_study_bonus: 0.2,
            signal_cap: 0.99,
            default_injected_score: 50.0,
            first_attempt_bonus: 0.05,
            repeat_attempt_penalty: 0.10,
            repeat_attempt_threshold: 2,
            simulation_floor: 0.45,
            simulation_ceiling: 0.95,
            fallback_seed: 123,
        }
    }
}
