use super::super::domain::{InjectedMetrics, StudentRecord};
use super::config::ScoringConfig;

/// Average score plus a capped study-time bonus, never above 1.0.
pub(crate) fn heuristic_probability(student: &StudentRecord, config: &ScoringConfig) -> f64 {
    let base = student.avg_score / 100.0;
    let study_bonus =
        (student.study_hours_per_week / config.study_hours_divisor).min(config.max_study_bonus);
    (base + study_bonus).min(1.0)
}

/// Injected score adjusted by the number of previous attempts.
pub(crate) fn injected_probability(metrics: &InjectedMetrics, config: &ScoringConfig) -> f64 {
    let avg_score = metrics.avg_score.unwrap_or(config.default_injected_score);
    let attempts = metrics.prev_attempts.unwrap_or(0);

    let mut probability = avg_score / 100.0;
    if attempts == 0 {
        probability += config.first_attempt_bonus;
    }
    if attempts > config.repeat_attempt_threshold {
        probability -= config.repeat_attempt_penalty;
    }
    probability
}
