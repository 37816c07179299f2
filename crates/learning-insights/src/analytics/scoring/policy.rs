use super::super::domain::RiskLevel;
use super::config::RiskThresholds;

/// Two decimals, exact halves go to the even neighbour (0.625 reports as 0.62).
pub(crate) fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}

/// Clamps to `[0, cap]` and classifies the unrounded value; only the reported figure is
/// rounded, so 0.754 reports 0.75 but stays in the tier above 0.75.
pub(crate) fn finish(probability: f64, cap: f64, tiers: &RiskThresholds) -> (f64, RiskLevel) {
    let bounded = if probability.is_nan() {
        0.0
    } else {
        probability.clamp(0.0, cap)
    };
    (round_to_cents(bounded), tiers.classify(bounded))
}
