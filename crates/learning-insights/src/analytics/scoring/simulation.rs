use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::super::domain::StudentKey;
use super::config::ScoringConfig;

/// Student id plus the code points of the module code, or `fallback` when the id is not an
/// integer.
pub(crate) fn simulation_seed(student: &StudentKey, module_code: &str, fallback: i64) -> i64 {
    match student.numeric() {
        Some(id) => module_code
            .chars()
            .fold(id, |seed, ch| seed.wrapping_add(i64::from(u32::from(ch)))),
        None => fallback,
    }
}

/// Draws from a generator owned by this call, so concurrent requests cannot disturb each
/// other's sequence.
pub(crate) fn simulated_probability(seed: i64, config: &ScoringConfig) -> f64 {
    let mut rng = ChaCha8Rng::seed_from_u64(seed as u64);
    rng.gen_range(config.simulation_floor..=config.simulation_ceiling)
}
