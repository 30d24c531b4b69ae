use rand::Rng;

use crate::model::{Direction, ModelError, Season};

/// Probabilities over [`Direction::ALL`], in that order.
pub type DirectionWeights = [f64; 7];

const TOLERANCE: f64 = 1e-6;

/// Spring, Summer, Fall, Winter.
const SEASON_WEIGHTS: [DirectionWeights; 4] = [
    [0.16, 0.14, 0.14, 0.14, 0.14, 0.14, 0.14],
    [0.20, 0.10, 0.10, 0.15, 0.15, 0.15, 0.15],
    [0.16, 0.16, 0.16, 0.12, 0.12, 0.12, 0.16],
    [0.20, 0.16, 0.14, 0.12, 0.12, 0.12, 0.14],
];

/// Season-biased draw of the next walk step.
#[derive(Debug, Clone)]
pub struct DirectionSampler {
    weights: [DirectionWeights; 4],
}

impl Default for DirectionSampler {
    fn default() -> Self {
        DirectionSampler {
            weights: SEASON_WEIGHTS,
        }
    }
}

impl DirectionSampler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Custom tables, rejected unless every row is non-negative and sums to 1.
    pub fn with_weights(weights: [DirectionWeights; 4]) -> Result<Self, ModelError> {
        for season in Season::ALL {
            let row = &weights[season.index()];
            if let Some(&value) = row.iter().find(|p| **p < 0.0 || !p.is_finite()) {
                return Err(ModelError::NegativeProbability { season, value });
            }
            let sum: f64 = row.iter().sum();
            if (sum - 1.0).abs() > TOLERANCE {
                return Err(ModelError::ProbabilitySum { season, sum });
            }
        }
        Ok(DirectionSampler { weights })
    }

    pub fn weights(&self, season: Season) -> &DirectionWeights {
        &self.weights[season.index()]
    }

    pub fn sample<R: Rng + ?Sized>(&self, season: Season, rng: &mut R) -> Direction {
        self.sample_with(season, rng.gen_range(0.0..1.0))
    }

    /// The first direction whose cumulative probability reaches `r`.
    /// The accumulation order is fixed so seeded runs stay reproducible.
    pub fn sample_with(&self, season: Season, r: f64) -> Direction {
        let mut cumulative = 0.0;
        for (direction, p) in Direction::ALL.iter().zip(self.weights(season)) {
            cumulative += p;
            if cumulative >= r {
                return *direction;
            }
        }
        // Rounding can leave the total a hair under r.
        Direction::ALL[Direction::ALL.len() - 1]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn default_rows_sum_to_one() {
        let sampler = DirectionSampler::new();
        for season in Season::ALL {
            let sum: f64 = sampler.weights(season).iter().sum();
            assert!((sum - 1.0).abs() < TOLERANCE, "{season} sums to {sum}");
        }
        assert!(DirectionSampler::with_weights(SEASON_WEIGHTS).is_ok());
    }

    #[test]
    fn bad_rows_are_rejected() {
        let mut weights = SEASON_WEIGHTS;
        weights[2][0] = 0.5;
        assert!(matches!(
            DirectionSampler::with_weights(weights),
            Err(ModelError::ProbabilitySum { season: Season::Fall, .. })
        ));

        let mut weights = SEASON_WEIGHTS;
        weights[3][0] = -0.2;
        weights[3][1] = 0.56;
        assert!(matches!(
            DirectionSampler::with_weights(weights),
            Err(ModelError::NegativeProbability { season: Season::Winter, .. })
        ));
    }

    #[test]
    fn cumulative_order_is_stay_first() {
        let sampler = DirectionSampler::new();
        assert_eq!(sampler.sample_with(Season::Spring, 0.0), Direction::Stay);
        assert_eq!(sampler.sample_with(Season::Spring, 0.16), Direction::Stay);
        assert_eq!(sampler.sample_with(Season::Spring, 0.17), Direction::N);
        assert_eq!(sampler.sample_with(Season::Summer, 0.45), Direction::SE);
        assert_eq!(sampler.sample_with(Season::Winter, 0.999_999_9), Direction::NW);
    }

    #[test]
    fn seeded_draws_are_reproducible() {
        let sampler = DirectionSampler::new();
        let draw = |seed| {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            (0..32)
                .map(|_| sampler.sample(Season::Fall, &mut rng))
                .collect::<Vec<_>>()
        };
        assert_eq!(draw(7), draw(7));
    }

    #[test]
    fn long_run_frequencies_track_the_table() {
        let sampler = DirectionSampler::new();
        let mut rng = ChaCha8Rng::seed_from_u64(99);
        let mut counts = [0u32; 7];
        let n = 70_000;
        for _ in 0..n {
            let d = sampler.sample(Season::Summer, &mut rng);
            let i = Direction::ALL.iter().position(|x| *x == d).unwrap();
            counts[i] += 1;
        }
        for (count, p) in counts.iter().zip(sampler.weights(Season::Summer)) {
            let observed = *count as f64 / n as f64;
            assert!((observed - p).abs() < 0.01, "observed {observed}, expected {p}");
        }
    }

    proptest! {
        #[test]
        fn any_unit_draw_maps_to_a_direction(r in 0.0f64..1.0, s in 0usize..4) {
            let season = Season::from_index(s).unwrap();
            let sampler = DirectionSampler::new();
            let d = sampler.sample_with(season, r);
            prop_assert!(Direction::ALL.contains(&d));
        }

        #[test]
        fn normalized_random_rows_are_accepted(raw in proptest::array::uniform7(0.01f64..1.0)) {
            let total: f64 = raw.iter().sum();
            let row = raw.map(|p| p / total);
            prop_assert!(DirectionSampler::with_weights([row; 4]).is_ok());
        }
    }
}
