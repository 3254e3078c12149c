use rand::Rng;
use rand_distr::{Distribution, Normal, Uniform};

use super::SampleGen;
use crate::error::{MlErr, Result};

/// Amount of previous marks averaged into a single feature.
pub const MARKS_PER_SAMPLE: usize = 4;

/// Inclusive lower bound of a generated mark.
pub const MARKS_LOW: u32 = 40;

/// Exclusive upper bound of a generated mark.
pub const MARKS_HIGH: u32 = 100;

/// Standard deviation of the noise added to the target.
pub const NOISE_STD_DEV: f64 = 4.0;

/// Generates synthetic student records.
///
/// Each row is the mean of `marks_per_sample` uniformly drawn integer marks, paired with that
/// same mean plus some normally distributed noise.
pub struct MarksGen<R: Rng> {
    rng: R,
    marks: Uniform<u32>,
    noise: Normal<f64>,
    marks_per_sample: usize,
    remaining: usize,
}

impl<R: Rng> MarksGen<R> {
    /// Creates a new `MarksGen` with the default marks range and noise.
    ///
    /// # Arguments
    /// * `rng` - A random number generator.
    /// * `limit` - The maximum amount of rows to generate.
    pub fn new(rng: R, limit: usize) -> Result<Self> {
        Self::with_params(
            rng,
            limit,
            MARKS_PER_SAMPLE,
            MARKS_LOW,
            MARKS_HIGH,
            NOISE_STD_DEV,
        )
    }

    /// Creates a new `MarksGen` sampling from custom distributions.
    ///
    /// # Arguments
    /// * `rng` - A random number generator.
    /// * `limit` - The maximum amount of rows to generate.
    /// * `marks_per_sample` - How many marks are averaged into each feature.
    /// * `low` - The inclusive lower limit of a mark.
    /// * `high` - The exclusive upper limit of a mark.
    /// * `noise_std_dev` - The standard deviation of the target's noise.
    ///
    /// # Returns
    /// An error if the marks range is empty, `marks_per_sample` is zero or `noise_std_dev` is
    /// negative or not finite.
    pub fn with_params(
        rng: R,
        limit: usize,
        marks_per_sample: usize,
        low: u32,
        high: u32,
        noise_std_dev: f64,
    ) -> Result<Self> {
        if marks_per_sample == 0 {
            return Err(MlErr::Distribution(
                "at least one mark per sample is required".into(),
            ));
        }

        Ok(Self {
            rng,
            marks: Uniform::new(low, high)?,
            noise: Normal::new(0., noise_std_dev)?,
            marks_per_sample,
            remaining: limit,
        })
    }
}

impl<R: Rng> SampleGen for MarksGen<R> {
    fn sample(&mut self, mut n: usize) -> Option<Vec<f64>> {
        if self.remaining == 0 {
            return None;
        }

        n = n.min(self.remaining);
        self.remaining -= n;

        let Self {
            rng,
            marks,
            noise,
            marks_per_sample,
            ..
        } = self;

        let mut rows = Vec::with_capacity(n * 2);
        for _ in 0..n {
            let total: u32 = (0..*marks_per_sample).map(|_| marks.sample(rng)).sum();
            let avg = total as f64 / *marks_per_sample as f64;
            rows.push(avg);
            rows.push(avg + noise.sample(rng));
        }

        Some(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn seeded_rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    #[test]
    fn empty() {
        let mut marks_gen = MarksGen::new(seeded_rng(), 0).unwrap();
        assert!(marks_gen.sample(1).is_none());
    }

    #[test]
    fn partial() {
        let mut marks_gen = MarksGen::new(seeded_rng(), 10).unwrap();

        let rows = marks_gen.sample(7).unwrap();
        assert_eq!(rows.len(), 14);

        let rows = marks_gen.sample(7).unwrap();
        assert_eq!(rows.len(), 6);

        assert!(marks_gen.sample(1).is_none());
    }

    #[test]
    fn features_stay_within_marks_range() {
        let mut marks_gen = MarksGen::new(seeded_rng(), 500).unwrap();
        let rows = marks_gen.sample(500).unwrap();

        for row in rows.chunks(2) {
            let x = row[0];
            assert!((MARKS_LOW as f64..MARKS_HIGH as f64).contains(&x), "{x}");
            // four integer marks average to a multiple of a quarter
            assert_eq!((x * 4.).fract(), 0.);
        }
    }

    #[test]
    fn noiseless_targets_match_features() {
        let mut marks_gen = MarksGen::with_params(seeded_rng(), 20, 4, 40, 100, 0.).unwrap();
        let rows = marks_gen.sample(20).unwrap();

        for row in rows.chunks(2) {
            assert_eq!(row[0], row[1]);
        }
    }

    #[test]
    fn same_seed_same_rows() {
        let a = MarksGen::new(seeded_rng(), 8).unwrap().sample(8);
        let b = MarksGen::new(seeded_rng(), 8).unwrap().sample(8);
        assert_eq!(a, b);
    }

    #[test]
    fn invalid_distributions() {
        assert!(matches!(
            MarksGen::with_params(seeded_rng(), 1, 4, 100, 40, 4.),
            Err(MlErr::Distribution(_))
        ));
        assert!(matches!(
            MarksGen::with_params(seeded_rng(), 1, 4, 40, 100, -1.),
            Err(MlErr::Distribution(_))
        ));
        assert!(matches!(
            MarksGen::with_params(seeded_rng(), 1, 0, 40, 100, 4.),
            Err(MlErr::Distribution(_))
        ));
    }
}
