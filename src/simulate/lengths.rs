use rand::Rng;
use rand_distr::{Distribution, Gamma, Poisson};

use crate::error::SimError;

/// Shape parameter shared by the long-read and tiling-fuzz length models.
pub const LENGTH_SHAPE: f64 = 5.0;
/// Success probability of the tiling-fuzz draw.
pub const TILE_FUZZ_P: f64 = 0.01;
/// Shift subtracted from the tiling-fuzz draw, centering it near zero with
/// a negative floor (tiles mostly overlap their neighbor, rarely leave a gap).
pub const TILE_FUZZ_SHIFT: i64 = 400;
/// Standard deviation of the insert-size model, as a fraction of the mean.
pub const INSERT_SD_FRACTION: f64 = 0.12;

/// Negative-binomial sampler, drawn as a gamma-poisson mixture: a rate from
/// `Gamma(shape, (1-p)/p)` feeds a Poisson draw. Mean is `shape * (1-p)/p`.
#[derive(Debug, Clone)]
pub struct NegBinomial {
    gamma: Gamma<f64>,
}

impl NegBinomial {
    pub fn new(shape: f64, p: f64) -> Result<Self, SimError> {
        if !(p > 0.0 && p < 1.0) {
            return Err(SimError::Config(format!(
                "negative binomial probability {p} is outside (0, 1)"
            )));
        }
        let gamma = Gamma::new(shape, (1.0 - p) / p)
            .map_err(|e| SimError::Config(format!("negative binomial parameters: {e}")))?;
        Ok(NegBinomial { gamma })
    }

    pub fn sample<R: Rng>(&self, rng: &mut R) -> f64 {
        let rate = self.gamma.sample(rng);
        match Poisson::new(rate) {
            Ok(poisson) => poisson.sample(rng),
            // A zero rate only arises from a degenerate gamma draw.
            Err(_) => 0.0,
        }
    }
}

/// Every fragment exactly `len` bases: se reads, and any systematic run.
pub fn fixed(count: usize, len: usize) -> Vec<usize> {
    vec![len; count]
}

/// Long-read lengths: negative binomial with mean near the configured read
/// length. Right-skewed, with mass near zero; draws that overrun their
/// region are dropped later by the assembler.
pub fn long_read<R: Rng>(rng: &mut R, model: &NegBinomial, count: usize) -> Vec<usize> {
    (0..count).map(|_| model.sample(rng).floor() as usize).collect()
}

/// Insert sizes: normal around the configured insert, floored to integer
/// and never below one read length.
pub fn insert_sizes<R: Rng>(
    rng: &mut R,
    model: &rand_distr::Normal<f64>,
    read_length: usize,
    count: usize,
) -> Vec<usize> {
    (0..count)
        .map(|_| {
            let drawn = model.sample(rng).floor();
            let drawn = if drawn < 0.0 { 0 } else { drawn as usize };
            drawn.max(read_length)
        })
        .collect()
}

/// Length of one contig tile of nominal length `len` starting at `offset`
/// within a sequence of `seq_len` bases. The fuzz draw mostly extends the
/// tile into its neighbor (overlap), occasionally leaves a gap. Two clamps:
/// a fuzz that would erase the tile forces length to `len / 2`, and a fuzz
/// that would push the end past the sequence end is forced to zero.
pub fn fuzzed_tile<R: Rng>(
    rng: &mut R,
    model: &NegBinomial,
    len: usize,
    offset: usize,
    seq_len: usize,
) -> usize {
    let fuzz = model.sample(rng).floor() as i64 - TILE_FUZZ_SHIFT;
    let mut tile = len as i64 - fuzz;
    if tile < 1 {
        tile = (len / 2) as i64;
    }
    if offset as i64 + tile > seq_len as i64 {
        tile = len as i64;
    }
    tile as usize
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use rand_distr::Normal;

    #[test]
    fn test_neg_binomial_rejects_bad_probability() {
        assert!(NegBinomial::new(LENGTH_SHAPE, 0.0).is_err());
        assert!(NegBinomial::new(LENGTH_SHAPE, 1.0).is_err());
        assert!(NegBinomial::new(LENGTH_SHAPE, 0.5).is_ok());
    }

    #[test]
    fn test_long_read_lengths_center_on_read_length() {
        let mut rng = StdRng::seed_from_u64(99);
        let read_length = 3000.0;
        let model = NegBinomial::new(LENGTH_SHAPE, LENGTH_SHAPE / read_length).unwrap();
        let lengths = long_read(&mut rng, &model, 2000);
        let mean = lengths.iter().sum::<usize>() as f64 / lengths.len() as f64;
        // Mean of NB(5, 5/3000) is 2995; allow generous sampling slack.
        assert!(
            (mean - read_length).abs() < read_length * 0.2,
            "mean {mean} too far from {read_length}"
        );
    }

    #[test]
    fn test_insert_sizes_never_below_read_length() {
        let mut rng = StdRng::seed_from_u64(5);
        let model = Normal::new(180.0, 180.0 * INSERT_SD_FRACTION).unwrap();
        let lengths = insert_sizes(&mut rng, &model, 150, 1000);
        assert_eq!(lengths.len(), 1000);
        assert!(lengths.iter().all(|&len| len >= 150));
        // Most draws should still land near the mean, not on the clamp.
        let near_mean = lengths.iter().filter(|&&len| len > 150).count();
        assert!(near_mean > 500);
    }

    #[test]
    fn test_fuzzed_tile_respects_sequence_end() {
        let mut rng = StdRng::seed_from_u64(17);
        let model = NegBinomial::new(LENGTH_SHAPE, TILE_FUZZ_P).unwrap();
        for _ in 0..500 {
            let tile = fuzzed_tile(&mut rng, &model, 500, 4500, 5000);
            assert!(4500 + tile <= 5000, "tile {tile} overruns the sequence");
        }
    }

    #[test]
    fn test_fuzzed_tile_halves_when_fuzz_erases_it() {
        let mut rng = StdRng::seed_from_u64(23);
        let model = NegBinomial::new(LENGTH_SHAPE, TILE_FUZZ_P).unwrap();
        // With a tiny nominal length the draw almost always erases the tile,
        // and the clamp forces len / 2.
        let mut halved = 0;
        for _ in 0..200 {
            let tile = fuzzed_tile(&mut rng, &model, 8, 0, 100_000);
            assert!(tile == 4 || tile <= 8 + TILE_FUZZ_SHIFT as usize);
            if tile == 4 {
                halved += 1;
            }
        }
        assert!(halved > 100);
    }
}
