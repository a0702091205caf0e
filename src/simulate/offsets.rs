use rand::distributions::{Distribution, Uniform};
use rand::Rng;

/// `count` uniform fragment start positions in `[0, region_len - anchor]`,
/// sorted ascending. Duplicates are permitted. Callers must ensure
/// `region_len >= anchor` (regions too short for the anchor are skipped
/// before sampling).
pub fn random<R: Rng>(rng: &mut R, region_len: usize, anchor: usize, count: usize) -> Vec<usize> {
    let span = region_len - anchor;
    let between = Uniform::from(0..=span);
    let mut offsets: Vec<usize> = (0..count).map(|_| between.sample(rng)).collect();
    offsets.sort_unstable();
    offsets
}

/// `count` fixed-step start positions: `0, step, 2*step, ...` with
/// `step = (region_len - anchor) / count`. Deterministic placement for
/// reproducible test datasets.
pub fn systematic(region_len: usize, anchor: usize, count: usize) -> Vec<usize> {
    if count == 0 {
        return Vec::new();
    }
    let step = (region_len - anchor) / count;
    (0..count).map(|i| i * step).collect()
}
