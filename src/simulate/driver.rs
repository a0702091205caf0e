use rand::Rng;
use rand_distr::Normal;

use crate::config::SimConfig;
use crate::error::SimError;
use crate::simulate::assembler::{self, Fragment, OutputRead};
use crate::simulate::context::RunContext;
use crate::simulate::lengths::{self, NegBinomial};
use crate::simulate::offsets;
use crate::simulate::region::Region;
use crate::types::Mode;

/// Minimum difference, in bases, between the last two contig tiles before
/// the trailing tile is considered a near-duplicate and dropped.
const MIN_DISTINCT_TAIL: i64 = 10;

/// Drives one sequencing mode over regions. The length models are built
/// once at startup; a model field is `Some` only when its mode and the
/// systematic flag call for stochastic lengths, so fragment planning just
/// follows whichever model is present.
pub struct ModeDriver {
    config: SimConfig,
    long_read: Option<NegBinomial>,
    insert: Option<Normal<f64>>,
    tile_fuzz: Option<NegBinomial>,
}

impl ModeDriver {
    pub fn new(config: SimConfig) -> Result<Self, SimError> {
        config.validate()?;

        let long_read = if config.mode == Mode::Pacbio && !config.systematic {
            Some(NegBinomial::new(
                lengths::LENGTH_SHAPE,
                lengths::LENGTH_SHAPE / config.read_length as f64,
            )?)
        } else {
            None
        };

        let insert = if config.mode.is_paired() && !config.systematic {
            let mean = config.insert_size as f64;
            Some(
                Normal::new(mean, mean * lengths::INSERT_SD_FRACTION)
                    .map_err(|e| SimError::Config(format!("insert size model: {e}")))?,
            )
        } else {
            None
        };

        let tile_fuzz = if config.mode == Mode::Contig {
            Some(NegBinomial::new(lengths::LENGTH_SHAPE, lengths::TILE_FUZZ_P)?)
        } else {
            None
        };

        Ok(ModeDriver {
            config,
            long_read,
            insert,
            tile_fuzz,
        })
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Lazily yields the reads for one region. Offsets and lengths are
    /// sampled up front (they are cheap integers); slicing and strand
    /// randomization happen per fragment as the stream is consumed.
    pub fn generate<'a>(&'a self, region: Region<'a>, ctx: &'a mut RunContext) -> ReadStream<'a> {
        let fragments = self.plan(&mut ctx.rng, region.len());
        ReadStream {
            driver: self,
            region,
            ctx,
            fragments: fragments.into_iter(),
            pending: None,
            skipped: 0,
        }
    }

    /// Fragments to aim for in a region, derived from coverage rather than
    /// drawn stochastically. Fractional counts truncate toward zero.
    fn fragment_count(&self, region_len: usize) -> usize {
        let config = &self.config;
        let bases_per_fragment = (config.read_length * config.mode.reads_per_fragment()) as f64;
        (region_len as f64 * config.coverage / bases_per_fragment) as usize
    }

    fn plan<R: Rng>(&self, rng: &mut R, region_len: usize) -> Vec<Fragment> {
        let config = &self.config;
        let anchor = config.anchor_length();
        if region_len < anchor {
            // Region too short for even one placement; expected, not an error.
            return Vec::new();
        }
        if config.mode == Mode::Contig {
            return self.plan_contig(rng, region_len);
        }

        let count = self.fragment_count(region_len);
        if count == 0 {
            return Vec::new();
        }

        let starts = if config.systematic {
            offsets::systematic(region_len, anchor, count)
        } else {
            offsets::random(rng, region_len, anchor, count)
        };

        let lens = if let Some(model) = &self.long_read {
            lengths::long_read(rng, model, count)
        } else if let Some(model) = &self.insert {
            lengths::insert_sizes(rng, model, config.read_length, count)
        } else {
            lengths::fixed(count, anchor)
        };

        starts
            .into_iter()
            .zip(lens)
            .map(|(offset, len)| Fragment { offset, len })
            .collect()
    }

    /// Contig tiling: `count` random anchors plus one extra are sorted, and
    /// every gap between consecutive anchors becomes a tile with fuzzed
    /// length (overlapping or abutting its neighbor). The stretch from the
    /// last anchor to the sequence end is tiled the same way, then dropped
    /// again if it came out nearly identical to its predecessor.
    fn plan_contig<R: Rng>(&self, rng: &mut R, region_len: usize) -> Vec<Fragment> {
        let config = &self.config;
        let count = self.fragment_count(region_len);
        if count == 0 {
            return Vec::new();
        }
        let model = match &self.tile_fuzz {
            Some(model) => model,
            None => return Vec::new(),
        };

        let anchors = offsets::random(rng, region_len, config.read_length, count + 1);

        let mut tiles = Vec::with_capacity(anchors.len());
        for pair in anchors.windows(2) {
            let (start, next) = (pair[0], pair[1]);
            let len = lengths::fuzzed_tile(rng, model, next - start, start, region_len);
            if len >= 1 {
                tiles.push(Fragment { offset: start, len });
            }
        }

        if let Some(&last) = anchors.last() {
            let len = lengths::fuzzed_tile(rng, model, region_len - last, last, region_len);
            if len >= 1 {
                let near_duplicate = tiles
                    .last()
                    .map(|prev| (prev.len as i64 - len as i64).abs() < MIN_DISTINCT_TAIL)
                    .unwrap_or(false);
                if !near_duplicate {
                    tiles.push(Fragment { offset: last, len });
                }
            }
        }
        tiles
    }
}

/// A lazy, finite, non-restartable stream of reads for one region. Paired
/// modes buffer mate 2 so the pair is always emitted back to back, mate 1
/// first. Fragments the assembler rejects are counted, not surfaced.
pub struct ReadStream<'a> {
    driver: &'a ModeDriver,
    region: Region<'a>,
    ctx: &'a mut RunContext,
    fragments: std::vec::IntoIter<Fragment>,
    pending: Option<OutputRead>,
    skipped: usize,
}

impl ReadStream<'_> {
    /// Fragments dropped so far for overrunning their region (or being
    /// unrealizable for the active mode).
    pub fn skipped_fragments(&self) -> usize {
        self.skipped
    }
}

impl Iterator for ReadStream<'_> {
    type Item = OutputRead;

    fn next(&mut self) -> Option<OutputRead> {
        if let Some(read) = self.pending.take() {
            return Some(read);
        }
        loop {
            let fragment = self.fragments.next()?;
            match assembler::assemble(self.ctx, &self.region, fragment, &self.driver.config) {
                Some((first, second)) => {
                    self.pending = second;
                    return Some(first);
                }
                None => self.skipped += 1,
            }
        }
    }
}
