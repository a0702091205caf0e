use rand::rngs::StdRng;
use rand::SeedableRng;

/// The only mutable state shared across a run: the random number generator
/// and the fragment name counter. One instance is threaded through every
/// driver invocation, so numbering stays monotonic across all regions of
/// all input records and is never reset.
pub struct RunContext {
    pub(crate) rng: StdRng,
    next_id: u64,
}

impl RunContext {
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        RunContext { rng, next_id: 1 }
    }

    /// Allocates the next fragment number. A mate pair shares one number.
    pub fn next_fragment_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn fragments_emitted(&self) -> u64 {
        self.next_id - 1
    }
}
