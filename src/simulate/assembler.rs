use bio::alphabets::dna;
use rand::Rng;

use crate::config::SimConfig;
use crate::simulate::context::RunContext;
use crate::simulate::region::Region;
use crate::types::Mode;

/// Quality symbol used when the input carries no quality string (Phred+33 Q40).
pub const SYNTHETIC_QUALITY: u8 = b'I';

/// One sampled placement within a region: a start offset and a length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fragment {
    pub offset: usize,
    pub len: usize,
}

/// A finished synthetic read. `qual` is present for FASTQ-style modes and
/// absent for contig-mode FASTA records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputRead {
    pub name: String,
    pub seq: Vec<u8>,
    pub qual: Option<Vec<u8>>,
}

/// Builds the read(s) for one fragment: slice the region, randomize strand,
/// and split into mates for the paired modes. Returns `None` when the
/// fragment cannot be realized (it overruns the region, is empty, or is too
/// short to carry two mates); such fragments are dropped silently and do
/// not consume a name.
pub fn assemble(
    ctx: &mut RunContext,
    region: &Region,
    fragment: Fragment,
    config: &SimConfig,
) -> Option<(OutputRead, Option<OutputRead>)> {
    if fragment.len == 0 || fragment.offset + fragment.len > region.len() {
        return None;
    }
    if config.mode.is_paired() && fragment.len < config.read_length {
        return None;
    }

    let end = fragment.offset + fragment.len;
    let mut seq = region.seq[fragment.offset..end].to_vec();
    let mut qual = match config.mode {
        Mode::Contig => None,
        _ => Some(match region.qual {
            Some(qual) => qual[fragment.offset..end].to_vec(),
            None => vec![SYNTHETIC_QUALITY; fragment.len],
        }),
    };

    // Unbiased strand draw; sequence and quality reverse together so
    // positional correspondence is preserved.
    if ctx.rng.gen_bool(0.5) {
        seq = dna::revcomp(&seq);
        if let Some(qual) = qual.as_mut() {
            qual.reverse();
        }
    }

    let id = ctx.next_fragment_id();
    match config.mode {
        Mode::Se | Mode::Pacbio => {
            let name = format!("{}{}", config.name_prefix, id);
            Some((OutputRead { name, seq, qual }, None))
        }
        Mode::Contig => {
            let name = format!("{}{}", config.name_prefix, id);
            Some((
                OutputRead {
                    name,
                    seq,
                    qual: None,
                },
                None,
            ))
        }
        Mode::Pe | Mode::Mp => {
            let qual = qual.unwrap_or_else(|| vec![SYNTHETIC_QUALITY; fragment.len]);
            Some(split_mates(&seq, &qual, config, id))
        }
    }
}

/// Mate 1 is the first `read_length` bases of the fragment, mate 2 the
/// last `read_length` (overlapping when the fragment is shorter than two
/// reads). One mate is then flipped onto the opposite strand: mate 2 for
/// pe (inward-facing pair), mate 1 for mp (outward-facing pair).
fn split_mates(
    seq: &[u8],
    qual: &[u8],
    config: &SimConfig,
    id: u64,
) -> (OutputRead, Option<OutputRead>) {
    let read_length = config.read_length;
    let mut mate1_seq = seq[..read_length].to_vec();
    let mut mate1_qual = qual[..read_length].to_vec();
    let mut mate2_seq = seq[seq.len() - read_length..].to_vec();
    let mut mate2_qual = qual[qual.len() - read_length..].to_vec();

    match config.mode {
        Mode::Pe => {
            mate2_seq = dna::revcomp(&mate2_seq);
            mate2_qual.reverse();
        }
        Mode::Mp => {
            mate1_seq = dna::revcomp(&mate1_seq);
            mate1_qual.reverse();
        }
        _ => unreachable!("split_mates is only called for paired modes"),
    }

    let mate1 = OutputRead {
        name: format!("{}{}/1", config.name_prefix, id),
        seq: mate1_seq,
        qual: Some(mate1_qual),
    };
    let mate2 = OutputRead {
        name: format!("{}{}/2", config.name_prefix, id),
        seq: mate2_seq,
        qual: Some(mate2_qual),
    };
    (mate1, Some(mate2))
}
