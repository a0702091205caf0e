/// A bounded view into one input sequence. Long sequences are chunked into
/// regions so repeated slicing stays cheap; `base_offset` records where the
/// region starts in the original sequence (bookkeeping only, fragments are
/// not mapped back).
#[derive(Debug, Clone, Copy)]
pub struct Region<'a> {
    pub seq: &'a [u8],
    pub qual: Option<&'a [u8]>,
    pub base_offset: usize,
}

impl<'a> Region<'a> {
    pub fn len(&self) -> usize {
        self.seq.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seq.is_empty()
    }
}

/// Chunks a sequence into regions of `region_length` plus an overlap of
/// `margin` bases, so any fragment anchored inside a region's nominal span
/// still fits entirely within that region. A sequence no longer than
/// `region_length` comes back as a single region. Fragments sampled in the
/// overlapping margins are intentionally not deduplicated across regions.
pub fn split_regions<'a>(
    seq: &'a [u8],
    qual: Option<&'a [u8]>,
    region_length: usize,
    margin: usize,
) -> Vec<Region<'a>> {
    let total = seq.len();
    if total <= region_length {
        return vec![Region {
            seq,
            qual,
            base_offset: 0,
        }];
    }

    let mut regions = Vec::with_capacity(total / region_length + 1);
    let mut start = 0;
    while start + region_length + margin < total {
        let end = start + region_length + margin;
        regions.push(Region {
            seq: &seq[start..end],
            qual: qual.map(|q| &q[start..end]),
            base_offset: start,
        });
        start += region_length;
    }
    regions.push(Region {
        seq: &seq[start..],
        qual: qual.map(|q| &q[start..]),
        base_offset: start,
    });
    regions
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_sequence_is_one_region() {
        let seq = vec![b'A'; 1000];
        let regions = split_regions(&seq, None, 200_000, 180);
        assert_eq!(regions.len(), 1);
        assert_eq!(regions[0].len(), 1000);
        assert_eq!(regions[0].base_offset, 0);
    }

    #[test]
    fn test_million_base_sequence_splits_into_five_overlapping_regions() {
        let seq = vec![b'C'; 1_000_000];
        let regions = split_regions(&seq, None, 200_000, 180);
        assert_eq!(regions.len(), 5);

        // Union covers the whole sequence, adjacent regions overlap by the margin.
        assert_eq!(regions[0].base_offset, 0);
        for window in regions.windows(2) {
            let prev_end = window[0].base_offset + window[0].len();
            assert_eq!(window[1].base_offset, window[0].base_offset + 200_000);
            assert_eq!(prev_end - window[1].base_offset, 180);
        }
        let last = regions.last().unwrap();
        assert_eq!(last.base_offset + last.len(), 1_000_000);
    }

    #[test]
    fn test_quality_slices_stay_aligned() {
        let seq: Vec<u8> = (0..500_000u32).map(|i| b"ACGT"[(i % 4) as usize]).collect();
        let qual: Vec<u8> = (0..500_000u32).map(|i| 33 + (i % 40) as u8).collect();
        let regions = split_regions(&seq, Some(&qual), 200_000, 100);
        assert!(regions.len() > 1);
        for region in regions {
            let q = region.qual.expect("quality slice present");
            assert_eq!(q.len(), region.len());
            assert_eq!(q[0], qual[region.base_offset]);
        }
    }

    #[test]
    fn test_exact_multiple_gets_terminal_remainder_region() {
        let seq = vec![b'G'; 400_000];
        let regions = split_regions(&seq, None, 200_000, 150);
        // [0, 200150) then the terminal [200000, 400000)
        assert_eq!(regions.len(), 2);
        assert_eq!(regions[0].len(), 200_150);
        assert_eq!(regions[1].base_offset, 200_000);
        assert_eq!(regions[1].len(), 200_000);
    }
}
