/// The sequencing platforms the simulator can emulate. Selected once at
/// startup from the CLI subcommand and fixed for the whole run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Single-end short reads
    Se,
    /// Paired-end short reads, mates facing inward
    Pe,
    /// Mate-pair short reads, mates facing outward
    Mp,
    /// Long reads with skewed length distribution
    Pacbio,
    /// Tiled contig-sized fragments, FASTA output
    Contig,
}

impl Mode {
    pub fn is_paired(self) -> bool {
        matches!(self, Mode::Pe | Mode::Mp)
    }

    /// How many output records one fragment yields.
    pub fn reads_per_fragment(self) -> usize {
        if self.is_paired() {
            2
        } else {
            1
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Mode::Se => "se",
            Mode::Pe => "pe",
            Mode::Mp => "mp",
            Mode::Pacbio => "pacbio",
            Mode::Contig => "contig",
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
