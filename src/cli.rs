use clap::{Args as ClapArgs, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about = "Generate synthetic sequencing reads from a reference sequence", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,
}

/// Options shared by every sequencing mode.
#[derive(ClapArgs, Debug, Clone)]
pub struct CommonOpts {
    /// Input FASTA or FASTQ file (may be gzip/bzip2/xz compressed)
    pub input: PathBuf,

    /// Output file; stdout when omitted. A .gz suffix enables gzip compression
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,

    /// Read length in bases
    #[arg(short = 'l', long = "read-length")]
    pub read_length: usize,

    /// Split sequences longer than this into overlapping regions
    #[arg(long = "region-length", default_value = "200000")]
    pub region_length: usize,

    /// Prefix for generated read names
    #[arg(long, default_value = "r")]
    pub prefix: String,

    /// Seed the random number generator for reproducible output
    #[arg(long)]
    pub seed: Option<u64>,

    /// Suppress the progress spinner and run summary
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Simulate single-end reads
    Se {
        #[command(flatten)]
        common: CommonOpts,

        /// Target coverage depth
        #[arg(short = 'c', long)]
        coverage: f64,

        /// Place reads at fixed steps instead of random positions
        #[arg(long)]
        systematic: bool,
    },

    /// Simulate paired-end reads (inward-facing mates)
    Pe {
        #[command(flatten)]
        common: CommonOpts,

        /// Target coverage depth
        #[arg(short = 'c', long)]
        coverage: f64,

        /// Mean fragment (insert) size in bases
        #[arg(short = 'i', long = "insert-size", default_value = "180")]
        insert_size: usize,

        /// Place fragments at fixed steps instead of random positions
        #[arg(long)]
        systematic: bool,
    },

    /// Simulate mate-pair reads (outward-facing mates)
    Mp {
        #[command(flatten)]
        common: CommonOpts,

        /// Target coverage depth
        #[arg(short = 'c', long)]
        coverage: f64,

        /// Mean fragment (insert) size in bases
        #[arg(short = 'i', long = "insert-size", default_value = "180")]
        insert_size: usize,

        /// Place fragments at fixed steps instead of random positions
        #[arg(long)]
        systematic: bool,
    },

    /// Simulate long reads with negative-binomial length distribution
    Pacbio {
        #[command(flatten)]
        common: CommonOpts,

        /// Target coverage depth
        #[arg(short = 'c', long)]
        coverage: f64,

        /// Place reads at fixed steps instead of random positions
        #[arg(long)]
        systematic: bool,
    },

    /// Tile a sequence into overlapping contig-sized fragments (FASTA output)
    Contig {
        #[command(flatten)]
        common: CommonOpts,

        /// Tiling depth multiplier
        #[arg(short = 'c', long, default_value = "1.0")]
        coverage: f64,
    },
}
