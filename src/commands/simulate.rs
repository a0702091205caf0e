use anyhow::Result;
use std::path::Path;

use crate::config::SimConfig;
use crate::io::{InputReader, OutputWriter};
use crate::simulate::{split_regions, ModeDriver, RunContext};
use crate::utils::progress_bar_builder::ProgressBarBuilder;

#[derive(Debug, Default)]
struct RunStats {
    records: u64,
    regions: u64,
    skipped_regions: u64,
    reads: u64,
    skipped_fragments: u64,
}

/// Runs one simulation: stream input records, chunk each into regions, and
/// let the mode driver generate reads straight into the output writer.
pub fn run(config: SimConfig, input: &Path, output: Option<&Path>, quiet: bool) -> Result<()> {
    let driver = ModeDriver::new(config.clone())?;
    let mut ctx = RunContext::new(config.seed);

    let reader = InputReader::open(input)?;
    let mut writer = OutputWriter::create(output, config.mode)?;

    let progress = if quiet {
        None
    } else {
        Some(
            ProgressBarBuilder::new(format!("Simulating {} reads", config.mode))
                .with_tick()
                .build()?,
        )
    };

    let mut stats = RunStats::default();
    for record in reader {
        let record = record?;
        stats.records += 1;

        for region in split_regions(
            &record.seq,
            record.qual.as_deref(),
            config.region_length,
            config.region_margin(),
        ) {
            stats.regions += 1;
            if region.len() < config.anchor_length() {
                stats.skipped_regions += 1;
                continue;
            }

            let mut stream = driver.generate(region, &mut ctx);
            for read in stream.by_ref() {
                writer.write_read(&read)?;
                stats.reads += 1;
            }
            stats.skipped_fragments += stream.skipped_fragments() as u64;
        }

        if let Some(progress) = &progress {
            progress.set_message(format!(
                "{} sequences in, {} reads out",
                stats.records, stats.reads
            ));
        }
    }
    writer.finish()?;

    if let Some(progress) = progress {
        progress.finish_and_clear();
    }
    if !quiet {
        eprintln!(
            "Wrote {} reads from {} fragments ({} sequences, {} regions, {} regions too short)",
            stats.reads,
            ctx.fragments_emitted(),
            stats.records,
            stats.regions,
            stats.skipped_regions
        );
        if stats.skipped_fragments > 0 {
            eprintln!(
                "Dropped {} fragments that overran a region boundary",
                stats.skipped_fragments
            );
        }
    }
    Ok(())
}
