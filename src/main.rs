use clap::Parser;

use readsim::cli::{self, CommonOpts};
use readsim::commands;
use readsim::config::{SimConfig, DEFAULT_INSERT_SIZE};
use readsim::types::Mode;

fn build_config(
    mode: Mode,
    common: &CommonOpts,
    coverage: f64,
    insert_size: usize,
    systematic: bool,
) -> SimConfig {
    SimConfig {
        mode,
        read_length: common.read_length,
        coverage,
        insert_size,
        systematic,
        region_length: common.region_length,
        name_prefix: common.prefix.clone(),
        seed: common.seed,
    }
}

fn main() {
    let args = cli::Args::parse();

    let result = match args.command {
        cli::Commands::Se {
            common,
            coverage,
            systematic,
        } => {
            let config = build_config(Mode::Se, &common, coverage, DEFAULT_INSERT_SIZE, systematic);
            commands::simulate::run(config, &common.input, common.output.as_deref(), common.quiet)
        }
        cli::Commands::Pe {
            common,
            coverage,
            insert_size,
            systematic,
        } => {
            let config = build_config(Mode::Pe, &common, coverage, insert_size, systematic);
            commands::simulate::run(config, &common.input, common.output.as_deref(), common.quiet)
        }
        cli::Commands::Mp {
            common,
            coverage,
            insert_size,
            systematic,
        } => {
            let config = build_config(Mode::Mp, &common, coverage, insert_size, systematic);
            commands::simulate::run(config, &common.input, common.output.as_deref(), common.quiet)
        }
        cli::Commands::Pacbio {
            common,
            coverage,
            systematic,
        } => {
            let config = build_config(Mode::Pacbio, &common, coverage, DEFAULT_INSERT_SIZE, systematic);
            commands::simulate::run(config, &common.input, common.output.as_deref(), common.quiet)
        }
        cli::Commands::Contig { common, coverage } => {
            let config = build_config(Mode::Contig, &common, coverage, DEFAULT_INSERT_SIZE, false);
            commands::simulate::run(config, &common.input, common.output.as_deref(), common.quiet)
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
