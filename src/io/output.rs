use anyhow::{anyhow, Context, Result};
use bio::io::{fasta, fastq};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::simulate::OutputRead;
use crate::types::Mode;

/// Serializes generated reads: FASTQ for the read modes, FASTA for contig
/// mode. Writes to stdout when no path is given; a `.gz` suffix switches
/// the file sink to gzip.
pub enum OutputWriter {
    Fasta(fasta::Writer<Box<dyn Write>>),
    Fastq(fastq::Writer<Box<dyn Write>>),
}

impl OutputWriter {
    pub fn create(path: Option<&Path>, mode: Mode) -> Result<Self> {
        let sink: Box<dyn Write> = match path {
            Some(path) => {
                let file =
                    File::create(path).with_context(|| format!("create {}", path.display()))?;
                if path.extension().and_then(|e| e.to_str()) == Some("gz") {
                    niffler::get_writer(
                        Box::new(file),
                        niffler::compression::Format::Gzip,
                        niffler::Level::Six,
                    )
                    .with_context(|| format!("compress {}", path.display()))?
                } else {
                    Box::new(BufWriter::new(file))
                }
            }
            None => Box::new(BufWriter::new(io::stdout())),
        };

        Ok(match mode {
            Mode::Contig => OutputWriter::Fasta(fasta::Writer::new(sink)),
            _ => OutputWriter::Fastq(fastq::Writer::new(sink)),
        })
    }

    pub fn write_read(&mut self, read: &OutputRead) -> Result<()> {
        match self {
            OutputWriter::Fasta(writer) => writer
                .write(&read.name, None, &read.seq)
                .context("write FASTA record")?,
            OutputWriter::Fastq(writer) => {
                let qual = read
                    .qual
                    .as_deref()
                    .ok_or_else(|| anyhow!("read {} is missing its quality string", read.name))?;
                writer
                    .write(&read.name, None, &read.seq, qual)
                    .context("write FASTQ record")?;
            }
        }
        Ok(())
    }

    pub fn finish(&mut self) -> Result<()> {
        match self {
            OutputWriter::Fasta(writer) => writer.flush().context("flush output")?,
            OutputWriter::Fastq(writer) => writer.flush().context("flush output")?,
        }
        Ok(())
    }
}
