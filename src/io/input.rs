use anyhow::{Context, Result};
use bio::io::{fasta, fastq};
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use super::SeqRecord;
use crate::error::SimError;

type DecodedInput = BufReader<Box<dyn Read>>;

/// Streaming reader over either supported input format, decided from the
/// first byte of the (decompressed) stream.
pub enum InputReader {
    Fasta(fasta::Records<DecodedInput>),
    Fastq(fastq::Records<DecodedInput>),
}

impl InputReader {
    pub fn open(path: &Path) -> Result<Self> {
        let file = File::open(path).with_context(|| format!("open {}", path.display()))?;
        let (decompressed, _compression) = niffler::get_reader(Box::new(file))
            .with_context(|| format!("read {}", path.display()))?;
        Self::from_read(decompressed)
    }

    pub fn from_read(input: Box<dyn Read>) -> Result<Self> {
        let mut reader = BufReader::with_capacity(1 << 20, input);
        let first = reader.fill_buf().context("read input")?.first().copied();
        match first {
            Some(b'>') => Ok(InputReader::Fasta(
                fasta::Reader::from_bufread(reader).records(),
            )),
            Some(b'@') => Ok(InputReader::Fastq(
                fastq::Reader::from_bufread(reader).records(),
            )),
            Some(_) => Err(SimError::Format("input is neither FASTA nor FASTQ".into()).into()),
            None => Err(SimError::Format("input is empty".into()).into()),
        }
    }
}

impl std::fmt::Debug for InputReader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputReader::Fasta(_) => f.write_str("InputReader::Fasta"),
            InputReader::Fastq(_) => f.write_str("InputReader::Fastq"),
        }
    }
}

impl Iterator for InputReader {
    type Item = Result<SeqRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            InputReader::Fasta(records) => records.next().map(|record| {
                let record = record.context("parse FASTA record")?;
                Ok(SeqRecord {
                    id: record.id().to_string(),
                    seq: record.seq().to_vec(),
                    qual: None,
                })
            }),
            InputReader::Fastq(records) => records.next().map(|record| {
                let record = record.context("parse FASTQ record")?;
                Ok(SeqRecord {
                    id: record.id().to_string(),
                    seq: record.seq().to_vec(),
                    qual: Some(record.qual().to_vec()),
                })
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn boxed(data: &'static str) -> Box<dyn Read> {
        Box::new(Cursor::new(data.as_bytes()))
    }

    #[test]
    fn test_detects_fasta() {
        let reader = InputReader::from_read(boxed(">chr1 test\nACGTACGT\nACGT\n")).unwrap();
        let records: Vec<_> = reader.collect::<Result<_>>().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id, "chr1");
        assert_eq!(records[0].seq, b"ACGTACGTACGT");
        assert!(records[0].qual.is_none());
    }

    #[test]
    fn test_detects_fastq_with_quality() {
        let reader =
            InputReader::from_read(boxed("@read1\nACGT\n+\nIIII\n@read2\nTTTT\n+\nJJJJ\n")).unwrap();
        let records: Vec<_> = reader.collect::<Result<_>>().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].qual.as_deref(), Some(&b"IIII"[..]));
        assert_eq!(records[1].id, "read2");
    }

    #[test]
    fn test_rejects_unknown_format() {
        let err = InputReader::from_read(boxed("#not a sequence file\n")).unwrap_err();
        assert!(err.to_string().contains("neither FASTA nor FASTQ"));
    }

    #[test]
    fn test_rejects_empty_input() {
        assert!(InputReader::from_read(boxed("")).is_err());
    }
}
