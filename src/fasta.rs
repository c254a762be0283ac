//! Lazy FASTA reading. Gzip, bzip2 and xz input is decompressed transparently.

use std::path::{Path, PathBuf};

use needletail::FastxReader;
use needletail::errors::ParseErrorKind;
use needletail::parser::Format;

use crate::error::{Error, Result};

/// A named sequence from the input file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SequenceRecord {
    /// First whitespace-delimited word of the header line.
    pub name: String,
    pub seq: Vec<u8>,
}

/// Forward-only iterator over the records of a FASTA file, in file order.
///
/// Only the current record is held in memory.
pub struct FastaSource {
    path: PathBuf,
    reader: Option<Box<dyn FastxReader>>,
    /// First record, read eagerly by `open`.
    peeked: Option<SequenceRecord>,
}

impl FastaSource {
    /// Open `path` and read its first record.
    ///
    /// A missing file, an unparsable file, or FASTQ input is reported here, before the
    /// caller has produced any output.
    pub fn open(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::FastaNotFound(path.to_path_buf()));
        }
        let reader = match needletail::parse_fastx_file(path) {
            Ok(reader) => Some(reader),
            Err(e) if matches!(e.kind, ParseErrorKind::EmptyFile) => {
                log::warn!("{} contains no records", path.display());
                None
            }
            Err(e) => return Err(e.into()),
        };
        let mut source = Self {
            path: path.to_path_buf(),
            reader,
            peeked: None,
        };
        source.peeked = source.read_record().transpose()?;
        Ok(source)
    }

    fn read_record(&mut self) -> Option<Result<SequenceRecord>> {
        let record = match self.reader.as_mut()?.next()? {
            Ok(record) => record,
            Err(e) => return Some(Err(e.into())),
        };
        if matches!(record.format(), Format::Fastq) {
            return Some(Err(Error::NotFasta(self.path.clone())));
        }
        let name = record
            .id()
            .split(|b| b.is_ascii_whitespace())
            .next()
            .unwrap_or_default();
        Some(Ok(SequenceRecord {
            name: String::from_utf8_lossy(name).into_owned(),
            seq: record.seq().into_owned(),
        }))
    }
}

impl Iterator for FastaSource {
    type Item = Result<SequenceRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.peeked.take() {
            Some(record) => Some(Ok(record)),
            None => self.read_record(),
        }
    }
}
