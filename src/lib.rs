//! Virtual restriction digests.
//!
//! Cuts every record of a FASTA file with one restriction enzyme and reports the
//! fragments as BED-like lines annotated with fragment length and CpG count.
//!
//! ```no_run
//! use std::path::Path;
//! use vdigest::{BedWriter, FastaSource, NoCuts, digest_records, enzyme};
//!
//! let enzyme = enzyme::lookup("MspI")?;
//! let records = FastaSource::open(Path::new("genome.fa"))?;
//! let mut out = BedWriter::new(std::io::stdout().lock());
//! digest_records(&enzyme, records, &mut out, NoCuts::Skip)?;
//! # Ok::<(), vdigest::Error>(())
//! ```

pub mod bed;
pub mod enzyme;
mod error;
pub mod fasta;
pub mod fragment;

use std::io::Write;

pub use bed::BedWriter;
pub use enzyme::Enzyme;
pub use error::{Error, Result};
pub use fasta::{FastaSource, SequenceRecord};
pub use fragment::{Fragment, Fragments, count_cpg};

/// What to do with a record in which the enzyme finds no site.
#[derive(clap::ValueEnum, Default, Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoCuts {
    /// Warn and write nothing for the record.
    #[default]
    Skip,
    /// Write the whole record as a single fragment `1, len, len`.
    Whole,
    /// Stop with an error.
    Fail,
}

/// Totals over a digest run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DigestStats {
    pub records: usize,
    pub fragments: usize,
    /// Records without a single cut site.
    pub uncut: usize,
}

/// Digest all `records` with `enzyme`, writing fragments to `out`.
///
/// Each record name is echoed to stderr as progress. Output is flushed after every
/// record, so a failure part way leaves the earlier records intact in `out`.
pub fn digest_records<W: Write>(
    enzyme: &Enzyme,
    records: impl IntoIterator<Item = Result<SequenceRecord>>,
    out: &mut BedWriter<W>,
    no_cuts: NoCuts,
) -> Result<DigestStats> {
    let mut stats = DigestStats::default();
    for record in records {
        let record = record?;
        eprintln!("{}", record.name);
        stats.records += 1;

        let cuts = enzyme.search(&record.seq);
        log::debug!(
            "{}: {} bp, {} {} sites",
            record.name,
            record.seq.len(),
            cuts.len(),
            enzyme.name
        );

        if cuts.is_empty() {
            stats.uncut += 1;
            match no_cuts {
                NoCuts::Skip => {
                    log::warn!("no {} site in {}, skipping", enzyme.name, record.name);
                    continue;
                }
                NoCuts::Whole => {
                    let len = record.seq.len();
                    out.write_fragment(&Fragment {
                        contig: &record.name,
                        start: 1,
                        end: len,
                        length: len,
                        cpg: count_cpg(&record.seq),
                    })?;
                    stats.fragments += 1;
                }
                NoCuts::Fail => return Err(Error::NoCutSites(record.name)),
            }
        } else {
            for fragment in Fragments::new(&record.name, &record.seq, &cuts)? {
                out.write_fragment(&fragment)?;
                stats.fragments += 1;
            }
        }
        out.flush()?;
    }
    log::info!(
        "{} records, {} fragments, {} records without {} sites",
        stats.records,
        stats.fragments,
        stats.uncut,
        enzyme.name
    );
    Ok(stats)
}
