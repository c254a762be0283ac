//! Turning cut positions into annotated fragments.
//!
//! Coordinates follow the historical output of the tool and are *not* canonical BED:
//!
//! - the leading fragment is `1 .. cuts[0] - 1`, with `length = cuts[0] - 1`,
//! - interior fragments are `cuts[i-1] .. cuts[i]`, with `length = end - start`,
//! - the trailing fragment is `cuts[last] .. len`, with `length = len - cuts[last]`.
//!
//! The bases each fragment covers do tile the sequence without gaps:
//! `seq[..c0-1]`, `seq[c(i-1)-1..c(i)-1]`, and `seq[c_last-1..]`.

use crate::error::{Error, Result};

/// One restriction fragment of a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment<'a> {
    pub contig: &'a str,
    pub start: usize,
    pub end: usize,
    pub length: usize,
    /// Number of CpG dinucleotides in the fragment's bases.
    pub cpg: usize,
}

/// Count `CG` dinucleotides, ignoring case.
///
/// `CG` cannot overlap itself, so this equals the non-overlapping substring count.
pub fn count_cpg(seq: &[u8]) -> usize {
    seq.windows(2)
        .filter(|w| w[0].eq_ignore_ascii_case(&b'C') && w[1].eq_ignore_ascii_case(&b'G'))
        .count()
}

/// Iterator over the `cuts.len() + 1` fragments of one record, in positional order.
#[derive(Debug, Clone)]
pub struct Fragments<'a> {
    contig: &'a str,
    seq: &'a [u8],
    cuts: &'a [usize],
    /// Index of the next fragment; fragment `i` ends at `cuts[i]` (or the sequence end).
    next: usize,
}

impl<'a> Fragments<'a> {
    /// `cuts` must be ascending 1-based positions inside `[1, seq.len()]`.
    pub fn new(contig: &'a str, seq: &'a [u8], cuts: &'a [usize]) -> Result<Self> {
        if cuts.is_empty() {
            return Err(Error::NoCutSites(contig.to_string()));
        }
        if let Some(&position) = cuts.iter().find(|&&c| c == 0 || c > seq.len()) {
            return Err(Error::CutOutOfRange {
                contig: contig.to_string(),
                position,
                len: seq.len(),
            });
        }
        debug_assert!(cuts.is_sorted(), "cut positions must be ascending");
        Ok(Self {
            contig,
            seq,
            cuts,
            next: 0,
        })
    }

    fn fragment(&self, start: usize, end: usize, length: usize, bases: &[u8]) -> Fragment<'a> {
        Fragment {
            contig: self.contig,
            start,
            end,
            length,
            cpg: count_cpg(bases),
        }
    }
}

impl<'a> Iterator for Fragments<'a> {
    type Item = Fragment<'a>;

    fn next(&mut self) -> Option<Fragment<'a>> {
        let i = self.next;
        let len = self.seq.len();
        let fragment = if i == 0 {
            let first = self.cuts[0];
            self.fragment(1, first - 1, first - 1, &self.seq[..first - 1])
        } else if i < self.cuts.len() {
            let (start, end) = (self.cuts[i - 1], self.cuts[i]);
            self.fragment(start, end, end - start, &self.seq[start - 1..end - 1])
        } else if i == self.cuts.len() {
            let last = self.cuts[i - 1];
            self.fragment(last, len, len - last, &self.seq[last - 1..])
        } else {
            return None;
        };
        self.next += 1;
        Some(fragment)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.cuts.len() + 1 - self.next.min(self.cuts.len() + 1);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Fragments<'_> {}
