//! Restriction enzyme table and cut-site search.
//!
//! Enzymes are looked up by their exact, case-sensitive name. Recognition sites are
//! IUPAC DNA, and cut offsets are counted from the 5' end of the site in its own
//! orientation, so `G^AATTC` (EcoRI) has `cut = 1` and `cut_complement = 5`.
//! Offsets can fall outside the site for type IIS enzymes.

use std::fmt;

use crate::error::{Error, Result};

/// A type II restriction enzyme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Enzyme {
    pub name: &'static str,
    /// Recognition site in upper-case IUPAC DNA.
    pub site: &'static str,
    /// Cut offset on the strand carrying the site.
    pub cut: isize,
    /// Cut offset on the complementary strand.
    pub cut_complement: isize,
}

const fn enzyme(
    name: &'static str,
    site: &'static str,
    cut: isize,
    cut_complement: isize,
) -> Enzyme {
    Enzyme {
        name,
        site,
        cut,
        cut_complement,
    }
}

/// Commercially common type II enzymes, sorted by name.
pub const ENZYMES: &[Enzyme] = &[
    enzyme("AatII", "GACGTC", 5, 1),
    enzyme("AccI", "GTMKAC", 2, 4),
    enzyme("AciI", "CCGC", 1, 3),
    enzyme("AfeI", "AGCGCT", 3, 3),
    enzyme("AflII", "CTTAAG", 1, 5),
    enzyme("AgeI", "ACCGGT", 1, 5),
    enzyme("AluI", "AGCT", 2, 2),
    enzyme("AlwI", "GGATC", 9, 10),
    enzyme("ApaI", "GGGCCC", 5, 1),
    enzyme("ApaLI", "GTGCAC", 1, 5),
    enzyme("AscI", "GGCGCGCC", 2, 6),
    enzyme("AseI", "ATTAAT", 2, 4),
    enzyme("AsiSI", "GCGATCGC", 5, 3),
    enzyme("AvaI", "CYCGRG", 1, 5),
    enzyme("AvrII", "CCTAGG", 1, 5),
    enzyme("BamHI", "GGATCC", 1, 5),
    enzyme("BbsI", "GAAGAC", 8, 12),
    enzyme("BbvI", "GCAGC", 13, 17),
    enzyme("BccI", "CCATC", 9, 10),
    enzyme("BclI", "TGATCA", 1, 5),
    enzyme("BglII", "AGATCT", 1, 5),
    enzyme("BsaI", "GGTCTC", 7, 11),
    enzyme("BsiWI", "CGTACG", 1, 5),
    enzyme("BsmAI", "GTCTC", 6, 10),
    enzyme("BsmBI", "CGTCTC", 7, 11),
    enzyme("BsrGI", "TGTACA", 1, 5),
    enzyme("BsrI", "ACTGG", 6, 4),
    enzyme("BstBI", "TTCGAA", 2, 4),
    enzyme("BstNI", "CCWGG", 2, 3),
    enzyme("BstUI", "CGCG", 2, 2),
    enzyme("ClaI", "ATCGAT", 2, 4),
    enzyme("Csp6I", "GTAC", 1, 3),
    enzyme("CviQI", "GTAC", 1, 3),
    enzyme("DdeI", "CTNAG", 1, 4),
    enzyme("DpnI", "GATC", 2, 2),
    enzyme("DpnII", "GATC", 0, 4),
    enzyme("DraI", "TTTAAA", 3, 3),
    enzyme("EaeI", "YGGCCR", 1, 5),
    enzyme("EagI", "CGGCCG", 1, 5),
    enzyme("EarI", "CTCTTC", 7, 10),
    enzyme("EcoRI", "GAATTC", 1, 5),
    enzyme("EcoRV", "GATATC", 3, 3),
    enzyme("FokI", "GGATG", 14, 18),
    enzyme("FseI", "GGCCGGCC", 6, 2),
    enzyme("HaeIII", "GGCC", 2, 2),
    enzyme("HgaI", "GACGC", 10, 15),
    enzyme("HhaI", "GCGC", 3, 1),
    enzyme("HindIII", "AAGCTT", 1, 5),
    enzyme("HinfI", "GANTC", 1, 4),
    enzyme("HpaI", "GTTAAC", 3, 3),
    enzyme("HpaII", "CCGG", 1, 3),
    enzyme("HphI", "GGTGA", 13, 12),
    enzyme("HpyCH4IV", "ACGT", 1, 3),
    enzyme("KpnI", "GGTACC", 5, 1),
    enzyme("MboI", "GATC", 0, 4),
    enzyme("MboII", "GAAGA", 13, 12),
    enzyme("MfeI", "CAATTG", 1, 5),
    enzyme("MluCI", "AATT", 0, 4),
    enzyme("MluI", "ACGCGT", 1, 5),
    enzyme("MlyI", "GAGTC", 10, 10),
    enzyme("MnlI", "CCTC", 11, 10),
    enzyme("MseI", "TTAA", 1, 3),
    enzyme("MspI", "CCGG", 1, 3),
    enzyme("NcoI", "CCATGG", 1, 5),
    enzyme("NdeI", "CATATG", 2, 4),
    enzyme("NheI", "GCTAGC", 1, 5),
    enzyme("NlaIII", "CATG", 4, 0),
    enzyme("NotI", "GCGGCCGC", 2, 6),
    enzyme("NruI", "TCGCGA", 3, 3),
    enzyme("NsiI", "ATGCAT", 5, 1),
    enzyme("NspI", "RCATGY", 5, 1),
    enzyme("PacI", "TTAATTAA", 5, 3),
    enzyme("PleI", "GAGTC", 9, 10),
    enzyme("PmeI", "GTTTAAAC", 4, 4),
    enzyme("PstI", "CTGCAG", 5, 1),
    enzyme("PvuI", "CGATCG", 4, 2),
    enzyme("PvuII", "CAGCTG", 3, 3),
    enzyme("RsaI", "GTAC", 2, 2),
    enzyme("SacI", "GAGCTC", 5, 1),
    enzyme("SacII", "CCGCGG", 4, 2),
    enzyme("SalI", "GTCGAC", 1, 5),
    enzyme("SapI", "GCTCTTC", 8, 11),
    enzyme("Sau3AI", "GATC", 0, 4),
    enzyme("SbfI", "CCTGCAGG", 6, 2),
    enzyme("ScaI", "AGTACT", 3, 3),
    enzyme("SfiI", "GGCCNNNNNGGCC", 8, 5),
    enzyme("SgrAI", "CRCCGGYG", 2, 6),
    enzyme("SmaI", "CCCGGG", 3, 3),
    enzyme("SpeI", "ACTAGT", 1, 5),
    enzyme("SphI", "GCATGC", 5, 1),
    enzyme("SspI", "AATATT", 3, 3),
    enzyme("StuI", "AGGCCT", 3, 3),
    enzyme("TaqI", "TCGA", 1, 3),
    enzyme("XbaI", "TCTAGA", 1, 5),
    enzyme("XhoI", "CTCGAG", 1, 5),
    enzyme("XmaI", "CCCGGG", 1, 5),
];

/// Resolve an enzyme by its exact name.
pub fn lookup(name: &str) -> Result<Enzyme> {
    if name.is_empty() {
        return Err(Error::MissingArgument("an enzyme with --enzyme"));
    }
    ENZYMES
        .iter()
        .find(|e| e.name == name)
        .copied()
        .ok_or_else(|| Error::UnknownEnzyme(name.to_string()))
}

impl Enzyme {
    pub fn is_palindromic(&self) -> bool {
        reverse_complement(self.site.as_bytes()) == self.site.as_bytes()
    }

    /// Find all cut positions of this enzyme in `seq`.
    ///
    /// Positions are 1-based and mark the first base after the cut on the forward
    /// strand. Overlapping sites are all reported. Non-palindromic sites are also
    /// searched on the reverse strand. Cuts that would fall before the first base
    /// or past the last base of the (linear) sequence are dropped. The result is
    /// sorted and contains no duplicates.
    pub fn search(&self, seq: &[u8]) -> Vec<usize> {
        let site = self.site.as_bytes();
        let n = site.len();
        let mut cuts = vec![];
        if seq.len() < n {
            return cuts;
        }

        let rc_site = if self.is_palindromic() {
            None
        } else {
            Some(reverse_complement(site))
        };

        for (i, window) in seq.windows(n).enumerate() {
            let i = i as isize;
            if site_matches(site, window) {
                cuts.extend(cut_position(i + self.cut, seq.len()));
            }
            if let Some(rc_site) = &rc_site {
                if site_matches(rc_site, window) {
                    cuts.extend(cut_position(
                        i + n as isize - self.cut_complement,
                        seq.len(),
                    ));
                }
            }
        }

        cuts.sort_unstable();
        cuts.dedup();
        cuts
    }
}

/// Turn a 0-based cut boundary into a 1-based position inside `[2, len]`.
fn cut_position(boundary: isize, len: usize) -> Option<usize> {
    let pos = boundary + 1;
    (pos >= 2 && pos <= len as isize).then_some(pos as usize)
}

/// REBASE-style notation: `G^AATTC`, or `GGTCTC(1/5)` when the cuts lie outside the site.
impl fmt::Display for Enzyme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.site.len() as isize;
        let inside = |c: isize| (0..=n).contains(&c);
        if inside(self.cut) && inside(self.cut_complement) {
            let (head, tail) = self.site.split_at(self.cut as usize);
            write!(f, "{head}^{tail}")
        } else {
            write!(
                f,
                "{}({}/{})",
                self.site,
                self.cut - n,
                self.cut_complement - n
            )
        }
    }
}

fn site_matches(site: &[u8], window: &[u8]) -> bool {
    site.iter()
        .zip(window)
        .all(|(&code, &base)| iupac_matches(code, base))
}

/// Check if a concrete base matches an IUPAC code. Ambiguous bases in the text never match.
fn iupac_matches(code: u8, base: u8) -> bool {
    let base = base.to_ascii_uppercase();
    match code {
        b'A' | b'C' | b'G' | b'T' => base == code,
        b'R' => matches!(base, b'A' | b'G'),
        b'Y' => matches!(base, b'C' | b'T'),
        b'M' => matches!(base, b'A' | b'C'),
        b'K' => matches!(base, b'G' | b'T'),
        b'S' => matches!(base, b'G' | b'C'),
        b'W' => matches!(base, b'A' | b'T'),
        b'H' => matches!(base, b'A' | b'C' | b'T'),
        b'B' => matches!(base, b'C' | b'G' | b'T'),
        b'V' => matches!(base, b'A' | b'C' | b'G'),
        b'D' => matches!(base, b'A' | b'G' | b'T'),
        b'N' => matches!(base, b'A' | b'C' | b'G' | b'T'),
        _ => false,
    }
}

fn complement(code: u8) -> u8 {
    match code {
        b'A' => b'T',
        b'T' => b'A',
        b'C' => b'G',
        b'G' => b'C',
        b'R' => b'Y',
        b'Y' => b'R',
        b'M' => b'K',
        b'K' => b'M',
        b'B' => b'V',
        b'V' => b'B',
        b'D' => b'H',
        b'H' => b'D',
        // S, W and N are their own complement.
        other => other,
    }
}

fn reverse_complement(site: &[u8]) -> Vec<u8> {
    site.iter().rev().map(|&c| complement(c)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn search(name: &str, seq: &str) -> Vec<usize> {
        lookup(name).unwrap().search(seq.as_bytes())
    }

    #[test]
    fn lookup_is_case_sensitive() {
        assert_eq!(lookup("EcoRI").unwrap().site, "GAATTC");
        assert!(matches!(lookup("ecori"), Err(Error::UnknownEnzyme(_))));
        assert!(matches!(lookup("NotAnEnzyme"), Err(Error::UnknownEnzyme(_))));
        assert!(matches!(lookup(""), Err(Error::MissingArgument(_))));
    }

    #[test]
    fn table_is_sorted_and_unique() {
        for pair in ENZYMES.windows(2) {
            assert!(pair[0].name < pair[1].name, "{} >= {}", pair[0].name, pair[1].name);
        }
    }

    #[test]
    fn palindromic_offsets_agree() {
        // For a palindromic site both strands must put the cut at the same place.
        for e in ENZYMES.iter().filter(|e| e.is_palindromic()) {
            assert_eq!(
                e.cut + e.cut_complement,
                e.site.len() as isize,
                "{}",
                e.name
            );
        }
    }

    #[test]
    fn ecori_cuts_after_g() {
        assert_eq!(search("EcoRI", "AAGAATTCAA"), vec![4]);
        assert_eq!(search("EcoRI", "aagaattcaa"), vec![4]);
        assert_eq!(search("EcoRI", "GAATTCAAAAGAATTC"), vec![2, 12]);
    }

    #[test]
    fn blunt_cutter() {
        assert_eq!(search("EcoRV", "CCGATATCCC"), vec![6]);
    }

    #[test]
    fn degenerate_sites() {
        assert_eq!(search("HinfI", "TTGACTCTT"), vec![4]);
        assert_eq!(search("HinfI", "TTGAGTCTTGATTCA"), vec![4, 11]);
        // N in the text does not satisfy N in the site.
        assert!(search("HinfI", "TTGANTCTT").is_empty());
    }

    #[test]
    fn type_iis_both_strands() {
        let fwd = format!("GGATG{}", "A".repeat(25));
        assert_eq!(search("FokI", &fwd), vec![15]);
        let rev = format!("{}CATCC{}", "A".repeat(20), "A".repeat(5));
        assert_eq!(search("FokI", &rev), vec![8]);
        // Cut would fall past the end of the sequence.
        let past_end = format!("{}GGATG", "A".repeat(25));
        assert!(search("FokI", &past_end).is_empty());
    }

    #[test]
    fn cut_before_first_base_is_dropped() {
        assert_eq!(search("DpnII", "GATCAAGATC"), vec![7]);
    }

    #[test]
    fn no_sites() {
        assert!(search("NotI", "ACGTACGTACGT").is_empty());
        assert!(search("NotI", "ACG").is_empty());
    }

    #[test]
    fn display_notation() {
        assert_eq!(lookup("EcoRI").unwrap().to_string(), "G^AATTC");
        assert_eq!(lookup("NlaIII").unwrap().to_string(), "CATG^");
        assert_eq!(lookup("BsaI").unwrap().to_string(), "GGTCTC(1/5)");
        assert_eq!(lookup("BsrI").unwrap().to_string(), "ACTGG(1/-1)");
    }
}
