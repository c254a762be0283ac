use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
};

use vdigest::{BedWriter, Error, FastaSource, NoCuts, Result, digest_records, enzyme};

/// Make a BED file of the restriction fragments from a virtual digest with one enzyme.
///
/// Each fragment line is followed by its length and CpG count. Record names are
/// printed to stderr as they are processed.
#[derive(clap::Parser)]
#[command(author, version, about)]
pub struct DigestArgs {
    /// FASTA file containing the sequences to digest. May be gzipped.
    #[arg(long)]
    fasta: Option<PathBuf>,

    /// Enzyme name, case sensitive (e.g. MspI or EcoRI).
    #[arg(long)]
    enzyme: Option<String>,

    /// BED file to create, otherwise stdout.
    ///
    /// - for explicit stdout.
    #[arg(long)]
    bed: Option<PathBuf>,

    /// What to do with records that contain no site of the enzyme.
    #[arg(long, default_value_t = NoCuts::Skip, value_enum)]
    no_cuts: NoCuts,

    /// Print the known enzymes with their cut sites and exit.
    #[arg(long)]
    list_enzymes: bool,
}

impl DigestArgs {
    pub fn run(self) -> Result<()> {
        if self.list_enzymes {
            return list_enzymes();
        }

        // Validate everything before the output file is created.
        let name = self
            .enzyme
            .as_deref()
            .ok_or(Error::MissingArgument("an enzyme with --enzyme"))?;
        let fasta = self
            .fasta
            .as_deref()
            .ok_or(Error::MissingArgument("a FASTA file with --fasta"))?;
        let enzyme = enzyme::lookup(name)?;
        let records = FastaSource::open(fasta)?;
        log::info!("digesting {} with {} ({enzyme})", fasta.display(), enzyme.name);

        let mut out = BedWriter::new(self.open_sink()?);
        digest_records(&enzyme, records, &mut out, self.no_cuts)?;
        out.finish()?;
        Ok(())
    }

    fn open_sink(&self) -> Result<Box<dyn Write>> {
        let writer = match &self.bed {
            Some(path) if path != Path::new("-") => {
                Box::new(BufWriter::new(File::create(path)?)) as Box<dyn Write>
            }
            _ => Box::new(BufWriter::new(io::stdout().lock())) as Box<dyn Write>,
        };
        Ok(writer)
    }
}

fn list_enzymes() -> Result<()> {
    let mut stdout = io::stdout().lock();
    for enzyme in enzyme::ENZYMES {
        writeln!(stdout, "{}\t{}", enzyme.name, enzyme)?;
    }
    Ok(())
}
