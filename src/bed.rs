//! BED-like output: `contig, start, end, length, cpg`, tab separated, no header.

use std::io::{self, Write};

use crate::fragment::Fragment;

/// Writes fragments to any sink, typically a file or stdout.
pub struct BedWriter<W: Write> {
    sink: W,
}

impl<W: Write> BedWriter<W> {
    pub fn new(sink: W) -> Self {
        Self { sink }
    }

    pub fn write_fragment(&mut self, fragment: &Fragment) -> io::Result<()> {
        writeln!(
            self.sink,
            "{}\t{}\t{}\t{}\t{}",
            fragment.contig, fragment.start, fragment.end, fragment.length, fragment.cpg
        )
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.sink.flush()
    }

    /// Flush and hand back the sink. Dropping a file sink closes it.
    pub fn finish(mut self) -> io::Result<W> {
        self.sink.flush()?;
        Ok(self.sink)
    }
}
