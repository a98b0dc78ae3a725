use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use flate2::Compression;
use flate2::write::GzEncoder;

use pscurve_scaling::{
    BinEdges, ContactProbability, HistogramKind, PossibleHistogram, ProbabilityTable,
};

use crate::error::Result;

///
/// Write one line per bin: `probability left_edge observed possible`.
///
pub fn write_probability_table<W: Write>(table: &ProbabilityTable, writer: &mut W) -> Result<()> {
    for bin in table.iter() {
        writeln!(
            writer,
            "{} {} {} {}",
            bin.probability, bin.left_edge, bin.observed, bin.possible
        )?;
    }
    Ok(())
}

///
/// Write one line per bin: `left_edge inner outer left right`, the
/// normalized probability of each orientation class.
///
pub fn write_orientation_table<W: Write>(
    result: &ContactProbability,
    writer: &mut W,
) -> Result<()> {
    let split = [
        HistogramKind::Inner,
        HistogramKind::Outer,
        HistogramKind::Left,
        HistogramKind::Right,
    ]
    .map(|kind| result.table(kind).probabilities());

    for (bin, left_edge) in result.edges.left_edges().iter().enumerate() {
        writeln!(
            writer,
            "{} {} {} {} {}",
            left_edge, split[0][bin], split[1][bin], split[2][bin], split[3][bin]
        )?;
    }
    Ok(())
}

///
/// Write one line per bin: `left_edge possible`.
///
pub fn write_possible_table<W: Write>(
    edges: &BinEdges,
    possible: &PossibleHistogram,
    writer: &mut W,
) -> Result<()> {
    for (left_edge, count) in edges.left_edges().iter().zip(possible.counts()) {
        writeln!(writer, "{} {}", left_edge, count)?;
    }
    Ok(())
}

///
/// A plain or gzip file writer.
///
/// Call [`OutputWriter::finish`] when done: it flushes the buffer and, for
/// gzip, writes the trailer, returning any error instead of losing it on drop.
///
pub enum OutputWriter {
    Plain(BufWriter<File>),
    Gzip(GzEncoder<BufWriter<File>>),
}

impl OutputWriter {
    pub fn finish(self) -> Result<()> {
        match self {
            OutputWriter::Plain(mut writer) => writer.flush()?,
            OutputWriter::Gzip(encoder) => encoder.finish()?.flush()?,
        }
        Ok(())
    }
}

impl Write for OutputWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        match self {
            OutputWriter::Plain(writer) => writer.write(buf),
            OutputWriter::Gzip(encoder) => encoder.write(buf),
        }
    }

    fn flush(&mut self) -> std::io::Result<()> {
        match self {
            OutputWriter::Plain(writer) => writer.flush(),
            OutputWriter::Gzip(encoder) => encoder.flush(),
        }
    }
}

///
/// Create a file for writing, creating parent directories as needed.
///
/// # Arguments
/// - path: the path of the file
/// - gzip: compress the output
pub fn create_output<T: AsRef<Path>>(path: T, gzip: bool) -> Result<OutputWriter> {
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let file = BufWriter::new(File::create(path)?);
    let writer = match gzip {
        true => OutputWriter::Gzip(GzEncoder::new(file, Compression::default())),
        false => OutputWriter::Plain(file),
    };

    Ok(writer)
}

pub trait ReportWrite {
    ///
    /// Write the per-bin table to disk
    ///
    /// # Arguments
    /// - path: the path to the file to dump to
    fn write_report<T: AsRef<Path>>(&self, path: T) -> Result<()>;

    ///
    /// Write the per-bin table to disk as a gzip file
    ///
    /// # Arguments
    /// - path: the path to the file to dump to
    fn write_report_gz<T: AsRef<Path>>(&self, path: T) -> Result<()>;
}

fn write_table<T: AsRef<Path>>(table: &ProbabilityTable, path: T, gzip: bool) -> Result<()> {
    let mut writer = create_output(path, gzip)?;
    write_probability_table(table, &mut writer)?;
    writer.finish()
}

impl ReportWrite for ProbabilityTable {
    fn write_report<T: AsRef<Path>>(&self, path: T) -> Result<()> {
        write_table(self, path, false)
    }

    fn write_report_gz<T: AsRef<Path>>(&self, path: T) -> Result<()> {
        write_table(self, path, true)
    }
}
