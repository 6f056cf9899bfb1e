use std::fmt::Display;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use num_traits::Float;

use crate::errors::ParserError;
use crate::graph::{EdgeElement, Position, VertexElement};


/// Line-oriented graph file writer, the output side of GraphFileReader
///
/// Sections are emitted with a comment header and a trailing blank line
/// so the reader can take them back apart
pub struct GraphFileWriter<W: Write> {
    out: W,
}

impl GraphFileWriter<BufWriter<File>> {
    /// Create or truncate the file at the given path
    pub fn create(path: impl AsRef<Path>) -> Result<Self, ParserError> {
        let file = File::create(path)?;
        Ok(Self::new(BufWriter::new(file)))
    }
}

impl<W: Write> GraphFileWriter<W> {

    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn write_start_end(
        &mut self,
        start_end: (Position, Position),
    ) -> Result<(), ParserError> {
        writeln!(self.out, "# Start and end vertices")?;
        writeln!(self.out, "{} {}", start_end.0, start_end.1)?;
        writeln!(self.out)?;
        Ok(())
    }

    pub fn write_vertices<T>(
        &mut self,
        vertices: &[VertexElement<T>],
    ) -> Result<(), ParserError>
    where
        T: Float + Display,
    {
        writeln!(self.out, "# Vertices")?;
        for &(position, x, y) in vertices {
            writeln!(self.out, "{position} {x} {y}")?;
        }
        writeln!(self.out)?;
        Ok(())
    }

    /// Write an edge block under a human-readable section label,
    /// e.g. "A*" or "Dijkstra"
    pub fn write_edges(&mut self, edges: &[EdgeElement], name: &str) -> Result<(), ParserError> {
        writeln!(self.out, "# {name} edges")?;
        for &(source, destination, cost) in edges {
            writeln!(self.out, "{source} {destination} {cost}")?;
        }
        writeln!(self.out)?;
        Ok(())
    }

    /// Write the cost and distance summary for one computed path
    pub fn write_cost_distance<T: Display>(
        &mut self,
        cost: f64,
        distance: T,
    ) -> Result<(), ParserError> {
        writeln!(self.out, "# Cost and distance")?;
        writeln!(self.out, "{cost} {distance}")?;
        writeln!(self.out)?;
        Ok(())
    }

    /// Flush buffered output to the underlying sink
    pub fn flush(&mut self) -> Result<(), ParserError> {
        self.out.flush()?;
        Ok(())
    }
}
