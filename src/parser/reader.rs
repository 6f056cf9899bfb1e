use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::str::FromStr;

use num_traits::Float;

use crate::errors::ParserError;
use crate::graph::{EdgeElement, Position, VertexElement};


/// Which blank-line separated section the parser is inside
enum Section {
    StartEnd,
    Vertices,
    Edges,
}

/// Line-oriented graph file loader
///
/// Files carry three blank-line separated sections: a single
/// `start end` line, one `position x y` line per vertex, and one
/// `source destination cost` line per edge. Lines starting with '#' and
/// leading blank lines are skipped. The edge section ends at the first
/// blank line after at least one edge, so trailing summary sections are
/// tolerated.
pub struct GraphFileReader<T> {
    start_end: (Position, Position),
    vertices: Vec<VertexElement<T>>,
    edges: Vec<EdgeElement>,
}

impl<T: Float + FromStr> GraphFileReader<T> {

    /// Open and eagerly parse a graph file
    pub fn open(path: impl AsRef<Path>) -> Result<Self, ParserError> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Parse graph data from any buffered reader
    pub fn from_reader(reader: impl BufRead) -> Result<Self, ParserError> {
        let mut start_end = None;
        let mut vertices: Vec<VertexElement<T>> = Vec::new();
        let mut edges: Vec<EdgeElement> = Vec::new();
        let mut section = Section::StartEnd;

        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            let line_number = index + 1;
            let trimmed = line.trim();

            if trimmed.is_empty() {
                // A blank line closes the current section once it holds data
                match section {
                    Section::Vertices if !vertices.is_empty() => section = Section::Edges,
                    Section::Edges if !edges.is_empty() => break,
                    _ => {}
                }
                continue;
            }
            if trimmed.starts_with('#') {
                continue;
            }

            let mut fields = trimmed.split_whitespace();
            match section {
                Section::StartEnd => {
                    let start = parse_field(fields.next(), line_number)?;
                    let end = parse_field(fields.next(), line_number)?;
                    start_end = Some((start, end));
                    section = Section::Vertices;
                }
                Section::Vertices => {
                    let position = parse_field(fields.next(), line_number)?;
                    let x = parse_field(fields.next(), line_number)?;
                    let y = parse_field(fields.next(), line_number)?;
                    vertices.push((position, x, y));
                }
                Section::Edges => {
                    let source = parse_field(fields.next(), line_number)?;
                    let destination = parse_field(fields.next(), line_number)?;
                    let cost = parse_field(fields.next(), line_number)?;
                    edges.push((source, destination, cost));
                }
            }
        }

        let start_end = start_end.ok_or(ParserError::MissingSection("start/end"))?;
        log::debug!(
            "loaded {} vertices and {} edges",
            vertices.len(),
            edges.len()
        );
        Ok(Self { start_end, vertices, edges })
    }

    pub fn get_start_end(&self) -> (Position, Position) {
        self.start_end
    }

    pub fn get_vertices(&self) -> &[VertexElement<T>] {
        &self.vertices
    }

    pub fn get_edges(&self) -> &[EdgeElement] {
        &self.edges
    }

    /// Consume the reader, yielding (start_end, vertices, edges)
    pub fn into_parts(
        self,
    ) -> ((Position, Position), Vec<VertexElement<T>>, Vec<EdgeElement>) {
        (self.start_end, self.vertices, self.edges)
    }
}

/// Parse one whitespace-separated field, reporting the 1-based line on failure
fn parse_field<V: FromStr>(field: Option<&str>, line: usize) -> Result<V, ParserError> {
    field
        .and_then(|token| token.parse().ok())
        .ok_or(ParserError::Malformed { line })
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Graph;
    use crate::graph_algos::compute_dijkstra;
    use crate::parser::GraphFileWriter;

    const SAMPLE: &str = "\
# Start and end vertices
0 3

# Vertices
0 0 0
1 1 0
2 1 1
3 0 1

# edges
0 1 1
1 2 1
2 3 1
0 3 5
";

    #[test]
    fn test_reads_all_sections() {
        let reader: GraphFileReader<f64> =
            GraphFileReader::from_reader(SAMPLE.as_bytes()).unwrap();
        assert_eq!(reader.get_start_end(), (0, 3));
        assert_eq!(reader.get_vertices().len(), 4);
        assert_eq!(reader.get_vertices()[2], (2, 1.0, 1.0));
        assert_eq!(reader.get_edges().len(), 4);
        assert_eq!(reader.get_edges()[3], (0, 3, 5.0));
    }

    #[test]
    fn test_comments_and_blank_lines_are_skipped() {
        let input = "\
# a comment

# another comment
4 7

# Vertices
4 0.5 0.5
7 2 2

4 7 -1
";
        let reader: GraphFileReader<f64> =
            GraphFileReader::from_reader(input.as_bytes()).unwrap();
        assert_eq!(reader.get_start_end(), (4, 7));
        assert_eq!(reader.get_vertices(), &[(4, 0.5, 0.5), (7, 2.0, 2.0)]);
        assert_eq!(reader.get_edges(), &[(4, 7, -1.0)]);
    }

    #[test]
    fn test_trailing_summary_is_tolerated() {
        let input = format!("{SAMPLE}\n# Cost and distance\n3 3\n");
        let reader: GraphFileReader<f64> =
            GraphFileReader::from_reader(input.as_bytes()).unwrap();
        assert_eq!(reader.get_edges().len(), 4);
    }

    #[test]
    fn test_malformed_line_reports_line_number() {
        let input = "\
0 3

0 zero 0
";
        let result: Result<GraphFileReader<f64>, _> =
            GraphFileReader::from_reader(input.as_bytes());
        assert!(matches!(result, Err(ParserError::Malformed { line: 3 })));
    }

    #[test]
    fn test_empty_input_is_missing_start_end() {
        let result: Result<GraphFileReader<f64>, _> =
            GraphFileReader::from_reader("# nothing here\n".as_bytes());
        assert!(matches!(result, Err(ParserError::MissingSection(_))));
    }

    #[test]
    fn test_open_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.txt");
        let result: Result<GraphFileReader<f64>, _> = GraphFileReader::open(&missing);
        assert!(matches!(result, Err(ParserError::Io(_))));
    }

    #[test]
    fn test_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mesh.txt");

        let vertices: Vec<VertexElement<f64>> =
            vec![(0, 0.0, 0.0), (1, 1.0, 0.0), (2, 1.0, 1.0), (3, 0.0, 1.0)];
        let edges: Vec<EdgeElement> =
            vec![(0, 1, 1.0), (1, 2, 1.0), (2, 3, 1.0), (0, 3, 5.0)];

        let mut writer = GraphFileWriter::create(&path).unwrap();
        writer.write_start_end((0, 3)).unwrap();
        writer.write_vertices(&vertices).unwrap();
        writer.write_edges(&edges, "mesh").unwrap();
        writer.write_cost_distance(3.0, 3.0).unwrap();
        writer.flush().unwrap();

        let reader: GraphFileReader<f64> = GraphFileReader::open(&path).unwrap();
        assert_eq!(reader.get_start_end(), (0, 3));
        assert_eq!(reader.get_vertices(), vertices.as_slice());
        assert_eq!(reader.get_edges(), edges.as_slice());
    }

    #[test]
    fn test_loaded_graph_solves() {
        let reader: GraphFileReader<f64> =
            GraphFileReader::from_reader(SAMPLE.as_bytes()).unwrap();
        let (start_end, vertices, edges) = reader.into_parts();
        let mut graph = Graph::from_elements(&vertices, &edges).unwrap();
        let path = compute_dijkstra(&mut graph, start_end.0, start_end.1).unwrap();
        assert_eq!(path, vec![0, 1, 2, 3]);
    }
}
