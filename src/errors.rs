use std::fmt;
use std::io;

use crate::graph::Position;


/// Errors raised by graph construction, queries and solvers
#[derive(Debug)]
pub enum GraphError {
    VertexNotFound(Position), // No vertex stored at the requested position
    InvalidEdge { source: Position, destination: Position }, // Edge references a missing vertex
    EmptyGraph, // Operation needs at least one vertex
    KdTreeError(String),
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GraphError::VertexNotFound(position) => {
                write!(f, "no vertex at position {position}")
            }
            GraphError::InvalidEdge { source, destination } => {
                write!(f, "edge {source} -> {destination} references a missing vertex")
            }
            GraphError::EmptyGraph => write!(f, "graph has no vertices"),
            GraphError::KdTreeError(msg) => write!(f, "kd-tree error: {msg}"),
        }
    }
}

impl std::error::Error for GraphError {}

impl From<kdtree::ErrorKind> for GraphError {
    fn from(error: kdtree::ErrorKind) -> Self {
        GraphError::KdTreeError(error.to_string())
    }
}


/// Errors raised while reading or writing graph files
#[derive(Debug)]
pub enum ParserError {
    Io(io::Error),
    Malformed { line: usize }, // 1-based line number of the offending line
    MissingSection(&'static str), // Input ended before the named section
}

impl fmt::Display for ParserError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParserError::Io(error) => write!(f, "i/o error: {error}"),
            ParserError::Malformed { line } => write!(f, "malformed line {line}"),
            ParserError::MissingSection(name) => {
                write!(f, "input ended before the {name} section")
            }
        }
    }
}

impl std::error::Error for ParserError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ParserError::Io(error) => Some(error),
            _ => None,
        }
    }
}

impl From<io::Error> for ParserError {
    fn from(error: io::Error) -> Self {
        ParserError::Io(error)
    }
}
