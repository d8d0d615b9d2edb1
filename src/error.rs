use std::fmt;

/** Structural errors detected while building a graph.
A graph that raises one of these would either be miscolored or impossible to color,
so the instance is never built.
*/
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GraphError {
    /// a neighbor label is not a key of the adjacency mapping
    UnknownVertex {
        /// vertex listing the neighbor
        vertex: String,
        /// label that could not be resolved
        neighbor: String,
    },
    /// a vertex lists itself as a neighbor (it could never be colored)
    SelfLoop {
        /// the vertex with a self-loop
        vertex: String,
    },
    /// a neighbor index is not in 0..n
    NeighborOutOfRange {
        /// vertex listing the neighbor
        vertex: usize,
        /// invalid neighbor index
        neighbor: usize,
        /// number of vertices
        n: usize,
    },
    /// an edge endpoint is not in 0..n
    VertexOutOfRange {
        /// invalid vertex index
        vertex: usize,
        /// number of vertices
        n: usize,
    },
    /// a line of an instance file could not be parsed
    Parse {
        /// line number (starts at 1)
        line: usize,
        /// reason
        reason: String,
    },
    /// I/O error (file not found, etc.)
    Io(String),
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GraphError::UnknownVertex { vertex, neighbor } => write!(
                f, "vertex {} lists neighbor {} which is not a vertex of the graph", vertex, neighbor
            ),
            GraphError::SelfLoop { vertex } => write!(
                f, "vertex {} is adjacent to itself (self-loops cannot be colored)", vertex
            ),
            GraphError::NeighborOutOfRange { vertex, neighbor, n } => write!(
                f, "vertex {} lists neighbor {} but the graph has {} vertices", vertex, neighbor, n
            ),
            GraphError::VertexOutOfRange { vertex, n } => write!(
                f, "edge endpoint {} is not a vertex (the graph has {} vertices)", vertex, n
            ),
            GraphError::Parse { line, reason } => write!(f, "line {}: {}", line, reason),
            GraphError::Io(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for GraphError {}

impl From<std::io::Error> for GraphError {
    fn from(e: std::io::Error) -> Self { GraphError::Io(e.to_string()) }
}
