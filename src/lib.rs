//! Heuristic vertex coloring of undirected graphs (DSATUR, MCS, lmXRLF, TabuCol and hybrids)

// #![warn(clippy::all, clippy::pedantic)]
// useful additional warnings if docs are missing, or crates imported but unused, etc.
#![warn(missing_debug_implementations)]
#![warn(missing_docs)]
#![warn(trivial_casts, trivial_numeric_casts)]
#![warn(unsafe_code)]
#![warn(unused_extern_crates)]
#![warn(variant_size_differences)]

// not sure if already by default in clippy
#![warn(clippy::similar_names)]
#![warn(clippy::shadow_unrelated)]
#![warn(clippy::shadow_same)]
#![warn(clippy::shadow_reuse)]


/// structural errors on input graphs
pub mod error;

/// coloring instance base trait, coloring algorithm trait, solutions and checker
pub mod color;

/// compact instance (adjacency lists over vertex indices)
pub mod compact_instance;

/// graphs with caller-defined vertex labels
pub mod labelled_graph;

/// read DIMACS formats
pub mod dimacs;

/// helper and utility methods for executables
pub mod util;

/// coloring algorithms
pub mod search;

#[cfg(test)]
mod test_graphs;

pub use color::{ColoringInstance, Colors, GraphColor, Solution, VertexId};
pub use compact_instance::CompactInstance;
pub use error::GraphError;
pub use labelled_graph::LabelledGraph;
pub use search::dsatur::Dsatur;
pub use search::hybrid::{Hybrid, HybridDsatur, HybridLmxrlf};
pub use search::lmxrlf::Lmxrlf;
pub use search::mcs::Mcs;
pub use search::tabucol::{Tabucol, TabucolParams};
