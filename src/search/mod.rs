//! Coloring algorithms.

/// greedy DSATUR algorithm
pub mod dsatur;

/// Maximum Cardinality Search ordering and coloring
pub mod mcs;

/// least-constraining / most-constrained eXtended RLF (lmXRLF)
pub mod lmxrlf;

/// TABUCOL implementation (tabu search with a fixed number of colors)
pub mod tabucol;

/// constructive algorithm followed by TABUCOL to remove colors
pub mod hybrid;
