//! en-graph: undirected graph layer for energetics.
//!
//! Provides:
//! - `Graph`: an adjacency-set container for simple undirected graphs
//! - Generators: ring lattice, Watts-Strogatz rewiring, Erdős-Rényi
//! - An edge-list CSV loader
//!
//! Generators are deterministic for a given seed and rand version; exact
//! edge sets are not reproducible across PRNG algorithms, so tests should
//! assert structural properties when seeds cross implementations.
//!
//! # Example
//!
//! ```
//! use en_graph::generate::watts_strogatz;
//!
//! let g = watts_strogatz(100, 6, 0.1, Some(7));
//! assert_eq!(g.node_count(), 100);
//! assert!(g.edge_count() <= 300);
//! ```

pub mod edgelist;
pub mod error;
pub mod generate;
pub mod graph;

// Re-exports for ergonomics
pub use edgelist::load_edge_list;
pub use error::{GraphError, GraphResult};
pub use generate::{erdos_renyi, ring_lattice, watts_strogatz};
pub use graph::{Graph, NodeId};
