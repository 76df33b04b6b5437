//! en-metrics: small-world network metrics.
//!
//! Derived values over a read-only [`en_graph::Graph`]:
//! - BFS shortest paths and the ordered-pair average path length
//! - local and mean clustering coefficients
//! - the composite Watts-Strogatz small-world report
//!   ([`SmallWorldMetrics`]) with its qualitative interpretation
//!
//! Edge cases return sentinels instead of erroring: graphs with fewer
//! than 2 nodes have path length 0, fully disconnected graphs have
//! infinite path length, and nodes of degree < 2 are excluded from the
//! clustering mean.

pub mod clustering;
pub mod paths;
pub mod smallworld;

// Re-exports
pub use clustering::{clustering_coefficient, local_clustering};
pub use paths::{average_path_length, shortest_path_lengths};
pub use smallworld::{interpret_metrics, small_world_metrics, SmallWorldMetrics};
