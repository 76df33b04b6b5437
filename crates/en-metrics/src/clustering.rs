//! Clustering coefficients.

use en_graph::{Graph, NodeId};

/// Local clustering coefficient of one node: the fraction of its
/// neighbor pairs that are themselves connected. `None` for nodes of
/// degree < 2, which have no neighbor pairs to score.
pub fn local_clustering(g: &Graph, v: NodeId) -> Option<f64> {
    let neighbors: Vec<NodeId> = g.neighbors(v).collect();
    let k = neighbors.len();
    if k < 2 {
        return None;
    }

    let mut links = 0usize;
    for i in 0..k {
        for j in (i + 1)..k {
            if g.has_edge(neighbors[i], neighbors[j]) {
                links += 1;
            }
        }
    }

    let max_links = k * (k - 1) / 2;
    Some(links as f64 / max_links as f64)
}

/// Mean local clustering over qualifying nodes.
///
/// Nodes of degree < 2 are excluded from both the sum and the count.
/// Returns 0 when no node qualifies.
pub fn clustering_coefficient(g: &Graph) -> f64 {
    let mut total = 0.0;
    let mut counted = 0usize;
    for v in g.nodes() {
        if let Some(c) = local_clustering(g, v) {
            total += c;
            counted += 1;
        }
    }

    if counted == 0 {
        0.0
    } else {
        total / counted as f64
    }
}
