//! Shortest-path metrics.

use std::collections::{BTreeMap, VecDeque};

use en_graph::{Graph, NodeId};
use rayon::prelude::*;

/// Hop distance from `source` to every reachable node (source included
/// at distance 0). Unreachable nodes are absent from the result.
pub fn shortest_path_lengths(g: &Graph, source: NodeId) -> BTreeMap<NodeId, u32> {
    let mut dist = BTreeMap::new();
    dist.insert(source, 0);
    let mut queue = VecDeque::from([source]);

    while let Some(u) = queue.pop_front() {
        let d = dist[&u];
        for v in g.neighbors(u) {
            if !dist.contains_key(&v) {
                dist.insert(v, d + 1);
                queue.push_back(v);
            }
        }
    }

    dist
}

/// Mean shortest-path length over all ordered reachable pairs.
///
/// Each connected pair is counted once per BFS source, so (u, v) and
/// (v, u) both contribute; numerator and denominator double together and
/// the mean is unaffected. Returns 0 for graphs with fewer than 2 nodes
/// and infinity when no pair is connected.
pub fn average_path_length(g: &Graph) -> f64 {
    let nodes: Vec<NodeId> = g.nodes().collect();
    if nodes.len() < 2 {
        return 0.0;
    }

    let (total, count) = nodes
        .par_iter()
        .map(|&source| {
            let dist = shortest_path_lengths(g, source);
            let mut total = 0u64;
            let mut count = 0u64;
            for (&target, &d) in &dist {
                if target != source {
                    total += u64::from(d);
                    count += 1;
                }
            }
            (total, count)
        })
        .reduce(|| (0, 0), |a, b| (a.0 + b.0, a.1 + b.1));

    if count > 0 {
        total as f64 / count as f64
    } else {
        f64::INFINITY
    }
}
