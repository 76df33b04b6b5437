//! Graph generators: ring lattice, Watts-Strogatz, Erdős-Rényi.
//!
//! All three are deterministic for a fixed seed: the RNG is created once
//! per call and consumed in a fixed order. `None` seeds draw from OS
//! entropy.

use rand::rngs::StdRng;
use rand::seq::{IndexedRandom, SliceRandom};
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::graph::{Graph, NodeId};

fn rng_for(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    }
}

/// Ring lattice: n nodes on a ring, each joined to the k/2 nearest
/// neighbors on each side.
///
/// Odd k truncates via integer division, so every node ends up with
/// degree `2 * (k / 2)` (barring collisions when n is small).
pub fn ring_lattice(n: usize, k: usize) -> Graph {
    let mut g = Graph::new();
    for i in 0..n {
        g.add_node(i as NodeId);
    }
    if n == 0 {
        return g;
    }

    for i in 0..n {
        for j in 1..=k / 2 {
            let forward = ((i + j) % n) as NodeId;
            let backward = ((i + n - j % n) % n) as NodeId;
            g.add_edge(i as NodeId, forward);
            g.add_edge(i as NodeId, backward);
        }
    }
    g
}

/// Watts-Strogatz small-world graph.
///
/// Builds the (n, k) ring lattice, then visits each forward lattice edge
/// `(i, i+j)` and, with probability p, removes it and reconnects `i` to a
/// uniformly chosen node that is neither `i` nor already a neighbor of
/// `i`. When no such candidate exists the edge is dropped without
/// replacement, so the edge count can shrink slightly at high p.
pub fn watts_strogatz(n: usize, k: usize, p: f64, seed: Option<u64>) -> Graph {
    let mut rng = rng_for(seed);
    let mut g = ring_lattice(n, k);
    if n == 0 {
        return g;
    }

    for i in 0..n {
        for j in 1..=k / 2 {
            if rng.random::<f64>() < p {
                let old_target = ((i + j) % n) as NodeId;
                g.remove_edge(i as NodeId, old_target);

                let candidates: Vec<NodeId> = (0..n as NodeId)
                    .filter(|&x| x != i as NodeId && !g.has_edge(i as NodeId, x))
                    .collect();
                if let Some(&new_target) = candidates.choose(&mut rng) {
                    g.add_edge(i as NodeId, new_target);
                }
            }
        }
    }

    debug!(
        n,
        k,
        p,
        edges = g.edge_count(),
        "generated Watts-Strogatz graph"
    );
    g
}

/// Erdős-Rényi random graph with n nodes and m edges, drawn uniformly
/// without replacement from all possible pairs.
///
/// Used as the comparison baseline for the small-world coefficient; m is
/// capped at the number of possible pairs.
pub fn erdos_renyi(n: usize, m: usize, seed: Option<u64>) -> Graph {
    let mut rng = rng_for(seed);
    let mut g = Graph::new();
    for i in 0..n {
        g.add_node(i as NodeId);
    }

    let mut possible: Vec<(NodeId, NodeId)> = (0..n)
        .flat_map(|i| ((i + 1)..n).map(move |j| (i as NodeId, j as NodeId)))
        .collect();
    possible.shuffle(&mut rng);

    for &(u, v) in possible.iter().take(m) {
        g.add_edge(u, v);
    }

    debug!(n, m = g.edge_count(), "generated Erdős-Rényi graph");
    g
}
