//! End-to-end small-world scenarios over generated graphs.

use approx::assert_relative_eq;
use en_graph::{ring_lattice, watts_strogatz};
use en_metrics::{clustering_coefficient, small_world_metrics};

#[test]
fn unrewired_watts_strogatz_scores_like_the_lattice() {
    // p = 0 applies no randomness, so the metrics are the deterministic
    // ring-lattice values regardless of seed.
    let lattice = ring_lattice(20, 4);
    let g = watts_strogatz(20, 4, 0.0, Some(1));

    let metrics = small_world_metrics(&g);
    assert_relative_eq!(metrics.c, clustering_coefficient(&lattice));
    assert_relative_eq!(metrics.c, 0.5);
    assert_eq!(metrics.n, 20);
    assert_eq!(metrics.m, 40);
    assert_relative_eq!(metrics.k, 4.0);
}

#[test]
fn canonical_watts_strogatz_regime_is_small_world() {
    // Lightly rewired lattice: clustering stays near the lattice value
    // while path length collapses toward the random baseline.
    let g = watts_strogatz(100, 6, 0.1, Some(7));
    let metrics = small_world_metrics(&g);

    assert_eq!(metrics.n, 100);
    assert!(metrics.m <= 300);
    assert!(metrics.c > 0.2, "C = {}", metrics.c);
    assert!(metrics.c < 0.8, "C = {}", metrics.c);
    assert!(metrics.l.is_finite());
    assert!(metrics.sigma > 1.0, "sigma = {}", metrics.sigma);
    assert!(metrics.is_small_world);
    assert!(metrics.interpretation.contains("Small-world"));
}

#[test]
fn heavily_rewired_lattice_loses_clustering() {
    let lattice_c = clustering_coefficient(&ring_lattice(100, 6));
    let g = watts_strogatz(100, 6, 1.0, Some(11));
    let c = clustering_coefficient(&g);
    assert!(
        c < lattice_c,
        "full rewiring should shed clustering: {c} >= {lattice_c}"
    );
}

#[test]
fn baseline_seed_is_fixed() {
    // Two calls over the same graph must agree exactly, including the
    // random-baseline terms.
    let g = watts_strogatz(60, 4, 0.2, Some(3));
    let a = small_world_metrics(&g);
    let b = small_world_metrics(&g);
    assert_eq!(a.c_random, b.c_random);
    assert_eq!(a.l_random, b.l_random);
    assert_eq!(a.sigma, b.sigma);
}
