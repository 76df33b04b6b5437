//! Composite small-world metrics.

use en_graph::{erdos_renyi, Graph};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::clustering::clustering_coefficient;
use crate::paths::average_path_length;

/// Seed for the Erdős-Rényi comparison baseline. Fixed (not the caller's
/// generation seed) so the same input graph always scores against the
/// same baseline.
const BASELINE_SEED: u64 = 42;

/// Small-world analysis of a graph.
///
/// γ and λ normalize clustering and path length against an Erdős-Rényi
/// graph with the same node and edge counts; σ = γ/λ exceeds 1 for
/// small-world structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SmallWorldMetrics {
    #[serde(rename = "N")]
    pub n: usize,
    #[serde(rename = "M")]
    pub m: usize,
    /// Mean degree, 2M/N.
    pub k: f64,
    #[serde(rename = "C")]
    pub c: f64,
    #[serde(rename = "L")]
    pub l: f64,
    #[serde(rename = "C_random")]
    pub c_random: f64,
    #[serde(rename = "L_random")]
    pub l_random: f64,
    /// C / C_random.
    pub gamma: f64,
    /// L / L_random.
    pub lambda: f64,
    /// γ / λ; small-world when > 1.
    pub sigma: f64,
    pub is_small_world: bool,
    /// Theoretical small-world path length, log(N)/log(k).
    #[serde(rename = "L_expected_sw")]
    pub l_expected_sw: f64,
    #[serde(rename = "L_ratio")]
    pub l_ratio: f64,
    pub interpretation: String,
}

/// Compute the full small-world report for a graph.
///
/// Degenerate baselines (zero clustering or path length in the random
/// comparison graph) zero out γ, λ, and σ rather than erroring.
pub fn small_world_metrics(g: &Graph) -> SmallWorldMetrics {
    let n = g.node_count();
    let m = g.edge_count();
    let k = if n > 0 { 2.0 * m as f64 / n as f64 } else { 0.0 };

    let c = clustering_coefficient(g);
    let l = average_path_length(g);

    let g_random = erdos_renyi(n, m, Some(BASELINE_SEED));
    let c_random = clustering_coefficient(&g_random);
    let l_random = average_path_length(&g_random);

    let (gamma, lambda, sigma) = if c_random > 0.0 && l_random > 0.0 {
        let gamma = c / c_random;
        let lambda = l / l_random;
        let sigma = if lambda > 0.0 { gamma / lambda } else { 0.0 };
        (gamma, lambda, sigma)
    } else {
        (0.0, 0.0, 0.0)
    };

    let l_expected_sw = if k > 1.0 {
        (n as f64).ln() / k.ln()
    } else {
        n as f64
    };
    let l_ratio = if l_expected_sw > 0.0 {
        l / l_expected_sw
    } else {
        0.0
    };

    debug!(n, m, c, l, sigma, "computed small-world metrics");

    SmallWorldMetrics {
        n,
        m,
        k,
        c,
        l,
        c_random,
        l_random,
        gamma,
        lambda,
        sigma,
        is_small_world: sigma > 1.0,
        l_expected_sw,
        l_ratio,
        interpretation: interpret_metrics(c, l, sigma, l_expected_sw),
    }
}

/// Render the three-clause qualitative verdict for a metric set.
pub fn interpret_metrics(c: f64, l: f64, sigma: f64, l_expected: f64) -> String {
    let mut parts = Vec::with_capacity(3);

    if sigma > 1.0 {
        parts.push(format!("✓ Small-world (σ = {sigma:.2} > 1)"));
    } else {
        parts.push(format!("✗ Not small-world (σ = {sigma:.2} ≤ 1)"));
    }

    if c > 0.5 {
        parts.push(format!("✓ High clustering (C = {c:.3})"));
    } else if c > 0.1 {
        parts.push(format!("○ Moderate clustering (C = {c:.3})"));
    } else {
        parts.push(format!("✗ Low clustering (C = {c:.3})"));
    }

    let l_ratio = if l_expected > 0.0 {
        l / l_expected
    } else {
        f64::INFINITY
    };
    if l_ratio < 2.0 {
        parts.push(format!(
            "✓ Logarithmic scaling (L ≈ {l_ratio:.1} × log(N)/log(k))"
        ));
    } else {
        parts.push(format!(
            "✗ Non-logarithmic scaling (L = {l_ratio:.1} × log(N)/log(k))"
        ));
    }

    parts.join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn complete_graph(n: u32) -> Graph {
        let mut g = Graph::new();
        for u in 0..n {
            for v in (u + 1)..n {
                g.add_edge(u, v);
            }
        }
        g
    }

    #[test]
    fn complete_graph_matches_its_baseline() {
        // The Erdős-Rényi baseline with all possible edges is the same
        // complete graph, so every normalized ratio is exactly 1.
        let metrics = small_world_metrics(&complete_graph(5));
        assert_eq!(metrics.n, 5);
        assert_eq!(metrics.m, 10);
        assert_relative_eq!(metrics.k, 4.0);
        assert_relative_eq!(metrics.c, 1.0);
        assert_relative_eq!(metrics.l, 1.0);
        assert_relative_eq!(metrics.gamma, 1.0);
        assert_relative_eq!(metrics.lambda, 1.0);
        assert_relative_eq!(metrics.sigma, 1.0);
        assert!(!metrics.is_small_world);
    }

    #[test]
    fn empty_graph_is_all_sentinels() {
        let metrics = small_world_metrics(&Graph::new());
        assert_eq!(metrics.n, 0);
        assert_eq!(metrics.m, 0);
        assert_eq!(metrics.k, 0.0);
        assert_eq!(metrics.c, 0.0);
        assert_eq!(metrics.l, 0.0);
        assert_eq!(metrics.sigma, 0.0);
        assert_eq!(metrics.l_expected_sw, 0.0);
        assert!(!metrics.is_small_world);
    }

    #[test]
    fn low_mean_degree_falls_back_to_n() {
        // Single edge between two nodes: k = 1, log(k) undefined
        let mut g = Graph::new();
        g.add_edge(0, 1);
        let metrics = small_world_metrics(&g);
        assert_relative_eq!(metrics.k, 1.0);
        assert_relative_eq!(metrics.l_expected_sw, 2.0);
    }

    #[test]
    fn interpretation_clauses() {
        let text = interpret_metrics(0.6, 2.0, 2.5, 3.0);
        assert!(text.contains("✓ Small-world (σ = 2.50 > 1)"));
        assert!(text.contains("✓ High clustering (C = 0.600)"));
        assert!(text.contains("✓ Logarithmic scaling"));
        assert_eq!(text.matches("; ").count(), 2);

        let text = interpret_metrics(0.05, 9.0, 0.8, 3.0);
        assert!(text.contains("✗ Not small-world (σ = 0.80 ≤ 1)"));
        assert!(text.contains("✗ Low clustering"));
        assert!(text.contains("✗ Non-logarithmic scaling (L = 3.0"));

        let text = interpret_metrics(0.2, 2.0, 0.8, 3.0);
        assert!(text.contains("○ Moderate clustering (C = 0.200)"));
    }

    #[test]
    fn json_field_names() {
        let metrics = small_world_metrics(&complete_graph(4));
        let value = serde_json::to_value(&metrics).unwrap();
        for key in [
            "N",
            "M",
            "k",
            "C",
            "L",
            "C_random",
            "L_random",
            "gamma",
            "lambda",
            "sigma",
            "is_small_world",
            "L_expected_sw",
            "L_ratio",
            "interpretation",
        ] {
            assert!(value.get(key).is_some(), "missing key {key}");
        }
    }
}
