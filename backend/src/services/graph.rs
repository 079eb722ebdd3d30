//! Weighted flight-graph construction.
//!
//! Raw traffic edges are collapsed into a directed adjacency map keyed by
//! upper-case airport code. Edge weight is the inverse of the traffic count
//! (`1 / max(1, count)`), so heavily trafficked connections are cheaper and
//! Dijkstra prefers them.

use std::collections::{BTreeSet, HashMap};

use crate::models::{normalize_code, FlightEdge};

/// Directed weighted flight graph.
///
/// Weights are always positive and finite. The graph is directed as loaded:
/// no reverse edge is ever added implicitly. The dataset models flights
/// unidirectionally, which is a known modeling limitation; symmetrizing here
/// would invent traffic that was never observed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RouteGraph {
    adjacency: HashMap<String, HashMap<String, f64>>,
}

impl RouteGraph {
    /// Out-neighbors of `code` with their edge weights.
    ///
    /// Codes that only ever appear as edge targets are valid sources too:
    /// they simply have no out-edges, so this yields nothing rather than
    /// failing.
    pub fn neighbors<'a>(&'a self, code: &str) -> impl Iterator<Item = (&'a str, f64)> + 'a {
        self.adjacency
            .get(code)
            .into_iter()
            .flat_map(|targets| targets.iter().map(|(t, w)| (t.as_str(), *w)))
    }

    /// Weight of the direct edge `source -> target`, if present.
    pub fn edge_weight(&self, source: &str, target: &str) -> Option<f64> {
        self.adjacency.get(source).and_then(|t| t.get(target)).copied()
    }

    /// Every code known to the graph: all sources plus all targets.
    ///
    /// Sorted for deterministic iteration.
    pub fn known_codes(&self) -> BTreeSet<&str> {
        let mut codes: BTreeSet<&str> = self.adjacency.keys().map(String::as_str).collect();
        for targets in self.adjacency.values() {
            codes.extend(targets.keys().map(String::as_str));
        }
        codes
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }
}

/// Build the route graph from raw traffic edges.
///
/// Counts below 1 (or missing in the raw data, loaded as 0) are coerced to
/// 1. When the same ordered pair appears more than once the minimum weight
/// wins, i.e. the row representing the highest observed traffic.
pub fn build_graph(edges: &[FlightEdge]) -> RouteGraph {
    let mut adjacency: HashMap<String, HashMap<String, f64>> = HashMap::new();

    for edge in edges {
        let source = normalize_code(&edge.source);
        let target = normalize_code(&edge.target);
        if source.is_empty() || target.is_empty() {
            continue;
        }

        let weight = 1.0 / edge.count.max(1) as f64;
        let slot = adjacency
            .entry(source)
            .or_default()
            .entry(target)
            .or_insert(f64::INFINITY);
        if weight < *slot {
            *slot = weight;
        }
    }

    RouteGraph { adjacency }
}
