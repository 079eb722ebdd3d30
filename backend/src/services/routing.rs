//! Shortest-path search over the route graph.
//!
//! Classic single-source Dijkstra. Weights derive from `1/count` so they are
//! always positive, which is the only precondition Dijkstra needs. The
//! frontier is a binary heap rather than the linear scan a naive rendition
//! would use; that changes nothing observable since ties are broken
//! deterministically by airport code.

use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, HashMap};

use super::graph::RouteGraph;

/// A path through the graph with its accumulated edge-weight cost.
///
/// `cost` is `f64::INFINITY` (and `path` empty) when no route exists. Cost
/// is the sum of edge weights along the path, not the hop count.
#[derive(Debug, Clone, PartialEq)]
pub struct PathResult {
    pub path: Vec<String>,
    pub cost: f64,
}

impl PathResult {
    /// The "no route" result.
    pub fn unreachable() -> Self {
        Self {
            path: Vec::new(),
            cost: f64::INFINITY,
        }
    }

    pub fn is_reachable(&self) -> bool {
        self.cost.is_finite()
    }
}

/// Heap entry ordered by (cost, code) so the cheapest frontier node pops
/// first and equal-cost ties resolve lexicographically.
#[derive(Debug, Clone)]
struct FrontierEntry {
    cost: f64,
    code: String,
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FrontierEntry {}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cost
            .total_cmp(&other.cost)
            .then_with(|| self.code.cmp(&other.code))
    }
}

/// Dijkstra shortest path from `start` to `goal`.
///
/// Both codes must already be normalized (upper-case). Returns
/// `{[start], 0}` when `start == goal`, and [`PathResult::unreachable`] when
/// no predecessor chain connects the two.
pub fn shortest_path(graph: &RouteGraph, start: &str, goal: &str) -> PathResult {
    if start == goal {
        return PathResult {
            path: vec![start.to_string()],
            cost: 0.0,
        };
    }

    // Tentative distances for every known node; nodes appearing only as
    // targets are included so they can be settled and reconstructed.
    let mut dist: HashMap<&str, f64> = graph
        .known_codes()
        .into_iter()
        .map(|code| (code, f64::INFINITY))
        .collect();
    if !dist.contains_key(start) {
        // Start is not in the graph at all; nothing is reachable from it.
        return PathResult::unreachable();
    }
    dist.insert(start, 0.0);

    let mut prev: HashMap<&str, &str> = HashMap::new();
    let mut heap: BinaryHeap<Reverse<FrontierEntry>> = BinaryHeap::new();
    heap.push(Reverse(FrontierEntry {
        cost: 0.0,
        code: start.to_string(),
    }));

    while let Some(Reverse(entry)) = heap.pop() {
        let current = match dist.get_key_value(entry.code.as_str()) {
            Some((code, best)) => {
                // Stale heap entry for an already-improved node.
                if entry.cost > *best {
                    continue;
                }
                *code
            }
            None => continue,
        };

        // Settling the goal fixes its distance; scanning further cannot
        // improve it.
        if current == goal {
            break;
        }

        for (neighbor, weight) in graph.neighbors(current) {
            let alt = entry.cost + weight;
            let best = dist.entry(neighbor).or_insert(f64::INFINITY);
            if alt < *best {
                *best = alt;
                prev.insert(neighbor, current);
                heap.push(Reverse(FrontierEntry {
                    cost: alt,
                    code: neighbor.to_string(),
                }));
            }
        }
    }

    if !prev.contains_key(goal) {
        return PathResult::unreachable();
    }

    // Walk predecessors back from the goal, then reverse into root-to-goal
    // order.
    let mut path = vec![goal.to_string()];
    let mut cursor = goal;
    while let Some(&parent) = prev.get(cursor) {
        path.push(parent.to_string());
        cursor = parent;
    }
    path.reverse();

    let cost = dist.get(goal).copied().unwrap_or(f64::INFINITY);
    PathResult { path, cost }
}

/// The caller-side baseline: the direct edge `start -> goal` if one exists.
///
/// This is what the frontend reports as the "original" route before
/// rerouting; it never consults Dijkstra.
pub fn direct_path(graph: &RouteGraph, start: &str, goal: &str) -> PathResult {
    match graph.edge_weight(start, goal) {
        Some(weight) => PathResult {
            path: vec![start.to_string(), goal.to_string()],
            cost: weight,
        },
        None => PathResult::unreachable(),
    }
}
