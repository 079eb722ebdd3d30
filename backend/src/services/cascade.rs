//! Cascading-delay chain propagation.
//!
//! A heuristic connectivity proxy: starting from every flight that departs
//! the queried airport, greedily chain onward flights whose departure falls
//! inside the connection window after the previous flight's arrival, then
//! rank downstream airports by how many chains reach them. Scores count
//! chain membership, not actual delay minutes.

use std::collections::{HashMap, HashSet};

use crate::models::{normalize_code, FlightRecord};

/// Hard bound on chain length. Purely a termination guarantee against
/// malformed cyclic data; real datasets never come close.
pub const MAX_CHAIN_HOPS: usize = 50;

/// A downstream airport with its chain-membership count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedAirport {
    pub airport: String,
    pub score: u64,
}

/// Output of [`propagate_delays`].
#[derive(Debug, Clone, PartialEq)]
pub struct CascadeResult {
    /// Downstream airports sorted by descending impact score. The queried
    /// airport itself never appears here.
    pub ranked: Vec<RankedAirport>,
    /// Retained chains (length > 1), in the order their starting flights
    /// appear in the input.
    pub chains: Vec<Vec<FlightRecord>>,
}

/// Build delay chains out of `airport` and rank the airports they reach.
///
/// A chain extends from flight to flight when the next flight departs the
/// previous flight's arrival airport with `first_seen` in
/// `[prev.last_seen, prev.last_seen + window_minutes * 60]`. Among the
/// candidates the earliest departure wins; a flight already in the chain is
/// never reused. Chains that found no connection at all (length 1) are
/// discarded.
pub fn propagate_delays(
    flights: &[FlightRecord],
    airport: &str,
    window_minutes: i64,
) -> CascadeResult {
    let airport = normalize_code(airport);
    let window_seconds = window_minutes.max(0) * 60;

    // Index flights by normalized departure airport, each bucket sorted by
    // departure time so "earliest candidate" is the first match.
    let mut by_departure: HashMap<String, Vec<&FlightRecord>> = HashMap::new();
    for flight in flights {
        let origin = normalize_code(&flight.origin);
        if origin.is_empty() {
            continue;
        }
        by_departure.entry(origin).or_default().push(flight);
    }
    for bucket in by_departure.values_mut() {
        bucket.sort_by_key(|f| (f.first_seen, f.id.clone()));
    }

    let starts: &[&FlightRecord] = by_departure
        .get(&airport)
        .map(Vec::as_slice)
        .unwrap_or_default();

    let mut chains: Vec<Vec<FlightRecord>> = Vec::new();
    for &start in starts {
        let chain = extend_chain(start, &by_departure, window_seconds);
        if chain.len() > 1 {
            chains.push(chain.into_iter().cloned().collect());
        }
    }

    CascadeResult {
        ranked: rank_arrivals(&chains, &airport),
        chains,
    }
}

/// Greedily extend a single chain from `start`.
fn extend_chain<'a>(
    start: &'a FlightRecord,
    by_departure: &HashMap<String, Vec<&'a FlightRecord>>,
    window_seconds: i64,
) -> Vec<&'a FlightRecord> {
    let mut chain: Vec<&FlightRecord> = vec![start];
    let mut used: HashSet<&str> = HashSet::from([start.id.as_str()]);
    let mut current = start;

    while chain.len() < MAX_CHAIN_HOPS {
        let arrival = normalize_code(&current.destination);
        if arrival.is_empty() {
            break;
        }
        let Some(arrived_at) = current.last_seen else {
            break;
        };

        let candidates = match by_departure.get(&arrival) {
            Some(bucket) => bucket,
            None => break,
        };

        // Buckets are pre-sorted by departure time, so the first in-window
        // unused flight is the earliest next connection.
        let next = candidates.iter().copied().find(|f| {
            !used.contains(f.id.as_str())
                && f.first_seen.is_some_and(|departs| {
                    departs >= arrived_at && departs - arrived_at <= window_seconds
                })
        });

        match next {
            Some(flight) => {
                chain.push(flight);
                used.insert(flight.id.as_str());
                current = flight;
            }
            None => break,
        }
    }

    chain
}

/// Count arrival-airport memberships across retained chains and sort
/// descending. Ties keep first-seen order, which is stable across runs
/// since chains follow input order.
fn rank_arrivals(chains: &[Vec<FlightRecord>], queried: &str) -> Vec<RankedAirport> {
    let mut scores: HashMap<String, u64> = HashMap::new();
    let mut order: Vec<String> = Vec::new();

    for chain in chains {
        for flight in chain {
            let arrival = normalize_code(&flight.destination);
            if arrival.is_empty() || arrival == queried {
                continue;
            }
            match scores.get_mut(&arrival) {
                Some(score) => *score += 1,
                None => {
                    scores.insert(arrival.clone(), 1);
                    order.push(arrival);
                }
            }
        }
    }

    let mut ranked: Vec<RankedAirport> = order
        .into_iter()
        .map(|airport| {
            let score = scores[&airport];
            RankedAirport { airport, score }
        })
        .collect();
    ranked.sort_by(|a, b| b.score.cmp(&a.score));
    ranked
}
