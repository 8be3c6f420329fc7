//! Backward flow sweep over shortest-path layers.
//!
//! Each reachable node sends one intrinsic unit of flow back toward the
//! source, plus everything that arrived from nodes one layer farther out,
//! split across its closer neighbors in proportion to their shortest-path
//! counts. Summing the resulting per-edge values over all sources yields
//! Newman's edge betweenness; this module computes the single-source term.
//!
//! Public invariant:
//! - Layers are processed strictly farthest-first. Every flow value written
//!   at distance `d` is final before any node at distance `d - 1` reads it.
//! - Edges between two nodes at the same distance appear with value `0.0`.
//! - Edges touching a node unreachable from the source do not appear at all.

use crate::graph::{Graph, GraphRef};
use crate::layers::{max_finite_distance, nodes_at_distance};
use crate::traversal::{traverse, traverse_ref, DistanceMap, PathCountMap};
use crate::Result;
use std::collections::HashMap;

/// Canonical unordered edge key: `Edge::new(u, v)` and `Edge::new(v, u)` are
/// the same value, so lookups are symmetric by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Edge {
    a: usize,
    b: usize,
}

impl Edge {
    pub fn new(u: usize, v: usize) -> Self {
        if u <= v {
            Self { a: u, b: v }
        } else {
            Self { a: v, b: u }
        }
    }

    /// The endpoints, smaller id first.
    pub fn endpoints(self) -> (usize, usize) {
        (self.a, self.b)
    }
}

/// Flow per edge for one source, keyed by canonical [`Edge`].
pub type FlowMap = HashMap<Edge, f64>;

/// Newman's backward sweep: flow carried by each edge for one source.
///
/// `dist` and `counts` must come from [`traverse`] (or [`traverse_ref`]) on
/// the same graph; entries for nodes the maps don't cover are treated as
/// unreachable.
pub fn compute_flow<G: Graph>(graph: &G, dist: &DistanceMap, counts: &PathCountMap) -> FlowMap {
    let mut flow = FlowMap::new();
    let mut d = max_finite_distance(dist);
    while d > 0 {
        for curr in nodes_at_distance(dist, d) {
            let nbrs = graph.neighbors(curr);
            let writes = node_writes(&nbrs, curr, d, dist, counts, &flow);
            flow.extend(writes);
        }
        d -= 1;
    }
    flow
}

/// [`compute_flow`] over a [`GraphRef`], borrowing neighbor slices.
pub fn compute_flow_ref<G: GraphRef>(
    graph: &G,
    dist: &DistanceMap,
    counts: &PathCountMap,
) -> FlowMap {
    let mut flow = FlowMap::new();
    let mut d = max_finite_distance(dist);
    while d > 0 {
        for curr in nodes_at_distance(dist, d) {
            let writes = node_writes(graph.neighbors_ref(curr), curr, d, dist, counts, &flow);
            flow.extend(writes);
        }
        d -= 1;
    }
    flow
}

/// Parallel [`compute_flow_ref`]: nodes within one layer are processed on the
/// rayon pool, and the layer's writes are applied before the next (closer)
/// layer starts. Output is identical to the serial sweep regardless of
/// thread count, since no node reads a value written by its own layer.
#[cfg(feature = "parallel")]
pub fn compute_flow_ref_parallel<G: GraphRef + Sync>(
    graph: &G,
    dist: &DistanceMap,
    counts: &PathCountMap,
) -> FlowMap {
    use rayon::prelude::*;

    let mut flow = FlowMap::new();
    let mut d = max_finite_distance(dist);
    while d > 0 {
        let layer = nodes_at_distance(dist, d);
        let writes: Vec<(Edge, f64)> = layer
            .par_iter()
            .flat_map_iter(|&curr| {
                node_writes(graph.neighbors_ref(curr), curr, d, dist, counts, &flow)
            })
            .collect();
        flow.extend(writes);
        d -= 1;
    }
    flow
}

/// The flow writes one node at distance `d` contributes.
///
/// Two passes over the neighbor list: first gather the finalized flow of
/// every edge to the `d + 1` layer (and pin same-layer edges at zero), then
/// split the gathered total across the `d - 1` neighbors by their share of
/// the node's shortest paths. Gathering must complete before distribution so
/// the result does not depend on neighbor order.
fn node_writes(
    nbrs: &[usize],
    curr: usize,
    d: usize,
    dist: &DistanceMap,
    counts: &PathCountMap,
    flow: &FlowMap,
) -> Vec<(Edge, f64)> {
    let mut local = 1.0f64;
    let mut writes = Vec::with_capacity(nbrs.len());

    for &nbr in nbrs {
        match dist.get(nbr) {
            Some(dn) if dn == d + 1 => {
                local += flow.get(&Edge::new(curr, nbr)).copied().unwrap_or(0.0);
            }
            Some(dn) if dn == d => {
                writes.push((Edge::new(curr, nbr), 0.0));
            }
            _ => {}
        }
    }

    for &nbr in nbrs {
        if dist.get(nbr) == Some(d - 1) {
            // curr is reachable, so its count is at least 1.
            let share =
                counts.get(nbr).unwrap_or(0) as f64 / counts.get(curr).unwrap_or(1) as f64;
            writes.push((Edge::new(nbr, curr), local * share));
        }
    }

    writes
}

/// Traverse from `source` and sweep, in one call.
pub fn edge_flow<G: Graph>(graph: &G, source: usize) -> Result<FlowMap> {
    let (dist, counts) = traverse(graph, source)?;
    Ok(compute_flow(graph, &dist, &counts))
}

/// [`edge_flow`] over a [`GraphRef`].
pub fn edge_flow_ref<G: GraphRef>(graph: &G, source: usize) -> Result<FlowMap> {
    let (dist, counts) = traverse_ref(graph, source)?;
    Ok(compute_flow_ref(graph, &dist, &counts))
}

/// [`edge_flow`] preceded by a full [`crate::validate_undirected`] pass, for
/// callers that want malformed adjacency rejected up front rather than
/// silently skipped.
pub fn edge_flow_checked<G: Graph>(graph: &G, source: usize) -> Result<FlowMap> {
    crate::graph::validate_undirected(graph)?;
    edge_flow(graph, source)
}
