//! `edgeflow`: single-source shortest-path edge flow for undirected graphs.
//!
//! For one designated source node, this crate computes the amount of
//! shortest-path flow carried by every edge, the per-source term of
//! Newman's fast edge-betweenness method. The pipeline is a BFS that
//! produces distances and shortest-path counts together
//! ([`traverse`]), followed by a farthest-layer-first sweep that routes one
//! unit of flow from every reachable node back toward the source,
//! apportioned by path counts ([`compute_flow`]).
//!
//! Public invariants (must not drift):
//! - **Node order**: nodes are ids \(0..n-1\) consistent with the input
//!   graph's adapter semantics (e.g. `petgraph::NodeIndex::index()` when
//!   using the `petgraph` feature).
//! - **Layer order**: all flow written at distance \(d\) is final before any
//!   node at distance \(d-1\) reads it, including under the `parallel`
//!   feature.
//! - **Determinism**: identical inputs produce identical outputs.
//! - **Unreachable nodes**: carry no distance, no path count, and never
//!   appear in a flow map (absent, not zero).
//!
//! Swappable (allowed to change without breaking the contract):
//! - iteration strategy within a layer (serial vs parallel)
//! - internal data structures (so long as invariants hold)

pub mod flow;
pub mod graph;
pub mod layers;
pub mod topk;
pub mod traversal;

pub use flow::{
    compute_flow, compute_flow_ref, edge_flow, edge_flow_checked, edge_flow_ref, Edge, FlowMap,
};
pub use graph::{validate_undirected, AdjList, AdjacencyMatrix, Graph, GraphRef};
pub use layers::{max_finite_distance, nodes_at_distance};
pub use topk::top_k_edges;
pub use traversal::{traverse, traverse_ref, DistanceMap, PathCountMap};

#[cfg(feature = "parallel")]
pub use flow::compute_flow_ref_parallel;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("graph has no nodes")]
    EmptyGraph,
    #[error("source node {0} is not in the graph")]
    InvalidSource(usize),
    #[error("node {node} lists out-of-range neighbor {neighbor}")]
    NeighborOutOfRange { node: usize, neighbor: usize },
    #[error("node {0} lists itself as a neighbor")]
    SelfLoop(usize),
    #[error("edge {a}-{b} has no mirror entry at {b}")]
    AsymmetricEdge { a: usize, b: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
