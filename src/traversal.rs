//! Single-source shortest-path traversal.
//!
//! [`traverse`] runs one BFS from a source node and computes, together, each
//! node's distance from the source and the number of distinct shortest paths
//! reaching it. Both results are needed by the flow sweep in [`crate::flow`].
//!
//! Public invariant:
//! - `distances.get(source) == Some(0)` and `counts.get(source) == Some(1)`.
//! - A reachable node's count equals the sum of counts over its neighbors one
//!   layer closer to the source; unreachable nodes carry no distance and no
//!   count.

use crate::graph::{Graph, GraphRef};
use crate::{Error, Result};
use std::collections::VecDeque;

/// Per-node shortest-path distance from a source, `None` meaning unreachable.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DistanceMap(pub Vec<Option<usize>>);

impl DistanceMap {
    pub fn get(&self, node: usize) -> Option<usize> {
        self.0.get(node).copied().flatten()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate `(node, distance)` pairs, unreachable nodes included as `None`.
    pub fn iter(&self) -> impl Iterator<Item = (usize, Option<usize>)> + '_ {
        self.0.iter().copied().enumerate()
    }
}

/// Per-node count of distinct shortest paths from a source.
///
/// Nodes the traversal never reached have no recorded count; `get` returns
/// `None` for them.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathCountMap(pub Vec<u64>);

impl PathCountMap {
    pub fn get(&self, node: usize) -> Option<u64> {
        self.0.get(node).copied().filter(|&c| c > 0)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// BFS from `source`, producing distances and shortest-path counts together.
///
/// The first discovery of a node fixes its distance and seeds its count; a
/// rediscovery from one layer closer adds the discovering node's count (a
/// distinct bundle of shortest paths arriving through a different neighbor).
/// Any other rediscovery is not on a shortest path and is ignored.
///
/// Errors with [`Error::EmptyGraph`] on a zero-node graph and
/// [`Error::InvalidSource`] when `source` is out of range; no partial result
/// is produced. Out-of-range neighbor ids are skipped (callers wanting a
/// hard failure should run [`crate::validate_undirected`] first).
pub fn traverse<G: Graph>(graph: &G, source: usize) -> Result<(DistanceMap, PathCountMap)> {
    let n = graph.node_count();
    check_source(n, source)?;

    let mut dist: Vec<Option<usize>> = vec![None; n];
    let mut counts: Vec<u64> = vec![0; n];
    dist[source] = Some(0);
    counts[source] = 1;

    let mut queue = VecDeque::new();
    queue.push_back((source, 0usize));

    while let Some((curr, d)) = queue.pop_front() {
        for nbr in graph.neighbors(curr) {
            if nbr >= n {
                continue;
            }
            match dist[nbr] {
                None => {
                    dist[nbr] = Some(d + 1);
                    counts[nbr] = counts[curr];
                    queue.push_back((nbr, d + 1));
                }
                Some(dn) if dn == d + 1 => {
                    counts[nbr] += counts[curr];
                }
                Some(_) => {}
            }
        }
    }

    Ok((DistanceMap(dist), PathCountMap(counts)))
}

/// [`traverse`] over a [`GraphRef`], borrowing neighbor slices.
///
/// Uses a head-indexed `Vec` as the FIFO queue so the whole traversal does a
/// constant number of allocations.
pub fn traverse_ref<G: GraphRef>(graph: &G, source: usize) -> Result<(DistanceMap, PathCountMap)> {
    let n = graph.node_count();
    check_source(n, source)?;

    let mut dist: Vec<Option<usize>> = vec![None; n];
    let mut counts: Vec<u64> = vec![0; n];
    dist[source] = Some(0);
    counts[source] = 1;

    let mut queue: Vec<(usize, usize)> = Vec::with_capacity(n);
    queue.push((source, 0));
    let mut head = 0usize;

    while head < queue.len() {
        let (curr, d) = queue[head];
        head += 1;
        for &nbr in graph.neighbors_ref(curr) {
            if nbr >= n {
                continue;
            }
            match dist[nbr] {
                None => {
                    dist[nbr] = Some(d + 1);
                    counts[nbr] = counts[curr];
                    queue.push((nbr, d + 1));
                }
                Some(dn) if dn == d + 1 => {
                    counts[nbr] += counts[curr];
                }
                Some(_) => {}
            }
        }
    }

    Ok((DistanceMap(dist), PathCountMap(counts)))
}

fn check_source(node_count: usize, source: usize) -> Result<()> {
    if node_count == 0 {
        return Err(Error::EmptyGraph);
    }
    if source >= node_count {
        return Err(Error::InvalidSource(source));
    }
    Ok(())
}
