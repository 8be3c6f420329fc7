//! Graph adapter traits and simple adjacency types.

use crate::{Error, Result};

/// Read-only adjacency access with owned neighbor lists.
pub trait Graph {
    fn node_count(&self) -> usize;
    fn neighbors(&self, node: usize) -> Vec<usize>;
    fn degree(&self, node: usize) -> usize {
        self.neighbors(node).len()
    }
}

/// A graph view that can return **borrowed** neighbor slices.
///
/// This is the “cache-friendly” adapter: the traversal and the flow sweep
/// touch every neighbor list a bounded number of times, and this avoids
/// allocating a new `Vec` on each visit.
pub trait GraphRef {
    fn node_count(&self) -> usize;
    fn neighbors_ref(&self, node: usize) -> &[usize];
    fn degree(&self, node: usize) -> usize {
        self.neighbors_ref(node).len()
    }
}

/// Owned undirected adjacency-list graph.
///
/// Neighbor lists are kept sorted and deduplicated. Construction does not
/// repair symmetry; see [`validate_undirected`] for the full well-formedness
/// check.
#[derive(Debug, Clone, Default)]
pub struct AdjList {
    adj: Vec<Vec<usize>>,
}

impl AdjList {
    /// Wrap raw adjacency lists as given, normalizing each list.
    pub fn new(mut adj: Vec<Vec<usize>>) -> Self {
        for nbrs in &mut adj {
            nbrs.sort_unstable();
            nbrs.dedup();
        }
        Self { adj }
    }

    /// Build an undirected graph on `n` nodes from an edge list.
    ///
    /// Both directions are inserted for every edge. Self-loops and edges with
    /// an out-of-range endpoint are ignored (callers should validate, but be
    /// robust).
    pub fn from_edges(n: usize, edges: &[(usize, usize)]) -> Self {
        let mut adj = vec![Vec::new(); n];
        for &(u, v) in edges {
            if u == v || u >= n || v >= n {
                continue;
            }
            adj[u].push(v);
            adj[v].push(u);
        }
        Self::new(adj)
    }
}

impl Graph for AdjList {
    fn node_count(&self) -> usize {
        self.adj.len()
    }
    fn neighbors(&self, node: usize) -> Vec<usize> {
        self.adj.get(node).cloned().unwrap_or_default()
    }
}

impl GraphRef for AdjList {
    fn node_count(&self) -> usize {
        self.adj.len()
    }
    fn neighbors_ref(&self, node: usize) -> &[usize] {
        self.adj.get(node).map(Vec::as_slice).unwrap_or(&[])
    }
}

/// Borrowed dense-matrix adapter; entries greater than zero are edges.
pub struct AdjacencyMatrix<'a>(pub &'a [Vec<f64>]);

impl<'a> Graph for AdjacencyMatrix<'a> {
    fn node_count(&self) -> usize {
        self.0.len()
    }
    fn neighbors(&self, node: usize) -> Vec<usize> {
        self.0[node].iter().enumerate().filter(|(_, &w)| w > 0.0).map(|(i, _)| i).collect()
    }
}

/// Check that `graph` is a well-formed simple undirected graph.
///
/// Fails fast on the first problem found: an empty graph, an out-of-range
/// neighbor id, a self-loop, or an edge whose mirror entry is missing. A
/// graph that passes here satisfies the symmetry invariant every algorithm in
/// this crate assumes.
pub fn validate_undirected<G: Graph>(graph: &G) -> Result<()> {
    let n = graph.node_count();
    if n == 0 {
        return Err(Error::EmptyGraph);
    }
    for u in 0..n {
        for v in graph.neighbors(u) {
            if v >= n {
                return Err(Error::NeighborOutOfRange { node: u, neighbor: v });
            }
            if v == u {
                return Err(Error::SelfLoop(u));
            }
            if !graph.neighbors(v).contains(&u) {
                return Err(Error::AsymmetricEdge { a: u, b: v });
            }
        }
    }
    Ok(())
}

#[cfg(feature = "petgraph")]
impl<N, E, Ty, Ix> Graph for petgraph::Graph<N, E, Ty, Ix>
where
    Ty: petgraph::EdgeType,
    Ix: petgraph::graph::IndexType,
{
    fn node_count(&self) -> usize {
        self.node_count()
    }
    // For `UnGraph` this yields all incident edges; on a directed graph only
    // outgoing ones, which `validate_undirected` will reject unless every
    // edge has its mirror.
    fn neighbors(&self, node: usize) -> Vec<usize> {
        self.neighbors(petgraph::graph::NodeIndex::new(node)).map(|idx| idx.index()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_edges_inserts_both_directions() {
        let g = AdjList::from_edges(4, &[(0, 1), (1, 2), (1, 2), (3, 3), (2, 9)]);
        assert_eq!(g.neighbors(0), vec![1]);
        assert_eq!(g.neighbors(1), vec![0, 2]);
        assert_eq!(g.neighbors(2), vec![1]);
        // self-loop and out-of-range edges are dropped
        assert_eq!(g.neighbors(3), Vec::<usize>::new());
        assert!(validate_undirected(&g).is_ok());
    }

    #[test]
    fn validate_rejects_empty() {
        let g = AdjList::new(vec![]);
        assert!(matches!(validate_undirected(&g), Err(Error::EmptyGraph)));
    }

    #[test]
    fn validate_rejects_missing_mirror() {
        // 0 lists 1 but 1 does not list 0
        let g = AdjList::new(vec![vec![1], vec![]]);
        assert!(matches!(
            validate_undirected(&g),
            Err(Error::AsymmetricEdge { a: 0, b: 1 })
        ));
    }

    #[test]
    fn validate_rejects_self_loop_and_out_of_range() {
        let g = AdjList::new(vec![vec![0]]);
        assert!(matches!(validate_undirected(&g), Err(Error::SelfLoop(0))));

        let g = AdjList::new(vec![vec![7], vec![0]]);
        assert!(matches!(
            validate_undirected(&g),
            Err(Error::NeighborOutOfRange { node: 0, neighbor: 7 })
        ));
    }

    #[test]
    fn adjacency_matrix_reads_positive_entries_as_edges() {
        let m = vec![
            vec![0.0, 1.0, 0.0],
            vec![1.0, 0.0, 0.5],
            vec![0.0, 0.5, 0.0],
        ];
        let g = AdjacencyMatrix(&m);
        assert_eq!(g.node_count(), 3);
        assert_eq!(g.neighbors(1), vec![0, 2]);
        assert!(validate_undirected(&g).is_ok());
    }
}
