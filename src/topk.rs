//! Ranking utilities.

use crate::flow::{Edge, FlowMap};
use ordered_float::NotNan;
use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// The `k` edges carrying the most flow, highest first.
///
/// Zero-flow edges (same-layer edges always are) and non-finite values are
/// skipped, so the result may be shorter than `k`. Ties are broken by the
/// canonical edge order to keep the ranking deterministic.
pub fn top_k_edges(flow: &FlowMap, k: usize) -> Vec<(Edge, f64)> {
    if k == 0 || flow.is_empty() {
        return Vec::new();
    }
    let mut heap = BinaryHeap::with_capacity(k + 1);
    for (&edge, &value) in flow {
        if !value.is_finite() || value <= 0.0 {
            continue;
        }
        let v = NotNan::new(value).unwrap();
        if heap.len() < k {
            heap.push(Reverse((v, edge)));
        } else if let Some(&Reverse((min_v, min_e))) = heap.peek() {
            if (v, edge) > (min_v, min_e) {
                heap.pop();
                heap.push(Reverse((v, edge)));
            }
        }
    }
    let mut results: Vec<(Edge, f64)> =
        heap.into_iter().map(|Reverse((v, e))| (e, v.into_inner())).collect();
    results.sort_unstable_by(|a, b| {
        b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal).then(a.0.cmp(&b.0))
    });
    results
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ranks_by_flow_and_skips_zero_edges() {
        let mut flow = FlowMap::new();
        flow.insert(Edge::new(0, 1), 2.0);
        flow.insert(Edge::new(1, 2), 0.0);
        flow.insert(Edge::new(0, 2), 1.0);
        flow.insert(Edge::new(2, 3), 0.5);

        let got = top_k_edges(&flow, 2);
        assert_eq!(got.len(), 2);
        assert_eq!(got[0], (Edge::new(0, 1), 2.0));
        assert_eq!(got[1], (Edge::new(0, 2), 1.0));

        // asking for more than exists still omits zero-flow edges
        let all = top_k_edges(&flow, 10);
        assert_eq!(all.len(), 3);
        assert_eq!(all[2], (Edge::new(2, 3), 0.5));
    }

    #[test]
    fn empty_and_k_zero_are_empty() {
        let flow = FlowMap::new();
        assert!(top_k_edges(&flow, 3).is_empty());
        let mut flow = FlowMap::new();
        flow.insert(Edge::new(0, 1), 1.0);
        assert!(top_k_edges(&flow, 0).is_empty());
    }
}
