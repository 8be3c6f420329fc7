//! Layer extraction over a [`DistanceMap`].

use crate::traversal::DistanceMap;

/// All nodes at exactly distance `n` from the source, in node-id order.
///
/// Unreachable nodes never match any finite `n`.
pub fn nodes_at_distance(dist: &DistanceMap, n: usize) -> Vec<usize> {
    dist.iter()
        .filter_map(|(node, d)| (d == Some(n)).then_some(node))
        .collect()
}

/// The greatest finite distance present, or `0` when the source is the only
/// node with a finite distance (including fully disconnected sources).
pub fn max_finite_distance(dist: &DistanceMap) -> usize {
    dist.iter().filter_map(|(_, d)| d).max().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layers_partition_reachable_nodes() {
        let dist = DistanceMap(vec![Some(0), Some(1), Some(1), Some(2), None]);
        assert_eq!(nodes_at_distance(&dist, 0), vec![0]);
        assert_eq!(nodes_at_distance(&dist, 1), vec![1, 2]);
        assert_eq!(nodes_at_distance(&dist, 2), vec![3]);
        assert_eq!(nodes_at_distance(&dist, 3), Vec::<usize>::new());
    }

    #[test]
    fn max_ignores_unreachable_entries() {
        let dist = DistanceMap(vec![Some(0), Some(3), None, Some(1)]);
        assert_eq!(max_finite_distance(&dist), 3);
    }

    #[test]
    fn max_is_zero_for_isolated_source() {
        let dist = DistanceMap(vec![Some(0), None, None]);
        assert_eq!(max_finite_distance(&dist), 0);
    }
}
