use crate::path::TransformationPath;
use crate::types::TransformationGraph;
use fixedbitset::FixedBitSet;
use petgraph::graph::{EdgeIndex, NodeIndex};
use petgraph::visit::EdgeRef;

/// Limits that bound every search, including on cyclic catalogs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchBounds {
    /// Longest chain considered
    pub max_steps: usize,

    /// Number of completed chains after which the search stops
    pub max_paths: usize,
}

impl SearchBounds {
    pub fn new(max_steps: usize, max_paths: usize) -> Self {
        Self {
            max_steps: max_steps.max(1),
            max_paths: max_paths.max(1),
        }
    }
}

/// Partial chain waiting in the frontier.
struct Branch {
    node: NodeIndex,
    edges: Vec<EdgeIndex>,
    /// Nodes already on this chain, indexed by `NodeIndex::index`
    visited: FixedBitSet,
}

/// Find transformation chains from `source` to `target`.
///
/// Breadth-first over an index-cursor frontier. Cycle avoidance is per
/// branch, so different routes may pass through the same CRS. Once a chain
/// of length L reaches the target, branches of length L are no longer
/// expanded. Results are ordered by step count, then by the accuracy of the
/// worst step; remaining ties keep discovery order.
///
/// Unknown codes, or `source == target`, produce an empty result.
pub fn find_paths(
    graph: &TransformationGraph,
    source: &str,
    target: &str,
    bounds: SearchBounds,
) -> Vec<TransformationPath> {
    let bounds = SearchBounds::new(bounds.max_steps, bounds.max_paths);

    let (Some(start), Some(goal)) = (graph.find_node(source), graph.find_node(target)) else {
        log::debug!("Path search {source} -> {target}: endpoint not in graph");
        return Vec::new();
    };
    if start == goal {
        return Vec::new();
    }

    let mut visited = FixedBitSet::with_capacity(graph.node_count());
    visited.insert(start.index());

    let mut frontier = vec![Branch {
        node: start,
        edges: Vec::new(),
        visited,
    }];
    let mut head = 0;
    let mut shortest_found = usize::MAX;
    let mut found: Vec<Vec<EdgeIndex>> = Vec::new();

    'search: while head < frontier.len() {
        let current = &frontier[head];
        head += 1;

        let depth = current.edges.len();
        if depth >= shortest_found || depth >= bounds.max_steps {
            continue;
        }

        let mut next = Vec::new();
        for edge in graph.outgoing(current.node) {
            let dest = edge.target();
            if current.visited.contains(dest.index()) {
                continue;
            }

            let mut edges = Vec::with_capacity(depth + 1);
            edges.extend_from_slice(&current.edges);
            edges.push(edge.id());

            if dest == goal {
                shortest_found = shortest_found.min(edges.len());
                found.push(edges);
                if found.len() >= bounds.max_paths {
                    break 'search;
                }
            } else if edges.len() < bounds.max_steps {
                let mut visited = current.visited.clone();
                visited.insert(dest.index());
                next.push(Branch {
                    node: dest,
                    edges,
                    visited,
                });
            }
        }
        frontier.extend(next);
    }

    log::debug!(
        "Path search {source} -> {target}: {} paths, {} branches expanded",
        found.len(),
        head
    );

    let mut paths: Vec<TransformationPath> = found
        .iter()
        .filter_map(|edges| materialize(graph, edges))
        .collect();

    paths.sort_by_key(|p| (p.len(), p.worst_priority()));
    paths
}

/// Turn an edge chain into a path; a chain with any unresolvable edge is dropped whole.
fn materialize(graph: &TransformationGraph, edges: &[EdgeIndex]) -> Option<TransformationPath> {
    let steps = edges
        .iter()
        .map(|&e| graph.step(e))
        .collect::<Option<Vec<_>>>()?;
    Some(TransformationPath::from_steps(steps))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::GraphBuilder;
    use crate::complexity::Complexity;
    use crs_catalog::{Accuracy, AccuracyTier, TransformationRecord};

    fn record(id: &str, from: &str, to: &str, tier: AccuracyTier, reversible: bool) -> TransformationRecord {
        TransformationRecord {
            id: id.to_string(),
            from: from.to_string(),
            to: to.to_string(),
            method: format!("method {id}"),
            accuracy: Accuracy::new(tier.to_string(), tier),
            reversible,
            reverse_note: None,
            notes: None,
            operation_code: None,
        }
    }

    fn graph(records: &[TransformationRecord]) -> TransformationGraph {
        GraphBuilder::new().build(records)
    }

    fn ids(path: &TransformationPath) -> Vec<&str> {
        path.steps.iter().map(|s| s.record_id.as_str()).collect()
    }

    #[test]
    fn test_direct_path() {
        let g = graph(&[record("a-b", "A", "B", AccuracyTier::Centimeter, false)]);

        let paths = find_paths(&g, "A", "B", SearchBounds::new(3, 5));

        assert_eq!(paths.len(), 1);
        assert_eq!(paths[0].len(), 1);
        assert_eq!(paths[0].complexity, Complexity::Simple);
        assert!(!paths[0].steps[0].is_reverse);
    }

    #[test]
    fn test_reverse_edge_is_traversed() {
        let g = graph(&[record("a-b", "A", "B", AccuracyTier::Exact, true)]);

        let paths = find_paths(&g, "B", "A", SearchBounds::new(3, 5));

        assert_eq!(paths.len(), 1);
        let step = &paths[0].steps[0];
        assert!(step.is_reverse);
        assert_eq!(step.from, "B");
        assert_eq!(step.to, "A");
    }

    #[test]
    fn test_irreversible_record_not_used_backwards() {
        let g = graph(&[record("a-b", "A", "B", AccuracyTier::Exact, false)]);
        assert!(find_paths(&g, "B", "A", SearchBounds::new(3, 5)).is_empty());
    }

    #[test]
    fn test_two_hop_chain_is_linked() {
        let g = graph(&[
            record("a-h", "A", "H", AccuracyTier::Meter, false),
            record("h-b", "H", "B", AccuracyTier::Centimeter, false),
        ]);

        let paths = find_paths(&g, "A", "B", SearchBounds::new(3, 5));

        assert_eq!(paths.len(), 1);
        assert_eq!(paths[0].crs_chain(), vec!["A", "H", "B"]);
        assert_eq!(paths[0].complexity, Complexity::Moderate);
        assert_eq!(paths[0].total_accuracy.tier, AccuracyTier::Meter);
        assert!(paths[0].estimated_precision_loss.is_some());
    }

    #[test]
    fn test_shorter_route_stops_longer_exploration() {
        let g = graph(&[
            record("a-h", "A", "H", AccuracyTier::Exact, false),
            record("h-b", "H", "B", AccuracyTier::Exact, false),
            record("a-b", "A", "B", AccuracyTier::Meter, false),
        ]);

        let paths = find_paths(&g, "A", "B", SearchBounds::new(3, 5));

        assert_eq!(paths.len(), 1);
        assert_eq!(ids(&paths[0]), vec!["a-b"]);
    }

    #[test]
    fn test_equal_length_ranked_by_worst_step() {
        let g = graph(&[
            record("a-x", "A", "X", AccuracyTier::Exact, false),
            record("x-b", "X", "B", AccuracyTier::Meter, false),
            record("a-y", "A", "Y", AccuracyTier::Centimeter, false),
            record("y-b", "Y", "B", AccuracyTier::Centimeter, false),
        ]);

        let paths = find_paths(&g, "A", "B", SearchBounds::new(3, 5));

        assert_eq!(paths.len(), 2);
        assert_eq!(ids(&paths[0]), vec!["a-y", "y-b"]);
        assert_eq!(ids(&paths[1]), vec!["a-x", "x-b"]);
    }

    #[test]
    fn test_parallel_records_each_produce_a_path() {
        let g = graph(&[
            record("coarse", "A", "B", AccuracyTier::Meter, false),
            record("fine", "A", "B", AccuracyTier::Centimeter, false),
        ]);

        let paths = find_paths(&g, "A", "B", SearchBounds::new(3, 5));

        assert_eq!(paths.len(), 2);
        assert_eq!(ids(&paths[0]), vec!["fine"]);
        assert_eq!(ids(&paths[1]), vec!["coarse"]);
    }

    #[test]
    fn test_max_steps_bounds_chain_length() {
        let g = graph(&[
            record("a-b", "A", "B", AccuracyTier::Exact, false),
            record("b-c", "B", "C", AccuracyTier::Exact, false),
            record("c-d", "C", "D", AccuracyTier::Exact, false),
        ]);

        assert!(find_paths(&g, "A", "D", SearchBounds::new(2, 5)).is_empty());
        assert_eq!(find_paths(&g, "A", "D", SearchBounds::new(3, 5))[0].len(), 3);
    }

    #[test]
    fn test_max_paths_stops_search() {
        let records: Vec<_> = (0..6)
            .map(|i| record(&format!("r{i}"), "A", "B", AccuracyTier::Exact, false))
            .collect();
        let g = graph(&records);

        let paths = find_paths(&g, "A", "B", SearchBounds::new(3, 2));
        assert_eq!(paths.len(), 2);
    }

    #[test]
    fn test_cycles_terminate() {
        let g = graph(&[
            record("a-b", "A", "B", AccuracyTier::Exact, true),
            record("b-c", "B", "C", AccuracyTier::Exact, true),
            record("c-a", "C", "A", AccuracyTier::Exact, true),
        ]);

        let paths = find_paths(&g, "A", "Z", SearchBounds::new(10, 10));
        assert!(paths.is_empty());
    }

    #[test]
    fn test_branches_may_share_intermediate_nodes() {
        // Both routes pass through H; per-branch visited sets must allow it.
        let g = graph(&[
            record("a-x", "A", "X", AccuracyTier::Exact, false),
            record("a-y", "A", "Y", AccuracyTier::Exact, false),
            record("x-h", "X", "H", AccuracyTier::Exact, false),
            record("y-h", "Y", "H", AccuracyTier::Exact, false),
            record("h-b", "H", "B", AccuracyTier::Exact, false),
        ]);

        let paths = find_paths(&g, "A", "B", SearchBounds::new(3, 5));
        assert_eq!(paths.len(), 2);
        assert!(paths.iter().all(|p| p.len() == 3));
    }

    #[test]
    fn test_unknown_endpoints_yield_nothing() {
        let g = graph(&[record("a-b", "A", "B", AccuracyTier::Exact, true)]);
        assert!(find_paths(&g, "A", "Q", SearchBounds::new(3, 5)).is_empty());
        assert!(find_paths(&g, "Q", "A", SearchBounds::new(3, 5)).is_empty());
        assert!(find_paths(&TransformationGraph::new(), "A", "B", SearchBounds::new(3, 5)).is_empty());
    }

    #[test]
    fn test_materialize_rejects_partial_chain() {
        let g = graph(&[
            record("a-b", "A", "B", AccuracyTier::Exact, false),
            record("b-c", "B", "C", AccuracyTier::Exact, false),
        ]);
        let first = EdgeIndex::new(0);
        let second = EdgeIndex::new(1);

        let path = materialize(&g, &[first, second]).unwrap();
        assert_eq!(path.crs_chain(), vec!["A", "B", "C"]);

        assert!(materialize(&g, &[first, EdgeIndex::new(42), second]).is_none());
    }

    #[test]
    fn test_zero_bounds_are_clamped() {
        let bounds = SearchBounds::new(0, 0);
        assert_eq!(bounds, SearchBounds { max_steps: 1, max_paths: 1 });

        let g = graph(&[record("a-b", "A", "B", AccuracyTier::Exact, false)]);
        let raw = SearchBounds { max_steps: 0, max_paths: 0 };
        assert_eq!(find_paths(&g, "A", "B", raw).len(), 1);
    }
}
