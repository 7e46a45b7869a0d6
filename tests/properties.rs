//! Property tests for the graph's structural invariants, complementing
//! (not replacing) the unit tests alongside each module. Kept in `tests/`
//! as `proptest!` blocks over small random inputs, separate from the
//! per-module unit tests.

use std::collections::HashSet;

use proptest::prelude::*;

use property_graph::prelude::*;

/// A graph built from `node_count` nodes `n0..nK` and a list of
/// `(from, to)` index pairs, used as the shared strategy for every
/// invariant below.
fn build_graph(node_count: usize, edge_pairs: &[(usize, usize)]) -> Graph {
    let mut g = Graph::new();
    for i in 0..node_count {
        g.add_node(format!("n{i}"), AttributeMap::new()).unwrap();
    }
    for &(from, to) in edge_pairs {
        g.add_edge(&format!("n{from}"), &format!("n{to}"), None).unwrap();
    }
    g
}

fn arb_graph(max_nodes: usize, max_edges: usize) -> impl Strategy<Value = (usize, Vec<(usize, usize)>)> {
    (1..=max_nodes).prop_flat_map(move |node_count| {
        prop::collection::vec((0..node_count, 0..node_count), 0..=max_edges)
            .prop_map(move |edges| (node_count, edges))
    })
}

proptest! {
    /// Invariant 1: every edge appears in its source's `edges` and its
    /// target's `inverse_edges` exactly once, and the counts agree.
    #[test]
    fn adjacency_consistency((node_count, edges) in arb_graph(12, 30)) {
        let g = build_graph(node_count, &edges);
        let mut total_out = 0;
        let mut total_in = 0;
        for node in g.nodes() {
            total_out += node.edges().count();
            total_in += node.inverse_edges().count();
            for e in node.edges() {
                prop_assert_eq!(e.from_id(), node.id());
            }
            for e in node.inverse_edges() {
                prop_assert_eq!(e.to_id(), node.id());
            }
        }
        prop_assert_eq!(total_out, edges.len());
        prop_assert_eq!(total_in, edges.len());
    }

    /// Invariant 2: `keys()` preserves `add_node` order; each node's
    /// `edges()` preserves `add_edge` order.
    #[test]
    fn deterministic_insertion_order((node_count, edges) in arb_graph(12, 30)) {
        let g = build_graph(node_count, &edges);
        let expected_keys: Vec<String> = (0..node_count).map(|i| format!("n{i}")).collect();
        prop_assert_eq!(g.keys(), expected_keys);

        for i in 0..node_count {
            let expected_targets: Vec<String> = edges
                .iter()
                .filter(|&&(from, _)| from == i)
                .map(|&(_, to)| format!("n{to}"))
                .collect();
            let actual_targets: Vec<String> = g
                .get_node(&format!("n{i}"))
                .unwrap()
                .edges()
                .map(|e| e.to_id().to_string())
                .collect();
            prop_assert_eq!(actual_targets, expected_targets);
        }
    }

    /// Invariant 6: every edge in a `subgraph` result has both endpoints
    /// in the result's node set.
    #[test]
    fn subgraph_closure((node_count, edges) in arb_graph(12, 30), keep_every_other in any::<bool>()) {
        let g = build_graph(node_count, &edges);
        let ids: Vec<String> = g
            .keys()
            .into_iter()
            .enumerate()
            .filter(|(i, _)| !keep_every_other || i % 2 == 0)
            .map(|(_, id)| id)
            .collect();
        let sub = g.subgraph(Selector::Ids(ids.clone()));
        let key_set: HashSet<String> = sub.keys().into_iter().collect();
        for node in sub.nodes() {
            for e in node.edges() {
                prop_assert!(key_set.contains(node.id()));
                prop_assert!(key_set.contains(e.to_id()));
            }
        }
    }

    /// Invariant 7: serial and parallel BFS reach the same node set.
    #[test]
    fn bfs_matches_parallel_bfs((node_count, edges) in arb_graph(15, 40)) {
        prop_assume!(node_count > 0);
        let g = build_graph(node_count, &edges);
        let root = "n0";
        let serial: HashSet<String> = g.get_node(root).unwrap().bfs(None, None).unwrap().into_iter().collect();
        let parallel: HashSet<String> = property_graph::visit::parallel_bfs_ids(&g, root, None).unwrap().into_iter().collect();
        prop_assert_eq!(serial, parallel);
    }

    /// Invariant 8: `expand(depth=k)`'s node set is a subset of
    /// `expand(depth=k+1)`'s.
    #[test]
    fn expand_monotonicity((node_count, edges) in arb_graph(12, 30), depth in 0usize..4) {
        prop_assume!(node_count > 0);
        let g = build_graph(node_count, &edges);
        let seed = g.subgraph(Selector::Id("n0".to_string()));
        let at_k: HashSet<String> = seed.expand(&g, depth).unwrap().keys().into_iter().collect();
        let at_k_plus_1: HashSet<String> = seed.expand(&g, depth + 1).unwrap().keys().into_iter().collect();
        prop_assert!(at_k.is_subset(&at_k_plus_1));
    }
}
