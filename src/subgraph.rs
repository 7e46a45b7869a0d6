//! Subgraph construction: `filter_nodes`/`subgraph` (the selector forms of
//! `Graph.filter`), `expand`, and the subgraph-returning traversal
//! wrappers (`Graph::bfs`, `Graph::shortest_path_bfs`, `Graph::parallel_bfs`).
//!
//! Filtering is split into two distinctly named operations rather than one
//! return type that pretends to be both an iterable and a Graph:
//! [`filter_nodes`] (iteration form, takes a predicate) and [`subgraph`]
//! (structural form, takes a [`Selector`] and always returns a `Graph`).
//! Both funnel through [`clone_subgraph`], the one place that knows how to
//! clone nodes with fresh attribute maps and keep only edges whose
//! endpoints both survived.

use std::collections::HashSet;

use tracing::debug;

use crate::error::{GraphError, GraphResult};
use crate::graph::{Graph, Node};
use crate::value::{AttributeMap, Value};
use crate::visit::{bfs_ids, parallel_bfs_ids, shortest_path_node_ids};

/// A selector for [`subgraph`], mirroring `Graph.filter`'s `**selector`
/// keyword forms (`ids=[...]`, `id=X`, `key=value`).
pub enum Selector<'a> {
    Ids(Vec<String>),
    Id(String),
    Attr(&'a str, Value),
}

/// Nodes whose content matches `predicate`, in the graph's insertion order.
/// The iteration form of filtering; does not allocate a new Graph.
pub fn filter_nodes<'g, F>(graph: &'g Graph, predicate: F) -> Vec<Node<'g>>
where
    F: Fn(&Node<'g>) -> bool,
{
    graph.nodes().filter(|n| predicate(n)).collect()
}

/// The structural form of filtering: a freshly cloned Graph containing the
/// nodes selected by `selector`, with edges restricted to those whose both
/// endpoints survived the selection.
pub fn subgraph(graph: &Graph, selector: Selector<'_>) -> Graph {
    let ids: HashSet<String> = match selector {
        Selector::Ids(ids) => ids.into_iter().filter(|id| graph.has_node(id)).collect(),
        Selector::Id(id) => {
            if graph.has_node(&id) {
                std::iter::once(id).collect()
            } else {
                HashSet::new()
            }
        }
        Selector::Attr(key, value) => graph
            .nodes()
            .filter(|n| n.attr_get(key) == Some(&value))
            .map(|n| n.id().to_string())
            .collect(),
    };
    clone_subgraph(graph, &ids)
}

/// Build a new Graph containing exactly `ids` (intersected with `source`'s
/// actual membership, for callers that pass an already-filtered id set),
/// with cloned node attributes and every edge of `source` whose endpoints
/// are both in `ids`.
pub(crate) fn clone_subgraph(source: &Graph, ids: &HashSet<String>) -> Graph {
    let mut out = Graph::new();
    for id in source.keys() {
        if !ids.contains(&id) {
            continue;
        }
        let node = source.get_node(&id).expect("key from source.keys()");
        let attrs: AttributeMap = node.attrs().map(|(k, v)| (k.clone(), v.clone())).collect();
        out.add_node(id, attrs).expect("fresh graph, no duplicates");
    }
    for id in source.keys() {
        if !ids.contains(&id) {
            continue;
        }
        let node = source.get_node(&id).expect("key from source.keys()");
        for edge in node.edges() {
            if ids.contains(edge.to_id()) {
                let attrs = edge.attr().clone();
                out.add_edge(node.id(), edge.to_id(), Some(attrs))
                    .expect("both endpoints already inserted");
            }
        }
    }
    out
}

/// `Graph.expand(source, depth)`: treating `graph` as a subset of `source`,
/// grow it by every node reachable within `depth` hops in `source` from any
/// node already in `graph`, then restrict edges the same way `subgraph`
/// does. `depth=0` is a structural clone of `graph` unchanged.
pub fn expand(graph: &Graph, source: &Graph, depth: usize) -> GraphResult<Graph> {
    let mut ids: HashSet<String> = graph.keys().into_iter().collect();
    for id in graph.keys() {
        if !source.has_node(&id) {
            return Err(GraphError::UnknownNode(id));
        }
    }
    if depth > 0 {
        for id in graph.keys() {
            for reached in bfs_ids(source, &id, Some(depth), None)? {
                ids.insert(reached);
            }
        }
    }
    Ok(clone_subgraph(source, &ids))
}

/// `Graph.bfs`: the subgraph of nodes visited by a serial BFS from
/// `root_id` (and the edges of `graph` connecting them).
pub fn bfs_subgraph(graph: &Graph, root_id: &str, target: Option<&str>, max_depth: Option<usize>) -> GraphResult<Graph> {
    debug!(root = %root_id, target = ?target, "bfs");
    let ids: HashSet<String> = bfs_ids(graph, root_id, max_depth, target)?.into_iter().collect();
    Ok(clone_subgraph(graph, &ids))
}

/// `Graph.parallel_bfs`: same contract as [`bfs_subgraph`], computed with
/// `rayon`-parallel frontier expansion.
pub fn parallel_bfs_subgraph(graph: &Graph, root_id: &str, target: Option<&str>) -> GraphResult<Graph> {
    let ids: HashSet<String> = parallel_bfs_ids(graph, root_id, target)?.into_iter().collect();
    Ok(clone_subgraph(graph, &ids))
}

/// `Graph.shortest_path_bfs`: the subgraph containing only the nodes (and
/// connecting edges) on one shortest path from `src_id` to `dst_id`.
pub fn shortest_path_subgraph(graph: &Graph, src_id: &str, dst_id: &str) -> GraphResult<Graph> {
    debug!(src = %src_id, dst = %dst_id, "shortest_path_bfs");
    let ids: HashSet<String> = shortest_path_node_ids(graph, src_id, dst_id)?.into_iter().collect();
    Ok(clone_subgraph(graph, &ids))
}

impl Graph {
    /// Iteration form of filtering: nodes matching `predicate`, insertion
    /// order, no new Graph allocated.
    pub fn filter_nodes<F>(&self, predicate: F) -> Vec<Node<'_>>
    where
        F: Fn(&Node<'_>) -> bool,
    {
        filter_nodes(self, predicate)
    }

    /// Structural form of filtering: a cloned subgraph selected by
    /// `selector`.
    pub fn subgraph(&self, selector: Selector<'_>) -> Graph {
        subgraph(self, selector)
    }

    /// Grow `self` (treated as a subset of `source`) by every node
    /// reachable within `depth` hops in `source`.
    pub fn expand(&self, source: &Graph, depth: usize) -> GraphResult<Graph> {
        expand(self, source, depth)
    }

    /// The subgraph of nodes (and connecting edges) visited by a serial BFS
    /// from `root_id`.
    pub fn bfs(&self, root_id: &str, target: Option<&str>, max_depth: Option<usize>) -> GraphResult<Graph> {
        bfs_subgraph(self, root_id, target, max_depth)
    }

    /// Same contract as [`Graph::bfs`], computed with `rayon`-parallel
    /// frontier expansion.
    pub fn parallel_bfs(&self, root_id: &str, target: Option<&str>) -> GraphResult<Graph> {
        parallel_bfs_subgraph(self, root_id, target)
    }

    /// The subgraph containing only the nodes on one shortest path from
    /// `src_id` to `dst_id`.
    pub fn shortest_path_bfs(&self, src_id: &str, dst_id: &str) -> GraphResult<Graph> {
        shortest_path_subgraph(self, src_id, dst_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::AttributeMap;

    fn linear(n: usize) -> Graph {
        let mut g = Graph::new();
        for i in 1..=n {
            g.add_node(format!("n{i}"), AttributeMap::new()).unwrap();
        }
        for i in 1..n {
            g.add_edge(&format!("n{i}"), &format!("n{}", i + 1), None).unwrap();
        }
        g
    }

    #[test]
    fn subgraph_edge_closure() {
        let g = linear(5);
        let sub = subgraph(&g, Selector::Ids(vec!["n1".into(), "n2".into(), "n4".into()]));
        assert_eq!(sub.node_count(), 3);
        // n2->n3 dropped since n3 isn't selected; n1->n2 kept.
        assert_eq!(sub.edge_count(), 1);
    }

    #[test]
    fn subgraph_by_attr_equals() {
        let mut g = Graph::new();
        let mut red = AttributeMap::new();
        red.insert("color".to_string(), Value::String("red".into()));
        g.add_node("a", red.clone()).unwrap();
        g.add_node("b", AttributeMap::new()).unwrap();
        g.add_edge("a", "b", None).unwrap();
        let sub = subgraph(&g, Selector::Attr("color", Value::String("red".into())));
        assert_eq!(sub.keys(), vec!["a".to_string()]);
    }

    #[test]
    fn expand_depth_zero_is_identity() {
        let g = linear(3);
        let sub = subgraph(&g, Selector::Id("n2".to_string()));
        let expanded = expand(&sub, &g, 0).unwrap();
        assert_eq!(expanded.node_count(), 1);
    }

    #[test]
    fn expand_monotonicity() {
        let g = linear(6);
        let seed = subgraph(&g, Selector::Id("n3".to_string()));
        let d1: HashSet<String> = expand(&seed, &g, 1).unwrap().keys().into_iter().collect();
        let d2: HashSet<String> = expand(&seed, &g, 2).unwrap().keys().into_iter().collect();
        assert!(d1.is_subset(&d2));
    }

    #[test]
    fn bfs_subgraph_rejects_unknown_root() {
        let g = linear(3);
        assert!(matches!(
            bfs_subgraph(&g, "missing", None, None),
            Err(GraphError::UnknownNode(_))
        ));
    }
}
