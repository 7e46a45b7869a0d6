//! **Graph** (also called Vertex) is the aggregate root: it owns a set of
//! nodes and edges keyed by string id.
//!
//! Storage follows an arena-plus-index pattern: an edge references both
//! endpoints, and the target's inverse-edge list must point back to it
//! without owning it, so `Graph` owns a flat `Vec<EdgeData>` arena, and
//! every node holds `EdgeIndex`es into it rather than owning `Edge` values
//! directly. This mirrors a `NodeIndex`/`EdgeIndex` arena design, adapted
//! from integer node ids to `String` ids.

mod edge;
mod node;

pub use edge::Edge;
pub use node::{Node, NodeMut};

use std::sync::Arc;

use indexmap::IndexMap;
use tracing::debug;

use crate::error::{GraphError, GraphResult};
use crate::observed::ObservedMap;
use crate::value::{AttributeMap, Value};

/// Index into the edge arena. Stable for the lifetime of the owning graph
/// (the core API never removes edges).
pub type EdgeIndex = usize;

/// `cb(graph, node) -> bool`. Returning `false` suppresses any callbacks
/// registered after it for that `add_node` call.
pub type NodeAddCallback = Arc<dyn Fn(&Graph, &Node) -> bool + Send + Sync>;

#[derive(Debug, Clone)]
pub(crate) struct NodeData {
    pub(crate) id: String,
    pub(crate) attr: ObservedMap,
    pub(crate) edges: Vec<EdgeIndex>,
    pub(crate) inverse_edges: Vec<EdgeIndex>,
}

#[derive(Debug, Clone)]
pub(crate) struct EdgeData {
    pub(crate) from: String,
    pub(crate) to: String,
    pub(crate) attr: AttributeMap,
}

/// The aggregate root: a directed, labeled property (multi)graph.
#[derive(Default)]
pub struct Graph {
    pub(crate) nodes: IndexMap<String, NodeData>,
    pub(crate) edges: Vec<EdgeData>,
    pub(crate) meta: AttributeMap,
    on_node_add: Vec<NodeAddCallback>,
}

impl Graph {
    /// An empty graph: no nodes, no metadata, no callbacks.
    pub fn new() -> Self {
        Graph {
            nodes: IndexMap::new(),
            edges: Vec::new(),
            meta: AttributeMap::new(),
            on_node_add: Vec::new(),
        }
    }

    /// Register a callback to run after every `add_node`. Callbacks run in
    /// registration order; one returning `false` stops the rest from
    /// running for that call.
    pub fn on_node_add(&mut self, cb: NodeAddCallback) {
        self.on_node_add.push(cb);
    }

    /// Create a node with id `id` and attributes `attrs` (cloned, so the
    /// caller cannot alias the graph's internal map). Fails with
    /// [`GraphError::DuplicateId`] if `id` is already present.
    pub fn add_node(&mut self, id: impl Into<String>, attrs: AttributeMap) -> GraphResult<Node<'_>> {
        let id = id.into();
        if self.nodes.contains_key(&id) {
            return Err(GraphError::DuplicateId(id));
        }
        debug!(node = %id, "add_node");
        let data = NodeData {
            id: id.clone(),
            attr: ObservedMap::from_map(id.clone(), attrs),
            edges: Vec::new(),
            inverse_edges: Vec::new(),
        };
        self.nodes.insert(id.clone(), data);

        // Run callbacks with an immutable view now that the node is live.
        let callbacks = self.on_node_add.clone();
        for cb in &callbacks {
            let proceed = {
                let node = self.get_node(&id).expect("just inserted");
                cb(self, &node)
            };
            if !proceed {
                break;
            }
        }

        self.get_node(&id)
    }

    /// Create an edge `from_id -> to_id` with attributes `attrs` (`None` is
    /// treated as an empty map). Fails with [`GraphError::UnknownNode`] if
    /// either endpoint is missing. Self-loops and parallel edges are both
    /// allowed.
    pub fn add_edge(
        &mut self,
        from_id: &str,
        to_id: &str,
        attrs: Option<AttributeMap>,
    ) -> GraphResult<Edge<'_>> {
        if !self.nodes.contains_key(from_id) {
            return Err(GraphError::UnknownNode(from_id.to_string()));
        }
        if !self.nodes.contains_key(to_id) {
            return Err(GraphError::UnknownNode(to_id.to_string()));
        }
        debug!(from = %from_id, to = %to_id, "add_edge");
        let index = self.edges.len();
        self.edges.push(EdgeData {
            from: from_id.to_string(),
            to: to_id.to_string(),
            attr: attrs.unwrap_or_default(),
        });
        self.nodes.get_mut(from_id).unwrap().edges.push(index);
        self.nodes.get_mut(to_id).unwrap().inverse_edges.push(index);
        Ok(Edge::new(self, index))
    }

    pub fn has_node(&self, id: &str) -> bool {
        self.nodes.contains_key(id)
    }

    pub fn get_node(&self, id: &str) -> GraphResult<Node<'_>> {
        if !self.nodes.contains_key(id) {
            return Err(GraphError::UnknownNode(id.to_string()));
        }
        Ok(Node::new(self, self.nodes.get_key_value(id).unwrap().0))
    }

    /// A mutable view of the node, for `attr_set`/`attr_list_append`.
    pub fn node_mut(&mut self, id: &str) -> GraphResult<NodeMut<'_>> {
        if !self.nodes.contains_key(id) {
            return Err(GraphError::UnknownNode(id.to_string()));
        }
        Ok(NodeMut::new(self, id.to_string()))
    }

    pub fn get_edge(&self, index: EdgeIndex) -> Edge<'_> {
        Edge::new(self, index)
    }

    /// Replace an edge's whole attribute map. The LGF parser relies on this
    /// for `key = value` lines that target the current edge.
    pub fn edge_attr_replace(&mut self, index: EdgeIndex, attrs: AttributeMap) {
        self.edges[index].attr = attrs;
    }

    pub fn edge_attr_set(&mut self, index: EdgeIndex, key: impl Into<String>, value: Value) {
        self.edges[index].attr.insert(key.into(), value);
    }

    /// Node ids in insertion order.
    pub fn keys(&self) -> Vec<String> {
        self.nodes.keys().cloned().collect()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn meta(&self) -> &AttributeMap {
        &self.meta
    }

    pub fn meta_mut(&mut self) -> &mut AttributeMap {
        &mut self.meta
    }

    pub fn meta_set(&mut self, key: impl Into<String>, value: Value) {
        self.meta.insert(key.into(), value);
    }

    /// `{node_count, edge_count}` plus whatever else has been set in `meta`.
    pub fn get_metadata(&self) -> AttributeMap {
        let mut m = self.meta.clone();
        m.insert("node_count".to_string(), Value::Int(self.node_count() as i64));
        m.insert("edge_count".to_string(), Value::Int(self.edge_count() as i64));
        m
    }

    pub fn nodes(&self) -> impl Iterator<Item = Node<'_>> {
        self.nodes.keys().map(move |id| Node::new(self, id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_node_rejects_duplicates() {
        let mut g = Graph::new();
        g.add_node("n1", AttributeMap::new()).unwrap();
        let err = g.add_node("n1", AttributeMap::new()).unwrap_err();
        assert!(matches!(err, GraphError::DuplicateId(id) if id == "n1"));
    }

    #[test]
    fn add_edge_rejects_unknown_endpoints() {
        let mut g = Graph::new();
        g.add_node("n1", AttributeMap::new()).unwrap();
        let err = g.add_edge("n1", "missing", None).unwrap_err();
        assert!(matches!(err, GraphError::UnknownNode(id) if id == "missing"));
    }

    #[test]
    fn self_loops_and_parallel_edges_allowed() {
        let mut g = Graph::new();
        g.add_node("n1", AttributeMap::new()).unwrap();
        g.add_edge("n1", "n1", None).unwrap();
        g.add_edge("n1", "n1", None).unwrap();
        assert_eq!(g.get_node("n1").unwrap().edges().count(), 2);
    }

    #[test]
    fn insertion_order_preserved() {
        let mut g = Graph::new();
        for id in ["c", "a", "b"] {
            g.add_node(id, AttributeMap::new()).unwrap();
        }
        assert_eq!(g.keys(), vec!["c", "a", "b"]);
    }

    #[test]
    fn adjacency_consistency() {
        let mut g = Graph::new();
        g.add_node("a", AttributeMap::new()).unwrap();
        g.add_node("b", AttributeMap::new()).unwrap();
        let e = g.add_edge("a", "b", None).unwrap();
        let idx = e.index();
        assert!(g.get_node("a").unwrap().edges().any(|e| e.index() == idx));
        assert!(g
            .get_node("b")
            .unwrap()
            .inverse_edges()
            .any(|e| e.index() == idx));
    }

    #[test]
    fn on_node_add_callback_runs_and_can_short_circuit() {
        use std::sync::atomic::{AtomicUsize, Ordering};
        let counter = Arc::new(AtomicUsize::new(0));
        let c1 = counter.clone();
        let c2 = counter.clone();
        let mut g = Graph::new();
        g.on_node_add(Arc::new(move |_, _| {
            c1.fetch_add(1, Ordering::SeqCst);
            false
        }));
        g.on_node_add(Arc::new(move |_, _| {
            c2.fetch_add(10, Ordering::SeqCst);
            true
        }));
        g.add_node("n1", AttributeMap::new()).unwrap();
        assert_eq!(counter.load(Ordering::SeqCst), 1);
    }
}
