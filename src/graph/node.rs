use crate::error::{GraphError, GraphResult};
use crate::observed::AttrCallback;
use crate::value::Value;
use crate::visit::{bfs_ids, bfs_search, dfs_ids};

use super::{Edge, Graph};

/// A borrowed, read-only view of a node: its id plus a reference to the
/// owning graph. Traversal methods (`traverse`, `bfs`, `bfs_search`) read
/// through this reference; they do not clone the graph.
#[derive(Clone, Copy)]
pub struct Node<'g> {
    graph: &'g Graph,
    id: &'g str,
}

impl<'g> Node<'g> {
    pub(crate) fn new(graph: &'g Graph, id: &'g str) -> Self {
        Node { graph, id }
    }

    pub fn id(&self) -> &'g str {
        self.id
    }

    pub fn attr_get(&self, key: &str) -> Option<&'g Value> {
        self.graph.nodes[self.id].attr.get(key)
    }

    /// Every `key: value` pair currently on this node.
    pub fn attrs(&self) -> indexmap::map::Iter<'g, String, Value> {
        self.graph.nodes[self.id].attr.iter()
    }

    pub fn labels(&self) -> Vec<String> {
        match self.attr_get("labels") {
            Some(Value::List(items)) => items.iter().filter_map(|v| v.as_str().map(str::to_owned)).collect(),
            _ => Vec::new(),
        }
    }

    /// Outgoing edges, in `add_edge` insertion order.
    pub fn edges(&self) -> impl Iterator<Item = Edge<'g>> + 'g {
        let graph = self.graph;
        graph.nodes[self.id]
            .edges
            .clone()
            .into_iter()
            .map(move |idx| Edge::new(graph, idx))
    }

    /// Edges whose target is this node (non-owning back-references).
    pub fn inverse_edges(&self) -> impl Iterator<Item = Edge<'g>> + 'g {
        let graph = self.graph;
        graph.nodes[self.id]
            .inverse_edges
            .clone()
            .into_iter()
            .map(move |idx| Edge::new(graph, idx))
    }

    /// Iterative depth-first walk starting at this node, in visitation
    /// order (start included). `depth = None` is unbounded; `depth = Some(k)`
    /// includes nodes reachable via at most `k` edges.
    pub fn traverse(&self, depth: Option<usize>) -> Vec<String> {
        dfs_ids(self.graph, self.id, depth)
    }

    /// Level-synchronous BFS from this node. If `target` is given and
    /// reached, the returned list ends with it; if given and unreachable
    /// within `depth`, fails with [`GraphError::NotFound`].
    pub fn bfs(&self, depth: Option<usize>, target: Option<&str>) -> GraphResult<Vec<String>> {
        bfs_ids(self.graph, self.id, depth, target)
    }

    /// Same frontier expansion as `bfs`, but returns the target node
    /// itself (or [`GraphError::NotFound`]).
    pub fn bfs_search(&self, target: &str, depth: Option<usize>) -> GraphResult<Node<'g>> {
        bfs_search(self.graph, self.id, target, depth)
    }
}

/// A mutable view of a node, used for `attr_set`/`attr_list_append`. Holds
/// the node id rather than a map key reference so it can coexist with a
/// `&mut Graph` borrow.
pub struct NodeMut<'g> {
    graph: &'g mut Graph,
    id: String,
}

impl<'g> NodeMut<'g> {
    pub(crate) fn new(graph: &'g mut Graph, id: String) -> Self {
        NodeMut { graph, id }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn attr_get(&self, key: &str) -> Option<&Value> {
        self.graph.nodes[&self.id].attr.get(key)
    }

    pub fn attr_set(&mut self, key: impl Into<String>, value: Value) {
        self.graph.nodes.get_mut(&self.id).unwrap().attr.set(key, value);
    }

    pub fn on_attr_change(&mut self, key: impl Into<String>, cb: AttrCallback) {
        self.graph
            .nodes
            .get_mut(&self.id)
            .unwrap()
            .attr
            .on_change(key, cb);
    }

    /// Append `value` onto the list at `key`. Initializes `key` to an
    /// empty list first if absent. Fails with [`GraphError::TypeMismatch`]
    /// if `key` holds a non-list value.
    pub fn attr_list_append(&mut self, key: &str, value: Value) -> GraphResult<()> {
        let node = self.graph.nodes.get_mut(&self.id).unwrap();
        let mut list = match node.attr.get(key) {
            None => Vec::new(),
            Some(Value::List(items)) => items.clone(),
            Some(_) => {
                return Err(GraphError::TypeMismatch(format!(
                    "attr {key:?} is not a list"
                )))
            }
        };
        list.push(value);
        node.attr.set(key.to_string(), Value::List(list));
        Ok(())
    }

}
