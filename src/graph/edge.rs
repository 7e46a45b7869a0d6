use crate::value::{AttributeMap, Value};

use super::{EdgeIndex, Graph, Node};

/// A borrowed view of one directed edge: an arena index plus a reference to
/// the owning graph.
#[derive(Clone, Copy)]
pub struct Edge<'g> {
    graph: &'g Graph,
    index: EdgeIndex,
}

impl<'g> Edge<'g> {
    pub(crate) fn new(graph: &'g Graph, index: EdgeIndex) -> Self {
        Edge { graph, index }
    }

    pub fn index(&self) -> EdgeIndex {
        self.index
    }

    fn data(&self) -> &'g super::EdgeData {
        &self.graph.edges[self.index]
    }

    pub fn from_id(&self) -> &'g str {
        &self.data().from
    }

    pub fn to_id(&self) -> &'g str {
        &self.data().to
    }

    pub fn from_node(&self) -> Node<'g> {
        Node::new(self.graph, self.graph.nodes.get_key_value(self.from_id()).unwrap().0)
    }

    pub fn to_node(&self) -> Node<'g> {
        Node::new(self.graph, self.graph.nodes.get_key_value(self.to_id()).unwrap().0)
    }

    pub fn attr(&self) -> &'g AttributeMap {
        &self.data().attr
    }

    pub fn edge_type(&self) -> Option<&'g str> {
        self.attr().get("type").and_then(Value::as_str)
    }
}
