//! Binary codec: a compact, self-describing `bincode` encoding of the same
//! logical schema as the JSON codec. Unlike JSON, this reuses
//! [`crate::value::Value`]'s plain (externally tagged) serde derive
//! directly, since `bincode`'s deserializer doesn't support
//! `deserialize_any` and so can't drive an untagged/hand-rolled shape the
//! way `json.rs` does.

use serde::{Deserialize, Serialize};

use crate::error::{GraphError, GraphResult};
use crate::graph::Graph;
use crate::value::AttributeMap;

#[derive(Serialize, Deserialize)]
struct EdgeRecord {
    to: String,
    attr: AttributeMap,
}

#[derive(Serialize, Deserialize)]
struct NodeRecord {
    id: String,
    attr: AttributeMap,
    edges: Vec<EdgeRecord>,
}

#[derive(Serialize, Deserialize)]
struct GraphRecord {
    meta: AttributeMap,
    nodes: Vec<NodeRecord>,
}

fn to_record(graph: &Graph) -> GraphRecord {
    let nodes = graph
        .keys()
        .into_iter()
        .map(|id| {
            let node = graph.get_node(&id).expect("key came from graph.keys()");
            let attr = node.attrs().map(|(k, v)| (k.clone(), v.clone())).collect();
            let edges = node
                .edges()
                .map(|e| EdgeRecord {
                    to: e.to_id().to_string(),
                    attr: e.attr().clone(),
                })
                .collect();
            NodeRecord { id, attr, edges }
        })
        .collect();
    GraphRecord {
        meta: graph.meta().clone(),
        nodes,
    }
}

fn from_record(record: GraphRecord) -> GraphResult<Graph> {
    let mut graph = Graph::new();
    for n in &record.nodes {
        graph.add_node(n.id.clone(), n.attr.clone())?;
    }
    for n in &record.nodes {
        for e in &n.edges {
            graph.add_edge(&n.id, &e.to, Some(e.attr.clone()))?;
        }
    }
    *graph.meta_mut() = record.meta;
    Ok(graph)
}

/// Serialize `graph` to a compact binary blob. `load_from_binary` of the
/// result reconstructs a structurally identical Graph.
pub fn save_to_binary(graph: &Graph) -> GraphResult<Vec<u8>> {
    let record = to_record(graph);
    bincode::serialize(&record).map_err(GraphError::from)
}

/// Inverse of `save_to_binary`.
pub fn load_from_binary(bytes: &[u8]) -> GraphResult<Graph> {
    let record: GraphRecord = bincode::deserialize(bytes).map_err(GraphError::from)?;
    from_record(record)
}
