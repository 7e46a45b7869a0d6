//! Embedding propagation: a callback elsewhere in the pipeline collects
//! per-node embeddings into `graph.meta` as they're computed, and this
//! reads them back out onto each node's `embeddings` attribute list.

use crate::error::{GraphError, GraphResult};
use crate::graph::Graph;
use crate::value::Value;

/// Reads `meta["embedding"]` and `meta["embedding_ids"]` (each expected to
/// be a `Value::List` of the same length) and, for each `(embedding,
/// node_id)` pair, appends `embedding` onto that node's `embeddings`
/// attribute list. Fails [`GraphError::TypeMismatch`] if either meta key is
/// missing, isn't a list, the two lists differ in length, or a `node_id`
/// isn't a `Value::String` naming a live node.
pub fn attach_embeddings_from_meta(graph: &mut Graph) -> GraphResult<()> {
    let embeddings = match graph.meta().get("embedding") {
        Some(Value::List(items)) => items.clone(),
        _ => {
            return Err(GraphError::TypeMismatch(
                "graph.meta must contain a list at 'embedding'".to_string(),
            ))
        }
    };
    let node_ids = match graph.meta().get("embedding_ids") {
        Some(Value::List(items)) => items.clone(),
        _ => {
            return Err(GraphError::TypeMismatch(
                "graph.meta must contain a list at 'embedding_ids'".to_string(),
            ))
        }
    };
    if embeddings.len() != node_ids.len() {
        return Err(GraphError::TypeMismatch(format!(
            "embedding ({}) and embedding_ids ({}) length mismatch",
            embeddings.len(),
            node_ids.len()
        )));
    }

    for (embedding, node_id) in embeddings.into_iter().zip(node_ids) {
        let id = node_id.as_str().ok_or_else(|| {
            GraphError::TypeMismatch("embedding_ids entries must be strings".to_string())
        })?;
        graph.node_mut(id)?.attr_list_append("embeddings", embedding)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::AttributeMap;

    #[test]
    fn propagates_embeddings_by_position() {
        let mut g = Graph::new();
        g.add_node("n1", AttributeMap::new()).unwrap();
        g.add_node("n2", AttributeMap::new()).unwrap();
        g.meta_set(
            "embedding",
            Value::List(vec![
                Value::List(vec![Value::Float(0.1), Value::Float(0.2)]),
                Value::List(vec![Value::Float(0.3), Value::Float(0.4)]),
            ]),
        );
        g.meta_set(
            "embedding_ids",
            Value::List(vec![Value::String("n1".into()), Value::String("n2".into())]),
        );
        attach_embeddings_from_meta(&mut g).unwrap();
        let n1 = g.get_node("n1").unwrap();
        assert_eq!(
            n1.attr_get("embeddings"),
            Some(&Value::List(vec![Value::List(vec![
                Value::Float(0.1),
                Value::Float(0.2)
            ])]))
        );
    }

    #[test]
    fn missing_meta_key_is_type_mismatch() {
        let mut g = Graph::new();
        assert!(matches!(
            attach_embeddings_from_meta(&mut g),
            Err(GraphError::TypeMismatch(_))
        ));
    }

    #[test]
    fn length_mismatch_is_type_mismatch() {
        let mut g = Graph::new();
        g.meta_set("embedding", Value::List(vec![Value::Int(1)]));
        g.meta_set("embedding_ids", Value::List(vec![]));
        assert!(matches!(
            attach_embeddings_from_meta(&mut g),
            Err(GraphError::TypeMismatch(_))
        ));
    }
}
