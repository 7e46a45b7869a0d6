//! JSON codec.
//!
//! Deliberately does **not** reuse [`crate::value::Value`]'s serde derive:
//! that derive is externally tagged (`{"Int": 5}`) so it survives
//! `bincode`, but this format wants the native JSON shape (`5`, `5.0`,
//! `"x"`, `[...]`, `{...}`), with `Int`/`Float` told apart purely by
//! whether the written number has a fractional part. So conversion to/from
//! `serde_json::Value` is hand-written here instead.

use serde_json::{Map, Number, Value as JsonValue};

use crate::error::{GraphError, GraphResult};
use crate::graph::Graph;
use crate::value::{AttributeMap, Value};

fn value_to_json(v: &Value) -> GraphResult<JsonValue> {
    Ok(match v {
        Value::Null => JsonValue::Null,
        Value::Bool(b) => JsonValue::Bool(*b),
        Value::Int(i) => JsonValue::Number(Number::from(*i)),
        Value::Float(f) => {
            let n = Number::from_f64(*f)
                .ok_or_else(|| GraphError::SerdeError(format!("{f} has no JSON representation")))?;
            JsonValue::Number(n)
        }
        Value::String(s) => JsonValue::String(s.clone()),
        Value::List(items) => {
            let mut out = Vec::with_capacity(items.len());
            for item in items {
                out.push(value_to_json(item)?);
            }
            JsonValue::Array(out)
        }
        Value::Map(map) => {
            let mut out = Map::with_capacity(map.len());
            for (k, v) in map {
                out.insert(k.clone(), value_to_json(v)?);
            }
            JsonValue::Object(out)
        }
    })
}

/// `Int` iff the JSON number was written with no fractional part (the
/// writer side above guarantees `Float`s always carry one), so the
/// round-trip recovers the original tag without any side channel.
fn json_to_value(j: &JsonValue) -> Value {
    match j {
        JsonValue::Null => Value::Null,
        JsonValue::Bool(b) => Value::Bool(*b),
        JsonValue::Number(n) => {
            if let Some(i) = n.as_i64() {
                Value::Int(i)
            } else {
                Value::Float(n.as_f64().unwrap_or(f64::NAN))
            }
        }
        JsonValue::String(s) => Value::String(s.clone()),
        JsonValue::Array(items) => Value::List(items.iter().map(json_to_value).collect()),
        JsonValue::Object(map) => {
            let mut out = AttributeMap::new();
            for (k, v) in map {
                out.insert(k.clone(), json_to_value(v));
            }
            Value::Map(out)
        }
    }
}

fn attrs_to_json(attrs: &AttributeMap) -> GraphResult<JsonValue> {
    let mut out = Map::with_capacity(attrs.len());
    for (k, v) in attrs {
        out.insert(k.clone(), value_to_json(v)?);
    }
    Ok(JsonValue::Object(out))
}

fn json_object_to_attrs(obj: &Map<String, JsonValue>) -> AttributeMap {
    obj.iter().map(|(k, v)| (k.clone(), json_to_value(v))).collect()
}

fn graph_to_json(graph: &Graph) -> GraphResult<JsonValue> {
    let meta = attrs_to_json(graph.meta())?;
    let mut nodes = Vec::with_capacity(graph.node_count());
    for id in graph.keys() {
        let node = graph.get_node(&id)?;
        let attr = attrs_to_json(&node.attrs().map(|(k, v)| (k.clone(), v.clone())).collect())?;
        let mut edges = Vec::new();
        for e in node.edges() {
            let mut edge_obj = Map::new();
            edge_obj.insert("to".to_string(), JsonValue::String(e.to_id().to_string()));
            edge_obj.insert("attr".to_string(), attrs_to_json(e.attr())?);
            edges.push(JsonValue::Object(edge_obj));
        }
        let mut node_obj = Map::new();
        node_obj.insert("id".to_string(), JsonValue::String(id));
        node_obj.insert("attr".to_string(), attr);
        node_obj.insert("edges".to_string(), JsonValue::Array(edges));
        nodes.push(JsonValue::Object(node_obj));
    }
    let mut root = Map::new();
    root.insert("meta".to_string(), meta);
    root.insert("nodes".to_string(), JsonValue::Array(nodes));
    Ok(JsonValue::Object(root))
}

fn graph_from_json(root: &JsonValue) -> GraphResult<Graph> {
    let obj = root
        .as_object()
        .ok_or_else(|| GraphError::SerdeError("expected a JSON object at the root".to_string()))?;
    let mut graph = Graph::new();

    if let Some(meta) = obj.get("meta").and_then(JsonValue::as_object) {
        *graph.meta_mut() = json_object_to_attrs(meta);
    }

    let nodes = obj
        .get("nodes")
        .and_then(JsonValue::as_array)
        .ok_or_else(|| GraphError::SerdeError("missing 'nodes' array".to_string()))?;

    for n in nodes {
        let id = node_field_str(n, "id")?;
        let attr_obj = n
            .get("attr")
            .and_then(JsonValue::as_object)
            .ok_or_else(|| GraphError::SerdeError(format!("node {id:?} missing 'attr' object")))?;
        graph.add_node(id, json_object_to_attrs(attr_obj))?;
    }
    for n in nodes {
        let id = node_field_str(n, "id")?;
        let edges = n
            .get("edges")
            .and_then(JsonValue::as_array)
            .ok_or_else(|| GraphError::SerdeError(format!("node {id:?} missing 'edges' array")))?;
        for e in edges {
            let to = node_field_str(e, "to")?;
            let edge_attr_obj = e
                .get("attr")
                .and_then(JsonValue::as_object)
                .ok_or_else(|| GraphError::SerdeError(format!("edge {id:?}->{to:?} missing 'attr'")))?;
            graph.add_edge(&id, &to, Some(json_object_to_attrs(edge_attr_obj)))?;
        }
    }
    Ok(graph)
}

fn node_field_str(obj: &JsonValue, field: &str) -> GraphResult<String> {
    obj.get(field)
        .and_then(JsonValue::as_str)
        .map(str::to_string)
        .ok_or_else(|| GraphError::SerdeError(format!("expected string field {field:?}")))
}

/// Serialize `graph` to a `{meta, nodes: [{id, attr, edges}]}` JSON shape.
pub fn save_to_json(graph: &Graph) -> GraphResult<String> {
    Ok(serde_json::to_string(&graph_to_json(graph)?)?)
}

/// Parse JSON in the shape `save_to_json` produces back into a Graph.
pub fn load_from_json(text: &str) -> GraphResult<Graph> {
    let root: JsonValue = serde_json::from_str(text)?;
    graph_from_json(&root)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::AttributeMap;

    #[test]
    fn int_and_float_distinguished_in_output() {
        let mut g = Graph::new();
        let mut attrs = AttributeMap::new();
        attrs.insert("age".to_string(), Value::Int(30));
        attrs.insert("score".to_string(), Value::Float(5.0));
        g.add_node("n1", attrs).unwrap();
        let text = save_to_json(&g).unwrap();
        assert!(text.contains("\"age\":30"));
        assert!(text.contains("\"score\":5.0"));
    }

    #[test]
    fn round_trip_preserves_structure() {
        let mut g = Graph::new();
        let mut attrs = AttributeMap::new();
        attrs.insert("name".to_string(), Value::String("Alice".into()));
        attrs.insert(
            "labels".to_string(),
            Value::List(vec![Value::String("Person".into())]),
        );
        g.add_node("n1", attrs).unwrap();
        g.add_node("n2", AttributeMap::new()).unwrap();
        let mut edge_attr = AttributeMap::new();
        edge_attr.insert("type".to_string(), Value::String("KNOWS".into()));
        g.add_edge("n1", "n2", Some(edge_attr)).unwrap();
        g.meta_set("source", Value::String("test".into()));

        let text = save_to_json(&g).unwrap();
        let loaded = load_from_json(&text).unwrap();

        assert_eq!(loaded.node_count(), 2);
        assert_eq!(loaded.edge_count(), 1);
        assert_eq!(
            loaded.get_node("n1").unwrap().attr_get("name"),
            Some(&Value::String("Alice".into()))
        );
        assert_eq!(loaded.meta().get("source"), Some(&Value::String("test".into())));
        let edges: Vec<_> = loaded.get_node("n1").unwrap().edges().collect();
        assert_eq!(edges.len(), 1);
        assert_eq!(edges[0].to_id(), "n2");
    }
}
