//! Composable node predicates for [`crate::subgraph::filter_nodes`]: rather
//! than a query language, a predicate is just `Node -> bool`, and
//! `p_and`/`p_or`/`p_not` combine them.

use crate::graph::Node;
use crate::value::Value;

/// A boxed node predicate, parametrized by the graph borrow lifetime so it
/// can close over a `Value` and still be called on `Node<'g>` views from
/// that graph.
pub type Predicate<'g> = Box<dyn Fn(&Node<'g>) -> bool + 'g>;

/// Match nodes where `node.attr[key] == value`.
pub fn attr_equals<'g>(key: impl Into<String>, value: Value) -> Predicate<'g> {
    let key = key.into();
    Box::new(move |node: &Node<'g>| node.attr_get(&key) == Some(&value))
}

/// Match nodes where `member` is found in `node.attr[key]`: element
/// membership for a `List`, key membership for a `Map`, substring match
/// for a `String`. Absent keys and unsupported value kinds never match.
pub fn attr_contains<'g>(key: impl Into<String>, member: Value) -> Predicate<'g> {
    let key = key.into();
    Box::new(move |node: &Node<'g>| match node.attr_get(&key) {
        Some(Value::List(items)) => items.contains(&member),
        Some(Value::Map(map)) => match &member {
            Value::String(k) => map.contains_key(k),
            _ => false,
        },
        Some(Value::String(s)) => match &member {
            Value::String(needle) => s.contains(needle.as_str()),
            _ => false,
        },
        _ => false,
    })
}

/// Logical AND of all `predicates`; vacuously true for an empty slice.
pub fn p_and<'g>(predicates: Vec<Predicate<'g>>) -> Predicate<'g> {
    Box::new(move |node: &Node<'g>| predicates.iter().all(|p| p(node)))
}

/// Logical OR of all `predicates`; vacuously false for an empty slice.
pub fn p_or<'g>(predicates: Vec<Predicate<'g>>) -> Predicate<'g> {
    Box::new(move |node: &Node<'g>| predicates.iter().any(|p| p(node)))
}

/// Negate `predicate`.
pub fn p_not<'g>(predicate: Predicate<'g>) -> Predicate<'g> {
    Box::new(move |node: &Node<'g>| !predicate(node))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Graph;
    use crate::subgraph::filter_nodes;
    use crate::value::AttributeMap;

    fn sample_graph() -> Graph {
        let mut g = Graph::new();
        let mut n1 = AttributeMap::new();
        n1.insert(
            "labels".to_string(),
            Value::List(vec![Value::String("Field".into())]),
        );
        g.add_node("n1", n1).unwrap();
        let mut n2 = AttributeMap::new();
        n2.insert(
            "labels".to_string(),
            Value::List(vec![Value::String("Selector".into())]),
        );
        g.add_node("n2", n2).unwrap();
        g.add_node("n3", AttributeMap::new()).unwrap();
        g
    }

    #[test]
    fn p_or_of_attr_contains() {
        let g = sample_graph();
        let predicate = p_or(vec![
            attr_contains("labels", Value::String("Field".into())),
            attr_contains("labels", Value::String("Selector".into())),
        ]);
        let matched: Vec<String> = filter_nodes(&g, predicate).into_iter().map(|n| n.id().to_string()).collect();
        assert_eq!(matched, vec!["n1".to_string(), "n2".to_string()]);
    }

    #[test]
    fn p_not_inverts() {
        let g = sample_graph();
        let predicate = p_not(attr_contains("labels", Value::String("Field".into())));
        let matched: Vec<String> = filter_nodes(&g, predicate).into_iter().map(|n| n.id().to_string()).collect();
        assert_eq!(matched, vec!["n2".to_string(), "n3".to_string()]);
    }

    #[test]
    fn attr_equals_matches_exact_value() {
        let g = sample_graph();
        let predicate = attr_equals(
            "labels",
            Value::List(vec![Value::String("Field".into())]),
        );
        let matched: Vec<String> = filter_nodes(&g, predicate).into_iter().map(|n| n.id().to_string()).collect();
        assert_eq!(matched, vec!["n1".to_string()]);
    }
}
