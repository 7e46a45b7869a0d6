//! Convenience re-exports for the common call surface: `use
//! property_graph::prelude::*;` brings in the graph types, the value
//! domain, the error type, and the free-function APIs (predicates,
//! random walks, LGF parsing, serialization).

pub use crate::embeddings::attach_embeddings_from_meta;
pub use crate::error::{GraphError, GraphResult};
pub use crate::graph::{Edge, Graph, Node, NodeMut};
pub use crate::lgf::{parse_lgf, parse_lgf_file};
pub use crate::predicates::{attr_contains, attr_equals, p_and, p_not, p_or, Predicate};
pub use crate::serialization::{load_from_binary, load_from_json, save_to_binary, save_to_json};
pub use crate::subgraph::Selector;
pub use crate::value::{AttributeMap, Value};
