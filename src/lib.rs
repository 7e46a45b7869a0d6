//! An in-memory, labeled property graph: attributed nodes and edges,
//! directed traversals (DFS, BFS, parallel BFS, shortest path), subgraph
//! construction (filter, expand, path extraction), per-key change
//! notifications on node attributes, bounded random walks, and two
//! lossless serialization formats (JSON and a compact binary encoding),
//! plus a small indentation-based text format (LGF) for building graphs
//! from source files.
//!
//! Storage is an arena-plus-index design: the `Graph` owns a flat edge
//! arena and every node holds indices into it rather than owning `Edge`
//! values directly, the same shape `petgraph`'s `Graph` uses for its
//! `NodeIndex`/`EdgeIndex` pair, adapted here to string node ids.
//!
//! ```
//! use property_graph::prelude::*;
//!
//! let mut g = Graph::new();
//! g.add_node("alice", AttributeMap::new()).unwrap();
//! g.add_node("bob", AttributeMap::new()).unwrap();
//! g.add_edge("alice", "bob", None).unwrap();
//! let visited = g.get_node("alice").unwrap().bfs(None, None).unwrap();
//! assert_eq!(visited, vec!["alice".to_string(), "bob".to_string()]);
//! ```

pub mod embeddings;
pub mod error;
pub mod graph;
pub mod lgf;
pub mod observed;
pub mod predicates;
pub mod prelude;
pub mod random_walk;
pub mod serialization;
pub mod subgraph;
pub mod value;
pub mod visit;
