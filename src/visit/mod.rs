//! Traversal engine: iterative DFS, level-synchronous BFS, and a `rayon`
//! parallel variant of BFS, all over `Graph`'s adjacency.

mod bfs;
mod dfs;
mod parallel;

pub use bfs::{bfs_ids, bfs_search, shortest_path_node_ids, Bfs};
pub use dfs::{dfs_ids, Dfs};
pub use parallel::parallel_bfs_ids;
