//! Parallel frontier expansion for large graphs.
//!
//! Each level's frontier is expanded with `rayon`'s parallel iterators; a
//! shared `Mutex<HashSet<String>>` is the first-claim visited set (a worker
//! only enqueues a neighbor into the next frontier if its `insert` call
//! returns `true`), so the result matches the serial traversal's node set
//! exactly even though intra-level order is unspecified.

use std::collections::HashSet;
use std::sync::Mutex;

use rayon::prelude::*;
use tracing::debug;

use crate::error::{GraphError, GraphResult};
use crate::graph::Graph;

/// Semantically identical to [`crate::visit::bfs_ids`] (same reachable set;
/// same early termination if `target` is given) but expands each frontier
/// level's neighbors concurrently.
pub fn parallel_bfs_ids(
    graph: &Graph,
    root: &str,
    target: Option<&str>,
) -> GraphResult<Vec<String>> {
    if !graph.has_node(root) {
        return Err(GraphError::UnknownNode(root.to_string()));
    }
    debug!(root = %root, target = ?target, "parallel_bfs");

    let visited = Mutex::new(HashSet::new());
    visited.lock().unwrap().insert(root.to_string());

    let mut order = vec![root.to_string()];
    let mut frontier = vec![root.to_string()];

    if target == Some(root) {
        return Ok(order);
    }

    while !frontier.is_empty() {
        let next_levels: Vec<Vec<String>> = frontier
            .par_iter()
            .map(|id| {
                let mut claimed = Vec::new();
                if let Ok(n) = graph.get_node(id) {
                    for e in n.edges() {
                        let succ = e.to_id().to_string();
                        let first_claim = visited.lock().unwrap().insert(succ.clone());
                        if first_claim {
                            claimed.push(succ);
                        }
                    }
                }
                claimed
            })
            .collect();

        let mut next_frontier = Vec::new();
        for mut level in next_levels {
            next_frontier.append(&mut level);
        }

        for id in &next_frontier {
            order.push(id.clone());
            if Some(id.as_str()) == target {
                return Ok(order);
            }
        }

        frontier = next_frontier;
    }

    if target.is_some() {
        Err(GraphError::NotFound)
    } else {
        Ok(order)
    }
}
