//! Iterative depth-first walk, driven by an explicit `stack`/`discovered`
//! pair and a `next(&mut self, graph)` method usable while the graph is
//! still reachable, adapted to `String` node ids and an optional depth
//! bound.

use std::collections::HashSet;

use crate::graph::Graph;

/// An iterative depth-first walk. Neighbors are visited in `edges`
/// insertion order (a `Vec` stack naturally reverses visiting order for
/// siblings pushed together, so we push in reverse to keep the *emitted*
/// order matching insertion order).
pub struct Dfs {
    stack: Vec<(String, usize)>,
    discovered: HashSet<String>,
    depth: Option<usize>,
}

impl Dfs {
    pub fn new(graph: &Graph, start: &str, depth: Option<usize>) -> Self {
        let mut discovered = HashSet::with_capacity(graph.node_count());
        discovered.insert(start.to_string());
        Dfs {
            stack: vec![(start.to_string(), 0)],
            discovered,
            depth,
        }
    }

    pub fn next(&mut self, graph: &Graph) -> Option<String> {
        let (node, node_depth) = self.stack.pop()?;
        let within_depth = match self.depth {
            None => true,
            Some(max) => node_depth < max,
        };
        if within_depth {
            if let Ok(n) = graph.get_node(&node) {
                let mut succs: Vec<String> = n.edges().map(|e| e.to_id().to_string()).collect();
                succs.reverse();
                for succ in succs {
                    if self.discovered.insert(succ.clone()) {
                        self.stack.push((succ, node_depth + 1));
                    }
                }
            }
        }
        Some(node)
    }
}

/// All node ids reachable from `start` within `depth` edges, start included,
/// in DFS visitation order.
pub fn dfs_ids(graph: &Graph, start: &str, depth: Option<usize>) -> Vec<String> {
    let mut dfs = Dfs::new(graph, start, depth);
    let mut out = Vec::new();
    while let Some(id) = dfs.next(graph) {
        out.push(id);
    }
    out
}
