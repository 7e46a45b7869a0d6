//! Level-synchronous breadth-first search, driven by an explicit
//! `queue: VecDeque` and `discovered` set, adapted to `String` node ids and
//! an optional `depth` bound and `target` early-termination.

use std::collections::{HashSet, VecDeque};

use crate::error::{GraphError, GraphResult};
use crate::graph::{Graph, Node};

pub struct Bfs {
    queue: VecDeque<(String, usize)>,
    discovered: HashSet<String>,
    depth: Option<usize>,
}

impl Bfs {
    pub fn new(graph: &Graph, start: &str, depth: Option<usize>) -> Self {
        let mut discovered = HashSet::with_capacity(graph.node_count());
        discovered.insert(start.to_string());
        let mut queue = VecDeque::new();
        queue.push_back((start.to_string(), 0));
        Bfs {
            queue,
            discovered,
            depth,
        }
    }

    /// Pop the next node in BFS order, enqueuing undiscovered neighbors
    /// (bounded by `depth`) before returning it.
    pub fn next(&mut self, graph: &Graph) -> Option<String> {
        let (node, node_depth) = self.queue.pop_front()?;
        let within_depth = match self.depth {
            None => true,
            Some(max) => node_depth < max,
        };
        if within_depth {
            if let Ok(n) = graph.get_node(&node) {
                for e in n.edges() {
                    let succ = e.to_id().to_string();
                    if self.discovered.insert(succ.clone()) {
                        self.queue.push_back((succ, node_depth + 1));
                    }
                }
            }
        }
        Some(node)
    }
}

/// `Node.bfs`: visited ids in BFS order, start included. If `target` is
/// given, stops as soon as it is dequeued (the returned list ends with
/// it); fails [`GraphError::NotFound`] if `target` is never reached within
/// `depth`.
pub fn bfs_ids(
    graph: &Graph,
    start: &str,
    depth: Option<usize>,
    target: Option<&str>,
) -> GraphResult<Vec<String>> {
    let mut bfs = Bfs::new(graph, start, depth);
    let mut out = Vec::new();
    while let Some(id) = bfs.next(graph) {
        let reached_target = target == Some(id.as_str());
        out.push(id);
        if reached_target {
            return Ok(out);
        }
    }
    if target.is_some() {
        Err(GraphError::NotFound)
    } else {
        Ok(out)
    }
}

/// `Node.bfs_search`: same frontier expansion, returns the target node.
pub fn bfs_search<'g>(
    graph: &'g Graph,
    start: &str,
    target: &str,
    depth: Option<usize>,
) -> GraphResult<Node<'g>> {
    bfs_ids(graph, start, depth, Some(target))?;
    graph.get_node(target)
}

/// Shortest path (by edge count) from `src` to `dst`, returned as the
/// sequence of node ids along one such path (deterministic given the
/// graph's insertion order, via a predecessor map built during a plain
/// BFS). Fails [`GraphError::NotFound`] if `dst` is unreachable.
pub fn shortest_path_node_ids(graph: &Graph, src: &str, dst: &str) -> GraphResult<Vec<String>> {
    if !graph.has_node(src) {
        return Err(GraphError::UnknownNode(src.to_string()));
    }
    if src == dst {
        return Ok(vec![src.to_string()]);
    }
    let mut discovered = HashSet::new();
    discovered.insert(src.to_string());
    let mut queue = VecDeque::new();
    queue.push_back(src.to_string());
    let mut predecessor: std::collections::HashMap<String, String> = std::collections::HashMap::new();

    while let Some(node) = queue.pop_front() {
        if let Ok(n) = graph.get_node(&node) {
            for e in n.edges() {
                let succ = e.to_id().to_string();
                if discovered.insert(succ.clone()) {
                    predecessor.insert(succ.clone(), node.clone());
                    if succ == dst {
                        let mut path = vec![succ];
                        let mut cur = node;
                        loop {
                            path.push(cur.clone());
                            match predecessor.get(&cur) {
                                Some(p) => cur = p.clone(),
                                None => break,
                            }
                        }
                        path.reverse();
                        return Ok(path);
                    }
                    queue.push_back(succ);
                }
            }
        }
    }
    Err(GraphError::NotFound)
}
