//! Bounded random walks over a graph's outgoing edges: a walk steps from
//! node to node along outgoing edges under a revisit policy, stopping at a
//! length bound or a dead end.

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

use crate::error::GraphResult;
use crate::graph::Graph;

/// One step of a walk once it has been decided to continue: the node
/// landed on and, if edge types are requested, the edge's type string.
struct Step {
    node_id: String,
    edge_label: Option<String>,
}

/// `Graph.random_walks`: up to `count` walks rooted at `start_id`, each
/// discarded if it has fewer than `min_length` nodes. `edge_type_field`
/// names the edge attribute coerced to string when `include_edge_types` is
/// set (`"type"` in the LGF convention, but the caller may use any key).
pub fn random_walks<R: Rng + ?Sized>(
    rng: &mut R,
    graph: &Graph,
    start_id: &str,
    length: usize,
    count: usize,
    min_length: usize,
    allow_revisit: bool,
    include_edge_types: bool,
    edge_type_field: &str,
) -> GraphResult<Vec<Vec<String>>> {
    graph.get_node(start_id)?;

    let mut walks = Vec::new();
    for _ in 0..count {
        let steps = one_walk(rng, graph, start_id, length, allow_revisit, edge_type_field);
        let node_count = steps.len() + 1;
        if node_count < min_length {
            continue;
        }
        walks.push(render_walk(start_id, &steps, include_edge_types));
    }
    debug!(start = %start_id, requested = count, kept = walks.len(), "random_walks");
    Ok(walks)
}

fn one_walk<R: Rng + ?Sized>(
    rng: &mut R,
    graph: &Graph,
    start_id: &str,
    length: usize,
    allow_revisit: bool,
    edge_type_field: &str,
) -> Vec<Step> {
    let mut visited = vec![start_id.to_string()];
    let mut current = start_id.to_string();
    let mut steps = Vec::new();

    while visited.len() < length {
        let node = match graph.get_node(&current) {
            Ok(n) => n,
            Err(_) => break,
        };
        let candidates: Vec<(String, Option<String>)> = node
            .edges()
            .filter(|e| allow_revisit || !visited.contains(&e.to_id().to_string()))
            .map(|e| {
                let label = e.attr().get(edge_type_field).map(|v| v.coerce_to_string());
                (e.to_id().to_string(), label)
            })
            .collect();
        let Some((next_id, edge_label)) = candidates.choose(rng).cloned() else {
            break;
        };
        steps.push(Step {
            node_id: next_id.clone(),
            edge_label,
        });
        visited.push(next_id.clone());
        current = next_id;
    }
    steps
}

fn render_walk(start_id: &str, steps: &[Step], include_edge_types: bool) -> Vec<String> {
    let mut out = vec![start_id.to_string()];
    for step in steps {
        if include_edge_types {
            out.push(step.edge_label.clone().unwrap_or_default());
        }
        out.push(step.node_id.clone());
    }
    out
}

impl Graph {
    /// `Graph.random_walks`: up to `count` random walks rooted at
    /// `start_id`, using the thread-local RNG.
    #[allow(clippy::too_many_arguments)]
    pub fn random_walks(
        &self,
        start_id: &str,
        length: usize,
        count: usize,
        min_length: usize,
        allow_revisit: bool,
        include_edge_types: bool,
        edge_type_field: &str,
    ) -> GraphResult<Vec<Vec<String>>> {
        let mut rng = rand::thread_rng();
        random_walks(
            &mut rng,
            self,
            start_id,
            length,
            count,
            min_length,
            allow_revisit,
            include_edge_types,
            edge_type_field,
        )
    }
}
