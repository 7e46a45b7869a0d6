//! LGF (Labeled Graph Format): an indentation-sensitive text notation for
//! graphs, with node headers, `-RELATION->`/`<-RELATION-` edge arrows, and
//! indented `key=value` attribute lines.
//!
//! Parsing is a single pass over lines, tracking `current_node`/
//! `current_edge`/`edge_indent` as it goes; `import(...)` recurses with the
//! imported file's directory as the new `base_path`.

mod value_grammar;

use std::path::{Path, PathBuf};

use tracing::warn;

use crate::error::{GraphError, GraphResult};
use crate::graph::{EdgeIndex, Graph};
use crate::value::{AttributeMap, Value};

use value_grammar::{parse_value, strip_quotes};

/// Parse `text` into `graph` (a fresh one if `None`), resolving `import(...)`
/// paths relative to `base_path` (the current directory if `None`).
pub fn parse_lgf(text: &str, graph: Option<Graph>, base_path: Option<&Path>) -> GraphResult<Graph> {
    let mut graph = graph.unwrap_or_default();
    let base = base_path.map(Path::to_path_buf).unwrap_or_default();
    parse_lgf_into(&mut graph, text, &base)?;
    Ok(graph)
}

/// Parse the file at `path`, using its parent directory as `base_path`.
pub fn parse_lgf_file(path: &Path) -> GraphResult<Graph> {
    let text = std::fs::read_to_string(path)?;
    let base = path.parent().map(Path::to_path_buf).unwrap_or_default();
    parse_lgf(&text, None, Some(&base))
}

fn parse_lgf_into(graph: &mut Graph, text: &str, base_path: &Path) -> GraphResult<()> {
    let lines = split_lines_any(text);
    let mut current_node: Option<String> = None;
    let mut current_edge: Option<EdgeIndex> = None;
    let mut edge_indent: usize = 0;

    let mut i = 0usize;
    while i < lines.len() {
        let raw_line = lines[i];
        let line_no = i + 1;
        let stripped = raw_line.trim();

        if stripped.is_empty() || stripped.starts_with('#') {
            i += 1;
            continue;
        }
        let indent = raw_line.chars().take_while(|c| c.is_whitespace()).count();

        if indent == 0 && stripped.starts_with("import(") && stripped.ends_with(')') {
            let inner = strip_quotes(&stripped["import(".len()..stripped.len() - 1]);
            let full_path = base_path.join(inner);
            let imported_text = std::fs::read_to_string(&full_path)?;
            let imported_base: PathBuf = full_path.parent().map(Path::to_path_buf).unwrap_or_default();
            parse_lgf_into(graph, &imported_text, &imported_base)?;
            current_node = None;
            current_edge = None;
            edge_indent = 0;
            i += 1;
            continue;
        }

        if indent == 0 {
            let mut parts = stripped.split_whitespace();
            let node_id = parts.next().ok_or_else(|| parse_error(line_no, stripped))?;
            let labels: Vec<Value> = parts.map(|s| Value::String(s.to_string())).collect();
            if graph.has_node(node_id) {
                graph.node_mut(node_id)?.attr_set("labels", Value::List(labels));
            } else {
                let mut attrs = AttributeMap::new();
                attrs.insert("labels".to_string(), Value::List(labels));
                graph.add_node(node_id, attrs)?;
            }
            current_node = Some(node_id.to_string());
            current_edge = None;
            i += 1;
            continue;
        }

        if stripped.starts_with("<-") {
            let rest = &stripped[2..];
            let dash_pos = rest.find('-').ok_or_else(|| parse_error(line_no, stripped))?;
            let relation = rest[..dash_pos].trim();
            let target = rest[dash_pos + 1..].trim();
            if target.is_empty() {
                return Err(parse_error(line_no, stripped));
            }
            let node_id = current_node.clone().ok_or_else(|| parse_error(line_no, stripped))?;
            ensure_node(graph, target)?;
            let edge = graph.add_edge(target, &node_id, Some(type_attr(relation)))?;
            current_edge = Some(edge.index());
            edge_indent = indent;
            i += 1;
            continue;
        }

        if stripped.starts_with('-') {
            let rest = &stripped[1..];
            let arrow_pos = rest.find("->").ok_or_else(|| parse_error(line_no, stripped))?;
            let relation = rest[..arrow_pos].trim();
            let target = rest[arrow_pos + 2..].trim();
            if target.is_empty() {
                return Err(parse_error(line_no, stripped));
            }
            let node_id = current_node.clone().ok_or_else(|| parse_error(line_no, stripped))?;
            ensure_node(graph, target)?;
            let edge = graph.add_edge(&node_id, target, Some(type_attr(relation)))?;
            current_edge = Some(edge.index());
            edge_indent = indent;
            i += 1;
            continue;
        }

        let (key_part, value_part) = stripped
            .split_once('=')
            .ok_or_else(|| parse_error(line_no, stripped))?;
        let key = key_part.trim().to_string();
        let value_raw = value_part.trim();

        let value = if value_raw.starts_with('[') && !value_raw.contains(']') {
            let mut items = Vec::new();
            i += 1;
            loop {
                if i >= lines.len() {
                    return Err(parse_error(line_no, "unterminated list"));
                }
                let item_line = lines[i].trim();
                if let Some(pos) = item_line.find(']') {
                    let before = item_line[..pos].trim().trim_end_matches(',').trim();
                    if !before.is_empty() {
                        items.push(parse_value(before));
                    }
                    i += 1;
                    break;
                }
                let item = item_line.trim_end_matches(',').trim();
                if !item.is_empty() {
                    items.push(parse_value(item));
                }
                i += 1;
            }
            Value::List(items)
        } else {
            i += 1;
            parse_value(value_raw)
        };

        match current_edge {
            Some(edge_idx) if indent > edge_indent => {
                graph.edge_attr_set(edge_idx, key, value);
            }
            _ => {
                let node_id = current_node.clone().ok_or_else(|| parse_error(line_no, stripped))?;
                graph.node_mut(&node_id)?.attr_set(key, value);
                current_edge = None;
            }
        }
    }

    Ok(())
}

fn ensure_node(graph: &mut Graph, id: &str) -> GraphResult<()> {
    if !graph.has_node(id) {
        graph.add_node(id, AttributeMap::new())?;
    }
    Ok(())
}

fn type_attr(relation: &str) -> AttributeMap {
    let mut m = AttributeMap::new();
    m.insert("type".to_string(), Value::String(relation.to_string()));
    m
}

fn parse_error(line: usize, fragment: &str) -> GraphError {
    warn!(line, fragment, "lgf parse error");
    GraphError::ParseError {
        line,
        fragment: fragment.to_string(),
    }
}

/// Split on LF, CR, or CRLF. `str::lines` alone misses lone-CR endings,
/// which the format's file-encoding contract allows.
fn split_lines_any(text: &str) -> Vec<&str> {
    let bytes = text.as_bytes();
    let mut lines = Vec::new();
    let mut start = 0usize;
    let mut i = 0usize;
    while i < bytes.len() {
        match bytes[i] {
            b'\n' => {
                lines.push(&text[start..i]);
                i += 1;
                start = i;
            }
            b'\r' => {
                lines.push(&text[start..i]);
                i += 1;
                if i < bytes.len() && bytes[i] == b'\n' {
                    i += 1;
                }
                start = i;
            }
            _ => i += 1,
        }
    }
    if start < bytes.len() {
        lines.push(&text[start..]);
    }
    lines
}
