//! Graph persistence: a JSON codec with a native-looking value shape and a
//! compact binary codec, both lossless round-trips of the full Graph
//! (nodes, edges, both attribute maps, meta).

mod binary;
mod json;

pub use binary::{load_from_binary, save_to_binary};
pub use json::{load_from_json, save_to_json};
