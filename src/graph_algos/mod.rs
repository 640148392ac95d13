
pub mod dijkstra;
mod shortest_path;

use crate::collections::FxIndexMap;
use crate::graph::Vertex;

/// Best-known distance from the start vertex, keyed in ascending letter
/// order. Unreached vertices hold the max-value sentinel.
pub type DistanceMap<W> = FxIndexMap<Vertex, W>;

/// Vertex each vertex was reached from on its best-known path.
/// The start vertex maps to None; vertices the scan never reached are absent.
pub type PredecessorMap = FxIndexMap<Vertex, Option<Vertex>>;

/// Completed route between two vertices
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Route<W> {
    pub path: Vec<Vertex>, // start to end inclusive
    pub total_weight: W, // sum of effective edge weights along the path
}
