mod a_star;
mod config;
mod route;
mod shortest_path;

pub use a_star::AStar;
pub use config::{Heuristic, SearchConfig};
pub use route::Route;

use shortest_path::shortest_path;

use crate::collections::FxIndexMap;

/// Type alias for the node map built by a search
/// N: Node - space on a graph
/// C: Cost of reaching the node from the start
/// The tuple contains (parent_slot, cost) where:
/// - parent_slot is the position of the parent node in the map
/// - cost is the best known total cost to reach this node from the start
pub(crate) type GraphNodeMap<N, C> = FxIndexMap<N, (usize, C)>;
