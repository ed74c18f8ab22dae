//! Shortest walking routes between named locations on a campus map.
//!
//! Locations are nodes with a pixel position on the map image, walking paths are undirected
//! weighted edges. Routes are searched with A*, using the straight-line distance between node
//! positions as heuristic.
//!
//! ```
//! use campus_nav::{AStar, Graph};
//!
//! let mut graph = Graph::new();
//! graph.add_node("A", 0.0, 0.0);
//! graph.add_node("B", 0.0, 10.0);
//! graph.add_node("C", 10.0, 10.0);
//! graph.add_edge("A", "B", 10.0)?;
//! graph.add_edge("B", "C", 10.0)?;
//! graph.add_edge("A", "C", 30.0)?;
//!
//! let route = AStar::default().find_route(&graph, "A", "C")?;
//! assert_eq!(route.to_string(), "A -> B -> C");
//! assert_eq!(route.cost(), 20.0);
//! # Ok::<(), campus_nav::GraphError>(())
//! ```
//!
//! A goal that cannot be reached gives an empty route; unknown node ids are errors.

pub mod campus;
mod collections;
pub mod errors;
pub mod geometry;
pub mod graph;
pub mod graph_algos;

pub use errors::GraphError;
pub use geometry::Position;
pub use graph::{Edge, Graph, Neighbor, NodeId, NodeView};
pub use graph_algos::{AStar, Heuristic, Route, SearchConfig};
