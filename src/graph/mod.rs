mod node_id;

pub use node_id::NodeId;

use crate::errors::GraphError;
use crate::collections::FxIndexMap;
use crate::geometry::Position;

use std::fmt;
use indexmap::map::Entry::{Occupied, Vacant};


/// One side of an undirected edge, as seen from the node that owns the adjacency list
#[derive(Clone, Debug, PartialEq)]
pub struct Neighbor {
    pub node: NodeId,
    pub distance: f64,
    pub(crate) index: usize, // index of `node` in the graph's node map
}

/// Undirected weighted connection, kept in the order it was added
#[derive(Clone, Debug, PartialEq)]
pub struct Edge {
    pub from: NodeId,
    pub to: NodeId,
    pub distance: f64,
}

/// Read-only view of a registered node
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NodeView<'a> {
    pub id: &'a NodeId,
    pub position: Position,
}

/// Adjacency record of a node: its position and both-direction edge entries
#[derive(Clone, Debug)]
struct Adjacency {
    id: NodeId,
    position: Position,
    neighbors: Vec<Neighbor>,
}


/// Undirected weighted graph of named locations
///
/// Each edge is stored twice, once in the adjacency list of each endpoint, so neighbors can be
/// enumerated from either side. Nodes keep their insertion order, which is also the order of
/// [`Graph::all_nodes`] and [`Graph::edges`].
///
/// The graph is meant to be built once and then only queried; nodes and edges cannot be removed.
#[derive(Clone, Debug, Default)]
pub struct Graph {
    nodes: FxIndexMap<NodeId, Adjacency>,
    edges: Vec<Edge>,
}

impl Graph {

    pub fn new() -> Self {
        Self::default()
    }

    /// Register a node at the given position
    /// Returns false (and keeps the old position) if the id is already registered
    pub fn add_node(&mut self, id: impl Into<NodeId>, top: f64, left: f64) -> bool {
        let id = id.into();
        match self.nodes.entry(id) {
            Vacant(e) => {
                let id = e.key().clone();
                e.insert(Adjacency {
                    id,
                    position: Position::new(top, left),
                    neighbors: Vec::new(),
                });
                true
            }
            Occupied(_) => false,
        }
    }

    /// Connect two registered nodes with an undirected edge
    /// Both endpoints are checked before anything is written, so a failed call leaves the graph
    /// as it was. Parallel edges between the same pair are kept side by side.
    pub fn add_edge(&mut self, id1: &str, id2: &str, distance: f64) -> Result<(), GraphError> {
        let from = self.index_of(id1)?;
        let to = self.index_of(id2)?;

        let from_id = self.nodes[from].id.clone();
        let to_id = self.nodes[to].id.clone();

        if !distance.is_finite() || distance < 0.0 {
            return Err(GraphError::InvalidWeight { from: from_id, to: to_id, distance });
        }

        self.nodes[from].neighbors.push(Neighbor { node: to_id.clone(), distance, index: to });
        self.nodes[to].neighbors.push(Neighbor { node: from_id.clone(), distance, index: from });
        self.edges.push(Edge { from: from_id, to: to_id, distance });

        Ok(())
    }

    /// Adjacency list of `id`, in the order the edges were added
    pub fn neighbors(&self, id: &str) -> Result<&[Neighbor], GraphError> {
        let index = self.index_of(id)?;
        Ok(self.neighbors_at(index))
    }

    pub fn position(&self, id: &str) -> Result<Position, GraphError> {
        let index = self.index_of(id)?;
        Ok(self.position_at(index))
    }

    /// All nodes in insertion order
    pub fn all_nodes(&self) -> impl ExactSizeIterator<Item = NodeView<'_>> + '_ {
        self.nodes.values().map(|adjacency| NodeView {
            id: &adjacency.id,
            position: adjacency.position,
        })
    }

    /// Every undirected edge once, in insertion order
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn contains(&self, id: &str) -> bool {
        self.nodes.contains_key(id)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Straight-line distance between two registered nodes
    pub fn heuristic(&self, id1: &str, id2: &str) -> Result<f64, GraphError> {
        let a = self.position(id1)?;
        let b = self.position(id2)?;
        Ok(a.distance(&b))
    }

    /// Edges shorter than the straight line between their endpoints
    ///
    /// The Euclidean heuristic only guarantees shortest paths when no such edge exists.
    /// These are reported as-is; which of the data points is wrong is up to the caller.
    pub fn heuristic_violations(&self) -> impl Iterator<Item = &Edge> + '_ {
        self.edges.iter().filter(move |edge| {
            let a = self.nodes[edge.from.as_str()].position;
            let b = self.nodes[edge.to.as_str()].position;
            edge.distance * edge.distance < a.squared_distance(&b)
        })
    }

    pub(crate) fn index_of(&self, id: &str) -> Result<usize, GraphError> {
        self.nodes.get_index_of(id).ok_or_else(|| GraphError::unknown(id))
    }

    pub(crate) fn id_at(&self, index: usize) -> &NodeId {
        &self.nodes[index].id
    }

    pub(crate) fn position_at(&self, index: usize) -> Position {
        self.nodes[index].position
    }

    pub(crate) fn neighbors_at(&self, index: usize) -> &[Neighbor] {
        &self.nodes[index].neighbors
    }
}

/// One line per node: `id -> [neighbor (distance), ...]`
impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for adjacency in self.nodes.values() {
            write!(f, "{} -> [", adjacency.id)?;
            for (i, neighbor) in adjacency.neighbors.iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{} ({})", neighbor.node, neighbor.distance)?;
            }
            writeln!(f, "]")?;
        }
        Ok(())
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> Graph {
        let mut graph = Graph::new();
        graph.add_node("A", 0.0, 0.0);
        graph.add_node("B", 0.0, 10.0);
        graph.add_node("C", 10.0, 10.0);
        graph.add_edge("A", "B", 10.0).unwrap();
        graph.add_edge("B", "C", 10.0).unwrap();
        graph.add_edge("A", "C", 30.0).unwrap();
        graph
    }

    #[test]
    fn test_add_node_is_idempotent() {
        let mut graph = Graph::new();
        assert!(graph.add_node("A", 1.0, 2.0));
        assert!(!graph.add_node("A", 5.0, 5.0));

        assert_eq!(graph.node_count(), 1);
        assert_eq!(graph.position("A").unwrap(), Position::new(1.0, 2.0));
    }

    #[test]
    fn test_edges_are_symmetric() {
        let graph = triangle();

        for edge in graph.edges() {
            let forward = graph.neighbors(edge.from.as_str()).unwrap();
            let backward = graph.neighbors(edge.to.as_str()).unwrap();
            assert!(forward.iter().any(|n| n.node == edge.to && n.distance == edge.distance));
            assert!(backward.iter().any(|n| n.node == edge.from && n.distance == edge.distance));
        }
        assert_eq!(graph.edge_count(), 3);
    }

    #[test]
    fn test_neighbors_keep_insertion_order() {
        let graph = triangle();
        let names: Vec<_> = graph.neighbors("A").unwrap().iter().map(|n| n.node.as_str()).collect();
        assert_eq!(names, vec!["B", "C"]);

        let distances: Vec<_> = graph.neighbors("C").unwrap().iter().map(|n| n.distance).collect();
        assert_eq!(distances, vec![10.0, 30.0]);
    }

    #[test]
    fn test_unknown_endpoint_leaves_graph_unmodified() {
        let mut graph = triangle();
        let before = graph.to_string();

        assert_eq!(graph.add_edge("A", "Z", 1.0), Err(GraphError::unknown("Z")));
        assert_eq!(graph.add_edge("Z", "A", 1.0), Err(GraphError::unknown("Z")));

        assert_eq!(graph.to_string(), before);
        assert_eq!(graph.edge_count(), 3);
        assert_eq!(graph.neighbors("A").unwrap().len(), 2);
    }

    #[test]
    fn test_invalid_weights_are_rejected() {
        let mut graph = triangle();

        for distance in [-1.0, f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let result = graph.add_edge("A", "B", distance);
            assert!(matches!(result, Err(GraphError::InvalidWeight { .. })));
        }
        assert_eq!(graph.edge_count(), 3);

        // zero is a valid traversal cost
        graph.add_edge("A", "B", 0.0).unwrap();
        assert_eq!(graph.edge_count(), 4);
    }

    #[test]
    fn test_parallel_edges_are_kept() {
        let mut graph = triangle();
        graph.add_edge("A", "B", 4.0).unwrap();

        let to_b: Vec<_> = graph.neighbors("A").unwrap().iter()
            .filter(|n| n.node == "B")
            .map(|n| n.distance)
            .collect();
        assert_eq!(to_b, vec![10.0, 4.0]);
    }

    #[test]
    fn test_lookups_on_unknown_nodes() {
        let graph = triangle();
        assert_eq!(graph.neighbors("X"), Err(GraphError::unknown("X")));
        assert_eq!(graph.position("X"), Err(GraphError::unknown("X")));
        assert_eq!(graph.heuristic("A", "X"), Err(GraphError::unknown("X")));
        assert!(!graph.contains("X"));
        assert!(graph.contains("A"));
    }

    #[test]
    fn test_all_nodes() {
        let graph = triangle();
        let nodes: Vec<_> = graph.all_nodes()
            .map(|node| (node.id.as_str(), node.position.top, node.position.left))
            .collect();
        assert_eq!(nodes, vec![("A", 0.0, 0.0), ("B", 0.0, 10.0), ("C", 10.0, 10.0)]);
    }

    #[test]
    fn test_heuristic_violations() {
        let mut graph = triangle();
        assert_eq!(graph.heuristic_violations().count(), 0);

        // A-C is ~14.14 apart in a straight line
        graph.add_edge("A", "C", 12.0).unwrap();
        let violations: Vec<_> = graph.heuristic_violations().collect();
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].distance, 12.0);
    }

    #[test]
    fn test_display() {
        let graph = triangle();
        assert_eq!(
            graph.to_string(),
            "A -> [B (10), C (30)]\nB -> [A (10), C (10)]\nC -> [B (10), A (30)]\n"
        );
    }
}
