use crate::graph::NodeId;

use std::{fmt, ops::Index, slice};


/// Result of a path query: the nodes from start to goal and the summed edge weight
/// An empty route means the goal cannot be reached from the start
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Route {
    nodes: Vec<NodeId>,
    cost: f64,
}

impl Route {

    pub(crate) fn new(nodes: Vec<NodeId>, cost: f64) -> Self {
        Self { nodes, cost }
    }

    pub(crate) fn unreachable() -> Self {
        Self::default()
    }

    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    pub fn into_nodes(self) -> Vec<NodeId> {
        self.nodes
    }

    /// Total weight of the traversed edges (0 for an empty route)
    pub fn cost(&self) -> f64 {
        self.cost
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, NodeId> {
        self.nodes.iter()
    }
}

impl Index<usize> for Route {
    type Output = NodeId;
    fn index(&self, index: usize) -> &NodeId {
        &self.nodes[index]
    }
}

impl<'a> IntoIterator for &'a Route {
    type Item = &'a NodeId;
    type IntoIter = slice::Iter<'a, NodeId>;
    fn into_iter(self) -> Self::IntoIter {
        self.nodes.iter()
    }
}

impl IntoIterator for Route {
    type Item = NodeId;
    type IntoIter = std::vec::IntoIter<NodeId>;
    fn into_iter(self) -> Self::IntoIter {
        self.nodes.into_iter()
    }
}

/// `A -> B -> C`
impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, node) in self.nodes.iter().enumerate() {
            if i > 0 {
                f.write_str(" -> ")?;
            }
            write!(f, "{node}")?;
        }
        Ok(())
    }
}
