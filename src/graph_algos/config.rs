use crate::geometry::Position;


/// Estimate of the remaining cost from a node to the goal
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Heuristic {
    /// Straight-line distance between node positions
    /// Only admissible when every edge is at least as long as the straight line it spans
    #[default]
    Euclidean,
    /// Always 0 - the search degrades to Dijkstra and is optimal for any non-negative weights
    Zero,
}

impl Heuristic {

    pub fn estimate(self, from: &Position, to: &Position) -> f64 {
        match self {
            Heuristic::Euclidean => from.distance(to),
            Heuristic::Zero => 0.0,
        }
    }
}


/// Options for an [`AStar`](super::AStar) search
///
/// Default options:
/// ```
/// # use campus_nav::{Heuristic, SearchConfig};
/// assert_eq!(SearchConfig { heuristic: Heuristic::Euclidean }, SearchConfig::default());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchConfig {
    /// Heuristic used to order the open list (defaults to [`Heuristic::Euclidean`])
    pub heuristic: Heuristic,
}

impl SearchConfig {

    /// Ignores node positions, so the result is a minimum-weight path even when the
    /// data does not satisfy the straight-line assumption
    pub const EXACT: SearchConfig = SearchConfig { heuristic: Heuristic::Zero };

    pub fn with_heuristic(mut self, heuristic: Heuristic) -> Self {
        self.heuristic = heuristic;
        self
    }
}
