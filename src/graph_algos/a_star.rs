use crate::errors::GraphError;
use crate::collections::fx_index_map;
use crate::graph::{Graph, NodeId};
use super::{shortest_path, GraphNodeMap, Route, SearchConfig};

use std::{
    collections::BinaryHeap,
    cmp::Ordering
};
use indexmap::map::Entry::{Occupied, Vacant};
use log::{debug, trace};



/// Entry on the open list
/// A node may have several entries; only the one matching its best known cost is expanded
#[derive(Debug)]
struct Node {
    slot: usize, // slot in the closed_list
    cost: f64, // Cost to reach this node
    f_cost: f64, // Total cost = cost + h(n) aka estimated cost
    seq: u64, // push order, breaks f_cost ties
}

impl Ord for Node {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap pops the greatest entry: lowest f_cost first, then the earliest pushed
        other.f_cost.total_cmp(&self.f_cost)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}
impl PartialOrd for Node {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}
impl Eq for Node {}


/// A* Algorithm over a [`Graph`]
/// https://en.wikipedia.org/wiki/A*_search_algorithm
///
/// The engine only holds its configuration. All search state lives inside a single call,
/// so one `AStar` can serve any number of queries, from any number of threads, against a
/// graph that is no longer being modified.
///
/// Ties between open entries with the same estimated total cost go to the entry pushed
/// first, i.e. the node discovered (or improved) earliest. Neighbors are scanned in the order
/// their edges were added, so among equal-cost paths the one using earlier edges wins.
#[derive(Clone, Copy, Debug, Default)]
pub struct AStar {
    config: SearchConfig,
}

impl AStar {

    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> SearchConfig {
        self.config
    }

    /// Node ids from `start` to `goal` inclusive, or an empty vector if `goal` is unreachable
    pub fn find_path(&self, graph: &Graph, start: &str, goal: &str) -> Result<Vec<NodeId>, GraphError> {
        Ok(self.find_route(graph, start, goal)?.into_nodes())
    }

    /// Like [`AStar::find_path`], also reporting the summed edge weight of the path
    ///
    /// The returned path is a minimum-weight path when the heuristic is admissible for the
    /// graph's data: with [`Heuristic::Euclidean`](super::Heuristic::Euclidean) every edge must
    /// be at least as long as the straight line between its endpoints
    /// (see [`Graph::heuristic_violations`]).
    pub fn find_route(&self, graph: &Graph, start: &str, goal: &str) -> Result<Route, GraphError> {
        let start_index = graph.index_of(start)?;
        let goal_index = graph.index_of(goal)?;

        debug!("searching path from `{start}` to `{goal}` with {:?} heuristic", self.config.heuristic);

        let (node_map, goal_slot) = self.build_graph(graph, start_index, goal_index);

        match goal_slot {
            Some(goal_slot) => {
                let cost = node_map[goal_slot].1;
                let nodes: Vec<NodeId> = shortest_path(&node_map, goal_slot)
                    .into_iter()
                    .map(|index| graph.id_at(index).clone())
                    .collect();

                debug!("found path from `{start}` to `{goal}`: {} nodes, cost {cost}, {} nodes visited",
                    nodes.len(), node_map.len());
                Ok(Route::new(nodes, cost))
            }
            None => {
                debug!("no path from `{start}` to `{goal}`, {} nodes visited", node_map.len());
                Ok(Route::unreachable())
            }
        }
    }


    /// Traverses the graph from `start` until `goal` is expanded
    /// Returns the map of visited node indices with their parent slot and best cost,
    /// along with the slot of the goal node if it was reached
    fn build_graph(&self, graph: &Graph, start: usize, goal: usize) -> (GraphNodeMap<usize, f64>, Option<usize>) {

        let goal_position = graph.position_at(goal);
        let heuristic_fn = |index: usize| {
            self.config.heuristic.estimate(&graph.position_at(index), &goal_position)
        };

        // Open List
        // Nodes that need to be evaluated, implemented as priority queue
        // Improved nodes are pushed again instead of updated in place
        let mut open_list: BinaryHeap<Node> = BinaryHeap::new();
        let mut seq: u64 = 0;

        // Every node reached so far with (parent_slot, best cost from start)
        // for the start node, parent_slot is set to usize::MAX to indicate it has no parent
        let mut closed_list: GraphNodeMap<usize, f64> = fx_index_map(graph.node_count());

        let start_slot = closed_list.insert_full(start, (usize::MAX, 0.0)).0;
        open_list.push(Node {
            slot: start_slot,
            cost: 0.0,
            f_cost: heuristic_fn(start),
            seq,
        });

        while let Some(Node { slot, cost, .. }) = open_list.pop() {

            let Some((&index, &(_, c))) = closed_list.get_index(slot) else {
                continue;
            };

            // A cheaper path to this node was found after this entry was pushed
            if cost > c {
                continue;
            }

            if index == goal {
                return (closed_list, Some(slot));
            }

            trace!("expanding `{}` at cost {c}", graph.id_at(index));

            for neighbor in graph.neighbors_at(index) {

                // Confirmed cost through the current node, not heuristic
                let new_cost = c + neighbor.distance;

                let neighbor_slot = match closed_list.entry(neighbor.index) {
                    Vacant(e) => {
                        let neighbor_slot = e.index();
                        e.insert((slot, new_cost));
                        neighbor_slot
                    }
                    Occupied(mut e) => {
                        if new_cost < e.get().1 {
                            e.insert((slot, new_cost));
                            e.index()
                        } else {
                            continue;
                        }
                    }
                };

                let f_cost = new_cost + heuristic_fn(neighbor.index);
                trace!("  `{}` improved to cost {new_cost}, f {f_cost}", neighbor.node);

                seq += 1;
                open_list.push(Node {
                    slot: neighbor_slot,
                    cost: new_cost,
                    f_cost,
                    seq,
                });
            }
        }

        (closed_list, None)
    }
}
