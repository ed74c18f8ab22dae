use super::GraphNodeMap;

/// Construct the shortest path from the goal node back to the start node
/// Returns the ordered path as a vector of nodes from start to goal
/// node_map: GraphNodeMap<N, C> - map of nodes with their parent slot and cost
/// goal_slot: usize - slot of the goal node in the node_map
/// The start node is the entry whose parent slot is usize::MAX
pub(crate) fn shortest_path<N, C>(node_map: &GraphNodeMap<N, C>, goal_slot: usize) -> Vec<N>
where 
    N: Clone,
{

    let mut path = Vec::new();
    let mut current_slot = goal_slot;

    // Trace back from goal to start
    while current_slot != usize::MAX {
        let Some((node, &(parent_slot, _))) = node_map.get_index(current_slot) else {
            break;
        };
        path.push(node.clone());
        current_slot = parent_slot;
    }

    // The path is in reverse order, so reverse it
    path.reverse();
    path
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::collections::fx_index_map;

    #[test]
    fn test_follows_parent_slots() {
        let mut node_map: GraphNodeMap<&str, u32> = fx_index_map(4);
        node_map.insert("A", (usize::MAX, 0));
        node_map.insert("B", (0, 1));
        node_map.insert("C", (0, 3));
        node_map.insert("D", (2, 4));

        assert_eq!(shortest_path(&node_map, 3), vec!["A", "C", "D"]);
        assert_eq!(shortest_path(&node_map, 1), vec!["A", "B"]);
        assert_eq!(shortest_path(&node_map, 0), vec!["A"]);
    }
}
