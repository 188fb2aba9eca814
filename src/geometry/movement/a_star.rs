use crate::geometry::Hex;
use std::collections::{BinaryHeap, HashMap};

/// A* State
// https://doc.rust-lang.org/std/collections/binary_heap/#examples
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub(crate) struct AStarNode<'g> {
    /// Cost so far plus the heuristic's guess at the cost remaining.
    pub estimate: u32,
    /// Cost of the cheapest known route from the start.
    pub cost: u32,
    pub hex: Hex<'g>,
}

// `BinaryHeap` is a max-heap; flip the estimate so it pops the cheapest node first.
// Ties go to the node furthest along, then to the earliest hex in row-major order.
impl Ord for AStarNode<'_> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        other
            .estimate
            .cmp(&self.estimate)
            .then_with(|| self.cost.cmp(&other.cost))
            .then_with(|| other.hex.cmp(&self.hex))
    }
}

impl PartialOrd for AStarNode<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Find the cheapest route from `start` to `goal`.
///
/// `successors` lists the hexes enterable from a hex along with the cost of each step.
/// `heuristic` must never overestimate the remaining cost to `goal`.
///
/// Returns the route, start and goal included, and its total cost.
// https://en.wikipedia.org/wiki/A*_search_algorithm#Pseudocode
pub(crate) fn a_star<'g, S, I>(
    start: Hex<'g>,
    goal: Hex<'g>,
    mut successors: S,
    heuristic: impl Fn(Hex<'g>) -> u32,
) -> Option<(Vec<Hex<'g>>, u32)>
where
    S: FnMut(Hex<'g>) -> I,
    I: IntoIterator<Item = (Hex<'g>, u32)>,
{
    let mut open_set = BinaryHeap::new();
    open_set.push(AStarNode {
        estimate: heuristic(start),
        cost: 0,
        hex: start,
    });

    // key: hex
    // value: hex preceding it on the cheapest known route from start
    let mut came_from = HashMap::new();

    // gscore
    // key: hex
    // value: cost of cheapest route from start to hex
    let mut cheapest_path_cost = HashMap::new();
    cheapest_path_cost.insert(start, 0_u32);

    while let Some(AStarNode { cost, hex, .. }) = open_set.pop() {
        if hex == goal {
            let mut current = hex;
            let mut path = vec![current];
            while let Some(predecessor) = came_from.remove(&current) {
                current = predecessor;
                path.push(current);
            }
            path.reverse();
            return Some((path, cost));
        }

        // stale entry: a cheaper route to this hex was queued after this one
        if cost > cheapest_path_cost.get(&hex).copied().unwrap_or(u32::MAX) {
            continue;
        }

        for (neighbor, step_cost) in successors(hex) {
            let tentative_cheapest_path_cost = cost.saturating_add(step_cost);
            if tentative_cheapest_path_cost
                < cheapest_path_cost
                    .get(&neighbor)
                    .copied()
                    .unwrap_or(u32::MAX)
            {
                // this route to the neighbor is better than any previous one
                came_from.insert(neighbor, hex);
                cheapest_path_cost.insert(neighbor, tentative_cheapest_path_cost);
                open_set.push(AStarNode {
                    estimate: tentative_cheapest_path_cost.saturating_add(heuristic(neighbor)),
                    cost: tentative_cheapest_path_cost,
                    hex: neighbor,
                });
            }
        }
    }

    None
}

/// Every hex reachable from `start` for a total cost of at most `budget`, in the order
/// in which their cheapest routes were settled.
pub(crate) fn within_budget<'g, S, I>(
    start: Hex<'g>,
    budget: u32,
    mut successors: S,
) -> Vec<Hex<'g>>
where
    S: FnMut(Hex<'g>) -> I,
    I: IntoIterator<Item = (Hex<'g>, u32)>,
{
    let mut open_set = BinaryHeap::new();
    open_set.push(AStarNode {
        estimate: 0,
        cost: 0,
        hex: start,
    });

    let mut cheapest_path_cost = HashMap::new();
    cheapest_path_cost.insert(start, 0_u32);
    let mut settled = Vec::new();

    while let Some(AStarNode { cost, hex, .. }) = open_set.pop() {
        if cost > cheapest_path_cost.get(&hex).copied().unwrap_or(u32::MAX) {
            continue;
        }
        settled.push(hex);

        for (neighbor, step_cost) in successors(hex) {
            let tentative = cost.saturating_add(step_cost);
            if tentative <= budget
                && tentative < cheapest_path_cost.get(&neighbor).copied().unwrap_or(u32::MAX)
            {
                cheapest_path_cost.insert(neighbor, tentative);
                open_set.push(AStarNode {
                    estimate: tentative,
                    cost: tentative,
                    hex: neighbor,
                });
            }
        }
    }

    settled
}
