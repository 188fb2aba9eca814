use super::a_star::{a_star, within_budget};
use crate::geometry::{
    boundary::{Boundary, Edge},
    hex::Direction,
    Area, Error, Grid, Hex, Path,
};
use log::debug;
use std::collections::{BTreeMap, BTreeSet};

/// Movement costs over a grid.
///
/// Entering a hex costs that hex's own cost if one has been set, and otherwise the
/// default cost. Without a default, hexes with no cost of their own can't be entered.
///
/// An edge cost overrides the cost of the hex it belongs to, but only for movement
/// which crosses that edge into the hex.
#[derive(Clone, Debug, PartialEq)]
pub struct Topography<'g> {
    grid: &'g Grid,
    default_cost: Option<u32>,
    hex_costs: BTreeMap<Hex<'g>, u32>,
    edge_costs: BTreeMap<Edge<'g>, u32>,
}

impl<'g> Topography<'g> {
    /// A topography in which only hexes with explicit costs are accessible.
    pub fn new(grid: &'g Grid) -> Topography<'g> {
        Topography {
            grid,
            default_cost: None,
            hex_costs: BTreeMap::new(),
            edge_costs: BTreeMap::new(),
        }
    }

    /// A topography in which every hex costs `cost` to enter unless otherwise specified.
    pub fn with_default(grid: &'g Grid, cost: u32) -> Topography<'g> {
        Topography {
            default_cost: Some(cost),
            ..Topography::new(grid)
        }
    }

    pub fn grid(&self) -> &'g Grid {
        self.grid
    }

    pub fn default_cost(&self) -> Option<u32> {
        self.default_cost
    }

    /// The cost of entering `hex`, ignoring edge costs.
    pub fn hex_cost(&self, hex: Hex<'g>) -> Option<u32> {
        self.hex_costs.get(&hex).copied().or(self.default_cost)
    }

    /// The explicit cost of crossing `edge`, if one has been set.
    pub fn edge_cost(&self, edge: Edge<'g>) -> Option<u32> {
        self.edge_costs.get(&edge).copied()
    }

    /// Add `cost` to the cost of entering `hex`, and to every edge cost set on it.
    pub fn increase_hex_cost(&mut self, hex: Hex<'g>, cost: u32) {
        let base = self.default_cost.unwrap_or_default();
        self.hex_costs
            .entry(hex)
            .and_modify(|existing| *existing = existing.saturating_add(cost))
            .or_insert_with(|| base.saturating_add(cost));

        for direction in Direction::iter() {
            if let Some(existing) = self.edge_costs.get_mut(&hex.edge(direction)) {
                *existing = existing.saturating_add(cost);
            }
        }
    }

    /// Set the cost of entering `hex`, discarding any edge costs set on it.
    pub fn override_hex_cost(&mut self, hex: Hex<'g>, cost: u32) {
        self.hex_costs.insert(hex, cost);
        for direction in Direction::iter() {
            self.edge_costs.remove(&hex.edge(direction));
        }
    }

    /// Add `cost` to the cost of crossing `edge`.
    ///
    /// An edge with no cost of its own starts from the cost of its hex. If that hex is
    /// inaccessible, nothing changes.
    pub fn increase_edge_cost(&mut self, edge: Edge<'g>, cost: u32) {
        let base = self.edge_cost(edge).or_else(|| self.hex_cost(edge.hex));
        if let Some(base) = base {
            self.edge_costs.insert(edge, base.saturating_add(cost));
        }
    }

    /// Set the cost of crossing `edge`.
    pub fn override_edge_cost(&mut self, edge: Edge<'g>, cost: u32) {
        self.edge_costs.insert(edge, cost);
    }

    pub fn increase_area_cost(&mut self, area: &Area<'g>, cost: u32) {
        for hex in area.hexes() {
            self.increase_hex_cost(hex, cost);
        }
    }

    pub fn override_area_cost(&mut self, area: &Area<'g>, cost: u32) {
        for hex in area.hexes() {
            self.override_hex_cost(hex, cost);
        }
    }

    pub fn increase_boundary_cost(&mut self, boundary: &Boundary<'g>, cost: u32) {
        for edge in boundary.edges() {
            self.increase_edge_cost(*edge, cost);
        }
    }

    pub fn override_boundary_cost(&mut self, boundary: &Boundary<'g>, cost: u32) {
        for edge in boundary.edges() {
            self.override_edge_cost(*edge, cost);
        }
    }

    /// Every hex which can be entered from at least one direction, in row-major order.
    pub fn accessible(&self) -> BTreeSet<Hex<'g>> {
        if self.default_cost.is_some() {
            return self.grid.hexes().collect();
        }
        self.hex_costs
            .keys()
            .copied()
            .chain(self.edge_costs.keys().map(|edge| edge.hex))
            .collect()
    }

    /// The hex one step from `from` in `direction`, and the cost of moving there.
    ///
    /// `None` if the destination is off the grid or inaccessible.
    pub fn step(&self, from: Hex<'g>, direction: Direction) -> Option<(Hex<'g>, u32)> {
        let to = from.neighbor(direction)?;
        let cost = self
            .edge_cost(to.edge(direction.opposite()))
            .or_else(|| self.hex_cost(to))?;
        Some((to, cost))
    }

    fn successors(&self, from: Hex<'g>) -> impl '_ + Iterator<Item = (Hex<'g>, u32)> {
        Direction::iter().filter_map(move |direction| self.step(from, direction))
    }

    /// The smallest cost any single step could possibly have.
    fn min_step_cost(&self) -> u32 {
        self.default_cost
            .into_iter()
            .chain(self.hex_costs.values().copied())
            .chain(self.edge_costs.values().copied())
            .min()
            .unwrap_or_default()
    }

    /// The cheapest path from `start` to `goal`.
    ///
    /// Fails with [`Error::Unreachable`] if no sequence of accessible hexes connects them.
    pub fn best_path(&self, start: Hex<'g>, goal: Hex<'g>) -> Result<Path<'g>, Error> {
        if !start.same_grid(&goal) || !std::ptr::eq(start.grid(), self.grid) {
            return Err(Error::Unreachable);
        }
        let min_cost = self.min_step_cost();
        let (hexes, cost) = a_star(
            start,
            goal,
            |hex| self.successors(hex),
            |hex| hex.distance(&goal).saturating_mul(min_cost),
        )
        .ok_or(Error::Unreachable)?;

        debug!(
            from:? = start, to:? = goal, steps = hexes.len() - 1, cost;
            "found best path",
        );
        Path::from_hexes(hexes)
    }

    /// Every hex reachable from `start` for a total cost of at most `budget`.
    ///
    /// The start is always included: staying put is free.
    pub fn horizon(&self, start: Hex<'g>, budget: u32) -> Area<'g> {
        let reached = within_budget(start, budget, |hex| self.successors(hex));
        debug!(from:? = start, budget, reached = reached.len(); "computed horizon");
        Area::from_connected(start.grid(), reached)
    }
}
