use super::{
    boundary::{Boundary, Edge},
    hex::Direction,
    Error, Grid, Hex,
};
use crate::style::Identity;
use bitvec::bitvec;
use log::{debug, trace};
use std::collections::{BTreeSet, VecDeque};

/// A non-empty, connected set of hexes from a single grid.
///
/// Every hex can reach every other through a chain of adjacent member hexes.
/// Iteration is always row-major, so anything rendered from an area is reproducible.
#[derive(Clone, Debug, PartialEq)]
pub struct Area<'g> {
    grid: &'g Grid,
    hexes: BTreeSet<Hex<'g>>,
    pub identity: Identity,
}

impl<'g> Area<'g> {
    /// Construct an area from hexes already known to be connected and non-empty.
    pub(crate) fn from_connected(
        grid: &'g Grid,
        hexes: impl IntoIterator<Item = Hex<'g>>,
    ) -> Area<'g> {
        let hexes: BTreeSet<_> = hexes.into_iter().collect();
        debug_assert!(!hexes.is_empty());
        debug_assert!(hexes.iter().all(|hex| std::ptr::eq(hex.grid(), grid)));
        Area {
            grid,
            hexes,
            identity: Identity::default(),
        }
    }

    /// An area of exactly one hex.
    pub fn single(hex: Hex<'g>) -> Area<'g> {
        Area::from_connected(hex.grid(), std::iter::once(hex))
    }

    /// An area of exactly the supplied hexes.
    ///
    /// Fails unless the hexes are non-empty, share a grid, and are connected.
    pub fn from_hexes(hexes: impl IntoIterator<Item = Hex<'g>>) -> Result<Area<'g>, Error> {
        let hexes: BTreeSet<_> = hexes.into_iter().collect();
        let first = hexes.first().copied().ok_or(Error::EmptyArea)?;
        if !Area::is_connected(hexes.iter().copied()) {
            return Err(Error::Disconnected);
        }
        Ok(Area {
            grid: first.grid(),
            hexes,
            identity: Identity::default(),
        })
    }

    /// Every in-bounds hex within `radius` steps of `center`.
    ///
    /// ```
    /// # use hexlib::geometry::{Area, Grid};
    /// let grid = Grid::new(10, 10).unwrap();
    /// let area = Area::within_radius(grid.hex(6, 6).unwrap(), 2).unwrap();
    /// assert_eq!(area.len(), 19);
    /// ```
    pub fn within_radius(center: Hex<'g>, radius: i32) -> Result<Area<'g>, Error> {
        if radius < 0 {
            return Err(Error::InvalidRadius(radius));
        }
        let radius = radius as u32;
        let grid = center.grid();

        let mut visited = bitvec!(0; grid.cell_count());
        let mut queue = VecDeque::new();
        let mut hexes = Vec::new();
        queue.push_back((center, 0));

        while let Some((hex, depth)) = queue.pop_front() {
            // a hex may be scheduled more than once via alternate routes
            let Some(index) = grid.index(hex.coordinate()) else {
                continue;
            };
            if visited[index] {
                continue;
            }
            visited.set(index, true);
            hexes.push(hex);

            if depth < radius {
                for neighbor in hex.neighbors() {
                    if grid.index(neighbor.coordinate()).is_some_and(|idx| !visited[idx]) {
                        queue.push_back((neighbor, depth + 1));
                    }
                }
            }
        }

        trace!(center:? = center, radius, len = hexes.len(); "flooded radius");
        Ok(Area::from_connected(grid, hexes))
    }

    #[inline]
    pub fn grid(&self) -> &'g Grid {
        self.grid
    }

    /// Iterate over this area's hexes in row-major order.
    pub fn hexes(&self) -> impl '_ + Iterator<Item = Hex<'g>> {
        self.hexes.iter().copied()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.hexes.len()
    }

    /// Always `false`: an area contains at least one hex.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.hexes.is_empty()
    }

    pub fn contains(&self, hex: &Hex<'g>) -> bool {
        self.hexes.contains(hex)
    }

    /// The combined area; fails unless the result is still connected.
    pub fn union(&self, other: &Area<'g>) -> Result<Area<'g>, Error> {
        let mut union = Area::from_hexes(self.hexes().chain(other.hexes()))?;
        union.identity = self.identity.clone();
        Ok(union)
    }

    /// Partition a set of hexes into connected areas.
    ///
    /// Areas are returned in row-major order of their first hex.
    pub fn components(hexes: impl IntoIterator<Item = Hex<'g>>) -> Vec<Area<'g>> {
        let mut remaining: BTreeSet<_> = hexes.into_iter().collect();
        let mut components = Vec::new();

        while let Some(seed) = remaining.pop_first() {
            let mut component = vec![seed];
            let mut queue = VecDeque::from([seed]);
            while let Some(hex) = queue.pop_front() {
                for neighbor in hex.neighbors() {
                    if remaining.remove(&neighbor) {
                        component.push(neighbor);
                        queue.push_back(neighbor);
                    }
                }
            }
            components.push(Area::from_connected(seed.grid(), component));
        }

        components
    }

    /// `true` when the hexes are non-empty and connected.
    pub fn is_connected(hexes: impl IntoIterator<Item = Hex<'g>>) -> bool {
        Area::components(hexes).len() == 1
    }

    /// The outer boundary of this area, traced clockwise.
    ///
    /// The trace starts at the west edge of the first hex in row-major order, which can
    /// never border another member.
    pub fn boundary(&self) -> Boundary<'g> {
        let Some(origin) = self.hexes.first() else {
            return Boundary::default();
        };
        let first = origin.edge(Direction::D);
        let mut edges = vec![first];
        let mut last = first;

        loop {
            let next = match last.next_out() {
                Some(edge) if self.contains(&edge.hex) => edge,
                _ => last.next_in(),
            };
            if next == first {
                break;
            }
            edges.push(next);
            last = next;
        }

        trace!(origin:? = origin, len = edges.len(); "traced boundary");
        Boundary::new(edges)
    }

    /// Grow this area through adjacent hexes until it meets `beyond` or the rim of the
    /// grid. Hexes in `beyond` are never added.
    pub fn fill(&self, beyond: &BTreeSet<Hex<'g>>) -> Area<'g> {
        let mut filled = self.hexes.clone();
        let mut queue: VecDeque<_> = self.hexes().collect();
        while let Some(hex) = queue.pop_front() {
            for neighbor in hex.neighbors() {
                if !beyond.contains(&neighbor) && filled.insert(neighbor) {
                    queue.push_back(neighbor);
                }
            }
        }
        trace!(from = self.len(), to = filled.len(); "filled area");
        Area::from_connected(self.grid, filled)
    }

    /// The voids: connected groups of grid hexes outside this area which cannot reach
    /// the rim of the grid without crossing it.
    ///
    /// These are the hexes inside the outer boundary which are not members.
    pub fn enclosed_areas(&self) -> Vec<Area<'g>> {
        let Ok(inside) = self.boundary().area() else {
            return Vec::new();
        };
        let enclosed = Area::components(inside.hexes().filter(|hex| !self.contains(hex)));
        if !enclosed.is_empty() {
            debug!(voids = enclosed.len(); "area encloses voids");
        }
        enclosed
    }

    /// Boundaries which together draw every edge of every hex in this area.
    ///
    /// Each hex contributes the open boundary along its `A`, `B` and `C` edges. When
    /// `include_boundary` is set, the outer boundary and the boundary of each void are
    /// added, supplying the edges the per-hex boundaries never reach.
    pub fn skeleton(&self, include_boundary: bool) -> Vec<Boundary<'g>> {
        let mut boundaries: Vec<_> = self
            .hexes()
            .map(|hex| {
                [Direction::A, Direction::B, Direction::C]
                    .into_iter()
                    .map(|direction| Edge::new(hex, direction))
                    .collect()
            })
            .collect();

        if include_boundary {
            boundaries.push(self.boundary());
            boundaries.extend(self.enclosed_areas().iter().map(Area::boundary));
        }

        boundaries
    }
}
