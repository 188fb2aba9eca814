use super::{
    hex::{Direction, Steps},
    Area, Error, Grid, Hex,
};
use crate::style::Identity;
use log::debug;
use std::collections::VecDeque;

/// Follow `steps` from `start`, returning every hex visited, `start` included.
pub(crate) fn trace<'g>(start: Hex<'g>, steps: &Steps) -> Result<Vec<Hex<'g>>, Error> {
    let mut hexes = vec![start];
    let mut current = start;

    for step in steps.iter() {
        if step.repeat {
            while let Some(next) = current.neighbor(step.direction) {
                hexes.push(next);
                current = next;
            }
            continue;
        }

        match current.go(step.direction) {
            Ok(next) => {
                hexes.push(next);
                current = next;
            }
            Err(_) if steps.is_lenient() => break,
            Err(err) => return Err(err),
        }
    }

    Ok(hexes)
}

/// An ordered sequence of hexes in which each hex is adjacent to the next.
///
/// A path always contains at least its starting hex. It may revisit hexes.
#[derive(Clone, Debug, PartialEq)]
pub struct Path<'g> {
    hexes: Vec<Hex<'g>>,
    pub identity: Identity,
}

impl<'g> Path<'g> {
    fn new(hexes: Vec<Hex<'g>>) -> Path<'g> {
        Path {
            hexes,
            identity: Identity::default(),
        }
    }

    /// Build a path by following `steps` from `start`.
    pub fn from_steps(start: Hex<'g>, steps: &Steps) -> Result<Path<'g>, Error> {
        trace(start, steps).map(Path::new)
    }

    /// Build a path by parsing and following a step-string from `start`.
    ///
    /// ```
    /// # use hexlib::geometry::{Grid, Path};
    /// let grid = Grid::new(10, 10).unwrap();
    /// let path = Path::from_step_str(grid.hex(3, 1).unwrap(), "AAFAAABCDD").unwrap();
    /// assert_eq!(path.len(), 11);
    /// ```
    pub fn from_step_str(start: Hex<'g>, steps: &str) -> Result<Path<'g>, Error> {
        Path::from_steps(start, &steps.parse()?)
    }

    /// Build a path from an explicit sequence of hexes.
    ///
    /// The sequence must be non-empty, and every hex must be adjacent to its successor.
    pub fn from_hexes(hexes: Vec<Hex<'g>>) -> Result<Path<'g>, Error> {
        if hexes.is_empty() {
            return Err(Error::EmptyArea);
        }
        if let Some(idx) = hexes
            .windows(2)
            .position(|pair| !pair[0].is_adjacent(&pair[1]))
        {
            return Err(Error::NotContiguous(idx, idx + 1));
        }
        Ok(Path::new(hexes))
    }

    /// Find a shortest path from `start` to `end`.
    ///
    /// Among all equally short routes, this returns the one whose step sequence sorts
    /// first when directions compare `A < B < ... < F`.
    pub fn shortest(start: Hex<'g>, end: Hex<'g>) -> Result<Path<'g>, Error> {
        if !start.same_grid(&end) {
            return Err(Error::Unreachable);
        }
        let grid = start.grid();
        let remaining = distance_field(grid, end, start);

        let remaining_at = |hex: Hex| {
            grid.index(hex.coordinate())
                .and_then(|idx| remaining[idx])
        };

        let mut current = start;
        let mut to_go = remaining_at(start).ok_or(Error::Unreachable)?;
        let mut hexes = Vec::with_capacity(to_go as usize + 1);
        hexes.push(current);

        while to_go > 0 {
            current = Direction::iter()
                .filter_map(|direction| current.neighbor(direction))
                .find(|next| remaining_at(*next) == Some(to_go - 1))
                .ok_or(Error::Unreachable)?;
            to_go -= 1;
            hexes.push(current);
        }

        debug!(
            from:? = start, to:? = end, len = hexes.len();
            "found shortest path",
        );
        Ok(Path::new(hexes))
    }

    #[inline]
    pub fn grid(&self) -> &'g Grid {
        self.hexes[0].grid()
    }

    /// Number of hexes on this path, counting the start.
    #[inline]
    pub fn len(&self) -> usize {
        self.hexes.len()
    }

    /// Always `false`: a path contains at least its start.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.hexes.is_empty()
    }

    pub fn hexes(&self) -> &[Hex<'g>] {
        &self.hexes
    }

    pub fn start(&self) -> Hex<'g> {
        self.hexes[0]
    }

    pub fn end(&self) -> Hex<'g> {
        self.hexes[self.hexes.len() - 1]
    }

    /// The direction of each step along this path.
    pub fn steps(&self) -> Steps {
        self.hexes
            .windows(2)
            .filter_map(|pair| pair[0].direction_to(&pair[1]))
            .collect()
    }

    /// The set of hexes this path visits.
    pub fn to_area(&self) -> Area<'g> {
        Area::from_connected(self.grid(), self.hexes.iter().copied())
    }
}

/// Breadth-first distances, in steps, from `origin` to every hex of the grid.
///
/// The search stops as soon as `target` has been reached; at that point every hex
/// strictly closer to `origin` than `target` already has its final distance.
fn distance_field(grid: &Grid, origin: Hex, target: Hex) -> Vec<Option<u32>> {
    let mut distances = vec![None; grid.cell_count()];
    let mut queue = VecDeque::new();

    if let Some(idx) = grid.index(origin.coordinate()) {
        distances[idx] = Some(0);
        queue.push_back(origin);
    }

    while let Some(hex) = queue.pop_front() {
        if hex == target {
            break;
        }
        let Some(distance) = grid.index(hex.coordinate()).and_then(|idx| distances[idx]) else {
            continue;
        };
        for neighbor in hex.neighbors() {
            if let Some(idx) = grid.index(neighbor.coordinate()) {
                if distances[idx].is_none() {
                    distances[idx] = Some(distance + 1);
                    queue.push_back(neighbor);
                }
            }
        }
    }

    distances
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::Style;

    #[test]
    fn test_from_step_str() {
        let grid = Grid::new(10, 10).unwrap();
        let start = grid.hex(3, 1).unwrap();
        let path = Path::from_step_str(start, "AAFAAABCDD").unwrap();
        assert_eq!(path.len(), 11);
        assert_eq!(path.start(), start);
        for pair in path.hexes().windows(2) {
            assert!(pair[0].is_adjacent(&pair[1]));
        }
        assert_eq!(path.steps().to_string(), "AAFAAABCDD");
        assert_eq!(path.end(), start.go_str("AAFAAABCDD").unwrap());
    }

    #[test]
    fn test_from_steps_fails_fast() {
        let grid = Grid::new(4, 4).unwrap();
        let start = grid.hex(2, 0).unwrap();
        assert_eq!(
            Path::from_step_str(start, "AAA"),
            Err(Error::OutOfBounds { col: 4, row: 0 })
        );
    }

    #[test]
    fn test_lenient_steps_stop_at_edge() {
        let grid = Grid::new(4, 4).unwrap();
        let start = grid.hex(2, 0).unwrap();
        let path = Path::from_step_str(start, "AAAB?").unwrap();
        assert_eq!(path.len(), 2);
        assert_eq!(path.end(), grid.hex(3, 0).unwrap());
    }

    #[test]
    fn test_repeat_steps_run_to_edge() {
        let grid = Grid::new(5, 5).unwrap();
        let start = grid.hex(0, 2).unwrap();
        let path = Path::from_step_str(start, "A*B").unwrap();
        // four steps east, then one south-east
        assert_eq!(path.len(), 6);
        assert_eq!(path.end(), grid.hex(4, 3).unwrap());

        // a repeat step which is already at the edge visits nothing
        let path = Path::from_step_str(grid.hex(4, 0).unwrap(), "A*").unwrap();
        assert_eq!(path.len(), 1);
    }

    #[test]
    fn test_empty_step_string() {
        let grid = Grid::new(2, 2).unwrap();
        let start = grid.hex(1, 1).unwrap();
        let path = Path::from_step_str(start, "").unwrap();
        assert_eq!(path.len(), 1);
        assert_eq!(path.start(), path.end());
        assert!(path.steps().is_empty());
        assert!(!path.is_empty());
    }

    #[test]
    fn test_from_hexes() {
        let grid = Grid::new(5, 5).unwrap();
        let a = grid.hex(0, 0).unwrap();
        let b = grid.hex(1, 0).unwrap();
        let c = grid.hex(3, 0).unwrap();
        assert!(Path::from_hexes(vec![a, b]).is_ok());
        assert_eq!(Path::from_hexes(Vec::new()), Err(Error::EmptyArea));
        assert_eq!(
            Path::from_hexes(vec![a, b, c]),
            Err(Error::NotContiguous(1, 2))
        );
    }

    #[test]
    fn test_shortest_straight_line() {
        let grid = Grid::new(10, 10).unwrap();
        let start = grid.hex(1, 1).unwrap();
        let end = grid.hex(6, 1).unwrap();
        let path = Path::shortest(start, end).unwrap();
        assert_eq!(path.len(), 6);
        assert_eq!(path.steps().to_string(), "AAAAA");
    }

    #[test]
    fn test_shortest_prefers_early_directions() {
        let grid = Grid::new(10, 10).unwrap();
        let start = grid.hex(2, 2).unwrap();
        // two steps south-east and two south-west in some order
        let end = start.go_str("BBCC").unwrap();
        let path = Path::shortest(start, end).unwrap();
        assert_eq!(path.steps().to_string(), "BBCC");

        let back = Path::shortest(end, start).unwrap();
        assert_eq!(back.len(), 5);
        assert_eq!(back.steps().to_string(), "EEFF");
    }

    #[test]
    fn test_shortest_to_self() {
        let grid = Grid::new(3, 3).unwrap();
        let hex = grid.hex(1, 1).unwrap();
        let path = Path::shortest(hex, hex).unwrap();
        assert_eq!(path.hexes(), &[hex]);
    }

    #[test]
    fn test_shortest_across_grids_is_unreachable() {
        let grid_a = Grid::new(3, 3).unwrap();
        let grid_b = Grid::new(3, 3).unwrap();
        assert_eq!(
            Path::shortest(grid_a.hex(0, 0).unwrap(), grid_b.hex(1, 1).unwrap()),
            Err(Error::Unreachable)
        );
    }

    #[test]
    fn test_shortest_detours_around_bounds() {
        // a single row: hexes can only move east and west
        let grid = Grid::new(5, 1).unwrap();
        let path = Path::shortest(grid.hex(4, 0).unwrap(), grid.hex(0, 0).unwrap()).unwrap();
        assert_eq!(path.steps().to_string(), "DDDD");

        // in a two-row grid, an east-west trip stays at its hex distance
        let grid = Grid::new(6, 2).unwrap();
        let start = grid.hex(0, 1).unwrap();
        let end = grid.hex(5, 0).unwrap();
        let path = Path::shortest(start, end).unwrap();
        assert_eq!(path.len() as u32 - 1, start.distance(&end));
    }

    #[test]
    fn test_to_area_deduplicates() {
        let grid = Grid::new(5, 5).unwrap();
        let path = Path::from_step_str(grid.hex(2, 2).unwrap(), "AD").unwrap();
        assert_eq!(path.len(), 3);
        assert_eq!(path.to_area().len(), 2);
    }

    #[test]
    fn test_identity_is_optional() {
        let grid = Grid::new(5, 5).unwrap();
        let mut path = Path::from_step_str(grid.hex(2, 2).unwrap(), "A").unwrap();
        assert!(path.identity.style.is_none());
        path.identity.style = Some("stroke:red".parse::<Style>().unwrap());
        assert!(path.identity.style.is_some());
    }
}
