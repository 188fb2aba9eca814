use super::{
    boundary::Edge,
    hex::{Coordinate, Direction, Steps},
    path::trace,
    point::{Point, I, J, K},
    Area, Error,
};
use log::debug;
use num::Integer;
use std::{cmp::Ordering, fmt, hash};

/// A Grid is the bounded, rectangular universe in which hexes live.
///
/// Cells are addressed by `(col, row)` with `0 <= col < width` and `0 <= row < height`.
/// Odd rows are shoved half a hex to the right ("odd-r" layout), so internally every cell
/// is also identified by its axial [`Coordinate`].
///
/// A grid never changes once constructed. Everything derived from it ([`Hex`], [`Path`][super::Path],
/// [`Area`]) borrows it, which is how those values know which grid they belong to.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Grid {
    width: i32,
    height: i32,
}

impl Grid {
    /// Create a new grid of the specified dimensions.
    pub fn new(width: i32, height: i32) -> Result<Grid, Error> {
        if width <= 0 || height <= 0 {
            return Err(Error::InvalidDimensions { width, height });
        }
        debug!(width, height; "created grid");
        Ok(Grid { width, height })
    }

    /// Number of columns in this grid.
    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Number of rows in this grid.
    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Total number of hexes in this grid.
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// `true` when `(col, row)` is legal within the bounds of this grid.
    #[inline]
    pub fn contains_offset(&self, col: i32, row: i32) -> bool {
        (0..self.width).contains(&col) && (0..self.height).contains(&row)
    }

    /// `true` when a coordinate is legal within the bounds of this grid.
    pub fn contains(&self, coordinate: Coordinate) -> bool {
        let (col, row) = coordinate.to_offset_wide();
        (0..i64::from(self.width)).contains(&col) && (0..i64::from(self.height)).contains(&row)
    }

    /// The hex at `(col, row)`.
    pub fn hex(&self, col: i32, row: i32) -> Result<Hex<'_>, Error> {
        if !self.contains_offset(col, row) {
            return Err(Error::OutOfBounds { col, row });
        }
        self.hex_at(Coordinate::from_offset(col, row))
    }

    /// The hex at an axial coordinate.
    pub fn hex_at(&self, coordinate: Coordinate) -> Result<Hex<'_>, Error> {
        if self.contains(coordinate) {
            Ok(Hex {
                grid: self,
                coordinate,
            })
        } else {
            let (col, row) = coordinate.to_offset_wide();
            Err(Error::OutOfBounds {
                col: saturate(col),
                row: saturate(row),
            })
        }
    }

    /// The hex containing a point in geometry space.
    ///
    /// Points outside the grid's bounding box, including non-finite ones, fail with
    /// [`Error::OutOfBounds`].
    pub fn hex_at_point(&self, point: Point) -> Result<Hex<'_>, Error> {
        let r = (point.y - K) / J;
        let q = (point.x - I / 2.0) / I - r / 2.0;
        let inside = (0.0..=self.pixel_width()).contains(&point.x)
            && (0.0..=self.pixel_height()).contains(&point.y);
        if !inside {
            // float to int casts saturate, and send NaN to 0
            return Err(Error::OutOfBounds {
                col: ((point.x - I / 2.0) / I).round() as i32,
                row: r.round() as i32,
            });
        }
        self.hex_at(Coordinate::round(q, r))
    }

    /// Iterate over every hex of this grid in row-major order.
    pub fn hexes(&self) -> impl '_ + Iterator<Item = Hex<'_>> {
        (0..self.height).flat_map(move |row| {
            (0..self.width).map(move |col| Hex {
                grid: self,
                coordinate: Coordinate::from_offset(col, row),
            })
        })
    }

    /// An area containing every hex of this grid.
    pub fn to_area(&self) -> Area<'_> {
        Area::from_connected(self, self.hexes())
    }

    /// Width of the grid's bounding box in geometry space.
    pub fn pixel_width(&self) -> f64 {
        I / 2.0 + I * self.width as f64
    }

    /// Height of the grid's bounding box in geometry space.
    pub fn pixel_height(&self) -> f64 {
        K * 2.0 + J * (self.height - 1) as f64
    }

    /// Convert a coordinate into a dense row-major index, if it is in bounds.
    pub(crate) fn index(&self, coordinate: Coordinate) -> Option<usize> {
        self.contains(coordinate).then(|| {
            let (col, row) = coordinate.to_offset();
            col as usize + row as usize * self.width as usize
        })
    }
}

fn saturate(value: i64) -> i32 {
    value.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

/// A single hexagonal cell, bound to the [`Grid`] which contains it.
///
/// A `Hex` always refers to a legal cell of its grid; every operation which could move it
/// out of bounds returns a `Result` instead.
///
/// Two hexes are equal when they share both a coordinate and a grid. Hexes order row-major.
#[derive(Clone, Copy)]
pub struct Hex<'g> {
    grid: &'g Grid,
    coordinate: Coordinate,
}

impl<'g> Hex<'g> {
    /// The grid which contains this hex.
    #[inline]
    pub fn grid(&self) -> &'g Grid {
        self.grid
    }

    #[inline]
    pub fn coordinate(&self) -> Coordinate {
        self.coordinate
    }

    #[inline]
    pub fn col(&self) -> i32 {
        self.coordinate.to_offset().0
    }

    #[inline]
    pub fn row(&self) -> i32 {
        self.coordinate.r
    }

    /// `true` when both hexes belong to the very same grid.
    #[inline]
    pub fn same_grid(&self, other: &Hex<'_>) -> bool {
        std::ptr::eq(self.grid, other.grid)
    }

    /// Centre of this hex in geometry space.
    pub fn centre(&self) -> Point {
        let (col, row) = self.coordinate.to_offset();
        let x = if row.is_odd() {
            I * (1 + col) as f64
        } else {
            I / 2.0 + I * col as f64
        };
        Point::new(x, K + J * row as f64)
    }

    /// The corner at which the edge facing `direction` starts, moving clockwise.
    pub fn corner(&self, direction: Direction) -> Point {
        let (dx, dy) = match direction {
            Direction::A => (I / 2.0, -K / 2.0),
            Direction::B => (I / 2.0, K / 2.0),
            Direction::C => (0.0, K),
            Direction::D => (-I / 2.0, K / 2.0),
            Direction::E => (-I / 2.0, -K / 2.0),
            Direction::F => (0.0, -K),
        };
        self.centre().offset(dx, dy)
    }

    /// The side of this hex facing `direction`.
    pub fn edge(&self, direction: Direction) -> Edge<'g> {
        Edge::new(*self, direction)
    }

    /// The adjacent hex in `direction`, if it is within the grid.
    pub fn neighbor(&self, direction: Direction) -> Option<Hex<'g>> {
        self.go(direction).ok()
    }

    /// Iterate over the adjacent hexes which are within the grid, in direction order.
    pub fn neighbors(&self) -> impl 'g + Iterator<Item = Hex<'g>> {
        let hex = *self;
        Direction::iter().filter_map(move |direction| hex.neighbor(direction))
    }

    /// Take a single step.
    pub fn go(&self, direction: Direction) -> Result<Hex<'g>, Error> {
        self.grid.hex_at(self.coordinate + direction)
    }

    /// Take `distance` steps in the same direction.
    ///
    /// Fails at the first step which leaves the grid.
    pub fn go_n(&self, direction: Direction, distance: u32) -> Result<Hex<'g>, Error> {
        (0..distance).try_fold(*self, |hex, _| hex.go(direction))
    }

    /// Follow a sequence of steps, returning the hex where they end.
    ///
    /// Unless `steps` is lenient, fails at the first step which leaves the grid.
    pub fn walk(&self, steps: &Steps) -> Result<Hex<'g>, Error> {
        let hexes = trace(*self, steps)?;
        Ok(*hexes.last().unwrap_or(self))
    }

    /// Parse a step-string and follow it.
    ///
    /// ```
    /// # use hexlib::geometry::Grid;
    /// let grid = Grid::new(10, 10).unwrap();
    /// let hex = grid.hex(3, 1).unwrap().go_str("BC").unwrap();
    /// assert_eq!((hex.col(), hex.row()), (3, 3));
    /// ```
    pub fn go_str(&self, steps: &str) -> Result<Hex<'g>, Error> {
        self.walk(&steps.parse()?)
    }

    /// Number of single steps between these hexes, ignoring the grid bounds.
    pub fn distance(&self, other: &Hex<'_>) -> u32 {
        self.coordinate.distance(other.coordinate)
    }

    /// `true` when the hexes share a grid and an edge.
    pub fn is_adjacent(&self, other: &Hex<'_>) -> bool {
        self.direction_to(other).is_some()
    }

    /// The direction which steps from this hex to `other`, if they are adjacent.
    pub fn direction_to(&self, other: &Hex<'_>) -> Option<Direction> {
        if self.same_grid(other) {
            self.coordinate.direction_to(other.coordinate)
        } else {
            None
        }
    }
}

impl fmt::Debug for Hex<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (col, row) = self.coordinate.to_offset();
        write!(f, "Hex({col}, {row})")
    }
}

impl PartialEq for Hex<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.coordinate == other.coordinate && self.same_grid(other)
    }
}

impl Eq for Hex<'_> {}

impl hash::Hash for Hex<'_> {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        std::ptr::hash(self.grid, state);
        self.coordinate.hash(state);
    }
}

impl Ord for Hex<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.row()
            .cmp(&other.row())
            .then_with(|| self.col().cmp(&other.col()))
            .then_with(|| (self.grid as *const Grid).cmp(&(other.grid as *const Grid)))
    }
}

impl PartialOrd for Hex<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
