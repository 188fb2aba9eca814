use std::ops::{Add, AddAssign, Sub};

use num::Integer;

use super::direction::Direction;

/// Axial hex coordinates.
///
/// See [reference](https://www.redblobgames.com/grids/hexagons/#coordinates).
///
/// Constraint: `q + r + s == 0`
///
/// Coordinates are unbounded; whether a coordinate is a legal cell is a question for a
/// [`Grid`][crate::geometry::Grid].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Default, Hash)]
pub struct Coordinate {
    pub q: i32,
    pub r: i32,
}

impl Coordinate {
    pub const fn new(q: i32, r: i32) -> Coordinate {
        Coordinate { q, r }
    }

    /// Convert from "odd-r" offset coordinates, where odd rows are shoved half a hex right.
    pub fn from_offset(col: i32, row: i32) -> Coordinate {
        Coordinate {
            q: col - Integer::div_floor(&row, &2),
            r: row,
        }
    }

    /// Convert to "odd-r" offset coordinates: `(col, row)`.
    pub fn to_offset(self) -> (i32, i32) {
        (self.q + Integer::div_floor(&self.r, &2), self.r)
    }

    /// [`Coordinate::to_offset`], widened so that it cannot overflow.
    pub(crate) fn to_offset_wide(self) -> (i64, i64) {
        let r = i64::from(self.r);
        (i64::from(self.q) + Integer::div_floor(&r, &2), r)
    }

    /// The derived third cube coordinate.
    #[inline]
    pub fn s(self) -> i32 {
        -self.q - self.r
    }

    pub fn neighbors(self) -> impl 'static + Iterator<Item = Coordinate> {
        Direction::iter().map(move |direction| self + direction)
    }

    /// One step away in `direction`.
    #[inline]
    pub fn step(self, direction: Direction) -> Coordinate {
        self + direction
    }

    /// Number of single steps between these coordinates.
    pub fn distance(self, other: Coordinate) -> u32 {
        let delta = other - self;
        (delta.q.unsigned_abs() + delta.r.unsigned_abs() + delta.s().unsigned_abs()) / 2
    }

    pub fn is_adjacent(self, other: Coordinate) -> bool {
        self.direction_to(other).is_some()
    }

    /// The direction which steps from `self` to `other`, if they are adjacent.
    pub fn direction_to(self, other: Coordinate) -> Option<Direction> {
        let delta = other - self;
        Direction::iter().find(|direction| direction.offset() == (delta.q, delta.r))
    }

    /// Round fractional axial coordinates to the nearest hex.
    pub fn round(q: f64, r: f64) -> Coordinate {
        let s = -q - r;
        let (mut rq, mut rr, rs) = (q.round(), r.round(), s.round());
        let (dq, dr, ds) = ((rq - q).abs(), (rr - r).abs(), (rs - s).abs());
        if dq > dr && dq > ds {
            rq = -rr - rs;
        } else if dr > ds {
            rr = -rq - rs;
        }
        Coordinate::new(rq as i32, rr as i32)
    }
}

impl AddAssign<Direction> for Coordinate {
    fn add_assign(&mut self, rhs: Direction) {
        let (dq, dr) = rhs.offset();
        self.q += dq;
        self.r += dr;
    }
}

impl Add<Direction> for Coordinate {
    type Output = Coordinate;

    fn add(mut self, rhs: Direction) -> Self::Output {
        self += rhs;
        self
    }
}

impl Sub for Coordinate {
    type Output = Coordinate;

    fn sub(self, rhs: Coordinate) -> Self::Output {
        Coordinate::new(self.q - rhs.q, self.r - rhs.r)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_round_trip() {
        for row in -5..5 {
            for col in -5..5 {
                let coordinate = Coordinate::from_offset(col, row);
                assert_eq!(coordinate.to_offset(), (col, row));
            }
        }
    }

    #[test]
    fn test_wide_offset_survives_extremes() {
        assert_eq!(
            Coordinate::new(i32::MAX, 2).to_offset_wide(),
            (i64::from(i32::MAX) + 1, 2)
        );
        assert_eq!(
            Coordinate::new(i32::MIN, -3).to_offset_wide(),
            (i64::from(i32::MIN) - 2, -3)
        );
        assert_eq!(Coordinate::from_offset(4, 3).to_offset_wide(), (4, 3));
    }

    #[test]
    fn test_offset_steps_match_odd_r_layout() {
        // even row
        let even = Coordinate::from_offset(3, 2);
        assert_eq!((even + Direction::A).to_offset(), (4, 2));
        assert_eq!((even + Direction::B).to_offset(), (3, 3));
        assert_eq!((even + Direction::C).to_offset(), (2, 3));
        assert_eq!((even + Direction::D).to_offset(), (2, 2));
        assert_eq!((even + Direction::E).to_offset(), (2, 1));
        assert_eq!((even + Direction::F).to_offset(), (3, 1));

        // odd row
        let odd = Coordinate::from_offset(3, 1);
        assert_eq!((odd + Direction::A).to_offset(), (4, 1));
        assert_eq!((odd + Direction::B).to_offset(), (4, 2));
        assert_eq!((odd + Direction::C).to_offset(), (3, 2));
        assert_eq!((odd + Direction::D).to_offset(), (2, 1));
        assert_eq!((odd + Direction::E).to_offset(), (3, 0));
        assert_eq!((odd + Direction::F).to_offset(), (4, 0));
    }

    #[test]
    fn test_distance() {
        let origin = Coordinate::default();
        assert_eq!(origin.distance(origin), 0);
        for neighbor in origin.neighbors() {
            assert_eq!(origin.distance(neighbor), 1);
            assert!(origin.is_adjacent(neighbor));
        }
        assert_eq!(origin.distance(Coordinate::new(3, -1)), 3);
        assert_eq!(origin.distance(Coordinate::new(-2, -2)), 4);
        assert!(!origin.is_adjacent(origin));
        assert!(!origin.is_adjacent(Coordinate::new(1, 1)));
    }

    #[test]
    fn test_direction_to() {
        let origin = Coordinate::new(2, -7);
        for direction in Direction::iter() {
            assert_eq!(origin.direction_to(origin.step(direction)), Some(direction));
        }
        assert_eq!(origin.direction_to(origin), None);
        assert_eq!(origin.direction_to(Coordinate::new(4, -7)), None);
    }

    #[test]
    fn test_round() {
        assert_eq!(Coordinate::round(0.1, -0.1), Coordinate::new(0, 0));
        assert_eq!(Coordinate::round(0.9, 0.05), Coordinate::new(1, 0));
        assert_eq!(Coordinate::round(-0.6, 0.9), Coordinate::new(-1, 1));
    }
}
