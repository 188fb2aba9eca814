use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub};

/// Lengths in geometry space. One unit is the width of a hex.
pub type Distance = f64;

/// `sqrt(3)`
pub const SQRT3: Distance = 1.732_050_807_568_877_2;

/// Width of a hex, measured between opposite flat sides.
pub const I: Distance = 1.0;

/// Vertical distance between the centres of adjacent rows.
pub const J: Distance = SQRT3 / 2.0;

/// Length of a hex edge; also the distance from a hex's centre to each corner.
pub const K: Distance = 1.0 / SQRT3;

/// A position in geometry space.
///
/// The origin is the top left corner of the grid's bounding box; `y` grows downward,
/// matching SVG.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: Distance,
    pub y: Distance,
}

impl Point {
    pub const fn new(x: Distance, y: Distance) -> Point {
        Point { x, y }
    }

    pub fn offset(self, dx: Distance, dy: Distance) -> Point {
        Point::new(self.x + dx, self.y + dy)
    }

    pub fn dot(self, other: Point) -> Distance {
        self.x * other.x + self.y * other.y
    }

    /// Euclidean length of this point taken as a vector.
    pub fn norm(self) -> Distance {
        self.dot(self).sqrt()
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Point {
    fn add_assign(&mut self, rhs: Point) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<Distance> for Point {
    type Output = Point;

    fn mul(self, rhs: Distance) -> Point {
        Point::new(self.x * rhs, self.y * rhs)
    }
}

impl Div<Distance> for Point {
    type Output = Point;

    fn div(self, rhs: Distance) -> Point {
        Point::new(self.x / rhs, self.y / rhs)
    }
}

impl Neg for Point {
    type Output = Point;

    fn neg(self) -> Point {
        Point::new(-self.x, -self.y)
    }
}

impl From<(Distance, Distance)> for Point {
    fn from((x, y): (Distance, Distance)) -> Point {
        Point::new(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::approx_eq;

    #[test]
    fn test_constants_are_consistent() {
        // rows interlock: the vertical row pitch is one and a half edge lengths
        assert!(approx_eq!(f64, J, 1.5 * K, epsilon = 1e-12));
        // the apothem of a hex is half its width
        assert!(approx_eq!(f64, K * SQRT3 / 2.0, I / 2.0, epsilon = 1e-12));
    }

    #[test]
    fn test_arithmetic() {
        let a = Point::new(1.0, 2.0);
        let b = Point::new(0.5, -1.0);
        assert_eq!(a + b, Point::new(1.5, 1.0));
        assert_eq!(a - b, Point::new(0.5, 3.0));
        assert_eq!(a * 2.0, Point::new(2.0, 4.0));
        assert_eq!(-a, Point::new(-1.0, -2.0));
        assert!(approx_eq!(f64, Point::new(3.0, 4.0).norm(), 5.0));
    }
}
