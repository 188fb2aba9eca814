//! Hex grid geometry.
//!
//! A [`Grid`] owns nothing but its dimensions; every [`Hex`], [`Path`], and [`Area`]
//! borrows the grid it was built from.

mod area;
pub mod boundary;
mod error;
mod grid;
pub mod hex;
pub mod movement;
mod path;
pub mod point;

pub use area::Area;
pub use boundary::{Boundary, Edge};
pub use error::Error;
pub use grid::{Grid, Hex};
pub use hex::{Coordinate, Direction, Steps};
pub use path::Path;
pub use point::Point;
