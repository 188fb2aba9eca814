//! Hexagonal geometry support.
//!
//! Uses techniques from [this reference](https://www.redblobgames.com/grids/hexagons/)

pub mod coordinate;
pub mod direction;

pub use coordinate::Coordinate;
pub use direction::{Direction, ParseStepsError, Step, Steps};
