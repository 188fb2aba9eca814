//! Weighted movement over a grid: terrain costs, cheapest routes, and reachable horizons.

mod a_star;
mod topography;

pub use topography::Topography;
