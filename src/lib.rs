//! Hexagonal grids: cells, paths, connected areas, movement costs, and SVG rendering.
//!
//! ```
//! use hexlib::{
//!     geometry::{Area, Grid, Path},
//!     render::Document,
//! };
//!
//! let grid = Grid::new(10, 10)?;
//! let start = grid.hex(1, 1)?;
//! let path = Path::shortest(start, start.go_str("AABC")?)?;
//! let area = Area::within_radius(grid.hex(6, 6)?, 2)?;
//!
//! let doc = Document::new(&grid);
//! let mut svg = doc.header();
//! svg.push_str(&doc.draw_simple_area(&area, 0.1));
//! svg.push_str(&doc.draw_path(&path));
//! svg.push_str(&doc.footer());
//! assert!(svg.ends_with("</svg>\n"));
//! # Ok::<(), hexlib::geometry::Error>(())
//! ```

pub mod config;
pub mod geometry;
pub mod render;
pub mod style;

pub use config::RenderConfig;
pub use style::{Identity, Style};
