//! SVG output.
//!
//! Geometry is drawn in its own units: one hex is one unit wide, with the origin at the
//! top left of the grid. The [`Document`] maps that onto the page with its `viewBox`.
//!
//! Styling relies on SVG inheritance. A [`Group`]'s identity sits on the enclosing `<g>`
//! and each source's identity on its own element, so a member's style beats its group's,
//! and the group's beats the renderer's defaults.

mod adapter;
mod attributes;
mod document;
mod element;
pub mod marker;
mod number;

pub use adapter::{
    Adapter, BoundaryLine, ComplexArea, OutlineArea, PathLine, SimpleArea, Skeleton,
};
pub use document::Document;
pub use element::{Element, Group, Single};
pub use number::NumberFormat;
