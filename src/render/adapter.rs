use super::{attributes::Attributes, NumberFormat};
use crate::geometry::{Area, Boundary, Path};
use log::trace;
use svg::{node::element as svg_element, Node};

/// Turns one kind of geometry into one SVG node.
///
/// Adapters carry the drawing options (insets and the like); the source carries what
/// is drawn, along with its identity.
pub trait Adapter<S> {
    fn render(&self, source: &S, format: &NumberFormat) -> Box<dyn Node>;
}

fn poly(boundary: &Boundary, inset: f64, format: &NumberFormat) -> Box<dyn Node> {
    let points = format.points(&boundary.stroke(inset));
    if boundary.is_closed() {
        svg_element::Polygon::new().set("points", points).into()
    } else {
        svg_element::Polyline::new().set("points", points).into()
    }
}

/// Each hex of an area as its own polygon, inside a `<g>`.
///
/// Positive insets shrink every hex, leaving gaps between neighbours; negative insets
/// grow them so that neighbours overlap.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SimpleArea {
    pub inset: f64,
}

impl SimpleArea {
    pub fn new(inset: f64) -> SimpleArea {
        SimpleArea { inset }
    }
}

impl Adapter<Area<'_>> for SimpleArea {
    fn render(&self, area: &Area<'_>, format: &NumberFormat) -> Box<dyn Node> {
        area.hexes()
            .fold(
                svg_element::Group::new().identified(&area.identity),
                |group, hex| group.add(poly(&Boundary::around(hex), self.inset, format)),
            )
            .into()
    }
}

/// The outer boundary of an area as a single polygon.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct OutlineArea {
    pub inset: f64,
}

impl OutlineArea {
    pub fn new(inset: f64) -> OutlineArea {
        OutlineArea { inset }
    }
}

impl Adapter<Area<'_>> for OutlineArea {
    fn render(&self, area: &Area<'_>, format: &NumberFormat) -> Box<dyn Node> {
        let points = area.boundary().stroke(self.inset);
        svg_element::Polygon::new()
            .set("points", format.points(&points))
            .identified(&area.identity)
            .into()
    }
}

/// An area as a single `<path>`, with holes where it encloses voids.
///
/// The outer boundary runs clockwise and each void's boundary anticlockwise, so the
/// `nonzero` fill rule leaves the voids empty.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ComplexArea {
    pub inset: f64,
}

impl ComplexArea {
    pub fn new(inset: f64) -> ComplexArea {
        ComplexArea { inset }
    }
}

impl Adapter<Area<'_>> for ComplexArea {
    fn render(&self, area: &Area<'_>, format: &NumberFormat) -> Box<dyn Node> {
        let mut rings = vec![area.boundary().stroke(self.inset)];
        for void in area.enclosed_areas() {
            // shrinking the area grows its holes
            let mut ring = void.boundary().stroke(-self.inset);
            ring.reverse();
            rings.push(ring);
        }
        trace!(rings = rings.len(); "drawing complex area");

        svg_element::Path::new()
            .set("fill-rule", "nonzero")
            .set(
                "d",
                format.closed_path_data(rings.iter().map(Vec::as_slice)),
            )
            .identified(&area.identity)
            .into()
    }
}

/// Every edge of every hex in an area, inside a `<g>`.
///
/// Intended as a faint overlay; the area's style usually sets `fill:none`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Skeleton {
    pub include_boundary: bool,
}

impl Skeleton {
    pub fn new(include_boundary: bool) -> Skeleton {
        Skeleton { include_boundary }
    }
}

impl Default for Skeleton {
    fn default() -> Self {
        Skeleton {
            include_boundary: true,
        }
    }
}

impl Adapter<Area<'_>> for Skeleton {
    fn render(&self, area: &Area<'_>, format: &NumberFormat) -> Box<dyn Node> {
        area.skeleton(self.include_boundary)
            .iter()
            .fold(
                svg_element::Group::new().identified(&area.identity),
                |group, boundary| group.add(poly(boundary, 0.0, format)),
            )
            .into()
    }
}

/// A path as a `<polyline>` through the centres of its hexes.
///
/// Pair with a `marker-end` style to draw arrows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PathLine;

impl Adapter<Path<'_>> for PathLine {
    fn render(&self, path: &Path<'_>, format: &NumberFormat) -> Box<dyn Node> {
        let centres: Vec<_> = path.hexes().iter().map(|hex| hex.centre()).collect();
        svg_element::Polyline::new()
            .set("points", format.points(&centres))
            .identified(&path.identity)
            .into()
    }
}

/// A boundary as a `<polygon>` if it is closed, or a `<polyline>` if it is not.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BoundaryLine {
    pub inset: f64,
}

impl BoundaryLine {
    pub fn new(inset: f64) -> BoundaryLine {
        BoundaryLine { inset }
    }
}

impl Adapter<Boundary<'_>> for BoundaryLine {
    fn render(&self, boundary: &Boundary<'_>, format: &NumberFormat) -> Box<dyn Node> {
        poly(boundary, self.inset, format)
    }
}
