use super::{hex::Direction, point::Point, Area, Error, Hex, Path};
use std::{collections::BTreeSet, fmt};

/// One side of a hex: the side facing `direction`.
///
/// Edges run clockwise around their hex, from corner `direction` to corner
/// `direction.clockwise()`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Edge<'g> {
    pub hex: Hex<'g>,
    pub direction: Direction,
}

impl<'g> Edge<'g> {
    pub fn new(hex: Hex<'g>, direction: Direction) -> Edge<'g> {
        Edge { hex, direction }
    }

    /// The same side, seen from the hex on the other side of it.
    pub fn complement(&self) -> Option<Edge<'g>> {
        self.hex
            .neighbor(self.direction)
            .map(|neighbor| Edge::new(neighbor, self.direction.opposite()))
    }

    /// The next edge clockwise around the same hex.
    pub fn next_in(&self) -> Edge<'g> {
        Edge::new(self.hex, self.direction.clockwise())
    }

    /// The edge which continues from this one's end corner onto the next hex clockwise,
    /// keeping the hex across this edge on the outside.
    pub fn next_out(&self) -> Option<Edge<'g>> {
        self.hex
            .neighbor(self.direction.clockwise())
            .map(|neighbor| Edge::new(neighbor, self.direction.counterclockwise()))
    }

    /// `true` when `self` directly continues from `previous`.
    pub fn follows(&self, previous: &Edge<'_>) -> bool {
        previous.next_in() == *self || previous.next_out().as_ref() == Some(self)
    }

    pub fn start_point(&self) -> Point {
        self.hex.corner(self.direction)
    }

    pub fn end_point(&self) -> Point {
        self.hex.corner(self.direction.clockwise())
    }

    /// Unit vector perpendicular to this edge, pointing into its hex.
    pub fn inward_normal(&self) -> Point {
        -self.direction.unit()
    }
}

impl fmt::Debug for Edge<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Edge({:?}, {})", self.hex, self.direction)
    }
}

/// An ordered sequence of edges, each continuing from the one before.
///
/// A boundary is closed when its first edge continues from its last.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Boundary<'g> {
    edges: Vec<Edge<'g>>,
}

impl<'g> Boundary<'g> {
    pub fn new(edges: Vec<Edge<'g>>) -> Boundary<'g> {
        Boundary { edges }
    }

    /// The closed boundary around a single hex, starting from its west edge.
    pub fn around(hex: Hex<'g>) -> Boundary<'g> {
        Direction::iter()
            .map(|direction| hex.edge(direction.rotate(3)))
            .collect()
    }

    pub fn edges(&self) -> &[Edge<'g>] {
        &self.edges
    }

    /// Number of edges; equivalently, the boundary's length in units of `K`.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    pub fn is_closed(&self) -> bool {
        match (self.edges.first(), self.edges.last()) {
            (Some(first), Some(last)) => first.follows(last),
            _ => false,
        }
    }

    /// The same boundary, seen from the other side of every edge.
    ///
    /// `None` if any edge lies on the outer rim of the grid.
    pub fn complement(&self) -> Option<Boundary<'g>> {
        self.edges
            .iter()
            .map(Edge::complement)
            .collect::<Option<Vec<_>>>()
            .map(Boundary::new)
    }

    /// `true` when this boundary is closed and encloses its own side: a finite region,
    /// rather than everything outside a region.
    pub fn is_container(&self) -> bool {
        if !self.is_closed() {
            return false;
        }
        // closed, yet partly along the rim of the grid: the far side is outside the grid
        let Some(complement) = self.complement() else {
            return true;
        };
        match (self.to_path(), complement.to_path()) {
            (Ok(inside), Ok(outside)) => inside.len() < outside.len(),
            _ => false,
        }
    }

    /// Every hex on the inner side of this closed boundary.
    pub fn area(&self) -> Result<Area<'g>, Error> {
        if !self.is_closed() {
            return Err(Error::OpenBoundary);
        }
        let beyond: BTreeSet<_> = self
            .edges
            .iter()
            .filter_map(Edge::complement)
            .map(|edge| edge.hex)
            .collect();
        let seeds = Area::from_hexes(self.edges.iter().map(|edge| edge.hex))?;
        Ok(seeds.fill(&beyond))
    }

    /// The hexes along this boundary, with consecutive repeats removed.
    pub fn to_path(&self) -> Result<Path<'g>, Error> {
        let mut hexes: Vec<Hex<'g>> = Vec::with_capacity(self.edges.len());
        for edge in &self.edges {
            if hexes.last() != Some(&edge.hex) {
                hexes.push(edge.hex);
            }
        }
        Path::from_hexes(hexes)
    }

    /// The points through which a line along this boundary passes, with every edge moved
    /// `inset` along its inward normal.
    ///
    /// Negative insets move edges outward. Offset edges meet at their miter point.
    /// A closed boundary yields one point per edge, at the start of each edge; an open
    /// boundary yields one more, for the end of its final edge.
    pub fn stroke(&self, inset: f64) -> Vec<Point> {
        let (Some(first), Some(last)) = (self.edges.first(), self.edges.last()) else {
            return Vec::new();
        };

        let mut points = Vec::with_capacity(self.edges.len() + 1);
        if self.is_closed() {
            points.push(first.start_point() + miter(last, first) * inset);
        } else {
            points.push(first.start_point() + first.inward_normal() * inset);
        }
        for pair in self.edges.windows(2) {
            points.push(pair[1].start_point() + miter(&pair[0], &pair[1]) * inset);
        }
        if !self.is_closed() {
            points.push(last.end_point() + last.inward_normal() * inset);
        }

        points
    }
}

impl<'g> From<Vec<Edge<'g>>> for Boundary<'g> {
    fn from(edges: Vec<Edge<'g>>) -> Self {
        Boundary::new(edges)
    }
}

impl<'g> FromIterator<Edge<'g>> for Boundary<'g> {
    fn from_iter<T: IntoIterator<Item = Edge<'g>>>(iter: T) -> Self {
        Boundary::new(iter.into_iter().collect())
    }
}

/// Displacement of the corner shared by two consecutive edges when both move one unit
/// along their inward normals.
fn miter(before: &Edge, after: &Edge) -> Point {
    let (n1, n2) = (before.inward_normal(), after.inward_normal());
    let denominator = 1.0 + n1.dot(n2);
    if denominator.abs() < f64::EPSILON {
        // antiparallel normals: the edges double back on each other
        return n2;
    }
    (n1 + n2) / denominator
}
