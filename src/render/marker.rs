//! Ready-made definitions for a document's `<defs>`.

use svg::node::element::{Marker, Path};

/// Id of the marker returned by [`triangle`]; reference it as `url(#Triangle)`.
pub const TRIANGLE: &str = "Triangle";

/// An arrowhead for the end of a line, sized relative to the line's stroke width.
pub fn triangle() -> Marker {
    Marker::new()
        .set("id", TRIANGLE)
        .set("viewBox", "0 0 10 10")
        .set("refX", 0)
        .set("refY", 5)
        .set("markerUnits", "strokeWidth")
        .set("markerWidth", 4)
        .set("markerHeight", 3)
        .set("orient", "auto")
        .add(Path::new().set("d", "M 0 0 L 10 5 L 0 10 z"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_triangle_marker() {
        let rendered = triangle().to_string();
        assert!(rendered.starts_with("<marker"));
        assert!(rendered.contains("id=\"Triangle\""));
        assert!(rendered.contains("orient=\"auto\""));
        assert!(rendered.contains("<path d=\"M 0 0 L 10 5 L 0 10 z\"/>"));
    }
}
