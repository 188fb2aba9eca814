use crate::geometry::Point;
use itertools::Itertools;

/// Formats geometry-space numbers for SVG attributes.
///
/// Numbers carry at most `precision` decimal places, with trailing zeros trimmed and
/// negative zero printed as `0`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NumberFormat {
    pub precision: usize,
}

impl NumberFormat {
    pub fn new(precision: usize) -> NumberFormat {
        NumberFormat { precision }
    }

    pub fn number(&self, value: f64) -> String {
        let mut formatted = format!("{value:.*}", self.precision);
        if formatted.contains('.') {
            let trimmed = formatted.trim_end_matches('0').trim_end_matches('.').len();
            formatted.truncate(trimmed);
        }
        if formatted == "-0" {
            formatted.remove(0);
        }
        formatted
    }

    /// `x,y`
    pub fn point(&self, point: Point) -> String {
        format!("{},{}", self.number(point.x), self.number(point.y))
    }

    /// Space-separated points, as used by `<polygon>` and `<polyline>`.
    pub fn points(&self, points: &[Point]) -> String {
        points.iter().map(|point| self.point(*point)).join(" ")
    }

    /// Path data which draws each ring as a closed subpath.
    pub fn closed_path_data<'a>(&self, rings: impl IntoIterator<Item = &'a [Point]>) -> String {
        rings
            .into_iter()
            .filter(|ring| !ring.is_empty())
            .map(|ring| {
                let segments = ring.iter().enumerate().map(|(idx, point)| {
                    let command = if idx == 0 { 'M' } else { 'L' };
                    format!("{command} {}", self.point(*point))
                });
                format!("{} Z", segments.format(" "))
            })
            .join(" ")
    }
}
