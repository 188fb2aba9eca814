use super::{
    Adapter, ComplexArea, Element, NumberFormat, OutlineArea, PathLine, SimpleArea, Skeleton,
};
use crate::{
    config::RenderConfig,
    geometry::{Area, Grid, Path},
};
use log::debug;
use std::fmt;
use svg::{node::element::Definitions, Node};

const FOOTER: &str = "</svg>\n";

/// An SVG document depicting one grid.
///
/// There are two ways to fill it. Push [`Element`]s onto `elements` and call
/// [`Document::render`]; or write [`Document::header`], then the output of any number of
/// `draw*` calls, then [`Document::footer`].
///
/// Drawing happens in the order given: later elements paint over earlier ones.
pub struct Document<'g> {
    grid: &'g Grid,
    config: RenderConfig,
    defs: Definitions,
    pub elements: Vec<Box<dyn Element + 'g>>,
}

impl<'g> Document<'g> {
    pub fn new(grid: &'g Grid) -> Document<'g> {
        Document::with_config(grid, RenderConfig::default())
    }

    pub fn with_config(grid: &'g Grid, config: RenderConfig) -> Document<'g> {
        Document {
            grid,
            config,
            defs: Definitions::new(),
            elements: Vec::new(),
        }
    }

    pub fn grid(&self) -> &'g Grid {
        self.grid
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    fn format(&self) -> NumberFormat {
        NumberFormat::new(self.config.precision)
    }

    /// Add a definition, such as [`marker::triangle`][super::marker::triangle], to the
    /// document's `<defs>`.
    pub fn define(&mut self, node: impl Into<Box<dyn Node>>) {
        let defs = std::mem::replace(&mut self.defs, Definitions::new());
        self.defs = defs.add(node);
    }

    pub fn push(&mut self, element: impl Element + 'g) {
        self.elements.push(Box::new(element));
    }

    fn root(&self) -> svg::Document {
        let format = self.format();
        let margin = self.config.margin;
        let width = self.grid.pixel_width() + 2.0 * margin;
        let height = self.grid.pixel_height() + 2.0 * margin;

        svg::Document::new()
            .set("xmlns", "http://www.w3.org/2000/svg")
            .set("version", "1.1")
            .set("width", format.number(width * self.config.scale))
            .set("height", format.number(height * self.config.scale))
            .set(
                "viewBox",
                format!(
                    "{} {} {} {}",
                    format.number(-margin),
                    format.number(-margin),
                    format.number(width),
                    format.number(height),
                ),
            )
            .add(self.defs.clone())
    }

    /// Everything which precedes the drawn elements: the opening `<svg>` tag and the
    /// document's `<defs>`.
    pub fn header(&self) -> String {
        let mut root = self.root().to_string();
        // the root always holds `<defs>`, so it is never written as a self-closing tag
        if let Some(close) = root.rfind("</svg>") {
            root.truncate(close);
        }
        root
    }

    pub fn footer(&self) -> String {
        FOOTER.to_string()
    }

    pub fn draw(&self, element: &dyn Element) -> String {
        format!("{}\n", element.to_node(&self.format()))
    }

    fn draw_with<S>(&self, adapter: impl Adapter<S>, source: &S) -> String {
        format!("{}\n", adapter.render(source, &self.format()))
    }

    /// Each hex of `area` as its own polygon, moved `inset` inward.
    pub fn draw_simple_area(&self, area: &Area<'_>, inset: f64) -> String {
        self.draw_with(SimpleArea::new(inset), area)
    }

    /// The outer boundary of `area` as a single polygon, moved `inset` inward.
    pub fn draw_outline(&self, area: &Area<'_>, inset: f64) -> String {
        self.draw_with(OutlineArea::new(inset), area)
    }

    /// `area` as one path with holes for its voids, moved `inset` inward.
    pub fn draw_complex_area(&self, area: &Area<'_>, inset: f64) -> String {
        self.draw_with(ComplexArea::new(inset), area)
    }

    pub fn draw_path(&self, path: &Path<'_>) -> String {
        self.draw_with(PathLine, path)
    }

    /// Every edge of every hex in `area`, including its outer boundary.
    pub fn draw_skeleton(&self, area: &Area<'_>) -> String {
        self.draw_with(Skeleton::default(), area)
    }

    /// The complete document: header, every element in order, and footer.
    pub fn render(&self) -> String {
        let mut out = self.header();
        for element in &self.elements {
            out.push_str(&self.draw(element.as_ref()));
        }
        out.push_str(FOOTER);
        debug!(
            width = self.grid.width(), height = self.grid.height(),
            elements = self.elements.len(), bytes = out.len();
            "rendered document",
        );
        out
    }
}

impl fmt::Display for Document<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{marker, Single};

    #[test]
    fn test_header_dimensions() {
        let grid = Grid::new(10, 10).unwrap();
        let doc = Document::new(&grid);
        let header = doc.header();
        assert!(header.starts_with("<svg"));
        assert!(header.contains("xmlns=\"http://www.w3.org/2000/svg\""));
        // (10.5 + 0.5) * 40
        assert!(header.contains("width=\"440\""));
        assert!(header.contains("viewBox=\"-0.25 -0.25 11 "));
        assert!(!header.contains("</svg>"));
        assert_eq!(doc.footer(), "</svg>\n");
    }

    #[test]
    fn test_config_changes_extent() {
        let grid = Grid::new(2, 1).unwrap();
        let config = RenderConfig {
            scale: 10.0,
            margin: 0.0,
            precision: 2,
        };
        let header = Document::with_config(&grid, config).header();
        assert!(header.contains("width=\"25\""));
        assert!(header.contains("height=\"11.55\""));
        assert!(header.contains("viewBox=\"0 0 2.5 1.15\""));
    }

    #[test]
    fn test_defs_in_header() {
        let grid = Grid::new(3, 3).unwrap();
        let mut doc = Document::new(&grid);
        doc.define(marker::triangle());
        assert!(doc.header().contains("id=\"Triangle\""));
    }

    #[test]
    fn test_render_keeps_element_order() {
        let grid = Grid::new(5, 5).unwrap();
        let mut doc = Document::new(&grid);
        let mut first = Area::single(grid.hex(0, 0).unwrap());
        first.identity.id = Some("first".into());
        let mut second = Area::single(grid.hex(1, 0).unwrap());
        second.identity.id = Some("second".into());
        doc.push(Single::new(first, SimpleArea::default()));
        doc.push(Single::new(second, SimpleArea::default()));

        let rendered = doc.render();
        let first_at = rendered.find("id=\"first\"").unwrap();
        let second_at = rendered.find("id=\"second\"").unwrap();
        assert!(first_at < second_at);
        assert!(rendered.ends_with("</svg>\n"));
        assert_eq!(rendered, doc.to_string());
    }

    #[test]
    fn test_streaming_matches_structured() {
        let grid = Grid::new(5, 5).unwrap();
        let area = Area::within_radius(grid.hex(2, 2).unwrap(), 1).unwrap();

        let streamed = {
            let doc = Document::new(&grid);
            let mut out = doc.header();
            out.push_str(&doc.draw_simple_area(&area, 0.1));
            out.push_str(&doc.footer());
            out
        };

        let mut doc = Document::new(&grid);
        doc.push(Single::new(area.clone(), SimpleArea::new(0.1)));
        assert_eq!(doc.render(), streamed);
    }
}
