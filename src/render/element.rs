use super::{adapter::Adapter, attributes::Attributes, NumberFormat};
use crate::style::Identity;
use svg::{node::element as svg_element, Node};

/// Anything which can be drawn into a [`Document`][super::Document].
pub trait Element {
    fn to_node(&self, format: &NumberFormat) -> Box<dyn Node>;
}

/// One source drawn with one adapter.
///
/// The source's own identity is emitted on the adapter's element.
#[derive(Clone, Debug, PartialEq)]
pub struct Single<S, A> {
    pub source: S,
    pub adapter: A,
}

impl<S, A: Adapter<S>> Single<S, A> {
    pub fn new(source: S, adapter: A) -> Self {
        Single { source, adapter }
    }
}

impl<S, A: Adapter<S>> Element for Single<S, A> {
    fn to_node(&self, format: &NumberFormat) -> Box<dyn Node> {
        self.adapter.render(&self.source, format)
    }
}

/// Several sources drawn with a shared adapter, wrapped in a `<g>`.
///
/// The group's identity lands on the `<g>`, so its style is inherited by every member
/// which does not set that property itself.
#[derive(Clone, Debug, PartialEq)]
pub struct Group<S, A> {
    pub sources: Vec<S>,
    pub adapter: A,
    pub identity: Identity,
}

impl<S, A: Adapter<S>> Group<S, A> {
    pub fn new(sources: Vec<S>, adapter: A) -> Self {
        Group {
            sources,
            adapter,
            identity: Identity::default(),
        }
    }

    pub fn with_identity(mut self, identity: Identity) -> Self {
        self.identity = identity;
        self
    }
}

impl<S, A: Adapter<S>> Element for Group<S, A> {
    fn to_node(&self, format: &NumberFormat) -> Box<dyn Node> {
        self.sources
            .iter()
            .fold(
                svg_element::Group::new().identified(&self.identity),
                |group, source| group.add(self.adapter.render(source, format)),
            )
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        geometry::{Area, Grid},
        render::SimpleArea,
        style::Style,
    };

    #[test]
    fn test_group_identity_wraps_members() {
        let grid = Grid::new(4, 4).unwrap();
        let mut member = Area::single(grid.hex(1, 1).unwrap());
        member.identity = Identity::default().with_style("fill:green".parse().unwrap());
        let plain = Area::single(grid.hex(2, 2).unwrap());

        let group = Group::new(vec![member, plain], SimpleArea::default())
            .with_identity(Identity::default().with_style(Style::new().with("fill", "pink")));
        let rendered = group.to_node(&NumberFormat::new(3)).to_string();

        assert!(rendered.starts_with("<g style=\"fill:pink\">"));
        assert_eq!(rendered.matches("style=\"fill:green\"").count(), 1);
        assert_eq!(rendered.matches("<polygon").count(), 2);
    }

    #[test]
    fn test_single_uses_source_identity() {
        let grid = Grid::new(4, 4).unwrap();
        let mut area = Area::single(grid.hex(0, 0).unwrap());
        area.identity = Identity::default().with_class("home");
        let rendered = Single::new(area, SimpleArea::default())
            .to_node(&NumberFormat::new(3))
            .to_string();
        assert!(rendered.starts_with("<g class=\"home\">"));
    }
}
