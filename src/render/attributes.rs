use crate::style::Identity;
use svg::node::element::{Group, Path, Polygon, Polyline};

/// SVG elements which accept the attributes of an [`Identity`].
pub(crate) trait Attributes: Sized {
    fn attribute(self, name: &'static str, value: String) -> Self;

    fn identified(self, identity: &Identity) -> Self {
        identity
            .attributes()
            .fold(self, |node, (name, value)| node.attribute(name, value))
    }
}

macro_rules! impl_attributes {
    ($($element:ty),*) => {
        $(
            impl Attributes for $element {
                fn attribute(self, name: &'static str, value: String) -> Self {
                    self.set(name, value)
                }
            }
        )*
    };
}

impl_attributes!(Group, Path, Polygon, Polyline);
