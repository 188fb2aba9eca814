//! Presentation attributes attached to paths, areas, and groups.

use std::{collections::BTreeMap, fmt, str::FromStr};

/// A set of CSS property declarations, such as `fill:pink;stroke:darkred`.
///
/// Properties are kept sorted by name, so equal styles always render identically.
///
/// ```
/// # use hexlib::style::Style;
/// let style: Style = "stroke: darkred; fill:pink;".parse().unwrap();
/// assert_eq!(style.get("fill"), Some("pink"));
/// assert_eq!(style.to_string(), "fill:pink;stroke:darkred");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Style {
    properties: BTreeMap<String, String>,
}

impl Style {
    pub fn new() -> Style {
        Style::default()
    }

    pub fn get(&self, property: &str) -> Option<&str> {
        self.properties.get(property).map(String::as_str)
    }

    pub fn set(&mut self, property: impl Into<String>, value: impl Into<String>) {
        self.properties.insert(property.into(), value.into());
    }

    /// Builder form of [`Style::set`].
    pub fn with(mut self, property: impl Into<String>, value: impl Into<String>) -> Style {
        self.set(property, value);
        self
    }

    pub fn remove(&mut self, property: &str) -> Option<String> {
        self.properties.remove(property)
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn iter(&self) -> impl '_ + Iterator<Item = (&str, &str)> {
        self.properties
            .iter()
            .map(|(property, value)| (property.as_str(), value.as_str()))
    }

    /// Copy every property of `other` into `self`, replacing existing values.
    pub fn merge(&mut self, other: &Style) {
        for (property, value) in other.iter() {
            self.set(property, value);
        }
    }
}

impl FromStr for Style {
    type Err = ParseStyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut style = Style::new();
        for declaration in s.split(';').map(str::trim).filter(|d| !d.is_empty()) {
            let (property, value) = declaration
                .split_once(':')
                .ok_or_else(|| ParseStyleError::MissingColon(declaration.to_owned()))?;
            let property = property.trim();
            if property.is_empty() {
                return Err(ParseStyleError::EmptyProperty(declaration.to_owned()));
            }
            style.set(property, value.trim());
        }
        Ok(style)
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, (property, value)) in self.iter().enumerate() {
            if idx > 0 {
                f.write_str(";")?;
            }
            write!(f, "{property}:{value}")?;
        }
        Ok(())
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Style {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Style {
            properties: iter
                .into_iter()
                .map(|(property, value)| (property.into(), value.into()))
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseStyleError {
    #[error("style declaration {0:?} has no `:`")]
    MissingColon(String),
    #[error("style declaration {0:?} names no property")]
    EmptyProperty(String),
}

/// The optional `id`, `class`, and `style` attributes of a rendered element.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Identity {
    pub id: Option<String>,
    pub class: Option<String>,
    pub style: Option<Style>,
}

impl Identity {
    pub fn with_id(mut self, id: impl Into<String>) -> Identity {
        self.id = Some(id.into());
        self
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Identity {
        self.class = Some(class.into());
        self
    }

    pub fn with_style(mut self, style: Style) -> Identity {
        self.style = Some(style);
        self
    }

    /// The attributes to emit: only those which are present.
    ///
    /// An empty style is treated as absent.
    pub fn attributes(&self) -> impl '_ + Iterator<Item = (&'static str, String)> {
        let id = self.id.clone().map(|id| ("id", id));
        let class = self.class.clone().map(|class| ("class", class));
        let style = self
            .style
            .as_ref()
            .filter(|style| !style.is_empty())
            .map(|style| ("style", style.to_string()));
        id.into_iter().chain(class).chain(style)
    }
}
