use serde::{Deserialize, Serialize};
use std::{
    path::{Path, PathBuf},
    str::FromStr,
};
use thiserror::Error;

/// Default location of the render configuration: `<config_dir>/hexlib/config.toml`.
pub fn path() -> Result<PathBuf, Error> {
    dirs::config_dir()
        .map(|dir| dir.join("hexlib").join("config.toml"))
        .ok_or(Error::NoConfigDir)
}

/// Settings which control how geometry is turned into SVG.
///
/// Missing fields take their default values when deserialized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// SVG user units per hex width.
    pub scale: f64,
    /// Blank space around the grid, in hex widths.
    pub margin: f64,
    /// Maximum decimal places for emitted coordinates.
    pub precision: usize,
}

impl Default for RenderConfig {
    fn default() -> Self {
        RenderConfig {
            scale: 40.0,
            margin: 0.25,
            precision: 3,
        }
    }
}

impl RenderConfig {
    pub fn save(&self) -> Result<(), Error> {
        self.save_to(path()?)
    }

    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<(), Error> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let serialized = toml::to_string_pretty(self)?;
        std::fs::write(path, serialized.as_bytes()).map_err(Into::into)
    }

    pub fn load() -> Result<Self, Error> {
        Self::load_from(path()?)
    }

    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, Error> {
        std::fs::read_to_string(path)?.parse()
    }
}

impl FromStr for RenderConfig {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        toml::from_str(s).map_err(Into::into)
    }
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("configuration could not be loaded")]
    CouldNotLoad(#[from] std::io::Error),
    #[error("malformed configuration")]
    Malformed(#[from] toml::de::Error),
    #[error("failed to serialize")]
    CouldNotSerialize(#[from] toml::ser::Error),
    #[error("no configuration directory is available for this user")]
    NoConfigDir,
}
