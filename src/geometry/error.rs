use super::hex::ParseStepsError;

/// An error which can arise while constructing hex geometry.
///
/// Construction is all-or-nothing: when one of these is returned, no partially-built
/// `Hex`, `Path`, or `Area` exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("grid dimensions must be positive; got {width}x{height}")]
    InvalidDimensions { width: i32, height: i32 },
    #[error("hex ({col}, {row}) is outside the grid")]
    OutOfBounds { col: i32, row: i32 },
    #[error("hexes do not form a connected area")]
    Disconnected,
    #[error("an area must contain at least one hex")]
    EmptyArea,
    #[error("radius must not be negative; got {0}")]
    InvalidRadius(i32),
    #[error("boundary is not closed")]
    OpenBoundary,
    #[error("no route connects the requested hexes")]
    Unreachable,
    #[error("consecutive path hexes ({0}, {1}) are not adjacent")]
    NotContiguous(usize, usize),
    #[error("malformed step-string")]
    Steps(#[from] ParseStepsError),
}
