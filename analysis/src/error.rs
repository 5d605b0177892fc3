use thiserror::Error;

/// A zone boundary that cannot be used for containment tests.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BoundaryError {
    #[error("Boundary needs at least 3 vertices, got {count}")]
    TooFewVertices { count: usize },

    #[error("Boundary edge {index} has zero length (vertex repeated)")]
    DegenerateEdge { index: usize },

    #[error("Boundary vertex {index} is not finite")]
    NonFiniteVertex { index: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl core::fmt::Display for Axis {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::X => write!(f, "x"),
            Self::Y => write!(f, "y"),
            Self::Z => write!(f, "z"),
        }
    }
}

/// A single row that cannot be annotated.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EventError {
    #[error("Coordinate {axis} is not numeric: {value:?}")]
    MalformedCoordinate { axis: Axis, value: String },

    #[error("Inventory item {item} has no weapon class")]
    MissingWeaponClass { item: usize },

    #[error(transparent)]
    Clock(#[from] ClockError),
}

/// Rejected row of a batch, carrying its position in the input.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("Row {row} rejected: {source}")]
pub struct RowError {
    pub row: usize,
    #[source]
    pub source: EventError,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClockError {
    #[error("Clock time {value:?} is not in M:SS format")]
    Ambiguous { value: String },
}
