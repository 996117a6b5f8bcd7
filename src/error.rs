//! Errors raised by the geometry kernel.
//!
//! Every failure here is local and synchronous: the caller handed us an
//! argument we cannot work with.

pub type Result<T> = std::result::Result<T, GeometryError>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GeometryError {
    #[error("line must have at least one point")]
    EmptyLine,

    #[error("route must have at least one point")]
    EmptyRoute,

    #[error("truncated polyline: run starting before byte {offset} has no terminating character")]
    TruncatedPolyline { offset: usize },

    #[error("invalid polyline character {found:?} at byte {offset}")]
    InvalidCharacter { offset: usize, found: char },

    #[error("polyline value overflows at byte {offset}")]
    Overflow { offset: usize },

    #[error("unsupported geometry format `{0}`, expected `polyline6`")]
    UnsupportedFormat(String),

    #[error("stop {index} has no location")]
    MissingStopLocation { index: usize },
}

impl GeometryError {
    /// All kernel errors are invalid-argument conditions; there is no I/O
    /// and nothing worth retrying.
    pub fn is_invalid_argument(&self) -> bool {
        true
    }
}
