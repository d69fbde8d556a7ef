//! Error type shared by every topology operation.

use thiserror::Error;

use crate::element::ElementType;

/// Result alias used throughout the crate.
pub type MeshResult<T> = Result<T, MeshError>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MeshError {
    /// No face template exists for the element type.
    #[error("face extraction is not implemented for `{element_type}` cells")]
    UnsupportedElementType { element_type: ElementType },

    /// An operation needs a single element type but received several.
    #[error("hybrid meshes are not supported (found element types: {})", join_types(.found))]
    HybridMeshNotSupported { found: Vec<ElementType> },

    /// Connectivity references a point that does not exist.
    #[error("point index {index} is out of range for {n_points} points")]
    IndexOutOfRange { index: i64, n_points: usize },

    /// An array does not have the shape its context requires.
    #[error("{context}: expected {expected}, found {found}")]
    ShapeMismatch {
        context: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("points must be 2D or 3D, got dimension {0}")]
    InvalidPointDimension(usize),

    #[error("unknown element type name `{0}`")]
    UnknownElementName(String),
}

fn join_types(types: &[ElementType]) -> String {
    types
        .iter()
        .map(|t| t.name())
        .collect::<Vec<_>>()
        .join(", ")
}
