//! Closed vocabulary of cell element types.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{MeshError, MeshResult};

/// Element type of a [`CellBlock`](crate::CellBlock).
///
/// Names follow the conventions of the mesh-data library the format readers
/// are built on (`tetra`, `hexahedron`, ...).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementType {
    Vertex,
    Line,
    Triangle,
    Quad,
    #[serde(rename = "tetra")]
    Tetrahedron,
    Hexahedron,
    Wedge,
    Pyramid,
}

impl ElementType {
    /// Every element type, in declaration order.
    pub fn all() -> [Self; 8] {
        [
            Self::Vertex,
            Self::Line,
            Self::Triangle,
            Self::Quad,
            Self::Tetrahedron,
            Self::Hexahedron,
            Self::Wedge,
            Self::Pyramid,
        ]
    }

    /// Number of nodes that define one cell of this type.
    pub fn nodes_per_cell(self) -> usize {
        match self {
            Self::Vertex => 1,
            Self::Line => 2,
            Self::Triangle => 3,
            Self::Quad => 4,
            Self::Tetrahedron => 4,
            Self::Hexahedron => 8,
            Self::Wedge => 6,
            Self::Pyramid => 5,
        }
    }

    /// Topological dimension of the element.
    pub fn dimension(self) -> usize {
        match self {
            Self::Vertex => 0,
            Self::Line => 1,
            Self::Triangle | Self::Quad => 2,
            Self::Tetrahedron | Self::Hexahedron | Self::Wedge | Self::Pyramid => 3,
        }
    }

    /// Canonical lowercase name, as used by the format readers.
    pub fn name(self) -> &'static str {
        match self {
            Self::Vertex => "vertex",
            Self::Line => "line",
            Self::Triangle => "triangle",
            Self::Quad => "quad",
            Self::Tetrahedron => "tetra",
            Self::Hexahedron => "hexahedron",
            Self::Wedge => "wedge",
            Self::Pyramid => "pyramid",
        }
    }

    /// Element type of the faces induced by this element.
    ///
    /// Only types with a face template have one; everything else fails with
    /// [`MeshError::UnsupportedElementType`].
    pub fn boundary_type(self) -> MeshResult<Self> {
        match self {
            Self::Hexahedron => Ok(Self::Quad),
            Self::Quad | Self::Triangle => Ok(Self::Line),
            other => Err(MeshError::UnsupportedElementType {
                element_type: other,
            }),
        }
    }
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ElementType {
    type Err = MeshError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_ascii_lowercase();
        let element_type = match lowered.as_str() {
            "vertex" => Self::Vertex,
            "line" => Self::Line,
            "triangle" => Self::Triangle,
            "quad" | "quadrilateral" => Self::Quad,
            "tetra" | "tetrahedron" => Self::Tetrahedron,
            "hexahedron" | "hexa" => Self::Hexahedron,
            "wedge" => Self::Wedge,
            "pyramid" => Self::Pyramid,
            _ => return Err(MeshError::UnknownElementName(s.to_string())),
        };
        Ok(element_type)
    }
}
