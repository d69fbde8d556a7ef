//! Per-element face definitions.
//!
//! Each template lists, in a fixed order, the local vertex positions that make
//! up every face of a cell. The orderings are part of the public contract:
//! boundary meshes built from them are reproducible node for node.

use serde::Serialize;

use crate::element::ElementType;
use crate::error::{MeshError, MeshResult};

const TRIANGLE_EDGES: &[&[usize]] = &[&[0, 1], &[1, 2], &[2, 0]];

const QUAD_EDGES: &[&[usize]] = &[&[0, 1], &[1, 2], &[2, 3], &[3, 0]];

// bottom, top, front, back, right, left
const HEXAHEDRON_FACES: &[&[usize]] = &[
    &[0, 1, 2, 3],
    &[4, 5, 6, 7],
    &[1, 2, 6, 5],
    &[0, 3, 7, 4],
    &[2, 3, 7, 6],
    &[1, 0, 4, 5],
];

/// Face patterns of one element type.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FaceTemplate {
    element_type: ElementType,
    face_type: ElementType,
    patterns: &'static [&'static [usize]],
}

impl FaceTemplate {
    /// Look up the template for `element_type`.
    ///
    /// Tetrahedra, wedges, pyramids, lines and vertices have no template and
    /// fail with [`MeshError::UnsupportedElementType`].
    pub fn for_element(element_type: ElementType) -> MeshResult<Self> {
        let patterns = match element_type {
            ElementType::Triangle => TRIANGLE_EDGES,
            ElementType::Quad => QUAD_EDGES,
            ElementType::Hexahedron => HEXAHEDRON_FACES,
            other => {
                return Err(MeshError::UnsupportedElementType {
                    element_type: other,
                })
            }
        };
        Ok(Self {
            element_type,
            face_type: element_type.boundary_type()?,
            patterns,
        })
    }

    #[inline]
    pub fn element_type(&self) -> ElementType {
        self.element_type
    }

    /// Element type of the faces this template produces.
    #[inline]
    pub fn face_type(&self) -> ElementType {
        self.face_type
    }

    #[inline]
    pub fn patterns(&self) -> &'static [&'static [usize]] {
        self.patterns
    }

    #[inline]
    pub fn faces_per_cell(&self) -> usize {
        self.patterns.len()
    }

    #[inline]
    pub fn nodes_per_face(&self) -> usize {
        self.face_type.nodes_per_cell()
    }
}
