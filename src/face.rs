//! Face enumeration over a cell block.

use serde::Serialize;

use crate::cell_block::CellBlock;
use crate::element::ElementType;
use crate::error::{MeshError, MeshResult};
use crate::face_template::FaceTemplate;

/// One face of one cell, holding global point indices in pattern order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Face {
    nodes: Vec<usize>,
    cell: usize,
    local_face: usize,
}

impl Face {
    pub fn new(nodes: Vec<usize>, cell: usize, local_face: usize) -> Self {
        Self {
            nodes,
            cell,
            local_face,
        }
    }

    /// Global point indices, oriented as the face pattern lists them.
    #[inline]
    pub fn nodes(&self) -> &[usize] {
        &self.nodes
    }

    /// Index of the owning cell inside its block.
    #[inline]
    pub fn cell(&self) -> usize {
        self.cell
    }

    /// Position of the pattern inside the element's template.
    #[inline]
    pub fn local_face(&self) -> usize {
        self.local_face
    }

    pub fn key(&self) -> FaceKey {
        FaceKey::new(&self.nodes)
    }

    /// Order-independent comparison of the vertex multisets.
    pub fn same_vertices(&self, other: &Face) -> bool {
        self.nodes.len() == other.nodes.len() && self.key() == other.key()
    }
}

/// Sorted vertex tuple identifying a face regardless of orientation.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FaceKey(Vec<usize>);

impl FaceKey {
    pub fn new(nodes: &[usize]) -> Self {
        let mut sorted = nodes.to_vec();
        sorted.sort_unstable();
        Self(sorted)
    }

    #[inline]
    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }
}

/// Restartable view of every face of a block.
///
/// Faces are produced pattern-major: the first face of every cell, then the
/// second face of every cell, and so on. The sequence always holds
/// `n_cells * faces_per_cell` faces.
#[derive(Copy, Clone, Debug)]
pub struct FaceEnumerator<'a> {
    block: &'a CellBlock,
    template: FaceTemplate,
}

impl<'a> FaceEnumerator<'a> {
    pub fn new(block: &'a CellBlock, template: FaceTemplate) -> MeshResult<Self> {
        if block.element_type() != template.element_type() {
            return Err(MeshError::HybridMeshNotSupported {
                found: vec![block.element_type(), template.element_type()],
            });
        }
        Ok(Self { block, template })
    }

    /// Enumerator using the registered template of the block's element type.
    pub fn for_block(block: &'a CellBlock) -> MeshResult<Self> {
        let template = FaceTemplate::for_element(block.element_type())?;
        Ok(Self { block, template })
    }

    #[inline]
    pub fn template(&self) -> FaceTemplate {
        self.template
    }

    #[inline]
    pub fn face_type(&self) -> ElementType {
        self.template.face_type()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.block.len() * self.template.faces_per_cell()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn iter(&self) -> FaceIter<'a> {
        FaceIter {
            block: self.block,
            template: self.template,
            position: 0,
            end: self.len(),
        }
    }

    pub fn faces(&self) -> Vec<Face> {
        self.iter().collect()
    }
}

impl<'a> IntoIterator for &FaceEnumerator<'a> {
    type Item = Face;
    type IntoIter = FaceIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the faces of a [`FaceEnumerator`].
#[derive(Clone, Debug)]
pub struct FaceIter<'a> {
    block: &'a CellBlock,
    template: FaceTemplate,
    position: usize,
    end: usize,
}

impl Iterator for FaceIter<'_> {
    type Item = Face;

    fn next(&mut self) -> Option<Face> {
        if self.position >= self.end {
            return None;
        }
        let n_cells = self.block.len();
        let local_face = self.position / n_cells;
        let cell_index = self.position % n_cells;
        self.position += 1;

        let cell = self.block.cell(cell_index)?;
        let pattern = self.template.patterns()[local_face];
        let nodes = pattern.iter().map(|&local| cell[local]).collect();
        Some(Face::new(nodes, cell_index, local_face))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.end - self.position;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for FaceIter<'_> {}
