//! Boundary representation (BREP) extraction.
//!
//! A BREP is the one-dimension-lower mesh made of the faces of a cell block:
//! hexahedra give quads, quads and triangles give lines. The result owns a
//! compacted copy of the points it references and never aliases the input.

use serde::Serialize;

use crate::cell_block::{CellBlock, Points};
use crate::classify::{self, Classification};
use crate::compact::compact;
use crate::config::BrepConfig;
use crate::element::ElementType;
use crate::error::{MeshError, MeshResult};
use crate::face::{Face, FaceEnumerator};
use crate::mesh::{BoundaryPatches, Mesh};

/// Self-contained boundary mesh produced by the builder.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BoundaryMesh {
    /// Compacted points referenced by the faces.
    pub points: Points,
    /// One face block per input block.
    pub cells: Vec<CellBlock>,
}

impl BoundaryMesh {
    /// Total number of faces over all blocks.
    pub fn n_faces(&self) -> usize {
        self.cells.iter().map(CellBlock::len).sum()
    }

    /// All blocks raveled into one. Fails when the blocks differ in type.
    pub fn merged_block(&self) -> MeshResult<Option<CellBlock>> {
        merge_cell_blocks(&self.cells)
    }

    pub fn into_mesh(self) -> Mesh {
        Mesh::new(self.points, self.cells)
    }
}

/// Concatenate blocks of a single element type, in order.
///
/// Returns `Ok(None)` for an empty slice and
/// [`MeshError::HybridMeshNotSupported`] when more than one type is present.
pub fn merge_cell_blocks(blocks: &[CellBlock]) -> MeshResult<Option<CellBlock>> {
    let Some(first) = blocks.first() else {
        return Ok(None);
    };
    let mut types: Vec<ElementType> = blocks.iter().map(CellBlock::element_type).collect();
    types.sort_unstable();
    types.dedup();
    if types.len() > 1 {
        return Err(MeshError::HybridMeshNotSupported { found: types });
    }

    let data = blocks.iter().flat_map(|b| b.data().iter().copied()).collect();
    CellBlock::new(first.element_type(), data).map(Some)
}

fn faces_to_block(face_type: ElementType, faces: &[Face]) -> MeshResult<CellBlock> {
    let data = faces.iter().flat_map(|f| f.nodes().iter().copied()).collect();
    CellBlock::new(face_type, data)
}

/// Entry point for BREP extraction and boundary classification.
#[derive(Clone, Debug, Default)]
pub struct BrepBuilder {
    config: BrepConfig,
}

impl BrepBuilder {
    pub fn new(config: BrepConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &BrepConfig {
        &self.config
    }

    /// Build the BREP of `blocks`.
    ///
    /// Each block is expanded into its faces and repeated faces *within that
    /// block* are dropped, keeping the first occurrence. One face block is
    /// emitted per input block, then all of them are compacted together
    /// against `points`. The first failing block aborts the call.
    pub fn extract_brep(&self, points: &Points, blocks: &[CellBlock]) -> MeshResult<BoundaryMesh> {
        let mut face_blocks = Vec::with_capacity(blocks.len());
        let mut n_raw = 0usize;
        for (idx, block) in blocks.iter().enumerate() {
            let enumerator = FaceEnumerator::for_block(block)?;
            let raw = enumerator.faces();
            let unique = classify::dedup(&raw);
            log::trace!(
                "block {idx} ({}): {} raw faces, {} unique {}",
                block.element_type(),
                raw.len(),
                unique.len(),
                enumerator.face_type()
            );
            n_raw += raw.len();
            face_blocks.push(faces_to_block(enumerator.face_type(), &unique)?);
        }

        let (points, cells) = compact(points, &face_blocks)?;
        let brep = BoundaryMesh { points, cells };
        log::debug!(
            "brep: {} blocks, {n_raw} faces enumerated, {} kept, {} points",
            blocks.len(),
            brep.n_faces(),
            brep.points.len()
        );
        Ok(brep)
    }

    /// Split the faces of `block` into boundary and interior faces.
    pub fn classify_block(&self, block: &CellBlock) -> MeshResult<Classification> {
        let faces = FaceEnumerator::for_block(block)?.faces();
        Ok(classify::classify(&faces, &self.config))
    }

    /// Outer skin of `block`: its faces that belong to exactly one cell.
    pub fn boundary_faces(&self, points: &Points, block: &CellBlock) -> MeshResult<BoundaryMesh> {
        let face_type = block.element_type().boundary_type()?;
        block.check_bounds(points.len())?;
        let classification = self.classify_block(block)?;
        let skin = faces_to_block(face_type, &classification.boundary)?;
        let (points, cells) = compact(points, &[skin])?;
        log::debug!(
            "boundary faces: {} of {} faces kept, {} points",
            classification.boundary.len(),
            classification.len(),
            points.len()
        );
        Ok(BoundaryMesh { points, cells })
    }

    /// BREP of the cell patches of a boundary-patch collection, in patch order.
    ///
    /// Node-only patches carry no cells and are skipped.
    pub fn brep_from_patches(
        &self,
        points: &Points,
        patches: &BoundaryPatches,
    ) -> MeshResult<BoundaryMesh> {
        let mut blocks = Vec::with_capacity(patches.len());
        for (name, patch) in patches.iter() {
            match patch.as_cells() {
                Some(block) => blocks.push(block.clone()),
                None => log::warn!("patch `{name}` holds bare nodes, skipped for brep"),
            }
        }
        self.extract_brep(points, &blocks)
    }
}

/// [`BrepBuilder::extract_brep`] with the default configuration.
pub fn extract_brep(points: &Points, blocks: &[CellBlock]) -> MeshResult<BoundaryMesh> {
    BrepBuilder::default().extract_brep(points, blocks)
}

/// One standalone mesh per cell patch of `mesh`, keyed by patch name.
pub fn patch_meshes(mesh: &Mesh) -> MeshResult<Vec<(String, Mesh)>> {
    mesh.bnd_patches
        .cell_blocks()
        .map(|(name, block)| -> MeshResult<(String, Mesh)> {
            let (points, cells) = compact(&mesh.points, std::slice::from_ref(block))?;
            Ok((name.to_string(), Mesh::new(points, cells)))
        })
        .collect()
}

/// All cell patches of `mesh` as one local mesh with a single raveled block.
///
/// Patches must share one element type.
pub fn mesh_from_patches(mesh: &Mesh) -> MeshResult<Mesh> {
    let blocks: Vec<CellBlock> = mesh
        .bnd_patches
        .cell_blocks()
        .map(|(_, block)| block.clone())
        .collect();
    match merge_cell_blocks(&blocks)? {
        Some(merged) => {
            let (points, cells) = compact(&mesh.points, &[merged])?;
            Ok(Mesh::new(points, cells))
        }
        None => Ok(Mesh::new(Points::empty(mesh.points.dim())?, Vec::new())),
    }
}
