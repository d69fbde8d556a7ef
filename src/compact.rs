//! Point-index compaction.
//!
//! Extracted sub-meshes reference a sparse subset of the parent point array.
//! Compaction keeps only the referenced points and renumbers them densely from
//! zero, in ascending order of their old index.

use serde::Serialize;

use crate::cell_block::{CellBlock, Points};
use crate::error::{MeshError, MeshResult};

/// Dense renumbering of a sparse index set.
///
/// New index `n` stands for old index `old_indices()[n]`; old indices are
/// strictly ascending, so the mapping is deterministic.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct IndexMap {
    old_indices: Vec<usize>,
}

impl IndexMap {
    /// Collect the distinct indices referenced by `blocks`.
    pub fn from_blocks(blocks: &[CellBlock]) -> Self {
        let total: usize = blocks.iter().map(|b| b.data().len()).sum();
        let mut old_indices = Vec::with_capacity(total);
        for block in blocks {
            old_indices.extend_from_slice(block.data());
        }
        Self::from_nodes(old_indices)
    }

    pub fn from_nodes(mut nodes: Vec<usize>) -> Self {
        nodes.sort_unstable();
        nodes.dedup();
        Self { old_indices: nodes }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.old_indices.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.old_indices.is_empty()
    }

    #[inline]
    pub fn old_indices(&self) -> &[usize] {
        &self.old_indices
    }

    pub fn new_index(&self, old: usize) -> Option<usize> {
        self.old_indices.binary_search(&old).ok()
    }

    /// True when every old index maps to itself.
    pub fn is_identity(&self) -> bool {
        self.old_indices.iter().enumerate().all(|(new, &old)| new == old)
    }

    /// Translate raw node indices; fails on an index the map does not hold.
    pub fn remap_nodes(&self, nodes: &[usize]) -> MeshResult<Vec<usize>> {
        nodes
            .iter()
            .map(|&old| {
                self.new_index(old).ok_or(MeshError::IndexOutOfRange {
                    index: old as i64,
                    n_points: self.len(),
                })
            })
            .collect()
    }

    pub fn remap_block(&self, block: &CellBlock) -> MeshResult<CellBlock> {
        CellBlock::new(block.element_type(), self.remap_nodes(block.data())?)
    }
}

/// Keep only the points referenced by `blocks` and renumber them densely.
///
/// Returns the new point array and one rewritten block per input block, in
/// input order. Every index is checked against `points` first; nothing is
/// produced when one is out of range.
pub fn compact(points: &Points, blocks: &[CellBlock]) -> MeshResult<(Points, Vec<CellBlock>)> {
    let (new_points, new_blocks, _) = compact_with_map(points, blocks)?;
    Ok((new_points, new_blocks))
}

/// Same as [`compact`], also returning the renumbering that was applied.
pub fn compact_with_map(
    points: &Points,
    blocks: &[CellBlock],
) -> MeshResult<(Points, Vec<CellBlock>, IndexMap)> {
    for block in blocks {
        block.check_bounds(points.len())?;
    }

    let map = IndexMap::from_blocks(blocks);
    let new_points = points.select(map.old_indices())?;
    let new_blocks = blocks
        .iter()
        .map(|block| map.remap_block(block))
        .collect::<MeshResult<Vec<_>>>()?;

    log::trace!(
        "compacted {} blocks: {} of {} points kept",
        blocks.len(),
        map.len(),
        points.len()
    );
    Ok((new_points, new_blocks, map))
}
