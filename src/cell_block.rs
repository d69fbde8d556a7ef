use std::slice::ChunksExact;

use serde::Serialize;

use crate::element::ElementType;
use crate::error::{MeshError, MeshResult};

/// Point coordinates stored flat, `dim` values per point.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Points {
    dim: usize,
    coords: Vec<f64>,
}

impl Points {
    /// Wrap a flat coordinate array of 2D or 3D points.
    pub fn new(dim: usize, coords: Vec<f64>) -> MeshResult<Self> {
        if dim != 2 && dim != 3 {
            return Err(MeshError::InvalidPointDimension(dim));
        }
        if coords.len() % dim != 0 {
            return Err(MeshError::ShapeMismatch {
                context: "flat coordinate array length",
                expected: coords.len() - coords.len() % dim,
                found: coords.len(),
            });
        }
        Ok(Self { dim, coords })
    }

    pub fn from_rows<const D: usize>(rows: &[[f64; D]]) -> MeshResult<Self> {
        Self::new(D, rows.iter().flat_map(|r| r.iter().copied()).collect())
    }

    pub fn empty(dim: usize) -> MeshResult<Self> {
        Self::new(dim, Vec::new())
    }

    #[inline]
    pub fn dim(&self) -> usize {
        self.dim
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.coords.len() / self.dim
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    #[inline]
    pub fn point(&self, index: usize) -> Option<&[f64]> {
        let start = index.checked_mul(self.dim)?;
        self.coords.get(start..start.checked_add(self.dim)?)
    }

    pub fn iter(&self) -> ChunksExact<'_, f64> {
        self.coords.chunks_exact(self.dim)
    }

    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.coords
    }

    /// Gather the points at `indices`, in that order, into a new array.
    pub fn select(&self, indices: &[usize]) -> MeshResult<Self> {
        let mut coords = Vec::with_capacity(indices.len() * self.dim);
        for &idx in indices {
            let p = self.point(idx).ok_or(MeshError::IndexOutOfRange {
                index: idx as i64,
                n_points: self.len(),
            })?;
            coords.extend_from_slice(p);
        }
        Ok(Self {
            dim: self.dim,
            coords,
        })
    }

    /// Coordinate-wise comparison within `tol`.
    pub fn approx_eq(&self, other: &Points, tol: f64) -> bool {
        self.dim == other.dim
            && self.coords.len() == other.coords.len()
            && self
                .coords
                .iter()
                .zip(&other.coords)
                .all(|(a, b)| (a - b).abs() <= tol)
    }
}

/// Homogeneous group of cells sharing one connectivity array.
///
/// Connectivity is stored row-major: cell `c` occupies
/// `data[c * npc..(c + 1) * npc]` where `npc` is the element's node count.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct CellBlock {
    element_type: ElementType,
    data: Vec<usize>,
}

impl CellBlock {
    pub fn new(element_type: ElementType, data: Vec<usize>) -> MeshResult<Self> {
        let npc = element_type.nodes_per_cell();
        if data.len() % npc != 0 {
            return Err(MeshError::ShapeMismatch {
                context: "flat connectivity length",
                expected: data.len() - data.len() % npc,
                found: data.len(),
            });
        }
        Ok(Self { element_type, data })
    }

    /// Build a block from one index row per cell.
    pub fn from_cells<C: AsRef<[usize]>>(element_type: ElementType, cells: &[C]) -> MeshResult<Self> {
        let npc = element_type.nodes_per_cell();
        let mut data = Vec::with_capacity(cells.len() * npc);
        for cell in cells {
            let cell = cell.as_ref();
            if cell.len() != npc {
                return Err(MeshError::ShapeMismatch {
                    context: "nodes per cell",
                    expected: npc,
                    found: cell.len(),
                });
            }
            data.extend_from_slice(cell);
        }
        Ok(Self { element_type, data })
    }

    pub fn empty(element_type: ElementType) -> Self {
        Self {
            element_type,
            data: Vec::new(),
        }
    }

    #[inline]
    pub fn element_type(&self) -> ElementType {
        self.element_type
    }

    #[inline]
    pub fn nodes_per_cell(&self) -> usize {
        self.element_type.nodes_per_cell()
    }

    /// Number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len() / self.nodes_per_cell()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn cell(&self, index: usize) -> Option<&[usize]> {
        let npc = self.nodes_per_cell();
        let start = index.checked_mul(npc)?;
        self.data.get(start..start.checked_add(npc)?)
    }

    pub fn cells(&self) -> ChunksExact<'_, usize> {
        self.data.chunks_exact(self.nodes_per_cell())
    }

    #[inline]
    pub fn data(&self) -> &[usize] {
        &self.data
    }

    pub fn into_data(self) -> Vec<usize> {
        self.data
    }

    pub fn max_index(&self) -> Option<usize> {
        self.data.iter().copied().max()
    }

    /// Fail with [`MeshError::IndexOutOfRange`] on the first index `>= n_points`.
    pub fn check_bounds(&self, n_points: usize) -> MeshResult<()> {
        match self.data.iter().find(|&&idx| idx >= n_points) {
            Some(&idx) => Err(MeshError::IndexOutOfRange {
                index: idx as i64,
                n_points,
            }),
            None => Ok(()),
        }
    }

    /// Sorted, unique node indices referenced by the block.
    pub fn node_set(&self) -> Vec<usize> {
        let mut nodes = self.data.clone();
        nodes.sort_unstable();
        nodes.dedup();
        nodes
    }

    /// Copy of the block with `delta` added to every index.
    ///
    /// Used to move between 1-based file conventions and 0-based indices.
    pub fn with_index_offset(&self, delta: i64) -> MeshResult<Self> {
        let data = self
            .data
            .iter()
            .map(|&idx| {
                let shifted = i64::try_from(idx)
                    .ok()
                    .and_then(|idx| idx.checked_add(delta))
                    .filter(|&shifted| shifted >= 0);
                match shifted {
                    Some(shifted) => Ok(shifted as usize),
                    None => Err(MeshError::IndexOutOfRange {
                        index: i64::try_from(idx).unwrap_or(i64::MAX).saturating_add(delta),
                        n_points: 0,
                    }),
                }
            })
            .collect::<MeshResult<Vec<_>>>()?;
        Ok(Self {
            element_type: self.element_type,
            data,
        })
    }

    /// Copy of the block with local node positions reordered.
    ///
    /// `order[k]` is the old local position that becomes position `k`.
    pub fn with_node_order(&self, order: &[usize]) -> MeshResult<Self> {
        let npc = self.nodes_per_cell();
        if order.len() != npc {
            return Err(MeshError::ShapeMismatch {
                context: "node order length",
                expected: npc,
                found: order.len(),
            });
        }
        let mut seen = vec![false; npc];
        for &pos in order {
            if pos >= npc || seen[pos] {
                return Err(MeshError::ShapeMismatch {
                    context: "node order entry",
                    expected: npc,
                    found: pos,
                });
            }
            seen[pos] = true;
        }

        let mut data = Vec::with_capacity(self.data.len());
        for cell in self.cells() {
            data.extend(order.iter().map(|&pos| cell[pos]));
        }
        Ok(Self {
            element_type: self.element_type,
            data,
        })
    }
}
