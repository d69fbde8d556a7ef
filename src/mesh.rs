//! Mesh container with named boundary patches.

use std::fmt;

use serde::Serialize;

use crate::cell_block::{CellBlock, Points};
use crate::element::ElementType;
use crate::error::{MeshError, MeshResult};

/// Payload of one boundary patch.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub enum Patch {
    /// Faces of the patch as cells.
    Cells(CellBlock),
    /// Bare node indices.
    Nodes(Vec<usize>),
}

impl Patch {
    /// Cell count for [`Patch::Cells`], node count for [`Patch::Nodes`].
    pub fn len(&self) -> usize {
        match self {
            Patch::Cells(block) => block.len(),
            Patch::Nodes(nodes) => nodes.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn element_type(&self) -> Option<ElementType> {
        match self {
            Patch::Cells(block) => Some(block.element_type()),
            Patch::Nodes(_) => None,
        }
    }

    pub fn as_cells(&self) -> Option<&CellBlock> {
        match self {
            Patch::Cells(block) => Some(block),
            Patch::Nodes(_) => None,
        }
    }

    /// Sorted, unique node indices touched by the patch.
    pub fn node_set(&self) -> Vec<usize> {
        match self {
            Patch::Cells(block) => block.node_set(),
            Patch::Nodes(nodes) => {
                let mut nodes = nodes.clone();
                nodes.sort_unstable();
                nodes.dedup();
                nodes
            }
        }
    }

    fn check_bounds(&self, n_points: usize) -> MeshResult<()> {
        match self {
            Patch::Cells(block) => block.check_bounds(n_points),
            Patch::Nodes(nodes) => match nodes.iter().find(|&&idx| idx >= n_points) {
                Some(&idx) => Err(MeshError::IndexOutOfRange {
                    index: idx as i64,
                    n_points,
                }),
                None => Ok(()),
            },
        }
    }
}

/// Boundary patches keyed by name, kept in insertion order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct BoundaryPatches {
    entries: Vec<(String, Patch)>,
}

impl BoundaryPatches {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a patch, replacing (in place) any patch with the same name.
    pub fn insert(&mut self, name: impl Into<String>, patch: Patch) -> Option<Patch> {
        let name = name.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some((_, existing)) => Some(std::mem::replace(existing, patch)),
            None => {
                self.entries.push((name, patch));
                None
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&Patch> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, patch)| patch)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|(n, _)| n.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Patch)> + '_ {
        self.entries.iter().map(|(n, p)| (n.as_str(), p))
    }

    /// Patches that carry cells, in order.
    pub fn cell_blocks(&self) -> impl Iterator<Item = (&str, &CellBlock)> + '_ {
        self.iter()
            .filter_map(|(name, patch)| patch.as_cells().map(|block| (name, block)))
    }

    /// Concatenated node sets of all patches plus the cumulative end offset of
    /// each patch inside the concatenation.
    pub fn node_groups(&self) -> (Vec<usize>, Vec<usize>) {
        let mut nodes = Vec::new();
        let mut ends = Vec::with_capacity(self.entries.len());
        for (_, patch) in &self.entries {
            nodes.extend(patch.node_set());
            ends.push(nodes.len());
        }
        (nodes, ends)
    }
}

impl<S: Into<String>> FromIterator<(S, Patch)> for BoundaryPatches {
    fn from_iter<T: IntoIterator<Item = (S, Patch)>>(iter: T) -> Self {
        let mut patches = Self::new();
        for (name, patch) in iter {
            patches.insert(name, patch);
        }
        patches
    }
}

/// Points, cell blocks and named boundary patches.
#[derive(Clone, Debug, Serialize)]
pub struct Mesh {
    pub points: Points,
    pub cells: Vec<CellBlock>,
    /// Named boundary patches, empty when the format carries none.
    pub bnd_patches: BoundaryPatches,
}

impl Mesh {
    pub fn new(points: Points, cells: Vec<CellBlock>) -> Self {
        Self {
            points,
            cells,
            bnd_patches: BoundaryPatches::new(),
        }
    }

    pub fn with_patches(mut self, bnd_patches: BoundaryPatches) -> Self {
        self.bnd_patches = bnd_patches;
        self
    }

    pub fn n_cells(&self) -> usize {
        self.cells.iter().map(CellBlock::len).sum()
    }

    /// Check every cell block and patch against the point array.
    pub fn validate(&self) -> MeshResult<()> {
        let n_points = self.points.len();
        for block in &self.cells {
            block.check_bounds(n_points)?;
        }
        for (_, patch) in self.bnd_patches.iter() {
            patch.check_bounds(n_points)?;
        }
        Ok(())
    }

    /// Compare points (within `tol`), cell blocks (in order) and patches.
    pub fn approx_eq(&self, other: &Mesh, tol: f64) -> bool {
        self.points.approx_eq(&other.points, tol)
            && self.cells == other.cells
            && self.bnd_patches.len() == other.bnd_patches.len()
            && self
                .bnd_patches
                .iter()
                .all(|(name, patch)| other.bnd_patches.get(name) == Some(patch))
    }
}

impl fmt::Display for Mesh {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "<yamio mesh object>")?;
        writeln!(f, "  Number of points: {}", self.points.len())?;
        writeln!(f, "  Number of cells:")?;
        for block in &self.cells {
            writeln!(f, "    {}: {}", block.element_type(), block.len())?;
        }
        if !self.bnd_patches.is_empty() {
            writeln!(f, "  Boundary patches:")?;
            for (name, patch) in self.bnd_patches.iter() {
                match patch.element_type() {
                    Some(element_type) => {
                        writeln!(f, "    {name} ({element_type}): {}", patch.len())?
                    }
                    None => writeln!(f, "    {name}: {}", patch.len())?,
                }
            }
        }
        Ok(())
    }
}
