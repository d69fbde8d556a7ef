//! Mesh topology core: face templates, face classification, point-index
//! compaction and boundary representation (BREP) extraction.
//!
//! Format readers and writers live elsewhere; they hand this crate point
//! arrays and cell blocks and get back freshly allocated boundary meshes.

pub mod brep;
pub mod cell_block;
pub mod classify;
pub mod compact;
pub mod config;
pub mod element;
pub mod error;
pub mod face;
pub mod face_template;
pub mod mesh;

pub use brep::{
    extract_brep, merge_cell_blocks, mesh_from_patches, patch_meshes, BoundaryMesh, BrepBuilder,
};
pub use cell_block::{CellBlock, Points};
pub use classify::{classify, dedup, occurrence_counts, Classification};
pub use compact::{compact, compact_with_map, IndexMap};
pub use config::{BrepConfig, ClassifyStrategy};
pub use element::ElementType;
pub use error::{MeshError, MeshResult};
pub use face::{Face, FaceEnumerator, FaceIter, FaceKey};
pub use face_template::FaceTemplate;
pub use mesh::{BoundaryPatches, Mesh, Patch};
