#![allow(dead_code)]

use yamio::{CellBlock, ElementType, Points};

/// Unit cube corners, bottom face first.
pub fn unit_cube_points() -> Points {
    Points::from_rows(&[
        [0.0, 0.0, 0.0],
        [1.0, 0.0, 0.0],
        [1.0, 1.0, 0.0],
        [0.0, 1.0, 0.0],
        [0.0, 0.0, 1.0],
        [1.0, 0.0, 1.0],
        [1.0, 1.0, 1.0],
        [0.0, 1.0, 1.0],
    ])
    .unwrap()
}

pub fn single_hex() -> CellBlock {
    CellBlock::from_cells(ElementType::Hexahedron, &[[0usize, 1, 2, 3, 4, 5, 6, 7]]).unwrap()
}

/// Two unit cubes side by side along x, glued on the x = 1 face.
pub fn two_hex_points() -> Points {
    Points::from_rows(&[
        [0.0, 0.0, 0.0],
        [1.0, 0.0, 0.0],
        [1.0, 1.0, 0.0],
        [0.0, 1.0, 0.0],
        [0.0, 0.0, 1.0],
        [1.0, 0.0, 1.0],
        [1.0, 1.0, 1.0],
        [0.0, 1.0, 1.0],
        [2.0, 0.0, 0.0],
        [2.0, 1.0, 0.0],
        [2.0, 0.0, 1.0],
        [2.0, 1.0, 1.0],
    ])
    .unwrap()
}

pub fn two_hex() -> CellBlock {
    CellBlock::from_cells(
        ElementType::Hexahedron,
        &[[0usize, 1, 2, 3, 4, 5, 6, 7], [1, 8, 9, 2, 5, 10, 11, 6]],
    )
    .unwrap()
}

/// Two unit squares sharing the edge 1-2.
pub fn two_quad_points() -> Points {
    Points::from_rows(&[
        [0.0, 0.0],
        [1.0, 0.0],
        [1.0, 1.0],
        [0.0, 1.0],
        [2.0, 0.0],
        [2.0, 1.0],
    ])
    .unwrap()
}

pub fn two_quads() -> CellBlock {
    CellBlock::from_cells(ElementType::Quad, &[[0usize, 1, 2, 3], [1, 4, 5, 2]]).unwrap()
}
