mod common;

use approx::assert_abs_diff_eq;
use yamio::{
    extract_brep, BrepBuilder, BrepConfig, CellBlock, ClassifyStrategy, ElementType, MeshError,
    Points,
};

#[test]
fn single_hexahedron_brep() {
    let points = common::unit_cube_points();
    let brep = extract_brep(&points, &[common::single_hex()]).unwrap();

    assert_eq!(brep.cells.len(), 1);
    assert_eq!(brep.cells[0].element_type(), ElementType::Quad);
    assert_eq!(brep.n_faces(), 6);
    assert_eq!(
        brep.cells[0].data(),
        &[
            0, 1, 2, 3, //
            4, 5, 6, 7, //
            1, 2, 6, 5, //
            0, 3, 7, 4, //
            2, 3, 7, 6, //
            1, 0, 4, 5,
        ]
    );
    assert_eq!(brep.points.len(), 8);
    assert_eq!(brep.points, points);
}

#[test]
fn quad_brep_drops_repeated_edge_within_block() {
    let points = common::two_quad_points();
    let brep = extract_brep(&points, &[common::two_quads()]).unwrap();

    assert_eq!(brep.cells[0].element_type(), ElementType::Line);
    assert_eq!(
        brep.cells[0].data(),
        &[0, 1, 1, 4, 1, 2, 4, 5, 2, 3, 5, 2, 3, 0]
    );
    assert_eq!(brep.points.len(), 6);
}

#[test]
fn brep_points_are_compacted() {
    // the triangle leaves points 0, 2 and 3 unused
    let points = Points::from_rows(&[
        [0.0, 0.0],
        [1.0, 0.0],
        [2.0, 0.0],
        [0.0, 1.0],
        [1.0, 1.0],
        [2.0, 1.0],
    ])
    .unwrap();
    let block = CellBlock::new(ElementType::Triangle, vec![5, 4, 1]).unwrap();
    let brep = extract_brep(&points, &[block]).unwrap();

    assert_eq!(brep.points.len(), 3);
    assert_abs_diff_eq!(brep.points.point(0).unwrap()[0], 1.0);
    assert_abs_diff_eq!(brep.points.point(2).unwrap()[1], 1.0);
    assert_eq!(brep.cells[0].data(), &[2, 1, 1, 0, 0, 2]);
}

#[test]
fn tetrahedra_are_rejected() {
    let points = common::unit_cube_points();
    let tets = CellBlock::new(ElementType::Tetrahedron, vec![0, 1, 2, 4]).unwrap();
    assert_eq!(
        extract_brep(&points, &[tets.clone()]),
        Err(MeshError::UnsupportedElementType {
            element_type: ElementType::Tetrahedron
        })
    );
    // a supported block first does not yield a partial result
    assert!(extract_brep(&points, &[common::single_hex(), tets]).is_err());
}

#[test]
fn blocks_of_different_types_stay_separate() {
    let points = common::two_hex_points();
    let hexes = common::two_hex();
    let quads = CellBlock::new(ElementType::Quad, vec![0, 1, 8, 9]).unwrap();
    let brep = extract_brep(&points, &[hexes, quads]).unwrap();

    assert_eq!(brep.cells.len(), 2);
    assert_eq!(brep.cells[0].element_type(), ElementType::Quad);
    assert_eq!(brep.cells[0].len(), 11);
    assert_eq!(brep.cells[1].element_type(), ElementType::Line);
    assert_eq!(brep.cells[1].len(), 4);
    assert_eq!(brep.points.len(), 12);
    assert!(matches!(
        brep.merged_block(),
        Err(MeshError::HybridMeshNotSupported { .. })
    ));
}

#[test]
fn empty_block_list_is_valid() {
    let points = common::unit_cube_points();
    let brep = extract_brep(&points, &[]).unwrap();
    assert!(brep.cells.is_empty());
    assert!(brep.points.is_empty());
    assert_eq!(brep.merged_block(), Ok(None));
}

#[test]
fn out_of_range_connectivity_is_reported() {
    let points = common::two_quad_points();
    let block = CellBlock::new(ElementType::Quad, vec![0, 1, 2, 6]).unwrap();
    assert_eq!(
        extract_brep(&points, &[block]),
        Err(MeshError::IndexOutOfRange {
            index: 6,
            n_points: 6
        })
    );
}

#[test]
fn boundary_faces_check_interior_nodes() {
    // 2x2 quad grid whose center node points past the array
    let points = Points::from_rows(&[
        [0.0, 0.0],
        [1.0, 0.0],
        [2.0, 0.0],
        [0.0, 1.0],
        [2.0, 1.0],
        [0.0, 2.0],
        [1.0, 2.0],
        [2.0, 2.0],
    ])
    .unwrap();
    let block = CellBlock::from_cells(
        ElementType::Quad,
        &[[0usize, 1, 99, 3], [1, 2, 4, 99], [3, 99, 6, 5], [99, 4, 7, 6]],
    )
    .unwrap();
    assert_eq!(
        BrepBuilder::default().boundary_faces(&points, &block),
        Err(MeshError::IndexOutOfRange {
            index: 99,
            n_points: 8
        })
    );
}

#[test]
fn boundary_faces_of_glued_hexahedra() {
    let points = common::two_hex_points();
    let builder = BrepBuilder::default();
    let skin = builder.boundary_faces(&points, &common::two_hex()).unwrap();

    assert_eq!(skin.n_faces(), 10);
    assert_eq!(skin.points.len(), 12);
    let shared = [1usize, 2, 5, 6];
    let has_shared = skin.cells[0].cells().any(|face| {
        let mut sorted = face.to_vec();
        sorted.sort_unstable();
        sorted == shared
    });
    assert!(!has_shared);
}

#[test]
fn boundary_faces_of_quads_with_pairwise_strategy() {
    let points = common::two_quad_points();
    let config = BrepConfig::default().with_strategy(ClassifyStrategy::Pairwise);
    let skin = BrepBuilder::new(config)
        .boundary_faces(&points, &common::two_quads())
        .unwrap();
    assert_eq!(skin.cells[0].element_type(), ElementType::Line);
    assert_eq!(skin.cells[0].data(), &[0, 1, 1, 4, 4, 5, 2, 3, 5, 2, 3, 0]);
}

#[test]
fn boundary_faces_reject_tetrahedra() {
    let points = common::unit_cube_points();
    let tets = CellBlock::new(ElementType::Tetrahedron, vec![0, 1, 2, 4]).unwrap();
    assert!(matches!(
        BrepBuilder::default().boundary_faces(&points, &tets),
        Err(MeshError::UnsupportedElementType { .. })
    ));
}

#[test]
fn input_is_left_untouched() {
    let points = common::two_hex_points();
    let block = common::two_hex();
    let first = extract_brep(&points, std::slice::from_ref(&block)).unwrap();
    let second = extract_brep(&points, std::slice::from_ref(&block)).unwrap();
    assert_eq!(first, second);
    assert_eq!(block, common::two_hex());
    assert_eq!(points, common::two_hex_points());
}
