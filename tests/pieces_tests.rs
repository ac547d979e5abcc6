//! Piece catalog tests - shapes, rotation matrices and kick tables

use blockfall::core::{kicks_for, shape_of, spawn_shape, spawn_x};
use blockfall::types::{PieceKind, RotationState};

#[test]
fn test_all_pieces_have_four_cells_in_every_rotation() {
    for kind in PieceKind::ALL {
        for rotation in [
            RotationState::Zero,
            RotationState::Right,
            RotationState::Two,
            RotationState::Left,
        ] {
            assert_eq!(
                shape_of(kind, rotation).cells().count(),
                4,
                "{kind:?} at {rotation:?}"
            );
        }
    }
}

#[test]
fn test_o_piece_shape_is_rotation_invariant() {
    let spawn = spawn_shape(PieceKind::O);
    for rotation in [
        RotationState::Right,
        RotationState::Two,
        RotationState::Left,
    ] {
        assert_eq!(shape_of(PieceKind::O, rotation), spawn);
    }
}

#[test]
fn test_shapes_stay_inside_matrix_bounds() {
    for kind in PieceKind::ALL {
        for rotation in [
            RotationState::Zero,
            RotationState::Right,
            RotationState::Two,
            RotationState::Left,
        ] {
            let shape = shape_of(kind, rotation);
            let size = shape.size() as i8;
            for (dx, dy) in shape.cells() {
                assert!(dx >= 0 && dx < size, "{kind:?} {rotation:?} dx={dx}");
                assert!(dy >= 0 && dy < size, "{kind:?} {rotation:?} dy={dy}");
            }
        }
    }
}

#[test]
fn test_spawned_pieces_fit_the_grid_horizontally() {
    for kind in PieceKind::ALL {
        let x = spawn_x(kind);
        let shape = spawn_shape(kind);
        for (dx, _) in shape.cells() {
            let col = x + dx;
            assert!((0..10).contains(&col), "{kind:?} spawns at column {col}");
        }
    }
}

#[test]
fn test_kicks_exist_only_for_clockwise_transitions() {
    let states = [
        RotationState::Zero,
        RotationState::Right,
        RotationState::Two,
        RotationState::Left,
    ];
    for kind in PieceKind::ALL {
        for from in states {
            for to in states {
                let kicks = kicks_for(kind, from, to);
                if kind == PieceKind::O || to != from.next() {
                    assert!(kicks.is_none(), "{kind:?} {from:?}->{to:?}");
                } else {
                    assert_eq!(kicks.unwrap().len(), 5, "{kind:?} {from:?}->{to:?}");
                }
            }
        }
    }
}
