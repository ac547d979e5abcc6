//! Piece catalog - tetromino shapes and SRS kick tables
//!
//! Static, read-only definitions of the seven pieces: a square boolean shape
//! matrix per piece (3x3, or 4x4 for I, 2x2 for O), a fill color carried on
//! `PieceKind`, and per-transition kick offsets for clockwise rotation.
//! Reference: https://tetris.wiki/SRS (offsets converted to row-down
//! coordinates, so positive dy moves toward the floor).

use crate::types::{PieceKind, RotationState};

/// A square boolean shape matrix, at most 4x4.
///
/// Cells are indexed `[row][col]`; only the top-left `size x size` corner is
/// meaningful. The active piece carries its current rotated matrix, so
/// rotation is a pure matrix transform here plus kick resolution elsewhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    size: u8,
    cells: [[bool; 4]; 4],
}

impl Shape {
    fn from_rows(size: u8, rows: [[u8; 4]; 4]) -> Self {
        debug_assert!(size >= 2 && size <= 4, "malformed shape size");
        let mut cells = [[false; 4]; 4];
        for r in 0..size as usize {
            for c in 0..size as usize {
                cells[r][c] = rows[r][c] != 0;
            }
        }
        Self { size, cells }
    }

    pub fn size(&self) -> u8 {
        self.size
    }

    /// Iterate the filled cells as (dx, dy) offsets from the piece anchor.
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        let size = self.size as usize;
        (0..size).flat_map(move |r| {
            (0..size).filter_map(move |c| {
                if self.cells[r][c] {
                    Some((c as i8, r as i8))
                } else {
                    None
                }
            })
        })
    }

    /// Rotate the matrix a quarter turn clockwise.
    pub fn rotate_cw(&self) -> Shape {
        let size = self.size as usize;
        let mut rotated = [[false; 4]; 4];
        for r in 0..size {
            for c in 0..size {
                rotated[c][size - 1 - r] = self.cells[r][c];
            }
        }
        Shape {
            size: self.size,
            cells: rotated,
        }
    }
}

/// Shape of a piece in its spawn orientation.
pub fn spawn_shape(kind: PieceKind) -> Shape {
    match kind {
        PieceKind::I => Shape::from_rows(
            4,
            [[0, 0, 0, 0], [1, 1, 1, 1], [0, 0, 0, 0], [0, 0, 0, 0]],
        ),
        PieceKind::J => Shape::from_rows(
            3,
            [[1, 0, 0, 0], [1, 1, 1, 0], [0, 0, 0, 0], [0, 0, 0, 0]],
        ),
        PieceKind::L => Shape::from_rows(
            3,
            [[0, 0, 1, 0], [1, 1, 1, 0], [0, 0, 0, 0], [0, 0, 0, 0]],
        ),
        PieceKind::O => Shape::from_rows(
            2,
            [[1, 1, 0, 0], [1, 1, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]],
        ),
        PieceKind::S => Shape::from_rows(
            3,
            [[0, 1, 1, 0], [1, 1, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]],
        ),
        PieceKind::T => Shape::from_rows(
            3,
            [[0, 1, 0, 0], [1, 1, 1, 0], [0, 0, 0, 0], [0, 0, 0, 0]],
        ),
        PieceKind::Z => Shape::from_rows(
            3,
            [[1, 1, 0, 0], [0, 1, 1, 0], [0, 0, 0, 0], [0, 0, 0, 0]],
        ),
    }
}

/// Shape of a piece at an arbitrary rotation state.
pub fn shape_of(kind: PieceKind, rotation: RotationState) -> Shape {
    let turns = match rotation {
        RotationState::Zero => 0,
        RotationState::Right => 1,
        RotationState::Two => 2,
        RotationState::Left => 3,
    };
    let mut shape = spawn_shape(kind);
    for _ in 0..turns {
        shape = shape.rotate_cw();
    }
    shape
}

/// Spawn anchor column for a piece: centered on the grid.
pub fn spawn_x(kind: PieceKind) -> i8 {
    let width = crate::types::GRID_WIDTH as i8;
    width / 2 - spawn_shape(kind).size() as i8 / 2
}

/// JLSTZ kick offsets, clockwise transitions (row-down coordinates)
const JLSTZ_CW_FROM_ZERO: [(i8, i8); 5] = [(0, 0), (-1, 0), (-1, -1), (0, 2), (-1, 2)];
const JLSTZ_CW_FROM_RIGHT: [(i8, i8); 5] = [(0, 0), (1, 0), (1, 1), (0, -2), (1, -2)];
const JLSTZ_CW_FROM_TWO: [(i8, i8); 5] = [(0, 0), (1, 0), (1, -1), (0, 2), (1, 2)];
const JLSTZ_CW_FROM_LEFT: [(i8, i8); 5] = [(0, 0), (-1, 0), (-1, 1), (0, -2), (-1, -2)];

/// I piece kick offsets, clockwise transitions (row-down coordinates)
const I_CW_FROM_ZERO: [(i8, i8); 5] = [(0, 0), (-2, 0), (1, 0), (-2, 1), (1, -2)];
const I_CW_FROM_RIGHT: [(i8, i8); 5] = [(0, 0), (-1, 0), (2, 0), (-1, -2), (2, 1)];
const I_CW_FROM_TWO: [(i8, i8); 5] = [(0, 0), (2, 0), (-1, 0), (2, -1), (-1, 2)];
const I_CW_FROM_LEFT: [(i8, i8); 5] = [(0, 0), (1, 0), (-2, 0), (1, 2), (-2, -1)];

/// Kick candidates for a rotation transition, tried in table order.
///
/// Keyed by the explicit (from, to) state pair. The O piece has no kick data
/// at all, and only clockwise transitions exist in the tables; both come back
/// as `None`, which the resolver treats as "test the unmodified position".
pub fn kicks_for(
    kind: PieceKind,
    from: RotationState,
    to: RotationState,
) -> Option<&'static [(i8, i8)]> {
    if kind == PieceKind::O {
        return None;
    }
    if to != from.next() {
        return None;
    }
    let table: &'static [(i8, i8)] = match (kind, from) {
        (PieceKind::I, RotationState::Zero) => &I_CW_FROM_ZERO,
        (PieceKind::I, RotationState::Right) => &I_CW_FROM_RIGHT,
        (PieceKind::I, RotationState::Two) => &I_CW_FROM_TWO,
        (PieceKind::I, RotationState::Left) => &I_CW_FROM_LEFT,
        (_, RotationState::Zero) => &JLSTZ_CW_FROM_ZERO,
        (_, RotationState::Right) => &JLSTZ_CW_FROM_RIGHT,
        (_, RotationState::Two) => &JLSTZ_CW_FROM_TWO,
        (_, RotationState::Left) => &JLSTZ_CW_FROM_LEFT,
    };
    Some(table)
}
