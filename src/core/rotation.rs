//! Rotation resolver - placement legality and wall-kick resolution
//!
//! Given a piece, its target (already rotated) shape and target rotation
//! state, tries the kick offsets for that transition in table order and
//! returns the first legal anchor position, or `None` if every candidate is
//! blocked. Failure leaves the caller's piece untouched.

use crate::core::grid::Grid;
use crate::core::pieces::{kicks_for, Shape};
use crate::core::session::ActivePiece;

/// Check whether a shape fits at anchor (x, y).
///
/// Every filled cell must stay within the column bounds and above the floor;
/// cells above the visible grid (grid y < 0) are exempt from the occupancy
/// check so pieces can spawn and rotate partially off-screen.
pub fn is_valid_position(grid: &Grid, shape: &Shape, x: i8, y: i8) -> bool {
    shape.cells().all(|(dx, dy)| !grid.is_occupied(x + dx, y + dy))
}

/// Resolve a rotation attempt to a legal anchor position.
///
/// When no kick table exists for the transition (the O piece, or a transition
/// the tables do not cover), the unmodified position is tested with the
/// rotated shape as a fallback.
pub fn resolve(
    grid: &Grid,
    piece: &ActivePiece,
    target_shape: &Shape,
    target_rotation: crate::types::RotationState,
) -> Option<(i8, i8)> {
    let Some(kicks) = kicks_for(piece.kind, piece.rotation, target_rotation) else {
        if is_valid_position(grid, target_shape, piece.x, piece.y) {
            return Some((piece.x, piece.y));
        }
        return None;
    };

    for &(dx, dy) in kicks {
        let nx = piece.x + dx;
        let ny = piece.y + dy;
        if is_valid_position(grid, target_shape, nx, ny) {
            return Some((nx, ny));
        }
    }
    None
}
