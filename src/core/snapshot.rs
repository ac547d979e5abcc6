//! Read-only snapshot of a session, handed to the host/UI each frame.

use arrayvec::ArrayVec;

use crate::core::session::ActivePiece;
use crate::types::{
    Cell, DifficultyTier, PieceKind, RotationState, GRID_HEIGHT, GRID_WIDTH, NEXT_PREVIEW,
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub rotation: RotationState,
    pub x: i8,
    pub y: i8,
}

impl From<ActivePiece> for ActiveSnapshot {
    fn from(value: ActivePiece) -> Self {
        Self {
            kind: value.kind,
            rotation: value.rotation,
            x: value.x,
            y: value.y,
        }
    }
}

/// Everything a renderer or input layer needs to draw one frame
#[derive(Debug, Clone, PartialEq)]
pub struct SessionSnapshot {
    pub grid: [[Cell; GRID_WIDTH as usize]; GRID_HEIGHT as usize],
    pub active: Option<ActiveSnapshot>,
    /// Where the active piece would land if hard-dropped.
    pub ghost_y: Option<i8>,
    pub next_queue: [PieceKind; NEXT_PREVIEW],
    pub hold: Option<PieceKind>,
    pub can_hold: bool,
    pub score: u32,
    pub high_score: u32,
    pub level: u32,
    pub lines: u32,
    pub difficulty_progress: f64,
    pub tier: DifficultyTier,
    pub combo: u32,
    pub back_to_back: bool,
    pub game_over: bool,
    pub paused: bool,
    /// Rows removed by the most recent lock (pre-clear indices, top-down).
    pub last_cleared_rows: ArrayVec<usize, 4>,
    pub last_lock_at: Option<u64>,
}
