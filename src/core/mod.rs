//! Core module - pure game logic with no I/O
//!
//! Contains all the game rules and state management: the grid, the piece
//! catalog, SRS rotation resolution, the 7-bag randomizer, scoring, the
//! difficulty curve, and the session state machine that composes them.

pub mod bag;
pub mod difficulty;
pub mod grid;
pub mod pieces;
pub mod rotation;
pub mod scoring;
pub mod session;
pub mod snapshot;

pub use bag::{BagQueue, SimpleRng};
pub use difficulty::{calculate_difficulty_progress, resolve_tier, DifficultyOutcome};
pub use grid::{ClearedRows, Grid};
pub use pieces::{kicks_for, shape_of, spawn_shape, spawn_x, Shape};
pub use rotation::{is_valid_position, resolve};
pub use scoring::{calculate_score, drop_score, ScoreResult};
pub use session::{ActivePiece, GameSession};
pub use snapshot::{ActiveSnapshot, SessionSnapshot};
