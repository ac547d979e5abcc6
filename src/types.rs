//! Core types shared across the engine
//! This module contains pure data types with no external dependencies

/// Grid dimensions
pub const GRID_WIDTH: u8 = 10;
pub const GRID_HEIGHT: u8 = 20;

/// Game timing constants (in milliseconds)
pub const LOCK_DELAY_MS: u64 = 500;
pub const BASE_GRAVITY_MS: u64 = 1000;
pub const GRAVITY_STEP_PER_LEVEL_MS: u64 = 50;
pub const GRAVITY_FLOOR_MS: u64 = 50;

/// DAS/ARR timing defaults for host-side input repetition (milliseconds)
pub const DEFAULT_DAS_MS: u32 = 150;
pub const DEFAULT_ARR_MS: u32 = 50;

/// Queue replenishment thresholds
pub const QUEUE_MIN_LOOKAHEAD: usize = 7;
pub const QUEUE_INITIAL_LOOKAHEAD: usize = 14;
pub const NEXT_PREVIEW: usize = 5;

/// Line clear scoring (classic table, indexed by lines cleared)
pub const LINE_SCORES: [u32; 5] = [0, 40, 100, 300, 1200];

/// Combo scoring base
pub const COMBO_BASE: u32 = 50;

/// Difficulty-progress clamps and thresholds
pub const MAX_COMBO_COUNT: u32 = 40;
pub const MAX_LOCK_DURATION_MS: u64 = 6 * LOCK_DELAY_MS;
pub const PROGRESS_PER_LEVEL: f64 = 12.0;
pub const MAX_LEVEL: u32 = 29;

/// Tetromino piece kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    J,
    L,
    O,
    S,
    T,
    Z,
}

impl PieceKind {
    /// All seven kinds, in canonical order (one bag's worth).
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::J,
        PieceKind::L,
        PieceKind::O,
        PieceKind::S,
        PieceKind::T,
        PieceKind::Z,
    ];

    /// Display fill for this piece (hex color tag).
    pub fn color(&self) -> &'static str {
        match self {
            PieceKind::I => "#00f0f0",
            PieceKind::J => "#0000f0",
            PieceKind::L => "#f0a000",
            PieceKind::O => "#f0f000",
            PieceKind::S => "#00f000",
            PieceKind::T => "#a000f0",
            PieceKind::Z => "#f00000",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "I",
            PieceKind::J => "J",
            PieceKind::L => "L",
            PieceKind::O => "O",
            PieceKind::S => "S",
            PieceKind::T => "T",
            PieceKind::Z => "Z",
        }
    }
}

/// Rotation states forming the 0 -> R -> 2 -> L cycle (Zero = spawn orientation)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RotationState {
    Zero,
    Right,
    Two,
    Left,
}

impl RotationState {
    /// Next state in the clockwise cycle.
    pub fn next(&self) -> Self {
        match self {
            RotationState::Zero => RotationState::Right,
            RotationState::Right => RotationState::Two,
            RotationState::Two => RotationState::Left,
            RotationState::Left => RotationState::Zero,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RotationState::Zero => "0",
            RotationState::Right => "R",
            RotationState::Two => "2",
            RotationState::Left => "L",
        }
    }
}

/// Horizontal movement direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    pub fn dx(&self) -> i8 {
        match self {
            Direction::Left => -1,
            Direction::Right => 1,
        }
    }
}

/// Named difficulty tiers derived from the level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DifficultyTier {
    Chill,
    Steady,
    Intense,
    Overdrive,
}

impl DifficultyTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            DifficultyTier::Chill => "Chill",
            DifficultyTier::Steady => "Steady",
            DifficultyTier::Intense => "Intense",
            DifficultyTier::Overdrive => "Overdrive",
        }
    }
}

/// Cell on the grid (None = empty, Some = settled piece kind)
pub type Cell = Option<PieceKind>;
