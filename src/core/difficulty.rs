//! Difficulty engine - converts play performance into a level and tier
//!
//! A real-valued, monotonically non-decreasing "difficulty progress" grows
//! with every lock; faster, bigger, chained placements grow it faster. The
//! progress maps to a discrete level (12 progress per level, capped at 29)
//! and a named tier. Pure functions, independently testable from the session.

use crate::types::{
    DifficultyTier, LOCK_DELAY_MS, MAX_COMBO_COUNT, MAX_LEVEL, MAX_LOCK_DURATION_MS,
    PROGRESS_PER_LEVEL,
};

/// Per-lines-cleared progress weights (indexed by clamped lines)
const LINE_WEIGHTS: [f64; 5] = [0.0, 2.0, 5.0, 8.0, 12.0];

/// Progress per combo step past the first clearing lock
const COMBO_WEIGHT: f64 = 1.25;

/// Flat progress for surviving a non-clearing lock
const SURVIVAL_BONUS: f64 = 0.25;

/// Outcome of folding one lock into the difficulty curve
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DifficultyOutcome {
    /// Updated cumulative progress.
    pub progress: f64,
    /// Level derived from the updated progress.
    pub level: u32,
    /// Progress contributed by this lock.
    pub delta: f64,
    pub tier: DifficultyTier,
}

/// Tier for a given level.
pub fn resolve_tier(level: u32) -> DifficultyTier {
    if level >= 12 {
        DifficultyTier::Overdrive
    } else if level >= 7 {
        DifficultyTier::Intense
    } else if level >= 3 {
        DifficultyTier::Steady
    } else {
        DifficultyTier::Chill
    }
}

/// Level for a given progress value.
pub fn level_for_progress(progress: f64) -> u32 {
    let level = (progress / PROGRESS_PER_LEVEL).floor();
    (level.max(0.0) as u32).min(MAX_LEVEL)
}

/// Decisiveness bonus: quicker locks (relative to the lock delay) earn more.
fn lock_speed_bonus(lock_duration_ms: u64) -> f64 {
    if lock_duration_ms <= LOCK_DELAY_MS {
        1.5
    } else if lock_duration_ms <= 2 * LOCK_DELAY_MS {
        1.0
    } else if lock_duration_ms <= 3 * LOCK_DELAY_MS {
        0.5
    } else {
        0.0
    }
}

/// Fold one lock into the difficulty curve.
///
/// Inputs are clamped: `lines_cleared` to [0, 4], `combo_count` to [0, 40],
/// `lock_duration_ms` to [0, 6 x lock delay]. `combo_count` is the
/// post-increment combo at lock time.
pub fn calculate_difficulty_progress(
    previous_progress: f64,
    lines_cleared: u32,
    combo_count: u32,
    lock_duration_ms: u64,
) -> DifficultyOutcome {
    let lines = lines_cleared.min(4) as usize;
    let combo = combo_count.min(MAX_COMBO_COUNT);
    let duration = lock_duration_ms.min(MAX_LOCK_DURATION_MS);

    let base = LINE_WEIGHTS[lines];
    let combo_bonus = if lines > 0 {
        f64::from(combo.saturating_sub(1)) * COMBO_WEIGHT
    } else {
        0.0
    };
    let lock_bonus = lock_speed_bonus(duration);
    let survival_bonus = if lines == 0 { SURVIVAL_BONUS } else { 0.0 };

    let delta = base + combo_bonus + lock_bonus + survival_bonus;
    let progress = previous_progress + delta;
    let level = level_for_progress(progress);

    DifficultyOutcome {
        progress,
        level,
        delta,
        tier: resolve_tier(level),
    }
}
