//! Scoring module - per-lock score deltas
//!
//! Classic line-clear table scaled by level, plus combo and back-to-back
//! bonuses. The bonus order is fixed and applied uniformly:
//! base -> back-to-back bonus (half the base, 4-line clears only) -> combo
//! bonus. This order is observable in exact score values, so it must not vary.

use crate::types::{COMBO_BASE, LINE_SCORES};

/// Score calculation result for a single lock
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScoreResult {
    /// Classic table points for the clear, scaled by level.
    pub base: u32,
    /// Back-to-back bonus (`floor(base * 0.5)`), zero unless applied.
    pub back_to_back_bonus: u32,
    /// Combo bonus added after the base and B2B bonus.
    pub combo_bonus: u32,
    pub total: u32,
    /// Back-to-back state to carry into the next clearing lock.
    pub back_to_back: bool,
}

/// Classic line clear score: table value times (level + 1).
pub fn line_clear_score(lines: usize, level: u32) -> u32 {
    if lines == 0 || lines >= LINE_SCORES.len() {
        return 0;
    }
    LINE_SCORES[lines].saturating_mul(level + 1)
}

/// Combo bonus: `(combo - 1) * 50` once a chain is two or more locks deep.
/// `combo` is the post-increment count of consecutive clearing locks.
pub fn combo_bonus(combo: u32) -> u32 {
    if combo > 1 {
        COMBO_BASE * (combo - 1)
    } else {
        0
    }
}

/// Compute the score delta for a clearing lock.
///
/// `combo` is the post-increment combo count; `previous_b2b` is whether the
/// last clearing lock was a 4-line clear. Only 4-line clears earn and keep
/// the back-to-back flag; 1-3 line clears drop it.
pub fn calculate_score(lines: usize, level: u32, combo: u32, previous_b2b: bool) -> ScoreResult {
    let base = line_clear_score(lines, level);

    let is_tetris = lines == 4;
    let b2b_applied = is_tetris && previous_b2b;
    let back_to_back_bonus = if b2b_applied { base / 2 } else { 0 };
    let combo_bonus = combo_bonus(combo);

    let total = base
        .saturating_add(back_to_back_bonus)
        .saturating_add(combo_bonus);

    ScoreResult {
        base,
        back_to_back_bonus,
        combo_bonus,
        total,
        back_to_back: if lines > 0 { is_tetris } else { previous_b2b },
    }
}

/// Drop score: +1 per soft-dropped row, +2 per hard-dropped row.
pub fn drop_score(rows: u32, is_hard_drop: bool) -> u32 {
    if is_hard_drop {
        rows * 2
    } else {
        rows
    }
}
