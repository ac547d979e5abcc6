//! Game session - the top-level state machine
//!
//! Owns the grid, the single active piece, the bag queue, the hold slot and
//! all scoring/difficulty state, and orchestrates spawn -> fall -> lock ->
//! clear -> respawn. Every operation is a synchronous state transition; the
//! host loop supplies monotonic `now_ms` timestamps and drives gravity at the
//! cadence given by `gravity_interval_ms`. Illegal moves are rejected as
//! no-ops; the only terminal condition is game over, cleared by a reset.

use arrayvec::ArrayVec;

use crate::core::bag::BagQueue;
use crate::core::difficulty::calculate_difficulty_progress;
use crate::core::grid::Grid;
use crate::core::pieces::{spawn_shape, spawn_x, Shape};
use crate::core::rotation::{is_valid_position, resolve};
use crate::core::scoring::{calculate_score, drop_score};
use crate::core::snapshot::SessionSnapshot;
use crate::types::{
    Direction, PieceKind, RotationState, BASE_GRAVITY_MS, GRAVITY_FLOOR_MS,
    GRAVITY_STEP_PER_LEVEL_MS, LOCK_DELAY_MS, NEXT_PREVIEW, QUEUE_INITIAL_LOOKAHEAD,
    QUEUE_MIN_LOOKAHEAD,
};

/// The currently-falling piece
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActivePiece {
    pub kind: PieceKind,
    /// Current rotated shape matrix.
    pub shape: Shape,
    /// Anchor position (top-left of the shape matrix).
    pub x: i8,
    pub y: i8,
    pub rotation: RotationState,
    /// Timestamp the piece entered play, for the lock-duration bonus.
    pub spawned_at: u64,
}

impl ActivePiece {
    /// Create a piece at its spawn position
    pub fn spawn(kind: PieceKind, now_ms: u64) -> Self {
        Self {
            kind,
            shape: spawn_shape(kind),
            x: spawn_x(kind),
            y: 0,
            rotation: RotationState::Zero,
            spawned_at: now_ms,
        }
    }

    /// Whether moving down one more row would be illegal
    pub fn is_grounded(&self, grid: &Grid) -> bool {
        !is_valid_position(grid, &self.shape, self.x, self.y + 1)
    }
}

/// Complete game session state
#[derive(Debug, Clone)]
pub struct GameSession {
    grid: Grid,
    active: Option<ActivePiece>,
    queue: BagQueue,
    hold: Option<PieceKind>,
    can_hold: bool,
    score: u32,
    high_score: u32,
    level: u32,
    lines: u32,
    combo: u32,
    back_to_back: bool,
    difficulty_progress: f64,
    /// When the grounded piece will lock absent further input.
    lock_expire_at: Option<u64>,
    /// Rows removed by the most recent lock (pre-clear indices, top to bottom).
    last_cleared_rows: ArrayVec<usize, 4>,
    last_lock_at: Option<u64>,
    lock_delay_ms: u64,
    game_over: bool,
    paused: bool,
}

impl GameSession {
    /// Create a session with the given RNG seed. Call `initialize_game` to
    /// start playing.
    pub fn new(seed: u32) -> Self {
        Self {
            grid: Grid::new(),
            active: None,
            queue: BagQueue::new(seed),
            hold: None,
            can_hold: true,
            score: 0,
            high_score: 0,
            level: 0,
            lines: 0,
            combo: 0,
            back_to_back: false,
            difficulty_progress: 0.0,
            lock_expire_at: None,
            last_cleared_rows: ArrayVec::new(),
            last_lock_at: None,
            lock_delay_ms: LOCK_DELAY_MS,
            game_over: false,
            paused: false,
        }
    }

    /// Override the lock delay (persisted-settings hook).
    pub fn set_lock_delay_ms(&mut self, lock_delay_ms: u64) {
        self.lock_delay_ms = lock_delay_ms;
    }

    /// Seed the persisted high score into a fresh session.
    pub fn set_high_score(&mut self, high_score: u32) {
        self.high_score = self.high_score.max(high_score);
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn combo(&self) -> u32 {
        self.combo
    }

    pub fn back_to_back(&self) -> bool {
        self.back_to_back
    }

    pub fn difficulty_progress(&self) -> f64 {
        self.difficulty_progress
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn can_hold(&self) -> bool {
        self.can_hold
    }

    pub fn hold_piece(&self) -> Option<PieceKind> {
        self.hold
    }

    pub fn active(&self) -> Option<&ActivePiece> {
        self.active.as_ref()
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn lock_expire_at(&self) -> Option<u64> {
        self.lock_expire_at
    }

    pub fn last_cleared_rows(&self) -> &[usize] {
        &self.last_cleared_rows
    }

    pub fn last_lock_at(&self) -> Option<u64> {
        self.last_lock_at
    }

    /// Upcoming pieces, at most `count`
    pub fn next_queue(&self, count: usize) -> Vec<PieceKind> {
        self.queue.peek(count)
    }

    /// Gravity cadence for the current level, floored at 50ms
    pub fn gravity_interval_ms(&self) -> u64 {
        BASE_GRAVITY_MS
            .saturating_sub(u64::from(self.level) * GRAVITY_STEP_PER_LEVEL_MS)
            .max(GRAVITY_FLOOR_MS)
    }

    /// Reset everything except the high score and start a new game
    pub fn initialize_game(&mut self, now_ms: u64) {
        // Continue the RNG stream so restarts get a fresh sequence.
        let seed = self.queue.rng_state();
        self.grid.clear();
        self.queue = BagQueue::new(seed);
        self.queue.ensure(QUEUE_INITIAL_LOOKAHEAD);
        self.active = None;
        self.hold = None;
        self.can_hold = true;
        self.score = 0;
        self.level = 0;
        self.lines = 0;
        self.combo = 0;
        self.back_to_back = false;
        self.difficulty_progress = 0.0;
        self.lock_expire_at = None;
        self.last_cleared_rows.clear();
        self.last_lock_at = None;
        self.game_over = false;
        self.paused = false;
        self.spawn_from_queue(now_ms);
    }

    /// Alias for `initialize_game`; game over is terminal until this is called
    pub fn reset_game(&mut self, now_ms: u64) {
        self.initialize_game(now_ms);
    }

    /// Toggle pause. While paused every gameplay operation is inert; the host
    /// loop must also stop accumulating gravity time.
    pub fn pause_game(&mut self) {
        if !self.game_over {
            self.paused = !self.paused;
        }
    }

    fn playable(&self) -> bool {
        !self.paused && !self.game_over && self.active.is_some()
    }

    /// Lock-delay policy: a successful move or rotation while grounded re-arms
    /// the countdown; leaving the ground clears it. Infinite reset.
    fn rearmed_lock_timer(&self, piece: &ActivePiece, now_ms: u64) -> Option<u64> {
        if piece.is_grounded(&self.grid) {
            Some(now_ms + self.lock_delay_ms)
        } else {
            None
        }
    }

    /// Attempt a one-column horizontal move
    pub fn move_piece(&mut self, direction: Direction, now_ms: u64) -> bool {
        if !self.playable() {
            return false;
        }
        let mut piece = self.active.expect("playable implies an active piece");
        let nx = piece.x + direction.dx();
        if !is_valid_position(&self.grid, &piece.shape, nx, piece.y) {
            return false;
        }
        piece.x = nx;
        self.lock_expire_at = self.rearmed_lock_timer(&piece, now_ms);
        self.active = Some(piece);
        true
    }

    /// Attempt a clockwise rotation with wall kicks. No-op for the O piece.
    pub fn rotate_piece(&mut self, now_ms: u64) -> bool {
        if !self.playable() {
            return false;
        }
        let mut piece = self.active.expect("playable implies an active piece");
        if piece.kind == PieceKind::O {
            return false;
        }

        let target_shape = piece.shape.rotate_cw();
        let target_rotation = piece.rotation.next();
        let Some((nx, ny)) = resolve(&self.grid, &piece, &target_shape, target_rotation) else {
            return false;
        };

        piece.shape = target_shape;
        piece.rotation = target_rotation;
        piece.x = nx;
        piece.y = ny;
        self.lock_expire_at = self.rearmed_lock_timer(&piece, now_ms);
        self.active = Some(piece);
        true
    }

    /// One gravity tick, driven by the host loop at `gravity_interval_ms`.
    ///
    /// Descends one row when legal; otherwise arms the lock countdown, and
    /// locks the piece once the countdown has expired.
    pub fn gravity_step(&mut self, now_ms: u64) {
        if !self.playable() {
            return;
        }
        let mut piece = self.active.expect("playable implies an active piece");
        if is_valid_position(&self.grid, &piece.shape, piece.x, piece.y + 1) {
            piece.y += 1;
            self.active = Some(piece);
            self.lock_expire_at = None;
            return;
        }
        match self.lock_expire_at {
            None => self.lock_expire_at = Some(now_ms + self.lock_delay_ms),
            Some(expire_at) if now_ms >= expire_at => self.lock_and_spawn(now_ms),
            Some(_) => {}
        }
    }

    /// User soft drop: one row down for +1 point. Never locks by itself; a
    /// grounded soft drop only arms the lock countdown.
    pub fn drop_piece(&mut self, now_ms: u64) -> bool {
        if !self.playable() {
            return false;
        }
        let mut piece = self.active.expect("playable implies an active piece");
        if is_valid_position(&self.grid, &piece.shape, piece.x, piece.y + 1) {
            piece.y += 1;
            self.active = Some(piece);
            self.score = self.score.saturating_add(drop_score(1, false));
            self.lock_expire_at = None;
            return true;
        }
        if self.lock_expire_at.is_none() {
            self.lock_expire_at = Some(now_ms + self.lock_delay_ms);
        }
        false
    }

    /// Full-distance drop for +2 points per row, locking immediately and
    /// bypassing the lock-delay countdown.
    pub fn hard_drop(&mut self, now_ms: u64) -> bool {
        if !self.playable() {
            return false;
        }
        let mut piece = self.active.expect("playable implies an active piece");
        let distance = self.drop_distance_of(&piece);
        piece.y += distance as i8;
        self.active = Some(piece);
        self.score = self.score.saturating_add(drop_score(distance, true));
        self.lock_and_spawn(now_ms);
        true
    }

    /// Set the falling piece aside, swapping in the held piece (or the next
    /// queued piece when the slot is empty). At most one swap per piece
    /// lifetime; re-enabled when a piece locks.
    pub fn hold_swap(&mut self, now_ms: u64) -> bool {
        if !self.playable() || !self.can_hold {
            return false;
        }
        let current = self.active.expect("playable implies an active piece");

        let incoming = match self.hold {
            Some(held) => held,
            None => {
                self.queue.ensure(QUEUE_MIN_LOOKAHEAD);
                self.queue.draw()
            }
        };

        let replacement = ActivePiece::spawn(incoming, now_ms);
        if !is_valid_position(&self.grid, &replacement.shape, replacement.x, replacement.y) {
            // Swap abandoned; the session ends instead.
            self.game_over = true;
            return false;
        }

        self.hold = Some(current.kind);
        self.active = Some(replacement);
        self.can_hold = false;
        self.lock_expire_at = None;
        true
    }

    /// Row the active piece would land on if hard-dropped now
    pub fn ghost_y(&self) -> Option<i8> {
        let piece = self.active.as_ref()?;
        Some(piece.y + self.drop_distance_of(piece) as i8)
    }

    fn drop_distance_of(&self, piece: &ActivePiece) -> u32 {
        let mut distance: u32 = 0;
        while is_valid_position(
            &self.grid,
            &piece.shape,
            piece.x,
            piece.y + distance as i8 + 1,
        ) {
            distance += 1;
        }
        distance
    }

    /// Lock the active piece, clear rows, score the lock, fold it into the
    /// difficulty curve, and spawn the next piece. Atomic from the caller's
    /// perspective; detects game over at spawn time.
    fn lock_and_spawn(&mut self, now_ms: u64) {
        let Some(piece) = self.active.take() else {
            return;
        };

        self.grid.place(&piece.shape, piece.x, piece.y, piece.kind);
        // A single piece completes at most 4 rows, so this never overflows.
        self.last_cleared_rows = self.grid.clear_full_rows().iter().copied().collect();
        let cleared = self.last_cleared_rows.len();

        if cleared > 0 {
            self.combo += 1;
        } else {
            self.combo = 0;
        }

        let result = calculate_score(cleared, self.level, self.combo, self.back_to_back);
        self.score = self.score.saturating_add(result.total);
        self.back_to_back = result.back_to_back;
        self.lines += cleared as u32;
        self.high_score = self.high_score.max(self.score);

        let lock_duration_ms = now_ms.saturating_sub(piece.spawned_at);
        let outcome = calculate_difficulty_progress(
            self.difficulty_progress,
            cleared as u32,
            self.combo,
            lock_duration_ms,
        );
        self.difficulty_progress = outcome.progress;
        self.level = outcome.level;

        self.last_lock_at = Some(now_ms);
        self.lock_expire_at = None;
        self.spawn_from_queue(now_ms);
    }

    /// Install the next queued piece; flips to game over when its spawn cells
    /// are blocked, leaving no active piece.
    fn spawn_from_queue(&mut self, now_ms: u64) -> bool {
        self.queue.ensure(QUEUE_MIN_LOOKAHEAD);
        let kind = self.queue.draw();
        let piece = ActivePiece::spawn(kind, now_ms);

        if !is_valid_position(&self.grid, &piece.shape, piece.x, piece.y) {
            self.game_over = true;
            self.active = None;
            return false;
        }

        self.active = Some(piece);
        self.can_hold = true;
        self.lock_expire_at = None;
        true
    }

    /// Read-only snapshot for the host/UI
    pub fn snapshot(&self) -> SessionSnapshot {
        let mut next_queue = [PieceKind::I; NEXT_PREVIEW];
        for (slot, kind) in next_queue.iter_mut().zip(self.queue.peek(NEXT_PREVIEW)) {
            *slot = kind;
        }
        SessionSnapshot {
            grid: self.grid.to_rows(),
            active: self.active.map(Into::into),
            ghost_y: self.ghost_y(),
            next_queue,
            hold: self.hold,
            can_hold: self.can_hold,
            score: self.score,
            high_score: self.high_score,
            level: self.level,
            lines: self.lines,
            difficulty_progress: self.difficulty_progress,
            tier: crate::core::difficulty::resolve_tier(self.level),
            combo: self.combo,
            back_to_back: self.back_to_back,
            game_over: self.game_over,
            paused: self.paused,
            last_cleared_rows: self.last_cleared_rows.clone(),
            last_lock_at: self.last_lock_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{GRID_HEIGHT, GRID_WIDTH};

    fn started(seed: u32) -> GameSession {
        let mut session = GameSession::new(seed);
        session.initialize_game(0);
        session
    }

    /// Fill a row except for the leftmost `gap` columns.
    fn fill_row_with_gap(session: &mut GameSession, y: i8, gap: usize) {
        for x in gap as i8..GRID_WIDTH as i8 {
            session.grid.set(x, y, Some(PieceKind::I));
        }
    }

    #[test]
    fn test_initialize_game_state() {
        let session = started(12345);
        assert!(session.active.is_some());
        assert_eq!(session.score(), 0);
        assert_eq!(session.level(), 0);
        assert_eq!(session.lines(), 0);
        assert_eq!(session.combo(), 0);
        assert!(!session.back_to_back());
        assert!(!session.game_over());
        assert!(!session.paused());
        assert!(session.can_hold());
        assert!(session.hold_piece().is_none());
        assert!(session.lock_expire_at().is_none());
        assert!(session.next_queue(5).len() >= 5);
    }

    #[test]
    fn test_move_left_then_right_restores_column() {
        let mut session = started(12345);
        let x0 = session.active().unwrap().x;
        let score0 = session.score();
        let grid0 = session.grid().clone();

        assert!(session.move_piece(Direction::Left, 10));
        assert!(session.move_piece(Direction::Right, 20));

        assert_eq!(session.active().unwrap().x, x0);
        assert_eq!(session.score(), score0);
        assert_eq!(*session.grid(), grid0);
    }

    #[test]
    fn test_move_blocked_at_wall() {
        let mut session = started(12345);
        let mut moved = 0;
        for _ in 0..20 {
            if session.move_piece(Direction::Left, 0) {
                moved += 1;
            }
        }
        assert!(moved <= GRID_WIDTH as usize);
        let x = session.active().unwrap().x;
        assert!(!session.move_piece(Direction::Left, 0) || x >= 0);
    }

    #[test]
    fn test_rotate_o_piece_is_noop() {
        // Walk seeds until an O piece spawns first.
        let mut seed = 1;
        let mut session = loop {
            let mut s = GameSession::new(seed);
            s.initialize_game(0);
            if s.active().unwrap().kind == PieceKind::O {
                break s;
            }
            seed += 1;
        };
        let before = *session.active().unwrap();
        assert!(!session.rotate_piece(0));
        assert_eq!(*session.active().unwrap(), before);
    }

    #[test]
    fn test_rotate_updates_rotation_state() {
        let mut session = started(12345);
        while session.active().unwrap().kind == PieceKind::O {
            session.hard_drop(0);
        }
        let before = session.active().unwrap().rotation;
        if session.rotate_piece(0) {
            assert_eq!(session.active().unwrap().rotation, before.next());
        }
    }

    #[test]
    fn test_gravity_descends_and_clears_lock_timer() {
        let mut session = started(12345);
        let y0 = session.active().unwrap().y;
        session.gravity_step(16);
        assert_eq!(session.active().unwrap().y, y0 + 1);
        assert!(session.lock_expire_at().is_none());
    }

    #[test]
    fn test_gravity_arms_then_fires_lock() {
        let mut session = started(12345);
        // Ground the piece.
        while !session.active().unwrap().is_grounded(session.grid()) {
            session.gravity_step(0);
        }
        // First grounded tick arms the countdown.
        session.gravity_step(1_000);
        assert_eq!(session.lock_expire_at(), Some(1_000 + LOCK_DELAY_MS));

        // Before the deadline nothing locks.
        session.gravity_step(1_000 + LOCK_DELAY_MS - 1);
        assert!(session.last_lock_at().is_none());

        // At the deadline the piece locks and the next one spawns.
        session.gravity_step(1_000 + LOCK_DELAY_MS);
        assert_eq!(session.last_lock_at(), Some(1_000 + LOCK_DELAY_MS));
        assert!(session.active().is_some());
        assert_eq!(session.active().unwrap().y, 0);
    }

    #[test]
    fn test_soft_drop_scores_one_per_row() {
        let mut session = started(12345);
        let score0 = session.score();
        assert!(session.drop_piece(0));
        assert_eq!(session.score(), score0 + 1);
    }

    #[test]
    fn test_soft_drop_never_locks() {
        let mut session = started(12345);
        while session.drop_piece(0) {}
        // Grounded now; repeated soft drops arm the timer but never lock.
        for t in 0..10 {
            session.drop_piece(t * 1_000);
        }
        assert!(session.last_lock_at().is_none());
        assert!(session.lock_expire_at().is_some());
    }

    #[test]
    fn test_hard_drop_scores_double_distance_and_locks() {
        let mut session = started(12345);
        let piece = *session.active().unwrap();
        let distance = session.drop_distance_of(&piece);
        let score0 = session.score();

        assert!(session.hard_drop(500));
        assert_eq!(session.last_lock_at(), Some(500));
        // Non-clearing first drop: only the drop points land.
        assert_eq!(session.score(), score0 + distance * 2);
        assert!(session.active().is_some());
    }

    #[test]
    fn test_hard_drop_bypasses_lock_delay() {
        let mut session = started(12345);
        session.gravity_step(0);
        assert!(session.lock_expire_at().is_none());
        session.hard_drop(1);
        assert_eq!(session.last_lock_at(), Some(1));
    }

    #[test]
    fn test_line_clear_scoring_and_combo() {
        let mut session = started(12345);
        fill_row_with_gap(&mut session, GRID_HEIGHT as i8 - 1, 0);
        // Lock an I piece at spawn; the full bottom row clears.
        session.active = Some(ActivePiece::spawn(PieceKind::I, 0));
        session.lock_and_spawn(100);

        assert_eq!(session.lines(), 1);
        assert_eq!(session.combo(), 1);
        // Single clear at level 0, no combo or B2B bonus yet.
        assert_eq!(session.score(), 40);
        assert!(!session.back_to_back());
    }

    #[test]
    fn test_back_to_back_tetris_bonus_order() {
        let mut session = started(12345);

        for y in (GRID_HEIGHT as i8 - 4)..GRID_HEIGHT as i8 {
            fill_row_with_gap(&mut session, y, 0);
        }
        session.active = Some(ActivePiece::spawn(PieceKind::I, 0));
        session.lock_and_spawn(100);

        // First Tetris at level 0: base only, flag set.
        assert_eq!(session.score(), 1200);
        assert!(session.back_to_back());
        assert_eq!(session.combo(), 1);
        let level_after_first = session.level();

        for y in (GRID_HEIGHT as i8 - 4)..GRID_HEIGHT as i8 {
            fill_row_with_gap(&mut session, y, 0);
        }
        session.active = Some(ActivePiece::spawn(PieceKind::I, 200));
        session.lock_and_spawn(300);

        // base -> +50% of base -> combo (combo now 2 => +50).
        let base = 1200 * (level_after_first + 1);
        assert_eq!(session.score(), 1200 + base + base / 2 + 50);
        assert!(session.back_to_back());
        assert_eq!(session.combo(), 2);
    }

    #[test]
    fn test_non_clearing_lock_resets_combo_keeps_b2b() {
        let mut session = started(12345);
        for y in (GRID_HEIGHT as i8 - 4)..GRID_HEIGHT as i8 {
            fill_row_with_gap(&mut session, y, 0);
        }
        session.active = Some(ActivePiece::spawn(PieceKind::I, 0));
        session.lock_and_spawn(100);
        assert!(session.back_to_back());

        session.hard_drop(200);
        assert_eq!(session.combo(), 0);
        // A non-clearing lock leaves the back-to-back flag alone.
        assert!(session.back_to_back());
    }

    #[test]
    fn test_lock_updates_difficulty_progress() {
        let mut session = started(12345);
        assert_eq!(session.difficulty_progress(), 0.0);
        session.hard_drop(100);
        // Fast non-clearing lock: 1.5 lock bonus + 0.25 survival.
        assert!((session.difficulty_progress() - 1.75).abs() < 1e-9);
        assert_eq!(session.level(), 0);
    }

    #[test]
    fn test_game_over_when_spawn_blocked() {
        let mut session = started(12345);
        // Wall off the spawn rows, leaving column 0 open so they cannot clear.
        for y in 0..3 {
            fill_row_with_gap(&mut session, y, 1);
        }
        session.hard_drop(100);
        assert!(session.game_over());
        assert!(session.active().is_none());
    }

    #[test]
    fn test_game_over_is_terminal_until_reset() {
        let mut session = started(12345);
        for y in 0..3 {
            fill_row_with_gap(&mut session, y, 1);
        }
        session.hard_drop(100);
        assert!(session.game_over());

        assert!(!session.move_piece(Direction::Left, 200));
        assert!(!session.rotate_piece(200));
        assert!(!session.drop_piece(200));
        assert!(!session.hard_drop(200));
        assert!(!session.hold_swap(200));

        session.reset_game(300);
        assert!(!session.game_over());
        assert!(session.active().is_some());
        assert_eq!(session.score(), 0);
    }

    #[test]
    fn test_high_score_survives_reset() {
        let mut session = started(12345);
        session.hard_drop(0);
        let hs = session.high_score();
        assert!(hs > 0);
        session.reset_game(100);
        assert_eq!(session.score(), 0);
        assert!(session.high_score() >= hs);
    }

    #[test]
    fn test_hold_swap_once_per_piece() {
        let mut session = started(12345);
        let first_kind = session.active().unwrap().kind;

        assert!(session.hold_swap(0));
        assert_eq!(session.hold_piece(), Some(first_kind));
        assert!(!session.can_hold());

        // Second hold without an intervening lock is a no-op.
        let active_after = session.active().unwrap().kind;
        assert!(!session.hold_swap(10));
        assert_eq!(session.active().unwrap().kind, active_after);
        assert_eq!(session.hold_piece(), Some(first_kind));

        // Locking re-enables the hold.
        session.hard_drop(20);
        assert!(session.can_hold());
    }

    #[test]
    fn test_hold_swap_returns_previously_held_kind() {
        let mut session = started(12345);
        let first_kind = session.active().unwrap().kind;
        session.hold_swap(0);
        session.hard_drop(10);
        let second_kind = session.active().unwrap().kind;

        assert!(session.hold_swap(20));
        assert_eq!(session.active().unwrap().kind, first_kind);
        assert_eq!(session.hold_piece(), Some(second_kind));
    }

    #[test]
    fn test_hold_from_empty_slot_pulls_queue_head() {
        let mut session = started(12345);
        let head = session.next_queue(1)[0];
        assert!(session.hold_swap(0));
        assert_eq!(session.active().unwrap().kind, head);
    }

    #[test]
    fn test_pause_makes_operations_inert() {
        let mut session = started(12345);
        session.pause_game();
        assert!(session.paused());

        let before = *session.active().unwrap();
        assert!(!session.move_piece(Direction::Left, 0));
        assert!(!session.rotate_piece(0));
        assert!(!session.drop_piece(0));
        assert!(!session.hard_drop(0));
        assert!(!session.hold_swap(0));
        session.gravity_step(10_000);
        assert_eq!(*session.active().unwrap(), before);

        session.pause_game();
        assert!(!session.paused());
        session.gravity_step(0);
        assert_eq!(session.active().unwrap().y, before.y + 1);
    }

    #[test]
    fn test_gravity_interval_speeds_up_with_level() {
        let mut session = started(12345);
        assert_eq!(session.gravity_interval_ms(), 1000);
        session.level = 5;
        assert_eq!(session.gravity_interval_ms(), 750);
        session.level = 19;
        assert_eq!(session.gravity_interval_ms(), 50);
        session.level = 29;
        assert_eq!(session.gravity_interval_ms(), 50);
    }

    #[test]
    fn test_ghost_matches_hard_drop_landing() {
        let mut session = started(12345);
        let ghost = session.ghost_y().unwrap();
        let piece = *session.active().unwrap();
        session.hard_drop(0);
        // The locked piece's cells sit at the ghost row.
        let landed: Vec<_> = piece
            .shape
            .cells()
            .map(|(dx, dy)| (piece.x + dx, ghost + dy))
            .collect();
        for (x, y) in landed {
            assert_eq!(session.grid().get(x, y), Some(Some(piece.kind)));
        }
    }

    #[test]
    fn test_snapshot_reflects_state() {
        let mut session = started(12345);
        session.move_piece(Direction::Right, 0);
        let snap = session.snapshot();
        assert_eq!(snap.score, session.score());
        assert_eq!(snap.level, session.level());
        assert_eq!(snap.active.unwrap().x, session.active().unwrap().x);
        assert_eq!(snap.next_queue.len(), NEXT_PREVIEW);
        assert_eq!(snap.ghost_y, session.ghost_y());
        assert!(!snap.game_over);
    }

    #[test]
    fn test_lock_delay_override() {
        let mut session = started(12345);
        session.set_lock_delay_ms(100);
        while !session.active().unwrap().is_grounded(session.grid()) {
            session.gravity_step(0);
        }
        session.gravity_step(1_000);
        assert_eq!(session.lock_expire_at(), Some(1_100));
    }
}
