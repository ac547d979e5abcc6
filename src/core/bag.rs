//! Bag randomizer - 7-bag piece sequencing
//!
//! Implements the "7-bag" scheme: the upcoming-piece queue is replenished one
//! full shuffled permutation of the seven kinds at a time, so within any
//! bag-aligned chunk each kind appears exactly once. Repeats across chunk
//! boundaries are possible; that is the standard 7-bag semantics.
//!
//! Shuffling uses a seeded LCG so piece sequences are deterministic in tests.

use std::collections::VecDeque;

use crate::types::PieceKind;

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }

    /// Shuffle a slice using Fisher-Yates
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.next_range((i + 1) as u32) as usize;
            slice.swap(i, j);
        }
    }
}

/// Upcoming-piece queue backed by the 7-bag randomizer
#[derive(Debug, Clone)]
pub struct BagQueue {
    queue: VecDeque<PieceKind>,
    rng: SimpleRng,
}

impl BagQueue {
    /// Create an empty queue with the given seed
    pub fn new(seed: u32) -> Self {
        Self {
            queue: VecDeque::with_capacity(14),
            rng: SimpleRng::new(seed),
        }
    }

    /// Current RNG state (used as the seed for a restarted session, so every
    /// restart continues the stream instead of replaying it)
    pub fn rng_state(&self) -> u32 {
        self.rng.state
    }

    /// Append full shuffled bags until at least `min_len` pieces are queued
    pub fn ensure(&mut self, min_len: usize) {
        while self.queue.len() < min_len {
            let mut bag = PieceKind::ALL;
            self.rng.shuffle(&mut bag);
            self.queue.extend(bag);
        }
    }

    /// Number of queued pieces
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Peek at the upcoming pieces without consuming them
    pub fn peek(&self, count: usize) -> Vec<PieceKind> {
        self.queue.iter().take(count).copied().collect()
    }

    /// Draw the next piece, replenishing the queue first
    pub fn draw(&mut self) -> PieceKind {
        self.ensure(crate::types::QUEUE_MIN_LOOKAHEAD);
        // ensure() guarantees at least one queued piece
        self.queue.pop_front().unwrap()
    }
}
