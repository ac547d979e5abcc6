//! blockfall - a deterministic falling-block puzzle engine
//!
//! The engine is a single-owner, synchronous state machine: every operation
//! on [`core::GameSession`] is a pure state transition that completes before
//! returning, with no I/O and no internal clock. The host supplies monotonic
//! `now_ms` timestamps and drives gravity itself.
//!
//! Recommended host loop (accumulator pattern, deterministic under variable
//! frame rates):
//!
//! ```no_run
//! use blockfall::core::GameSession;
//!
//! let mut session = GameSession::new(42);
//! session.initialize_game(0);
//!
//! let mut accumulator_ms: u64 = 0;
//! let mut now_ms: u64 = 0;
//! loop {
//!     let frame_ms = 16; // real elapsed time from the host clock
//!     now_ms += frame_ms;
//!     if !session.paused() {
//!         accumulator_ms += frame_ms;
//!         while accumulator_ms >= session.gravity_interval_ms() {
//!             accumulator_ms -= session.gravity_interval_ms();
//!             session.gravity_step(now_ms);
//!         }
//!     }
//!     // forward input events synchronously, then render session.snapshot()
//!     # break;
//! }
//! ```
//!
//! Pausing must happen at the loop level as shown: stop accumulating while
//! paused so resuming does not replay a burst of queued gravity steps.

pub mod core;
pub mod store;
pub mod types;
