//! Game logic and state management.
//!
//! This module provides the high-level logic that orchestrates the core data
//! structures into a playable game:
//!
//! - [`GameField`] - Board, falling piece, next piece, and the placement engine
//! - [`GameSession`] - State machine with frame-counted gravity and statistics
//! - [`GameStats`] - Score, cleared lines, and level tracking
//! - [`PieceGenerator`] - Seeded random piece and color generation
//!
//! # Game Flow
//!
//! 1. A session starts running with a freshly spawned falling piece
//! 2. Input moves/rotates the piece; every candidate state is committed only
//!    if it places cleanly, otherwise the piece is left unchanged
//! 3. Gravity ticks the piece down; when it can no longer descend it locks
//! 4. Full rows clear, statistics update, the next piece becomes active
//! 5. Repeat until a new piece collides at its spawn position (game over)

pub use self::{game_field::*, game_session::*, game_stats::*, piece_generator::*};

mod game_field;
mod game_session;
mod game_stats;
mod piece_generator;
