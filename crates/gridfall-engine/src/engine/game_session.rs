use crate::{
    PieceCollisionError,
    core::{board::Board, piece::Piece},
};

use super::{GameStats, game_field::GameField, piece_generator::{PieceGenerator, PieceSeed}};

/// Lifecycle state of a session.
///
/// `GameOver` is terminal for gameplay; only the exit input is accepted
/// there.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::IsVariant)]
pub enum SessionState {
    Running,
    Paused,
    GameOver,
}

/// A complete game session: field, statistics, state machine, and the
/// frame-counted gravity timer.
///
/// The session is ticked at a fixed rate via [`Self::increment_frame`];
/// input arrives between ticks through the `try_*` operations. Both run on
/// one thread, so every step is processed to completion before the next.
#[derive(Debug, Clone)]
pub struct GameSession {
    field: GameField,
    stats: GameStats,
    state: SessionState,
    fps: u64,
    drop_frames: u64,
}

/// Frames between gravity steps for the given level.
///
/// The drop interval starts at one second and shrinks by 100ms per level
/// down to a 100ms floor - a monotone function of the cleared-line count.
fn drop_frames(level: u64, fps: u64) -> u64 {
    let millis = 100 + u64::saturating_sub(900, level * 100);
    millis * fps / 1000
}

impl GameSession {
    #[must_use]
    pub fn new(fps: u64) -> Self {
        Self::with_field(GameField::new(), fps)
    }

    /// Like [`Self::new`], but with deterministic piece generation.
    #[must_use]
    pub fn with_seed(fps: u64, seed: PieceSeed) -> Self {
        Self::with_field(GameField::with_generator(PieceGenerator::with_seed(seed)), fps)
    }

    fn with_field(field: GameField, fps: u64) -> Self {
        Self {
            field,
            stats: GameStats::new(),
            state: SessionState::Running,
            fps,
            drop_frames: drop_frames(0, fps),
        }
    }

    #[must_use]
    pub fn field(&self) -> &GameField {
        &self.field
    }

    #[must_use]
    pub fn stats(&self) -> &GameStats {
        &self.stats
    }

    #[must_use]
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    #[must_use]
    pub fn fps(&self) -> u64 {
        self.fps
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        self.field.board()
    }

    #[must_use]
    pub fn falling_piece(&self) -> Piece {
        self.field.falling_piece()
    }

    #[must_use]
    pub fn next_piece(&self) -> Piece {
        self.field.next_piece()
    }

    #[must_use]
    pub fn simulate_drop_position(&self) -> Piece {
        self.field.simulate_drop_position()
    }

    pub fn pause(&mut self) {
        if self.state.is_running() {
            self.state = SessionState::Paused;
        }
    }

    pub fn resume(&mut self) {
        if self.state.is_paused() {
            self.state = SessionState::Running;
        }
    }

    /// Advances the session by one frame; at the gravity deadline the piece
    /// descends one row or locks.
    pub fn increment_frame(&mut self) {
        self.drop_frames = self.drop_frames.saturating_sub(1);
        if self.drop_frames == 0 {
            self.drop_frames = drop_frames(self.stats.level() as u64, self.fps);
            self.auto_drop();
        }
    }

    pub fn try_move_left(&mut self) -> Result<(), PieceCollisionError> {
        self.field
            .set_falling_piece(self.field.falling_piece().shifted(0, -1))
    }

    pub fn try_move_right(&mut self) -> Result<(), PieceCollisionError> {
        self.field
            .set_falling_piece(self.field.falling_piece().shifted(0, 1))
    }

    pub fn try_soft_drop(&mut self) -> Result<(), PieceCollisionError> {
        self.field
            .set_falling_piece(self.field.falling_piece().shifted(1, 0))
    }

    pub fn try_rotate_cw(&mut self) -> Result<(), PieceCollisionError> {
        self.field
            .set_falling_piece(self.field.falling_piece().rotated_cw())
    }

    pub fn try_rotate_ccw(&mut self) -> Result<(), PieceCollisionError> {
        self.field
            .set_falling_piece(self.field.falling_piece().rotated_ccw())
    }

    /// Moves the falling piece down until it collides, then locks it there.
    ///
    /// Always terminates: descent is bounded by the board height.
    pub fn hard_drop_and_lock(&mut self) {
        while self.try_soft_drop().is_ok() {}
        self.lock_falling_piece();
    }

    fn auto_drop(&mut self) {
        if self.try_soft_drop().is_ok() {
            return;
        }
        self.lock_falling_piece();
    }

    fn lock_falling_piece(&mut self) {
        let (cleared, result) = self.field.complete_piece_drop();
        self.stats.complete_piece_drop(cleared);
        if result.is_err() {
            self.state = SessionState::GameOver;
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::core::{
        board::BOARD_HEIGHT,
        piece::{PieceColor, PieceKind},
    };

    use super::*;

    const FPS: u64 = 60;

    fn seeded_generator() -> PieceGenerator {
        let seed: PieceSeed = "000102030405060708090a0b0c0d0e0f".parse().unwrap();
        PieceGenerator::with_seed(seed)
    }

    fn session_with(board: Board, falling_piece: Piece) -> GameSession {
        GameSession::with_field(
            GameField::from_parts(board, falling_piece, seeded_generator()),
            FPS,
        )
    }

    /// A vertical bar in the rightmost column, ready to plug rows that are
    /// full except for their last cell.
    fn vertical_bar_at_last_column(color: PieceColor) -> Piece {
        Piece::spawn(PieceKind::I, color).rotated_cw().shifted(1, 4)
    }

    #[test]
    fn test_gravity_moves_piece_down_one_row_per_interval() {
        let mut session = session_with(Board::EMPTY, Piece::spawn(PieceKind::T, PieceColor::Blue));
        let before = session.falling_piece();

        // level 0 drops once per second
        for _ in 0..FPS {
            session.increment_frame();
        }
        assert_eq!(session.falling_piece(), before.shifted(1, 0));
    }

    #[test]
    fn test_drop_interval_shrinks_with_level_to_a_floor() {
        let mut previous = drop_frames(0, FPS);
        assert_eq!(previous, FPS);
        for level in 1..15 {
            let current = drop_frames(level, FPS);
            assert!(current <= previous, "interval must not grow with level");
            previous = current;
        }
        // 100ms floor
        assert_eq!(drop_frames(9, FPS), FPS / 10);
        assert_eq!(drop_frames(14, FPS), FPS / 10);
    }

    #[test]
    fn test_single_line_clear_scores_base_amount() {
        let board = Board::from_ascii(
            r"
            BGYORBGYO.
            ",
        );
        let mut session = session_with(board, vertical_bar_at_last_column(PieceColor::Blue));

        session.hard_drop_and_lock();

        assert_eq!(session.stats().total_cleared_lines(), 1);
        assert_eq!(session.stats().score(), 100);
        assert!(session.state().is_running());
        // the bar's three remaining cells survive the clear in the last column
        assert!(!session.board().is_cell_free(BOARD_HEIGHT as i16 - 1, 9));
        assert!(session.board().is_cell_free(BOARD_HEIGHT as i16 - 4, 9));
    }

    #[test]
    fn test_uniform_color_line_scores_double() {
        let board = Board::from_ascii(
            r"
            RRRRRRRRR.
            ",
        );
        let mut session = session_with(board, vertical_bar_at_last_column(PieceColor::Red));

        session.hard_drop_and_lock();

        assert_eq!(session.stats().total_cleared_lines(), 1);
        assert_eq!(session.stats().uniform_color_lines(), 1);
        assert_eq!(session.stats().score(), 200);
    }

    #[test]
    fn test_blocked_spawn_ends_the_session() {
        let mut board = Board::EMPTY;
        board.lock_piece(&Piece::spawn(PieceKind::O, PieceColor::Red));
        let resting =
            Piece::spawn(PieceKind::O, PieceColor::Blue).shifted(BOARD_HEIGHT as i16 - 2, 0);
        let mut session = session_with(board, resting);

        session.hard_drop_and_lock();
        assert!(session.state().is_game_over());
    }

    #[test]
    fn test_pause_and_resume_transitions() {
        let mut session = session_with(Board::EMPTY, Piece::spawn(PieceKind::S, PieceColor::Green));
        assert!(session.state().is_running());

        session.pause();
        assert!(session.state().is_paused());
        // pausing again is a no-op
        session.pause();
        assert!(session.state().is_paused());

        session.resume();
        assert!(session.state().is_running());
    }

    #[test]
    fn test_game_over_is_terminal() {
        let mut board = Board::EMPTY;
        board.lock_piece(&Piece::spawn(PieceKind::O, PieceColor::Red));
        let resting =
            Piece::spawn(PieceKind::O, PieceColor::Blue).shifted(BOARD_HEIGHT as i16 - 2, 0);
        let mut session = session_with(board, resting);
        session.hard_drop_and_lock();

        session.pause();
        assert!(session.state().is_game_over());
        session.resume();
        assert!(session.state().is_game_over());
    }

    #[test]
    fn test_hard_drop_locks_and_activates_next_piece() {
        let mut session = session_with(Board::EMPTY, Piece::spawn(PieceKind::L, PieceColor::Orange));

        session.hard_drop_and_lock();

        assert_eq!(session.stats().completed_pieces(), 1);
        let top = session.falling_piece().cells().iter().map(|&(row, _)| row).min().unwrap();
        assert_eq!(top, 0, "a fresh piece spawns at the top");
    }

    #[test]
    fn test_failed_moves_leave_state_unchanged() {
        let mut session = session_with(Board::EMPTY, Piece::spawn(PieceKind::I, PieceColor::Blue));

        // walk the bar into the left wall; extra moves are rejected no-ops
        for _ in 0..BOARD_HEIGHT {
            let _ = session.try_move_left();
        }
        let against_wall = session.falling_piece();
        assert!(session.try_move_left().is_err());
        assert_eq!(session.falling_piece(), against_wall);
        assert_eq!(
            against_wall.cells().iter().map(|&(_, col)| col).min().unwrap(),
            0
        );
    }

    #[test]
    fn test_session_fills_up_to_game_over() {
        let mut session = GameSession::with_seed(
            FPS,
            "0123456789abcdef0123456789abcdef".parse().unwrap(),
        );

        // hard-dropping forever must end the game in a bounded number of
        // locks, whatever the piece sequence
        for _ in 0..1000 {
            if session.state().is_game_over() {
                break;
            }
            session.hard_drop_and_lock();
        }
        assert!(session.state().is_game_over());
    }
}
