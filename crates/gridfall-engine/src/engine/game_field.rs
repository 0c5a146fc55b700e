use crate::{
    PieceCollisionError, SpawnCollisionError,
    core::{
        board::{Board, ClearedLines},
        piece::Piece,
    },
};

use super::piece_generator::PieceGenerator;

/// Single-turn game state: the board, the falling piece, the next piece, and
/// the generator that refills the queue.
#[derive(Debug, Clone)]
pub struct GameField {
    board: Board,
    falling_piece: Piece,
    next_piece: Piece,
    generator: PieceGenerator,
}

impl Default for GameField {
    fn default() -> Self {
        Self::new()
    }
}

impl GameField {
    #[must_use]
    pub fn new() -> Self {
        Self::with_generator(PieceGenerator::new())
    }

    #[must_use]
    pub fn with_generator(mut generator: PieceGenerator) -> Self {
        let falling_piece = generator.next_piece();
        let next_piece = generator.next_piece();
        Self {
            board: Board::EMPTY,
            falling_piece,
            next_piece,
            generator,
        }
    }

    /// Assembles a field from an existing board and falling piece, for setups
    /// that do not start from an empty field.
    #[must_use]
    pub fn from_parts(board: Board, falling_piece: Piece, mut generator: PieceGenerator) -> Self {
        let next_piece = generator.next_piece();
        Self {
            board,
            falling_piece,
            next_piece,
            generator,
        }
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn falling_piece(&self) -> Piece {
        self.falling_piece
    }

    #[must_use]
    pub fn next_piece(&self) -> Piece {
        self.next_piece
    }

    /// Checks that every cell of the candidate piece is free on the board.
    ///
    /// This single predicate backs all move kinds: left, right, both
    /// rotations, soft drop, and hard drop.
    #[must_use]
    pub fn can_place(&self, piece: &Piece) -> bool {
        piece
            .cells()
            .iter()
            .all(|&(row, col)| self.board.is_cell_free(row, col))
    }

    /// Commits the candidate as the new falling piece if it places cleanly.
    ///
    /// On failure the previous piece state is retained unchanged; there are
    /// no partial moves.
    pub fn set_falling_piece(&mut self, piece: Piece) -> Result<(), PieceCollisionError> {
        if !self.can_place(&piece) {
            return Err(PieceCollisionError);
        }
        self.falling_piece = piece;
        Ok(())
    }

    /// Returns where the falling piece would land if dropped straight down.
    #[must_use]
    pub fn simulate_drop_position(&self) -> Piece {
        let mut dropped = self.falling_piece;
        loop {
            let candidate = dropped.shifted(1, 0);
            if !self.can_place(&candidate) {
                return dropped;
            }
            dropped = candidate;
        }
    }

    /// Locks the falling piece, clears full rows, and activates the next
    /// piece.
    ///
    /// Returns the clear result together with `Err` when the newly spawned
    /// piece collides at its spawn position, which ends the game.
    pub fn complete_piece_drop(&mut self) -> (ClearedLines, Result<(), SpawnCollisionError>) {
        self.board.lock_piece(&self.falling_piece);
        let cleared = self.board.clear_full_rows();

        self.falling_piece = self.next_piece;
        self.next_piece = self.generator.next_piece();
        if !self.can_place(&self.falling_piece) {
            return (cleared, Err(SpawnCollisionError));
        }

        (cleared, Ok(()))
    }
}

#[cfg(test)]
mod tests {
    use crate::core::{
        board::{BOARD_HEIGHT, BOARD_WIDTH},
        piece::{PieceColor, PieceKind},
    };
    use crate::engine::piece_generator::PieceSeed;

    use super::*;

    fn seeded_generator() -> PieceGenerator {
        let seed: PieceSeed = "000102030405060708090a0b0c0d0e0f".parse().unwrap();
        PieceGenerator::with_seed(seed)
    }

    fn field_with(board: Board, falling_piece: Piece) -> GameField {
        GameField::from_parts(board, falling_piece, seeded_generator())
    }

    #[test]
    fn test_can_place_rejects_out_of_bounds() {
        let field = field_with(Board::EMPTY, Piece::spawn(PieceKind::O, PieceColor::Blue));
        let piece = field.falling_piece();

        assert!(!field.can_place(&piece.shifted(0, -(BOARD_WIDTH as i16))));
        assert!(!field.can_place(&piece.shifted(0, BOARD_WIDTH as i16)));
        assert!(!field.can_place(&piece.shifted(BOARD_HEIGHT as i16, 0)));
        assert!(!field.can_place(&piece.shifted(-1, 0)));
    }

    #[test]
    fn test_can_place_rejects_overlap() {
        let board = Board::from_ascii(
            r"
            ....RR....
            ",
        );
        let field = field_with(board, Piece::spawn(PieceKind::O, PieceColor::Blue));

        // an O piece whose bottom row lands on the filled cells is rejected;
        // one row higher it places cleanly
        let candidate =
            Piece::spawn(PieceKind::O, PieceColor::Blue).shifted(BOARD_HEIGHT as i16 - 2, 1);
        assert!(!field.can_place(&candidate));
        assert!(field.can_place(&candidate.shifted(-1, 0)));
    }

    #[test]
    fn test_failed_move_leaves_piece_unchanged() {
        let mut field = field_with(Board::EMPTY, Piece::spawn(PieceKind::I, PieceColor::Red));
        let before = field.falling_piece();

        let result = field.set_falling_piece(before.shifted(-1, 0));
        assert!(result.is_err());
        assert_eq!(field.falling_piece(), before);
    }

    #[test]
    fn test_simulate_drop_position_rests_on_floor() {
        let field = field_with(Board::EMPTY, Piece::spawn(PieceKind::T, PieceColor::Green));
        let dropped = field.simulate_drop_position();

        assert!(!field.can_place(&dropped.shifted(1, 0)));
        let bottom = dropped.cells().iter().map(|&(row, _)| row).max().unwrap();
        assert_eq!(bottom, BOARD_HEIGHT as i16 - 1);
    }

    #[test]
    fn test_drop_simulation_is_bounded_by_board_height() {
        let field = field_with(Board::EMPTY, Piece::spawn(PieceKind::I, PieceColor::Blue));
        let spawned = field.falling_piece();
        let dropped = field.simulate_drop_position();

        let steps = dropped.cells()[0].0 - spawned.cells()[0].0;
        assert!(steps >= 0);
        assert!(steps < BOARD_HEIGHT as i16);
    }

    #[test]
    fn test_bar_locked_after_four_descents_fills_row_four() {
        let mut field = field_with(Board::EMPTY, Piece::spawn(PieceKind::I, PieceColor::Blue));

        for _ in 0..4 {
            let down = field.falling_piece().shifted(1, 0);
            field.set_falling_piece(down).unwrap();
        }
        let locked_cells = field.falling_piece().cells();
        let (cleared, result) = field.complete_piece_drop();

        assert_eq!(cleared, ClearedLines::default());
        assert!(result.is_ok());
        let mut expected = locked_cells;
        expected.sort_unstable();
        assert_eq!(expected, [(4, 3), (4, 4), (4, 5), (4, 6)]);
        for (row, col) in expected {
            assert!(!field.board().is_cell_free(row, col));
        }
    }

    #[test]
    fn test_blocked_spawn_reports_collision() {
        let mut board = Board::EMPTY;
        // occupy the spawn area so any next piece collides immediately
        board.lock_piece(&Piece::spawn(PieceKind::O, PieceColor::Red));

        let resting = Piece::spawn(PieceKind::O, PieceColor::Blue).shifted(BOARD_HEIGHT as i16 - 2, 0);
        let mut field = field_with(board, resting);

        let (cleared, result) = field.complete_piece_drop();
        assert_eq!(cleared, ClearedLines::default());
        assert!(result.is_err());
    }
}
