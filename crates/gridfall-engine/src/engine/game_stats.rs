use crate::core::board::ClearedLines;

/// Points awarded per cleared row before the level factor is applied.
///
/// A row awards `LINE_SCORE * (level + 1)`; a row filled by a single color
/// awards double that.
const LINE_SCORE: usize = 100;

/// Lines needed to advance one level.
const LINES_PER_LEVEL: usize = 10;

/// Game statistics: score, cleared lines, and derived level.
///
/// # Scoring
///
/// - Each cleared row awards `100 * (level + 1)`, with the level in effect
///   when the piece locked (before counting the new lines)
/// - A cleared row whose cells all share one color awards double
/// - No combo or back-to-back bonuses
#[derive(Debug, Clone)]
pub struct GameStats {
    score: usize,
    completed_pieces: usize,
    total_cleared_lines: usize,
    line_cleared_counter: [usize; 5],
    uniform_color_lines: usize,
}

impl Default for GameStats {
    fn default() -> Self {
        Self::new()
    }
}

impl GameStats {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            score: 0,
            completed_pieces: 0,
            total_cleared_lines: 0,
            line_cleared_counter: [0; 5],
            uniform_color_lines: 0,
        }
    }

    #[must_use]
    pub const fn score(&self) -> usize {
        self.score
    }

    /// Returns the current level: one step per 10 cleared lines.
    ///
    /// The level drives both the gravity interval and the score factor.
    #[must_use]
    pub const fn level(&self) -> usize {
        self.total_cleared_lines / LINES_PER_LEVEL
    }

    /// Returns the total number of pieces locked into place.
    #[must_use]
    pub const fn completed_pieces(&self) -> usize {
        self.completed_pieces
    }

    #[must_use]
    pub const fn total_cleared_lines(&self) -> usize {
        self.total_cleared_lines
    }

    /// Returns a histogram of line clears by simultaneous count (0-4).
    #[must_use]
    pub const fn line_cleared_counter(&self) -> &[usize; 5] {
        &self.line_cleared_counter
    }

    /// Returns how many cleared rows were filled by a single color.
    #[must_use]
    pub const fn uniform_color_lines(&self) -> usize {
        self.uniform_color_lines
    }

    /// Updates statistics after a piece drop.
    ///
    /// Called once per locked piece with the clear result of that lock.
    pub const fn complete_piece_drop(&mut self, cleared: ClearedLines) {
        let level_factor = self.level() + 1;

        self.completed_pieces += 1;
        self.total_cleared_lines += cleared.total;
        if cleared.total < self.line_cleared_counter.len() {
            self.line_cleared_counter[cleared.total] += 1;
        }
        self.uniform_color_lines += cleared.uniform;

        let mixed = cleared.total - cleared.uniform;
        self.score += LINE_SCORE * level_factor * (mixed + 2 * cleared.uniform);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const fn cleared(total: usize, uniform: usize) -> ClearedLines {
        ClearedLines { total, uniform }
    }

    #[test]
    fn test_single_line_awards_base_score() {
        let mut stats = GameStats::new();
        stats.complete_piece_drop(cleared(1, 0));

        assert_eq!(stats.score(), 100);
        assert_eq!(stats.total_cleared_lines(), 1);
        assert_eq!(stats.line_cleared_counter()[1], 1);
        assert_eq!(stats.completed_pieces(), 1);
    }

    #[test]
    fn test_uniform_color_line_awards_double() {
        let mut stats = GameStats::new();
        stats.complete_piece_drop(cleared(1, 1));

        assert_eq!(stats.score(), 200);
        assert_eq!(stats.uniform_color_lines(), 1);
    }

    #[test]
    fn test_mixed_and_uniform_rows_in_one_drop() {
        let mut stats = GameStats::new();
        stats.complete_piece_drop(cleared(3, 1));

        // two mixed rows at 100 each plus one uniform row at 200
        assert_eq!(stats.score(), 400);
        assert_eq!(stats.line_cleared_counter()[3], 1);
    }

    #[test]
    fn test_level_advances_every_ten_lines() {
        let mut stats = GameStats::new();
        assert_eq!(stats.level(), 0);

        for _ in 0..10 {
            stats.complete_piece_drop(cleared(1, 0));
        }
        assert_eq!(stats.level(), 1);
        assert_eq!(stats.score(), 1000);

        // at level 1 a single line is worth 200
        stats.complete_piece_drop(cleared(1, 0));
        assert_eq!(stats.score(), 1200);
    }

    #[test]
    fn test_level_factor_applies_before_new_lines_are_counted() {
        let mut stats = GameStats::new();
        for _ in 0..9 {
            stats.complete_piece_drop(cleared(1, 0));
        }

        // the tenth line is still scored at level 0
        stats.complete_piece_drop(cleared(1, 0));
        assert_eq!(stats.score(), 1000);
        assert_eq!(stats.level(), 1);
    }

    #[test]
    fn test_zero_clear_drop_only_counts_the_piece() {
        let mut stats = GameStats::new();
        stats.complete_piece_drop(cleared(0, 0));

        assert_eq!(stats.score(), 0);
        assert_eq!(stats.completed_pieces(), 1);
        assert_eq!(stats.line_cleared_counter()[0], 1);
    }
}
