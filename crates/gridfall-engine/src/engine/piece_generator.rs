use std::str::FromStr;

use rand::{
    Rng, SeedableRng as _,
    distr::{Distribution, StandardUniform},
};
use rand_pcg::Pcg32;

use crate::core::piece::{Piece, PieceColor, PieceKind};

/// Generates the stream of falling pieces.
///
/// # Shape Selection
///
/// Shapes are drawn uniformly at random; there is no bag system.
///
/// # Color Streaks
///
/// Colors are drawn uniformly too, but with a deliberate streak bias: a
/// history of generated colors is kept, and once more than two entries are
/// recorded there is a 1-in-3 chance that the next piece reuses the oldest
/// color in the history (resetting it). The bias makes single-color rows -
/// which score double - reachable in normal play.
#[derive(Debug, Clone)]
pub struct PieceGenerator {
    rng: Pcg32,
    color_history: Vec<PieceColor>,
}

impl Default for PieceGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl PieceGenerator {
    /// Creates a generator with a random seed.
    ///
    /// For deterministic generation, use [`Self::with_seed`] instead.
    #[must_use]
    pub fn new() -> Self {
        Self::with_seed(rand::rng().random())
    }

    /// Like [`Self::new`], but with a specific seed for deterministic piece
    /// generation.
    #[must_use]
    pub fn with_seed(seed: PieceSeed) -> Self {
        Self {
            rng: Pcg32::from_seed(seed.0),
            color_history: Vec::new(),
        }
    }

    /// Draws the next piece at its spawn position.
    pub fn next_piece(&mut self) -> Piece {
        let kind: PieceKind = self.rng.random();
        let color = self.next_color();
        Piece::spawn(kind, color)
    }

    fn next_color(&mut self) -> PieceColor {
        let color = if self.color_history.len() > 2 && self.rng.random_range(0..3) > 1 {
            let first = self.color_history[0];
            self.color_history.clear();
            first
        } else {
            self.rng.random()
        };
        self.color_history.push(color);
        color
    }
}

/// Seed for deterministic piece generation.
///
/// A 128-bit seed initializing the generator's RNG; the same seed produces
/// the same sequence of pieces and colors. Parsed from a 32-hex-digit string
/// on the command line.
#[derive(Debug, Clone, Copy)]
pub struct PieceSeed([u8; 16]);

#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("piece seed must be 32 hexadecimal digits")]
pub struct ParsePieceSeedError;

impl FromStr for PieceSeed {
    type Err = ParsePieceSeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 32 {
            return Err(ParsePieceSeedError);
        }
        let num = u128::from_str_radix(s, 16).map_err(|_| ParsePieceSeedError)?;
        Ok(Self(num.to_be_bytes()))
    }
}

/// Allows generating random `PieceSeed` values with `rng.random()`.
impl Distribution<PieceSeed> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> PieceSeed {
        let mut seed = [0; 16];
        rng.fill(&mut seed);
        PieceSeed(seed)
    }
}
