use rand::{Rng, distr::StandardUniform, prelude::Distribution};

use super::board::BOARD_WIDTH;

/// Board column at which the 4×4 bounding box of a spawning piece is anchored.
///
/// Centers the box on the 10-column board: 3-wide shapes occupy columns 3-5,
/// the bar occupies columns 3-6.
#[expect(clippy::cast_possible_truncation)]
const SPAWN_COL: i16 = ((BOARD_WIDTH - 4) / 2) as i16;

/// A falling piece: shape kind, display color, rotation state, and the anchor
/// position of its 4×4 bounding box in board coordinates.
///
/// Pieces are immutable - movement and rotation operations return new `Piece`
/// instances, and nothing here consults the board. Whether a transformed piece
/// is actually placeable is the placement engine's decision.
///
/// # Coordinate System
///
/// - `(row, col)` addressing; row indices increase downward
/// - The anchor may be negative: a piece spawns with its bounding box partly
///   above the top edge so that its topmost occupied cell lands on row 0
/// - Rotation is tracked as 0° (spawn), 90° right, 180°, or 270° right
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    kind: PieceKind,
    color: PieceColor,
    rotation: PieceRotation,
    row: i16,
    col: i16,
}

impl Piece {
    /// Creates a piece at its spawn position: box horizontally centered, the
    /// topmost occupied cell of the spawn orientation on row 0.
    #[must_use]
    pub fn spawn(kind: PieceKind, color: PieceColor) -> Self {
        Self {
            kind,
            color,
            rotation: PieceRotation::default(),
            row: -i16::from(kind.top_offset()),
            col: SPAWN_COL,
        }
    }

    #[must_use]
    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    #[must_use]
    pub fn color(&self) -> PieceColor {
        self.color
    }

    #[must_use]
    pub fn rotation(&self) -> PieceRotation {
        self.rotation
    }

    /// Returns the four absolute `(row, col)` cells occupied by this piece.
    ///
    /// A pure function of kind, rotation, and anchor; cells may lie outside
    /// the board for candidate pieces that have not been validated yet.
    #[must_use]
    pub fn cells(&self) -> [(i16, i16); 4] {
        let offsets = &PIECE_CELLS[self.kind as usize][self.rotation.as_usize()];
        let mut cells = [(0, 0); 4];
        for (cell, &(d_row, d_col)) in cells.iter_mut().zip(offsets) {
            *cell = (self.row + i16::from(d_row), self.col + i16::from(d_col));
        }
        cells
    }

    /// Returns the piece translated by the given row/column delta.
    #[must_use]
    pub fn shifted(&self, d_row: i16, d_col: i16) -> Self {
        Self {
            row: self.row + d_row,
            col: self.col + d_col,
            ..*self
        }
    }

    #[must_use]
    pub fn rotated_cw(&self) -> Self {
        Self {
            rotation: self.rotation.rotated_cw(),
            ..*self
        }
    }

    #[must_use]
    pub fn rotated_ccw(&self) -> Self {
        Self {
            rotation: self.rotation.rotated_ccw(),
            ..*self
        }
    }
}

/// Rotation state of a piece.
///
/// One of four discrete orientations, advancing clockwise; operations wrap
/// modulo 4. Rotation is plain bounding-box rotation with no wall kicks: a
/// rotation that would collide is rejected by the placement engine and the
/// piece keeps its previous state.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PieceRotation(u8);

impl PieceRotation {
    #[must_use]
    pub fn rotated_cw(self) -> Self {
        PieceRotation((self.0 + 1) % 4)
    }

    #[must_use]
    pub fn rotated_ccw(self) -> Self {
        PieceRotation((self.0 + 3) % 4)
    }

    const fn as_usize(self) -> usize {
        self.0 as usize
    }
}

/// Enum representing the shape of a piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum PieceKind {
    /// I-piece (the 4-cell horizontal bar).
    I = 0,
    /// O-piece.
    O = 1,
    /// S-piece.
    S = 2,
    /// Z-piece.
    Z = 3,
    /// J-piece.
    J = 4,
    /// L-piece.
    L = 5,
    /// T-piece.
    T = 6,
}

impl Distribution<PieceKind> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> PieceKind {
        match rng.random_range(0..=6) {
            0 => PieceKind::I,
            1 => PieceKind::O,
            2 => PieceKind::S,
            3 => PieceKind::Z,
            4 => PieceKind::J,
            5 => PieceKind::L,
            _ => PieceKind::T,
        }
    }
}

impl PieceKind {
    /// Number of piece kinds (7).
    pub const LEN: usize = 7;

    /// Cell offsets within the 4×4 bounding box at spawn orientation.
    ///
    /// Offsets are `(row, col)` in row-major order. Used by preview rendering.
    #[must_use]
    pub fn base_cells(self) -> &'static [(u8, u8); 4] {
        &PIECE_CELLS[self as usize][0]
    }

    /// Row of the topmost occupied cell at spawn orientation.
    fn top_offset(self) -> u8 {
        // base_cells is row-major, so the first offset carries the minimum row
        self.base_cells()[0].0
    }
}

/// Display color of a piece.
///
/// Assigned independently of the shape when a piece is generated. Board cells
/// remember the color of the piece that filled them; a cleared row whose
/// cells all share one color scores double.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum PieceColor {
    Blue = 0,
    Green = 1,
    Yellow = 2,
    Orange = 3,
    Red = 4,
}

impl PieceColor {
    /// Number of piece colors (5).
    pub const LEN: usize = 5;
}

impl Distribution<PieceColor> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> PieceColor {
        match rng.random_range(0..=4) {
            0 => PieceColor::Blue,
            1 => PieceColor::Green,
            2 => PieceColor::Yellow,
            3 => PieceColor::Orange,
            _ => PieceColor::Red,
        }
    }
}

/// Piece shape within its 4×4 bounding box.
type ShapeBox = [[bool; 4]; 4];

/// Generates all 4 rotation states of a shape by rotating 90° clockwise.
///
/// # Arguments
///
/// * `size` - Effective size of the shape (3 for most pieces, 4 for I, 2 for O)
/// * `base` - Shape at spawn orientation
const fn shape_rotations(size: usize, base: ShapeBox) -> [ShapeBox; 4] {
    let mut rotated = [base; 4];
    let mut i = 1;
    while i < 4 {
        let mut next = [[false; 4]; 4];
        let mut row = 0;
        while row < size {
            let mut col = 0;
            while col < size {
                next[row][col] = rotated[i - 1][size - 1 - col][row];
                col += 1;
            }
            row += 1;
        }
        rotated[i] = next;
        i += 1;
    }
    rotated
}

/// Extracts the 4 occupied cell offsets of a shape in row-major order.
#[expect(clippy::cast_possible_truncation)]
const fn cell_offsets(shape: &ShapeBox) -> [(u8, u8); 4] {
    let mut cells = [(0, 0); 4];
    let mut n = 0;
    let mut row = 0;
    while row < 4 {
        let mut col = 0;
        while col < 4 {
            if shape[row][col] {
                assert!(n < 4);
                cells[n] = (row as u8, col as u8);
                n += 1;
            }
            col += 1;
        }
        row += 1;
    }
    assert!(n == 4);
    cells
}

/// Occupied cell offsets for every kind and rotation state, derived at
/// compile time from the spawn-orientation shapes.
const PIECE_CELLS: [[[(u8, u8); 4]; 4]; PieceKind::LEN] = {
    const fn kind_cells(size: usize, base: ShapeBox) -> [[(u8, u8); 4]; 4] {
        let rotated = shape_rotations(size, base);
        [
            cell_offsets(&rotated[0]),
            cell_offsets(&rotated[1]),
            cell_offsets(&rotated[2]),
            cell_offsets(&rotated[3]),
        ]
    }

    const C: bool = true;
    const E: bool = false;
    const EEEE: [bool; 4] = [E; 4];

    [
        // I-piece
        kind_cells(4, [EEEE, [C, C, C, C], EEEE, EEEE]),
        // O-piece
        kind_cells(2, [[C, C, E, E], [C, C, E, E], EEEE, EEEE]),
        // S-piece
        kind_cells(3, [[E, C, C, E], [C, C, E, E], EEEE, EEEE]),
        // Z-piece
        kind_cells(3, [[C, C, E, E], [E, C, C, E], EEEE, EEEE]),
        // J-piece
        kind_cells(3, [[C, E, E, E], [C, C, C, E], EEEE, EEEE]),
        // L-piece
        kind_cells(3, [[E, E, C, E], [C, C, C, E], EEEE, EEEE]),
        // T-piece
        kind_cells(3, [[E, C, E, E], [C, C, C, E], EEEE, EEEE]),
    ]
};
