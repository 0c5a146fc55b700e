use gridfall_engine::Piece;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Flex, Layout, Rect},
    widgets::{Block as BlockWidget, BlockExt as _, Widget},
};

use crate::ui::widgets::CellDisplay;

/// Preview panel for a single piece in its spawn orientation.
///
/// Every shape fits the top two rows of its bounding box at spawn, so the
/// panel renders a fixed 4×2 grid.
#[derive(Debug)]
pub(crate) struct PieceDisplay<'a> {
    piece: Option<Piece>,
    block: Option<BlockWidget<'a>>,
}

const GRID_WIDTH: u16 = 4;
const GRID_HEIGHT: u16 = 2;

impl<'a> PieceDisplay<'a> {
    pub fn new() -> Self {
        Self {
            piece: None,
            block: None,
        }
    }

    pub fn piece(self, piece: Piece) -> Self {
        Self {
            piece: Some(piece),
            ..self
        }
    }

    pub fn block(self, block: BlockWidget<'a>) -> Self {
        Self {
            block: Some(block),
            ..self
        }
    }

    pub fn width(&self) -> u16 {
        GRID_WIDTH * CellDisplay::width() + super::block_horizontal_margin(self.block.as_ref())
    }

    pub fn height(&self) -> u16 {
        GRID_HEIGHT * CellDisplay::height() + super::block_vertical_margin(self.block.as_ref())
    }
}

impl Widget for PieceDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Widget::render(&self, area, buf);
    }
}

impl Widget for &PieceDisplay<'_> {
    #[expect(clippy::cast_possible_truncation)]
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.block.as_ref().render(area, buf);
        let area = self.block.inner_if_some(area);

        let col_constraints = (0..GRID_WIDTH).map(|_| Constraint::Length(CellDisplay::width()));
        let row_constraints = (0..GRID_HEIGHT).map(|_| Constraint::Length(CellDisplay::height()));
        let horizontal = Layout::horizontal(col_constraints).flex(Flex::Center);
        let vertical = Layout::vertical(row_constraints);
        let grid_rows = area
            .layout::<{ GRID_HEIGHT as usize }>(&vertical)
            .into_iter()
            .map(|row| row.layout::<{ GRID_WIDTH as usize }>(&horizontal));

        let empty = CellDisplay::from_cell(gridfall_engine::Cell::Empty, false);
        let shape = self.piece.map(|piece| {
            // the piece's spawn offset inside its bounding box is irrelevant
            // here; normalize so the top occupied row renders on grid row 0
            let cells = piece.kind().base_cells();
            let top = cells[0].0;
            let normalized: Vec<(u8, u8)> =
                cells.iter().map(|&(row, col)| (row - top, col)).collect();
            (normalized, piece.color())
        });

        for (row, grid_row) in grid_rows.enumerate() {
            for (col, grid_cell) in grid_row.into_iter().enumerate() {
                let pos = (row as u8, col as u8);
                let occupied = shape
                    .as_ref()
                    .is_some_and(|(cells, _)| cells.contains(&pos));
                if let Some((_, color)) = &shape
                    && occupied
                {
                    Widget::render(&CellDisplay::from_color(*color), grid_cell, buf);
                } else {
                    Widget::render(&empty, grid_cell, buf);
                }
            }
        }
    }
}
