use gridfall_engine::GameSession;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Text},
    widgets::{Block as BlockWidget, BlockExt as _, Widget},
};

/// Score and progress panel.
///
/// The score is zero-padded to six digits, counter style.
#[derive(Debug)]
pub(crate) struct SessionStatsDisplay<'a> {
    session: &'a GameSession,
    block: Option<BlockWidget<'a>>,
}

const PANEL_WIDTH: u16 = 14;

impl<'a> SessionStatsDisplay<'a> {
    pub fn new(session: &'a GameSession) -> Self {
        Self {
            session,
            block: None,
        }
    }

    pub fn block(self, block: BlockWidget<'a>) -> Self {
        Self {
            block: Some(block),
            ..self
        }
    }

    pub fn width(&self) -> u16 {
        PANEL_WIDTH + super::block_horizontal_margin(self.block.as_ref())
    }

    pub fn height(&self) -> u16 {
        4 + super::block_vertical_margin(self.block.as_ref())
    }
}

impl Widget for SessionStatsDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Widget::render(&self, area, buf);
    }
}

impl Widget for &SessionStatsDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.block.as_ref().render(area, buf);
        let area = self.block.inner_if_some(area);

        let stats = self.session.stats();
        let text = Text::from(vec![
            Line::from(format!("SCORE  {:06}", stats.score())),
            Line::from(format!("LINES  {}", stats.total_cleared_lines())),
            Line::from(format!("LEVEL  {}", stats.level())),
            Line::from(format!("PIECES {}", stats.completed_pieces())),
        ]);
        text.render(area, buf);
    }
}
