use ratatui::{layout::Rect, widgets::Block as BlockWidget};

pub(crate) use self::{
    board_display::*, cell_display::*, piece_display::*, session_display::*,
    session_stats_display::*,
};

mod board_display;
mod cell_display;
mod piece_display;
mod session_display;
mod session_stats_display;

mod color {
    use ratatui::style::Color;

    // The five piece colors
    pub const BLUE: Color = Color::Rgb(3, 64, 173);
    pub const GREEN: Color = Color::Rgb(0, 230, 0);
    pub const YELLOW: Color = Color::Rgb(255, 212, 0);
    pub const ORANGE: Color = Color::Rgb(255, 71, 0);
    pub const RED: Color = Color::Rgb(255, 0, 0);

    // Chrome colors
    pub const GRAY: Color = Color::Rgb(127, 127, 127);
    pub const BLACK: Color = Color::Rgb(0, 0, 0);
    pub const WHITE: Color = Color::Rgb(255, 255, 255);
}

pub(crate) mod style {
    use gridfall_engine::PieceColor;
    use ratatui::style::{Color, Style};

    use crate::ui::widgets::color;

    const fn fg_bg(fg: Color, bg: Color) -> Style {
        Style::new().fg(fg).bg(bg)
    }

    const fn bg_only(color: Color) -> Style {
        Style::new().fg(color).bg(color)
    }

    pub const DEFAULT: Style = fg_bg(color::WHITE, color::BLACK);
    pub const EMPTY: Style = bg_only(color::BLACK);
    pub const EMPTY_DOT: Style = fg_bg(color::GRAY, color::BLACK);
    pub const GHOST: Style = fg_bg(color::WHITE, color::BLACK);

    pub const fn piece(color: PieceColor) -> Style {
        match color {
            PieceColor::Blue => bg_only(color::BLUE),
            PieceColor::Green => bg_only(color::GREEN),
            PieceColor::Yellow => bg_only(color::YELLOW),
            PieceColor::Orange => bg_only(color::ORANGE),
            PieceColor::Red => bg_only(color::RED),
        }
    }
}

fn block_vertical_margin(block: Option<&BlockWidget>) -> u16 {
    let dummy_rect = Rect::new(0, 0, 100, 100);
    let inner_rect = block.map_or(dummy_rect, |block| block.inner(dummy_rect));
    dummy_rect.height - inner_rect.height
}

fn block_horizontal_margin(block: Option<&BlockWidget>) -> u16 {
    let dummy_rect = Rect::new(0, 0, 100, 100);
    let inner_rect = block.map_or(dummy_rect, |block| block.inner(dummy_rect));
    dummy_rect.width - inner_rect.width
}
