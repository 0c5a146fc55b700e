use crossterm::event::Event;
use gridfall_engine::{GameSession, SessionState};
use ratatui::{
    Frame,
    layout::{Constraint, Layout},
    style::{Color, Style},
    text::Text,
};
use term_runtime::{App, Runtime};

use crate::{
    input::{self, GameAction},
    ui::widgets::SessionDisplay,
};

/// The interactive play application: one session driven by mapped key
/// actions and the runtime's gravity ticks.
#[derive(Debug)]
pub(crate) struct PlayApp {
    session: GameSession,
    show_ghost: bool,
    is_exiting: bool,
}

impl PlayApp {
    pub(crate) fn new(session: GameSession, show_ghost: bool) -> Self {
        Self {
            session,
            show_ghost,
            is_exiting: false,
        }
    }

    fn apply(&mut self, action: GameAction) {
        let is_running = self.session.state().is_running();
        match action {
            GameAction::MoveLeft if is_running => _ = self.session.try_move_left(),
            GameAction::MoveRight if is_running => _ = self.session.try_move_right(),
            GameAction::RotateCw if is_running => _ = self.session.try_rotate_cw(),
            GameAction::RotateCcw if is_running => _ = self.session.try_rotate_ccw(),
            GameAction::SoftDrop if is_running => _ = self.session.try_soft_drop(),
            GameAction::HardDrop if is_running => self.session.hard_drop_and_lock(),
            GameAction::Pause if is_running => self.session.pause(),
            // a second Esc while paused, or any Esc at game over, ends the session
            GameAction::Pause | GameAction::Quit => self.is_exiting = true,
            GameAction::Resume if self.session.state().is_paused() => self.session.resume(),
            _ => {}
        }
    }
}

impl App for PlayApp {
    #[expect(clippy::cast_precision_loss)]
    fn init(&mut self, runtime: &mut Runtime) {
        let fps = self.session.fps() as f64;
        runtime.set_tick_rate(Some(fps));
        runtime.set_frame_rate(fps);
    }

    fn should_exit(&self) -> bool {
        self.is_exiting
    }

    fn handle_event(&mut self, _runtime: &mut Runtime, event: Event) {
        let Some(key) = event.as_key_event() else {
            return;
        };
        let Some(action) = input::map_key(key) else {
            return;
        };
        self.apply(action);
    }

    fn draw(&self, frame: &mut Frame) {
        let session_display = SessionDisplay::new(&self.session, self.show_ghost);
        let help_text = match self.session.state() {
            SessionState::Running => {
                "← → (Move) | ↑ (Rotate CW) | ↓ (Rotate CCW) | S (Soft Drop) | Space (Hard Drop) | Esc (Pause)"
            }
            SessionState::Paused => "Enter (Resume) | Esc (Exit)",
            SessionState::GameOver => "Esc (Exit)",
        };
        let help_text = Text::from(help_text)
            .style(Style::default().fg(Color::DarkGray))
            .centered();

        let [main_area, help_area] =
            Layout::vertical([Constraint::Length(22), Constraint::Length(1)])
                .areas::<2>(frame.area());
        frame.render_widget(session_display, main_area);
        frame.render_widget(help_text, help_area);
    }

    fn update(&mut self, _runtime: &mut Runtime) {
        if self.session.state().is_running() {
            self.session.increment_frame();
        }
    }
}
