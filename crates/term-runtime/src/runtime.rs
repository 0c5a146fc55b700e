use std::{io, time::Duration};

use crate::{
    App,
    event_loop::{EventLoop, LoopEvent},
};

/// TUI application runtime.
///
/// Drives an [`App`] from a single-threaded event loop: ticks update the
/// application, render deadlines draw it, and terminal events are handed to
/// it in arrival order.
///
/// The terminal itself (raw mode, alternate screen) is entered through
/// ratatui's managed run path, which restores the caller's terminal state on
/// every exit - normal return, error return, and panic.
#[derive(Default, Debug)]
pub struct Runtime {
    events: EventLoop,
}

impl Runtime {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the tick rate (Hz, ticks per second).
    pub fn set_tick_rate(&mut self, rate: Option<f64>) {
        self.events
            .set_tick_interval(rate.map(|rate| Duration::from_secs_f64(1.0 / rate)));
    }

    /// Sets the maximum render rate (Hz, frames per second).
    pub fn set_frame_rate(&mut self, rate: f64) {
        self.events
            .set_frame_interval(Duration::from_secs_f64(1.0 / rate));
    }

    /// Runs the application until `app.should_exit()` returns true.
    ///
    /// 1. Calls `app.init()` for initialization
    /// 2. Dispatches loop events:
    ///    - `Tick`: calls `app.update()`
    ///    - `Render`: calls `app.draw()`
    ///    - terminal events: calls `app.handle_event()`
    pub fn run<A>(mut self, app: &mut A) -> io::Result<()>
    where
        A: App,
    {
        app.init(&mut self);

        ratatui::run(|terminal| {
            while !app.should_exit() {
                match self.events.next()? {
                    LoopEvent::Tick => {
                        app.update(&mut self);
                    }
                    LoopEvent::Render => {
                        terminal.draw(|frame| app.draw(frame))?;
                    }
                    LoopEvent::Term(event) => {
                        app.handle_event(&mut self, event);
                    }
                }
            }
            Ok(())
        })
    }
}
