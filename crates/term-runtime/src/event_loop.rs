use std::{
    io,
    time::{Duration, Instant},
};

use crossterm::event;

/// Events yielded by the loop, in strict arrival order.
#[derive(Debug, Clone, derive_more::From)]
pub(crate) enum LoopEvent {
    /// Application logic update timing (based on the tick interval).
    Tick,
    /// Screen render timing (dirty state, throttled to the frame interval).
    Render,
    /// Terminal events such as key input, mouse, and resize.
    Term(event::Event),
}

/// Single-threaded event source.
///
/// Funnels timer ticks, render deadlines, and terminal input into one ordered
/// stream via `next()`, blocking in `crossterm::event::poll` between
/// deadlines. Renders fire only when state changed (a tick or a terminal
/// event arrived) and never more often than the frame interval.
#[derive(Debug)]
pub(crate) struct EventLoop {
    tick_interval: Option<Duration>,
    frame_interval: Duration,
    last_tick: Instant,
    last_render: Instant,
    dirty: bool,
}

impl Default for EventLoop {
    fn default() -> Self {
        Self::new()
    }
}

impl EventLoop {
    pub(crate) fn new() -> Self {
        let now = Instant::now();
        let past_time = now.checked_sub(Duration::from_secs(86400)).unwrap_or(now);
        Self {
            tick_interval: None,
            frame_interval: Duration::ZERO,
            last_tick: past_time,
            last_render: past_time,
            dirty: true, // Initial render is required on startup
        }
    }

    /// Sets the tick interval. Pass `None` to disable tick events.
    pub(crate) fn set_tick_interval(&mut self, interval: Option<Duration>) {
        self.tick_interval = interval;
    }

    /// Sets the minimum interval between renders.
    pub(crate) fn set_frame_interval(&mut self, interval: Duration) {
        self.frame_interval = interval;
    }

    /// Returns the next event.
    ///
    /// Blocks until a tick or render deadline is reached or a terminal event
    /// occurs. With no tick interval and nothing to render, this only waits
    /// for terminal events.
    pub(crate) fn next(&mut self) -> io::Result<LoopEvent> {
        loop {
            let now = Instant::now();
            if let Some(tick_interval) = self.tick_interval
                && now.duration_since(self.last_tick) >= tick_interval
            {
                self.last_tick = now;
                self.dirty = true;
                return Ok(LoopEvent::Tick);
            }

            if self.dirty && now.duration_since(self.last_render) >= self.frame_interval {
                self.last_render = now;
                self.dirty = false;
                return Ok(LoopEvent::Render);
            }

            if let Some(timeout) = self.next_deadline(now)
                && !event::poll(timeout)?
            {
                continue;
            }

            self.dirty = true;
            return Ok(event::read()?.into());
        }
    }

    fn next_deadline(&self, now: Instant) -> Option<Duration> {
        let next_tick_at = self.tick_interval.map(|interval| self.last_tick + interval);
        let next_render_at = self.dirty.then(|| self.last_render + self.frame_interval);
        let next_deadline_at = [next_tick_at, next_render_at].into_iter().flatten().min()?;
        Some(next_deadline_at.saturating_duration_since(now))
    }
}
