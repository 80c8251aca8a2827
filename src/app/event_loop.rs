use std::collections::VecDeque;
use std::io;
use std::time::Instant;

use anyhow::{Context, Result};
use crossterm::event::{self, Event};
use ratatui::Terminal;
use ratatui::backend::Backend;

use crate::app::{App, Flow, Model, SessionOutcome, message_for_event, update};

/// A blocking source of terminal events.
pub trait EventSource {
    /// Block until the next event arrives.
    ///
    /// # Errors
    ///
    /// Returns an error if the source can no longer produce events.
    fn next_event(&mut self) -> io::Result<Event>;
}

/// Reads events from the real terminal.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalEvents;

impl EventSource for TerminalEvents {
    fn next_event(&mut self) -> io::Result<Event> {
        event::read()
    }
}

/// Replays a fixed script of events; runs dry with `UnexpectedEof`.
impl EventSource for VecDeque<Event> {
    fn next_event(&mut self) -> io::Result<Event> {
        self.pop_front()
            .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "input script exhausted"))
    }
}

impl App {
    /// Run an edit session on the real terminal.
    ///
    /// Raw mode and the alternate screen are held only for the duration of
    /// the session and are released on every exit path.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal cannot be initialized, drawn to, or
    /// read from.
    pub fn run(&mut self) -> Result<SessionOutcome> {
        let _run_scope = crate::perf::scope("app.run.total");

        let mut terminal = ratatui::try_init()
            .context("Failed to initialize terminal - textpad requires an interactive terminal")?;
        let result = self.run_with(&mut terminal, &mut TerminalEvents);

        // Restore terminal
        ratatui::restore();

        result
    }

    /// Run an edit session on any backend with any event source.
    ///
    /// # Errors
    ///
    /// Returns an error if drawing fails, the event source fails, or the
    /// buffer rejects a cursor position.
    pub fn run_with<B>(
        &mut self,
        terminal: &mut Terminal<B>,
        events: &mut impl EventSource,
    ) -> Result<SessionOutcome>
    where
        B: Backend,
        B::Error: std::error::Error + Send + Sync + 'static,
    {
        let size = terminal.size().context("Failed to query terminal size")?;
        let mut model = Model::new(&self.config, size);
        tracing::info!(
            lines = model.buffer.line_count(),
            file = model.file_name.as_deref().unwrap_or("untitled"),
            "edit session started"
        );

        let mut frame_idx: u64 = 0;
        loop {
            // Size may change between frames; query before every render.
            let size = terminal.size().context("Failed to query terminal size")?;
            model.resize(size);

            frame_idx += 1;
            let draw_start = Instant::now();
            terminal
                .draw(|frame| crate::ui::render(&model, frame))
                .context("Failed to draw frame")?;
            let draw_ms = draw_start.elapsed().as_secs_f64() * 1000.0;
            model.frame_ms = Some(draw_ms);
            crate::perf::log_event(
                "frame.draw",
                format!(
                    "frame={} draw_ms={:.3} cursor={},{} window={},{}",
                    frame_idx,
                    draw_ms,
                    model.cursor.row(),
                    model.cursor.col(),
                    model.window.row(),
                    model.window.col()
                ),
            );

            let event = events.next_event().context("Failed to read input event")?;
            let Some(msg) = message_for_event(&event) else {
                crate::perf::log_event("event.skip", format!("frame={frame_idx} event={event:?}"));
                continue;
            };
            let Some(msg) = self.filter(msg) else {
                continue;
            };
            crate::perf::log_event("event.message", format!("frame={frame_idx} msg={msg:?}"));

            if update(&mut model, msg).context("Edit rejected by buffer")? == Flow::Stop {
                break;
            }
        }

        let save = model.save_on_exit;
        terminal
            .draw(|frame| crate::ui::render_exit_message(frame, save))
            .context("Failed to draw exit message")?;
        std::thread::sleep(self.config.exit_pause);

        tracing::info!(save, frames = frame_idx, "edit session ended");
        Ok(model.into_outcome())
    }
}
