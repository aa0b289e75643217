use crate::command::Command;
use crate::highscore::ScoreStore;
use crate::session::Session;
use crossterm::event::{poll, read, Event};
use ratatui::{backend::Backend, Terminal};
use std::io;
use std::time::Instant;

/// Drives a [`Session`] from terminal input and a tick clock, redrawing the
/// screen after every change
#[derive(Debug)]
pub(crate) struct App<S> {
    session: Session<S>,
    next_tick: Option<Instant>,
}

impl<S: ScoreStore> App<S> {
    pub(crate) fn new(session: Session<S>) -> App<S> {
        App {
            session,
            next_tick: None,
        }
    }

    pub(crate) fn run<B: Backend>(mut self, mut terminal: Terminal<B>) -> io::Result<()> {
        while !self.session.terminated() {
            self.draw(&mut terminal)?;
            self.process_input()?;
        }
        Ok(())
    }

    fn draw<B: Backend>(&self, terminal: &mut Terminal<B>) -> io::Result<()> {
        let snapshot = self.session.snapshot();
        terminal.draw(|frame| frame.render_widget(&snapshot, frame.area()))?;
        Ok(())
    }

    /// Wait for either a key press or the next tick, whichever comes first.
    /// When the game is not in play, this blocks until an event arrives.
    fn process_input(&mut self) -> io::Result<()> {
        if let Some(period) = self.session.tick_period() {
            let when = *self.next_tick.get_or_insert_with(|| Instant::now() + period);
            let wait = when.saturating_duration_since(Instant::now());
            if wait.is_zero() || !poll(wait)? {
                self.session.tick();
                self.next_tick = None;
            } else {
                self.handle_event(read()?);
            }
        } else {
            self.next_tick = None;
            self.handle_event(read()?);
        }
        Ok(())
    }

    fn handle_event(&mut self, event: Event) {
        if let Some(cmd) = event
            .as_key_press_event()
            .and_then(Command::from_key_event)
        {
            self.session.handle_command(cmd);
        }
    }
}
