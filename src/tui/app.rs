//! Main TUI application.

use std::io;
use std::sync::mpsc::Sender;
use std::thread;

use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::{Backend, CrosstermBackend};
use tracing::{debug, error, warn};

use crate::collector::{Collector, CommandRunner};

use super::event::{Event, EventHandler};
use super::input::{KeyAction, handle_key};
use super::render::render;
use super::state::AppState;

/// Runs `undo` when a setup step fails, then passes the result through.
fn undo_on_err<T>(result: io::Result<T>, undo: impl FnOnce()) -> io::Result<T> {
    if result.is_err() {
        undo();
    }
    result
}

/// Main TUI application.
pub struct App<R: CommandRunner + 'static> {
    collector: Collector<R>,
    domains: Vec<String>,
    state: AppState,
}

impl<R: CommandRunner + 'static> App<R> {
    /// Creates a new App. An empty `domains` list monitors all domains.
    pub fn new(collector: Collector<R>, domains: Vec<String>) -> Self {
        Self {
            collector,
            domains,
            state: AppState::new(),
        }
    }

    /// Runs the TUI until the user quits or an interrupt arrives.
    ///
    /// `events` drives the loop: its ticks schedule collects, and finished
    /// collects are posted back through its sender.
    pub fn run(mut self, events: EventHandler) -> io::Result<()> {
        // Setup terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        undo_on_err(execute!(stdout, EnterAlternateScreen), || {
            let _ = disable_raw_mode();
        })?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = undo_on_err(Terminal::new(backend), || {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
        })?;

        let result = self.event_loop(&mut terminal, &events);
        if let Err(e) = &result {
            error!(error = %e, "terminal error");
        }

        // Restore terminal
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result
    }

    fn event_loop<B: Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
        events: &EventHandler,
    ) -> io::Result<()> {
        if let Ok(size) = terminal.size() {
            self.state.set_size(size.width, size.height);
        }

        let tx = events.sender();
        self.spawn_collect(&tx);

        while !self.state.quitting {
            terminal.draw(|frame| render(frame, &self.state))?;

            match events.next() {
                Ok(event) => self.handle_event(event, &tx),
                Err(_) => self.state.quitting = true,
            }
        }
        Ok(())
    }

    /// Applies one event to the state; may schedule a collect.
    fn handle_event(&mut self, event: Event, tx: &Sender<Event>) {
        match event {
            Event::Tick => {
                if !self.state.paused {
                    self.spawn_collect(tx);
                }
            }
            Event::Key(key) => match handle_key(&mut self.state, key) {
                KeyAction::Quit => self.state.quitting = true,
                KeyAction::Refresh => self.spawn_collect(tx),
                KeyAction::None => {}
            },
            Event::Resize(width, height) => self.state.set_size(width, height),
            Event::Collected(Ok(snapshots)) => {
                if !self.state.apply_snapshots(snapshots) {
                    debug!("discarding out-of-order collect result");
                }
            }
            Event::Collected(Err(e)) => {
                warn!(error = %e, "collection failed");
                self.state.apply_error(e);
            }
            Event::Interrupt => self.state.quitting = true,
        }
    }

    /// Runs one collect on a worker thread and posts the result to `tx`.
    ///
    /// Results arriving after the loop has exited are dropped with the channel.
    fn spawn_collect(&self, tx: &Sender<Event>) {
        let collector = self.collector.clone();
        let domains = self.domains.clone();
        let tx = tx.clone();
        thread::spawn(move || {
            let result = collector.collect(&domains);
            let _ = tx.send(Event::Collected(result));
        });
    }
}
