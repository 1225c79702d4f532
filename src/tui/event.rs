//! Event handling for TUI.
//!
//! Uses a separate thread to poll for terminal events and timer ticks.
//! Collection workers and the interrupt handler post into the same channel
//! through [`EventHandler::sender`].

use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event as CrosstermEvent, KeyEvent};

use crate::collector::CollectError;
use crate::model::DomainSnapshot;

/// Application events.
#[derive(Debug)]
pub enum Event {
    /// Refresh timer fired.
    Tick,
    /// Keyboard input.
    Key(KeyEvent),
    /// Terminal resize (width, height).
    Resize(u16, u16),
    /// A background collect finished.
    Collected(Result<Vec<DomainSnapshot>, CollectError>),
    /// SIGINT delivered outside the terminal's key stream.
    Interrupt,
}

/// Event handler that polls for terminal events in a separate thread.
pub struct EventHandler {
    rx: Receiver<Event>,
    tx: Sender<Event>,
}

impl EventHandler {
    /// Creates a new event handler emitting [`Event::Tick`] every `tick_rate`.
    ///
    /// Ticks follow a fixed schedule; key presses do not delay them.
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::channel();
        let event_tx = tx.clone();

        thread::spawn(move || {
            let mut deadline = Instant::now() + tick_rate;
            loop {
                let timeout = deadline.saturating_duration_since(Instant::now());
                match event::poll(timeout) {
                    Ok(true) => {
                        if let Ok(evt) = event::read() {
                            let event = match evt {
                                CrosstermEvent::Key(key) => Event::Key(key),
                                CrosstermEvent::Resize(w, h) => Event::Resize(w, h),
                                _ => continue,
                            };
                            if event_tx.send(event).is_err() {
                                break;
                            }
                        }
                    }
                    Ok(false) => {}
                    // No usable terminal input; keep the tick schedule alive.
                    Err(_) => thread::sleep(timeout),
                }
                if Instant::now() >= deadline {
                    deadline += tick_rate;
                    if event_tx.send(Event::Tick).is_err() {
                        break;
                    }
                }
            }
        });

        Self { rx, tx }
    }

    /// Returns a sender for posting events from other threads.
    pub fn sender(&self) -> Sender<Event> {
        self.tx.clone()
    }

    /// Receives the next event, blocking until one is available.
    pub fn next(&self) -> Result<Event, mpsc::RecvError> {
        self.rx.recv()
    }
}
