//! Terminal User Interface for vmstats.
//!
//! A single-threaded event loop: terminal input, refresh ticks and
//! finished background collects all arrive as [`Event`]s on one channel
//! and are applied to [`AppState`] in order.

mod app;
mod event;
mod input;
mod render;
mod state;
mod style;
mod widgets;

pub use app::App;
pub use event::{Event, EventHandler};
pub use input::{KeyAction, handle_key};
pub use render::{LayoutPlan, plan_layout, render};
pub use state::{AppState, FleetSummary};
