//! TUI widgets for vmstats.

mod bar;
mod detail;
mod footer;
mod placeholder;
mod sections;
mod sidebar;

pub use detail::render_detail;
pub use footer::footer_lines;
pub use placeholder::{render_error, render_loading, render_no_domains, render_too_small};
pub use sidebar::render_sidebar;
