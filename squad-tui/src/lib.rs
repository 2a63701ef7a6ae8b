//! Squad Builder TUI — terminal front-end for building an eleven-player squad.
//!
//! Two panels plus a picker modal:
//! 1. Team — the squad grid, with per-card delete
//! 2. Help — keyboard shortcuts and the error history
//!
//! The picker browses the roster (name search + dropdown filters), adds a
//! player on pick, and shows their detail card with a confirm action.

pub mod app;
pub mod input;
pub mod logging;
pub mod theme;
pub mod ui;
pub mod worker;

pub use app::AppState;
pub use input::handle_key;

#[cfg(test)]
mod test_helpers;
