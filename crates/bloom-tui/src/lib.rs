//! bloom-tui - Terminal UI for Bloom
//!
//! Draws the visual tree composed by `bloom-app` with ratatui, converts
//! crossterm key events into `InputKey` values and runs the event loop.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

// Re-export main entry points
pub use runner::{run, run_with_loader};
