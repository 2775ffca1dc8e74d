//! Interactive TUI interface
//!
//! Terminal user interface for the Wordle solver built on ratatui/crossterm.

pub mod app;
pub mod rendering;

pub use app::{App, run_tui};
