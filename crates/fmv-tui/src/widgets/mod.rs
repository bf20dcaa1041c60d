//! Ratatui widgets for the fmv TUI.

pub mod command_bar;
pub mod header;
pub mod help;
pub mod query_bar;
pub mod verse_panel;
