//! Terminal User Interface module
//!
//! This module provides the interactive expense tracker using ratatui: an
//! expense table with filter, sort and show-all controls, and modal dialogs
//! for adding, editing and deleting expenses.

pub mod app;
pub mod event;
pub mod handler;
pub mod terminal;

// Views
pub mod views;

// Widgets
pub mod widgets;

// Dialogs
pub mod dialogs;

// Layout
pub mod layout;

pub use app::App;
pub use terminal::run_tui;
