//! Terminal User Interface module
//!
//! A ratatui front end with three screens: the dashboard (highlight cards
//! and transaction history), the monthly summary by category, and the
//! register form.

pub mod app;
pub mod event;
pub mod handler;
pub mod terminal;
pub mod theme;

// Views
pub mod views;

// Widgets
pub mod widgets;

// Layout
pub mod layout;

pub use app::{App, Route};
pub use terminal::run_tui;
