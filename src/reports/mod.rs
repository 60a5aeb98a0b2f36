//! Reports module for gofinances
//!
//! The monthly category summary and the dashboard highlights.

pub mod dashboard;
pub mod resume;

pub use dashboard::{Dashboard, HighlightCard, Highlights, HistoryEntry};
pub use resume::{summarize_month, CategoryTotal, ResumeReport};
