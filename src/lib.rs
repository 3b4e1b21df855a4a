//! Focus First - a terminal habit and relationship tracker
//!
//! Daily checklists, a personal and shared vision board, and a quarterly
//! couple's ritual, all backed by in-memory data.

pub mod config;
pub mod habits;
pub mod effects;
pub mod screens;
pub mod tracker;
pub mod ui;

// Re-export commonly used types
pub use config::FocusConfig;
pub use tracker::{Action, Router, Tab};
