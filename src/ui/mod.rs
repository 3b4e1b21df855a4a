//! User interface
//!
//! Terminal UI using ratatui. Everything here reads domain state; mutations
//! go through [`crate::tracker::Router::dispatch`].

pub mod app;
pub mod input;
pub mod screens;
pub mod theme;
pub mod widgets;

pub use app::App;
