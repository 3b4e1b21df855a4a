//! Tracker module - tab routing and action dispatch

mod router;
mod tab;
mod action;

pub use router::{Router, Screen, Clock, system_clock};
pub use tab::Tab;
pub use action::Action;
