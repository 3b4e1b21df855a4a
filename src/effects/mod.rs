//! Celebration effects
//!
//! Notifications emitted after a state transition commits, and the terminal
//! confetti layer that plays them.

pub mod celebration;
pub mod confetti;

pub use celebration::{Celebration, CelebrationKind, CelebrationSink, Rgb};
pub use confetti::ConfettiLayer;
