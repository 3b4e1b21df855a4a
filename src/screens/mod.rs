//! Screen state
//!
//! Each screen owns its state. It is built when its tab is entered and
//! dropped when the user leaves.

pub mod daily;
pub mod vision;
pub mod ritual;
pub mod profile;

pub use daily::{DailyScreen, QuarterHeader, Greeting, HabitListKind};
pub use vision::{VisionScreen, VisionView, Project, ProjectStatus, Badge, BadgeIcon};
pub use ritual::{RitualScreen, RitualStage, FeedbackEntry, TextEdit};
pub use profile::{ProfileScreen, ProfileStat, MenuEntry};
