//! Habit tracking primitives
//!
//! Checklists, streaks, progress math and the screen-time tracker.

pub mod habit;
pub mod streak;
pub mod progress;
pub mod time_tracker;

pub use habit::{Habit, HabitId, HabitList, HabitVariant, ToggleOutcome};
pub use streak::{DayStatus, StreakDay, generate_streak_days, current_streak, MAX_STREAK_WINDOW_DAYS, STREAK_COMPLETION_CHANCE};
pub use progress::{display_percent, ratio_percent, daily_progress, BookProgress};
pub use time_tracker::{TimeTracker, TimeEntry, TimeField, MAX_HOURS, MAX_MINUTES};
