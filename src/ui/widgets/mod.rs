//! UI widgets

pub mod progress;
pub mod habit_row;
pub mod streak_calendar;
pub mod book_progress;
pub mod time_form;
pub mod goal_card;
pub mod quarter_header;
pub mod tab_bar;

pub use progress::{ProgressRing, ProgressBar, ring_glyph};
pub use habit_row::HabitRow;
pub use streak_calendar::StreakCalendar;
pub use book_progress::BookProgressCard;
pub use time_form::TimeTrackerForm;
pub use goal_card::CoupleGoalCard;
pub use quarter_header::QuarterHeaderWidget;
pub use tab_bar::TabBar;
