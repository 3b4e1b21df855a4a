//! "Today" screen
//!
//! Personal and shared checklists, the screen-time check-in, reading progress
//! and the streak calendar.

use chrono::{NaiveDateTime, Timelike};
use rand::Rng;

use crate::config::FocusConfig;
use crate::effects::Celebration;
use crate::habits::{
    current_streak, daily_progress, generate_streak_days, BookProgress, Habit, HabitId,
    HabitList, HabitVariant, StreakDay, TimeTracker, ToggleOutcome,
};

/// Time-of-day greeting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Greeting {
    Morning,
    Afternoon,
    Evening,
}

impl Greeting {
    pub fn from_hour(hour: u32) -> Self {
        match hour {
            0..=11 => Greeting::Morning,
            12..=17 => Greeting::Afternoon,
            _ => Greeting::Evening,
        }
    }

    pub fn text(&self) -> &'static str {
        match self {
            Greeting::Morning => "Good morning",
            Greeting::Afternoon => "Good afternoon",
            Greeting::Evening => "Good evening",
        }
    }
}

/// Header shown above the daily checklist
#[derive(Debug, Clone, PartialEq)]
pub struct QuarterHeader {
    pub quarter: String,
    pub week: u32,
    pub total_weeks: u32,
    pub user_name: String,
    pub greeting: Greeting,
}

impl QuarterHeader {
    pub fn title(&self) -> String {
        format!("{}, {}", self.greeting.text(), self.user_name)
    }

    pub fn subtitle(&self) -> String {
        format!("{} · Week {} of {}", self.quarter, self.week, self.total_weeks)
    }
}

/// Which checklist a habit belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HabitListKind {
    Personal,
    Shared,
}

/// Question asked by the screen-time form
pub const SCREEN_TIME_QUESTION: &str = "How was your phone use today?";
/// Title of the streak calendar
pub const STREAK_TITLE: &str = "SQL/Python streak";

fn personal_habits() -> Vec<Habit> {
    vec![
        Habit::new("1", "Study Python/SQL", HabitVariant::Primary).with_subtitle("30min"),
        Habit::new("2", "French", HabitVariant::Primary)
            .with_subtitle("Duolingo/Class")
            .completed(true),
    ]
}

fn shared_habits() -> Vec<Habit> {
    vec![Habit::new("3", "Gym workout", HabitVariant::Accent).with_subtitle("Together")]
}

fn current_book() -> BookProgress {
    BookProgress {
        title: "Atomic Habits".to_string(),
        current_page: 120,
        total_pages: 300,
        books_read: 2,
        books_goal: 12,
    }
}

/// State of the daily screen
#[derive(Debug, Clone)]
pub struct DailyScreen {
    header: QuarterHeader,
    personal: HabitList,
    shared: HabitList,
    streak_days: Vec<StreakDay>,
    tracker: TimeTracker,
    book: BookProgress,
}

impl DailyScreen {
    /// Build fresh mock state for `now`
    pub fn new<R: Rng + ?Sized>(config: &FocusConfig, now: NaiveDateTime, rng: &mut R) -> Self {
        let streak_days = generate_streak_days(now.date(), config.streak_window_days, rng);
        Self {
            header: QuarterHeader {
                quarter: config.quarter.clone(),
                week: config.week,
                total_weeks: config.total_weeks,
                user_name: config.user_name.clone(),
                greeting: Greeting::from_hour(now.hour()),
            },
            personal: HabitList::new(personal_habits()),
            shared: HabitList::new(shared_habits()),
            streak_days,
            tracker: TimeTracker::new(config.screen_time_goal_hours),
            book: current_book(),
        }
    }

    pub fn header(&self) -> &QuarterHeader {
        &self.header
    }

    pub fn personal(&self) -> &HabitList {
        &self.personal
    }

    pub fn shared(&self) -> &HabitList {
        &self.shared
    }

    pub fn list(&self, kind: HabitListKind) -> &HabitList {
        match kind {
            HabitListKind::Personal => &self.personal,
            HabitListKind::Shared => &self.shared,
        }
    }

    pub fn streak_days(&self) -> &[StreakDay] {
        &self.streak_days
    }

    pub fn current_streak(&self) -> usize {
        current_streak(&self.streak_days)
    }

    pub fn tracker(&self) -> &TimeTracker {
        &self.tracker
    }

    pub fn tracker_mut(&mut self) -> &mut TimeTracker {
        &mut self.tracker
    }

    pub fn book(&self) -> &BookProgress {
        &self.book
    }

    /// Toggle a habit; completing one yields a celebration
    pub fn toggle(&mut self, kind: HabitListKind, id: &HabitId) -> Option<Celebration> {
        let list = match kind {
            HabitListKind::Personal => &mut self.personal,
            HabitListKind::Shared => &mut self.shared,
        };
        match list.toggle(id) {
            ToggleOutcome::Completed(variant) => {
                log::info!("Habit {} completed", id.as_str());
                Some(Celebration::habit_completed(variant))
            }
            ToggleOutcome::Reopened => {
                log::info!("Habit {} reopened", id.as_str());
                None
            }
            ToggleOutcome::NotFound => {
                log::debug!("Ignoring toggle for unknown habit {}", id.as_str());
                None
            }
        }
    }

    pub fn toggle_personal(&mut self, id: &HabitId) -> Option<Celebration> {
        self.toggle(HabitListKind::Personal, id)
    }

    pub fn toggle_shared(&mut self, id: &HabitId) -> Option<Celebration> {
        self.toggle(HabitListKind::Shared, id)
    }

    /// Overall progress for the header ring
    pub fn progress(&self) -> u8 {
        daily_progress(
            self.personal.completed_count() + self.shared.completed_count(),
            self.personal.len() + self.shared.len(),
            self.tracker.is_submitted(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn at(hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 1, 28).unwrap().and_hms_opt(hour, 15, 0).unwrap()
    }

    fn screen() -> DailyScreen {
        let mut rng = StdRng::seed_from_u64(5);
        DailyScreen::new(&FocusConfig::default(), at(9), &mut rng)
    }

    #[test]
    fn test_initial_state() {
        let daily = screen();
        assert_eq!(daily.personal().len(), 2);
        assert_eq!(daily.shared().len(), 1);
        assert_eq!(daily.streak_days().len(), 21);
        // One of three habits done, tracker open: 1/4
        assert_eq!(daily.progress(), 25);
        assert_eq!(daily.header().title(), "Good morning, Edu");
        assert_eq!(daily.header().subtitle(), "Q1 2026 · Week 4 of 12");
    }

    #[test]
    fn test_greeting_boundaries() {
        assert_eq!(Greeting::from_hour(0), Greeting::Morning);
        assert_eq!(Greeting::from_hour(11), Greeting::Morning);
        assert_eq!(Greeting::from_hour(12), Greeting::Afternoon);
        assert_eq!(Greeting::from_hour(17), Greeting::Afternoon);
        assert_eq!(Greeting::from_hour(18), Greeting::Evening);
        assert_eq!(Greeting::from_hour(23), Greeting::Evening);
    }

    #[test]
    fn test_completing_celebrates_with_variant() {
        let mut daily = screen();
        let celebration = daily.toggle_shared(&"3".into()).unwrap();
        assert_eq!(celebration, Celebration::habit_completed(HabitVariant::Accent));
        assert_eq!(daily.progress(), 50);
        assert!(daily.toggle_shared(&"3".into()).is_none());
        assert_eq!(daily.progress(), 25);
    }

    #[test]
    fn test_lists_are_independent() {
        let mut daily = screen();
        // "3" lives in the shared list only
        assert!(daily.toggle_personal(&"3".into()).is_none());
        assert_eq!(daily.shared().completed_count(), 0);
        assert_eq!(daily.personal().completed_count(), 1);
    }

    #[test]
    fn test_progress_reaches_full() {
        let mut daily = screen();
        daily.toggle_personal(&"1".into());
        daily.toggle_shared(&"3".into());
        assert_eq!(daily.progress(), 75);
        daily.tracker_mut().set_hours(2);
        daily.tracker_mut().submit();
        assert_eq!(daily.progress(), 100);
    }

    #[test]
    fn test_goal_from_config() {
        let config = FocusConfig { screen_time_goal_hours: 2, ..FocusConfig::default() };
        let mut rng = StdRng::seed_from_u64(5);
        let daily = DailyScreen::new(&config, at(20), &mut rng);
        assert_eq!(daily.tracker().goal_hours(), 2);
        assert_eq!(daily.header().greeting, Greeting::Evening);
    }
}
