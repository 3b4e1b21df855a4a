//! Streak calendar
//!
//! Generates the trailing window of day statuses and counts the current streak.

use chrono::{Duration, NaiveDate};
use rand::Rng;

/// Chance that a past day in the mock window was completed
pub const STREAK_COMPLETION_CHANCE: f64 = 0.8;

/// Largest window the calendar accepts
pub const MAX_STREAK_WINDOW_DAYS: u32 = 366;

/// Outcome of a single day
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayStatus {
    Completed,
    Missed,
    /// Today, still open
    Pending,
}

/// One cell of the streak calendar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreakDay {
    pub date: NaiveDate,
    pub status: DayStatus,
}

impl StreakDay {
    /// Day label as dd/mm/yyyy
    pub fn label(&self) -> String {
        self.date.format("%d/%m/%Y").to_string()
    }
}

/// Generate `window` days ending at `today`, oldest first.
///
/// Today is always pending; every earlier day is completed with
/// [`STREAK_COMPLETION_CHANCE`] and missed otherwise. The window stops early
/// at the start of the calendar.
pub fn generate_streak_days<R: Rng + ?Sized>(
    today: NaiveDate,
    window: u32,
    rng: &mut R,
) -> Vec<StreakDay> {
    let mut days: Vec<StreakDay> = (0..window)
        .map_while(|offset| {
            let date = today.checked_sub_signed(Duration::days(i64::from(offset)))?;
            let status = if offset == 0 {
                DayStatus::Pending
            } else if rng.gen_bool(STREAK_COMPLETION_CHANCE) {
                DayStatus::Completed
            } else {
                DayStatus::Missed
            };
            Some(StreakDay { date, status })
        })
        .collect();
    days.reverse();
    days
}

/// Count completed days from the oldest day forward, stopping at the first miss
pub fn current_streak(days: &[StreakDay]) -> usize {
    days.iter()
        .take_while(|d| d.status != DayStatus::Missed)
        .filter(|d| d.status == DayStatus::Completed)
        .count()
}
