//! Progress percentages
//!
//! Every percentage shown on screen goes through [`display_percent`].

/// Round a raw percentage and clamp it into 0..=100 for display
pub fn display_percent(value: f64) -> u8 {
    if value.is_nan() {
        return 0;
    }
    value.round().clamp(0.0, 100.0) as u8
}

/// Percentage of `part` over `whole`, rounded. An empty whole counts as 0%.
pub fn ratio_percent(part: u32, whole: u32) -> u8 {
    if whole == 0 {
        return 0;
    }
    display_percent(f64::from(part) / f64::from(whole) * 100.0)
}

/// Overall daily progress.
///
/// The screen-time check-in counts as one extra item next to the habits.
pub fn daily_progress(completed_habits: usize, total_habits: usize, time_tracked: bool) -> u8 {
    let done = completed_habits.min(total_habits) + usize::from(time_tracked);
    let total = total_habits + 1;
    display_percent(done as f64 / total as f64 * 100.0)
}

/// Reading progress for the current book and the yearly goal
#[derive(Debug, Clone, PartialEq)]
pub struct BookProgress {
    pub title: String,
    pub current_page: u32,
    pub total_pages: u32,
    pub books_read: u32,
    pub books_goal: u32,
}

impl BookProgress {
    pub fn page_percent(&self) -> u8 {
        ratio_percent(self.current_page, self.total_pages)
    }

    pub fn year_percent(&self) -> u8 {
        ratio_percent(self.books_read, self.books_goal)
    }
}
