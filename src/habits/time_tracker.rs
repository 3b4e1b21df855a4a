//! Screen-time check-in
//!
//! A two-field duration form. Inputs are clamped at entry; once submitted the
//! entry is frozen for the rest of the session.

/// Upper bound for the hours field
pub const MAX_HOURS: u32 = 24;
/// Upper bound for the minutes field
pub const MAX_MINUTES: u32 = 59;

/// Which field of the form has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeField {
    #[default]
    Hours,
    Minutes,
}

impl TimeField {
    pub fn other(self) -> Self {
        match self {
            TimeField::Hours => TimeField::Minutes,
            TimeField::Minutes => TimeField::Hours,
        }
    }

    fn max(self) -> u32 {
        match self {
            TimeField::Hours => MAX_HOURS,
            TimeField::Minutes => MAX_MINUTES,
        }
    }
}

/// A submitted check-in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeEntry {
    pub hours: u32,
    pub minutes: u32,
    pub goal_hours: u32,
}

impl TimeEntry {
    pub fn total_minutes(&self) -> u32 {
        self.hours * 60 + self.minutes
    }

    pub fn is_under_goal(&self) -> bool {
        self.total_minutes() <= self.goal_hours * 60
    }
}

/// Form state for the screen-time question
#[derive(Debug, Clone, PartialEq)]
pub struct TimeTracker {
    hours: u32,
    minutes: u32,
    goal_hours: u32,
    focus: TimeField,
    entry: Option<TimeEntry>,
}

fn clamp_field(value: i64, field: TimeField) -> u32 {
    value.clamp(0, i64::from(field.max())) as u32
}

/// Read an optional sign and the leading digits, like a numeric input does.
/// No digits reads as 0; a digit run too long for `i64` saturates.
fn parse_leading_int(text: &str) -> i64 {
    let text = text.trim_start();
    let (negative, rest) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text.strip_prefix('+').unwrap_or(text)),
    };
    let end = rest.find(|c: char| !c.is_ascii_digit()).unwrap_or(rest.len());
    let digits = &rest[..end];
    if digits.is_empty() {
        return 0;
    }
    let magnitude = digits.parse::<i64>().unwrap_or(i64::MAX);
    if negative {
        -magnitude
    } else {
        magnitude
    }
}

impl TimeTracker {
    pub fn new(goal_hours: u32) -> Self {
        Self {
            hours: 0,
            minutes: 0,
            goal_hours: goal_hours.min(MAX_HOURS),
            focus: TimeField::Hours,
            entry: None,
        }
    }

    pub fn hours(&self) -> u32 {
        self.hours
    }

    pub fn minutes(&self) -> u32 {
        self.minutes
    }

    pub fn goal_hours(&self) -> u32 {
        self.goal_hours
    }

    pub fn focus(&self) -> TimeField {
        self.focus
    }

    pub fn entry(&self) -> Option<&TimeEntry> {
        self.entry.as_ref()
    }

    pub fn is_submitted(&self) -> bool {
        self.entry.is_some()
    }

    /// Whether the values currently typed fit within the goal
    pub fn is_under_goal(&self) -> bool {
        self.hours * 60 + self.minutes <= self.goal_hours * 60
    }

    pub fn switch_focus(&mut self) {
        if !self.is_submitted() {
            self.focus = self.focus.other();
        }
    }

    fn field_value(&self, field: TimeField) -> u32 {
        match field {
            TimeField::Hours => self.hours,
            TimeField::Minutes => self.minutes,
        }
    }

    /// Store a value, clamped into the field's range
    pub fn set_field(&mut self, field: TimeField, value: i64) {
        if self.is_submitted() {
            return;
        }
        let value = clamp_field(value, field);
        match field {
            TimeField::Hours => self.hours = value,
            TimeField::Minutes => self.minutes = value,
        }
    }

    pub fn set_hours(&mut self, hours: i64) {
        self.set_field(TimeField::Hours, hours);
    }

    pub fn set_minutes(&mut self, minutes: i64) {
        self.set_field(TimeField::Minutes, minutes);
    }

    /// Parse free text like a numeric input, then clamp
    pub fn set_field_text(&mut self, field: TimeField, text: &str) {
        self.set_field(field, parse_leading_int(text));
    }

    /// Replace the focused field with pasted text
    pub fn paste(&mut self, text: &str) {
        self.set_field_text(self.focus, text);
    }

    /// Append a typed digit to the focused field
    pub fn push_digit(&mut self, digit: u32) {
        if digit > 9 {
            return;
        }
        let field = self.focus;
        let current = i64::from(self.field_value(field));
        self.set_field(field, current * 10 + i64::from(digit));
    }

    /// Drop the last digit of the focused field
    pub fn pop_digit(&mut self) {
        let field = self.focus;
        let current = i64::from(self.field_value(field));
        self.set_field(field, current / 10);
    }

    /// Step the focused field up or down by `delta`
    pub fn adjust(&mut self, delta: i64) {
        let field = self.focus;
        let current = i64::from(self.field_value(field));
        self.set_field(field, current + delta);
    }

    /// Freeze the current values. Returns `None` if already submitted.
    pub fn submit(&mut self) -> Option<TimeEntry> {
        if self.is_submitted() {
            return None;
        }
        let entry = TimeEntry {
            hours: self.hours,
            minutes: self.minutes,
            goal_hours: self.goal_hours,
        };
        log::info!(
            "Screen time registered: {}h {}min (under goal: {})",
            entry.hours,
            entry.minutes,
            entry.is_under_goal()
        );
        self.entry = Some(entry);
        Some(entry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_under_goal() {
        let mut tracker = TimeTracker::new(3);
        tracker.set_hours(2);
        tracker.set_minutes(30);
        let entry = tracker.submit().unwrap();
        assert_eq!(entry.total_minutes(), 150);
        assert!(entry.is_under_goal());
    }

    #[test]
    fn test_over_goal() {
        let mut tracker = TimeTracker::new(3);
        tracker.set_hours(4);
        tracker.set_minutes(0);
        assert!(!tracker.submit().unwrap().is_under_goal());
    }

    #[test]
    fn test_exact_goal_counts_as_under() {
        let mut tracker = TimeTracker::new(3);
        tracker.set_hours(3);
        assert!(tracker.is_under_goal());
    }

    #[test]
    fn test_clamping() {
        let mut tracker = TimeTracker::new(3);
        tracker.set_hours(30);
        tracker.set_minutes(-5);
        assert_eq!(tracker.hours(), 24);
        assert_eq!(tracker.minutes(), 0);
        tracker.set_minutes(75);
        assert_eq!(tracker.minutes(), 59);
    }

    #[test]
    fn test_text_entry() {
        let mut tracker = TimeTracker::new(3);
        tracker.set_field_text(TimeField::Hours, "7");
        assert_eq!(tracker.hours(), 7);
        tracker.set_field_text(TimeField::Hours, "abc");
        assert_eq!(tracker.hours(), 0);
        tracker.set_field_text(TimeField::Minutes, "-12");
        assert_eq!(tracker.minutes(), 0);
    }

    #[test]
    fn test_text_entry_reads_leading_digits() {
        let mut tracker = TimeTracker::new(3);
        tracker.set_field_text(TimeField::Hours, "12abc");
        assert_eq!(tracker.hours(), 12);
        tracker.set_field_text(TimeField::Minutes, " +45 min");
        assert_eq!(tracker.minutes(), 45);
    }

    #[test]
    fn test_text_entry_overflow_clamps_to_max() {
        let mut tracker = TimeTracker::new(3);
        tracker.set_field_text(TimeField::Hours, "99999999999999999999");
        assert_eq!(tracker.hours(), 24);
        tracker.set_field_text(TimeField::Minutes, "-99999999999999999999");
        assert_eq!(tracker.minutes(), 0);
    }

    #[test]
    fn test_paste_targets_focused_field() {
        let mut tracker = TimeTracker::new(3);
        tracker.switch_focus();
        tracker.paste("30");
        assert_eq!((tracker.hours(), tracker.minutes()), (0, 30));
    }

    #[test]
    fn test_typing_digits_clamps() {
        let mut tracker = TimeTracker::new(3);
        tracker.push_digit(2);
        tracker.push_digit(5);
        assert_eq!(tracker.hours(), 24);
        tracker.pop_digit();
        assert_eq!(tracker.hours(), 2);
        tracker.switch_focus();
        tracker.push_digit(4);
        tracker.push_digit(5);
        assert_eq!(tracker.minutes(), 45);
        tracker.adjust(30);
        assert_eq!(tracker.minutes(), 59);
    }

    #[test]
    fn test_submission_is_final() {
        let mut tracker = TimeTracker::new(3);
        tracker.set_hours(1);
        assert!(tracker.submit().is_some());
        assert!(tracker.submit().is_none());
        tracker.set_hours(10);
        tracker.switch_focus();
        assert_eq!(tracker.hours(), 1);
        assert_eq!(tracker.focus(), TimeField::Hours);
        assert_eq!(tracker.entry().unwrap().hours, 1);
    }
}
