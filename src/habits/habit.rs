//! Habits and checklists

/// Identifier of a habit, unique within its list
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HabitId(pub String);

impl HabitId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for HabitId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Visual variant of a habit row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HabitVariant {
    /// Personal focus items
    #[default]
    Primary,
    /// Shared couple items
    Accent,
}

/// A daily habit with a binary completed status
#[derive(Debug, Clone, PartialEq)]
pub struct Habit {
    pub id: HabitId,
    pub title: String,
    pub subtitle: Option<String>,
    pub completed: bool,
    pub variant: HabitVariant,
}

impl Habit {
    pub fn new(id: impl Into<String>, title: impl Into<String>, variant: HabitVariant) -> Self {
        Self {
            id: HabitId::new(id),
            title: title.into(),
            subtitle: None,
            completed: false,
            variant,
        }
    }

    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    pub fn completed(mut self, completed: bool) -> Self {
        self.completed = completed;
        self
    }
}

/// Result of toggling a habit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// The habit went from open to done
    Completed(HabitVariant),
    /// The habit went from done back to open
    Reopened,
    /// No habit with that id exists
    NotFound,
}

/// An ordered checklist of habits
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HabitList {
    habits: Vec<Habit>,
}

impl HabitList {
    /// Build a list, keeping only the first habit for any repeated id
    pub fn new(habits: Vec<Habit>) -> Self {
        let mut list = Self::default();
        for habit in habits {
            if list.get(&habit.id).is_some() {
                log::warn!("Dropping habit with duplicate id {:?}", habit.id.as_str());
                continue;
            }
            list.habits.push(habit);
        }
        list
    }

    pub fn habits(&self) -> &[Habit] {
        &self.habits
    }

    pub fn get(&self, id: &HabitId) -> Option<&Habit> {
        self.habits.iter().find(|h| &h.id == id)
    }

    pub fn len(&self) -> usize {
        self.habits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.habits.is_empty()
    }

    pub fn completed_count(&self) -> usize {
        self.habits.iter().filter(|h| h.completed).count()
    }

    /// Flip the completed flag of the matching habit. Missing ids are ignored.
    pub fn toggle(&mut self, id: &HabitId) -> ToggleOutcome {
        match self.habits.iter_mut().find(|h| &h.id == id) {
            Some(habit) => {
                habit.completed = !habit.completed;
                if habit.completed {
                    ToggleOutcome::Completed(habit.variant)
                } else {
                    ToggleOutcome::Reopened
                }
            }
            None => ToggleOutcome::NotFound,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> HabitList {
        HabitList::new(vec![
            Habit::new("1", "Study Python/SQL", HabitVariant::Primary).with_subtitle("30min"),
            Habit::new("2", "French", HabitVariant::Primary).completed(true),
        ])
    }

    #[test]
    fn test_toggle_flips_only_matching() {
        let mut list = sample();
        assert_eq!(list.toggle(&"1".into()), ToggleOutcome::Completed(HabitVariant::Primary));
        assert!(list.get(&"1".into()).unwrap().completed);
        assert!(list.get(&"2".into()).unwrap().completed);
        assert_eq!(list.completed_count(), 2);
    }

    #[test]
    fn test_even_toggles_restore() {
        let original = sample();
        let mut list = original.clone();
        for _ in 0..4 {
            list.toggle(&"2".into());
        }
        assert_eq!(list, original);
    }

    #[test]
    fn test_toggle_missing_is_noop() {
        let original = sample();
        let mut list = original.clone();
        assert_eq!(list.toggle(&"42".into()), ToggleOutcome::NotFound);
        assert_eq!(list, original);
    }

    #[test]
    fn test_reopen_reports_reopened() {
        let mut list = sample();
        assert_eq!(list.toggle(&"2".into()), ToggleOutcome::Reopened);
        assert_eq!(list.completed_count(), 0);
    }

    #[test]
    fn test_duplicate_ids_dropped() {
        let list = HabitList::new(vec![
            Habit::new("1", "First", HabitVariant::Primary),
            Habit::new("1", "Second", HabitVariant::Accent),
        ]);
        assert_eq!(list.len(), 1);
        assert_eq!(list.habits()[0].title, "First");
    }
}
