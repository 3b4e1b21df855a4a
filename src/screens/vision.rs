//! "Vision" dashboard
//!
//! Two read-only dashboards, one per sub-tab. Nothing here mutates except the
//! selected view.

use crate::habits::{display_percent, ratio_percent};

/// Sub-tab of the vision screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VisionView {
    #[default]
    Individual,
    Couple,
}

impl VisionView {
    pub fn other(self) -> Self {
        match self {
            VisionView::Individual => VisionView::Couple,
            VisionView::Couple => VisionView::Individual,
        }
    }
}

/// Project status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectStatus {
    Todo,
    InProgress,
    Done,
}

impl ProjectStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ProjectStatus::Todo => "To do",
            ProjectStatus::InProgress => "In progress",
            ProjectStatus::Done => "Done",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Project {
    pub id: u32,
    pub title: &'static str,
    pub status: ProjectStatus,
}

/// Badge artwork category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeIcon {
    Stadium,
    Moto,
    Travel,
}

impl BadgeIcon {
    pub fn glyph(&self) -> &'static str {
        match self {
            BadgeIcon::Stadium => "⌂",
            BadgeIcon::Moto => "⚙",
            BadgeIcon::Travel => "✈",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Badge {
    pub id: u32,
    pub icon: BadgeIcon,
    pub label: &'static str,
    pub unlocked: bool,
}

/// A skill tracked as days practised out of a period
#[derive(Debug, Clone, PartialEq)]
pub struct SkillRing {
    pub label: &'static str,
    pub progress: f64,
    pub days_done: u32,
    pub days_total: u32,
}

impl SkillRing {
    pub fn percent(&self) -> u8 {
        display_percent(self.progress)
    }
}

/// Weekly trend for a soft skill
#[derive(Debug, Clone, PartialEq)]
pub struct Trend {
    pub label: &'static str,
    pub change: i32,
    pub values: &'static [f64],
}

impl Trend {
    /// Bar heights clamped for display
    pub fn bars(&self) -> Vec<u8> {
        self.values.iter().map(|v| display_percent(*v)).collect()
    }
}

/// A progress bar with a label
#[derive(Debug, Clone, PartialEq)]
pub struct GoalBar {
    pub label: &'static str,
    pub progress: f64,
}

impl GoalBar {
    pub fn percent(&self) -> u8 {
        display_percent(self.progress)
    }
}

/// Shared counter, e.g. workouts done together
#[derive(Debug, Clone, PartialEq)]
pub struct SharedActivity {
    pub label: &'static str,
    pub count: u32,
}

/// Personal dashboard
#[derive(Debug, Clone, PartialEq)]
pub struct IndividualDashboard {
    pub books_read: u32,
    pub books_goal: u32,
    pub projects: Vec<Project>,
    pub hard_skills: Vec<SkillRing>,
    pub soft_skills: Vec<Trend>,
}

impl IndividualDashboard {
    pub fn reading_percent(&self) -> u8 {
        ratio_percent(self.books_read, self.books_goal)
    }
}

/// Couple dashboard
#[derive(Debug, Clone, PartialEq)]
pub struct CoupleDashboard {
    pub finances: Vec<GoalBar>,
    pub fund: GoalBar,
    pub badges: Vec<Badge>,
    pub activities: Vec<SharedActivity>,
}

fn individual_dashboard() -> IndividualDashboard {
    IndividualDashboard {
        books_read: 2,
        books_goal: 12,
        projects: vec![
            Project { id: 1, title: "Get project X off the ground", status: ProjectStatus::InProgress },
            Project { id: 2, title: "AWS certification", status: ProjectStatus::Todo },
            Project { id: 3, title: "Leadership course", status: ProjectStatus::Done },
        ],
        hard_skills: vec![
            SkillRing { label: "SQL/Python", progress: 80.0, days_done: 24, days_total: 30 },
            SkillRing { label: "French", progress: 65.0, days_done: 20, days_total: 30 },
        ],
        soft_skills: vec![Trend {
            label: "Patience",
            change: 15,
            values: &[60.0, 65.0, 55.0, 70.0, 75.0, 80.0, 85.0],
        }],
    }
}

fn couple_dashboard() -> CoupleDashboard {
    CoupleDashboard {
        finances: vec![
            GoalBar { label: "Clear credit record", progress: 75.0 },
            GoalBar { label: "Emergency fund", progress: 45.0 },
        ],
        fund: GoalBar { label: "Motorcycle trip fund", progress: 35.0 },
        badges: vec![
            Badge { id: 1, icon: BadgeIcon::Stadium, label: "Arena", unlocked: false },
            Badge { id: 2, icon: BadgeIcon::Moto, label: "Moto trip", unlocked: false },
            Badge { id: 3, icon: BadgeIcon::Travel, label: "International", unlocked: false },
        ],
        activities: vec![
            SharedActivity { label: "Workouts together", count: 12 },
            SharedActivity { label: "Dates", count: 8 },
        ],
    }
}

/// State of the vision screen
#[derive(Debug, Clone)]
pub struct VisionScreen {
    view: VisionView,
    individual: IndividualDashboard,
    couple: CoupleDashboard,
}

impl VisionScreen {
    pub fn new() -> Self {
        Self {
            view: VisionView::default(),
            individual: individual_dashboard(),
            couple: couple_dashboard(),
        }
    }

    pub fn view(&self) -> VisionView {
        self.view
    }

    pub fn select_view(&mut self, view: VisionView) {
        if self.view != view {
            log::debug!("Vision view -> {:?}", view);
            self.view = view;
        }
    }

    pub fn toggle_view(&mut self) {
        self.select_view(self.view.other());
    }

    pub fn individual(&self) -> &IndividualDashboard {
        &self.individual
    }

    pub fn couple(&self) -> &CoupleDashboard {
        &self.couple
    }
}

impl Default for VisionScreen {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_switching() {
        let mut vision = VisionScreen::new();
        assert_eq!(vision.view(), VisionView::Individual);
        vision.toggle_view();
        assert_eq!(vision.view(), VisionView::Couple);
        vision.select_view(VisionView::Couple);
        assert_eq!(vision.view(), VisionView::Couple);
        vision.toggle_view();
        assert_eq!(vision.view(), VisionView::Individual);
    }

    #[test]
    fn test_static_percentages() {
        let vision = VisionScreen::new();
        assert_eq!(vision.individual().reading_percent(), 17);
        assert_eq!(vision.individual().hard_skills[0].percent(), 80);
        assert_eq!(vision.couple().fund.percent(), 35);
        assert!(vision.couple().badges.iter().all(|b| !b.unlocked));
    }

    #[test]
    fn test_out_of_range_values_clamp() {
        let bar = GoalBar { label: "Overfunded", progress: 140.0 };
        assert_eq!(bar.percent(), 100);
        let trend = Trend { label: "Noisy", change: 0, values: &[-10.0, 49.5, 101.0] };
        assert_eq!(trend.bars(), vec![0, 50, 100]);
    }
}
