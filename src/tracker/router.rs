//! Root router
//!
//! Owns the active tab and the one mounted screen. Switching tabs drops the
//! previous screen; the next one is rebuilt from scratch.

use chrono::{Local, NaiveDateTime};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::FocusConfig;
use crate::effects::Celebration;
use crate::habits::TimeTracker;
use crate::screens::{DailyScreen, ProfileScreen, RitualScreen, VisionScreen};

use super::{Action, Tab};

/// Source of the current local time
pub type Clock = Box<dyn Fn() -> NaiveDateTime>;

/// Wall clock in local time
pub fn system_clock() -> Clock {
    Box::new(|| Local::now().naive_local())
}

/// The mounted screen and its state
#[derive(Debug, Clone)]
pub enum Screen {
    Today(DailyScreen),
    Vision(VisionScreen),
    Ritual(RitualScreen),
    Profile(ProfileScreen),
}

impl Screen {
    pub fn tab(&self) -> Tab {
        match self {
            Screen::Today(_) => Tab::Today,
            Screen::Vision(_) => Tab::Vision,
            Screen::Ritual(_) => Tab::Ritual,
            Screen::Profile(_) => Tab::Profile,
        }
    }
}

/// Apply an edit and report whether the form changed
fn edit_tracker(tracker: &mut TimeTracker, edit: impl FnOnce(&mut TimeTracker)) -> bool {
    let before = tracker.clone();
    edit(tracker);
    *tracker != before
}

pub struct Router {
    config: FocusConfig,
    screen: Screen,
    rng: StdRng,
    clock: Clock,
    /// Celebrations waiting for the presentation layer
    celebrations: Vec<Celebration>,
}

impl Router {
    /// Create a router on the Today tab using the wall clock
    pub fn new(config: FocusConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_parts(config, rng, system_clock())
    }

    /// Create a router with an explicit RNG and clock
    pub fn with_parts(config: FocusConfig, mut rng: StdRng, clock: Clock) -> Self {
        let screen = Self::mount(Tab::default(), &config, &mut rng, &clock);
        Self {
            config,
            screen,
            rng,
            clock,
            celebrations: Vec::new(),
        }
    }

    fn mount(tab: Tab, config: &FocusConfig, rng: &mut StdRng, clock: &Clock) -> Screen {
        match tab {
            Tab::Today => Screen::Today(DailyScreen::new(config, clock(), rng)),
            Tab::Vision => Screen::Vision(VisionScreen::new()),
            Tab::Ritual => Screen::Ritual(RitualScreen::new()),
            Tab::Profile => Screen::Profile(ProfileScreen::new(config)),
        }
    }

    pub fn config(&self) -> &FocusConfig {
        &self.config
    }

    pub fn active_tab(&self) -> Tab {
        self.screen.tab()
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    /// Switch tabs. Re-selecting the active tab keeps its state.
    pub fn select_tab(&mut self, tab: Tab) -> bool {
        if tab == self.active_tab() {
            return false;
        }
        log::info!("Tab {} -> {}", self.active_tab().label(), tab.label());
        self.screen = Self::mount(tab, &self.config, &mut self.rng, &self.clock);
        true
    }

    pub fn next_tab(&mut self) -> bool {
        self.select_tab(self.active_tab().next())
    }

    pub fn previous_tab(&mut self) -> bool {
        self.select_tab(self.active_tab().previous())
    }

    /// Take all celebrations emitted since the last call
    pub fn drain_celebrations(&mut self) -> Vec<Celebration> {
        std::mem::take(&mut self.celebrations)
    }

    fn celebrate(&mut self, celebration: Option<Celebration>) -> bool {
        match celebration {
            Some(c) => {
                log::info!("Celebration: {:?}", c.kind);
                self.celebrations.push(c);
                true
            }
            None => false,
        }
    }

    /// Apply an action. Returns whether anything changed.
    pub fn dispatch(&mut self, action: Action) -> bool {
        match action {
            Action::SelectTab(tab) => return self.select_tab(tab),
            Action::NextTab => return self.next_tab(),
            Action::PreviousTab => return self.previous_tab(),
            _ => {}
        }

        let today = (self.clock)().date();
        match &mut self.screen {
            Screen::Today(daily) => match action {
                Action::ToggleHabit { list, id } => {
                    let before = daily.list(list).completed_count();
                    let celebration = daily.toggle(list, &id);
                    let changed = daily.list(list).completed_count() != before;
                    self.celebrate(celebration);
                    changed
                }
                Action::TimeDigit(d) => edit_tracker(daily.tracker_mut(), |t| t.push_digit(d)),
                Action::TimeBackspace => edit_tracker(daily.tracker_mut(), |t| t.pop_digit()),
                Action::TimeAdjust(delta) => edit_tracker(daily.tracker_mut(), |t| t.adjust(delta)),
                Action::TimeSwitchField => edit_tracker(daily.tracker_mut(), |t| t.switch_focus()),
                Action::TimePaste(text) => edit_tracker(daily.tracker_mut(), |t| t.paste(&text)),
                Action::TimeSubmit => daily.tracker_mut().submit().is_some(),
                _ => false,
            },
            Screen::Vision(vision) => match action {
                Action::SelectView(view) => {
                    let changed = vision.view() != view;
                    vision.select_view(view);
                    changed
                }
                Action::ToggleView => {
                    let before = vision.view();
                    vision.toggle_view();
                    vision.view() != before
                }
                _ => false,
            },
            Screen::Ritual(ritual) => match action {
                Action::EditDraft(edit) => ritual.edit_draft(edit),
                Action::SaveFeedback => ritual.save_feedback(today),
                Action::StartMeeting => ritual.start_meeting(),
                Action::RevealCard => ritual.reveal(),
                Action::Advance => ritual.advance(),
                Action::EditPlan(edit) => ritual.edit_plan(edit),
                Action::AcceptPact => {
                    let celebration = ritual.accept_pact();
                    self.celebrate(celebration)
                }
                Action::ResetRitual => ritual.reset(),
                _ => false,
            },
            Screen::Profile(_) => false,
        }
    }
}
