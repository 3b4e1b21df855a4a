//! Main UI application
//!
//! Owns presentation-only state (cursor, input mode, confetti) and forwards
//! everything else to the [`Router`].

use std::time::Duration;

use anyhow::Result;
use crossterm::event::KeyEvent;
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::{
    layout::{Constraint, Layout, Margin},
    widgets::Clear,
    Frame,
};

use crate::config::FocusConfig;
use crate::effects::{CelebrationSink, ConfettiLayer};
use crate::screens::RitualStage;
use crate::tracker::{Router, Screen, Tab};
use crate::ui::input::{map_key, map_paste, Command, DailyRow, InputMode, ScreenContext};
use crate::ui::screens::{self, daily::daily_rows};
use crate::ui::widgets::TabBar;

pub struct App {
    mode: InputMode,
    /// Selected row on the Today screen
    daily_cursor: usize,
    confetti: ConfettiLayer,
    /// Tab seen on the last input, to notice remounts
    last_tab: Tab,
}

impl App {
    pub fn new(config: &FocusConfig) -> Self {
        let confetti = match config.seed {
            Some(seed) => ConfettiLayer::with_rng(StdRng::seed_from_u64(seed)),
            None => ConfettiLayer::new(),
        };
        Self {
            mode: InputMode::Normal,
            daily_cursor: 0,
            confetti,
            last_tab: Tab::default(),
        }
    }

    pub fn mode(&self) -> InputMode {
        self.mode
    }

    pub fn daily_cursor(&self) -> usize {
        self.daily_cursor
    }

    pub fn confetti(&self) -> &ConfettiLayer {
        &self.confetti
    }

    fn context(&self, router: &Router) -> ScreenContext {
        match router.screen() {
            Screen::Today(daily) => ScreenContext::Today {
                row: daily_rows(daily).into_iter().nth(self.daily_cursor),
            },
            Screen::Vision(_) => ScreenContext::Vision,
            Screen::Ritual(ritual) => ScreenContext::Ritual { stage: ritual.stage() },
            Screen::Profile(_) => ScreenContext::Profile,
        }
    }

    /// Handle a key press. Returns true when the app should quit.
    pub fn handle_input(&mut self, key: KeyEvent, router: &mut Router) -> Result<bool> {
        let context = self.context(router);
        match map_key(key, self.mode, &context) {
            Command::Quit => return Ok(true),
            Command::Dispatch(action) => {
                router.dispatch(action);
            }
            Command::MoveCursor(delta) => {
                self.daily_cursor = self.daily_cursor.saturating_add_signed(delta as isize);
            }
            Command::BeginEditing => self.mode = InputMode::Editing,
            Command::EndEditing => self.mode = InputMode::Normal,
            Command::None => {}
        }
        self.sync(router);
        Ok(false)
    }

    /// Handle bracketed-paste text for the field being edited
    pub fn handle_paste(&mut self, text: &str, router: &mut Router) {
        let context = self.context(router);
        for action in map_paste(text, self.mode, &context) {
            router.dispatch(action);
        }
        self.sync(router);
    }

    /// Keep cursor and mode valid for whatever is mounted now
    fn sync(&mut self, router: &Router) {
        if router.active_tab() != self.last_tab {
            self.last_tab = router.active_tab();
            self.daily_cursor = 0;
            self.mode = InputMode::Normal;
        }

        let can_edit = match router.screen() {
            Screen::Today(daily) => {
                let rows = daily_rows(daily);
                self.daily_cursor = self.daily_cursor.min(rows.len().saturating_sub(1));
                matches!(
                    rows.get(self.daily_cursor),
                    Some(DailyRow::TimeTracker { submitted: false })
                )
            }
            Screen::Ritual(ritual) => {
                matches!(ritual.stage(), RitualStage::Collecting | RitualStage::Planning)
            }
            _ => false,
        };
        if !can_edit && self.mode == InputMode::Editing {
            log::debug!("Leaving edit mode");
            self.mode = InputMode::Normal;
        }
    }

    /// Advance animations and collect celebrations from the router
    pub fn update(&mut self, delta: Duration, router: &mut Router) {
        for celebration in router.drain_celebrations() {
            self.confetti.celebrate(&celebration);
        }
        self.confetti.update(delta);
    }

    pub fn render(&self, frame: &mut Frame, router: &Router) {
        frame.render_widget(Clear, frame.area());

        let [body, tabs] =
            Layout::vertical([Constraint::Min(10), Constraint::Length(2)]).areas(frame.area());
        let body = body.inner(Margin::new(1, 0));
        let editing = self.mode == InputMode::Editing;

        match router.screen() {
            Screen::Today(daily) => screens::daily::render(frame, body, daily, self.daily_cursor, editing),
            Screen::Vision(vision) => screens::vision::render(frame, body, vision),
            Screen::Ritual(ritual) => screens::ritual::render(frame, body, ritual, editing),
            Screen::Profile(profile) => screens::profile::render(frame, body, profile),
        }

        frame.render_widget(TabBar::new(router.active_tab()), tabs);
        frame.render_widget(&self.confetti, frame.area());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tracker::Clock;
    use chrono::NaiveDate;
    use crossterm::event::{KeyCode, KeyModifiers};
    use ratatui::{backend::TestBackend, Terminal};

    fn setup() -> (App, Router) {
        let config = FocusConfig { seed: Some(5), ..FocusConfig::default() };
        let clock: Clock = Box::new(|| {
            NaiveDate::from_ymd_opt(2026, 1, 28).unwrap().and_hms_opt(10, 0, 0).unwrap()
        });
        let router = Router::with_parts(config.clone(), StdRng::seed_from_u64(5), clock);
        (App::new(&config), router)
    }

    fn press(app: &mut App, router: &mut Router, code: KeyCode) -> bool {
        app.handle_input(KeyEvent::new(code, KeyModifiers::NONE), router).unwrap()
    }

    fn type_text(app: &mut App, router: &mut Router, text: &str) {
        for c in text.chars() {
            press(app, router, KeyCode::Char(c));
        }
    }

    fn screen_text(app: &App, router: &Router) -> String {
        let mut terminal = Terminal::new(TestBackend::new(120, 48)).unwrap();
        terminal.draw(|frame| app.render(frame, router)).unwrap();
        terminal.backend().buffer().content().iter().map(|c| c.symbol()).collect()
    }

    #[test]
    fn test_quit_keys() {
        let (mut app, mut router) = setup();
        assert!(press(&mut app, &mut router, KeyCode::Char('q')));
        let ctrl_q = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::CONTROL);
        assert!(app.handle_input(ctrl_q, &mut router).unwrap());
    }

    #[test]
    fn test_cursor_clamped_to_rows() {
        let (mut app, mut router) = setup();
        press(&mut app, &mut router, KeyCode::Up);
        assert_eq!(app.daily_cursor(), 0);
        for _ in 0..10 {
            press(&mut app, &mut router, KeyCode::Down);
        }
        assert_eq!(app.daily_cursor(), 3);
    }

    #[test]
    fn test_toggle_habit_feeds_confetti() {
        let (mut app, mut router) = setup();
        press(&mut app, &mut router, KeyCode::Char(' '));
        app.update(Duration::from_millis(16), &mut router);
        assert!(app.confetti().is_active());
    }

    #[test]
    fn test_time_entry_leaves_edit_mode_on_submit() {
        let (mut app, mut router) = setup();
        for _ in 0..3 {
            press(&mut app, &mut router, KeyCode::Down);
        }
        press(&mut app, &mut router, KeyCode::Enter);
        assert_eq!(app.mode(), InputMode::Editing);

        // 'q' is ignored as a digit rather than quitting
        assert!(!press(&mut app, &mut router, KeyCode::Char('q')));
        type_text(&mut app, &mut router, "2");
        press(&mut app, &mut router, KeyCode::Enter);
        assert_eq!(app.mode(), InputMode::Normal);
        match router.screen() {
            Screen::Today(daily) => assert!(daily.tracker().is_submitted()),
            _ => panic!("expected today screen"),
        }
    }

    #[test]
    fn test_paste_into_time_field() {
        let (mut app, mut router) = setup();
        for _ in 0..3 {
            press(&mut app, &mut router, KeyCode::Down);
        }
        // Ignored until the field is being edited
        app.handle_paste("2", &mut router);
        press(&mut app, &mut router, KeyCode::Enter);
        app.handle_paste("99999999999999999999", &mut router);
        match router.screen() {
            Screen::Today(daily) => assert_eq!(daily.tracker().hours(), 24),
            _ => panic!("expected today screen"),
        }
    }

    #[test]
    fn test_ritual_note_and_pact() {
        let (mut app, mut router) = setup();
        press(&mut app, &mut router, KeyCode::Char('3'));
        assert_eq!(router.active_tab(), Tab::Ritual);

        press(&mut app, &mut router, KeyCode::Char('e'));
        type_text(&mut app, &mut router, "quiet evening");
        press(&mut app, &mut router, KeyCode::Enter);
        press(&mut app, &mut router, KeyCode::Esc);
        assert_eq!(app.mode(), InputMode::Normal);

        press(&mut app, &mut router, KeyCode::Char('m'));
        press(&mut app, &mut router, KeyCode::Enter);
        press(&mut app, &mut router, KeyCode::Char(' '));
        press(&mut app, &mut router, KeyCode::Enter);
        press(&mut app, &mut router, KeyCode::Char('e'));
        type_text(&mut app, &mut router, "walks");
        press(&mut app, &mut router, KeyCode::Enter);

        match router.screen() {
            Screen::Ritual(ritual) => {
                assert_eq!(ritual.stage(), RitualStage::Signed);
                assert_eq!(ritual.feedback().len(), 3);
            }
            _ => panic!("expected ritual screen"),
        }
        assert_eq!(app.mode(), InputMode::Normal);
        app.update(Duration::from_millis(16), &mut router);
        assert!(app.confetti().is_active());
    }

    #[test]
    fn test_tab_change_resets_cursor() {
        let (mut app, mut router) = setup();
        press(&mut app, &mut router, KeyCode::Down);
        press(&mut app, &mut router, KeyCode::Tab);
        press(&mut app, &mut router, KeyCode::BackTab);
        assert_eq!(router.active_tab(), Tab::Today);
        assert_eq!(app.daily_cursor(), 0);
    }

    #[test]
    fn test_renders_every_tab() {
        let (mut app, mut router) = setup();
        assert!(screen_text(&app, &router).contains("FOCUS OF THE DAY"));

        press(&mut app, &mut router, KeyCode::Char('2'));
        assert!(screen_text(&app, &router).contains("Your control panel"));
        press(&mut app, &mut router, KeyCode::Char('c'));
        assert!(screen_text(&app, &router).contains("Financial health"));

        press(&mut app, &mut router, KeyCode::Char('3'));
        assert!(screen_text(&app, &router).contains("Quarterly meeting in 45 days"));

        press(&mut app, &mut router, KeyCode::Char('4'));
        assert!(screen_text(&app, &router).contains("Sign out"));
    }
}
