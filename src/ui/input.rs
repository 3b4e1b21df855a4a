//! Key bindings
//!
//! Maps a key press to a [`Command`] given what is on screen. Pure, so the
//! bindings can be tested without a terminal.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::habits::HabitId;
use crate::screens::{HabitListKind, RitualStage, TextEdit, VisionView};
use crate::tracker::{Action, Tab};

/// Whether keys go to a text field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Normal,
    Editing,
}

/// What the cursor points at on the Today screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DailyRow {
    Habit { list: HabitListKind, id: HabitId },
    TimeTracker { submitted: bool },
}

/// Screen details the bindings depend on
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScreenContext {
    Today { row: Option<DailyRow> },
    Vision,
    Ritual { stage: RitualStage },
    Profile,
}

/// Result of a key press
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Quit,
    Dispatch(Action),
    MoveCursor(i32),
    BeginEditing,
    EndEditing,
    None,
}

/// Translate a key press
pub fn map_key(key: KeyEvent, mode: InputMode, screen: &ScreenContext) -> Command {
    // Global quit shortcut
    if key.code == KeyCode::Char('q') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Command::Quit;
    }

    if mode == InputMode::Editing {
        return map_editing_key(key, screen);
    }

    match key.code {
        KeyCode::Char('q') => return Command::Quit,
        KeyCode::Tab => return Command::Dispatch(Action::NextTab),
        KeyCode::BackTab => return Command::Dispatch(Action::PreviousTab),
        KeyCode::Char(c @ '1'..='4') => {
            let index = c as usize - '1' as usize;
            if let Some(tab) = Tab::from_index(index) {
                return Command::Dispatch(Action::SelectTab(tab));
            }
        }
        _ => {}
    }

    match screen {
        ScreenContext::Today { row } => map_today_key(key, row.as_ref()),
        ScreenContext::Vision => match key.code {
            KeyCode::Left | KeyCode::Right | KeyCode::Char('h') | KeyCode::Char('l') => {
                Command::Dispatch(Action::ToggleView)
            }
            KeyCode::Char('i') => Command::Dispatch(Action::SelectView(VisionView::Individual)),
            KeyCode::Char('c') => Command::Dispatch(Action::SelectView(VisionView::Couple)),
            _ => Command::None,
        },
        ScreenContext::Ritual { stage } => map_ritual_key(key, *stage),
        ScreenContext::Profile => Command::None,
    }
}

fn map_today_key(key: KeyEvent, row: Option<&DailyRow>) -> Command {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => Command::MoveCursor(-1),
        KeyCode::Down | KeyCode::Char('j') => Command::MoveCursor(1),
        KeyCode::Char(' ') | KeyCode::Enter => match row {
            Some(DailyRow::Habit { list, id }) => Command::Dispatch(Action::ToggleHabit {
                list: *list,
                id: id.clone(),
            }),
            Some(DailyRow::TimeTracker { submitted: false }) => Command::BeginEditing,
            _ => Command::None,
        },
        _ => Command::None,
    }
}

fn map_ritual_key(key: KeyEvent, stage: RitualStage) -> Command {
    match stage {
        RitualStage::Collecting => match key.code {
            KeyCode::Enter | KeyCode::Char('e') | KeyCode::Char('i') => Command::BeginEditing,
            KeyCode::Char('m') => Command::Dispatch(Action::StartMeeting),
            _ => Command::None,
        },
        RitualStage::Reviewing => match key.code {
            KeyCode::Enter | KeyCode::Right | KeyCode::Char('n') => Command::Dispatch(Action::Advance),
            _ => Command::None,
        },
        RitualStage::Revealing => match key.code {
            KeyCode::Char(' ') | KeyCode::Char('r') => Command::Dispatch(Action::RevealCard),
            KeyCode::Enter | KeyCode::Right | KeyCode::Char('n') => Command::Dispatch(Action::Advance),
            _ => Command::None,
        },
        RitualStage::Planning => match key.code {
            KeyCode::Enter | KeyCode::Char('e') | KeyCode::Char('i') => Command::BeginEditing,
            KeyCode::Char('a') => Command::Dispatch(Action::AcceptPact),
            _ => Command::None,
        },
        RitualStage::Signed => match key.code {
            KeyCode::Enter | KeyCode::Char('r') => Command::Dispatch(Action::ResetRitual),
            _ => Command::None,
        },
    }
}

fn map_editing_key(key: KeyEvent, screen: &ScreenContext) -> Command {
    if key.code == KeyCode::Esc {
        return Command::EndEditing;
    }
    let plain = !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT);

    match screen {
        ScreenContext::Today { .. } => match key.code {
            KeyCode::Char(c) if plain && c.is_ascii_digit() => {
                Command::Dispatch(Action::TimeDigit(c.to_digit(10).unwrap_or(0)))
            }
            KeyCode::Backspace => Command::Dispatch(Action::TimeBackspace),
            KeyCode::Left | KeyCode::Right | KeyCode::Tab => Command::Dispatch(Action::TimeSwitchField),
            KeyCode::Up | KeyCode::Char('+') => Command::Dispatch(Action::TimeAdjust(1)),
            KeyCode::Down | KeyCode::Char('-') => Command::Dispatch(Action::TimeAdjust(-1)),
            KeyCode::Enter => Command::Dispatch(Action::TimeSubmit),
            _ => Command::None,
        },
        ScreenContext::Ritual { stage: RitualStage::Collecting } => match key.code {
            KeyCode::Enter => Command::Dispatch(Action::SaveFeedback),
            KeyCode::Backspace => Command::Dispatch(Action::EditDraft(TextEdit::Backspace)),
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Command::Dispatch(Action::EditDraft(TextEdit::Clear))
            }
            KeyCode::Char(c) if plain => Command::Dispatch(Action::EditDraft(TextEdit::Insert(c))),
            _ => Command::None,
        },
        ScreenContext::Ritual { stage: RitualStage::Planning } => match key.code {
            KeyCode::Enter => Command::Dispatch(Action::AcceptPact),
            KeyCode::Backspace => Command::Dispatch(Action::EditPlan(TextEdit::Backspace)),
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Command::Dispatch(Action::EditPlan(TextEdit::Clear))
            }
            KeyCode::Char(c) if plain => Command::Dispatch(Action::EditPlan(TextEdit::Insert(c))),
            _ => Command::None,
        },
        _ => Command::EndEditing,
    }
}

/// Translate pasted text. Only accepted while a field is being edited.
pub fn map_paste(text: &str, mode: InputMode, screen: &ScreenContext) -> Vec<Action> {
    if mode != InputMode::Editing {
        return Vec::new();
    }
    let chars = text.chars().filter(|c| !c.is_control());
    match screen {
        ScreenContext::Today { .. } => vec![Action::TimePaste(text.to_string())],
        ScreenContext::Ritual { stage: RitualStage::Collecting } => {
            chars.map(|c| Action::EditDraft(TextEdit::Insert(c))).collect()
        }
        ScreenContext::Ritual { stage: RitualStage::Planning } => {
            chars.map(|c| Action::EditPlan(TextEdit::Insert(c))).collect()
        }
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ritual(stage: RitualStage) -> ScreenContext {
        ScreenContext::Ritual { stage }
    }

    #[test]
    fn test_ctrl_q_quits_while_editing() {
        let key = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::CONTROL);
        assert_eq!(map_key(key, InputMode::Editing, &ritual(RitualStage::Collecting)), Command::Quit);
    }

    #[test]
    fn test_plain_q_is_text_while_editing() {
        assert_eq!(
            map_key(press(KeyCode::Char('q')), InputMode::Editing, &ritual(RitualStage::Collecting)),
            Command::Dispatch(Action::EditDraft(TextEdit::Insert('q')))
        );
        assert_eq!(
            map_key(press(KeyCode::Char('q')), InputMode::Normal, &ScreenContext::Profile),
            Command::Quit
        );
    }

    #[test]
    fn test_number_keys_select_tabs() {
        assert_eq!(
            map_key(press(KeyCode::Char('3')), InputMode::Normal, &ScreenContext::Vision),
            Command::Dispatch(Action::SelectTab(Tab::Ritual))
        );
        assert_eq!(
            map_key(press(KeyCode::BackTab), InputMode::Normal, &ScreenContext::Vision),
            Command::Dispatch(Action::PreviousTab)
        );
    }

    #[test]
    fn test_today_bindings() {
        let on_habit = ScreenContext::Today {
            row: Some(DailyRow::Habit { list: HabitListKind::Shared, id: "3".into() }),
        };
        assert_eq!(
            map_key(press(KeyCode::Char(' ')), InputMode::Normal, &on_habit),
            Command::Dispatch(Action::ToggleHabit { list: HabitListKind::Shared, id: "3".into() })
        );

        let on_tracker = ScreenContext::Today { row: Some(DailyRow::TimeTracker { submitted: false }) };
        assert_eq!(map_key(press(KeyCode::Enter), InputMode::Normal, &on_tracker), Command::BeginEditing);
        assert_eq!(
            map_key(press(KeyCode::Char('7')), InputMode::Editing, &on_tracker),
            Command::Dispatch(Action::TimeDigit(7))
        );

        let submitted = ScreenContext::Today { row: Some(DailyRow::TimeTracker { submitted: true }) };
        assert_eq!(map_key(press(KeyCode::Enter), InputMode::Normal, &submitted), Command::None);
    }

    #[test]
    fn test_ritual_bindings_follow_stage() {
        let m = press(KeyCode::Char('m'));
        assert_eq!(
            map_key(m, InputMode::Normal, &ritual(RitualStage::Collecting)),
            Command::Dispatch(Action::StartMeeting)
        );
        assert_eq!(map_key(m, InputMode::Normal, &ritual(RitualStage::Reviewing)), Command::None);
        assert_eq!(
            map_key(press(KeyCode::Char(' ')), InputMode::Normal, &ritual(RitualStage::Revealing)),
            Command::Dispatch(Action::RevealCard)
        );
        assert_eq!(
            map_key(press(KeyCode::Enter), InputMode::Editing, &ritual(RitualStage::Planning)),
            Command::Dispatch(Action::AcceptPact)
        );
        assert_eq!(
            map_key(press(KeyCode::Char('r')), InputMode::Normal, &ritual(RitualStage::Signed)),
            Command::Dispatch(Action::ResetRitual)
        );
    }

    #[test]
    fn test_modified_chars_not_typed() {
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(map_key(ctrl_c, InputMode::Editing, &ritual(RitualStage::Collecting)), Command::None);
        let alt_x = KeyEvent::new(KeyCode::Char('x'), KeyModifiers::ALT);
        assert_eq!(map_key(alt_x, InputMode::Editing, &ritual(RitualStage::Planning)), Command::None);
        let ctrl_5 = KeyEvent::new(KeyCode::Char('5'), KeyModifiers::CONTROL);
        let on_tracker = ScreenContext::Today { row: Some(DailyRow::TimeTracker { submitted: false }) };
        assert_eq!(map_key(ctrl_5, InputMode::Editing, &on_tracker), Command::None);

        let shifted = KeyEvent::new(KeyCode::Char('A'), KeyModifiers::SHIFT);
        assert_eq!(
            map_key(shifted, InputMode::Editing, &ritual(RitualStage::Collecting)),
            Command::Dispatch(Action::EditDraft(TextEdit::Insert('A')))
        );
    }

    #[test]
    fn test_paste_targets_edited_field() {
        let on_tracker = ScreenContext::Today { row: Some(DailyRow::TimeTracker { submitted: false }) };
        assert_eq!(
            map_paste("2h", InputMode::Editing, &on_tracker),
            vec![Action::TimePaste("2h".to_string())]
        );
        assert_eq!(
            map_paste("a\nb", InputMode::Editing, &ritual(RitualStage::Planning)),
            vec![
                Action::EditPlan(TextEdit::Insert('a')),
                Action::EditPlan(TextEdit::Insert('b')),
            ]
        );
        assert!(map_paste("x", InputMode::Normal, &ritual(RitualStage::Collecting)).is_empty());
        assert!(map_paste("x", InputMode::Editing, &ScreenContext::Vision).is_empty());
    }

    #[test]
    fn test_escape_ends_editing() {
        assert_eq!(
            map_key(press(KeyCode::Esc), InputMode::Editing, &ritual(RitualStage::Planning)),
            Command::EndEditing
        );
    }
}
