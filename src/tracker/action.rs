//! User actions routed to the active screen

use crate::habits::HabitId;
use crate::screens::{HabitListKind, TextEdit, VisionView};

use super::Tab;

/// Everything the user can do. Actions meant for a screen that is not
/// mounted are ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    SelectTab(Tab),
    NextTab,
    PreviousTab,

    // Today
    ToggleHabit { list: HabitListKind, id: HabitId },
    TimeDigit(u32),
    TimeBackspace,
    TimeAdjust(i64),
    TimeSwitchField,
    /// Text pasted into the focused time field
    TimePaste(String),
    TimeSubmit,

    // Vision
    SelectView(VisionView),
    ToggleView,

    // Ritual
    EditDraft(TextEdit),
    SaveFeedback,
    StartMeeting,
    RevealCard,
    Advance,
    EditPlan(TextEdit),
    AcceptPact,
    ResetRitual,
}
