//! Quarterly couple's ritual
//!
//! A forward-only state machine:
//! collecting -> reviewing -> revealing -> planning -> signed -> collecting.
//!
//! Every operation returns whether it had an effect; calling one in the wrong
//! stage, or with a blank required text, does nothing.

use chrono::NaiveDate;

use crate::effects::Celebration;

/// Stage of the ritual
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RitualStage {
    /// Collecting feedback between meetings
    #[default]
    Collecting,
    /// Meeting step 1: quarter summary
    Reviewing,
    /// Meeting step 2: partner feedback card
    Revealing,
    /// Meeting step 3: action plan
    Planning,
    /// Pact accepted
    Signed,
}

impl RitualStage {
    pub fn name(&self) -> &'static str {
        match self {
            RitualStage::Collecting => "collecting",
            RitualStage::Reviewing => "reviewing",
            RitualStage::Revealing => "revealing",
            RitualStage::Planning => "planning",
            RitualStage::Signed => "signed",
        }
    }

    pub fn in_meeting(&self) -> bool {
        !matches!(self, RitualStage::Collecting)
    }
}

/// Tone of a summary row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Success,
    Warning,
    Neutral,
}

/// A line of the quarter summary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SummaryRow {
    pub label: &'static str,
    pub value: &'static str,
    pub tone: Tone,
}

pub const QUARTER_SUMMARY: &[SummaryRow] = &[
    SummaryRow { label: "SQL/Python", value: "80% of days", tone: Tone::Success },
    SummaryRow { label: "Books read", value: "1/3 of goal", tone: Tone::Warning },
    SummaryRow { label: "French", value: "65% of days", tone: Tone::Success },
    SummaryRow { label: "Phone use", value: "Avg 2h45m/day", tone: Tone::Neutral },
];

/// Partner feedback shown on the reveal card
pub const PARTNER_STRENGTHS: &str =
    "Very present with the kids on weekends. Kept studying consistently despite a busy routine.";
pub const PARTNER_IMPROVEMENTS: &str =
    "Less phone time during meals. More proactive with household chores.";

/// A private note saved for the next meeting
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedbackEntry {
    pub id: u64,
    /// dd/mm
    pub date: String,
    pub text: String,
}

/// An edit applied to a text buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextEdit {
    Insert(char),
    Backspace,
    Clear,
}

impl TextEdit {
    pub fn apply(self, buffer: &mut String) {
        match self {
            TextEdit::Insert(c) => buffer.push(c),
            TextEdit::Backspace => {
                buffer.pop();
            }
            TextEdit::Clear => buffer.clear(),
        }
    }
}

fn seeded_feedback() -> Vec<FeedbackEntry> {
    vec![
        FeedbackEntry {
            id: 1,
            date: "15/01".to_string(),
            text: "Edu did great looking after the kids on Saturday!".to_string(),
        },
        FeedbackEntry {
            id: 2,
            date: "22/01".to_string(),
            text: "Felt there was too much phone at dinner this week.".to_string(),
        },
    ]
}

/// State of the ritual screen
#[derive(Debug, Clone)]
pub struct RitualScreen {
    stage: RitualStage,
    feedback: Vec<FeedbackEntry>,
    next_feedback_id: u64,
    draft: String,
    revealed: bool,
    action_plan: String,
}

impl RitualScreen {
    pub fn new() -> Self {
        let feedback = seeded_feedback();
        let next_feedback_id = feedback.iter().map(|f| f.id).max().unwrap_or(0) + 1;
        Self {
            stage: RitualStage::Collecting,
            feedback,
            next_feedback_id,
            draft: String::new(),
            revealed: false,
            action_plan: String::new(),
        }
    }

    pub fn stage(&self) -> RitualStage {
        self.stage
    }

    pub fn feedback(&self) -> &[FeedbackEntry] {
        &self.feedback
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    pub fn action_plan(&self) -> &str {
        &self.action_plan
    }

    /// Header subtitle for the current stage
    pub fn status_line(&self) -> &'static str {
        if self.stage.in_meeting() {
            "Meeting mode active"
        } else {
            "Quarterly meeting in 45 days"
        }
    }

    fn transition(&mut self, to: RitualStage) {
        log::info!("Ritual {} -> {}", self.stage.name(), to.name());
        self.stage = to;
    }

    /// Edit the feedback draft. Only while collecting.
    pub fn edit_draft(&mut self, edit: TextEdit) -> bool {
        if self.stage != RitualStage::Collecting {
            return false;
        }
        edit.apply(&mut self.draft);
        true
    }

    pub fn can_save_feedback(&self) -> bool {
        self.stage == RitualStage::Collecting && !self.draft.trim().is_empty()
    }

    /// Store the draft as a new entry dated `today` and clear it
    pub fn save_feedback(&mut self, today: NaiveDate) -> bool {
        if !self.can_save_feedback() {
            return false;
        }
        let entry = FeedbackEntry {
            id: self.next_feedback_id,
            date: today.format("%d/%m").to_string(),
            text: self.draft.trim().to_string(),
        };
        self.next_feedback_id += 1;
        log::info!("Saved feedback #{}", entry.id);
        self.feedback.push(entry);
        self.draft.clear();
        true
    }

    pub fn start_meeting(&mut self) -> bool {
        if self.stage != RitualStage::Collecting {
            return false;
        }
        self.transition(RitualStage::Reviewing);
        true
    }

    /// Flip the feedback card. One-way until the cycle restarts.
    pub fn reveal(&mut self) -> bool {
        if self.stage != RitualStage::Revealing || self.revealed {
            return false;
        }
        log::debug!("Feedback card revealed");
        self.revealed = true;
        true
    }

    pub fn can_advance(&self) -> bool {
        match self.stage {
            RitualStage::Reviewing => true,
            RitualStage::Revealing => self.revealed,
            _ => false,
        }
    }

    /// Move to the next meeting step
    pub fn advance(&mut self) -> bool {
        if !self.can_advance() {
            return false;
        }
        let next = match self.stage {
            RitualStage::Reviewing => RitualStage::Revealing,
            _ => RitualStage::Planning,
        };
        self.transition(next);
        true
    }

    /// Edit the action plan. Only while planning.
    pub fn edit_plan(&mut self, edit: TextEdit) -> bool {
        if self.stage != RitualStage::Planning {
            return false;
        }
        edit.apply(&mut self.action_plan);
        true
    }

    /// Replace the action plan text. Only while planning.
    pub fn set_action_plan(&mut self, text: &str) -> bool {
        if self.stage != RitualStage::Planning {
            return false;
        }
        self.action_plan = text.to_string();
        true
    }

    pub fn can_accept_pact(&self) -> bool {
        self.stage == RitualStage::Planning && !self.action_plan.trim().is_empty()
    }

    /// Sign the pact. The celebration is emitted after the stage changes.
    pub fn accept_pact(&mut self) -> Option<Celebration> {
        if !self.can_accept_pact() {
            return None;
        }
        self.transition(RitualStage::Signed);
        Some(Celebration::pact_signed())
    }

    /// Start a new cycle. Saved feedback is kept.
    pub fn reset(&mut self) -> bool {
        if self.stage != RitualStage::Signed {
            return false;
        }
        self.transition(RitualStage::Collecting);
        self.revealed = false;
        self.action_plan.clear();
        true
    }
}

impl Default for RitualScreen {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 2, 3).unwrap()
    }

    fn type_text(ritual: &mut RitualScreen, text: &str) {
        for c in text.chars() {
            ritual.edit_draft(TextEdit::Insert(c));
        }
    }

    #[test]
    fn test_full_cycle() {
        let mut ritual = RitualScreen::new();
        assert!(ritual.start_meeting());
        assert!(ritual.advance());
        assert!(ritual.reveal());
        assert!(ritual.advance());
        assert!(ritual.set_action_plan("x"));
        assert_eq!(ritual.accept_pact(), Some(Celebration::pact_signed()));
        assert_eq!(ritual.stage(), RitualStage::Signed);

        assert!(ritual.reset());
        assert_eq!(ritual.stage(), RitualStage::Collecting);
        assert!(!ritual.is_revealed());
        assert_eq!(ritual.action_plan(), "");
    }

    #[test]
    fn test_reset_keeps_feedback() {
        let mut ritual = RitualScreen::new();
        type_text(&mut ritual, "thanks for dinner");
        ritual.save_feedback(today());
        ritual.start_meeting();
        ritual.advance();
        ritual.reveal();
        ritual.advance();
        ritual.set_action_plan("phones away at dinner");
        ritual.accept_pact();
        ritual.reset();
        assert_eq!(ritual.feedback().len(), 3);
    }

    #[test]
    fn test_reveal_required_before_planning() {
        let mut ritual = RitualScreen::new();
        ritual.start_meeting();
        ritual.advance();
        assert!(!ritual.advance());
        assert_eq!(ritual.stage(), RitualStage::Revealing);
        assert!(ritual.reveal());
        assert!(!ritual.reveal());
        assert!(ritual.is_revealed());
    }

    #[test]
    fn test_blank_plan_blocks_pact() {
        let mut ritual = RitualScreen::new();
        ritual.start_meeting();
        ritual.advance();
        ritual.reveal();
        ritual.advance();
        assert!(ritual.accept_pact().is_none());
        ritual.set_action_plan("   \n\t");
        assert!(!ritual.can_accept_pact());
        assert!(ritual.accept_pact().is_none());
        assert_eq!(ritual.stage(), RitualStage::Planning);
        ritual.edit_plan(TextEdit::Insert('y'));
        assert!(ritual.can_accept_pact());
    }

    #[test]
    fn test_no_backward_or_skipping_transitions() {
        let mut ritual = RitualScreen::new();
        assert!(!ritual.advance());
        assert!(!ritual.reveal());
        assert!(!ritual.reset());
        assert!(!ritual.set_action_plan("skip"));
        assert!(ritual.accept_pact().is_none());
        assert_eq!(ritual.stage(), RitualStage::Collecting);

        ritual.start_meeting();
        assert!(!ritual.start_meeting());
        assert!(!ritual.edit_draft(TextEdit::Insert('a')));
        assert!(!ritual.reset());
        assert_eq!(ritual.stage(), RitualStage::Reviewing);
    }

    #[test]
    fn test_blank_feedback_rejected() {
        let mut ritual = RitualScreen::new();
        let before = ritual.feedback().len();
        assert!(!ritual.save_feedback(today()));
        type_text(&mut ritual, "   ");
        assert!(!ritual.can_save_feedback());
        assert!(!ritual.save_feedback(today()));
        assert_eq!(ritual.feedback().len(), before);
    }

    #[test]
    fn test_feedback_saved_trimmed() {
        let mut ritual = RitualScreen::new();
        let before = ritual.feedback().len();
        type_text(&mut ritual, "  ok ");
        assert!(ritual.save_feedback(today()));
        assert_eq!(ritual.feedback().len(), before + 1);
        let entry = ritual.feedback().last().unwrap();
        assert_eq!(entry.text, "ok");
        assert_eq!(entry.date, "03/02");
        assert_eq!(ritual.draft(), "");
    }

    #[test]
    fn test_feedback_ids_unique() {
        let mut ritual = RitualScreen::new();
        for text in ["a", "b", "c"] {
            type_text(&mut ritual, text);
            ritual.save_feedback(today());
        }
        let mut ids: Vec<u64> = ritual.feedback().iter().map(|f| f.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), ritual.feedback().len());
    }

    #[test]
    fn test_draft_editing() {
        let mut ritual = RitualScreen::new();
        type_text(&mut ritual, "hey");
        ritual.edit_draft(TextEdit::Backspace);
        assert_eq!(ritual.draft(), "he");
        ritual.edit_draft(TextEdit::Clear);
        assert_eq!(ritual.draft(), "");
    }

    #[test]
    fn test_status_line() {
        let mut ritual = RitualScreen::new();
        assert_eq!(ritual.status_line(), "Quarterly meeting in 45 days");
        ritual.start_meeting();
        assert_eq!(ritual.status_line(), "Meeting mode active");
    }
}
