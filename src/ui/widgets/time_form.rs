//! Screen-time form
//!
//! Shows the two input fields until submitted, then a read-only confirmation.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::habits::{TimeField, TimeTracker};
use crate::ui::theme;

pub struct TimeTrackerForm<'a> {
    tracker: &'a TimeTracker,
    question: &'a str,
    selected: bool,
    editing: bool,
}

impl<'a> TimeTrackerForm<'a> {
    pub fn new(tracker: &'a TimeTracker, question: &'a str) -> Self {
        Self {
            tracker,
            question,
            selected: false,
            editing: false,
        }
    }

    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    pub fn editing(mut self, editing: bool) -> Self {
        self.editing = editing;
        self
    }

    fn field(&self, field: TimeField, value: u32, label: &'static str) -> Vec<Span<'static>> {
        let focused = self.editing && self.tracker.focus() == field;
        let style = if focused {
            Style::default().fg(theme::TEXT).bg(theme::PRIMARY).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme::TEXT).bg(theme::SELECTED_BG)
        };
        vec![
            Span::styled(format!(" {:>2} ", value), style),
            Span::styled(format!(" {}", label), Style::default().fg(theme::TEXT_MUTED)),
        ]
    }
}

impl Widget for TimeTrackerForm<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border = if self.selected { theme::WARNING } else { theme::BORDER };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border))
            .title(" Behaviour ");

        let lines = match self.tracker.entry() {
            Some(entry) => {
                let (color, verdict) = if entry.is_under_goal() {
                    (theme::SUCCESS, "Within goal! 🎉")
                } else {
                    (theme::WARNING, "Over goal")
                };
                vec![
                    Line::from(vec![
                        Span::styled("✓ ", Style::default().fg(color).add_modifier(Modifier::BOLD)),
                        Span::styled(
                            format!("{}h {}min registered", entry.hours, entry.minutes),
                            Style::default().fg(theme::TEXT),
                        ),
                    ]),
                    Line::from(Span::styled(verdict, Style::default().fg(color))),
                ]
            }
            None => {
                let mut fields = self.field(TimeField::Hours, self.tracker.hours(), "hours");
                fields.push(Span::styled("  :  ", Style::default().fg(theme::TEXT_MUTED)));
                fields.extend(self.field(TimeField::Minutes, self.tracker.minutes(), "minutes"));
                let hint = if self.editing {
                    "[0-9] type  [←/→] field  [+/-] step  [Enter] register  [Esc] done"
                } else {
                    "[Enter] edit"
                };
                vec![
                    Line::from(Span::styled(
                        format!("📱 {}", self.question),
                        Style::default().fg(theme::TEXT),
                    )),
                    Line::from(fields),
                    Line::from(Span::styled(hint, Style::default().fg(theme::TEXT_FAINT))),
                ]
            }
        };

        Paragraph::new(lines).block(block).render(area, buf);
    }
}
