//! Checklist row for a habit

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::habits::{Habit, HabitVariant};
use crate::ui::theme;

/// One habit: checkbox, title and optional subtitle (two lines tall)
pub struct HabitRow<'a> {
    habit: &'a Habit,
    selected: bool,
}

impl<'a> HabitRow<'a> {
    pub fn new(habit: &'a Habit) -> Self {
        Self { habit, selected: false }
    }

    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    pub fn height(&self) -> u16 {
        if self.habit.subtitle.is_some() { 2 } else { 1 }
    }
}

impl Widget for HabitRow<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let color = match self.habit.variant {
            HabitVariant::Primary => theme::PRIMARY,
            HabitVariant::Accent => theme::ACCENT,
        };

        let (check, check_style) = if self.habit.completed {
            ("[✓] ", Style::default().fg(color).add_modifier(Modifier::BOLD))
        } else {
            ("[ ] ", Style::default().fg(theme::TEXT_MUTED))
        };

        let title_style = if self.habit.completed {
            Style::default().fg(theme::TEXT_MUTED).add_modifier(Modifier::CROSSED_OUT)
        } else {
            Style::default().fg(theme::TEXT)
        };

        let mut title = vec![
            Span::styled(check, check_style),
            Span::styled(self.habit.title.clone(), title_style),
        ];
        if !self.habit.completed {
            title.push(Span::styled(" •", Style::default().fg(color)));
        }

        let mut lines = vec![Line::from(title)];
        if let Some(subtitle) = &self.habit.subtitle {
            lines.push(Line::from(Span::styled(
                format!("    ⏱ {}", subtitle),
                Style::default().fg(theme::TEXT_MUTED),
            )));
        }

        let mut para = Paragraph::new(lines);
        if self.selected {
            para = para.style(Style::default().bg(theme::SELECTED_BG));
        }
        para.render(area, buf);
    }
}
