//! Streak calendar strip

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use crate::habits::{current_streak, DayStatus, StreakDay};
use crate::ui::theme;

pub struct StreakCalendar<'a> {
    days: &'a [StreakDay],
    title: &'a str,
}

impl<'a> StreakCalendar<'a> {
    pub fn new(days: &'a [StreakDay], title: &'a str) -> Self {
        Self { days, title }
    }
}

fn dot(status: DayStatus) -> Span<'static> {
    match status {
        DayStatus::Completed => Span::styled("● ", Style::default().fg(theme::SUCCESS)),
        DayStatus::Missed => Span::styled("● ", Style::default().fg(theme::DESTRUCTIVE)),
        DayStatus::Pending => Span::styled("◌ ", Style::default().fg(theme::TEXT_MUTED)),
    }
}

impl Widget for StreakCalendar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let streak = current_streak(self.days);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::BORDER))
            .title(format!(" {} ", self.title))
            .title_bottom(
                Line::from(Span::styled(
                    format!(" 🔥 {} days ", streak),
                    Style::default().fg(theme::SUCCESS).add_modifier(Modifier::BOLD),
                ))
                .right_aligned(),
            );

        let dots: Vec<Span> = self.days.iter().map(|d| dot(d.status)).collect();
        let range = match (self.days.first(), self.days.last()) {
            (Some(first), Some(last)) => format!("{} – {}", first.label(), last.label()),
            _ => String::new(),
        };

        Paragraph::new(vec![
            Line::from(dots),
            Line::from(Span::styled(range, Style::default().fg(theme::TEXT_FAINT))),
        ])
        .wrap(Wrap { trim: false })
        .block(block)
        .render(area, buf);
    }
}
