//! Couple goal card: fund bar plus badges

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::screens::vision::{Badge, GoalBar};
use crate::ui::theme;

use super::ProgressBar;

pub struct CoupleGoalCard<'a> {
    fund: &'a GoalBar,
    badges: &'a [Badge],
}

impl<'a> CoupleGoalCard<'a> {
    pub fn new(fund: &'a GoalBar, badges: &'a [Badge]) -> Self {
        Self { fund, badges }
    }
}

impl Widget for CoupleGoalCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::ACCENT))
            .title(Span::styled(" ♥ Couple goals ", Style::default().fg(theme::ACCENT)));
        let inner = block.inner(area);
        block.render(area, buf);

        let percent = self.fund.percent();
        let mut badge_line = Vec::new();
        let mut label_line = Vec::new();
        for badge in self.badges {
            let style = if badge.unlocked {
                Style::default().fg(theme::ACCENT).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme::TEXT_FAINT)
            };
            badge_line.push(Span::styled(format!(" [{}] ", badge.icon.glyph()), style));
            label_line.push(Span::styled(
                format!("{} ", badge.label),
                Style::default().fg(theme::TEXT_MUTED),
            ));
        }

        let lines = vec![
            Line::from(vec![
                Span::styled(self.fund.label, Style::default().fg(theme::TEXT_MUTED)),
                Span::styled(format!("  {}%", percent), Style::default().fg(theme::TEXT)),
            ]),
            ProgressBar::new(percent).fill(theme::ACCENT).line(inner.width),
            Line::from(""),
            Line::from(badge_line),
            Line::from(label_line),
        ];
        Paragraph::new(lines).render(inner, buf);
    }
}
