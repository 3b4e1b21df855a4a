//! Bottom navigation bar

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::tracker::Tab;
use crate::ui::theme;

fn tab_glyph(tab: Tab) -> &'static str {
    match tab {
        Tab::Today => "⌂",
        Tab::Vision => "◎",
        Tab::Ritual => "⚭",
        Tab::Profile => "☺",
    }
}

pub struct TabBar {
    active: Tab,
}

impl TabBar {
    pub fn new(active: Tab) -> Self {
        Self { active }
    }
}

impl Widget for TabBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = Vec::new();
        for (i, tab) in Tab::ALL.iter().enumerate() {
            let style = if *tab == self.active {
                Style::default().fg(theme::PRIMARY_MUTED).bg(theme::SELECTED_BG).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme::TEXT_MUTED)
            };
            spans.push(Span::styled(
                format!(" {} {} {} ", i + 1, tab_glyph(*tab), tab.label()),
                style,
            ));
            spans.push(Span::raw("   "));
        }
        spans.pop();

        Paragraph::new(Line::from(spans))
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::TOP)
                    .border_style(Style::default().fg(theme::BORDER)),
            )
            .render(area, buf);
    }
}
