//! Greeting header with the quarter and overall progress

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::screens::QuarterHeader;
use crate::ui::theme;

use super::ProgressRing;

pub struct QuarterHeaderWidget<'a> {
    header: &'a QuarterHeader,
    progress: u8,
}

impl<'a> QuarterHeaderWidget<'a> {
    pub fn new(header: &'a QuarterHeader, progress: u8) -> Self {
        Self { header, progress }
    }
}

impl Widget for QuarterHeaderWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [text_area, ring_area] =
            Layout::horizontal([Constraint::Min(10), Constraint::Length(8)]).areas(area);

        Paragraph::new(vec![
            Line::from(Span::styled(self.header.subtitle(), Style::default().fg(theme::TEXT_MUTED))),
            Line::from(Span::styled(
                self.header.title(),
                Style::default().fg(theme::TEXT).add_modifier(Modifier::BOLD),
            )),
        ])
        .render(text_area, buf);

        ProgressRing::new(self.progress).render(ring_area, buf);
    }
}
