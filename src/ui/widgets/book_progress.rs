//! Reading progress card

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::habits::BookProgress;
use crate::ui::theme;

use super::ProgressBar;

pub struct BookProgressCard<'a> {
    book: &'a BookProgress,
}

impl<'a> BookProgressCard<'a> {
    pub fn new(book: &'a BookProgress) -> Self {
        Self { book }
    }
}

impl Widget for BookProgressCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::BORDER))
            .title(" Reading ");
        let inner = block.inner(area);
        block.render(area, buf);

        let bar_width = inner.width.saturating_sub(2);
        let slots: Vec<Span> = (0..self.book.books_goal)
            .map(|i| {
                let color = if i < self.book.books_read { theme::SUCCESS } else { theme::TRACK };
                Span::styled("▬ ", Style::default().fg(color))
            })
            .collect();

        let lines = vec![
            Line::from(Span::styled("Current read", Style::default().fg(theme::TEXT_MUTED))),
            Line::from(Span::styled(
                self.book.title.clone(),
                Style::default().fg(theme::TEXT).add_modifier(Modifier::BOLD),
            )),
            Line::from(vec![
                Span::styled(
                    format!("Page {}/{}", self.book.current_page, self.book.total_pages),
                    Style::default().fg(theme::TEXT_MUTED),
                ),
                Span::styled(
                    format!("  {}%", self.book.page_percent()),
                    Style::default().fg(theme::TEXT_MUTED),
                ),
            ]),
            ProgressBar::new(self.book.page_percent()).line(bar_width),
            Line::from(""),
            Line::from(vec![
                Span::styled("Yearly goal  ", Style::default().fg(theme::TEXT_MUTED)),
                Span::styled(
                    format!("{}/{} books", self.book.books_read, self.book.books_goal),
                    Style::default().fg(theme::TEXT),
                ),
            ]),
            Line::from(slots),
        ];
        Paragraph::new(lines).render(inner, buf);
    }
}
