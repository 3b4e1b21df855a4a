//! Progress ring and bar widgets
//!
//! Both take an already-clamped percentage (see `habits::display_percent`).

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

use crate::ui::theme;

/// Quarter-filled circle for a percentage
pub fn ring_glyph(percent: u8) -> &'static str {
    match percent {
        0 => "○",
        1..=37 => "◔",
        38..=62 => "◑",
        63..=99 => "◕",
        _ => "●",
    }
}

/// Compact ring: glyph plus optional label
pub struct ProgressRing {
    percent: u8,
    color: Color,
    show_label: bool,
}

impl ProgressRing {
    pub fn new(percent: u8) -> Self {
        Self {
            percent: percent.min(100),
            color: theme::PRIMARY,
            show_label: true,
        }
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn show_label(mut self, show: bool) -> Self {
        self.show_label = show;
        self
    }

    pub fn line(&self) -> Line<'static> {
        let mut spans = vec![Span::styled(
            ring_glyph(self.percent),
            Style::default().fg(self.color).add_modifier(Modifier::BOLD),
        )];
        if self.show_label {
            spans.push(Span::styled(
                format!(" {}%", self.percent),
                Style::default().fg(theme::TEXT).add_modifier(Modifier::BOLD),
            ));
        }
        Line::from(spans)
    }
}

impl Widget for ProgressRing {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }
        buf.set_line(area.x, area.y, &self.line(), area.width);
    }
}

/// Horizontal bar filled to a percentage
pub struct ProgressBar {
    percent: u8,
    fill: Color,
    track: Color,
}

impl ProgressBar {
    pub fn new(percent: u8) -> Self {
        Self {
            percent: percent.min(100),
            fill: theme::PRIMARY,
            track: theme::TRACK,
        }
    }

    pub fn fill(mut self, color: Color) -> Self {
        self.fill = color;
        self
    }

    /// Number of filled cells out of `width`
    pub fn filled_cells(&self, width: u16) -> u16 {
        (u32::from(width) * u32::from(self.percent) / 100) as u16
    }

    pub fn line(&self, width: u16) -> Line<'static> {
        let filled = self.filled_cells(width);
        Line::from(vec![
            Span::styled("█".repeat(filled as usize), Style::default().fg(self.fill)),
            Span::styled(
                "░".repeat(width.saturating_sub(filled) as usize),
                Style::default().fg(self.track),
            ),
        ])
    }
}

impl Widget for ProgressBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }
        buf.set_line(area.x, area.y, &self.line(area.width), area.width);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ring_glyph_steps() {
        assert_eq!(ring_glyph(0), "○");
        assert_eq!(ring_glyph(25), "◔");
        assert_eq!(ring_glyph(50), "◑");
        assert_eq!(ring_glyph(75), "◕");
        assert_eq!(ring_glyph(100), "●");
    }

    #[test]
    fn test_bar_fill() {
        assert_eq!(ProgressBar::new(50).filled_cells(20), 10);
        assert_eq!(ProgressBar::new(100).filled_cells(7), 7);
        assert_eq!(ProgressBar::new(0).filled_cells(7), 0);
    }
}
