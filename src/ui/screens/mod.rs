//! Per-screen renderers

pub mod daily;
pub mod vision;
pub mod ritual;
pub mod profile;

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use super::theme;

/// Section heading with a coloured marker and an optional right-hand note
pub(crate) fn section_title(title: &str, marker: ratatui::style::Color, note: Option<String>) -> Line<'static> {
    let mut spans = vec![
        Span::styled("● ", Style::default().fg(marker)),
        Span::styled(
            title.to_uppercase(),
            Style::default().fg(theme::TEXT_MUTED).add_modifier(Modifier::BOLD),
        ),
    ];
    if let Some(note) = note {
        spans.push(Span::styled(format!("  {}", note), Style::default().fg(theme::TEXT_MUTED)));
    }
    Line::from(spans)
}

/// Dimmed key hint line
pub(crate) fn hint(text: &str) -> Line<'static> {
    Line::from(Span::styled(text.to_string(), Style::default().fg(theme::TEXT_FAINT)))
}
