//! Profile screen rendering

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::screens::ProfileScreen;
use crate::ui::theme;

use super::hint;

pub fn render(frame: &mut Frame, area: Rect, profile: &ProfileScreen) {
    let menu_height = profile.menu().len() as u16 * 2 + 2;
    let [card_area, stats_area, menu_area, footer_area, hint_area] = Layout::vertical([
        Constraint::Length(5),
        Constraint::Length(4),
        Constraint::Length(menu_height),
        Constraint::Min(2),
        Constraint::Length(1),
    ])
    .areas(area);

    let initial = profile.user_name().chars().next().unwrap_or('?').to_uppercase().to_string();
    let card = vec![
        Line::from(Span::styled(
            format!(" {} ", initial),
            Style::default().fg(theme::TEXT).bg(theme::PRIMARY).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            profile.user_name().to_string(),
            Style::default().fg(theme::TEXT).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(profile.member_since(), Style::default().fg(theme::TEXT_MUTED))),
    ];
    frame.render_widget(
        Paragraph::new(card).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme::BORDER)),
        ),
        card_area,
    );

    let stats = profile.stats();
    let columns = Layout::horizontal(vec![Constraint::Ratio(1, stats.len().max(1) as u32); stats.len()])
        .split(stats_area);
    for (stat, col) in stats.iter().zip(columns.iter()) {
        let lines = vec![
            Line::from(Span::styled(
                stat.value,
                Style::default().fg(theme::PRIMARY_MUTED).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(stat.label, Style::default().fg(theme::TEXT_MUTED))),
        ];
        frame.render_widget(
            Paragraph::new(lines).alignment(Alignment::Center).block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(theme::BORDER)),
            ),
            *col,
        );
    }

    let mut menu = Vec::new();
    for entry in profile.menu() {
        menu.push(Line::from(vec![
            Span::styled(format!(" {}  ", entry.glyph), Style::default().fg(theme::PRIMARY_MUTED)),
            Span::styled(entry.label, Style::default().fg(theme::TEXT)),
            Span::styled("  ›", Style::default().fg(theme::TEXT_FAINT)),
        ]));
        menu.push(Line::from(Span::styled(
            format!("    {}", entry.description),
            Style::default().fg(theme::TEXT_MUTED),
        )));
    }
    frame.render_widget(
        Paragraph::new(menu).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme::BORDER)),
        ),
        menu_area,
    );

    let footer = vec![
        Line::from(Span::styled(
            profile.sign_out_label(),
            Style::default().fg(theme::DESTRUCTIVE),
        )),
        Line::from(Span::styled(profile.version(), Style::default().fg(theme::TEXT_FAINT))),
    ];
    frame.render_widget(Paragraph::new(footer).alignment(Alignment::Center), footer_area);

    frame.render_widget(Paragraph::new(hint("[Tab] next tab  [1-4] jump  [q] quit")), hint_area);
}
