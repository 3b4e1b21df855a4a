//! Ritual screen rendering

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::screens::ritual::{Tone, PARTNER_IMPROVEMENTS, PARTNER_STRENGTHS, QUARTER_SUMMARY};
use crate::screens::{RitualScreen, RitualStage};
use crate::ui::theme;

use super::{hint, section_title};

fn tone_color(tone: Tone) -> Color {
    match tone {
        Tone::Success => theme::SUCCESS,
        Tone::Warning => theme::WARNING,
        Tone::Neutral => theme::TEXT_MUTED,
    }
}

/// Bordered text field with a trailing cursor while editing
fn text_field<'a>(title: &'a str, text: &'a str, placeholder: &'a str, editing: bool) -> Paragraph<'a> {
    let border = if editing { theme::PRIMARY } else { theme::BORDER };
    let mut spans = if text.is_empty() && !editing {
        vec![Span::styled(placeholder, Style::default().fg(theme::TEXT_FAINT))]
    } else {
        vec![Span::styled(text, Style::default().fg(theme::TEXT))]
    };
    if editing {
        spans.push(Span::styled("▏", Style::default().fg(theme::PRIMARY)));
    }
    Paragraph::new(Line::from(spans))
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border))
                .title(format!(" {} ", title)),
        )
}

fn render_collecting(frame: &mut Frame, area: Rect, ritual: &RitualScreen, editing: bool) {
    let [field_area, list_area] =
        Layout::vertical([Constraint::Length(5), Constraint::Min(3)]).areas(area);

    frame.render_widget(
        text_field(
            "Feedback for the next meeting",
            ritual.draft(),
            "Write something you noticed...",
            editing,
        ),
        field_area,
    );

    let mut lines = Vec::new();
    for entry in ritual.feedback().iter().rev() {
        lines.push(Line::from(vec![
            Span::styled(format!("{}  ", entry.date), Style::default().fg(theme::TEXT_FAINT)),
            Span::styled(entry.text.clone(), Style::default().fg(theme::TEXT)),
        ]));
    }
    frame.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: true }).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme::BORDER))
                .title(section_title(
                    "Saved notes",
                    theme::ACCENT,
                    Some(ritual.feedback().len().to_string()),
                )),
        ),
        list_area,
    );
}

fn render_reviewing(frame: &mut Frame, area: Rect) {
    let lines: Vec<Line> = QUARTER_SUMMARY
        .iter()
        .map(|row| {
            Line::from(vec![
                Span::styled(format!("{:<16}", row.label), Style::default().fg(theme::TEXT)),
                Span::styled(row.value, Style::default().fg(tone_color(row.tone))),
            ])
        })
        .collect();
    frame.render_widget(
        Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme::BORDER))
                .title(section_title("Step 1 · Quarter summary", theme::PRIMARY, None)),
        ),
        area,
    );
}

fn render_revealing(frame: &mut Frame, area: Rect, ritual: &RitualScreen) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(if ritual.is_revealed() { theme::ACCENT } else { theme::BORDER }))
        .title(section_title("Step 2 · Partner feedback", theme::ACCENT, None));

    let lines = if ritual.is_revealed() {
        vec![
            Line::from(Span::styled(
                "Strengths",
                Style::default().fg(theme::SUCCESS).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(PARTNER_STRENGTHS, Style::default().fg(theme::TEXT))),
            Line::from(""),
            Line::from(Span::styled(
                "To improve",
                Style::default().fg(theme::WARNING).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(PARTNER_IMPROVEMENTS, Style::default().fg(theme::TEXT))),
        ]
    } else {
        vec![
            Line::from(""),
            Line::from(Span::styled("♥", Style::default().fg(theme::ACCENT))),
            Line::from(Span::styled(
                "Press [Space] to reveal your partner's card",
                Style::default().fg(theme::TEXT_MUTED),
            )),
        ]
    };

    let alignment = if ritual.is_revealed() { Alignment::Left } else { Alignment::Center };
    frame.render_widget(
        Paragraph::new(lines).alignment(alignment).wrap(Wrap { trim: true }).block(block),
        area,
    );
}

fn render_planning(frame: &mut Frame, area: Rect, ritual: &RitualScreen, editing: bool) {
    let [field_area, status_area] =
        Layout::vertical([Constraint::Length(6), Constraint::Length(1)]).areas(area);
    frame.render_widget(
        text_field(
            "Step 3 · Action plan",
            ritual.action_plan(),
            "What will you both commit to?",
            editing,
        ),
        field_area,
    );
    let status = if ritual.can_accept_pact() {
        Span::styled("Ready to sign", Style::default().fg(theme::SUCCESS))
    } else {
        Span::styled("Write a plan to sign the pact", Style::default().fg(theme::TEXT_FAINT))
    };
    frame.render_widget(Paragraph::new(Line::from(status)), status_area);
}

fn render_signed(frame: &mut Frame, area: Rect, ritual: &RitualScreen) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "✔ Pact signed",
            Style::default().fg(theme::SUCCESS).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(ritual.action_plan(), Style::default().fg(theme::TEXT))),
        Line::from(""),
        Line::from(Span::styled("See you next quarter.", Style::default().fg(theme::TEXT_MUTED))),
    ];
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(theme::SUCCESS)),
            ),
        area,
    );
}

fn stage_hint(stage: RitualStage, editing: bool) -> &'static str {
    match (stage, editing) {
        (RitualStage::Collecting, true) => "[Enter] save  [Esc] done  [Ctrl-U] clear",
        (RitualStage::Collecting, false) => "[e] write note  [m] start meeting  [Tab] next tab",
        (RitualStage::Reviewing, _) => "[Enter] next step",
        (RitualStage::Revealing, _) => "[Space] reveal  [Enter] next step",
        (RitualStage::Planning, true) => "[Enter] accept pact  [Esc] done  [Ctrl-U] clear",
        (RitualStage::Planning, false) => "[e] edit plan  [a] accept pact",
        (RitualStage::Signed, _) => "[Enter] start a new cycle",
    }
}

pub fn render(frame: &mut Frame, area: Rect, ritual: &RitualScreen, editing: bool) {
    let [title_area, body_area, hint_area] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Min(8),
        Constraint::Length(1),
    ])
    .areas(area);

    let status_color = if ritual.stage().in_meeting() { theme::ACCENT } else { theme::TEXT_MUTED };
    frame.render_widget(
        Paragraph::new(vec![
            Line::from(Span::styled(
                "Ritual",
                Style::default().fg(theme::TEXT).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(ritual.status_line(), Style::default().fg(status_color))),
        ]),
        title_area,
    );

    match ritual.stage() {
        RitualStage::Collecting => render_collecting(frame, body_area, ritual, editing),
        RitualStage::Reviewing => render_reviewing(frame, body_area),
        RitualStage::Revealing => render_revealing(frame, body_area, ritual),
        RitualStage::Planning => render_planning(frame, body_area, ritual, editing),
        RitualStage::Signed => render_signed(frame, body_area, ritual),
    }

    frame.render_widget(Paragraph::new(hint(stage_hint(ritual.stage(), editing))), hint_area);
}
