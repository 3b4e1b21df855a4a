//! Vision screen rendering

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::screens::vision::{CoupleDashboard, IndividualDashboard, Trend};
use crate::screens::{ProjectStatus, VisionScreen, VisionView};
use crate::ui::theme;
use crate::ui::widgets::{CoupleGoalCard, ProgressBar, ProgressRing};

use super::hint;

const BAR_GLYPHS: [&str; 8] = ["▁", "▂", "▃", "▄", "▅", "▆", "▇", "█"];

fn card(title: &str) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::BORDER))
        .title(format!(" {} ", title))
}

fn status_style(status: ProjectStatus) -> Style {
    match status {
        ProjectStatus::Todo => Style::default().fg(theme::TEXT_MUTED),
        ProjectStatus::InProgress => Style::default().fg(theme::WARNING),
        ProjectStatus::Done => Style::default().fg(theme::SUCCESS),
    }
}

/// Single-row bar chart of trend values
fn trend_line(trend: &Trend) -> Line<'static> {
    let spans: Vec<Span> = trend
        .bars()
        .into_iter()
        .map(|pct| {
            let idx = (usize::from(pct) * (BAR_GLYPHS.len() - 1)) / 100;
            Span::styled(format!("{} ", BAR_GLYPHS[idx]), Style::default().fg(theme::PRIMARY_MUTED))
        })
        .collect();
    Line::from(spans)
}

fn render_switcher(frame: &mut Frame, area: Rect, view: VisionView) {
    let style_for = |v: VisionView| {
        if v == view {
            Style::default().fg(theme::TEXT).bg(theme::SELECTED_BG).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme::TEXT_MUTED)
        }
    };
    let line = Line::from(vec![
        Span::styled("  Me  ", style_for(VisionView::Individual)),
        Span::raw("  "),
        Span::styled("  Couple  ", style_for(VisionView::Couple)),
    ]);
    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}

fn render_individual(frame: &mut Frame, area: Rect, dash: &IndividualDashboard) {
    let [top, bottom] =
        Layout::vertical([Constraint::Length(7), Constraint::Min(6)]).areas(area);
    let [reading_area, projects_area] =
        Layout::horizontal([Constraint::Percentage(40), Constraint::Percentage(60)]).areas(top);
    let [hard_area, soft_area] =
        Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)]).areas(bottom);

    // Reading
    let slots: Vec<Span> = (0..dash.books_goal)
        .map(|i| {
            let color = if i < dash.books_read { theme::SUCCESS } else { theme::TRACK };
            Span::styled("▮", Style::default().fg(color))
        })
        .collect();
    let reading = vec![
        Line::from(vec![
            Span::styled(format!("Goal: {} books/year  ", dash.books_goal), Style::default().fg(theme::TEXT_MUTED)),
        ]),
        ProgressRing::new(dash.reading_percent()).color(theme::SUCCESS).show_label(false).line(),
        Line::from(""),
        Line::from(slots),
    ];
    frame.render_widget(Paragraph::new(reading).block(card("Reading")), reading_area);

    // Projects
    let projects: Vec<Line> = dash
        .projects
        .iter()
        .map(|p| {
            Line::from(vec![
                Span::styled(format!("{:<12}", p.status.label()), status_style(p.status)),
                Span::styled(p.title, Style::default().fg(theme::TEXT)),
                Span::styled("  ›", Style::default().fg(theme::TEXT_FAINT)),
            ])
        })
        .collect();
    frame.render_widget(Paragraph::new(projects).block(card("Projects")), projects_area);

    // Hard skills
    let mut hard = Vec::new();
    for skill in &dash.hard_skills {
        hard.push(ProgressRing::new(skill.percent()).line());
        hard.push(Line::from(vec![
            Span::styled(skill.label, Style::default().fg(theme::TEXT)),
            Span::styled(
                format!("  {}/{} days", skill.days_done, skill.days_total),
                Style::default().fg(theme::TEXT_MUTED),
            ),
        ]));
        hard.push(Line::from(""));
    }
    frame.render_widget(Paragraph::new(hard).block(card("Hard skills")), hard_area);

    // Soft skills
    let mut soft = vec![Line::from(Span::styled("Weekly trend", Style::default().fg(theme::TEXT_MUTED)))];
    for trend in &dash.soft_skills {
        let arrow = if trend.change >= 0 { "↑" } else { "↓" };
        let color = if trend.change >= 0 { theme::SUCCESS } else { theme::DESTRUCTIVE };
        soft.push(Line::from(vec![
            Span::styled(trend.label, Style::default().fg(theme::TEXT)),
            Span::styled(
                format!("  {} {}%", arrow, trend.change.abs()),
                Style::default().fg(color),
            ),
        ]));
        soft.push(trend_line(trend));
    }
    frame.render_widget(Paragraph::new(soft).block(card("Soft skills")), soft_area);
}

fn render_couple(frame: &mut Frame, area: Rect, dash: &CoupleDashboard) {
    let finance_height = dash.finances.len() as u16 * 3 + 2;
    let [finance_area, goal_area, shared_area] = Layout::vertical([
        Constraint::Length(finance_height),
        Constraint::Length(7),
        Constraint::Min(4),
    ])
    .areas(area);

    let block = card("Financial health");
    let inner = block.inner(finance_area);
    frame.render_widget(block, finance_area);
    let mut lines = Vec::new();
    for goal in &dash.finances {
        lines.push(Line::from(vec![
            Span::styled(goal.label, Style::default().fg(theme::TEXT)),
            Span::styled(format!("  {}%", goal.percent()), Style::default().fg(theme::TEXT_MUTED)),
        ]));
        lines.push(ProgressBar::new(goal.percent()).fill(theme::SUCCESS).line(inner.width));
        lines.push(Line::from(""));
    }
    frame.render_widget(Paragraph::new(lines), inner);

    frame.render_widget(CoupleGoalCard::new(&dash.fund, &dash.badges), goal_area);

    let counters: Vec<Span> = dash
        .activities
        .iter()
        .flat_map(|a| {
            [
                Span::styled(
                    format!("{} ", a.count),
                    Style::default().fg(theme::ACCENT).add_modifier(Modifier::BOLD),
                ),
                Span::styled(format!("{}     ", a.label), Style::default().fg(theme::TEXT_MUTED)),
            ]
        })
        .collect();
    frame.render_widget(
        Paragraph::new(Line::from(counters))
            .alignment(Alignment::Center)
            .block(card("Shared activities")),
        shared_area,
    );
}

pub fn render(frame: &mut Frame, area: Rect, vision: &VisionScreen) {
    let [title_area, switch_area, body_area, hint_area] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Length(1),
        Constraint::Min(10),
        Constraint::Length(1),
    ])
    .areas(area);

    frame.render_widget(
        Paragraph::new(vec![
            Line::from(Span::styled(
                "Vision",
                Style::default().fg(theme::TEXT).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled("Your control panel", Style::default().fg(theme::TEXT_MUTED))),
        ]),
        title_area,
    );
    render_switcher(frame, switch_area, vision.view());

    match vision.view() {
        VisionView::Individual => render_individual(frame, body_area, vision.individual()),
        VisionView::Couple => render_couple(frame, body_area, vision.couple()),
    }

    frame.render_widget(Paragraph::new(hint("[←/→] switch view  [i] me  [c] couple")), hint_area);
}
