//! Today screen rendering

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::Style,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::habits::{Habit, HabitList};
use crate::screens::daily::{SCREEN_TIME_QUESTION, STREAK_TITLE};
use crate::screens::{DailyScreen, HabitListKind};
use crate::ui::input::DailyRow;
use crate::ui::theme;
use crate::ui::widgets::{
    BookProgressCard, HabitRow, QuarterHeaderWidget, StreakCalendar, TimeTrackerForm,
};

use super::{hint, section_title};

/// Selectable rows in cursor order: personal habits, shared habits, tracker
pub fn daily_rows(daily: &DailyScreen) -> Vec<DailyRow> {
    let mut rows = Vec::new();
    for kind in [HabitListKind::Personal, HabitListKind::Shared] {
        for habit in daily.list(kind).habits() {
            rows.push(DailyRow::Habit { list: kind, id: habit.id.clone() });
        }
    }
    rows.push(DailyRow::TimeTracker { submitted: daily.tracker().is_submitted() });
    rows
}

fn list_height(list: &HabitList) -> u16 {
    list.habits().iter().map(|h| HabitRow::new(h).height()).sum::<u16>() + 3
}

/// Draw a checklist inside a titled block; `selected` indexes into the list
fn render_habit_list(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    color: ratatui::style::Color,
    list: &HabitList,
    selected: Option<usize>,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::BORDER))
        .title(section_title(
            title,
            color,
            Some(format!("{}/{}", list.completed_count(), list.len())),
        ));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut y = inner.y;
    for (i, habit) in list.habits().iter().enumerate() {
        let row = HabitRow::new(habit).selected(selected == Some(i));
        let height = row.height().min((inner.y + inner.height).saturating_sub(y));
        if height == 0 {
            break;
        }
        frame.render_widget(row, Rect::new(inner.x, y, inner.width, height));
        y += height;
    }
}

fn selected_in(habits: &[Habit], offset: usize, cursor: usize) -> Option<usize> {
    cursor.checked_sub(offset).filter(|i| *i < habits.len())
}

pub fn render(frame: &mut Frame, area: Rect, daily: &DailyScreen, cursor: usize, editing: bool) {
    let [header_area, body_area, hint_area] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(10),
        Constraint::Length(1),
    ])
    .areas(area);

    frame.render_widget(QuarterHeaderWidget::new(daily.header(), daily.progress()), header_area);

    let [left, right] =
        Layout::horizontal([Constraint::Percentage(55), Constraint::Percentage(45)]).areas(body_area);

    let personal = daily.personal();
    let shared = daily.shared();
    let tracker_index = personal.len() + shared.len();

    let mut constraints = vec![Constraint::Length(list_height(personal))];
    if !shared.is_empty() {
        constraints.push(Constraint::Length(list_height(shared)));
    }
    constraints.push(Constraint::Length(5));
    constraints.push(Constraint::Min(0));
    let left_chunks = Layout::vertical(constraints).split(left);

    render_habit_list(
        frame,
        left_chunks[0],
        "Focus of the day",
        theme::PRIMARY,
        personal,
        selected_in(personal.habits(), 0, cursor),
    );

    let mut next = 1;
    if !shared.is_empty() {
        render_habit_list(
            frame,
            left_chunks[1],
            "Couple",
            theme::ACCENT,
            shared,
            selected_in(shared.habits(), personal.len(), cursor),
        );
        next = 2;
    }

    frame.render_widget(
        TimeTrackerForm::new(daily.tracker(), SCREEN_TIME_QUESTION)
            .selected(cursor == tracker_index)
            .editing(editing),
        left_chunks[next],
    );

    let [book_area, streak_area, _] = Layout::vertical([
        Constraint::Length(9),
        Constraint::Length(5),
        Constraint::Min(0),
    ])
    .areas(right);
    frame.render_widget(BookProgressCard::new(daily.book()), book_area);
    frame.render_widget(StreakCalendar::new(daily.streak_days(), STREAK_TITLE), streak_area);

    frame.render_widget(
        Paragraph::new(hint("[↑/↓] select  [Space] toggle  [Tab] next tab  [q] quit")),
        hint_area,
    );
}
