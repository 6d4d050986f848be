//! Frame layout: title bar, editor + results split, status bar, overlays.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::app::AppState;
use crate::services::editor_view::render_editor;
use crate::services::language_picker::render_language_picker;
use crate::services::notifications::render_notification;
use crate::services::results::render_results;

pub fn render(f: &mut Frame, state: &mut AppState) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(f.area());

    render_title(f, state, rows[0]);

    // Same 70/30 split as the editor/results columns in the web original.
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
        .split(rows[1]);

    render_editor(f, state, columns[0]);
    render_results(f, state, columns[1]);
    render_status(f, state, rows[2]);

    if let Some(notification) = &state.notification {
        render_notification(f, notification, rows[1]);
    }
    if let Some(picker) = &state.picker {
        render_language_picker(f, picker, state.language);
    }
}

fn render_title(f: &mut Frame, state: &AppState, area: ratatui::layout::Rect) {
    let title = Line::from(vec![
        Span::styled(
            " ✦ revbot ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("AI Code Review", Style::default().fg(Color::Gray)),
        Span::raw("  "),
        Span::styled(
            state.language.label(),
            Style::default().fg(Color::Green),
        ),
    ]);
    f.render_widget(Paragraph::new(title), area);
}

fn render_status(f: &mut Frame, state: &AppState, area: ratatui::layout::Rect) {
    let hints = [
        ("^R", " review "),
        ("^F", " auto-fix "),
        ("^K", " clear "),
        ("^L", " language "),
        ("Tab", " focus "),
        ("^Q", " quit "),
    ];
    let mut spans: Vec<Span> = Vec::new();
    for (key, action) in hints {
        spans.push(Span::styled(key, Style::default().fg(Color::Cyan)));
        spans.push(Span::styled(action, Style::default().fg(Color::DarkGray)));
    }

    if state.reviewing {
        spans.push(Span::styled(
            " Reviewing…",
            Style::default().fg(Color::Yellow),
        ));
    } else if state.fixing {
        spans.push(Span::styled(" Fixing…", Style::default().fg(Color::Yellow)));
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
