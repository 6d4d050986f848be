//! Review results pane.
//!
//! A pure function of {issues, reviewing, error}: exactly one of four views
//! is shown, in fixed priority order. Issues render in server order.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use revbot_shared::models::review::{ReviewIssue, Severity};

use crate::app::AppState;

const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Which of the four mutually exclusive views the pane shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultsView {
    Reviewing,
    Error,
    Empty,
    Issues,
}

/// View-selection priority: spinner beats error beats empty beats list.
pub fn select_view(issues: &[ReviewIssue], reviewing: bool, error: Option<&str>) -> ResultsView {
    if reviewing {
        ResultsView::Reviewing
    } else if error.is_some() {
        ResultsView::Error
    } else if issues.is_empty() {
        ResultsView::Empty
    } else {
        ResultsView::Issues
    }
}

/// Fixed per-severity presentation. Exhaustive on purpose: adding a severity
/// without a visual treatment must not compile.
pub fn severity_color(severity: Severity) -> Color {
    match severity {
        Severity::Bug => Color::Red,
        Severity::Warning => Color::Yellow,
        Severity::Improvement => Color::Blue,
        Severity::Security => Color::Magenta,
    }
}

pub fn render_results(f: &mut Frame, state: &AppState, area: Rect) {
    let focused = state.results_focused();
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Review Results ")
        .border_style(if focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        });
    let inner = block.inner(area);
    f.render_widget(block, area);

    match select_view(&state.issues, state.reviewing, state.error.as_deref()) {
        ResultsView::Reviewing => render_spinner(f, state.tick_count, inner),
        ResultsView::Error => render_error(f, state.error.as_deref().unwrap_or_default(), inner),
        ResultsView::Empty => render_empty(f, inner),
        ResultsView::Issues => render_issues(f, state, inner),
    }
}

fn render_spinner(f: &mut Frame, tick_count: u64, area: Rect) {
    let frame = SPINNER_FRAMES[(tick_count as usize) % SPINNER_FRAMES.len()];
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!(" {frame} Analyzing your code..."),
            Style::default().fg(Color::Yellow),
        )),
    ];
    f.render_widget(Paragraph::new(lines), area);
}

fn render_error(f: &mut Frame, error: &str, area: Rect) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            " Error",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!(" {error}"),
            Style::default().fg(Color::Red),
        )),
    ];
    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), area);
}

fn render_empty(f: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            " ✓ No issues found",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            " Your code looks great!",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    f.render_widget(Paragraph::new(lines), area);
}

fn render_issues(f: &mut Frame, state: &AppState, area: Rect) {
    let mut lines: Vec<Line> = Vec::new();
    for issue in &state.issues {
        lines.extend(issue_lines(issue));
        lines.push(Line::from(""));
    }

    f.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .scroll((state.results_scroll, 0)),
        area,
    );
}

fn issue_lines(issue: &ReviewIssue) -> Vec<Line<'static>> {
    let color = severity_color(issue.severity);
    let line_label = match issue.line {
        Some(line) => format!("Line {line}"),
        None => "Line ?".to_string(),
    };

    let mut lines = vec![
        Line::from(vec![
            Span::styled(
                format!(" {} ", issue.severity.label()),
                Style::default()
                    .fg(Color::Black)
                    .bg(color)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" "),
            Span::styled(line_label, Style::default().fg(Color::DarkGray)),
        ]),
        Line::from(Span::raw(issue.explanation.clone())),
    ];

    // The suggestion block only exists when the backend provided one.
    if !issue.suggested_fix.is_empty() {
        lines.push(Line::from(Span::styled(
            "Suggested fix:",
            Style::default().fg(Color::DarkGray),
        )));
        for fix_line in issue.suggested_fix.split('\n') {
            lines.push(Line::from(Span::styled(
                format!("  {fix_line}"),
                Style::default().fg(Color::Cyan),
            )));
        }
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn issue(severity: Severity) -> ReviewIssue {
        ReviewIssue {
            line: Some(1),
            severity,
            explanation: "x".to_string(),
            suggested_fix: String::new(),
        }
    }

    #[test]
    fn reviewing_wins_over_error() {
        let view = select_view(&[], true, Some("E"));
        assert_eq!(view, ResultsView::Reviewing);
    }

    #[test]
    fn error_wins_over_empty_and_issues() {
        assert_eq!(select_view(&[], false, Some("E")), ResultsView::Error);
        assert_eq!(
            select_view(&[issue(Severity::Bug)], false, Some("E")),
            ResultsView::Error
        );
    }

    #[test]
    fn empty_state_when_no_issues() {
        assert_eq!(select_view(&[], false, None), ResultsView::Empty);
    }

    #[test]
    fn issue_list_otherwise() {
        assert_eq!(
            select_view(&[issue(Severity::Warning)], false, None),
            ResultsView::Issues
        );
    }

    #[test]
    fn severity_colors_are_distinct() {
        let colors = [
            severity_color(Severity::Bug),
            severity_color(Severity::Warning),
            severity_color(Severity::Improvement),
            severity_color(Severity::Security),
        ];
        for (i, a) in colors.iter().enumerate() {
            for b in colors.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn suggestion_block_only_when_fix_present() {
        let without = issue_lines(&issue(Severity::Bug));
        assert_eq!(without.len(), 2);

        let mut with_fix = issue(Severity::Bug);
        with_fix.suggested_fix = "use y".to_string();
        let lines = issue_lines(&with_fix);
        assert!(lines.len() > 2);
    }
}
