//! Code editor pane.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::app::AppState;

pub fn render_editor(f: &mut Frame, state: &mut AppState, area: Rect) {
    let focused = state.editor_focused();
    let title = format!(" Code · {} ", state.language.label());
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(if focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        });
    let inner = block.inner(area);
    f.render_widget(block, area);

    if state.editor.is_empty() {
        let hint = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                " Paste or type code here.",
                Style::default().fg(Color::DarkGray),
            )),
            Line::from(Span::styled(
                " Ctrl+L picks a language and inserts a sample.",
                Style::default().fg(Color::DarkGray),
            )),
        ]);
        f.render_widget(hint, inner);
        if focused && state.picker.is_none() {
            f.set_cursor_position((inner.x.saturating_add(gutter_width(1)), inner.y));
        }
        return;
    }

    let (cursor_row, cursor_col) = state.editor.cursor();
    let height = inner.height as usize;

    // Keep the cursor inside the viewport.
    if cursor_row < state.editor_scroll {
        state.editor_scroll = cursor_row;
    } else if height > 0 && cursor_row >= state.editor_scroll + height {
        state.editor_scroll = cursor_row + 1 - height;
    }

    let gutter = gutter_width(state.editor.line_count());
    let lines: Vec<Line> = state
        .editor
        .lines()
        .iter()
        .enumerate()
        .skip(state.editor_scroll)
        .take(height)
        .map(|(idx, content)| {
            Line::from(vec![
                Span::styled(
                    format!("{:>width$} ", idx + 1, width = gutter as usize - 1),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::raw(content.clone()),
            ])
        })
        .collect();
    f.render_widget(Paragraph::new(lines), inner);

    if focused && state.picker.is_none() {
        let prefix: String = state
            .editor
            .lines()
            .get(cursor_row)
            .map(|line| line.chars().take(cursor_col).collect())
            .unwrap_or_default();
        let x = inner.x + gutter + prefix.width() as u16;
        let y = inner.y + (cursor_row - state.editor_scroll) as u16;
        if x < inner.x + inner.width && y < inner.y + inner.height {
            f.set_cursor_position((x, y));
        }
    }
}

fn gutter_width(line_count: usize) -> u16 {
    let digits = line_count.max(1).to_string().len() as u16;
    digits + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gutter_grows_with_line_count() {
        assert_eq!(gutter_width(1), 2);
        assert_eq!(gutter_width(9), 2);
        assert_eq!(gutter_width(10), 3);
        assert_eq!(gutter_width(150), 4);
    }
}
