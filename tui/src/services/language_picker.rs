//! Language picker popup, opened with Ctrl+L.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use revbot_shared::models::language::Language;

#[derive(Debug, Clone)]
pub struct LanguagePicker {
    pub selected: usize,
}

impl LanguagePicker {
    pub fn new(current: Language) -> Self {
        let selected = Language::ALL
            .iter()
            .position(|lang| *lang == current)
            .unwrap_or(0);
        Self { selected }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_next(&mut self) {
        self.selected = (self.selected + 1).min(Language::ALL.len() - 1);
    }

    pub fn choice(&self) -> Language {
        Language::ALL[self.selected]
    }
}

pub fn render_language_picker(f: &mut Frame, picker: &LanguagePicker, current: Language) {
    let area = centered_rect(30, 40, f.area());
    f.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Select Language ")
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(4), Constraint::Length(1)])
        .split(inner);

    let mut lines: Vec<Line> = Vec::new();
    for (idx, language) in Language::ALL.iter().enumerate() {
        let marker = if *language == current { "●" } else { " " };
        let style = if idx == picker.selected {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else if *language == current {
            Style::default().fg(Color::Green)
        } else {
            Style::default().fg(Color::Gray)
        };
        lines.push(Line::from(vec![
            Span::styled(format!(" {marker} "), Style::default().fg(Color::Green)),
            Span::styled(format!("{:<12}", language.label()), style),
        ]));
    }
    f.render_widget(Paragraph::new(lines), chunks[0]);

    let help = Line::from(vec![
        Span::styled("↑/↓", Style::default().fg(Color::DarkGray)),
        Span::styled(" move  ", Style::default().fg(Color::Cyan)),
        Span::styled("↵", Style::default().fg(Color::DarkGray)),
        Span::styled(" select  ", Style::default().fg(Color::Cyan)),
        Span::styled("esc", Style::default().fg(Color::DarkGray)),
        Span::styled(" cancel", Style::default().fg(Color::Cyan)),
    ]);
    f.render_widget(Paragraph::new(help), chunks[1]);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opens_on_the_current_language() {
        let picker = LanguagePicker::new(Language::Java);
        assert_eq!(picker.choice(), Language::Java);
    }

    #[test]
    fn selection_clamps_at_both_ends() {
        let mut picker = LanguagePicker::new(Language::Python);
        picker.select_prev();
        assert_eq!(picker.choice(), Language::Python);
        for _ in 0..10 {
            picker.select_next();
        }
        assert_eq!(picker.choice(), Language::Cpp);
    }
}
