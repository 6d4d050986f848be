//! Transient toast shown after auto-fix completes.

use std::time::{Duration, Instant};

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

/// How long a toast stays up unless dismissed with Esc.
pub const NOTIFICATION_TTL: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Success,
    Error,
}

#[derive(Debug, Clone)]
pub struct Notification {
    pub level: NotificationLevel,
    pub title: String,
    pub detail: Option<String>,
    created: Instant,
}

impl Notification {
    pub fn success(title: impl Into<String>, detail: impl Into<String>) -> Self {
        let detail = detail.into();
        Self {
            level: NotificationLevel::Success,
            title: title.into(),
            detail: (!detail.is_empty()).then_some(detail),
            created: Instant::now(),
        }
    }

    pub fn error(title: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Error,
            title: title.into(),
            detail: None,
            created: Instant::now(),
        }
    }

    pub fn is_expired(&self) -> bool {
        self.created.elapsed() >= NOTIFICATION_TTL
    }
}

/// Draw the toast anchored to the bottom-right corner of `area`.
pub fn render_notification(f: &mut Frame, notification: &Notification, area: Rect) {
    let (accent, tag) = match notification.level {
        NotificationLevel::Success => (Color::Green, " ✓ "),
        NotificationLevel::Error => (Color::Red, " ✗ "),
    };

    let mut lines = vec![Line::from(vec![
        Span::styled(tag, Style::default().fg(accent).add_modifier(Modifier::BOLD)),
        Span::styled(
            notification.title.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
    ])];
    if let Some(detail) = &notification.detail {
        lines.push(Line::from(Span::styled(
            format!("   {detail}"),
            Style::default().fg(Color::Gray),
        )));
    }

    let width = area.width.min(46).max(20);
    let height = (lines.len() as u16 + 2).min(area.height);
    let toast_area = Rect {
        x: area.x + area.width.saturating_sub(width + 1),
        y: area.y + area.height.saturating_sub(height + 1),
        width,
        height,
    };

    f.render_widget(Clear, toast_area);
    f.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(accent)),
            ),
        toast_area,
    );
}
