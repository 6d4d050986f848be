//! Application controller.
//!
//! `AppState` owns the single session: code buffer, language, issues, busy
//! flags, error panel text, and transient notification. Requests are
//! fire-and-forget tokio tasks; completions come back as `AppEvent`s. There
//! is no cancellation of in-flight requests — triggering controls are gated
//! while either busy flag is set.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use revbot_api::{ApiClient, ApiError};
use revbot_shared::models::language::Language;
use revbot_shared::models::review::{AutoFixResponse, ReviewIssue, ReviewResponse};
use tokio::sync::mpsc;
use tracing::debug;

use crate::editor::EditorBuffer;
use crate::event::AppEvent;
use crate::services::language_picker::LanguagePicker;
use crate::services::notifications::Notification;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Focus {
    #[default]
    Editor,
    Results,
}

impl Focus {
    pub fn toggle(self) -> Self {
        match self {
            Focus::Editor => Focus::Results,
            Focus::Results => Focus::Editor,
        }
    }
}

#[derive(Default)]
pub struct AppState {
    pub editor: EditorBuffer,
    pub language: Language,
    pub issues: Vec<ReviewIssue>,
    pub reviewing: bool,
    pub fixing: bool,
    pub error: Option<String>,
    pub notification: Option<Notification>,
    pub picker: Option<LanguagePicker>,
    pub focus: Focus,
    pub editor_scroll: usize,
    pub results_scroll: u16,
    pub tick_count: u64,
    pub should_quit: bool,
}

impl AppState {
    pub fn busy(&self) -> bool {
        self.reviewing || self.fixing
    }

    pub fn editor_focused(&self) -> bool {
        self.focus == Focus::Editor
    }

    pub fn results_focused(&self) -> bool {
        self.focus == Focus::Results
    }

    pub fn on_tick(&mut self) {
        self.tick_count = self.tick_count.wrapping_add(1);
        if self
            .notification
            .as_ref()
            .is_some_and(Notification::is_expired)
        {
            self.notification = None;
        }
    }

    /// Guard + state entry for a review request. Returns false (and changes
    /// nothing) for empty/whitespace code or while an action is in flight.
    pub fn begin_review(&mut self) -> bool {
        if self.busy() || self.editor.text().trim().is_empty() {
            return false;
        }
        self.reviewing = true;
        self.error = None;
        true
    }

    /// Always clears the busy flag; on success the issue list is replaced in
    /// server order, on failure the error panel is set and issues dropped.
    pub fn finish_review(&mut self, result: Result<ReviewResponse, ApiError>) {
        self.reviewing = false;
        match result {
            Ok(response) => {
                self.issues = response.issues;
                self.results_scroll = 0;
            }
            Err(err) => {
                self.error = Some(err.to_string());
                self.issues.clear();
            }
        }
    }

    pub fn begin_auto_fix(&mut self) -> bool {
        if self.busy() || self.editor.text().trim().is_empty() {
            return false;
        }
        self.fixing = true;
        true
    }

    /// On success the buffer is replaced atomically and stale issues are
    /// dropped; on failure only a transient notification is emitted — code
    /// and issues stay untouched.
    pub fn finish_auto_fix(&mut self, result: Result<AutoFixResponse, ApiError>) {
        self.fixing = false;
        match result {
            Ok(response) => {
                self.editor.set_text(&response.fixed_code);
                self.issues.clear();
                self.notification =
                    Some(Notification::success("Code fixed successfully!", response.summary));
            }
            Err(err) => {
                self.notification = Some(Notification::error(err.to_string()));
            }
        }
    }

    /// Unconditional reset of code, issues, and error. Busy flags are left
    /// alone; the key binding is gated while a request is in flight.
    pub fn clear(&mut self) {
        self.editor.clear();
        self.issues.clear();
        self.error = None;
        self.editor_scroll = 0;
        self.results_scroll = 0;
    }

    /// Switching language fills an empty buffer with the fixed sample and
    /// never overwrites user-authored content.
    pub fn change_language(&mut self, language: Language) {
        self.language = language;
        if self.editor.is_empty() {
            self.editor.set_text(language.sample_code());
        }
    }
}

pub struct App {
    pub state: AppState,
    client: ApiClient,
    tx: mpsc::UnboundedSender<AppEvent>,
}

impl App {
    pub fn new(client: ApiClient, tx: mpsc::UnboundedSender<AppEvent>) -> Self {
        Self {
            state: AppState::default(),
            client,
            tx,
        }
    }

    pub fn handle(&mut self, event: AppEvent) {
        match event {
            AppEvent::Key(key) => self.on_key(key),
            AppEvent::Resize(_, _) => {}
            AppEvent::Tick => self.state.on_tick(),
            AppEvent::ReviewFinished(result) => self.state.finish_review(result),
            AppEvent::AutoFixFinished(result) => self.state.finish_auto_fix(result),
        }
    }

    fn on_key(&mut self, key: KeyEvent) {
        if self.state.picker.is_some() {
            self.on_picker_key(key);
            return;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('q') | KeyCode::Char('c') => self.state.should_quit = true,
                KeyCode::Char('r') => self.trigger_review(),
                KeyCode::Char('f') => self.trigger_auto_fix(),
                KeyCode::Char('k') => {
                    if !self.state.busy() {
                        self.state.clear();
                    }
                }
                KeyCode::Char('l') => {
                    self.state.picker = Some(LanguagePicker::new(self.state.language));
                }
                _ => {}
            }
            return;
        }

        match key.code {
            KeyCode::Tab => self.state.focus = self.state.focus.toggle(),
            KeyCode::Esc => self.state.notification = None,
            _ => match self.state.focus {
                Focus::Editor => self.on_editor_key(key),
                Focus::Results => self.on_results_key(key),
            },
        }
    }

    fn on_picker_key(&mut self, key: KeyEvent) {
        let Some(picker) = self.state.picker.as_mut() else {
            return;
        };
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => picker.select_prev(),
            KeyCode::Down | KeyCode::Char('j') => picker.select_next(),
            KeyCode::Enter => {
                let choice = picker.choice();
                self.state.picker = None;
                self.state.change_language(choice);
            }
            KeyCode::Esc => self.state.picker = None,
            _ => {}
        }
    }

    fn on_editor_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char(c) => self.state.editor.insert_char(c),
            KeyCode::Enter => self.state.editor.insert_newline(),
            KeyCode::Backspace => self.state.editor.backspace(),
            KeyCode::Delete => self.state.editor.delete(),
            KeyCode::Left => self.state.editor.move_left(),
            KeyCode::Right => self.state.editor.move_right(),
            KeyCode::Up => self.state.editor.move_up(),
            KeyCode::Down => self.state.editor.move_down(),
            KeyCode::Home => self.state.editor.move_home(),
            KeyCode::End => self.state.editor.move_end(),
            _ => {}
        }
    }

    fn on_results_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up => self.state.results_scroll = self.state.results_scroll.saturating_sub(1),
            KeyCode::Down => {
                self.state.results_scroll = self.state.results_scroll.saturating_add(1)
            }
            KeyCode::PageUp => {
                self.state.results_scroll = self.state.results_scroll.saturating_sub(10)
            }
            KeyCode::PageDown => {
                self.state.results_scroll = self.state.results_scroll.saturating_add(10)
            }
            _ => {}
        }
    }

    fn trigger_review(&mut self) {
        if !self.state.begin_review() {
            return;
        }
        debug!(language = self.state.language.label(), "review requested");
        let client = self.client.clone();
        let code = self.state.editor.text();
        let language = self.state.language;
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let result = client.review(code, language).await;
            let _ = tx.send(AppEvent::ReviewFinished(result));
        });
    }

    fn trigger_auto_fix(&mut self) {
        if !self.state.begin_auto_fix() {
            return;
        }
        debug!(language = self.state.language.label(), "auto-fix requested");
        let client = self.client.clone();
        let code = self.state.editor.text();
        let language = self.state.language;
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let result = client.auto_fix(code, language).await;
            let _ = tx.send(AppEvent::AutoFixFinished(result));
        });
    }
}
