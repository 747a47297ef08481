//! Application state and core logic

use std::path::PathBuf;

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tokio::sync::mpsc::{self, UnboundedReceiver};

use crate::award::AwardConfig;
use crate::config::AppConfig;
use crate::form::{BuilderController, ChannelObserver, EditorMode, Question, Snapshot};
use crate::state::{AppState, CardField, PickerPurpose, TypePicker};
use crate::storage::{AwardRepository, JsonFileRepository};
use crate::upload::UploadPolicy;

/// Main application struct
pub struct App {
    /// UI state outside the form itself
    pub state: AppState,
    /// Builder session owning the form being edited
    pub controller: BuilderController,
    /// Award the form belongs to, kept in step with every snapshot
    pub award: AwardConfig,
    /// Limits shown on file upload questions
    pub upload_policy: UploadPolicy,
    repository: Box<dyn AwardRepository>,
    /// Snapshots emitted by the controller, waiting to be persisted
    snapshots: UnboundedReceiver<Snapshot>,
    autosave: bool,
    quit: bool,
}

impl App {
    /// Create a new App editing the award stored at `award_file`
    pub async fn new(config: &AppConfig, award_file: PathBuf) -> Result<Self> {
        let repository = JsonFileRepository::new(award_file);
        Self::with_repository(Box::new(repository), config).await
    }

    /// Create an App on top of any award repository
    pub async fn with_repository(
        repository: Box<dyn AwardRepository>,
        config: &AppConfig,
    ) -> Result<Self> {
        let stored = repository.load().await?;
        let is_new = stored.is_none();
        let mut award = stored.unwrap_or_default();
        let initial = (!is_new).then(|| award.questions.clone());

        let (tx, rx) = mpsc::unbounded_channel();
        let mut controller = BuilderController::new(initial);
        controller.subscribe(Box::new(ChannelObserver::new(tx)));

        if is_new {
            award.apply_questions(controller.questions());
        } else {
            award.questions = controller.questions().to_vec();
        }

        let state = AppState {
            unsaved_changes: is_new,
            ..AppState::default()
        };

        Ok(Self {
            state,
            controller,
            award,
            upload_policy: config.upload_policy(),
            repository,
            snapshots: rx,
            autosave: config.autosave(),
            quit: false,
        })
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn request_quit(&mut self) {
        self.quit = true;
    }

    pub fn autosave(&self) -> bool {
        self.autosave
    }

    /// Question under the card focus
    pub fn selected_question(&self) -> Option<&Question> {
        self.controller.question(self.state.focus.question)
    }

    fn selected_option_count(&self) -> usize {
        self.selected_question().map_or(0, |q| q.options.len())
    }

    fn clamp_focus(&mut self) {
        let count = self.controller.questions().len();
        let options = self.selected_option_count();
        self.state.focus.clamp(count, options);
    }

    /// Handle a key event
    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Handle error dialog dismissal first (modal)
        if self.state.has_errors() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_error();
            }
            return Ok(());
        }

        // Handle type picker (modal)
        if self.state.type_picker.is_some() {
            self.handle_type_picker_key(key);
            return Ok(());
        }

        // Clear any status messages on key press
        self.state.status_message = None;

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('q') if ctrl => {
                self.quit = true;
                return Ok(());
            }
            KeyCode::Char('p') if ctrl => {
                self.controller.toggle_mode();
                self.state.preview_scroll = 0;
                return Ok(());
            }
            KeyCode::Char('s') if ctrl => {
                self.drain_snapshots();
                if self.save().await {
                    self.state.status_message = Some("Award saved".to_string());
                }
                return Ok(());
            }
            KeyCode::Char('l') if ctrl => {
                self.reload().await;
                return Ok(());
            }
            KeyCode::Char('y') if key.modifiers.contains(crate::platform::COPY_MODIFIER) => {
                self.copy_form_json();
                return Ok(());
            }
            _ => {}
        }

        match self.controller.mode() {
            EditorMode::Edit => self.handle_edit_key(key),
            EditorMode::Preview => self.handle_preview_key(key),
        }
        Ok(())
    }

    /// Terminal lost focus: an interrupted drag must not move anything
    pub fn handle_focus_lost(&mut self) {
        if self.controller.drag_source().is_some() {
            self.controller.cancel_drag();
            self.state.status_message = Some("Move cancelled".to_string());
        }
    }

    /// Handle keys in edit mode
    fn handle_edit_key(&mut self, key: KeyEvent) {
        if self.controller.drag_source().is_some() {
            self.handle_drag_key(key);
            return;
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let order = self.state.focus.question;
        let count = self.controller.questions().len();

        match key.code {
            KeyCode::Char('a') if ctrl => {
                self.controller.begin_add_field();
                self.state.type_picker = Some(TypePicker::new(PickerPurpose::AddQuestion));
            }
            KeyCode::Char('t') if ctrl => {
                if let Some(kind) = self.selected_question().map(|q| q.kind) {
                    self.state.type_picker = Some(TypePicker::with_selected(
                        PickerPurpose::ChangeType(order),
                        kind,
                    ));
                }
            }
            KeyCode::Char('d') if ctrl => {
                if self.controller.duplicate_question(order) {
                    let last = self.controller.questions().len() - 1;
                    self.state.focus.select(last);
                }
            }
            KeyCode::Char('x') if ctrl => {
                self.controller.delete_question(order);
            }
            KeyCode::Char('o') if ctrl => {
                if self.controller.add_option(order) {
                    let last = self.selected_option_count() - 1;
                    self.state.focus.field = CardField::Option(last);
                }
            }
            KeyCode::Char('r') if ctrl => {
                if let CardField::Option(index) = self.state.focus.field {
                    self.controller.remove_option(order, index);
                }
            }
            KeyCode::Char('g') if ctrl => {
                if self.controller.begin_drag(order) {
                    self.state.status_message =
                        Some("Moving question: ↑↓ choose position, Enter drop, Esc cancel".to_string());
                }
            }
            KeyCode::Up => self.state.focus.move_up(),
            KeyCode::Down => self.state.focus.move_down(count),
            KeyCode::Tab => {
                let options = self.selected_option_count();
                self.state.focus.next_field(options);
            }
            KeyCode::BackTab => {
                let options = self.selected_option_count();
                self.state.focus.prev_field(options);
            }
            KeyCode::Char(' ') | KeyCode::Enter if self.state.focus.field == CardField::Required => {
                self.controller.toggle_required(order);
            }
            KeyCode::Char(c) if !ctrl && self.state.focus.field.is_text() => self.input_char(c),
            KeyCode::Backspace if self.state.focus.field.is_text() => self.backspace(),
            _ => {}
        }

        self.clamp_focus();
    }

    /// Handle keys while a question is picked up
    fn handle_drag_key(&mut self, key: KeyEvent) {
        let count = self.controller.questions().len();
        let current = self
            .controller
            .drag_target()
            .or(self.controller.drag_source())
            .unwrap_or(0);

        match key.code {
            KeyCode::Up => self.controller.drag_over(Some(current.saturating_sub(1))),
            KeyCode::Down => {
                let next = (current + 1).min(count.saturating_sub(1));
                self.controller.drag_over(Some(next));
            }
            KeyCode::Enter => {
                let target = self.controller.drag_target();
                if self.controller.drop_drag() {
                    if let Some(target) = target {
                        self.state.focus.select(target);
                    }
                }
            }
            KeyCode::Esc => {
                self.controller.cancel_drag();
                self.state.status_message = Some("Move cancelled".to_string());
            }
            _ => {}
        }
    }

    /// Handle keys in preview mode (read-only)
    fn handle_preview_key(&mut self, key: KeyEvent) {
        let scroll = self.state.preview_scroll;
        let scroll = match key.code {
            KeyCode::Esc => {
                self.controller.set_mode(EditorMode::Edit);
                return;
            }
            KeyCode::Up => scroll.saturating_sub(1),
            KeyCode::Down => scroll.saturating_add(1),
            KeyCode::PageUp => scroll.saturating_sub(10),
            KeyCode::PageDown => scroll.saturating_add(10),
            KeyCode::Home => 0,
            KeyCode::End => u16::MAX,
            _ => return,
        };
        self.state.preview_scroll = scroll.min(crate::ui::preview_max_scroll(self));
    }

    /// Handle keys in the type picker dialog
    fn handle_type_picker_key(&mut self, key: KeyEvent) {
        let Some(mut picker) = self.state.type_picker else {
            return;
        };

        match key.code {
            KeyCode::Up | KeyCode::Char('k') => picker.prev(),
            KeyCode::Down | KeyCode::Char('j') => picker.next(),
            KeyCode::Enter => {
                self.state.type_picker = None;
                let kind = picker.selected_type();
                match picker.purpose {
                    PickerPurpose::AddQuestion => {
                        if self.controller.choose_field_type(kind) {
                            let last = self.controller.questions().len() - 1;
                            self.state.focus.select(last);
                        }
                    }
                    PickerPurpose::ChangeType(order) => {
                        self.controller.change_type(order, kind);
                    }
                }
                self.clamp_focus();
                return;
            }
            KeyCode::Esc => {
                self.state.type_picker = None;
                self.controller.cancel_add_field();
                return;
            }
            _ => {}
        }

        self.state.type_picker = Some(picker);
    }

    /// Append a character to the focused title or option
    fn input_char(&mut self, c: char) {
        let order = self.state.focus.question;
        let Some(question) = self.selected_question() else {
            return;
        };

        match self.state.focus.field {
            CardField::Title => {
                let mut title = question.title.clone();
                title.push(c);
                self.controller.set_title(order, title);
            }
            CardField::Option(index) => {
                if let Some(option) = question.options.get(index) {
                    let mut value = option.value.clone();
                    value.push(c);
                    self.controller.set_option_value(order, index, value);
                }
            }
            CardField::Required => {}
        }
    }

    /// Remove the last character of the focused title or option
    fn backspace(&mut self) {
        let order = self.state.focus.question;
        let Some(question) = self.selected_question() else {
            return;
        };

        match self.state.focus.field {
            CardField::Title => {
                let mut title = question.title.clone();
                if title.pop().is_some() {
                    self.controller.set_title(order, title);
                }
            }
            CardField::Option(index) => {
                if let Some(option) = question.options.get(index) {
                    let mut value = option.value.clone();
                    if value.pop().is_some() {
                        self.controller.set_option_value(order, index, value);
                    }
                }
            }
            CardField::Required => {}
        }
    }

    /// Fold every pending snapshot into the award; returns how many arrived
    fn drain_snapshots(&mut self) -> usize {
        let mut received = 0;
        while let Ok(snapshot) = self.snapshots.try_recv() {
            self.award.apply_questions(&snapshot);
            received += 1;
        }
        if received > 0 {
            self.state.unsaved_changes = true;
        }
        received
    }

    /// Persist changes emitted since the last call when autosave is on
    pub async fn persist_pending(&mut self) {
        if self.drain_snapshots() == 0 || !self.autosave {
            return;
        }
        if !self.save().await {
            self.autosave = false;
            self.state.push_error(
                "Autosave disabled after a failed save. Press Ctrl+S to retry.".to_string(),
            );
        }
    }

    /// Write the award through the repository; returns whether it succeeded
    pub async fn save(&mut self) -> bool {
        match self.repository.save(&self.award).await {
            Ok(()) => {
                self.state.unsaved_changes = false;
                true
            }
            Err(err) => {
                self.state.push_error(format!("Failed to save award: {err}"));
                false
            }
        }
    }

    /// Replace the form with whatever the repository currently holds
    pub async fn reload(&mut self) {
        self.drain_snapshots();
        let had_unsaved = self.state.unsaved_changes;
        match self.repository.load().await {
            Ok(Some(award)) => {
                let changed = self.controller.sync_external(award.questions.clone());
                self.award = award;
                self.award.questions = self.controller.questions().to_vec();
                self.state.unsaved_changes = false;
                self.state.status_message = Some(match (changed, had_unsaved) {
                    (true, true) => "Form reloaded, unsaved edits discarded".to_string(),
                    (true, false) => "Form reloaded".to_string(),
                    (false, true) => "Form matches saved copy, unsaved flag cleared".to_string(),
                    (false, false) => "Form already up to date".to_string(),
                });
                if had_unsaved {
                    tracing::warn!("reload discarded unsaved edits");
                }
                self.clamp_focus();
            }
            Ok(None) => {
                self.state.status_message = Some("Nothing saved yet".to_string());
            }
            Err(err) => self.state.push_error(format!("Failed to reload award: {err}")),
        }
    }

    fn copy_to_clipboard(&self, text: &str) -> Result<()> {
        use arboard::Clipboard;
        let mut clipboard = Clipboard::new()?;
        clipboard.set_text(text)?;
        Ok(())
    }

    /// Copy the question list, in wire shape, to the clipboard
    fn copy_form_json(&mut self) {
        let result = serde_json::to_string_pretty(self.controller.questions())
            .map_err(anyhow::Error::from)
            .and_then(|json| self.copy_to_clipboard(&json));
        match result {
            Ok(()) => self.state.status_message = Some("Copied form JSON".to_string()),
            Err(err) => self.state.push_error(format!("Failed to copy: {err}")),
        }
    }
}
