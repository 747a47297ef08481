//! Application state definitions

use std::collections::VecDeque;

use super::focus::CardFocus;
use super::picker::TypePicker;

/// UI state of the builder that is not part of the form itself
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// Selected question card and field
    pub focus: CardFocus,
    /// Open type picker dialog, if any
    pub type_picker: Option<TypePicker>,
    /// Errors waiting to be shown, oldest first
    pub errors: VecDeque<String>,
    /// One-line feedback shown in the status bar
    pub status_message: Option<String>,
    /// Changes received since the last successful save
    pub unsaved_changes: bool,
    /// First preview row shown
    pub preview_scroll: u16,
}

impl AppState {
    pub fn push_error(&mut self, message: String) {
        tracing::warn!("{message}");
        self.errors.push_back(message);
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn current_error(&self) -> Option<&str> {
        self.errors.front().map(String::as_str)
    }

    pub fn dismiss_error(&mut self) {
        self.errors.pop_front();
    }
}
