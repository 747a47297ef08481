//! Question type picker dialog state

use crate::form::QuestionType;

/// What the picked type will be used for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerPurpose {
    /// Add a new question of the picked type
    AddQuestion,
    /// Change the type of the question at this order
    ChangeType(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypePicker {
    pub purpose: PickerPurpose,
    pub selected: usize,
}

impl TypePicker {
    pub fn new(purpose: PickerPurpose) -> Self {
        Self {
            purpose,
            selected: 0,
        }
    }

    /// Open on the entry for `kind`
    pub fn with_selected(purpose: PickerPurpose, kind: QuestionType) -> Self {
        let selected = QuestionType::ALL
            .iter()
            .position(|t| *t == kind)
            .unwrap_or(0);
        Self { purpose, selected }
    }

    pub fn selected_type(&self) -> QuestionType {
        QuestionType::ALL[self.selected % QuestionType::ALL.len()]
    }

    /// Move to the next entry (wraps around)
    pub fn next(&mut self) {
        self.selected = (self.selected + 1) % QuestionType::ALL.len();
    }

    /// Move to the previous entry (wraps around)
    pub fn prev(&mut self) {
        if self.selected == 0 {
            self.selected = QuestionType::ALL.len() - 1;
        } else {
            self.selected -= 1;
        }
    }

    pub fn title(&self) -> &'static str {
        match self.purpose {
            PickerPurpose::AddQuestion => "Add Question",
            PickerPurpose::ChangeType(_) => "Change Type",
        }
    }
}
