//! Builder session orchestration
//!
//! `BuilderController` owns one [`FormDefinition`] for the duration of an
//! editing session, applies user intents to it and notifies every
//! subscriber once per committed mutation.

use super::drag::{DragGesture, DragState};
use super::observer::FormObserver;
use super::question::{Question, QuestionType};
use super::reorder::normalize;
use super::store::{FormDefinition, Snapshot};

/// Whether the builder shows editable cards or the respondent preview
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditorMode {
    #[default]
    Edit,
    Preview,
}

impl EditorMode {
    pub fn toggle(&mut self) {
        *self = match self {
            Self::Edit => Self::Preview,
            Self::Preview => Self::Edit,
        };
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Edit => "Edit",
            Self::Preview => "Preview",
        }
    }
}

pub struct BuilderController {
    form: FormDefinition,
    observers: Vec<Box<dyn FormObserver>>,
    mode: EditorMode,
    selecting_type: bool,
    drag: DragGesture,
}

impl BuilderController {
    /// Start a session from externally supplied questions, or a single
    /// default question when none are given.
    ///
    /// Supplied questions are normalized so positions are `0..n-1`.
    pub fn new(initial: Option<Vec<Question>>) -> Self {
        let form = match initial {
            Some(questions) => FormDefinition::new(normalize(questions)),
            None => FormDefinition::with_default_question(),
        };
        Self {
            form,
            observers: Vec::new(),
            mode: EditorMode::default(),
            selecting_type: false,
            drag: DragGesture::default(),
        }
    }

    /// Register a subscriber for change notifications
    pub fn subscribe(&mut self, observer: Box<dyn FormObserver>) {
        self.observers.push(observer);
    }

    pub fn questions(&self) -> &[Question] {
        self.form.questions()
    }

    pub fn question(&self, order: usize) -> Option<&Question> {
        self.form.get(order)
    }

    pub fn snapshot(&self) -> Snapshot {
        self.form.snapshot()
    }

    pub fn mode(&self) -> EditorMode {
        self.mode
    }

    pub fn is_selecting_type(&self) -> bool {
        self.selecting_type
    }

    pub fn drag_state(&self) -> DragState {
        self.drag.state()
    }

    fn notify(&mut self) {
        let snapshot = self.form.snapshot();
        for observer in self.observers.iter_mut() {
            observer.on_change(&snapshot);
        }
    }

    /// Notify subscribers when a store operation committed
    fn committed(&mut self, changed: bool, action: &'static str) -> bool {
        if changed {
            tracing::debug!(action, questions = self.form.len(), "form changed");
            self.notify();
        } else {
            tracing::trace!(action, "ignored stale or no-op edit");
        }
        changed
    }

    /// Adopt a value pushed by the external consumer.
    ///
    /// State is only replaced when it differs structurally; no notification
    /// goes back out.
    pub fn sync_external(&mut self, questions: Vec<Question>) -> bool {
        let questions = normalize(questions);
        if self.form.questions() == questions.as_slice() {
            return false;
        }
        tracing::debug!(questions = questions.len(), "form replaced from external state");
        self.form.replace(questions);
        self.drag.cancel();
        true
    }

    pub fn add_question(&mut self, kind: QuestionType) -> bool {
        let changed = self.form.add_question(kind);
        self.committed(changed, "add")
    }

    pub fn update_question(&mut self, updated: Question) -> bool {
        let changed = self.form.update_question(updated);
        self.committed(changed, "update")
    }

    pub fn delete_question(&mut self, order: usize) -> bool {
        let changed = self.form.delete_question(order);
        self.committed(changed, "delete")
    }

    pub fn duplicate_question(&mut self, order: usize) -> bool {
        let changed = self.form.duplicate_question(order);
        self.committed(changed, "duplicate")
    }

    pub fn reorder(&mut self, from: usize, to: usize) -> bool {
        let changed = self.form.reorder(from, to);
        self.committed(changed, "reorder")
    }

    /// Apply `edit` to a copy of the question at `order` and commit it
    fn edit_question(&mut self, order: usize, edit: impl FnOnce(&mut Question) -> bool) -> bool {
        let Some(mut question) = self.form.get(order).cloned() else {
            return false;
        };
        if !edit(&mut question) {
            return false;
        }
        question.order = order;
        self.update_question(question)
    }

    pub fn set_title(&mut self, order: usize, title: impl Into<String>) -> bool {
        let title = title.into();
        self.edit_question(order, |q| {
            if q.title == title {
                return false;
            }
            q.title = title;
            true
        })
    }

    pub fn set_required(&mut self, order: usize, required: bool) -> bool {
        self.edit_question(order, |q| {
            if q.required == required {
                return false;
            }
            q.required = required;
            true
        })
    }

    pub fn toggle_required(&mut self, order: usize) -> bool {
        self.edit_question(order, |q| {
            q.required = !q.required;
            true
        })
    }

    pub fn change_type(&mut self, order: usize, kind: QuestionType) -> bool {
        self.edit_question(order, |q| {
            if q.kind == kind {
                return false;
            }
            q.set_kind(kind);
            true
        })
    }

    /// Append a numbered option to a choice question
    pub fn add_option(&mut self, order: usize) -> bool {
        self.edit_question(order, |q| {
            if !q.kind.is_choice() {
                return false;
            }
            q.push_option();
            true
        })
    }

    pub fn set_option_value(&mut self, order: usize, index: usize, value: impl Into<String>) -> bool {
        let value = value.into();
        self.edit_question(order, |q| match q.options.get_mut(index) {
            Some(option) if option.value != value => {
                option.value = value;
                true
            }
            _ => false,
        })
    }

    /// Remove an option; the last remaining option is never removed
    pub fn remove_option(&mut self, order: usize, index: usize) -> bool {
        self.edit_question(order, |q| q.remove_option(index))
    }

    pub fn toggle_mode(&mut self) {
        self.mode.toggle();
        self.drag.cancel();
    }

    pub fn set_mode(&mut self, mode: EditorMode) {
        self.mode = mode;
    }

    /// Show the type selection step of the add-field affordance
    pub fn begin_add_field(&mut self) {
        self.selecting_type = true;
    }

    pub fn cancel_add_field(&mut self) {
        self.selecting_type = false;
    }

    /// Add a question of the chosen type and close the type selection
    pub fn choose_field_type(&mut self, kind: QuestionType) -> bool {
        self.selecting_type = false;
        self.add_question(kind)
    }

    /// Pick up the question at `source` for reordering
    pub fn begin_drag(&mut self, source: usize) -> bool {
        if source >= self.form.len() {
            return false;
        }
        self.drag.start(source)
    }

    /// Hover over `target`; positions outside the form count as no target
    pub fn drag_over(&mut self, target: Option<usize>) {
        let target = target.filter(|t| *t < self.form.len());
        self.drag.hover(target);
    }

    /// Release the drag, issuing at most one reorder
    pub fn drop_drag(&mut self) -> bool {
        let changed = match self.drag.release() {
            Some(request) => self.reorder(request.from, request.to),
            None => false,
        };
        self.drag.reset();
        changed
    }

    /// Abandon the drag without touching the form
    pub fn cancel_drag(&mut self) {
        self.drag.cancel();
    }

    pub fn drag_source(&self) -> Option<usize> {
        self.drag.source()
    }

    pub fn drag_target(&self) -> Option<usize> {
        self.drag.target()
    }
}

impl Default for BuilderController {
    fn default() -> Self {
        Self::new(None)
    }
}
