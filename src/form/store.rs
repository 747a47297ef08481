//! Ordered question collection with structural mutations

use std::sync::Arc;

use super::question::{Question, QuestionType};
use super::reorder::{move_question, reindex};

/// Immutable view of a form's questions at one point in time.
///
/// Every committed mutation produces a fresh `Arc`, so observers can detect
/// change with `Arc::ptr_eq` as well as by value.
pub type Snapshot = Arc<Vec<Question>>;

/// The canonical ordered question list of one form
#[derive(Debug, Clone)]
pub struct FormDefinition {
    questions: Snapshot,
}

impl FormDefinition {
    /// Build a form from caller-supplied questions, trusting their order
    pub fn new(questions: Vec<Question>) -> Self {
        Self {
            questions: Arc::new(questions),
        }
    }

    /// A form holding one default multiple-choice question
    pub fn with_default_question() -> Self {
        Self::new(vec![Question::default()])
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn snapshot(&self) -> Snapshot {
        Arc::clone(&self.questions)
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Question currently at `order`
    pub fn get(&self, order: usize) -> Option<&Question> {
        self.questions.get(order)
    }

    fn commit(&mut self, questions: Vec<Question>) {
        self.questions = Arc::new(questions);
    }

    /// Append a default question of `kind`. Always commits.
    pub fn add_question(&mut self, kind: QuestionType) -> bool {
        let mut questions = self.questions.to_vec();
        questions.push(Question::new(kind, questions.len()));
        self.commit(questions);
        true
    }

    /// Replace the question sitting at `updated.order`.
    ///
    /// Matching is positional; an `order` with no question behind it is
    /// ignored. Options are re-aligned with the (possibly new) type.
    pub fn update_question(&mut self, updated: Question) -> bool {
        let Some(current) = self.questions.get(updated.order) else {
            return false;
        };

        let mut replacement = updated;
        if current.kind.is_choice() != replacement.kind.is_choice() {
            replacement.options = replacement.kind.default_options();
        }
        replacement.normalize_options();

        let mut questions = self.questions.to_vec();
        let index = replacement.order;
        questions[index] = replacement;
        self.commit(questions);
        true
    }

    /// Remove the question at `order` and close the gap
    pub fn delete_question(&mut self, order: usize) -> bool {
        if order >= self.questions.len() {
            return false;
        }
        let mut questions = self.questions.to_vec();
        questions.remove(order);
        reindex(&mut questions);
        self.commit(questions);
        true
    }

    /// Append a copy of the question at `order` to the end of the form
    pub fn duplicate_question(&mut self, order: usize) -> bool {
        let Some(source) = self.questions.get(order) else {
            return false;
        };
        let copy = source.duplicate(self.questions.len());
        let mut questions = self.questions.to_vec();
        questions.push(copy);
        self.commit(questions);
        true
    }

    /// Move the question at `from` to position `to`
    pub fn reorder(&mut self, from: usize, to: usize) -> bool {
        match move_question(&self.questions, from, to) {
            Some(questions) => {
                self.commit(questions);
                true
            }
            None => false,
        }
    }

    /// Replace the whole sequence without any normalization
    pub fn replace(&mut self, questions: Vec<Question>) {
        self.commit(questions);
    }
}

impl Default for FormDefinition {
    fn default() -> Self {
        Self::with_default_question()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form_of(titles: &[&str]) -> FormDefinition {
        FormDefinition::new(
            titles
                .iter()
                .enumerate()
                .map(|(i, title)| Question {
                    title: title.to_string(),
                    ..Question::new(QuestionType::MultipleChoice, i)
                })
                .collect(),
        )
    }

    fn titles(form: &FormDefinition) -> Vec<String> {
        form.questions().iter().map(|q| q.title.clone()).collect()
    }

    fn orders(form: &FormDefinition) -> Vec<usize> {
        form.questions().iter().map(|q| q.order).collect()
    }

    fn assert_contiguous(form: &FormDefinition) {
        let expected: Vec<usize> = (0..form.len()).collect();
        assert_eq!(orders(form), expected);
    }

    mod add {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_add_appends_at_end() {
            let mut form = FormDefinition::default();
            assert!(form.add_question(QuestionType::Paragraph));
            assert_eq!(form.len(), 2);
            let added = form.get(1).unwrap();
            assert_eq!(added.kind, QuestionType::Paragraph);
            assert_eq!(added.order, 1);
            assert!(added.options.is_empty());
        }

        #[test]
        fn test_add_to_empty_form() {
            let mut form = FormDefinition::new(Vec::new());
            form.add_question(QuestionType::Dropdown);
            assert_eq!(form.get(0).unwrap().options.len(), 2);
            assert_contiguous(&form);
        }
    }

    mod update {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_update_replaces_at_position() {
            let mut form = form_of(&["A", "B"]);
            let mut updated = form.get(1).unwrap().clone();
            updated.title = "Renamed".to_string();
            updated.required = true;
            assert!(form.update_question(updated));
            assert_eq!(titles(&form), vec!["A", "Renamed"]);
            assert!(form.get(1).unwrap().required);
        }

        #[test]
        fn test_update_unknown_position_is_noop() {
            let mut form = form_of(&["A"]);
            let before = form.snapshot();
            let stray = Question::new(QuestionType::Date, 5);
            assert!(!form.update_question(stray));
            assert!(Arc::ptr_eq(&before, &form.snapshot()));
        }

        #[test]
        fn test_update_to_choice_seeds_options() {
            let mut form = FormDefinition::new(vec![Question::new(QuestionType::ShortAnswer, 0)]);
            let mut updated = form.get(0).unwrap().clone();
            updated.kind = QuestionType::Dropdown;
            form.update_question(updated);
            let values: Vec<_> = form.get(0).unwrap().options.iter().map(|o| o.value.clone()).collect();
            assert_eq!(values, vec!["Option 1", "Option 2"]);
        }

        #[test]
        fn test_update_away_from_choice_clears_options() {
            let mut form = form_of(&["A"]);
            let mut updated = form.get(0).unwrap().clone();
            updated.kind = QuestionType::Paragraph;
            form.update_question(updated);
            assert!(form.get(0).unwrap().options.is_empty());
        }

        #[test]
        fn test_update_with_empty_choice_options_reseeds() {
            let mut form = form_of(&["A"]);
            let mut updated = form.get(0).unwrap().clone();
            updated.options.clear();
            form.update_question(updated);
            assert_eq!(form.get(0).unwrap().options.len(), 2);
        }
    }

    mod delete {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_delete_reindexes() {
            let mut form = form_of(&["A", "B", "C"]);
            assert!(form.delete_question(1));
            assert_eq!(titles(&form), vec!["A", "C"]);
            assert_eq!(orders(&form), vec![0, 1]);
        }

        #[test]
        fn test_delete_missing_is_noop() {
            let mut form = form_of(&["A", "B"]);
            assert!(!form.delete_question(2));
            assert_eq!(form.len(), 2);
        }

        #[test]
        fn test_delete_last_question_leaves_empty_form() {
            let mut form = form_of(&["A"]);
            form.delete_question(0);
            assert!(form.is_empty());
        }
    }

    mod duplicate {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_duplicate_appends_copy() {
            let mut form = form_of(&["A", "B", "C"]);
            assert!(form.duplicate_question(1));
            assert_eq!(titles(&form), vec!["A", "B", "C", "B (Copy)"]);
            assert_eq!(form.get(3).unwrap().order, 3);
        }

        #[test]
        fn test_duplicate_options_are_deep_copied() {
            let mut form = form_of(&["A", "B", "C"]);
            form.duplicate_question(1);

            let mut copy = form.get(3).unwrap().clone();
            copy.options[0].value = "Changed".to_string();
            form.update_question(copy);

            assert_eq!(form.get(1).unwrap().options[0].value, "Option 1");
            assert_eq!(form.get(3).unwrap().options[0].value, "Changed");
        }

        #[test]
        fn test_duplicate_missing_is_noop() {
            let mut form = form_of(&["A"]);
            assert!(!form.duplicate_question(3));
            assert_eq!(form.len(), 1);
        }
    }

    mod reorder {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_reorder_moves_and_reindexes() {
            let mut form = form_of(&["A", "B", "C", "D"]);
            assert!(form.reorder(0, 2));
            assert_eq!(titles(&form), vec!["B", "C", "A", "D"]);
            assert_contiguous(&form);
        }

        #[test]
        fn test_reorder_same_position_keeps_snapshot() {
            let mut form = form_of(&["A", "B", "C"]);
            let before = form.snapshot();
            assert!(!form.reorder(1, 1));
            assert!(Arc::ptr_eq(&before, &form.snapshot()));
            assert_eq!(titles(&form), vec!["A", "B", "C"]);
        }
    }

    mod snapshots {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_each_commit_changes_identity() {
            let mut form = FormDefinition::default();
            let first = form.snapshot();
            form.add_question(QuestionType::Date);
            let second = form.snapshot();
            assert!(!Arc::ptr_eq(&first, &second));
            assert_eq!(first.len(), 1);
            assert_eq!(second.len(), 2);
        }

        /// Small deterministic generator so operation sequences are repeatable
        struct Lcg(u64);

        impl Lcg {
            fn next(&mut self, bound: usize) -> usize {
                self.0 = self
                    .0
                    .wrapping_mul(6364136223846793005)
                    .wrapping_add(1442695040888963407);
                ((self.0 >> 33) as usize) % bound.max(1)
            }
        }

        #[test]
        fn test_order_stays_contiguous_across_generated_sequences() {
            for seed in 0..200u64 {
                let mut rng = Lcg(seed);
                let mut form = FormDefinition::default();

                for step in 0..60 {
                    // Positions may point past the end so stale ones get exercised too
                    let position = rng.next(form.len() + 2);
                    match rng.next(6) {
                        0 => {
                            let kind = QuestionType::ALL[rng.next(QuestionType::ALL.len())];
                            form.add_question(kind);
                        }
                        1 => {
                            form.delete_question(position);
                        }
                        2 => {
                            form.duplicate_question(position);
                        }
                        3 => {
                            let to = rng.next(form.len() + 1);
                            form.reorder(position, to);
                        }
                        4 => {
                            if let Some(mut question) = form.get(position).cloned() {
                                question.title = format!("edit {step}");
                                question.kind = QuestionType::ALL[rng.next(QuestionType::ALL.len())];
                                form.update_question(question);
                            }
                        }
                        _ => {
                            if let Some(mut question) = form.get(position).cloned() {
                                question.required = !question.required;
                                question.options.clear();
                                form.update_question(question);
                            }
                        }
                    }

                    assert_contiguous(&form);
                    for question in form.questions() {
                        if question.kind.is_choice() {
                            assert!(!question.options.is_empty(), "seed {seed} step {step}");
                        } else {
                            assert!(question.options.is_empty(), "seed {seed} step {step}");
                        }
                    }
                }
            }
        }

        #[test]
        fn test_order_stays_contiguous_across_mixed_operations() {
            let mut form = FormDefinition::default();
            form.add_question(QuestionType::Checkbox);
            assert_contiguous(&form);
            form.add_question(QuestionType::Date);
            assert_contiguous(&form);
            form.duplicate_question(0);
            assert_contiguous(&form);
            form.reorder(3, 0);
            assert_contiguous(&form);
            form.delete_question(2);
            assert_contiguous(&form);
            form.reorder(0, 2);
            assert_contiguous(&form);
            form.delete_question(0);
            assert_contiguous(&form);
            assert_eq!(form.len(), 2);
        }
    }
}
