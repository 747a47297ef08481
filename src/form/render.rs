//! Edit and preview projections of a form
//!
//! These types describe *what* each question looks like in either mode; the
//! terminal UI turns them into widgets.

use super::question::{Question, QuestionType};
use crate::upload::MediaType;

/// How options are marked in the editable option list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionMarker {
    Radio,
    Checkbox,
    Numbered,
}

impl OptionMarker {
    /// Marker text for the option at `index`
    pub fn symbol(&self, index: usize) -> String {
        match self {
            Self::Radio => "○".to_string(),
            Self::Checkbox => "☐".to_string(),
            Self::Numbered => format!("{}.", index + 1),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditAffordance {
    OptionList {
        marker: OptionMarker,
        options: Vec<String>,
    },
    TitleOnly,
}

/// One editable question card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditCard {
    pub order: usize,
    pub title: String,
    pub required: bool,
    pub type_label: &'static str,
    pub affordance: EditAffordance,
    /// Option removal is offered only while more than one option remains
    pub can_remove_option: bool,
}

/// Read-only input control shown to respondents
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreviewControl {
    RadioGroup(Vec<String>),
    Checkboxes(Vec<String>),
    Select(Vec<String>),
    SingleLineText,
    MultiLineText,
    FilePicker { accept: Vec<MediaType> },
    DatePicker,
    DateRange,
    FieldGroup(Vec<&'static str>),
    SignaturePicker,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewItem {
    pub order: usize,
    pub title: String,
    pub required: bool,
    pub control: PreviewControl,
}

fn option_values(question: &Question) -> Vec<String> {
    question.options.iter().map(|o| o.value.clone()).collect()
}

/// Editable card for one question
pub fn edit_card(question: &Question) -> EditCard {
    let marker = match question.kind {
        QuestionType::MultipleChoice => Some(OptionMarker::Radio),
        QuestionType::Checkbox => Some(OptionMarker::Checkbox),
        QuestionType::Dropdown => Some(OptionMarker::Numbered),
        _ => None,
    };
    let affordance = match marker {
        Some(marker) => EditAffordance::OptionList {
            marker,
            options: option_values(question),
        },
        None => EditAffordance::TitleOnly,
    };

    EditCard {
        order: question.order,
        title: question.title.clone(),
        required: question.required,
        type_label: question.kind.label(),
        affordance,
        can_remove_option: question.kind.is_choice() && question.can_remove_option(),
    }
}

/// One card per question, in storage order
pub fn edit_cards(questions: &[Question]) -> Vec<EditCard> {
    questions.iter().map(edit_card).collect()
}

/// Respondent-facing control for one question
pub fn preview_control(question: &Question, accept: &[MediaType]) -> PreviewControl {
    match question.kind {
        QuestionType::MultipleChoice => PreviewControl::RadioGroup(option_values(question)),
        QuestionType::Checkbox => PreviewControl::Checkboxes(option_values(question)),
        QuestionType::Dropdown => PreviewControl::Select(option_values(question)),
        QuestionType::ShortAnswer | QuestionType::MembershipNumber => {
            PreviewControl::SingleLineText
        }
        QuestionType::Paragraph => PreviewControl::MultiLineText,
        QuestionType::FileUpload => PreviewControl::FilePicker {
            accept: accept.to_vec(),
        },
        QuestionType::Date => PreviewControl::DatePicker,
        QuestionType::DateRange => PreviewControl::DateRange,
        QuestionType::NomineeDetails => {
            PreviewControl::FieldGroup(vec!["Full name", "Designation", "Email", "Phone"])
        }
        QuestionType::GuideDetails => {
            PreviewControl::FieldGroup(vec!["Guide name", "Department", "Email"])
        }
        QuestionType::InstitutionDetails => {
            PreviewControl::FieldGroup(vec!["Institution", "Address", "Head of institution"])
        }
        QuestionType::Signature => PreviewControl::SignaturePicker,
    }
}

/// Preview of the whole form, sorted by `order` regardless of storage order
pub fn preview_items(questions: &[Question], accept: &[MediaType]) -> Vec<PreviewItem> {
    let mut sorted: Vec<&Question> = questions.iter().collect();
    sorted.sort_by_key(|q| q.order);
    sorted
        .into_iter()
        .map(|q| PreviewItem {
            order: q.order,
            title: q.title.clone(),
            required: q.required,
            control: preview_control(q, accept),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(kind: QuestionType, order: usize, title: &str) -> Question {
        Question {
            title: title.to_string(),
            ..Question::new(kind, order)
        }
    }

    mod edit {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_choice_types_get_option_lists() {
            let card = edit_card(&question(QuestionType::MultipleChoice, 0, "Q"));
            assert_eq!(
                card.affordance,
                EditAffordance::OptionList {
                    marker: OptionMarker::Radio,
                    options: vec!["Option 1".to_string(), "Option 2".to_string()],
                }
            );
            assert!(card.can_remove_option);

            let card = edit_card(&question(QuestionType::Checkbox, 0, "Q"));
            assert!(matches!(
                card.affordance,
                EditAffordance::OptionList {
                    marker: OptionMarker::Checkbox,
                    ..
                }
            ));

            let card = edit_card(&question(QuestionType::Dropdown, 0, "Q"));
            assert!(matches!(
                card.affordance,
                EditAffordance::OptionList {
                    marker: OptionMarker::Numbered,
                    ..
                }
            ));
        }

        #[test]
        fn test_free_text_types_are_title_only() {
            for kind in [
                QuestionType::ShortAnswer,
                QuestionType::Paragraph,
                QuestionType::FileUpload,
                QuestionType::Date,
                QuestionType::DateRange,
                QuestionType::Signature,
            ] {
                let card = edit_card(&question(kind, 0, "Q"));
                assert_eq!(card.affordance, EditAffordance::TitleOnly);
                assert!(!card.can_remove_option);
            }
        }

        #[test]
        fn test_single_option_cannot_be_removed() {
            let mut q = question(QuestionType::Checkbox, 0, "Q");
            q.options.truncate(1);
            assert!(!edit_card(&q).can_remove_option);
        }

        #[test]
        fn test_cards_keep_storage_order() {
            let questions = vec![
                question(QuestionType::Date, 1, "Second"),
                question(QuestionType::Date, 0, "First"),
            ];
            let titles: Vec<_> = edit_cards(&questions).into_iter().map(|c| c.title).collect();
            assert_eq!(titles, vec!["Second", "First"]);
        }

        #[test]
        fn test_numbered_marker() {
            assert_eq!(OptionMarker::Numbered.symbol(2), "3.");
            assert_eq!(OptionMarker::Radio.symbol(2), "○");
        }
    }

    mod preview {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_sorts_by_order() {
            let questions = vec![
                question(QuestionType::ShortAnswer, 1, "Second"),
                question(QuestionType::ShortAnswer, 0, "First"),
            ];
            let items = preview_items(&questions, &[]);
            let orders: Vec<_> = items.iter().map(|i| i.order).collect();
            assert_eq!(orders, vec![0, 1]);
            assert_eq!(items[0].title, "First");
        }

        #[test]
        fn test_dispatch_table() {
            let accept = [MediaType::Pdf];
            let control = |kind| preview_control(&question(kind, 0, "Q"), &accept);

            assert!(matches!(control(QuestionType::MultipleChoice), PreviewControl::RadioGroup(o) if o.len() == 2));
            assert!(matches!(control(QuestionType::Checkbox), PreviewControl::Checkboxes(_)));
            assert!(matches!(control(QuestionType::Dropdown), PreviewControl::Select(_)));
            assert_eq!(control(QuestionType::ShortAnswer), PreviewControl::SingleLineText);
            assert_eq!(control(QuestionType::Paragraph), PreviewControl::MultiLineText);
            assert_eq!(
                control(QuestionType::FileUpload),
                PreviewControl::FilePicker {
                    accept: vec![MediaType::Pdf]
                }
            );
            assert_eq!(control(QuestionType::Date), PreviewControl::DatePicker);
            assert_eq!(control(QuestionType::DateRange), PreviewControl::DateRange);
            assert!(matches!(control(QuestionType::NomineeDetails), PreviewControl::FieldGroup(_)));
            assert_eq!(control(QuestionType::Signature), PreviewControl::SignaturePicker);
        }

        #[test]
        fn test_preview_does_not_mutate() {
            let questions = vec![
                question(QuestionType::Date, 1, "B"),
                question(QuestionType::Date, 0, "A"),
            ];
            let before = questions.clone();
            let _ = preview_items(&questions, &[]);
            assert_eq!(questions, before);
        }
    }
}
