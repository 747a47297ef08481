//! Applicant responses to an award form

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::form::{Question, QuestionType};
use crate::upload::UploadedFile;

/// Value given for one question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum AnswerValue {
    Text(String),
    Choice(String),
    Choices(Vec<String>),
    Date(NaiveDate),
    DateRange { from: NaiveDate, to: NaiveDate },
    File(Uuid),
}

impl AnswerValue {
    /// Whether the value counts as answered
    pub fn is_filled(&self) -> bool {
        match self {
            Self::Text(s) | Self::Choice(s) => !s.trim().is_empty(),
            Self::Choices(values) => !values.is_empty(),
            Self::Date(_) | Self::DateRange { .. } | Self::File(_) => true,
        }
    }
}

/// Answers of one application, keyed by question order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationResponse {
    pub answers: BTreeMap<usize, AnswerValue>,
}

impl ApplicationResponse {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, order: usize, value: AnswerValue) {
        self.answers.insert(order, value);
    }

    pub fn get(&self, order: usize) -> Option<&AnswerValue> {
        self.answers.get(&order)
    }

    pub fn clear(&mut self, order: usize) {
        self.answers.remove(&order);
    }

    /// Store an accepted upload's identifier as the answer to a file question.
    ///
    /// Returns false when `question` does not take files.
    pub fn record_upload(&mut self, question: &Question, file: &UploadedFile) -> bool {
        if !matches!(
            question.kind,
            QuestionType::FileUpload | QuestionType::Signature
        ) {
            return false;
        }
        self.set(question.order, AnswerValue::File(file.id));
        true
    }

    /// Orders of required questions still lacking an answer
    pub fn missing_required(&self, questions: &[Question]) -> Vec<usize> {
        questions
            .iter()
            .filter(|q| q.required)
            .filter(|q| !self.get(q.order).is_some_and(AnswerValue::is_filled))
            .map(|q| q.order)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::upload::MediaType;

    fn uploaded() -> UploadedFile {
        UploadedFile {
            id: Uuid::new_v4(),
            filename: "cv.pdf".to_string(),
            size: 42,
            media_type: MediaType::Pdf,
        }
    }

    fn required(kind: QuestionType, order: usize) -> Question {
        Question {
            required: true,
            ..Question::new(kind, order)
        }
    }

    #[test]
    fn test_record_upload_stores_identifier() {
        let question = Question::new(QuestionType::FileUpload, 2);
        let file = uploaded();
        let mut response = ApplicationResponse::new();
        assert!(response.record_upload(&question, &file));
        assert_eq!(response.get(2), Some(&AnswerValue::File(file.id)));
    }

    #[test]
    fn test_record_upload_rejects_text_question() {
        let question = Question::new(QuestionType::ShortAnswer, 0);
        let mut response = ApplicationResponse::new();
        assert!(!response.record_upload(&question, &uploaded()));
        assert!(response.get(0).is_none());
    }

    #[test]
    fn test_missing_required() {
        let questions = vec![
            required(QuestionType::ShortAnswer, 0),
            Question::new(QuestionType::Paragraph, 1),
            required(QuestionType::Checkbox, 2),
            required(QuestionType::Date, 3),
        ];
        let mut response = ApplicationResponse::new();
        response.set(0, AnswerValue::Text("   ".to_string()));
        response.set(2, AnswerValue::Choices(vec!["Option 1".to_string()]));
        response.set(3, AnswerValue::Date(NaiveDate::from_ymd_opt(2024, 5, 1).unwrap()));

        assert_eq!(response.missing_required(&questions), vec![0]);
    }

    #[test]
    fn test_clear_answer() {
        let mut response = ApplicationResponse::new();
        response.set(1, AnswerValue::Choice("Yes".to_string()));
        response.clear(1);
        assert!(response.get(1).is_none());
    }

    #[test]
    fn test_serialized_shape() {
        let mut response = ApplicationResponse::new();
        response.set(
            0,
            AnswerValue::DateRange {
                from: NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
                to: NaiveDate::from_ymd_opt(2023, 12, 31).unwrap(),
            },
        );
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "answers": {
                    "0": { "kind": "date_range", "value": { "from": "2020-01-01", "to": "2023-12-31" } }
                }
            })
        );
    }
}
