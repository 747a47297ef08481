//! Award configuration records

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::form::Question;

/// Errors raised while validating or persisting award configuration
#[derive(Debug, Error)]
pub enum AwardError {
    #[error("Invalid award metadata: {0}")]
    InvalidMeta(String),

    #[error("Failed to access award file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed award file: {0}")]
    Json(#[from] serde_json::Error),
}

/// Category-specific award settings, keyed by award category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "category", rename_all = "snake_case")]
pub enum AwardMeta {
    BestTeacher {
        min_years_of_service: u32,
        levels: Vec<String>,
    },
    BestInstitution {
        requires_accreditation: bool,
        min_established_years: u32,
    },
    ResearchExcellence {
        requires_guide: bool,
        max_publications: u32,
    },
    StudentScholarship {
        max_age: u32,
        requires_membership: bool,
    },
}

impl AwardMeta {
    pub fn category_label(&self) -> &'static str {
        match self {
            Self::BestTeacher { .. } => "Best Teacher",
            Self::BestInstitution { .. } => "Best Institution",
            Self::ResearchExcellence { .. } => "Research Excellence",
            Self::StudentScholarship { .. } => "Student Scholarship",
        }
    }

    /// Check the shape required by the category
    pub fn validate(&self) -> Result<(), AwardError> {
        match self {
            Self::BestTeacher { levels, .. } => {
                if levels.is_empty() {
                    return Err(AwardError::InvalidMeta(
                        "best_teacher needs at least one level".to_string(),
                    ));
                }
                if levels.iter().any(|l| l.trim().is_empty()) {
                    return Err(AwardError::InvalidMeta(
                        "best_teacher levels must not be blank".to_string(),
                    ));
                }
            }
            Self::ResearchExcellence {
                max_publications, ..
            } => {
                if *max_publications == 0 {
                    return Err(AwardError::InvalidMeta(
                        "research_excellence must accept at least one publication".to_string(),
                    ));
                }
            }
            Self::StudentScholarship { max_age, .. } => {
                if !(10..=40).contains(max_age) {
                    return Err(AwardError::InvalidMeta(format!(
                        "student_scholarship max_age {max_age} is outside 10..=40"
                    )));
                }
            }
            Self::BestInstitution { .. } => {}
        }
        Ok(())
    }
}

impl Default for AwardMeta {
    fn default() -> Self {
        Self::BestTeacher {
            min_years_of_service: 5,
            levels: vec!["School".to_string(), "College".to_string()],
        }
    }
}

/// One award and the application form attached to it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AwardConfig {
    pub id: Uuid,
    pub title: String,
    pub meta: AwardMeta,
    #[serde(default)]
    pub questions: Vec<Question>,
    pub updated_at: DateTime<Utc>,
}

impl AwardConfig {
    pub fn new(title: impl Into<String>, meta: AwardMeta) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            meta,
            questions: Vec::new(),
            updated_at: Utc::now(),
        }
    }

    /// Store a new form snapshot and bump `updated_at`
    pub fn apply_questions(&mut self, questions: &[Question]) {
        self.questions = questions.to_vec();
        self.updated_at = Utc::now();
    }

    pub fn validate(&self) -> Result<(), AwardError> {
        if self.title.trim().is_empty() {
            return Err(AwardError::InvalidMeta("award title is blank".to_string()));
        }
        self.meta.validate()
    }
}

impl Default for AwardConfig {
    fn default() -> Self {
        Self::new("Untitled Award", AwardMeta::default())
    }
}
