//! Question value objects

use serde::{Deserialize, Serialize};

/// Title given to every freshly created question
pub const DEFAULT_TITLE: &str = "Untitled Question";

/// Suffix appended to the title of a duplicated question
pub const COPY_SUFFIX: &str = " (Copy)";

/// Kind of answer a question collects.
///
/// Serialized in snake_case so the wire shape matches what the award
/// configuration stores (`"multiple_choice"`, `"date_range"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionType {
    #[default]
    MultipleChoice,
    Checkbox,
    Dropdown,
    ShortAnswer,
    Paragraph,
    FileUpload,
    Date,
    DateRange,
    NomineeDetails,
    GuideDetails,
    InstitutionDetails,
    Signature,
    MembershipNumber,
}

impl QuestionType {
    /// Every type, in the order the type picker lists them
    pub const ALL: [QuestionType; 13] = [
        Self::MultipleChoice,
        Self::Checkbox,
        Self::Dropdown,
        Self::ShortAnswer,
        Self::Paragraph,
        Self::FileUpload,
        Self::Date,
        Self::DateRange,
        Self::NomineeDetails,
        Self::GuideDetails,
        Self::InstitutionDetails,
        Self::Signature,
        Self::MembershipNumber,
    ];

    /// Whether respondents pick from an option list
    pub fn is_choice(&self) -> bool {
        matches!(self, Self::MultipleChoice | Self::Checkbox | Self::Dropdown)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::MultipleChoice => "Multiple choice",
            Self::Checkbox => "Checkboxes",
            Self::Dropdown => "Dropdown",
            Self::ShortAnswer => "Short answer",
            Self::Paragraph => "Paragraph",
            Self::FileUpload => "File upload",
            Self::Date => "Date",
            Self::DateRange => "Date range",
            Self::NomineeDetails => "Nominee details",
            Self::GuideDetails => "Guide details",
            Self::InstitutionDetails => "Institution details",
            Self::Signature => "Signature",
            Self::MembershipNumber => "Membership number",
        }
    }

    /// Options a new question of this type starts with
    pub fn default_options(&self) -> Vec<QuestionOption> {
        if self.is_choice() {
            vec![QuestionOption::numbered(1), QuestionOption::numbered(2)]
        } else {
            Vec::new()
        }
    }
}

/// One selectable option of a choice question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionOption {
    pub value: String,
}

impl QuestionOption {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }

    /// Placeholder option labelled "Option {n}"
    pub fn numbered(n: usize) -> Self {
        Self::new(format!("Option {n}"))
    }
}

/// A single form question.
///
/// `order` is the question's zero-based position in its form and doubles as
/// its identity key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    #[serde(rename = "type")]
    pub kind: QuestionType,
    pub title: String,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub options: Vec<QuestionOption>,
    pub order: usize,
}

impl Question {
    /// Create a question with the default title and type-appropriate options
    pub fn new(kind: QuestionType, order: usize) -> Self {
        Self {
            kind,
            title: DEFAULT_TITLE.to_string(),
            required: false,
            options: kind.default_options(),
            order,
        }
    }

    /// Clone this question as a titled copy placed at `order`
    pub fn duplicate(&self, order: usize) -> Self {
        Self {
            kind: self.kind,
            title: format!("{}{}", self.title, COPY_SUFFIX),
            required: self.required,
            options: self.options.clone(),
            order,
        }
    }

    /// Whether an option can be removed without emptying a choice list
    pub fn can_remove_option(&self) -> bool {
        self.options.len() > 1
    }

    /// Bring `options` in line with the type.
    ///
    /// Choice types never end up without options; every other type carries
    /// none.
    pub fn normalize_options(&mut self) {
        if !self.kind.is_choice() {
            self.options.clear();
        } else if self.options.is_empty() {
            self.options = self.kind.default_options();
        }
    }

    /// Switch type, seeding or clearing options when the choice-ness flips
    pub fn set_kind(&mut self, kind: QuestionType) {
        let was_choice = self.kind.is_choice();
        self.kind = kind;
        if was_choice != kind.is_choice() {
            self.options = kind.default_options();
        }
        self.normalize_options();
    }

    /// Append a placeholder option numbered after the existing ones
    pub fn push_option(&mut self) {
        let next = self.options.len() + 1;
        self.options.push(QuestionOption::numbered(next));
    }

    /// Remove the option at `index`, refusing to drop the last one.
    ///
    /// Returns whether an option was removed.
    pub fn remove_option(&mut self, index: usize) -> bool {
        if !self.can_remove_option() || index >= self.options.len() {
            return false;
        }
        self.options.remove(index);
        true
    }
}

impl Default for Question {
    fn default() -> Self {
        Self::new(QuestionType::default(), 0)
    }
}
