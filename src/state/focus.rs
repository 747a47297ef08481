//! Keyboard focus inside the question card list

/// Editable part of a question card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CardField {
    #[default]
    Title,
    Required,
    Option(usize),
}

impl CardField {
    pub fn is_text(&self) -> bool {
        matches!(self, Self::Title | Self::Option(_))
    }

    /// Position within a card offering `option_count` options
    fn index(&self, option_count: usize) -> usize {
        match self {
            Self::Title => 0,
            Self::Required => 1,
            Self::Option(i) => 2 + (*i).min(option_count.saturating_sub(1)),
        }
    }

    fn from_index(index: usize) -> Self {
        match index {
            0 => Self::Title,
            1 => Self::Required,
            n => Self::Option(n - 2),
        }
    }
}

/// Which question card is selected and which of its fields has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CardFocus {
    pub question: usize,
    pub field: CardField,
}

impl CardFocus {
    /// Move to the next question card
    pub fn move_down(&mut self, question_count: usize) {
        if question_count > 0 && self.question < question_count - 1 {
            self.question += 1;
            self.field = CardField::Title;
        }
    }

    /// Move to the previous question card
    pub fn move_up(&mut self) {
        if self.question > 0 {
            self.question -= 1;
            self.field = CardField::Title;
        }
    }

    pub fn select(&mut self, question: usize) {
        if self.question != question {
            self.question = question;
            self.field = CardField::Title;
        }
    }

    /// Cycle forward through the fields of a card
    pub fn next_field(&mut self, option_count: usize) {
        let count = 2 + option_count;
        let current = self.field.index(option_count);
        self.field = CardField::from_index((current + 1) % count);
    }

    /// Cycle backward through the fields of a card
    pub fn prev_field(&mut self, option_count: usize) {
        let count = 2 + option_count;
        let current = self.field.index(option_count);
        let prev = if current == 0 { count - 1 } else { current - 1 };
        self.field = CardField::from_index(prev);
    }

    /// Keep focus pointing at something that exists after the form changed
    pub fn clamp(&mut self, question_count: usize, option_count: usize) {
        if question_count == 0 {
            *self = Self::default();
            return;
        }
        if self.question >= question_count {
            self.question = question_count - 1;
            self.field = CardField::Title;
        }
        if let CardField::Option(i) = self.field {
            if option_count == 0 {
                self.field = CardField::Title;
            } else if i >= option_count {
                self.field = CardField::Option(option_count - 1);
            }
        }
    }
}
