//! Single-element move over an ordered question list

use super::question::Question;

/// Overwrite every question's `order` with its index
pub fn reindex(questions: &mut [Question]) {
    for (index, question) in questions.iter_mut().enumerate() {
        question.order = index;
    }
}

/// Put externally supplied questions into storage order.
///
/// Questions are stably sorted by their `order` and then reindexed, so
/// gaps and duplicates collapse into `0..n-1` while the display order the
/// caller intended is kept.
pub fn normalize(mut questions: Vec<Question>) -> Vec<Question> {
    questions.sort_by_key(|q| q.order);
    reindex(&mut questions);
    questions
}

/// Move the question at `from` so that it ends up at `to`.
///
/// Splice semantics: the element is removed, then inserted at `to` in the
/// remaining sequence; every other element keeps its relative order.
/// Returns `None` when `from == to` or either position is out of range.
pub fn move_question(questions: &[Question], from: usize, to: usize) -> Option<Vec<Question>> {
    let len = questions.len();
    if from == to || from >= len || to >= len {
        return None;
    }

    let mut moved = questions.to_vec();
    let question = moved.remove(from);
    moved.insert(to, question);
    reindex(&mut moved);
    Some(moved)
}
