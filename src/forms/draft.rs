//! Editable draft of a question.

use crate::collection::EditableList;
use crate::domain::{Difficulty, Question, QuestionSource, Solution, TestCase};
use crate::util::split_csv;

/// Rows every array field keeps visible.
pub const MIN_ROWS: usize = 1;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionDraft {
  pub id: Option<String>,
  pub question_id: Option<i64>,
  pub question_name: String,
  pub question_description: String,
  pub constraints: EditableList<String>,
  pub sample_test_cases: EditableList<TestCase>,
  pub actual_test_cases: EditableList<TestCase>,
  pub topics: EditableList<String>,
  pub question_difficulty: Difficulty,
  pub question_source: QuestionSource,
  pub question_solutions: EditableList<Solution>,
}

impl Default for QuestionDraft {
  /// Blank create form: one empty row per list, EASY, LeetCode.
  fn default() -> Self {
    Self {
      id: None,
      question_id: None,
      question_name: String::new(),
      question_description: String::new(),
      constraints: EditableList::new(MIN_ROWS),
      sample_test_cases: EditableList::new(MIN_ROWS),
      actual_test_cases: EditableList::new(MIN_ROWS),
      topics: EditableList::new(MIN_ROWS),
      question_difficulty: Difficulty::default(),
      question_source: QuestionSource::default(),
      question_solutions: EditableList::new(MIN_ROWS),
    }
  }
}

impl From<Question> for QuestionDraft {
  fn from(q: Question) -> Self {
    Self {
      id: q.id,
      question_id: q.question_id,
      question_name: q.question_name,
      question_description: q.question_description,
      constraints: EditableList::from_items(q.constraints, MIN_ROWS),
      sample_test_cases: EditableList::from_items(q.sample_test_cases, MIN_ROWS),
      actual_test_cases: EditableList::from_items(q.actual_test_cases, MIN_ROWS),
      topics: EditableList::from_items(q.topics, MIN_ROWS),
      question_difficulty: q.question_difficulty,
      question_source: q.question_source,
      question_solutions: EditableList::from_items(q.question_solutions, MIN_ROWS),
    }
  }
}

impl QuestionDraft {
  /// Replace topics from a comma-separated string.
  pub fn set_topics_csv(&mut self, csv: &str) {
    self.topics = EditableList::from_items(split_csv(csv), MIN_ROWS);
  }

  /// The question to send: incomplete rows are dropped from every list.
  pub fn to_submission(&self) -> Question {
    Question {
      id: self.id.clone().filter(|id| !id.trim().is_empty()),
      question_id: self.question_id,
      question_name: self.question_name.clone(),
      question_description: self.question_description.clone(),
      constraints: self.constraints.completed(),
      sample_test_cases: self.sample_test_cases.completed(),
      actual_test_cases: self.actual_test_cases.completed(),
      topics: self.topics.completed(),
      question_difficulty: self.question_difficulty,
      question_source: self.question_source,
      question_solutions: self.question_solutions.completed(),
    }
  }
}
