//! Domain models: the canonical question record, its summary projection, and the session.
//!
//! These are the shapes every other module works with. The backend's wire quirks live in
//! `protocol` and never leak here.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// How hard a question is.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Difficulty {
  #[default]
  Easy,
  Medium,
  Hard,
}

impl Difficulty {
  pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

  pub fn as_str(&self) -> &'static str {
    match self {
      Difficulty::Easy => "EASY",
      Difficulty::Medium => "MEDIUM",
      Difficulty::Hard => "HARD",
    }
  }
}

impl fmt::Display for Difficulty {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl FromStr for Difficulty {
  type Err = String;

  /// Exact match on the wire spelling.
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "EASY" => Ok(Difficulty::Easy),
      "MEDIUM" => Ok(Difficulty::Medium),
      "HARD" => Ok(Difficulty::Hard),
      other => Err(format!("unknown difficulty: {other}")),
    }
  }
}

/// Where a question was taken from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuestionSource {
  #[default]
  LeetCode,
  CodeForces,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestCase {
  pub input: String,
  pub output: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub explanation: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Solution {
  pub name: String,
  pub explanation: String,
  pub example: String,
  pub code: String,
}

/// Canonical question record.
///
/// `id` is the storage identifier assigned by the backend; `question_id` is the
/// human-facing number and never changes once assigned.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub id: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub question_id: Option<i64>,
  #[serde(default)]
  pub question_name: String,
  #[serde(default)]
  pub question_description: String,
  #[serde(default)]
  pub constraints: Vec<String>,
  #[serde(default)]
  pub sample_test_cases: Vec<TestCase>,
  #[serde(default)]
  pub actual_test_cases: Vec<TestCase>,
  #[serde(default)]
  pub topics: Vec<String>,
  #[serde(default)]
  pub question_difficulty: Difficulty,
  #[serde(default)]
  pub question_source: QuestionSource,
  #[serde(default)]
  pub question_solutions: Vec<Solution>,
}

/// Reduced projection served by the list endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionSummary {
  pub question_id: i64,
  pub question_name: String,
  pub question_difficulty: Difficulty,
  #[serde(default)]
  pub topics: Vec<String>,
}

impl QuestionSummary {
  /// A question that only knows what the summary knows. Description, test cases and
  /// solutions stay blank.
  pub fn to_question(&self) -> Question {
    Question {
      question_id: Some(self.question_id),
      question_name: self.question_name.clone(),
      question_difficulty: self.question_difficulty,
      topics: self.topics.clone(),
      ..Question::default()
    }
  }
}

/// Authenticated session: bearer token plus the role the backend granted.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
  pub jwt: String,
  pub role: String,
}

impl fmt::Debug for Session {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Session")
      .field("jwt", &"<redacted>")
      .field("role", &self.role)
      .finish()
  }
}
