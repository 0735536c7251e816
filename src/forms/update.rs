//! Update form: fetch the full record for a summary, then edit it.
//!
//! Phases: `Fetching` until `load` runs, then `Editing` until a successful submit moves it
//! to `Saved`. A failed fetch still moves to `Editing`, with only the summary's fields known.
//! A successful submit replaces the draft with the stored record, so local edits are gone.

use tracing::{info, instrument, warn};

use crate::domain::{Question, QuestionSummary};
use crate::forms::draft::QuestionDraft;
use crate::notice::Notice;
use crate::session::SessionStore;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
  Fetching,
  Editing,
  Saved,
}

#[derive(Clone, Debug)]
pub struct UpdateForm {
  summary: QuestionSummary,
  phase: Phase,
  pub draft: QuestionDraft,
  loading: bool,
  saved: Option<Question>,
}

impl UpdateForm {
  pub fn new(summary: QuestionSummary) -> Self {
    let draft = QuestionDraft::from(summary.to_question());
    Self { summary, phase: Phase::Fetching, draft, loading: false, saved: None }
  }

  pub fn phase(&self) -> Phase {
    self.phase
  }

  pub fn is_loading(&self) -> bool {
    self.loading
  }

  pub fn summary(&self) -> &QuestionSummary {
    &self.summary
  }

  /// Record echoed by the backend after a successful update, if it sent one.
  pub fn saved(&self) -> Option<&Question> {
    self.saved.as_ref()
  }

  /// Fetch the full record. Returns None without a session (phase unchanged). A fetch
  /// failure falls back to the summary's fields and returns an error notice.
  #[instrument(level = "info", skip_all, fields(question_id = self.summary.question_id))]
  pub async fn load(&mut self, session: &SessionStore) -> Option<Notice> {
    if self.phase != Phase::Fetching {
      return None;
    }
    let token = session.token().await?;

    self.loading = true;
    let result = session.api().fetch_by_id(&token, self.summary.question_id).await;
    self.loading = false;

    self.phase = Phase::Editing;
    match result {
      Ok(question) => {
        info!("Loaded full question for editing");
        self.draft = QuestionDraft::from(question);
        None
      }
      Err(e) => {
        warn!(error = %e, "Fetch failed; editing from summary only");
        self.draft = QuestionDraft::from(self.summary.to_question());
        Some(Notice::error(e.to_string()))
      }
    }
  }

  /// Filter the draft and send it. The human-facing id always comes from the summary.
  /// Returns None without a session or outside the editing phase.
  #[instrument(level = "info", skip_all, fields(question_id = self.summary.question_id))]
  pub async fn submit(&mut self, session: &SessionStore) -> Option<Notice> {
    if self.phase != Phase::Editing {
      return None;
    }
    let token = session.token().await?;

    let mut question = self.draft.to_submission();
    question.question_id = Some(self.summary.question_id);

    self.loading = true;
    let result = session.api().update(&token, &question).await;
    self.loading = false;

    match result {
      Ok(saved) => {
        self.draft = QuestionDraft::from(saved.clone().unwrap_or(question));
        self.saved = saved;
        self.phase = Phase::Saved;
        Some(Notice::success("Success", "Question updated successfully!"))
      }
      Err(e) => {
        warn!(error = %e, "Update failed; draft kept");
        Some(Notice::error(e.to_string()))
      }
    }
  }
}
