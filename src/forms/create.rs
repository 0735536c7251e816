//! New-question form.

use tracing::{instrument, warn};

use crate::forms::draft::QuestionDraft;
use crate::notice::Notice;
use crate::session::SessionStore;

#[derive(Clone, Debug, Default)]
pub struct CreateForm {
  pub draft: QuestionDraft,
  loading: bool,
}

impl CreateForm {
  pub fn new() -> Self {
    Self::default()
  }

  /// Start from an existing draft (e.g. one loaded from a file).
  pub fn with_draft(draft: QuestionDraft) -> Self {
    Self { draft, loading: false }
  }

  pub fn is_loading(&self) -> bool {
    self.loading
  }

  /// Filter the draft and send it. Returns None without a session. On success the
  /// draft is reset to blank; on failure it is left intact for resubmission.
  #[instrument(level = "info", skip_all, fields(name = %self.draft.question_name))]
  pub async fn submit(&mut self, session: &SessionStore) -> Option<Notice> {
    let token = session.token().await?;
    let question = self.draft.to_submission();

    self.loading = true;
    let result = session.api().create(&token, &question).await;
    self.loading = false;

    match result {
      Ok(true) => {
        self.draft = QuestionDraft::default();
        Some(Notice::success("Success", "Question added successfully!"))
      }
      Ok(false) => Some(Notice::error("Failed to add question. Please try again.")),
      Err(e) => {
        warn!(error = %e, "Create failed");
        Some(Notice::error("Failed to add question. Please try again."))
      }
    }
  }
}
