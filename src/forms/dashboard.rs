//! Summary list with a search box and a difficulty filter.
//!
//! The filtered view is recomputed whenever the summaries, the search term or the filter
//! change. A summary is shown when the term is a case-insensitive substring of its name
//! or of any topic, AND the filter is `all` or equals its difficulty.

use std::fmt;
use std::str::FromStr;

use tracing::{info, instrument, warn};

use crate::domain::{Difficulty, QuestionSummary};
use crate::forms::update::UpdateForm;
use crate::notice::Notice;
use crate::session::SessionStore;
use crate::util::contains_ci;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DifficultyFilter {
    #[default]
    All,
    Only(Difficulty),
}

impl DifficultyFilter {
    pub fn admits(&self, difficulty: Difficulty) -> bool {
        match self {
            DifficultyFilter::All => true,
            DifficultyFilter::Only(d) => *d == difficulty,
        }
    }
}

impl FromStr for DifficultyFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "all" {
            return Ok(DifficultyFilter::All);
        }
        s.parse::<Difficulty>().map(DifficultyFilter::Only)
    }
}

impl fmt::Display for DifficultyFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DifficultyFilter::All => f.write_str("all"),
            DifficultyFilter::Only(d) => fmt::Display::fmt(d, f),
        }
    }
}

/// Counts over the unfiltered list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Stats {
    pub total: usize,
    pub easy: usize,
    pub medium: usize,
    pub hard: usize,
}

pub fn matches(summary: &QuestionSummary, search: &str, filter: DifficultyFilter) -> bool {
    let term_hit = search.is_empty()
        || contains_ci(&summary.question_name, search)
        || summary.topics.iter().any(|t| contains_ci(t, search));
    term_hit && filter.admits(summary.question_difficulty)
}

#[derive(Clone, Debug, Default)]
pub struct Dashboard {
    summaries: Vec<QuestionSummary>,
    search: String,
    filter: DifficultyFilter,
    filtered: Vec<QuestionSummary>,
    loading: bool,
}

impl Dashboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_summaries(&mut self, summaries: Vec<QuestionSummary>) {
        self.summaries = summaries;
        self.recompute();
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search = term.into();
        self.recompute();
    }

    pub fn set_filter(&mut self, filter: DifficultyFilter) {
        self.filter = filter;
        self.recompute();
    }

    fn recompute(&mut self) {
        self.filtered = self
            .summaries
            .iter()
            .filter(|s| matches(s, &self.search, self.filter))
            .cloned()
            .collect();
    }

    pub fn summaries(&self) -> &[QuestionSummary] {
        &self.summaries
    }

    pub fn filtered(&self) -> &[QuestionSummary] {
        &self.filtered
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn filter(&self) -> DifficultyFilter {
        self.filter
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn stats(&self) -> Stats {
        let count = |d: Difficulty| self.summaries.iter().filter(|s| s.question_difficulty == d).count();
        Stats {
            total: self.summaries.len(),
            easy: count(Difficulty::Easy),
            medium: count(Difficulty::Medium),
            hard: count(Difficulty::Hard),
        }
    }

    /// Reload summaries from the backend. On failure the previous summaries stay and an
    /// error notice is returned. Returns None on success or without a session.
    #[instrument(level = "info", skip_all)]
    pub async fn refresh(&mut self, session: &SessionStore) -> Option<Notice> {
        let token = session.token().await?;

        self.loading = true;
        let result = session.api().list_summaries(&token).await;
        self.loading = false;

        match result {
            Ok(summaries) => {
                info!(count = summaries.len(), "Dashboard refreshed");
                self.set_summaries(summaries);
                None
            }
            Err(e) => {
                warn!(error = %e, kept = self.summaries.len(), "Refresh failed; keeping previous list");
                Some(Notice::error("Failed to fetch questions. Please try again."))
            }
        }
    }

    /// Reload after a create or update. Only a successful write triggers the reload; the
    /// returned notice is the refresh failure, if any.
    pub async fn after_write(&mut self, session: &SessionStore, write: &Notice) -> Option<Notice> {
        if !write.is_success() {
            return None;
        }
        self.refresh(session).await
    }

    /// Open the update flow for a listed question.
    pub fn select(&self, question_id: i64) -> Option<UpdateForm> {
        self.summaries
            .iter()
            .find(|s| s.question_id == question_id)
            .cloned()
            .map(UpdateForm::new)
    }
}
