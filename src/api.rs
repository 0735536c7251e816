//! Transfer layer for the question backend.
//!
//! Authentication plus the four question operations: list summaries, fetch by id, create
//! and update. Every question payload goes through `protocol::to_wire`/`from_wire`, so
//! callers only ever see canonical `Question`s.
//!
//! NOTE: We never log the bearer token or the password. Payloads are logged by size only.

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, USER_AGENT};
use reqwest::{RequestBuilder, StatusCode};
use serde_json::Value;
use tracing::{debug, info, instrument, warn};

use crate::config::ClientConfig;
use crate::domain::{Question, QuestionSummary, Session};
use crate::error::{ApiError, ApiResult};
use crate::protocol::{from_wire, interpret_update_body, to_wire, AuthRequest, AuthResponse};
use crate::util::trunc_for_log;

const CLIENT_UA: &str = concat!("qbank-admin/", env!("CARGO_PKG_VERSION"));

#[derive(Clone, Debug)]
pub struct QuestionApi {
  pub client: reqwest::Client,
  pub base_url: String,
}

impl QuestionApi {
  /// Client for the given API base (e.g. `https://host/api`). No client-side timeout is
  /// set; the transport's own behavior applies.
  pub fn new(base_url: impl Into<String>) -> ApiResult<Self> {
    let client = reqwest::Client::builder().build()?;
    let base_url = base_url.into().trim_end_matches('/').to_string();
    Ok(Self { client, base_url })
  }

  pub fn from_config(cfg: &ClientConfig) -> ApiResult<Self> {
    Self::new(cfg.base_url.clone())
  }

  fn url(&self, path: &str) -> String {
    format!("{}/{}", self.base_url, path)
  }

  fn authed(&self, req: RequestBuilder, token: &str) -> RequestBuilder {
    req
      .header(USER_AGENT, CLIENT_UA)
      .header(CONTENT_TYPE, "application/json")
      .header(AUTHORIZATION, format!("Bearer {}", token))
  }

  /// POST /authenticate. Only HTTP 200 counts as a successful login.
  #[instrument(level = "info", skip(self, password), fields(%user_name))]
  pub async fn authenticate(&self, user_name: &str, password: &str) -> ApiResult<Session> {
    let res = self.client.post(self.url("authenticate"))
      .header(USER_AGENT, CLIENT_UA)
      .header(CONTENT_TYPE, "application/json")
      .json(&AuthRequest { user_name, password })
      .send().await?;

    let status = res.status();
    if status != StatusCode::OK {
      warn!(status = status.as_u16(), "Authentication rejected");
      return Err(ApiError::Auth { status: status.as_u16() });
    }

    let body = res.text().await?;
    let auth: AuthResponse = serde_json::from_str(&body)?;
    info!(role = %auth.role, "Authenticated");
    Ok(auth.into())
  }

  /// GET /allQuestionNames
  #[instrument(level = "info", skip(self, token))]
  pub async fn list_summaries(&self, token: &str) -> ApiResult<Vec<QuestionSummary>> {
    let res = self.authed(self.client.get(self.url("allQuestionNames")), token)
      .send().await?;

    let status = res.status();
    if !status.is_success() {
      warn!(status = status.as_u16(), "List request failed");
      return Err(ApiError::fetch("Failed to fetch questions"));
    }

    let body = res.text().await?;
    let summaries: Vec<QuestionSummary> = serde_json::from_str(&body)?;
    info!(count = summaries.len(), bytes = body.len(), "Fetched question summaries");
    Ok(summaries)
  }

  /// GET /getQuestionById/{questionId}
  #[instrument(level = "info", skip(self, token), fields(%question_id))]
  pub async fn fetch_by_id(&self, token: &str, question_id: i64) -> ApiResult<Question> {
    let url = self.url(&format!("getQuestionById/{}", question_id));
    let res = self.authed(self.client.get(url), token).send().await?;

    let status = res.status();
    if !status.is_success() {
      warn!(status = status.as_u16(), "Fetch by id failed");
      return Err(ApiError::fetch(format!("Failed to fetch question {}", question_id)));
    }

    let body = res.text().await?;
    debug!(body = %trunc_for_log(&body, 200), "Fetch by id response");
    let question = from_wire(serde_json::from_str::<Value>(&body)?)?;
    info!(name = %question.question_name, bytes = body.len(), "Fetched question");
    Ok(question)
  }

  /// POST /addNewQuestion. Only the status matters; the body is not read.
  #[instrument(level = "info", skip(self, token, question), fields(name = %question.question_name))]
  pub async fn create(&self, token: &str, question: &Question) -> ApiResult<bool> {
    let payload = to_wire(question)?;
    let res = self.authed(self.client.post(self.url("addNewQuestion")), token)
      .json(&payload)
      .send().await?;

    let status = res.status();
    if status.is_success() {
      info!(status = status.as_u16(), "Question created");
    } else {
      warn!(status = status.as_u16(), "Create rejected");
    }
    Ok(status.is_success())
  }

  /// PUT /updateQuestion. A 2xx body may still carry an error flag.
  #[instrument(level = "info", skip(self, token, question), fields(question_id = ?question.question_id))]
  pub async fn update(&self, token: &str, question: &Question) -> ApiResult<Option<Question>> {
    let payload = to_wire(question)?;
    let res = self.authed(self.client.put(self.url("updateQuestion")), token)
      .json(&payload)
      .send().await?;

    let status = res.status();
    if !status.is_success() {
      warn!(status = status.as_u16(), "Update rejected");
      return Err(ApiError::write("Failed to update question"));
    }

    let body = res.text().await?;
    if body.trim().is_empty() {
      info!(status = status.as_u16(), "Question updated (empty body)");
      return Ok(None);
    }
    let updated = interpret_update_body(serde_json::from_str(&body)?)?;
    info!(status = status.as_u16(), bytes = body.len(), "Question updated");
    Ok(updated)
  }
}
