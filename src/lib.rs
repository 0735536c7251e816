//! qbank-admin · administrative client for a coding-interview question bank.
//!
//! - `session`: login/logout and the durable bearer token
//! - `api` + `protocol`: the four question operations and the backend's wire shape
//! - `forms`: create/update drafts and the filtered summary list

pub mod api;
pub mod collection;
pub mod config;
pub mod domain;
pub mod error;
pub mod forms;
pub mod notice;
pub mod protocol;
pub mod session;
pub mod telemetry;
pub mod util;

pub use api::QuestionApi;
pub use config::ClientConfig;
pub use domain::{Difficulty, Question, QuestionSource, QuestionSummary, Session, Solution, TestCase};
pub use error::{ApiError, ApiResult};
pub use notice::Notice;
pub use session::{FileStorage, MemoryStorage, SessionStorage, SessionStore};
