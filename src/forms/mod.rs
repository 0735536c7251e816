//! Form state controllers: local drafts and the list/filter view.
//!
//! - `draft`: editable copy of a question with one `EditableList` per array field
//! - `create`: new-question form
//! - `update`: fetch-then-edit form launched from a summary
//! - `dashboard`: summary list with search and difficulty filter
//!
//! Controllers take the `SessionStore` explicitly and talk to the backend only on
//! submit/refresh. Every remote failure comes back as a `Notice`.

pub mod create;
pub mod dashboard;
pub mod draft;
pub mod update;

pub use create::CreateForm;
pub use dashboard::{Dashboard, DifficultyFilter, Stats};
pub use draft::QuestionDraft;
pub use update::{Phase, UpdateForm};
