//! In-process fake of the question backend (axum), plus helpers shared by the
//! integration tests.
#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post, put},
    Json, Router,
};
use serde_json::{json, Value};

use qbank_admin::protocol::DESCRIPTION_WIRE_KEY;
use qbank_admin::{MemoryStorage, QuestionApi, SessionStore};

pub const TOKEN: &str = "tok-123";

/// Knobs and recordings of the fake backend.
#[derive(Debug)]
pub struct BackendState {
    /// Full questions, wire-shaped.
    pub questions: Vec<Value>,
    pub list_status: u16,
    pub create_status: u16,
    pub update_status: u16,
    /// Body returned by the update endpoint; None echoes the request.
    pub update_body: Option<Value>,
    pub authorizations: Vec<String>,
    pub content_types: Vec<String>,
    pub created: Vec<Value>,
    pub updated: Vec<Value>,
}

impl Default for BackendState {
    fn default() -> Self {
        Self {
            questions: vec![
                wire_question(1, "Two Sum", "EASY", &["Array"], "Find two numbers.\n### Hint \nUse a map."),
                wire_question(2, "LRU Cache", "HARD", &["HashMap", "Linked List"], "Design a cache."),
            ],
            list_status: 200,
            create_status: 200,
            update_status: 200,
            update_body: None,
            authorizations: Vec::new(),
            content_types: Vec::new(),
            created: Vec::new(),
            updated: Vec::new(),
        }
    }
}

pub type Shared = Arc<Mutex<BackendState>>;

pub fn wire_question(id: i64, name: &str, difficulty: &str, topics: &[&str], description: &str) -> Value {
    let mut q = json!({
        "id": format!("mongo-{id}"),
        "questionId": id,
        "questionName": name,
        "constraints": ["1 <= n <= 10^4"],
        "sampleTestCases": [{ "input": "1", "output": "1", "explanation": "trivial" }],
        "actualTestCases": [{ "input": "2", "output": "2" }],
        "topics": topics,
        "questionDifficulty": difficulty,
        "questionSource": "LeetCode",
        "questionSolutions": [{ "name": "Brute", "explanation": "", "example": "", "code": "loop" }]
    });
    q[DESCRIPTION_WIRE_KEY] = json!(description);
    q
}

fn record(state: &mut BackendState, headers: &HeaderMap) {
    let header = |name: &str| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string()
    };
    state.authorizations.push(header("authorization"));
    state.content_types.push(header("content-type"));
}

fn status(code: u16) -> StatusCode {
    StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
}

async fn authenticate(Json(body): Json<Value>) -> Response {
    if body["userName"] == "admin" && body["password"] == "secret" {
        (StatusCode::OK, Json(json!({ "jwt": TOKEN, "role": "ADMIN" }))).into_response()
    } else {
        (StatusCode::UNAUTHORIZED, Json(json!({ "error": "Bad credentials" }))).into_response()
    }
}

async fn all_question_names(State(state): State<Shared>, headers: HeaderMap) -> Response {
    let mut st = state.lock().unwrap();
    record(&mut st, &headers);
    if st.list_status != 200 {
        return status(st.list_status).into_response();
    }
    let summaries: Vec<Value> = st
        .questions
        .iter()
        .map(|q| {
            json!({
                "questionId": q["questionId"],
                "questionName": q["questionName"],
                "questionDifficulty": q["questionDifficulty"],
                "topics": q["topics"],
            })
        })
        .collect();
    Json(summaries).into_response()
}

async fn get_question_by_id(State(state): State<Shared>, headers: HeaderMap, Path(id): Path<i64>) -> Response {
    let mut st = state.lock().unwrap();
    record(&mut st, &headers);
    match st.questions.iter().find(|q| q["questionId"] == id) {
        Some(q) => Json(q.clone()).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

async fn add_new_question(State(state): State<Shared>, headers: HeaderMap, Json(body): Json<Value>) -> Response {
    let mut st = state.lock().unwrap();
    record(&mut st, &headers);
    st.created.push(body.clone());
    if st.create_status == 200 {
        let mut stored = body;
        let next_id = st.questions.len() as i64 + 1;
        if stored.get("questionId").is_none() {
            stored["questionId"] = json!(next_id);
        }
        st.questions.push(stored);
    }
    status(st.create_status).into_response()
}

async fn update_question(State(state): State<Shared>, headers: HeaderMap, Json(body): Json<Value>) -> Response {
    let mut st = state.lock().unwrap();
    record(&mut st, &headers);
    st.updated.push(body.clone());
    if st.update_status == 200 && st.update_body.is_none() {
        if let Some(stored) = st.questions.iter_mut().find(|q| q["questionId"] == body["questionId"]) {
            *stored = body.clone();
        }
    }
    let reply = st.update_body.clone().unwrap_or(body);
    (status(st.update_status), Json(reply)).into_response()
}

/// Start the fake backend on an ephemeral port; returns its API base URL.
pub async fn spawn_backend(state: Shared) -> String {
    let app = Router::new()
        .route("/api/authenticate", post(authenticate))
        .route("/api/allQuestionNames", get(all_question_names))
        .route("/api/getQuestionById/:id", get(get_question_by_id))
        .route("/api/addNewQuestion", post(add_new_question))
        .route("/api/updateQuestion", put(update_question))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}/api", addr)
}

/// Fake backend plus a logged-in session store over memory storage.
pub async fn logged_in() -> (Shared, SessionStore, Arc<MemoryStorage>) {
    let state: Shared = Arc::default();
    let base = spawn_backend(state.clone()).await;
    let storage = Arc::new(MemoryStorage::default());
    let session = SessionStore::open(QuestionApi::new(base).unwrap(), storage.clone());
    assert!(session.login("admin", "secret").await);
    (state, session, storage)
}
