//! Wire shapes exchanged with the question backend (serde ready).
//!
//! The backend stores the description under an irregular key that embeds a markdown
//! heading marker and ends with a space. `to_wire` and `from_wire` are the only place
//! that key is spelled; everything else works on the canonical `Question`.

use serde::de::Error as _;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::{Question, Session};
use crate::error::{ApiError, ApiResult};

/// Description key as the backend spells it, trailing space included.
pub const DESCRIPTION_WIRE_KEY: &str = "### questionDescription ";

const DESCRIPTION_KEY: &str = "questionDescription";

const UPDATE_FAILED: &str = "Failed to update question";

/// Canonical question to outbound JSON: the description moves to the wire key and the
/// canonical key is dropped.
pub fn to_wire(question: &Question) -> ApiResult<Value> {
    let mut value = serde_json::to_value(question)?;
    let map = as_object(&mut value)?;
    let description = map
        .remove(DESCRIPTION_KEY)
        .unwrap_or_else(|| Value::String(String::new()));
    map.insert(DESCRIPTION_WIRE_KEY.to_string(), description);
    Ok(value)
}

/// Inbound JSON to canonical question. A missing description reads as empty; missing or
/// null list fields read as empty lists.
pub fn from_wire(mut value: Value) -> ApiResult<Question> {
    let map = as_object(&mut value)?;
    let description = match map.remove(DESCRIPTION_WIRE_KEY) {
        Some(Value::String(s)) => s,
        _ => String::new(),
    };
    map.remove(DESCRIPTION_KEY);
    map.retain(|_, v| !v.is_null());

    let mut question: Question = serde_json::from_value(value)?;
    question.question_description = description;
    Ok(question)
}

/// Interpret a success-status body from the update endpoint.
///
/// A body whose `error` member is set is a failure even though the status was 2xx; its
/// `message` (or the `error` text itself) becomes the error detail. Any body that is not
/// a JSON object carries no record and reads as None.
pub fn interpret_update_body(body: Value) -> ApiResult<Option<Question>> {
    if !body.is_object() {
        return Ok(None);
    }
    if let Some(flag) = body.get("error") {
        if is_truthy(flag) {
            return Err(ApiError::write(error_detail(&body)));
        }
    }
    from_wire(body).map(Some)
}

fn error_detail(body: &Value) -> String {
    let message = body.get("message").and_then(Value::as_str).filter(|m| !m.is_empty());
    let error = body.get("error").and_then(Value::as_str).filter(|m| !m.is_empty());
    message.or(error).unwrap_or(UPDATE_FAILED).to_string()
}

/// Loose truthiness, matching how the backend flags errors (`true`, a non-empty string,
/// a non-zero number or any object).
fn is_truthy(v: &Value) -> bool {
    match v {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn as_object(value: &mut Value) -> ApiResult<&mut Map<String, Value>> {
    value
        .as_object_mut()
        .ok_or_else(|| ApiError::Decode(serde_json::Error::custom("expected a JSON object for a question")))
}

//
// Authentication DTOs
//

#[derive(Serialize)]
pub struct AuthRequest<'a> {
    #[serde(rename = "userName")]
    pub user_name: &'a str,
    pub password: &'a str,
}

#[derive(Deserialize)]
pub struct AuthResponse {
    pub jwt: String,
    #[serde(default)]
    pub role: String,
}

impl From<AuthResponse> for Session {
    fn from(r: AuthResponse) -> Self {
        Session { jwt: r.jwt, role: r.role }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Difficulty, QuestionSource, Solution, TestCase};
    use serde_json::json;

    fn sample() -> Question {
        Question {
            id: Some("665f1c".into()),
            question_id: Some(12),
            question_name: "Two Sum".into(),
            question_description: "Find two numbers.\n### Notes \nUse a map.".into(),
            constraints: vec!["2 <= n".into(), "2 <= n".into()],
            sample_test_cases: vec![TestCase {
                input: "[2,7] 9".into(),
                output: "[0,1]".into(),
                explanation: Some("2 + 7".into()),
            }],
            actual_test_cases: vec![],
            topics: vec!["Array".into()],
            question_difficulty: Difficulty::Easy,
            question_source: QuestionSource::LeetCode,
            question_solutions: vec![Solution {
                name: "Hash map".into(),
                explanation: "one pass".into(),
                example: "".into(),
                code: "fn main() {}".into(),
            }],
        }
    }

    #[test]
    fn outbound_moves_description_to_wire_key() {
        let wire = to_wire(&sample()).unwrap();
        assert!(wire.get("questionDescription").is_none());
        assert_eq!(wire[DESCRIPTION_WIRE_KEY], "Find two numbers.\n### Notes \nUse a map.");
        assert_eq!(wire["questionName"], "Two Sum");
        assert_eq!(wire["questionId"], 12);
        assert_eq!(wire["sampleTestCases"][0]["explanation"], "2 + 7");
    }

    #[test]
    fn wire_key_is_reproduced_exactly() {
        assert!(DESCRIPTION_WIRE_KEY.starts_with("### "));
        assert!(DESCRIPTION_WIRE_KEY.ends_with(' '));
        let text = serde_json::to_string(&to_wire(&sample()).unwrap()).unwrap();
        assert!(text.contains("\"### questionDescription \":"));
    }

    #[test]
    fn description_survives_outbound_then_inbound() {
        let original = sample();
        let back = from_wire(to_wire(&original).unwrap()).unwrap();
        assert_eq!(back, original);
    }

    #[test]
    fn description_containing_the_wire_key_survives() {
        let mut q = sample();
        q.question_description = format!("{DESCRIPTION_WIRE_KEY}\n{DESCRIPTION_WIRE_KEY}trailing");
        let wire = to_wire(&q).unwrap();
        assert_eq!(wire.as_object().unwrap().keys().filter(|k| k.as_str() == DESCRIPTION_WIRE_KEY).count(), 1);
        assert_eq!(from_wire(wire).unwrap(), q);
    }

    #[test]
    fn inbound_defaults_missing_fields() {
        let q = from_wire(json!({
            "questionId": 4,
            "questionName": "Sparse",
            "questionDifficulty": "MEDIUM",
            "questionSource": "CodeForces",
            "constraints": null
        }))
        .unwrap();
        assert_eq!(q.question_description, "");
        assert!(q.constraints.is_empty());
        assert!(q.topics.is_empty());
        assert!(q.sample_test_cases.is_empty());
        assert!(q.actual_test_cases.is_empty());
        assert!(q.question_solutions.is_empty());
        assert_eq!(q.question_source, QuestionSource::CodeForces);
    }

    #[test]
    fn inbound_ignores_canonical_description_key() {
        let q = from_wire(json!({
            "questionName": "X",
            "questionDescription": "not from the backend"
        }))
        .unwrap();
        assert_eq!(q.question_description, "");
    }

    #[test]
    fn inbound_rejects_non_objects() {
        assert!(matches!(from_wire(json!([1, 2])), Err(ApiError::Decode(_))));
    }

    #[test]
    fn update_body_with_error_flag_uses_message() {
        let err = interpret_update_body(json!({ "error": true, "message": "Duplicate questionId" })).unwrap_err();
        assert!(matches!(err, ApiError::Write { ref message } if message == "Duplicate questionId"));
    }

    #[test]
    fn update_body_error_falls_back_to_error_text_then_generic() {
        let err = interpret_update_body(json!({ "error": "Not allowed" })).unwrap_err();
        assert_eq!(err.to_string(), "Not allowed");

        let err = interpret_update_body(json!({ "error": true })).unwrap_err();
        assert_eq!(err.to_string(), "Failed to update question");
    }

    #[test]
    fn update_body_with_false_error_flag_is_a_question() {
        let mut wire = to_wire(&sample()).unwrap();
        wire["error"] = json!(false);
        let q = interpret_update_body(wire).unwrap().unwrap();
        assert_eq!(q.question_name, "Two Sum");
        assert!(q.question_description.starts_with("Find two numbers."));
    }

    #[test]
    fn update_body_without_a_record_is_none() {
        assert!(interpret_update_body(Value::Null).unwrap().is_none());
        assert!(interpret_update_body(json!(true)).unwrap().is_none());
        assert!(interpret_update_body(json!("updated")).unwrap().is_none());
        assert!(interpret_update_body(json!([1, 2])).unwrap().is_none());
    }

    #[test]
    fn auth_request_uses_backend_field_names() {
        let body = serde_json::to_value(AuthRequest { user_name: "admin", password: "pw" }).unwrap();
        assert_eq!(body, json!({ "userName": "admin", "password": "pw" }));
    }
}
