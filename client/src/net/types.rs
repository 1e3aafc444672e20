//! JSON DTOs for the backend REST boundary.
//!
//! DESIGN
//! ======
//! Field names mirror the backend's camelCase JSON. Identifiers are kept as
//! strings on the client because the backend emits them as either JSON
//! strings or numbers depending on the entity; the client only echoes them
//! back into URLs.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// An uploaded design document tracked by the backend.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    /// Backend identifier.
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    /// Original file name shown in tables and selectors.
    pub name: String,
    /// Upload timestamp as emitted by the backend (ISO 8601).
    #[serde(default)]
    pub uploaded_at: Option<String>,
    /// Extracted document text, when the backend includes it.
    #[serde(default)]
    pub content: Option<String>,
    /// Storage path of the derived diagram, if one was generated.
    #[serde(default)]
    pub diagram_path: Option<String>,
}

/// A catalogued reusable solution.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Solution {
    #[serde(default, deserialize_with = "deserialize_opt_id")]
    pub id: Option<String>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "deserialize_null_as_default")]
    pub tags: Vec<String>,
    /// Source document this solution was promoted from.
    #[serde(default, deserialize_with = "deserialize_opt_id")]
    pub reference_doc_id: Option<String>,
    #[serde(default)]
    pub reference_doc_name: Option<String>,
    #[serde(default)]
    pub diagram_path: Option<String>,
}

/// Payload for `POST /api/solutions/add`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NewSolution {
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
}

/// Payload for `POST /api/solutions/addFromDoc`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SolutionFromDocument {
    pub doc_id: String,
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
}

/// Response of `POST /api/solutions/addFromDoc`.
///
/// `similar` lists existing solutions the backend considers close to the
/// one just saved.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct SavedSolution {
    #[serde(default)]
    pub solution: Option<Solution>,
    #[serde(default, deserialize_with = "deserialize_null_as_default")]
    pub similar: Vec<Solution>,
}

/// Compliance verdict for one document.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplianceResult {
    /// Older backends name this field `passed`.
    #[serde(default, alias = "passed")]
    pub compliant: bool,
    /// Score on a 0-100 scale.
    #[serde(default)]
    pub score: f64,
    /// Issue descriptions, optionally prefixed with a severity keyword.
    #[serde(default, deserialize_with = "deserialize_null_as_default")]
    pub issues: Vec<String>,
    #[serde(default)]
    pub checked_at: Option<String>,
}

/// One past compliance run for a document.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplianceHistoryEntry {
    #[serde(default, deserialize_with = "deserialize_opt_id")]
    pub document_id: Option<String>,
    #[serde(default, alias = "passed")]
    pub compliant: bool,
    #[serde(default)]
    pub score: f64,
    #[serde(default, deserialize_with = "deserialize_null_as_default")]
    pub issues: Vec<String>,
    #[serde(default)]
    pub checked_at: Option<String>,
}

/// Request body for the generic assistant endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AssistantQuery {
    pub query: String,
}

/// Response body of the generic assistant endpoint.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct AssistantReply {
    #[serde(default)]
    pub answer: String,
}

/// Extract the answer text from a chat response body.
///
/// Document chat returns plain text; the generic assistant wraps it as
/// `{"answer": "..."}`. Both shapes are accepted.
pub fn chat_answer_text(body: &str) -> String {
    if let Ok(serde_json::Value::Object(map)) = serde_json::from_str::<serde_json::Value>(body) {
        if let Some(answer) = map.get("answer").and_then(serde_json::Value::as_str) {
            return answer.to_owned();
        }
    }
    if let Ok(serde_json::Value::String(text)) = serde_json::from_str::<serde_json::Value>(body) {
        return text;
    }
    body.to_owned()
}

fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    id_from_value(value).ok_or_else(|| D::Error::custom("expected string or integer id"))
}

fn deserialize_opt_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    if value.is_null() {
        return Ok(None);
    }
    id_from_value(value)
        .map(Some)
        .ok_or_else(|| D::Error::custom("expected string or integer id"))
}

fn id_from_value(value: serde_json::Value) -> Option<String> {
    match value {
        serde_json::Value::String(s) => Some(s),
        serde_json::Value::Number(n) if n.is_i64() || n.is_u64() => Some(n.to_string()),
        _ => None,
    }
}

fn deserialize_null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
