//! Domain DTOs for the todo API.
//!
//! # Design
//! These types mirror the backend's JSON schema but are defined
//! independently of any server crate; integration tests catch schema drift.
//! Deadlines are calendar dates with no time component (`NaiveDate`, ISO
//! `YYYY-MM-DD` on the wire, `null` when absent). The backend may attach
//! extra bookkeeping fields (`created_at`, `updated_at`); serde ignores
//! unknown fields on deserialize, so they are dropped here.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

/// A single todo item returned by the API.
///
/// `id` is assigned by the backend on create and never changes afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    pub id: Uuid,
    pub text: String,
    pub deadline: Option<NaiveDate>,
    pub completed: bool,
}

/// Request payload for creating a new todo.
///
/// The backend assigns the id and defaults `completed` to false. `deadline`
/// is omitted from the body when `None`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewTodo {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deadline: Option<NaiveDate>,
}

/// Request payload for partially updating an existing todo. Only the fields
/// present in the JSON are applied; omitted fields remain unchanged on the
/// server.
///
/// `deadline` is double-optional: `None` omits the field (leave unchanged),
/// `Some(None)` sends `null` (clear the deadline), `Some(Some(date))` sets it.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TodoPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "double_option"
    )]
    pub deadline: Option<Option<NaiveDate>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
}

/// Deserialize a present-but-possibly-null field into `Some(inner)`, so a
/// JSON `null` becomes `Some(None)` instead of collapsing into `None`.
fn double_option<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    T::deserialize(deserializer).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn todo_deserializes_with_null_deadline() {
        let todo: Todo = serde_json::from_str(
            r#"{"id":"00000000-0000-0000-0000-000000000001","text":"Buy milk","deadline":null,"completed":false}"#,
        )
        .unwrap();
        assert_eq!(todo.text, "Buy milk");
        assert!(todo.deadline.is_none());
        assert!(!todo.completed);
    }

    #[test]
    fn todo_deserializes_iso_deadline() {
        let todo: Todo = serde_json::from_str(
            r#"{"id":"00000000-0000-0000-0000-000000000001","text":"Taxes","deadline":"2026-04-15","completed":false}"#,
        )
        .unwrap();
        assert_eq!(todo.deadline, NaiveDate::from_ymd_opt(2026, 4, 15));
    }

    #[test]
    fn todo_ignores_backend_bookkeeping_fields() {
        let todo: Todo = serde_json::from_str(
            r#"{"id":"00000000-0000-0000-0000-000000000001","text":"A","deadline":null,"completed":true,"created_at":"2026-08-01T10:00:00","updated_at":"2026-08-02T10:00:00"}"#,
        )
        .unwrap();
        assert!(todo.completed);
    }

    #[test]
    fn new_todo_omits_absent_deadline() {
        let draft = NewTodo {
            text: "Walk dog".to_string(),
            deadline: None,
        };
        let json = serde_json::to_value(&draft).unwrap();
        assert_eq!(json, serde_json::json!({"text": "Walk dog"}));
    }

    #[test]
    fn patch_distinguishes_clear_from_leave_unchanged() {
        let clear = TodoPatch {
            deadline: Some(None),
            ..TodoPatch::default()
        };
        assert_eq!(
            serde_json::to_value(&clear).unwrap(),
            serde_json::json!({"deadline": null})
        );

        let untouched = TodoPatch::default();
        assert_eq!(serde_json::to_value(&untouched).unwrap(), serde_json::json!({}));
    }

    #[test]
    fn patch_roundtrips_null_deadline() {
        let patch: TodoPatch = serde_json::from_str(r#"{"deadline":null}"#).unwrap();
        assert_eq!(patch.deadline, Some(None));
        assert!(patch.text.is_none());

        let patch: TodoPatch = serde_json::from_str(r#"{"completed":true}"#).unwrap();
        assert!(patch.deadline.is_none());
        assert_eq!(patch.completed, Some(true));
    }
}
