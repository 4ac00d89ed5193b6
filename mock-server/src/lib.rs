//! In-memory implementation of the todo backend contract, used as the live
//! test backend for the client crate and runnable standalone.
//!
//! Behavior mirrors the backend of record: todos are listed newest-first,
//! text is trimmed and must be non-empty on create and update, and a PUT
//! body distinguishes `"deadline": null` (clear) from an absent field
//! (leave unchanged).

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{json, Value};
use tokio::{net::TcpListener, sync::RwLock};
use uuid::Uuid;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Todo {
    pub id: Uuid,
    pub text: String,
    pub deadline: Option<NaiveDate>,
    pub completed: bool,
}

#[derive(Deserialize)]
pub struct CreateTodo {
    pub text: String,
    #[serde(default)]
    pub deadline: Option<NaiveDate>,
    #[serde(default)]
    pub completed: bool,
}

#[derive(Deserialize)]
pub struct UpdateTodo {
    pub text: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub deadline: Option<Option<NaiveDate>>,
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

/// Newest todo first, matching the order the contract promises for list.
pub type Db = Arc<RwLock<Vec<Todo>>>;

type ErrorResponse = (StatusCode, Json<Value>);

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(Vec::new()));
    Router::new()
        .route("/api/todos", get(list_todos).post(create_todo))
        .route(
            "/api/todos/{id}",
            get(get_todo).put(update_todo).delete(delete_todo),
        )
        .route("/api/health", get(health))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

fn error_response(status: StatusCode, message: &str) -> ErrorResponse {
    (status, Json(json!({ "error": message })))
}

fn not_found() -> ErrorResponse {
    error_response(StatusCode::NOT_FOUND, "todo not found")
}

async fn list_todos(State(db): State<Db>) -> Json<Vec<Todo>> {
    Json(db.read().await.clone())
}

async fn get_todo(State(db): State<Db>, Path(id): Path<Uuid>) -> Result<Json<Todo>, ErrorResponse> {
    let todos = db.read().await;
    todos
        .iter()
        .find(|todo| todo.id == id)
        .cloned()
        .map(Json)
        .ok_or_else(not_found)
}

async fn create_todo(
    State(db): State<Db>,
    Json(input): Json<CreateTodo>,
) -> Result<(StatusCode, Json<Todo>), ErrorResponse> {
    let text = input.text.trim();
    if text.is_empty() {
        return Err(error_response(StatusCode::BAD_REQUEST, "text cannot be empty"));
    }
    let todo = Todo {
        id: Uuid::new_v4(),
        text: text.to_string(),
        deadline: input.deadline,
        completed: input.completed,
    };
    db.write().await.insert(0, todo.clone());
    Ok((StatusCode::CREATED, Json(todo)))
}

async fn update_todo(
    State(db): State<Db>,
    Path(id): Path<Uuid>,
    Json(input): Json<UpdateTodo>,
) -> Result<Json<Todo>, ErrorResponse> {
    let mut todos = db.write().await;
    let todo = todos
        .iter_mut()
        .find(|todo| todo.id == id)
        .ok_or_else(not_found)?;
    if let Some(text) = input.text {
        let text = text.trim();
        if text.is_empty() {
            return Err(error_response(StatusCode::BAD_REQUEST, "text cannot be empty"));
        }
        todo.text = text.to_string();
    }
    if let Some(deadline) = input.deadline {
        todo.deadline = deadline;
    }
    if let Some(completed) = input.completed {
        todo.completed = completed;
    }
    Ok(Json(todo.clone()))
}

async fn delete_todo(
    State(db): State<Db>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ErrorResponse> {
    let mut todos = db.write().await;
    let position = todos.iter().position(|todo| todo.id == id).ok_or_else(not_found)?;
    todos.remove(position);
    Ok(StatusCode::NO_CONTENT)
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
