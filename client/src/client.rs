//! HTTP request builder, response parser, and executing wrapper for the
//! todo API.
//!
//! # Design
//! `TodoClient` holds a `base_url` and a [`Transport`]; it carries no other
//! state between calls. Each CRUD operation is split into a `build_*` method
//! that produces an `HttpRequest` and a `parse_*` method that consumes an
//! `HttpResponse`, composed by an executing method (`list_all`, `create`,
//! `update`, `delete`) that runs the round-trip through the transport. The
//! build/parse layer stays deterministic and free of I/O, so request shapes
//! and status handling are testable without a server.
//!
//! Every failure maps to [`RequestFailed`]; no retries, no fallback.

use uuid::Uuid;

use crate::error::{Operation, RequestFailed};
use crate::http::{HttpMethod, HttpRequest, HttpResponse, Transport};
use crate::types::{NewTodo, Todo, TodoPatch};

/// Stateless client for the todo REST resource.
///
/// `base_url` includes the API path prefix (e.g. `http://127.0.0.1:5000/api`);
/// a trailing slash is stripped on construction.
#[derive(Debug, Clone)]
pub struct TodoClient<T> {
    base_url: String,
    transport: T,
}

impl<T> TodoClient<T> {
    pub fn new(base_url: &str, transport: T) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            transport,
        }
    }

    pub fn build_list_todos(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: format!("{}/todos", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_create_todo(&self, draft: &NewTodo) -> Result<HttpRequest, RequestFailed> {
        let body = serde_json::to_string(draft)
            .map_err(|e| RequestFailed::new(Operation::Create, None, format!("serialize request: {e}")))?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            path: format!("{}/todos", self.base_url),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }

    pub fn build_update_todo(&self, id: Uuid, patch: &TodoPatch) -> Result<HttpRequest, RequestFailed> {
        let body = serde_json::to_string(patch)
            .map_err(|e| RequestFailed::new(Operation::Update, Some(id), format!("serialize request: {e}")))?;
        Ok(HttpRequest {
            method: HttpMethod::Put,
            path: format!("{}/todos/{id}", self.base_url),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }

    pub fn build_delete_todo(&self, id: Uuid) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Delete,
            path: format!("{}/todos/{id}", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn parse_list_todos(&self, response: HttpResponse) -> Result<Vec<Todo>, RequestFailed> {
        check_status(Operation::List, None, &response, 200)?;
        decode_body(Operation::List, None, &response.body)
    }

    pub fn parse_create_todo(&self, response: HttpResponse) -> Result<Todo, RequestFailed> {
        check_status(Operation::Create, None, &response, 201)?;
        decode_body(Operation::Create, None, &response.body)
    }

    pub fn parse_update_todo(&self, id: Uuid, response: HttpResponse) -> Result<Todo, RequestFailed> {
        check_status(Operation::Update, Some(id), &response, 200)?;
        decode_body(Operation::Update, Some(id), &response.body)
    }

    pub fn parse_delete_todo(&self, id: Uuid, response: HttpResponse) -> Result<(), RequestFailed> {
        check_status(Operation::Delete, Some(id), &response, 204)
    }
}

impl<T: Transport> TodoClient<T> {
    /// Fetch the full current collection, server order preserved.
    pub fn list_all(&self) -> Result<Vec<Todo>, RequestFailed> {
        let request = self.build_list_todos();
        let response = self.execute(Operation::List, None, request)?;
        self.parse_list_todos(response)
    }

    /// Create a todo; the server assigns the id and defaults `completed` to
    /// false. Returns the fully-populated record.
    pub fn create(&self, draft: &NewTodo) -> Result<Todo, RequestFailed> {
        let request = self.build_create_todo(draft)?;
        let response = self.execute(Operation::Create, None, request)?;
        self.parse_create_todo(response)
    }

    /// Apply a partial update; omitted fields are left untouched server-side.
    /// Returns the full updated record.
    pub fn update(&self, id: Uuid, patch: &TodoPatch) -> Result<Todo, RequestFailed> {
        let request = self.build_update_todo(id, patch)?;
        let response = self.execute(Operation::Update, Some(id), request)?;
        self.parse_update_todo(id, response)
    }

    /// Delete a todo server-side. Success carries no content.
    pub fn delete(&self, id: Uuid) -> Result<(), RequestFailed> {
        let request = self.build_delete_todo(id);
        let response = self.execute(Operation::Delete, Some(id), request)?;
        self.parse_delete_todo(id, response)
    }

    fn execute(
        &self,
        operation: Operation,
        id: Option<Uuid>,
        request: HttpRequest,
    ) -> Result<HttpResponse, RequestFailed> {
        self.transport
            .execute(request)
            .map_err(|e| RequestFailed::new(operation, id, e.0))
    }
}

/// Map non-success status codes to `RequestFailed`. 404 is not special-cased:
/// the layers above treat every non-success response uniformly.
fn check_status(
    operation: Operation,
    id: Option<Uuid>,
    response: &HttpResponse,
    expected: u16,
) -> Result<(), RequestFailed> {
    if response.status == expected {
        return Ok(());
    }
    Err(RequestFailed::new(
        operation,
        id,
        format!("HTTP {}: {}", response.status, response.body),
    ))
}

fn decode_body<D: serde::de::DeserializeOwned>(
    operation: Operation,
    id: Option<Uuid>,
    body: &str,
) -> Result<D, RequestFailed> {
    serde_json::from_str(body)
        .map_err(|e| RequestFailed::new(operation, id, format!("invalid response body: {e}")))
}
