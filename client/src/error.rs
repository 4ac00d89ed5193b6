//! Error types for the todo client.
//!
//! # Design
//! The client deliberately collapses every transport failure, unexpected
//! status, and undecodable body into one `RequestFailed` value: the layers
//! above only ever retry at the user's request, so distinguishing 4xx from
//! 5xx from "connection refused" buys nothing. The failure carries the
//! attempted operation and target id so it can be surfaced next to the
//! thing that failed.

use std::fmt;

use uuid::Uuid;

/// Which client operation a failure belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    List,
    Create,
    Update,
    Delete,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operation::List => "list todos",
            Operation::Create => "create todo",
            Operation::Update => "update todo",
            Operation::Delete => "delete todo",
        };
        write!(f, "{name}")
    }
}

/// The single failure kind for all client-originated errors: network
/// unreachable, non-success status, or malformed payload. `reason` is a
/// human-readable description suitable for direct display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestFailed {
    pub operation: Operation,
    pub id: Option<Uuid>,
    pub reason: String,
}

impl RequestFailed {
    pub(crate) fn new(operation: Operation, id: Option<Uuid>, reason: impl Into<String>) -> Self {
        Self {
            operation,
            id,
            reason: reason.into(),
        }
    }
}

impl fmt::Display for RequestFailed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.id {
            Some(id) => write!(f, "{} {id} failed: {}", self.operation, self.reason),
            None => write!(f, "{} failed: {}", self.operation, self.reason),
        }
    }
}

impl std::error::Error for RequestFailed {}

/// Errors returned by `TodoStore` mutations.
///
/// `EmptyText` is rejected locally before any request is issued; everything
/// else is a backend round-trip that failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The todo text was empty after trimming whitespace.
    EmptyText,

    /// The backend request failed; the collection was left unchanged.
    Request(RequestFailed),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::EmptyText => write!(f, "todo text must not be empty"),
            StoreError::Request(failure) => write!(f, "{failure}"),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StoreError::EmptyText => None,
            StoreError::Request(failure) => Some(failure),
        }
    }
}

impl From<RequestFailed> for StoreError {
    fn from(failure: RequestFailed) -> Self {
        StoreError::Request(failure)
    }
}
