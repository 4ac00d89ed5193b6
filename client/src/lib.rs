//! Client-side core for a single-user task-tracking web client.
//!
//! # Overview
//! Three layers, composed bottom-up:
//! - [`TodoClient`] — stateless conduit to the backend REST resource. Builds
//!   `HttpRequest` values and parses `HttpResponse` values; the actual
//!   round-trip runs through a caller-supplied [`Transport`]
//!   (host-does-IO pattern), so the layer is deterministic and testable
//!   without a network.
//! - [`TodoStore`] — owns the in-memory snapshot of the collection and
//!   mediates every mutation through the client. Strictly confirm-then-
//!   render: the snapshot only ever contains records the backend has
//!   confirmed, so there is no optimistic state to reconcile or roll back.
//! - [`view`] — pure projections over a snapshot: active/completed
//!   partition, overdue and due-today classification, aggregate counts.
//!
//! Data flows one way: client results into the store, the store's snapshot
//! into the projections, projection output into rendering. The presentation
//! layer constructs one store per session and threads it through explicitly;
//! nothing here is a global.

pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod store;
pub mod types;
pub mod view;

pub use client::TodoClient;
pub use error::{Operation, RequestFailed, StoreError};
pub use http::{HttpMethod, HttpRequest, HttpResponse, Transport, TransportError};
pub use store::{LoadState, TodoStore};
pub use types::{NewTodo, Todo, TodoPatch};
pub use view::{is_due_today, is_overdue, partition, stats, Stats};
