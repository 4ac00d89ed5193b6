//! Derived view projections over a store snapshot.
//!
//! Pure functions, recomputed on every call — no caching, no invalidation.
//! `today` is always passed in by the caller; this module never reads the
//! clock, so deadline classification is deterministic under test.

use chrono::NaiveDate;

use crate::types::Todo;

/// A todo is overdue when it has a deadline strictly before `today` and is
/// not completed. Comparison is at day granularity only.
pub fn is_overdue(todo: &Todo, today: NaiveDate) -> bool {
    match todo.deadline {
        Some(deadline) => !todo.completed && deadline < today,
        None => false,
    }
}

/// A todo is due today when its deadline equals `today`, completed or not.
pub fn is_due_today(todo: &Todo, today: NaiveDate) -> bool {
    todo.deadline == Some(today)
}

/// Split a snapshot into (active, completed), relative order within each
/// half preserved.
pub fn partition(todos: &[Todo]) -> (Vec<&Todo>, Vec<&Todo>) {
    todos.iter().partition(|todo| !todo.completed)
}

/// Aggregate counts over a snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stats {
    pub total: usize,
    pub completed: usize,
    pub pending: usize,
    pub overdue: usize,
}

pub fn stats(todos: &[Todo], today: NaiveDate) -> Stats {
    let total = todos.len();
    let completed = todos.iter().filter(|todo| todo.completed).count();
    let overdue = todos.iter().filter(|todo| is_overdue(todo, today)).count();
    Stats {
        total,
        completed,
        pending: total - completed,
        overdue,
    }
}
