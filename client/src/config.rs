//! Backend endpoint configuration.

/// Default backend endpoint: the local server's fixed port, under its `/api`
/// path prefix.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000/api";

/// Resolve the backend base URL from `TODO_API_URL`, falling back to
/// [`DEFAULT_BASE_URL`].
pub fn base_url_from_env() -> String {
    std::env::var("TODO_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string())
}
