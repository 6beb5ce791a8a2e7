//! Todos API
//!
//! Client-side bindings to the remote todos service, behind a trait so the
//! state container can run against any backend.

mod http;
#[cfg(test)]
pub mod mock;

use async_trait::async_trait;

use crate::models::Todo;

pub use http::HttpTodoApi;

/// Result type for API calls
pub type ApiResult<T> = Result<T, ApiError>;

/// Transport-level failures
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Request(String),

    #[error("server responded with status {0}")]
    Status(u16),

    #[error("invalid response body: {0}")]
    Decode(String),
}

impl From<gloo_net::Error> for ApiError {
    fn from(e: gloo_net::Error) -> Self {
        ApiError::Request(e.to_string())
    }
}

/// Remote todo storage
///
/// Futures are not `Send`: everything runs on the browser's event loop.
#[async_trait(?Send)]
pub trait TodoApi {
    /// All todos belonging to `user_id`
    async fn get_todos(&self, user_id: u32) -> ApiResult<Vec<Todo>>;

    /// Store a new todo; the returned copy carries the server-assigned id
    async fn create_todo(&self, todo: &Todo) -> ApiResult<Todo>;

    async fn delete_todo(&self, id: u32) -> ApiResult<()>;
}
