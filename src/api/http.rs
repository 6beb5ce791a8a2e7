//! HTTP Todos Client
//!
//! `fetch`-based implementation of [`TodoApi`] using gloo-net.

use async_trait::async_trait;
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::{ApiError, ApiResult, TodoApi};
use crate::models::Todo;

// ========================
// Request Bodies
// ========================

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CreateTodoBody<'a> {
    user_id: u32,
    title: &'a str,
    completed: bool,
}

// ========================
// Client
// ========================

/// Todos service reached over HTTP
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HttpTodoApi {
    base_url: &'static str,
}

impl HttpTodoApi {
    pub fn new(base_url: &'static str) -> Self {
        Self { base_url }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// Turn non-2xx responses into errors
fn check_status(resp: Response) -> ApiResult<Response> {
    if resp.ok() {
        Ok(resp)
    } else {
        Err(ApiError::Status(resp.status()))
    }
}

async fn decode<T: DeserializeOwned>(resp: Response) -> ApiResult<T> {
    resp.json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

#[async_trait(?Send)]
impl TodoApi for HttpTodoApi {
    async fn get_todos(&self, user_id: u32) -> ApiResult<Vec<Todo>> {
        let url = self.url(&format!("/todos?userId={}", user_id));
        log::debug!("GET {}", url);
        let resp = check_status(Request::get(&url).send().await?)?;
        decode(resp).await
    }

    async fn create_todo(&self, todo: &Todo) -> ApiResult<Todo> {
        let url = self.url("/todos");
        log::debug!("POST {}", url);
        let body = CreateTodoBody {
            user_id: todo.user_id,
            title: &todo.title,
            completed: todo.completed,
        };
        let resp = check_status(Request::post(&url).json(&body)?.send().await?)?;
        decode(resp).await
    }

    async fn delete_todo(&self, id: u32) -> ApiResult<()> {
        let url = self.url(&format!("/todos/{}", id));
        log::debug!("DELETE {}", url);
        check_status(Request::delete(&url).send().await?)?;
        Ok(())
    }
}
