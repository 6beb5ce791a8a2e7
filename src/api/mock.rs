//! In-memory Todos API for tests

use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

use async_trait::async_trait;
use futures::channel::oneshot;
use futures::future::Shared;

use super::{ApiError, ApiResult, TodoApi};
use crate::models::Todo;

/// A call the mock received, in arrival order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    GetTodos(u32),
    CreateTodo(Todo),
    DeleteTodo(u32),
}

#[derive(Default)]
struct Inner {
    todos: Vec<Todo>,
    next_id: u32,
    fail_load: bool,
    fail_create: bool,
    fail_delete: HashSet<u32>,
    calls: Vec<Call>,
    gate: Option<Shared<oneshot::Receiver<()>>>,
}

/// Mock service; clones share the same backing list
#[derive(Clone, Default)]
pub struct MockTodoApi {
    inner: Rc<RefCell<Inner>>,
}

impl MockTodoApi {
    pub fn with_todos(todos: Vec<Todo>) -> Self {
        let next_id = todos.iter().map(|todo| todo.id).max().unwrap_or(0) + 1;
        let api = Self::default();
        {
            let mut inner = api.inner.borrow_mut();
            inner.todos = todos;
            inner.next_id = next_id;
        }
        api
    }

    pub fn fail_load(&self) {
        self.inner.borrow_mut().fail_load = true;
    }

    pub fn fail_create(&self) {
        self.inner.borrow_mut().fail_create = true;
    }

    pub fn fail_delete(&self, id: u32) {
        self.inner.borrow_mut().fail_delete.insert(id);
    }

    /// Hold every response until the sender side of `gate` fires
    pub fn hold_until(&self, gate: oneshot::Receiver<()>) {
        use futures::FutureExt;
        self.inner.borrow_mut().gate = Some(gate.shared());
    }

    pub fn calls(&self) -> Vec<Call> {
        self.inner.borrow().calls.clone()
    }

    pub fn server_todos(&self) -> Vec<Todo> {
        self.inner.borrow().todos.clone()
    }

    fn record(&self, call: Call) {
        self.inner.borrow_mut().calls.push(call);
    }

    async fn wait_gate(&self) {
        let gate = self.inner.borrow().gate.clone();
        if let Some(gate) = gate {
            let _ = gate.await;
        }
    }
}

#[async_trait(?Send)]
impl TodoApi for MockTodoApi {
    async fn get_todos(&self, user_id: u32) -> ApiResult<Vec<Todo>> {
        self.record(Call::GetTodos(user_id));
        self.wait_gate().await;

        let inner = self.inner.borrow();
        if inner.fail_load {
            return Err(ApiError::Status(500));
        }
        Ok(inner.todos.iter().filter(|todo| todo.user_id == user_id).cloned().collect())
    }

    async fn create_todo(&self, todo: &Todo) -> ApiResult<Todo> {
        self.record(Call::CreateTodo(todo.clone()));
        self.wait_gate().await;

        let mut inner = self.inner.borrow_mut();
        if inner.fail_create {
            return Err(ApiError::Status(500));
        }
        let saved = Todo {
            id: inner.next_id,
            ..todo.clone()
        };
        inner.next_id += 1;
        inner.todos.push(saved.clone());
        Ok(saved)
    }

    async fn delete_todo(&self, id: u32) -> ApiResult<()> {
        self.record(Call::DeleteTodo(id));
        self.wait_gate().await;

        let mut inner = self.inner.borrow_mut();
        if inner.fail_delete.contains(&id) {
            return Err(ApiError::Request("connection reset".to_string()));
        }
        let before = inner.todos.len();
        inner.todos.retain(|todo| todo.id != id);
        if inner.todos.len() == before {
            return Err(ApiError::Status(404));
        }
        Ok(())
    }
}
