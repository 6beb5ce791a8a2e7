//! Frontend Models
//!
//! Data structures exchanged with the todos API and shown in the UI.

use serde::{Deserialize, Serialize};

/// Todo item (matches the API payload)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: u32,
    pub user_id: u32,
    pub title: String,
    pub completed: bool,
}

impl Todo {
    /// Id carried by a todo the server has not assigned yet
    pub const UNSAVED_ID: u32 = 0;

    /// Unsaved, not completed todo for the given user
    pub fn draft(user_id: u32, title: impl Into<String>) -> Self {
        Self {
            id: Self::UNSAVED_ID,
            user_id,
            title: title.into(),
            completed: false,
        }
    }
}

impl AsRef<Todo> for Todo {
    fn as_ref(&self) -> &Todo {
        self
    }
}

/// Visibility filter for the list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Filter {
    #[default]
    All,
    Active,
    Completed,
}

impl Filter {
    /// All filters, in the order the footer shows them
    pub const ALL: [Filter; 3] = [Filter::All, Filter::Active, Filter::Completed];

    pub fn label(self) -> &'static str {
        match self {
            Filter::All => "All",
            Filter::Active => "Active",
            Filter::Completed => "Completed",
        }
    }

    /// Location hash the filter link points at
    pub fn hash(self) -> &'static str {
        match self {
            Filter::All => "#/",
            Filter::Active => "#/active",
            Filter::Completed => "#/completed",
        }
    }

    /// Parse a location hash such as `#/active`; unknown hashes select `All`
    pub fn from_hash(hash: &str) -> Self {
        match hash.trim_start_matches('#').trim_matches('/') {
            "active" => Filter::Active,
            "completed" => Filter::Completed,
            _ => Filter::All,
        }
    }

    pub fn matches(self, todo: &Todo) -> bool {
        match self {
            Filter::All => true,
            Filter::Active => !todo.completed,
            Filter::Completed => todo.completed,
        }
    }
}

/// Errors shown in the notification banner
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ErrorKind {
    #[error("Title should not be empty")]
    EmptyTitle,
    #[error("Unable to add a todo")]
    AddFailed,
    #[error("Unable to delete a todo")]
    DeleteFailed,
    #[error("Unable to load todos")]
    LoadFailed,
}

/// Which mutating operation is in flight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Processing {
    #[default]
    Idle,
    Creating,
    Deleting(u32),
}

impl Processing {
    pub fn is_idle(self) -> bool {
        self == Processing::Idle
    }

    pub fn is_deleting(self, id: u32) -> bool {
        self == Processing::Deleting(id)
    }
}
