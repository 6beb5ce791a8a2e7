//! Todo List State
//!
//! Immutable snapshot of everything the todo screen shows. Every transition
//! takes `&self` and returns the next snapshot; the reactive store only ever
//! swaps whole snapshots in.

use reactive_stores::Store;

use crate::filter::filter_todos;
use crate::models::{ErrorKind, Filter, Processing, Todo};

/// Stable identity of a list entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryKey {
    /// Optimistic placeholder, keyed by a client-side counter
    Pending(u64),
    /// Item confirmed by the server
    Saved(u32),
}

/// One row of the list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoEntry {
    pub key: EntryKey,
    pub todo: Todo,
}

impl TodoEntry {
    pub fn saved(todo: Todo) -> Self {
        Self {
            key: EntryKey::Saved(todo.id),
            todo,
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.key, EntryKey::Pending(_))
    }
}

impl AsRef<Todo> for TodoEntry {
    fn as_ref(&self) -> &Todo {
        &self.todo
    }
}

/// Error currently shown in the banner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Notice {
    pub kind: ErrorKind,
    /// Increases with every notice; lets a dismiss timer recognise its own notice
    pub seq: u64,
}

/// Todo screen state with field-level reactivity
#[derive(Clone, Debug, Default, PartialEq, Store)]
pub struct TodoState {
    /// Saved items and optimistic placeholders, in display order
    pub entries: Vec<TodoEntry>,
    pub filter: Filter,
    pub notice: Option<Notice>,
    pub processing: Processing,
    /// Number of saved, not completed items
    pub active_count: usize,
    pub next_pending_key: u64,
    pub notice_seq: u64,
}

impl TodoState {
    pub fn new(filter: Filter) -> Self {
        Self {
            filter,
            ..Default::default()
        }
    }

    pub fn todos(&self) -> impl Iterator<Item = &Todo> {
        self.entries.iter().map(|entry| &entry.todo)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries passing the active filter
    pub fn visible_entries(&self) -> Vec<TodoEntry> {
        filter_todos(&self.entries, self.filter)
    }

    /// Ids of saved items that are completed
    pub fn completed_ids(&self) -> Vec<u32> {
        self.entries
            .iter()
            .filter(|entry| !entry.is_pending() && entry.todo.completed)
            .map(|entry| entry.todo.id)
            .collect()
    }

    pub fn has_completed(&self) -> bool {
        self.todos().any(|todo| todo.completed)
    }

    pub fn all_completed(&self) -> bool {
        self.todos().all(|todo| todo.completed)
    }

    // ========================
    // Transitions
    // ========================

    /// Replace the list with what the server returned
    pub fn loaded(&self, todos: Vec<Todo>) -> Self {
        let active_count = todos.iter().filter(|todo| !todo.completed).count();
        Self {
            entries: todos.into_iter().map(TodoEntry::saved).collect(),
            active_count,
            ..self.clone()
        }
    }

    pub fn load_failed(&self) -> Self {
        Self {
            entries: Vec::new(),
            active_count: 0,
            ..self.clone()
        }
        .with_error(ErrorKind::LoadFailed)
    }

    pub fn with_error(&self, kind: ErrorKind) -> Self {
        let seq = self.notice_seq + 1;
        Self {
            notice: Some(Notice { kind, seq }),
            notice_seq: seq,
            ..self.clone()
        }
    }

    pub fn without_notice(&self) -> Self {
        Self {
            notice: None,
            ..self.clone()
        }
    }

    /// Clear the notice only if it is still the one numbered `seq`
    pub fn dismissed(&self, seq: u64) -> Self {
        match self.notice {
            Some(notice) if notice.seq == seq => self.without_notice(),
            _ => self.clone(),
        }
    }

    pub fn filtered_by(&self, filter: Filter) -> Self {
        Self {
            filter,
            ..self.clone()
        }
    }

    /// Append an optimistic placeholder for `draft`
    pub fn create_started(&self, draft: Todo) -> (Self, EntryKey) {
        let key = EntryKey::Pending(self.next_pending_key);
        let mut entries = self.entries.clone();
        entries.push(TodoEntry {
            key,
            todo: Todo {
                id: Todo::UNSAVED_ID,
                ..draft
            },
        });

        let next = Self {
            entries,
            notice: None,
            processing: Processing::Creating,
            next_pending_key: self.next_pending_key + 1,
            ..self.clone()
        };
        (next, key)
    }

    /// Append the server's copy and drop the placeholder `key`
    pub fn create_succeeded(&self, key: EntryKey, saved: Todo) -> Self {
        let active_count = if saved.completed {
            self.active_count
        } else {
            self.active_count + 1
        };
        let entries = self
            .entries
            .iter()
            .filter(|entry| entry.key != key)
            .cloned()
            .chain(std::iter::once(TodoEntry::saved(saved)))
            .collect();

        Self {
            entries,
            active_count,
            ..self.clone()
        }
        .settled(Processing::Creating)
    }

    pub fn create_failed(&self, key: EntryKey) -> Self {
        Self {
            entries: self.entries.iter().filter(|entry| entry.key != key).cloned().collect(),
            ..self.clone()
        }
        .with_error(ErrorKind::AddFailed)
        .settled(Processing::Creating)
    }

    pub fn delete_started(&self, id: u32) -> Self {
        Self {
            notice: None,
            processing: Processing::Deleting(id),
            ..self.clone()
        }
    }

    pub fn delete_succeeded(&self, id: u32) -> Self {
        let key = EntryKey::Saved(id);
        let removed_active = self
            .entries
            .iter()
            .any(|entry| entry.key == key && !entry.todo.completed);
        let active_count = if removed_active {
            self.active_count.saturating_sub(1)
        } else {
            self.active_count
        };

        Self {
            entries: self.entries.iter().filter(|entry| entry.key != key).cloned().collect(),
            active_count,
            ..self.clone()
        }
        .settled(Processing::Deleting(id))
    }

    pub fn delete_failed(&self, id: u32) -> Self {
        self.with_error(ErrorKind::DeleteFailed)
            .settled(Processing::Deleting(id))
    }

    /// Clear the processing marker if it still names `marker`
    fn settled(mut self, marker: Processing) -> Self {
        if self.processing == marker {
            self.processing = Processing::Idle;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_todo(id: u32, title: &str, completed: bool) -> Todo {
        Todo {
            id,
            user_id: 1,
            title: title.to_string(),
            completed,
        }
    }

    fn ids(state: &TodoState) -> Vec<u32> {
        state.todos().map(|todo| todo.id).collect()
    }

    #[test]
    fn test_loaded_recomputes_active_count() {
        let state = TodoState::default().loaded(vec![
            make_todo(1, "a", false),
            make_todo(2, "b", true),
            make_todo(3, "c", false),
        ]);
        assert_eq!(ids(&state), vec![1, 2, 3]);
        assert_eq!(state.active_count, 2);
        assert_eq!(state.completed_ids(), vec![2]);
        assert!(state.has_completed());
        assert!(!state.all_completed());
    }

    #[test]
    fn test_load_failed_leaves_list_empty() {
        let state = TodoState::default().load_failed();
        assert!(state.is_empty());
        assert_eq!(state.notice.map(|n| n.kind), Some(ErrorKind::LoadFailed));
    }

    #[test]
    fn test_create_started_shows_placeholder() {
        let state = TodoState::default().loaded(vec![make_todo(1, "a", false)]);
        let (next, key) = state.create_started(Todo::draft(1, "b"));

        assert_eq!(key, EntryKey::Pending(0));
        assert_eq!(next.entries.len(), 2);
        assert!(next.entries[1].is_pending());
        assert_eq!(next.entries[1].todo.id, Todo::UNSAVED_ID);
        assert_eq!(next.processing, Processing::Creating);
        // the previous snapshot is untouched
        assert_eq!(state.entries.len(), 1);
    }

    #[test]
    fn test_create_succeeded_replaces_placeholder() {
        let state = TodoState::default().loaded(vec![make_todo(1, "a", false)]);
        let (pending, key) = state.create_started(Todo::draft(1, "b"));
        let done = pending.create_succeeded(key, make_todo(2, "b", false));

        assert_eq!(ids(&done), vec![1, 2]);
        assert!(done.entries.iter().all(|entry| !entry.is_pending()));
        assert_eq!(done.active_count, 2);
        assert_eq!(done.processing, Processing::Idle);
    }

    #[test]
    fn test_interleaved_creates_reconcile_by_key() {
        let state = TodoState::default();
        let (state, first) = state.create_started(Todo::draft(1, "first"));
        let (state, second) = state.create_started(Todo::draft(1, "second"));

        // second resolves before first
        let state = state.create_succeeded(second, make_todo(11, "second", false));
        assert_eq!(state.entries[0].key, first);
        assert_eq!(state.entries[1].key, EntryKey::Saved(11));

        let state = state.create_failed(first);
        assert_eq!(ids(&state), vec![11]);
        assert_eq!(state.active_count, 1);
    }

    #[test]
    fn test_create_failed_rolls_back() {
        let state = TodoState::default().loaded(vec![make_todo(1, "a", false)]);
        let (pending, key) = state.create_started(Todo::draft(1, "b"));
        let failed = pending.create_failed(key);

        assert_eq!(failed.entries, state.entries);
        assert_eq!(failed.active_count, 1);
        assert_eq!(failed.notice.map(|n| n.kind), Some(ErrorKind::AddFailed));
        assert_eq!(failed.processing, Processing::Idle);
    }

    #[test]
    fn test_delete_succeeded_decrements_only_active() {
        let state = TodoState::default().loaded(vec![
            make_todo(1, "a", false),
            make_todo(2, "b", true),
        ]);

        let without_active = state.delete_started(1).delete_succeeded(1);
        assert_eq!(ids(&without_active), vec![2]);
        assert_eq!(without_active.active_count, 0);

        let without_completed = state.delete_started(2).delete_succeeded(2);
        assert_eq!(ids(&without_completed), vec![1]);
        assert_eq!(without_completed.active_count, 1);
    }

    #[test]
    fn test_delete_succeeded_for_missing_id_keeps_count() {
        let state = TodoState::default().loaded(vec![make_todo(1, "a", false)]);
        let next = state.delete_succeeded(99);
        assert_eq!(next.entries, state.entries);
        assert_eq!(next.active_count, 1);
    }

    #[test]
    fn test_delete_failed_keeps_item() {
        let state = TodoState::default().loaded(vec![make_todo(1, "a", false)]);
        let failed = state.delete_started(1).delete_failed(1);

        assert_eq!(failed.entries, state.entries);
        assert_eq!(failed.notice.map(|n| n.kind.to_string()), Some("Unable to delete a todo".to_string()));
        assert_eq!(failed.processing, Processing::Idle);
    }

    #[test]
    fn test_settle_keeps_newer_marker() {
        let state = TodoState::default().loaded(vec![
            make_todo(1, "a", true),
            make_todo(2, "b", true),
        ]);
        let state = state.delete_started(1).delete_started(2);
        let state = state.delete_succeeded(1);
        assert_eq!(state.processing, Processing::Deleting(2));
        let state = state.delete_succeeded(2);
        assert!(state.processing.is_idle());
    }

    #[test]
    fn test_stale_dismiss_keeps_newer_notice() {
        let state = TodoState::default().with_error(ErrorKind::AddFailed);
        let first = state.notice.unwrap().seq;
        let state = state.with_error(ErrorKind::DeleteFailed);

        let state = state.dismissed(first);
        assert_eq!(state.notice.map(|n| n.kind), Some(ErrorKind::DeleteFailed));

        let current = state.notice.unwrap().seq;
        assert_eq!(state.dismissed(current).notice, None);
    }

    #[test]
    fn test_visible_entries_follow_filter() {
        let state = TodoState::default()
            .loaded(vec![make_todo(1, "a", false), make_todo(2, "b", true)])
            .filtered_by(Filter::Completed);
        let visible: Vec<u32> = state.visible_entries().iter().map(|e| e.todo.id).collect();
        assert_eq!(visible, vec![2]);
    }
}
