//! List Filtering
//!
//! Helper functions for choosing which todos are visible.

use crate::models::{Filter, Todo};

/// Keep the todos matching `filter`, in their original order
pub fn filter_todos<T>(list: &[T], filter: Filter) -> Vec<T>
where
    T: AsRef<Todo> + Clone,
{
    list.iter()
        .filter(|todo| filter.matches(todo.as_ref()))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_todo(id: u32, completed: bool) -> Todo {
        Todo {
            id,
            user_id: 1,
            title: format!("Todo {}", id),
            completed,
        }
    }

    fn sample() -> Vec<Todo> {
        vec![
            make_todo(1, false),
            make_todo(2, true),
            make_todo(3, false),
            make_todo(4, true),
        ]
    }

    #[test]
    fn test_filter_all_is_unchanged() {
        let list = sample();
        assert_eq!(filter_todos(&list, Filter::All), list);
    }

    #[test]
    fn test_filter_active_and_completed() {
        let list = sample();

        let active: Vec<u32> = filter_todos(&list, Filter::Active).iter().map(|t| t.id).collect();
        assert_eq!(active, vec![1, 3]);

        let completed: Vec<u32> = filter_todos(&list, Filter::Completed).iter().map(|t| t.id).collect();
        assert_eq!(completed, vec![2, 4]);
    }

    #[test]
    fn test_filter_is_idempotent() {
        let list = sample();
        for filter in Filter::ALL {
            let once = filter_todos(&list, filter);
            let twice = filter_todos(&once, filter);
            assert_eq!(once, twice, "filter {:?}", filter);
        }
    }

    #[test]
    fn test_filter_does_not_touch_input() {
        let list = sample();
        let before = list.clone();
        let _ = filter_todos(&list, Filter::Completed);
        assert_eq!(list, before);
    }

    #[test]
    fn test_filter_empty_list() {
        let list: Vec<Todo> = Vec::new();
        for filter in Filter::ALL {
            assert!(filter_todos(&list, filter).is_empty());
        }
    }
}
