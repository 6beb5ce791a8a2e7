//! UI Components
//!
//! Leptos components of the todo screen.

mod error_notification;
mod todo_footer;
mod todo_header;
mod todo_item;
mod user_warning;

pub use error_notification::ErrorNotification;
pub use todo_footer::TodoFooter;
pub use todo_header::TodoHeader;
pub use todo_item::TodoItem;
pub use user_warning::UserWarning;
