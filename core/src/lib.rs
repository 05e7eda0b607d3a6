pub mod error;
pub mod input;
pub mod model;
pub mod repository;
pub mod service;
pub mod time;
pub mod usecase;

pub use error::TodoError;
pub use input::{load_tasks, parse_pending_task, parse_task};
pub use model::config::RunConfig;
pub use model::strategy::{SortKey, SortMode};
pub use model::task::{Recurrence, RecurrenceUnit, Status, Task};
pub use repository::{FileTaskRepository, TaskRepository};
pub use service::archive_service::split_archive;
pub use service::dto::TaskDto;
pub use service::recurrence_service::{expand_recurring, next_occurrence};
pub use service::task_service::{sort_tasks, DEFAULT_SORT_MODE};
pub use usecase::pipeline::{Command, Outcome};
