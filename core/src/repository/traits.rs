use chrono::NaiveDate;

use crate::error::Result;
use crate::model::task::Task;

pub trait TaskRepository {
    /// Parse every non-blank line of the task list.
    fn load(&self, today: NaiveDate) -> Result<Vec<Task>>;
    /// Replace the task list with `tasks`.
    fn save(&self, tasks: &[Task]) -> Result<()>;
    /// Append `tasks` to the archive of done tasks.
    fn append_archive(&self, tasks: &[Task]) -> Result<()>;
}
