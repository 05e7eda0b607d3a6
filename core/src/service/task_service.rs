use crate::error::Result;
use crate::model::strategy::SortMode;
use crate::model::task::Task;

pub const DEFAULT_SORT_MODE: &str = "sdtpPc";

/// Stable sort of `tasks` by the keys named in `mode`.
///
/// The first recognised letter is the primary key, later letters break ties.
/// Fails with `InvalidSortMode` when `mode` names no known key.
pub fn sort_tasks(tasks: Vec<Task>, mode: &str) -> Result<Vec<Task>> {
    let mode = SortMode::parse(mode)?;
    Ok(sort_by_mode(tasks, &mode))
}

pub fn sort_by_mode(mut tasks: Vec<Task>, mode: &SortMode) -> Vec<Task> {
    tracing::debug!(keys = ?mode.keys(), "sorting {} task(s)", tasks.len());
    tasks.sort_by(|a, b| mode.compare(a, b));
    tasks
}
