use chrono::NaiveDate;

use crate::error::Result;
use crate::model::strategy::SortMode;
use crate::model::task::Task;
use crate::repository::TaskRepository;
use crate::service::archive_service::split_archive;
use crate::service::recurrence_service::expand_recurring;
use crate::service::task_service::sort_by_mode;

/// A full maintenance run over the task list.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Recurse (optional), sort, then move done tasks out (optional).
    Sort {
        mode: String,
        recurse: bool,
        archive: bool,
    },
    /// Recurse (optional), then move done tasks out.
    Archive { recurse: bool },
    /// Recurse, move done tasks out, sort what is left.
    Clean { mode: String },
}

/// What a run hands back to the writer.
#[derive(Debug, Default, PartialEq)]
pub struct Outcome {
    pub tasks: Vec<Task>,
    /// Done tasks to append to the archive, when the command archives.
    pub archived: Option<Vec<Task>>,
}

/// Run `command` over `tasks`. The sort mode is checked before anything else
/// happens, so an invalid mode never leaves a half-processed list behind.
pub fn run(command: &Command, tasks: Vec<Task>, today: NaiveDate) -> Result<Outcome> {
    let outcome = match command {
        Command::Sort {
            mode,
            recurse,
            archive,
        } => {
            let mode = SortMode::parse(mode)?;
            let tasks = recurse_if(tasks, *recurse, today);
            let tasks = sort_by_mode(tasks, &mode);
            if *archive {
                let (active, done) = split_archive(tasks);
                Outcome {
                    tasks: active,
                    archived: Some(done),
                }
            } else {
                Outcome {
                    tasks,
                    archived: None,
                }
            }
        }
        Command::Archive { recurse } => {
            let (active, done) = split_archive(recurse_if(tasks, *recurse, today));
            Outcome {
                tasks: active,
                archived: Some(done),
            }
        }
        Command::Clean { mode } => {
            let mode = SortMode::parse(mode)?;
            let (active, done) = split_archive(expand_recurring(tasks, today));
            Outcome {
                tasks: sort_by_mode(active, &mode),
                archived: Some(done),
            }
        }
    };
    Ok(outcome)
}

/// Load, run and store in one go.
pub fn run_with_repository<R: TaskRepository>(
    repo: &R,
    command: &Command,
    today: NaiveDate,
) -> Result<Outcome> {
    let tasks = repo.load(today)?;
    let outcome = run(command, tasks, today)?;
    repo.save(&outcome.tasks)?;
    if let Some(archived) = &outcome.archived {
        repo.append_archive(archived)?;
    }
    Ok(outcome)
}

fn recurse_if(tasks: Vec<Task>, recurse: bool, today: NaiveDate) -> Vec<Task> {
    if recurse {
        expand_recurring(tasks, today).collect()
    } else {
        tasks
    }
}
