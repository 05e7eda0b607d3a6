use std::fs::{self, File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use crate::error::{Result, TodoError};
use crate::input::load_tasks;
use crate::model::config::{archive_path, backup_path, RunConfig};
use crate::model::task::Task;
use crate::repository::traits::TaskRepository;

pub const LINE_ENDING: &str = "\r\n";

/// A todo.txt file plus its `done.txt` sibling.
#[derive(Clone, Debug)]
pub struct FileTaskRepository {
    file_path: PathBuf,
    archive_path: PathBuf,
}

impl FileTaskRepository {
    pub fn new(file_path: impl Into<PathBuf>) -> Self {
        let file_path = file_path.into();
        let archive_path = archive_path(&file_path);
        FileTaskRepository {
            file_path,
            archive_path,
        }
    }

    pub fn from_config(config: &RunConfig) -> Self {
        FileTaskRepository {
            file_path: config.file.clone(),
            archive_path: config.archive_file(),
        }
    }

    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    pub fn archive_path(&self) -> &Path {
        &self.archive_path
    }
}

impl TaskRepository for FileTaskRepository {
    fn load(&self, today: NaiveDate) -> Result<Vec<Task>> {
        tracing::debug!("loading {}", self.file_path.display());
        if !self.file_path.is_file() {
            return Err(TodoError::MissingFile(self.file_path.clone()));
        }
        let content = fs::read_to_string(&self.file_path).map_err(|source| TodoError::Read {
            path: self.file_path.clone(),
            source,
        })?;
        Ok(load_tasks(content.lines(), today))
    }

    fn save(&self, tasks: &[Task]) -> Result<()> {
        tracing::debug!("writing {} file", self.file_path.display());
        let write_err = |source| TodoError::Write {
            path: self.file_path.clone(),
            source,
        };
        backup(&self.file_path).map_err(write_err)?;
        let file = File::create(&self.file_path).map_err(write_err)?;
        let mut writer = BufWriter::new(file);
        write_lines(&mut writer, tasks, LINE_ENDING).map_err(write_err)?;
        writer.flush().map_err(write_err)?;
        Ok(())
    }

    fn append_archive(&self, tasks: &[Task]) -> Result<()> {
        tracing::debug!("writing {} done task(s) to {}", tasks.len(), self.archive_path.display());
        let write_err = |source| TodoError::Write {
            path: self.archive_path.clone(),
            source,
        };
        backup(&self.archive_path).map_err(write_err)?;
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.archive_path)
            .map_err(write_err)?;
        let mut writer = BufWriter::new(file);
        write_lines(&mut writer, tasks, LINE_ENDING).map_err(write_err)?;
        writer.flush().map_err(write_err)?;
        Ok(())
    }
}

/// Render each task's content followed by `eol`.
pub fn write_lines<W: Write>(writer: &mut W, tasks: &[Task], eol: &str) -> io::Result<()> {
    for task in tasks {
        writer.write_all(task.content.as_bytes())?;
        writer.write_all(eol.as_bytes())?;
    }
    Ok(())
}

// Copy `path` to `path.bak`, only when `path` exists.
fn backup(path: &Path) -> io::Result<()> {
    if path.is_file() {
        fs::copy(path, backup_path(path))?;
    }
    Ok(())
}
