use std::path::{Path, PathBuf};

pub use crate::service::task_service::DEFAULT_SORT_MODE;

pub const DEFAULT_FILE: &str = "~/Todo/todo.txt";
pub const ARCHIVE_FILE_NAME: &str = "done.txt";
pub const BACKUP_SUFFIX: &str = ".bak";

/// Where tasks are read from and where results go.
#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    pub file: PathBuf,
    /// Print results instead of rewriting the todo and archive files.
    pub stdout: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            file: expand_home(Path::new(DEFAULT_FILE)),
            stdout: false,
        }
    }
}

impl RunConfig {
    pub fn new(file: impl AsRef<Path>, stdout: bool) -> Self {
        Self {
            file: expand_home(file.as_ref()),
            stdout,
        }
    }

    /// The archive lives next to the todo file.
    pub fn archive_file(&self) -> PathBuf {
        archive_path(&self.file)
    }
}

pub fn archive_path(file: &Path) -> PathBuf {
    file.parent()
        .map(|dir| dir.join(ARCHIVE_FILE_NAME))
        .unwrap_or_else(|| PathBuf::from(ARCHIVE_FILE_NAME))
}

pub fn backup_path(file: &Path) -> PathBuf {
    let mut name = file.as_os_str().to_os_string();
    name.push(BACKUP_SUFFIX);
    PathBuf::from(name)
}

/// Resolve a leading `~` against the home directory. Left untouched when
/// there is no home directory.
pub fn expand_home(path: &Path) -> PathBuf {
    let Ok(rest) = path.strip_prefix("~") else {
        return path.to_path_buf();
    };
    match dirs::home_dir() {
        Some(home) => home.join(rest),
        None => path.to_path_buf(),
    }
}
