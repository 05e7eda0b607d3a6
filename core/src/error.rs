use std::path::PathBuf;

/// Errors surfaced by the todo.txt engine.
///
/// Per-line anomalies (malformed dates, unknown markers) never show up here;
/// the extractor treats them as absent fields.
#[derive(Debug, thiserror::Error)]
pub enum TodoError {
    #[error("invalid sort mode: '{0}'")]
    InvalidSortMode(String),
    #[error("invalid recurrence 'rec:{rule}': {reason}")]
    RecurrenceParse { rule: String, reason: String },
    #[error("file {} not found", .0.display())]
    MissingFile(PathBuf),
    #[error("could not read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, TodoError>;
