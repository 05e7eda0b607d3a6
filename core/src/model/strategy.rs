use std::cmp::Ordering;

use crate::error::{Result, TodoError};
use crate::model::task::Task;

/// One column of a composite sort, selected by a single mode letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Status,
    Overdue,
    Threshold,
    Project,
    Priority,
    Context,
    Text,
}

impl SortKey {
    pub fn from_code(code: char) -> Option<Self> {
        match code {
            's' => Some(SortKey::Status),
            'd' => Some(SortKey::Overdue),
            't' => Some(SortKey::Threshold),
            'p' => Some(SortKey::Project),
            'P' => Some(SortKey::Priority),
            'c' => Some(SortKey::Context),
            'T' => Some(SortKey::Text),
            _ => None,
        }
    }

    pub fn compare(self, a: &Task, b: &Task) -> Ordering {
        match self {
            SortKey::Status => a.status.letter().cmp(&b.status.letter()),
            SortKey::Overdue => a.overdue_offset.cmp(&b.overdue_offset),
            SortKey::Threshold => a.over_threshold_offset.cmp(&b.over_threshold_offset),
            SortKey::Project => missing_last(a.project.as_deref(), b.project.as_deref()),
            SortKey::Priority => missing_last(a.priority, b.priority),
            SortKey::Context => missing_last(a.context.as_deref(), b.context.as_deref()),
            SortKey::Text => a.text().cmp(b.text()),
        }
    }
}

// Absent values behave like a maximum sentinel.
fn missing_last<T: Ord>(a: Option<T>, b: Option<T>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// A validated sort mode: the recognised letters of a mode string, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortMode {
    keys: Vec<SortKey>,
}

impl SortMode {
    /// Unknown letters are dropped. A mode with no known letter at all is an error.
    pub fn parse(mode: &str) -> Result<Self> {
        let keys: Vec<SortKey> = mode.chars().filter_map(SortKey::from_code).collect();
        if keys.is_empty() {
            return Err(TodoError::InvalidSortMode(mode.to_string()));
        }
        Ok(Self { keys })
    }

    pub fn keys(&self) -> &[SortKey] {
        &self.keys
    }

    /// Lexicographic comparison over the selected keys.
    pub fn compare(&self, a: &Task, b: &Task) -> Ordering {
        self.keys
            .iter()
            .map(|key| key.compare(a, b))
            .find(|ord| ord.is_ne())
            .unwrap_or(Ordering::Equal)
    }
}
