pub mod archive_service;
pub mod dto;
pub mod recurrence_service;
pub mod task_service;
