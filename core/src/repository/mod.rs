pub mod file;
pub mod traits;

// Re-export
pub use file::{write_lines, FileTaskRepository};
pub use traits::TaskRepository;
