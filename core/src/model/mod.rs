pub mod config;
pub mod strategy;
pub mod task;
