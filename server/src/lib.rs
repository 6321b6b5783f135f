pub mod api;
pub mod collectors;
pub mod config;
pub mod format;
