pub mod config;
pub mod format;
pub mod fs;
pub mod runner;

// Re-export key items for convenience
pub use config::ExtraerConfig;
pub use fs::ReadError;
pub use runner::{run, run_with_writer};
