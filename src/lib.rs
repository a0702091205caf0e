pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod io;
pub mod simulate;
pub mod types;
pub mod utils;

// Re-export the pieces callers usually need
pub use config::SimConfig;
pub use error::SimError;
pub use types::Mode;
