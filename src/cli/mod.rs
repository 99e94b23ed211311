//! CLI layer - Command parsing, the interactive session and output formatting

pub mod commands;
pub mod output;
pub mod session;

pub use commands::{split_line, CatalogSection, Cli, Commands, SessionCommand, SessionLine};
pub use session::{Reply, Session};
