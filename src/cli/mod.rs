pub mod commands;
pub mod context;
pub mod generate;
pub mod reports;

pub use commands::{Cli, Commands};
pub use context::Context;
