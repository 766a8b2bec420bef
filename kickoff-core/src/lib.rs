pub mod command;
pub mod error;
pub mod file_system;
pub mod output_macros;
pub mod runner;

// When the `test-helpers` feature is enabled, include the mock shell.
#[cfg(any(test, feature = "test-helpers"))]
pub mod mock;

// Re-exported for the output macros.
pub use colored;

pub use command::{CommandInvocation, CommandStatus, Shell, SystemShell};
pub use error::{KickoffError, Result};
pub use runner::CommandRunner;
