// Standard library
use std::io;
use std::path::PathBuf;

// External crates
use kickoff_messages::{msg, MESSAGES};
use tracing::{debug, info, warn};

// Internal imports
use crate::command::{CommandInvocation, CommandStatus, Shell, SystemShell};
use crate::error::{KickoffError, Result};
use crate::{ko_error, ko_progress, ko_success};

/// Checks for executables and runs them, reporting every outcome to the user.
///
/// Neither operation returns an error: failures are printed and turned into
/// `false` so a caller only has to decide whether to continue.
pub struct CommandRunner {
    shell: Box<dyn Shell>,
}

impl Default for CommandRunner {
    fn default() -> Self {
        Self::system()
    }
}

impl CommandRunner {
    pub fn new(shell: impl Shell + 'static) -> Self {
        Self {
            shell: Box::new(shell),
        }
    }

    /// A runner that spawns real processes.
    pub fn system() -> Self {
        Self::new(SystemShell)
    }

    /// Where `program` resolves on the search path, if anywhere.
    pub fn resolve(&self, program: &str) -> Option<PathBuf> {
        self.shell.which(program)
    }

    pub fn is_available(&self, program: &str) -> bool {
        self.resolve(program).is_some()
    }

    /// Reports whether `program` is on the search path, printing a warning
    /// naming `label` when it is not.
    pub fn check_dependency(&self, program: &str, label: &str) -> bool {
        match self.resolve(program) {
            Some(path) => {
                debug!(program, path = %path.display(), "dependency found");
                true
            }
            None => {
                debug!(program, "dependency missing");
                ko_error!("{}", msg!(MESSAGES.installer.dependency_missing, label = label));
                false
            }
        }
    }

    /// Runs `invocation` to completion and returns whether it exited with 0.
    pub fn run(&self, invocation: &CommandInvocation) -> bool {
        let command = invocation.display();
        ko_progress!(
            "{}",
            msg!(MESSAGES.common.command_running, command = command.as_str())
        );

        match self.execute(invocation) {
            Ok(status) if status.success() => {
                ko_success!("{}", MESSAGES.common.command_success);
                true
            }
            Ok(status) => {
                match status.code() {
                    Some(code) => ko_error!(
                        "{}",
                        msg!(
                            MESSAGES.common.command_failed,
                            command = command.as_str(),
                            code = code.to_string()
                        )
                    ),
                    None => ko_error!(
                        "{}",
                        msg!(MESSAGES.common.command_terminated, command = command.as_str())
                    ),
                }
                false
            }
            Err(e) => {
                warn!(error = %e, command = %command, "command did not run");
                ko_error!(
                    "{}",
                    msg!(MESSAGES.common.command_unexpected, error = e.to_string())
                );
                false
            }
        }
    }

    fn execute(&self, invocation: &CommandInvocation) -> Result<CommandStatus> {
        let program = invocation
            .program()
            .ok_or_else(|| KickoffError::Command("no command to run".to_string()))?;

        let resolved = self.shell.which(program).ok_or_else(|| KickoffError::Launch {
            program: program.to_string(),
            source: io::Error::new(io::ErrorKind::NotFound, "not found on the search path"),
        })?;

        info!(
            program = %resolved.display(),
            args = ?&invocation.args()[1..],
            cwd = ?invocation.cwd(),
            "running command"
        );

        let status = self
            .shell
            .run(&resolved, invocation)
            .map_err(|source| KickoffError::Launch {
                program: program.to_string(),
                source,
            })?;

        info!(code = ?status.code(), "command finished");
        Ok(status)
    }
}
