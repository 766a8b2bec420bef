// Standard library
use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitStatus;

// External crates
use duct::cmd;

/// One child-process invocation: the program followed by its arguments, and
/// the directory to run it in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandInvocation {
    args: Vec<String>,
    cwd: Option<PathBuf>,
}

impl CommandInvocation {
    pub fn new<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            args: args.into_iter().map(Into::into).collect(),
            cwd: None,
        }
    }

    /// Run the command from `dir` instead of the current directory.
    pub fn in_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.cwd = Some(dir.into());
        self
    }

    pub fn program(&self) -> Option<&str> {
        self.args.first().map(String::as_str)
    }

    /// Full argument list, program included.
    pub fn args(&self) -> &[String] {
        &self.args
    }

    pub fn cwd(&self) -> Option<&Path> {
        self.cwd.as_deref()
    }

    /// The command line as shown to the user.
    pub fn display(&self) -> String {
        self.args.join(" ")
    }
}

/// Exit status of a finished child process.
///
/// `code` is `None` when the process was terminated by a signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandStatus {
    code: Option<i32>,
}

impl CommandStatus {
    pub fn from_code(code: i32) -> Self {
        Self { code: Some(code) }
    }

    pub fn terminated() -> Self {
        Self { code: None }
    }

    pub fn code(&self) -> Option<i32> {
        self.code
    }

    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

impl From<ExitStatus> for CommandStatus {
    fn from(status: ExitStatus) -> Self {
        Self {
            code: status.code(),
        }
    }
}

/// The process-spawning seam used by [`crate::CommandRunner`].
pub trait Shell {
    /// Resolve `program` against the search path.
    fn which(&self, program: &str) -> Option<PathBuf>;

    /// Run `invocation` with `program` as the resolved executable, wait for it,
    /// and return its exit status. Standard streams are inherited.
    fn run(&self, program: &Path, invocation: &CommandInvocation) -> io::Result<CommandStatus>;
}

/// Runs real child processes.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemShell;

impl Shell for SystemShell {
    fn which(&self, program: &str) -> Option<PathBuf> {
        which::which(program).ok()
    }

    fn run(&self, program: &Path, invocation: &CommandInvocation) -> io::Result<CommandStatus> {
        let args = invocation.args().get(1..).unwrap_or_default();
        let mut expression = cmd(program, args).unchecked();
        if let Some(dir) = invocation.cwd() {
            expression = expression.dir(dir);
        }
        let output = expression.run()?;
        Ok(output.status.into())
    }
}
