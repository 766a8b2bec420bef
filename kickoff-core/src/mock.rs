//! In-memory [`Shell`] for tests.
//!
//! Programs are "installed" explicitly, every run is recorded, and exit codes,
//! launch errors and filesystem side effects can be scripted per program.

use std::collections::{HashMap, HashSet};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::command::{CommandInvocation, CommandStatus, Shell};

type SideEffect = Arc<dyn Fn(&CommandInvocation) + Send + Sync>;

#[derive(Default)]
struct MockState {
    programs: HashSet<String>,
    exit_codes: HashMap<String, Option<i32>>,
    launch_errors: HashSet<String>,
    side_effects: HashMap<String, SideEffect>,
    invocations: Vec<CommandInvocation>,
}

/// Clones share state, so a test can keep one handle and give another to the
/// runner.
#[derive(Clone, Default)]
pub struct MockShell {
    state: Arc<Mutex<MockState>>,
}

impl MockShell {
    pub fn new() -> Self {
        Self::default()
    }

    fn update(self, f: impl FnOnce(&mut MockState)) -> Self {
        f(&mut self.state.lock().unwrap());
        self
    }

    /// Make `program` resolvable on the mock search path.
    pub fn with_program(self, program: &str) -> Self {
        self.update(|s| {
            s.programs.insert(program.to_string());
        })
    }

    pub fn with_exit_code(self, program: &str, code: i32) -> Self {
        self.update(|s| {
            s.exit_codes.insert(program.to_string(), Some(code));
        })
    }

    /// Runs of `program` end as if killed by a signal.
    pub fn with_termination(self, program: &str) -> Self {
        self.update(|s| {
            s.exit_codes.insert(program.to_string(), None);
        })
    }

    /// Runs of `program` fail to launch.
    pub fn with_launch_error(self, program: &str) -> Self {
        self.update(|s| {
            s.launch_errors.insert(program.to_string());
        })
    }

    /// Call `effect` on every run of `program`, before the exit status is
    /// returned. Used to simulate generators creating files.
    pub fn with_side_effect(
        self,
        program: &str,
        effect: impl Fn(&CommandInvocation) + Send + Sync + 'static,
    ) -> Self {
        self.update(|s| {
            s.side_effects.insert(program.to_string(), Arc::new(effect));
        })
    }

    /// Every invocation that reached [`Shell::run`], in order.
    pub fn invocations(&self) -> Vec<CommandInvocation> {
        self.state.lock().unwrap().invocations.clone()
    }
}

impl Shell for MockShell {
    fn which(&self, program: &str) -> Option<PathBuf> {
        let state = self.state.lock().unwrap();
        state
            .programs
            .contains(program)
            .then(|| Path::new("/mock/bin").join(program))
    }

    fn run(&self, _program: &Path, invocation: &CommandInvocation) -> io::Result<CommandStatus> {
        let name = invocation.program().unwrap_or_default().to_string();

        let (effect, exit_code) = {
            let mut state = self.state.lock().unwrap();
            state.invocations.push(invocation.clone());
            if state.launch_errors.contains(&name) {
                return Err(io::Error::new(
                    io::ErrorKind::PermissionDenied,
                    "mock launch failure",
                ));
            }
            (
                state.side_effects.get(&name).cloned(),
                state.exit_codes.get(&name).copied().unwrap_or(Some(0)),
            )
        };

        if let Some(effect) = effect {
            effect(invocation);
        }

        Ok(match exit_code {
            Some(code) => CommandStatus::from_code(code),
            None => CommandStatus::terminated(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_which_only_knows_registered_programs() {
        let shell = MockShell::new().with_program("npm");
        assert_eq!(shell.which("npm"), Some(PathBuf::from("/mock/bin/npm")));
        assert_eq!(shell.which("npx"), None);
    }

    #[test]
    fn test_side_effect_runs_and_invocation_is_recorded() {
        let dir = tempfile::tempdir().expect("Failed to create temp directory");
        let marker = dir.path().join("created");
        let marker_clone = marker.clone();
        let shell = MockShell::new()
            .with_program("npm")
            .with_side_effect("npm", move |_| {
                std::fs::write(&marker_clone, "").unwrap();
            });

        let invocation = CommandInvocation::new(["npm", "install"]);
        let status = shell.run(Path::new("/mock/bin/npm"), &invocation).unwrap();

        assert!(status.success());
        assert!(marker.exists());
        assert_eq!(shell.invocations(), vec![invocation]);
    }
}
