//! Install handlers: one flow shared by every framework.

mod composer;
mod react;

use std::env;
use std::path::{Path, PathBuf};

use kickoff_core::error::{KickoffError, Result};
use kickoff_core::{ko_bold, ko_error, ko_header, ko_println, ko_success, ko_warning};
use kickoff_core::{CommandInvocation, CommandRunner};
use kickoff_messages::errors::ErrorContext;
use kickoff_messages::{msg, MESSAGES};
use tracing::{debug, info, info_span};

use crate::console::Console;
use crate::framework::{Framework, Launcher};
use crate::layout::{display_relative, ProjectLayout};
use crate::menu::ActionHandler;

pub use composer::resolve_composer;

/// How an install handler ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallOutcome {
    /// The generator succeeded; the project lives here.
    Created(PathBuf),
    /// No project name was given.
    Skipped,
    /// A dependency was missing, the name was rejected, or the generator failed.
    Failed,
}

/// Runs project generators into a [`ProjectLayout`].
pub struct Installer {
    runner: CommandRunner,
    layout: ProjectLayout,
}

impl Installer {
    pub fn new(runner: CommandRunner, layout: ProjectLayout) -> Self {
        Self { runner, layout }
    }

    pub fn install(&self, framework: Framework, console: &mut dyn Console) -> Result<InstallOutcome> {
        let span = info_span!("install", framework = %framework);
        let _enter = span.enter();

        ko_header!("{}", msg!(MESSAGES.installer.header, framework = framework.heading()));

        let Some(launcher) = self.launcher_command(framework) else {
            return Ok(InstallOutcome::Failed);
        };

        let Some(line) = console.read_line(MESSAGES.installer.project_name_prompt)? else {
            return Ok(InstallOutcome::Skipped);
        };
        let name = line.trim();
        if name.is_empty() {
            debug!("empty project name, nothing to do");
            return Ok(InstallOutcome::Skipped);
        }
        if let Err(e) = validate_project_name(name) {
            ko_error!("{e}");
            return Ok(InstallOutcome::Failed);
        }

        let category_dir = self.layout.ensure_category_dir(framework.category())?;
        let project_dir = self.layout.project_dir(framework.category(), name);
        if project_dir.exists() {
            ko_warning!(
                "{}",
                msg!(
                    MESSAGES.installer.project_exists,
                    name = name,
                    path = project_dir.display().to_string()
                )
            );
        }

        let invocation = CommandInvocation::new(launcher.into_iter().chain(framework.generator_args(name)))
            .in_dir(&category_dir);
        if !self.runner.run(&invocation) {
            return Ok(InstallOutcome::Failed);
        }

        info!(project = %project_dir.display(), "project created");
        ko_success!(
            "{}",
            msg!(
                MESSAGES.installer.created,
                framework = framework.display_name(),
                name = name
            )
        );

        if framework == Framework::React {
            react::follow_up(&self.runner, &project_dir, console)?;
        }

        print_next_steps(framework, &project_dir);
        Ok(InstallOutcome::Created(project_dir))
    }

    /// The command that launches `framework`'s generator, or `None` after
    /// telling the user what is missing.
    fn launcher_command(&self, framework: Framework) -> Option<Vec<String>> {
        let launcher = framework.launcher();
        let (program, label) = launcher.requirement();
        if !self.runner.check_dependency(program, label) {
            if launcher == Launcher::Composer {
                ko_error!("{}", MESSAGES.installer.php_required);
            }
            let context = ErrorContext {
                operation: "install",
                subject: Some(framework.display_name().to_string()),
                suggestions: launcher.hints(),
            };
            ko_error!("{}", context.display());
            return None;
        }

        match launcher {
            Launcher::Npm | Launcher::Npx => Some(vec![program.to_string()]),
            Launcher::Composer => resolve_composer(&self.runner, &self.layout),
        }
    }
}

impl ActionHandler for Installer {
    fn handle(&mut self, framework: Framework, console: &mut dyn Console) -> Result<()> {
        self.install(framework, console).map(|_| ())
    }
}

/// Accept only names that stay a single directory under the category folder
/// and cannot be mistaken for a generator flag.
pub fn validate_project_name(name: &str) -> Result<()> {
    let reason = if name.contains('/') || name.contains('\\') {
        Some("path separators are not allowed")
    } else if name.contains("..") {
        Some("'..' is not allowed")
    } else if name.starts_with('.') {
        Some("it cannot start with '.'")
    } else if name.starts_with('-') {
        Some("it cannot start with '-'")
    } else if !name
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
    {
        Some("use only letters, digits, '-', '_' and '.'")
    } else {
        None
    };

    match reason {
        Some(reason) => Err(KickoffError::Validation(msg!(
            MESSAGES.installer.invalid_project_name,
            name = name,
            reason = reason
        ))),
        None => Ok(()),
    }
}

fn print_next_steps(framework: Framework, project_dir: &Path) {
    let shown = match env::current_dir() {
        Ok(cwd) => display_relative(project_dir, &cwd),
        Err(_) => project_dir.display().to_string(),
    };

    ko_bold!("{}", MESSAGES.installer.get_started);
    ko_println!("{}", msg!(MESSAGES.installer.cd_line, path = shown));
    for step in framework.next_steps() {
        ko_println!("{}", msg!(MESSAGES.installer.next_step_line, command = *step));
    }
}
