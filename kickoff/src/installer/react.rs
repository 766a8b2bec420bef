//! Optional steps offered after a React project is generated.

use std::path::Path;

use kickoff_core::error::Result;
use kickoff_core::file_system::{
    ensure_dir, prepend_to_file, remove_file_if_exists, truncate_if_exists, write_file,
};
use kickoff_core::{ko_error, ko_println, ko_success, ko_warning, CommandInvocation, CommandRunner};
use kickoff_messages::{msg, MESSAGES};
use tracing::warn;

use crate::console::Console;
use crate::templates;

/// Offers cleanup, then router and Tailwind setup on top of the cleaned
/// project. A failing step is reported and the remaining questions are
/// still asked.
pub(crate) fn follow_up(
    runner: &CommandRunner,
    project_dir: &Path,
    console: &mut dyn Console,
) -> Result<()> {
    if !console.confirm(MESSAGES.react.cleanup_confirm)? {
        return Ok(());
    }
    report(clean_boilerplate(project_dir), MESSAGES.react.cleanup_error);

    if console.confirm(MESSAGES.react.router_confirm)? {
        report(setup_router(runner, project_dir), MESSAGES.react.router_error);
    }
    if console.confirm(MESSAGES.react.tailwind_confirm)? {
        report(setup_tailwind(runner, project_dir), MESSAGES.react.tailwind_error);
    }
    Ok(())
}

fn report(result: Result<()>, template: &'static str) {
    if let Err(e) = result {
        warn!(error = %e, "follow-up step failed");
        ko_error!("{}", msg!(template, error = e.to_string()));
    }
}

pub(crate) fn clean_boilerplate(project_dir: &Path) -> Result<()> {
    ko_warning!("{}", MESSAGES.react.cleanup_starting);

    for relative in templates::REACT_BOILERPLATE {
        let path = project_dir.join(relative);
        if remove_file_if_exists(&path)? {
            ko_println!("{}", msg!(MESSAGES.react.cleanup_removed, file = file_name(&path)));
        }
    }

    let app = project_dir.join("src").join("App.jsx");
    write_file(&app, templates::MINIMAL_APP)?;
    ko_println!("{}", msg!(MESSAGES.react.cleanup_reset, file = file_name(&app)));

    let css = project_dir.join("src").join("index.css");
    if truncate_if_exists(&css)? {
        ko_println!("{}", msg!(MESSAGES.react.cleanup_cleared, file = file_name(&css)));
    }

    ko_success!("{}", MESSAGES.react.cleanup_complete);
    Ok(())
}

pub(crate) fn setup_router(runner: &CommandRunner, project_dir: &Path) -> Result<()> {
    ko_warning!("{}", MESSAGES.react.router_installing);
    let install = CommandInvocation::new(["npm", "install", "react-router-dom"]).in_dir(project_dir);
    if !runner.run(&install) {
        ko_error!("{}", MESSAGES.react.router_install_failed);
        return Ok(());
    }

    ko_warning!("{}", MESSAGES.react.router_writing);
    for dir in templates::ROUTER_DIRS {
        ensure_dir(&project_dir.join(dir))?;
    }
    for (relative, contents) in templates::ROUTER_FILES {
        write_file(&project_dir.join(relative), contents)?;
    }

    ko_success!("{}", MESSAGES.react.router_complete);
    Ok(())
}

pub(crate) fn setup_tailwind(runner: &CommandRunner, project_dir: &Path) -> Result<()> {
    ko_warning!("{}", MESSAGES.react.tailwind_installing);
    let install = CommandInvocation::new(["npm", "install", "-D", "tailwindcss", "postcss", "autoprefixer"])
        .in_dir(project_dir);
    if !runner.run(&install) {
        ko_error!("{}", MESSAGES.react.tailwind_install_failed);
        return Ok(());
    }

    ko_warning!("{}", MESSAGES.react.tailwind_configuring);
    for (relative, contents) in templates::TAILWIND_FILES {
        write_file(&project_dir.join(relative), contents)?;
    }
    prepend_to_file(
        &project_dir.join("src").join("index.css"),
        templates::TAILWIND_DIRECTIVES,
    )?;

    ko_success!("{}", MESSAGES.react.tailwind_complete);
    Ok(())
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::ScriptedConsole;
    use kickoff_core::mock::MockShell;
    use std::fs;
    use tempfile::TempDir;

    /// A freshly generated Vite React project.
    fn vite_project() -> TempDir {
        let temp = TempDir::new().unwrap();
        let root = temp.path();
        for (path, contents) in [
            ("src/assets/react.svg", "<svg/>"),
            ("public/vite.svg", "<svg/>"),
            ("src/App.css", ".logo {}"),
            ("src/App.jsx", "import './App.css'"),
            ("src/index.css", ":root { color: red; }"),
        ] {
            write_file(&root.join(path), contents).unwrap();
        }
        temp
    }

    fn npm_runner() -> (MockShell, CommandRunner) {
        let shell = MockShell::new().with_program("npm");
        (shell.clone(), CommandRunner::new(shell))
    }

    #[test]
    fn test_clean_boilerplate() {
        let project = vite_project();
        let root = project.path();

        clean_boilerplate(root).unwrap();

        assert!(!root.join("src/assets/react.svg").exists());
        assert!(!root.join("public/vite.svg").exists());
        assert!(!root.join("src/App.css").exists());
        assert_eq!(fs::read_to_string(root.join("src/App.jsx")).unwrap(), templates::MINIMAL_APP);
        assert_eq!(fs::read_to_string(root.join("src/index.css")).unwrap(), "");
    }

    #[test]
    fn test_clean_boilerplate_tolerates_missing_files() {
        let temp = TempDir::new().unwrap();
        clean_boilerplate(temp.path()).unwrap();
        assert!(temp.path().join("src/App.jsx").is_file());
        assert!(!temp.path().join("src/index.css").exists());
    }

    #[test]
    fn test_setup_router_writes_files() {
        let project = vite_project();
        let (shell, runner) = npm_runner();

        setup_router(&runner, project.path()).unwrap();

        let invocations = shell.invocations();
        assert_eq!(invocations.len(), 1);
        assert_eq!(invocations[0].args(), ["npm", "install", "react-router-dom"]);
        assert_eq!(invocations[0].cwd(), Some(project.path()));
        for (relative, contents) in templates::ROUTER_FILES {
            assert_eq!(&fs::read_to_string(project.path().join(relative)).unwrap(), contents);
        }
    }

    #[test]
    fn test_setup_router_skips_files_when_install_fails() {
        let project = vite_project();
        let shell = MockShell::new().with_program("npm").with_exit_code("npm", 1);

        setup_router(&CommandRunner::new(shell), project.path()).unwrap();

        assert!(!project.path().join("src/routes").exists());
        assert_eq!(
            fs::read_to_string(project.path().join("src/App.jsx")).unwrap(),
            "import './App.css'"
        );
    }

    #[test]
    fn test_setup_tailwind_prepends_directives() {
        let project = vite_project();
        let (shell, runner) = npm_runner();

        setup_tailwind(&runner, project.path()).unwrap();

        assert_eq!(
            shell.invocations()[0].args(),
            ["npm", "install", "-D", "tailwindcss", "postcss", "autoprefixer"]
        );
        assert!(project.path().join("tailwind.config.js").is_file());
        assert!(project.path().join("postcss.config.js").is_file());
        let css = fs::read_to_string(project.path().join("src/index.css")).unwrap();
        assert_eq!(css, format!("{}:root {{ color: red; }}", templates::TAILWIND_DIRECTIVES));
    }

    #[test]
    fn test_declining_cleanup_skips_everything() {
        let project = vite_project();
        let (shell, runner) = npm_runner();
        let mut console = ScriptedConsole::new(["n"]);

        follow_up(&runner, project.path(), &mut console).unwrap();

        assert_eq!(console.prompts(), [MESSAGES.react.cleanup_confirm]);
        assert!(project.path().join("src/App.css").exists());
        assert!(shell.invocations().is_empty());
    }

    #[test]
    fn test_follow_up_all_steps() {
        let project = vite_project();
        let (shell, runner) = npm_runner();
        let mut console = ScriptedConsole::new(["y", "y", "y"]);

        follow_up(&runner, project.path(), &mut console).unwrap();

        assert_eq!(shell.invocations().len(), 2);
        assert!(project.path().join("src/pages/Home.jsx").is_file());
        let css = fs::read_to_string(project.path().join("src/index.css")).unwrap();
        assert_eq!(css, templates::TAILWIND_DIRECTIVES);
    }

    #[test]
    fn test_follow_up_router_declined() {
        let project = vite_project();
        let (shell, runner) = npm_runner();
        let mut console = ScriptedConsole::new(["y", "n", "y"]);

        follow_up(&runner, project.path(), &mut console).unwrap();

        assert_eq!(console.prompts().len(), 3);
        assert_eq!(shell.invocations().len(), 1);
        assert!(!project.path().join("src/routes").exists());
        assert!(project.path().join("tailwind.config.js").is_file());
    }
}
