use kickoff_core::file_system::has_file;
use kickoff_core::{ko_error_with_details, ko_warning, CommandRunner};
use kickoff_messages::{msg, MESSAGES};
use tracing::debug;

use crate::layout::ProjectLayout;

/// The command that runs Composer: a global `composer`, else PHP with
/// `composer.phar` from the bin directory. Nothing is downloaded; when neither
/// exists the user is told where to put the phar and `None` is returned.
pub fn resolve_composer(runner: &CommandRunner, layout: &ProjectLayout) -> Option<Vec<String>> {
    if runner.is_available("composer") {
        debug!("using global composer");
        return Some(vec!["composer".to_string()]);
    }

    let phar = layout.composer_phar();
    if has_file(layout.bin_dir(), "composer.phar") {
        let shown = phar.display().to_string();
        ko_warning!("{}", msg!(MESSAGES.installer.composer_local, path = shown.as_str()));
        return Some(vec!["php".to_string(), shown]);
    }

    ko_error_with_details!(
        msg!(
            MESSAGES.installer.composer_missing,
            path = phar.display().to_string()
        ),
        [msg!(
            MESSAGES.installer.composer_hint,
            dir = layout.bin_dir().display().to_string()
        )]
    );
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use kickoff_core::mock::MockShell;
    use std::fs;
    use tempfile::TempDir;

    fn layout(temp: &TempDir) -> ProjectLayout {
        ProjectLayout::new(temp.path().join("projects"), temp.path().join("bin"))
    }

    #[test]
    fn test_prefers_global_composer() {
        let temp = TempDir::new().unwrap();
        let runner = CommandRunner::new(MockShell::new().with_program("composer"));

        assert_eq!(
            resolve_composer(&runner, &layout(&temp)),
            Some(vec!["composer".to_string()])
        );
    }

    #[test]
    fn test_falls_back_to_local_phar() {
        let temp = TempDir::new().unwrap();
        let layout = layout(&temp);
        fs::create_dir_all(layout.bin_dir()).unwrap();
        fs::write(layout.composer_phar(), "phar").unwrap();
        let runner = CommandRunner::new(MockShell::new().with_program("php"));

        let command = resolve_composer(&runner, &layout).unwrap();

        assert_eq!(command[0], "php");
        assert_eq!(command[1], layout.composer_phar().display().to_string());
    }

    #[test]
    fn test_missing_composer_is_not_downloaded() {
        let temp = TempDir::new().unwrap();
        let layout = layout(&temp);
        let shell = MockShell::new().with_program("php");
        let runner = CommandRunner::new(shell.clone());

        assert_eq!(resolve_composer(&runner, &layout), None);
        assert!(!layout.composer_phar().exists());
        assert!(shell.invocations().is_empty());
    }
}
