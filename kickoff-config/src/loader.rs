// Standard library imports
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

// External crate imports
use anyhow::{Context, Result};
use tracing::debug;

// Internal imports
use crate::config::{ConfigOverrides, KickoffConfig};

/// Location of the per-user configuration file:
/// `<config dir>/kickoff/config.yaml` (e.g. `~/.config/kickoff/config.yaml`).
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("kickoff").join("config.yaml"))
}

/// Finds, reads and layers the kickoff configuration.
///
/// File priority:
/// 1. **Explicit file:** given with `--config`; it must exist.
/// 2. **User file:** `default_config_path()`, used only when present.
/// 3. **Defaults:** when neither applies.
///
/// Environment variables and command-line overrides are applied on top, and
/// relative directories are resolved against the working directory.
pub struct ConfigLoader {
    explicit: Option<PathBuf>,
    user_file: Option<PathBuf>,
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self {
            explicit: None,
            user_file: default_config_path(),
        }
    }

    /// Read this file instead of searching for one.
    pub fn with_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.explicit = Some(path.into());
        self
    }

    /// Replace the per-user file location; `None` disables it.
    pub fn with_user_file(mut self, path: Option<PathBuf>) -> Self {
        self.user_file = path;
        self
    }

    /// Load using the process environment and working directory.
    pub fn load(&self, overrides: &ConfigOverrides) -> Result<KickoffConfig> {
        let cwd = env::current_dir().context("Could not determine the current directory")?;
        self.load_with(overrides, &cwd, |key| env::var(key).ok())
    }

    pub fn load_with(
        &self,
        overrides: &ConfigOverrides,
        base: &Path,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<KickoffConfig> {
        let mut config = match self.config_file() {
            Some(path) => {
                debug!("Loading config from: {}", path.display());
                self.load_file(&path)?
            }
            None => {
                debug!("No config file found, using defaults");
                KickoffConfig::default()
            }
        };

        config
            .apply_env(lookup)
            .context("Invalid kickoff environment configuration")?;
        config.apply_overrides(overrides);
        config.resolve_paths(base);

        debug!(
            projects_dir = %config.projects_dir.display(),
            bin_dir = %config.bin_dir.display(),
            clear_screen = config.clear_screen,
            "configuration resolved"
        );
        Ok(config)
    }

    fn config_file(&self) -> Option<PathBuf> {
        if let Some(path) = &self.explicit {
            return Some(path.clone());
        }
        self.user_file.clone().filter(|path| path.is_file())
    }

    fn load_file(&self, path: &Path) -> Result<KickoffConfig> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file at {}", path.display()))?;

        let mut config: KickoffConfig = if contents.trim().is_empty() {
            KickoffConfig::default()
        } else {
            serde_yaml_ng::from_str(&contents)
                .with_context(|| format!("Failed to parse {}", path.display()))?
        };

        config.source_path = Some(path.to_path_buf());
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    struct Fixture {
        temp_dir: TempDir,
    }

    impl Fixture {
        fn new() -> Self {
            Self {
                temp_dir: TempDir::new().expect("Failed to create temp directory"),
            }
        }

        fn path(&self) -> &Path {
            self.temp_dir.path()
        }

        fn write_config(&self, name: &str, contents: &str) -> PathBuf {
            let path = self.path().join(name);
            fs::write(&path, contents).expect("Failed to write config");
            path
        }
    }

    #[test]
    fn test_defaults_when_no_file() {
        let fixture = Fixture::new();
        let loader = ConfigLoader::new().with_user_file(Some(fixture.path().join("missing.yaml")));

        let config = loader
            .load_with(&ConfigOverrides::default(), fixture.path(), no_env)
            .unwrap();

        assert_eq!(config.projects_dir, fixture.path().join("projects"));
        assert_eq!(config.bin_dir, fixture.path().join("bin"));
        assert!(config.clear_screen);
        assert!(config.source_path.is_none());
    }

    #[test]
    fn test_user_file_is_read_when_present() {
        let fixture = Fixture::new();
        let path = fixture.write_config(
            "config.yaml",
            "projects_dir: starters\nclear_screen: false\n",
        );
        let loader = ConfigLoader::new().with_user_file(Some(path.clone()));

        let config = loader
            .load_with(&ConfigOverrides::default(), fixture.path(), no_env)
            .unwrap();

        assert_eq!(config.projects_dir, fixture.path().join("starters"));
        assert!(!config.clear_screen);
        assert_eq!(config.source_path, Some(path));
    }

    #[test]
    fn test_explicit_file_must_exist() {
        let fixture = Fixture::new();
        let loader = ConfigLoader::new()
            .with_user_file(None)
            .with_file(fixture.path().join("nope.yaml"));

        let err = loader
            .load_with(&ConfigOverrides::default(), fixture.path(), no_env)
            .unwrap_err();
        assert!(format!("{err:#}").contains("nope.yaml"));
    }

    #[test]
    fn test_invalid_yaml_is_reported() {
        let fixture = Fixture::new();
        let path = fixture.write_config("bad.yaml", "clear_screen: [not, a, bool]\n");
        let loader = ConfigLoader::new().with_user_file(None).with_file(path);

        assert!(loader
            .load_with(&ConfigOverrides::default(), fixture.path(), no_env)
            .is_err());
    }

    #[test]
    fn test_empty_file_means_defaults() {
        let fixture = Fixture::new();
        let path = fixture.write_config("empty.yaml", "\n");
        let loader = ConfigLoader::new().with_user_file(None).with_file(path);

        let config = loader
            .load_with(&ConfigOverrides::default(), fixture.path(), no_env)
            .unwrap();
        assert_eq!(config.projects_dir, fixture.path().join("projects"));
    }

    #[test]
    fn test_precedence_file_env_cli() {
        let fixture = Fixture::new();
        let path = fixture.write_config(
            "config.yaml",
            "projects_dir: from-file\nbin_dir: file-bin\nclear_screen: true\n",
        );
        let loader = ConfigLoader::new().with_user_file(None).with_file(path);
        let env = |key: &str| match key {
            "KICKOFF_PROJECTS_DIR" => Some("from-env".to_string()),
            "KICKOFF_BIN_DIR" => Some("env-bin".to_string()),
            _ => None,
        };
        let overrides = ConfigOverrides {
            projects_dir: Some(PathBuf::from("from-cli")),
            no_clear: true,
        };

        let config = loader.load_with(&overrides, fixture.path(), env).unwrap();

        assert_eq!(config.projects_dir, fixture.path().join("from-cli"));
        assert_eq!(config.bin_dir, fixture.path().join("env-bin"));
        assert!(!config.clear_screen);
    }
}
