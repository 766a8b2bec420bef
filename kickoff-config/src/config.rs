use std::path::{Path, PathBuf};

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

pub const ENV_PROJECTS_DIR: &str = "KICKOFF_PROJECTS_DIR";
pub const ENV_BIN_DIR: &str = "KICKOFF_BIN_DIR";
pub const ENV_CLEAR_SCREEN: &str = "KICKOFF_CLEAR_SCREEN";

/// Root structure of `config.yaml`.
///
/// ```yaml
/// projects_dir: ~/code/starters
/// bin_dir: bin
/// clear_screen: false
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KickoffConfig {
    /// Root under which generated projects are grouped by framework
    pub projects_dir: PathBuf,

    /// Directory searched for helper tools such as `composer.phar`
    pub bin_dir: PathBuf,

    /// Clear the terminal before drawing the menu
    pub clear_screen: bool,

    /// File this configuration was read from, if any
    #[serde(skip)]
    pub source_path: Option<PathBuf>,
}

impl Default for KickoffConfig {
    fn default() -> Self {
        Self {
            projects_dir: PathBuf::from("projects"),
            bin_dir: PathBuf::from("bin"),
            clear_screen: true,
            source_path: None,
        }
    }
}

/// Values given on the command line; they win over every other layer.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub projects_dir: Option<PathBuf>,
    pub no_clear: bool,
}

impl KickoffConfig {
    /// Apply `KICKOFF_*` variables read through `lookup`.
    pub fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<()> {
        if let Some(dir) = lookup(ENV_PROJECTS_DIR).filter(|v| !v.is_empty()) {
            self.projects_dir = PathBuf::from(dir);
        }
        if let Some(dir) = lookup(ENV_BIN_DIR).filter(|v| !v.is_empty()) {
            self.bin_dir = PathBuf::from(dir);
        }
        if let Some(value) = lookup(ENV_CLEAR_SCREEN) {
            self.clear_screen = parse_bool(ENV_CLEAR_SCREEN, &value)?;
        }
        Ok(())
    }

    pub fn apply_overrides(&mut self, overrides: &ConfigOverrides) {
        if let Some(dir) = &overrides.projects_dir {
            self.projects_dir = dir.clone();
        }
        if overrides.no_clear {
            self.clear_screen = false;
        }
    }

    /// Expand `~` and make both directories absolute relative to `base`.
    pub fn resolve_paths(&mut self, base: &Path) {
        self.projects_dir = absolutize(&self.projects_dir, base);
        self.bin_dir = absolutize(&self.bin_dir, base);
    }
}

fn absolutize(path: &Path, base: &Path) -> PathBuf {
    let expanded = PathBuf::from(shellexpand::tilde(&path.to_string_lossy()).into_owned());
    if expanded.is_absolute() {
        expanded
    } else {
        base.join(expanded)
    }
}

fn parse_bool(name: &str, value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => bail!("{name} must be true or false, got '{other}'"),
    }
}
