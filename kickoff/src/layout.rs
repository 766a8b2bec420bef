use std::path::{Path, PathBuf};

use kickoff_config::KickoffConfig;
use kickoff_core::error::Result;
use kickoff_core::file_system::ensure_dir;

/// Where generated projects and helper tools live on disk.
///
/// Projects are grouped as `<projects>/<category>/<name>`. Category
/// directories are created on first use.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLayout {
    projects_dir: PathBuf,
    bin_dir: PathBuf,
}

impl ProjectLayout {
    pub fn new(projects_dir: impl Into<PathBuf>, bin_dir: impl Into<PathBuf>) -> Self {
        Self {
            projects_dir: projects_dir.into(),
            bin_dir: bin_dir.into(),
        }
    }

    pub fn from_config(config: &KickoffConfig) -> Self {
        Self::new(&config.projects_dir, &config.bin_dir)
    }

    pub fn projects_dir(&self) -> &Path {
        &self.projects_dir
    }

    pub fn bin_dir(&self) -> &Path {
        &self.bin_dir
    }

    pub fn category_dir(&self, category: &str) -> PathBuf {
        self.projects_dir.join(category)
    }

    pub fn ensure_category_dir(&self, category: &str) -> Result<PathBuf> {
        let dir = self.category_dir(category);
        ensure_dir(&dir)?;
        Ok(dir)
    }

    pub fn project_dir(&self, category: &str, name: &str) -> PathBuf {
        self.category_dir(category).join(name)
    }

    pub fn composer_phar(&self) -> PathBuf {
        self.bin_dir.join("composer.phar")
    }
}

/// `path` relative to `base` when it lies inside it, otherwise unchanged.
pub fn display_relative(path: &Path, base: &Path) -> String {
    if path.starts_with(base) {
        if let Some(relative) = pathdiff::diff_paths(path, base) {
            if !relative.as_os_str().is_empty() {
                return relative.display().to_string();
            }
        }
    }
    path.display().to_string()
}
