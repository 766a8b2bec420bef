use std::path::PathBuf;

use clap::Parser;
use kickoff_config::ConfigOverrides;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Interactive menu for scaffolding web framework starter projects",
    long_about = None
)]
pub struct Args {
    /// Directory to create projects in (default: ./projects)
    #[arg(long, value_name = "PATH")]
    pub projects_dir: Option<PathBuf>,

    /// Read configuration from this YAML file instead of the per-user one
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Keep the terminal contents instead of clearing before each menu
    #[arg(long)]
    pub no_clear: bool,

    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(long)]
    pub debug: bool,
}

impl Args {
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            projects_dir: self.projects_dir.clone(),
            no_clear: self.no_clear,
        }
    }

    pub fn log_filter(&self) -> &'static str {
        if self.debug {
            "debug"
        } else {
            "warn"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["kickoff"]).unwrap();
        assert!(args.projects_dir.is_none());
        assert!(!args.no_clear);
        assert_eq!(args.log_filter(), "warn");
    }

    #[test]
    fn test_flags() {
        let args = Args::try_parse_from([
            "kickoff",
            "--projects-dir",
            "/tmp/starters",
            "--no-clear",
            "--debug",
            "--config",
            "kickoff.yaml",
        ])
        .unwrap();
        let overrides = args.overrides();
        assert_eq!(overrides.projects_dir, Some(PathBuf::from("/tmp/starters")));
        assert!(overrides.no_clear);
        assert_eq!(args.config, Some(PathBuf::from("kickoff.yaml")));
        assert_eq!(args.log_filter(), "debug");
    }

    #[test]
    fn test_unknown_flag_rejected() {
        assert!(Args::try_parse_from(["kickoff", "--install", "react"]).is_err());
    }
}
