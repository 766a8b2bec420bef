//! Configuration for kickoff.
//!
//! Settings are layered, lowest priority first: built-in defaults, a YAML
//! file, `KICKOFF_*` environment variables, then command-line overrides.

pub mod config;
pub mod loader;

pub use config::{ConfigOverrides, KickoffConfig};
pub use loader::{default_config_path, ConfigLoader};
