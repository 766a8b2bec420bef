//! Central registry for all user-facing message templates.
//!
//! This module is organized by domain:
//! - `menu` - banner, option rendering, prompts and exit
//! - `installer` - messages shared by every framework installer
//! - `react` - React follow-up steps (cleanup, router, Tailwind)
//! - `common` - command runner output and top-level errors
//!
//! ## Message Access Patterns
//!
//! Messages are accessed through the `MESSAGES` constant:
//!
//! ```rust
//! use kickoff_messages::MESSAGES;
//!
//! let prompt = MESSAGES.menu.choice_prompt;
//! let header = MESSAGES.installer.header;
//! let done = MESSAGES.common.command_success;
//! ```
//!
//! Templates use `{variable}` syntax for runtime values, which are
//! substituted by the `msg!` macro. Severity prefixes (`[*]`, `[+]`, `[!]`)
//! are added by the output macros, not stored here.

mod common;
mod installer;
mod menu;
mod react;

pub use common::{CommonMessages, COMMON_MESSAGES};
pub use installer::{InstallerMessages, INSTALLER_MESSAGES};
pub use menu::{MenuMessages, MENU_MESSAGES};
pub use react::{ReactMessages, REACT_MESSAGES};

/// Unified messages struct containing all domain-specific message modules
pub struct Messages {
    pub menu: MenuMessages,
    pub installer: InstallerMessages,
    pub react: ReactMessages,
    pub common: CommonMessages,
}

/// Global messages constant - main entry point for all message templates
pub const MESSAGES: Messages = Messages {
    menu: MENU_MESSAGES,
    installer: INSTALLER_MESSAGES,
    react: REACT_MESSAGES,
    common: COMMON_MESSAGES,
};
