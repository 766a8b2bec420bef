//! kickoff: an interactive menu that runs the official project generators
//! for common web frameworks (Vite, Next.js, Laravel, NestJS, ...) and
//! files the results under one projects directory.

pub mod cli;
pub mod console;
pub mod framework;
pub mod installer;
pub mod layout;
pub mod menu;
pub mod templates;

pub use console::{Console, ScriptedConsole, TerminalConsole};
pub use framework::Framework;
pub use installer::{InstallOutcome, Installer};
pub use layout::ProjectLayout;
pub use menu::{run_menu, ActionHandler, Menu, MenuAction, MenuOption};
