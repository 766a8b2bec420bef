//! The main menu and the loop that dispatches its choices.

use std::collections::HashSet;

use kickoff_core::colored::Colorize;
use kickoff_core::error::{KickoffError, Result};
use kickoff_core::{ko_bold, ko_error, ko_info, ko_println};
use kickoff_messages::{msg, MESSAGES};
use tracing::{debug, info_span};

use crate::console::Console;
use crate::framework::Framework;

/// What selecting a menu option does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Install(Framework),
    Exit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuOption {
    key: char,
    label: String,
    action: MenuAction,
}

impl MenuOption {
    pub fn new(key: char, label: impl Into<String>, action: MenuAction) -> Self {
        Self {
            key,
            label: label.into(),
            action,
        }
    }

    pub fn key(&self) -> char {
        self.key
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn action(&self) -> MenuAction {
        self.action
    }
}

/// Ordered set of options with unique single-character keys.
#[derive(Debug, Clone)]
pub struct Menu {
    options: Vec<MenuOption>,
}

impl Menu {
    /// Builds a menu, rejecting blank or repeated keys and menus with no
    /// way out.
    pub fn new(options: Vec<MenuOption>) -> Result<Self> {
        let mut seen = HashSet::new();
        for option in &options {
            if option.key.is_whitespace() || option.key.is_control() {
                return Err(KickoffError::Validation(format!(
                    "Menu option '{}' has no usable key",
                    option.label
                )));
            }
            if !seen.insert(option.key) {
                return Err(KickoffError::Validation(format!(
                    "Menu key '{}' is used more than once",
                    option.key
                )));
            }
        }
        if !options.iter().any(|o| o.action == MenuAction::Exit) {
            return Err(KickoffError::Validation(
                "Menu has no exit option".to_string(),
            ));
        }
        Ok(Self { options })
    }

    /// One install entry per framework, then `[0] Exit`.
    pub fn standard() -> Self {
        let mut options: Vec<MenuOption> = Framework::ALL
            .iter()
            .map(|&framework| {
                MenuOption::new(
                    framework.menu_key(),
                    msg!(MESSAGES.menu.install_label, framework = framework.menu_name()),
                    MenuAction::Install(framework),
                )
            })
            .collect();
        options.push(MenuOption::new(
            '0',
            MESSAGES.menu.exit_label,
            MenuAction::Exit,
        ));
        Self { options }
    }

    pub fn options(&self) -> &[MenuOption] {
        &self.options
    }

    /// Finds the option whose key is exactly the trimmed `input`.
    pub fn lookup(&self, input: &str) -> Option<&MenuOption> {
        let mut chars = input.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(key), None) => self.options.iter().find(|o| o.key == key),
            _ => None,
        }
    }

    /// Option lines in insertion order, as printed under the header.
    pub fn render(&self) -> Vec<String> {
        self.options
            .iter()
            .map(|o| {
                msg!(
                    MESSAGES.menu.option_line,
                    key = o.key.to_string(),
                    label = o.label.as_str()
                )
            })
            .collect()
    }
}

/// Receives the install actions chosen from the menu.
pub trait ActionHandler {
    fn handle(&mut self, framework: Framework, console: &mut dyn Console) -> Result<()>;
}

/// Shows `menu` until the exit option is chosen or input runs out.
///
/// Unknown keys never reach `handler`. A handler error is printed and the
/// loop carries on; only cancellation escapes.
pub fn run_menu(
    menu: &Menu,
    console: &mut dyn Console,
    handler: &mut dyn ActionHandler,
) -> Result<()> {
    loop {
        console.clear();
        ko_println!("{}", MESSAGES.menu.banner.cyan());
        ko_bold!("{}", MESSAGES.menu.select_header);
        for line in menu.render() {
            ko_println!("{line}");
        }
        ko_println!();

        let Some(input) = console.read_line(MESSAGES.menu.choice_prompt)? else {
            debug!("input closed, leaving menu");
            ko_info!("{}", MESSAGES.menu.goodbye);
            return Ok(());
        };

        match menu.lookup(&input).map(MenuOption::action) {
            Some(MenuAction::Exit) => {
                ko_info!("{}", MESSAGES.menu.goodbye);
                return Ok(());
            }
            Some(MenuAction::Install(framework)) => {
                let span = info_span!("menu_action", key = %input.trim(), framework = %framework);
                let _enter = span.enter();
                match handler.handle(framework, console) {
                    Ok(()) => {}
                    Err(KickoffError::Cancelled) => return Err(KickoffError::Cancelled),
                    Err(e) => ko_error!("{}", msg!(MESSAGES.common.error_generic, error = e.to_string())),
                }
            }
            None => {
                debug!(input = %input.trim(), "unknown menu key");
                ko_error!("{}", MESSAGES.menu.invalid_option);
            }
        }

        console.pause()?;
    }
}
