//! Menu rendering and prompt messages

pub struct MenuMessages {
    pub banner: &'static str,
    pub choice_prompt: &'static str,
    pub exit_label: &'static str,
    pub goodbye: &'static str,
    pub install_label: &'static str,
    pub invalid_option: &'static str,
    pub option_line: &'static str,
    pub press_enter: &'static str,
    pub select_header: &'static str,
}

pub const MENU_MESSAGES: MenuMessages = MenuMessages {
    banner: r"
    __ __ _      __         ________
   / //_/(_)____/ /______  / __/ __/
  / ,<  / / ___/ //_/ __ \/ /_/ /_
 / /| |/ / /__/ ,< / /_/ / __/ __/
/_/ |_/_/\___/_/|_|\____/_/ /_/

      --- AUTO INSTALLER TOOL ---
",
    choice_prompt: "Enter choice: ",
    exit_label: "Exit",
    goodbye: "\nExiting... Goodbye!",
    install_label: "Install {framework}",
    invalid_option: "Invalid option, try again.",
    option_line: " [{key}] {label}",
    press_enter: "\nPress Enter to continue...",
    select_header: "Select an option:",
};
