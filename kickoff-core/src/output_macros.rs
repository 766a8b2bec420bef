//! Output macros for the kickoff CLI.
//!
//! Every user-facing line goes through one of these macros so severities keep
//! a consistent prefix and color:
//!
//! | Macro          | Prefix | Color   | Stream |
//! |----------------|--------|---------|--------|
//! | `ko_progress!` | `[*] ` | cyan    | stdout |
//! | `ko_warning!`  | `[*] ` | yellow  | stdout |
//! | `ko_success!`  | `[+] ` | green   | stdout |
//! | `ko_error!`    | `[!] ` | red     | stderr |
//! | `ko_header!`   |        | magenta | stdout |
//! | `ko_info!`     |        | blue    | stdout |
//! | `ko_bold!`     |        | bold    | stdout |
//!
//! Leading newlines in a message are printed before the prefix, so
//! `ko_progress!("\nInstalling...")` renders as a blank line followed by
//! `[*] Installing...`.

/// Moves leading line breaks of `message` in front of `prefix`.
pub fn decorate(prefix: &str, message: &str) -> String {
    let body = message.trim_start_matches('\n');
    let breaks = &message[..message.len() - body.len()];
    format!("{breaks}{prefix}{body}")
}

#[macro_export]
macro_rules! ko_print {
    ($($arg:tt)*) => {{
        use std::io::Write as _;
        print!("{}", format!($($arg)*));
        let _ = std::io::stdout().flush();
    }};
}

#[macro_export]
macro_rules! ko_println {
    () => {
        println!();
    };
    ($($arg:tt)*) => {
        println!("{}", format!($($arg)*));
    };
}

#[macro_export]
macro_rules! ko_header {
    ($($arg:tt)*) => {{
        use $crate::colored::Colorize as _;
        println!("{}", format!($($arg)*).magenta().bold());
    }};
}

#[macro_export]
macro_rules! ko_info {
    ($($arg:tt)*) => {{
        use $crate::colored::Colorize as _;
        println!("{}", format!($($arg)*).blue());
    }};
}

#[macro_export]
macro_rules! ko_bold {
    ($($arg:tt)*) => {{
        use $crate::colored::Colorize as _;
        println!("{}", format!($($arg)*).bold());
    }};
}

#[macro_export]
macro_rules! ko_progress {
    ($($arg:tt)*) => {{
        use $crate::colored::Colorize as _;
        println!("{}", $crate::output_macros::decorate("[*] ", &format!($($arg)*)).cyan());
    }};
}

#[macro_export]
macro_rules! ko_warning {
    ($($arg:tt)*) => {{
        use $crate::colored::Colorize as _;
        println!("{}", $crate::output_macros::decorate("[*] ", &format!($($arg)*)).yellow());
    }};
}

#[macro_export]
macro_rules! ko_success {
    ($($arg:tt)*) => {{
        use $crate::colored::Colorize as _;
        println!("{}", $crate::output_macros::decorate("[+] ", &format!($($arg)*)).green());
    }};
}

#[macro_export]
macro_rules! ko_error {
    ($($arg:tt)*) => {{
        use $crate::colored::Colorize as _;
        eprintln!("{}", $crate::output_macros::decorate("[!] ", &format!($($arg)*)).red());
    }};
}

#[macro_export]
macro_rules! ko_error_with_details {
    ($main:expr, $details:expr) => {{
        $crate::ko_error!("{}", $main);
        for detail in $details {
            eprintln!("    └─ {}", detail);
        }
    }};
}
