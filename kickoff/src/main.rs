use clap::Parser;
use kickoff::cli::Args;
use kickoff::{run_menu, Installer, Menu, ProjectLayout, TerminalConsole};
use kickoff_config::ConfigLoader;
use kickoff_core::error::{KickoffError, Result};
use kickoff_core::{ko_error, ko_println, CommandRunner};
use kickoff_messages::{msg, MESSAGES};
use tracing::{debug, warn};

fn main() {
    let args = Args::parse();

    // Held for the whole run so buffered file logs are flushed.
    let _log_guard = match kickoff_logging::init(args.log_filter()) {
        Ok(guard) => guard,
        Err(e) => {
            ko_error!("Failed to initialize logging: {e}");
            None
        }
    };

    if let Err(e) = ctrlc::set_handler(|| {
        ko_println!("{}", MESSAGES.common.cancelled);
        std::process::exit(0);
    }) {
        warn!(error = %e, "could not install Ctrl+C handler");
    }

    match run(&args) {
        Ok(()) => {}
        Err(KickoffError::Cancelled) => ko_println!("{}", MESSAGES.common.cancelled),
        Err(e) => {
            ko_error!(
                "{}",
                msg!(MESSAGES.common.error_unexpected, error = format!("{e:#}"))
            );
            std::process::exit(1);
        }
    }
}

fn run(args: &Args) -> Result<()> {
    let mut loader = ConfigLoader::new();
    if let Some(path) = &args.config {
        loader = loader.with_file(path);
    }
    let config = loader.load(&args.overrides())?;
    debug!(source = ?config.source_path, "configuration loaded");

    let mut installer = Installer::new(CommandRunner::system(), ProjectLayout::from_config(&config));
    let mut console = TerminalConsole::new(config.clear_screen);
    run_menu(&Menu::standard(), &mut console, &mut installer)
}
