//! React follow-up step messages

pub struct ReactMessages {
    // ============================================================================
    // Prompts
    // ============================================================================
    pub cleanup_confirm: &'static str,
    pub router_confirm: &'static str,
    pub tailwind_confirm: &'static str,

    // ============================================================================
    // Boilerplate cleanup
    // ============================================================================
    pub cleanup_cleared: &'static str,
    pub cleanup_complete: &'static str,
    pub cleanup_error: &'static str,
    pub cleanup_removed: &'static str,
    pub cleanup_reset: &'static str,
    pub cleanup_starting: &'static str,

    // ============================================================================
    // React Router
    // ============================================================================
    pub router_complete: &'static str,
    pub router_error: &'static str,
    pub router_install_failed: &'static str,
    pub router_installing: &'static str,
    pub router_writing: &'static str,

    // ============================================================================
    // Tailwind CSS
    // ============================================================================
    pub tailwind_complete: &'static str,
    pub tailwind_configuring: &'static str,
    pub tailwind_error: &'static str,
    pub tailwind_install_failed: &'static str,
    pub tailwind_installing: &'static str,
}

pub const REACT_MESSAGES: ReactMessages = ReactMessages {
    // Prompts
    cleanup_confirm: "Do you want to clean up the default React boilerplate code?",
    router_confirm: "Do you want to install and setup React Router (react-router-dom)?",
    tailwind_confirm: "Do you want to install and setup Tailwind CSS?",

    // Boilerplate cleanup
    cleanup_cleared: "Cleared: {file}",
    cleanup_complete: "Project cleanup complete!",
    cleanup_error: "Error during cleanup: {error}",
    cleanup_removed: "Removed: {file}",
    cleanup_reset: "Reset: {file}",
    cleanup_starting: "\nCleaning up project files...",

    // React Router
    router_complete: "React Router setup complete!",
    router_error: "Error during router setup: {error}",
    router_install_failed: "Failed to install react-router-dom",
    router_installing: "\nInstalling react-router-dom (this may take a moment)...",
    router_writing: "Setting up folder structure and files...",

    // Tailwind CSS
    tailwind_complete: "Tailwind CSS setup complete!",
    tailwind_configuring: "Configuring Tailwind CSS...",
    tailwind_error: "Error during Tailwind setup: {error}",
    tailwind_install_failed: "Failed to install Tailwind CSS",
    tailwind_installing: "\nInstalling Tailwind CSS dependencies...",
};
