//! Messages shared by the framework installers

pub struct InstallerMessages {
    // ============================================================================
    // Handler flow (alphabetically sorted)
    // ============================================================================
    pub cd_line: &'static str,
    pub created: &'static str,
    pub dependency_missing: &'static str,
    pub get_started: &'static str,
    pub header: &'static str,
    pub invalid_project_name: &'static str,
    pub next_step_line: &'static str,
    pub project_exists: &'static str,
    pub project_name_prompt: &'static str,

    // ============================================================================
    // Laravel / Composer
    // ============================================================================
    pub composer_hint: &'static str,
    pub composer_local: &'static str,
    pub composer_missing: &'static str,
    pub php_required: &'static str,
}

pub const INSTALLER_MESSAGES: InstallerMessages = InstallerMessages {
    // Handler flow
    cd_line: "  cd {path}",
    created: "\n{framework} project '{name}' created successfully!",
    dependency_missing: "{label} is NOT installed or not in PATH.",
    get_started: "\nTo get started, run:",
    header: "\n--- Install {framework} ---",
    invalid_project_name: "Invalid project name '{name}': {reason}",
    next_step_line: "  {command}",
    project_exists: "A project named '{name}' already exists at {path}; the generator may refuse to overwrite it.",
    project_name_prompt: "Enter project name: ",

    // Laravel / Composer
    composer_hint: "Install Composer from https://getcomposer.org or place composer.phar in {dir}, then try again.",
    composer_local: "Global Composer not found. Using {path}",
    composer_missing: "Composer is not installed and no composer.phar was found at {path}.",
    php_required: "PHP is required but not installed/in PATH.",
};
