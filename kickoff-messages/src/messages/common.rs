//! Command runner output and top-level messages

pub struct CommonMessages {
    // ============================================================================
    // Command Runner (alphabetically sorted)
    // ============================================================================
    pub command_failed: &'static str,
    pub command_running: &'static str,
    pub command_success: &'static str,
    pub command_terminated: &'static str,
    pub command_unexpected: &'static str,

    // ============================================================================
    // Top-level
    // ============================================================================
    pub cancelled: &'static str,
    pub error_generic: &'static str,
    pub error_unexpected: &'static str,
}

pub const COMMON_MESSAGES: CommonMessages = CommonMessages {
    // Command Runner
    command_failed: "Error executing command: '{command}' returned non-zero exit status {code}.",
    command_running: "Running: {command}",
    command_success: "Command executed successfully.",
    command_terminated: "Error executing command: '{command}' was terminated by a signal.",
    command_unexpected: "Unexpected error: {error}",

    // Top-level
    cancelled: "\n\nOperation cancelled by user.",
    error_generic: "Error: {error}",
    error_unexpected: "\nAn unexpected error occurred: {error}",
};
