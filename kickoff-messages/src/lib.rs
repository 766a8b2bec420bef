//! kickoff-messages
//!
//! Centralized messaging for the kickoff CLI.
//! Provides the message templates, a message builder, and the error context
//! used for user-facing output.

pub mod builder;
pub mod errors;
pub mod macros;
pub mod messages;

pub use messages::MESSAGES;
