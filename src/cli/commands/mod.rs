//! Subcommand implementations.

/// Chat mode command handler.
pub mod chat;
