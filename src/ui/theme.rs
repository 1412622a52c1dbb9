//! Consistent styling utilities for terminal output.
//!
//! Provides color and formatting helpers using owo-colors.

use owo_colors::OwoColorize;
use std::fmt::Display;

/// Styles for different semantic elements.
pub struct Style;

impl Style {
    /// Style for section headers (e.g., "Configuration", "Available commands")
    pub fn header<T: Display>(text: T) -> String {
        format!("{}", text.bold())
    }

    /// Style for labels/keys (e.g., "provider", "model")
    pub fn label<T: Display>(text: T) -> String {
        format!("{}", text.dimmed())
    }

    /// Style for primary values (e.g., provider names, language names)
    pub fn value<T: Display>(text: T) -> String {
        format!("{}", text.cyan())
    }

    /// Style for secondary info (e.g., endpoints, descriptions)
    pub fn secondary<T: Display>(text: T) -> String {
        format!("{}", text.dimmed())
    }

    pub fn success<T: Display>(text: T) -> String {
        format!("{}", text.green())
    }

    pub fn error<T: Display>(text: T) -> String {
        format!("{}", text.red().bold())
    }

    pub fn warning<T: Display>(text: T) -> String {
        format!("{}", text.yellow())
    }

    /// Style for slash commands (e.g., "/to", "/help")
    pub fn command<T: Display>(text: T) -> String {
        format!("{}", text.green())
    }

    /// Style for language codes
    pub fn code<T: Display>(text: T) -> String {
        format!("{}", text.yellow())
    }

    /// Speaker label for the user's own messages
    pub fn user<T: Display>(text: T) -> String {
        format!("{}", text.green().bold())
    }

    /// Speaker label for replies
    pub fn reply<T: Display>(text: T) -> String {
        format!("{}", text.blue().bold())
    }

    /// Language tag under a translated reply
    pub fn tag<T: Display>(text: T) -> String {
        format!("{}", text.dimmed().italic())
    }

    pub fn version<T: Display>(text: T) -> String {
        format!("{}", text.dimmed())
    }
}
