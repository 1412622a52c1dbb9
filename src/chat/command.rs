use inquire::autocompletion::{Autocomplete, Replacement};

use crate::translation::LANGUAGES;

// Available slash commands: (command, description)
const SLASH_COMMANDS: &[(&str, &str)] = &[
    ("/from", "Set the source language"),
    ("/to", "Set the target language"),
    ("/languages", "List available languages"),
    ("/history", "Show the conversation so far"),
    ("/config", "Show current configuration"),
    ("/help", "Show available commands"),
    ("/quit", "Exit chat mode"),
];

/// Slash command autocompleter.
///
/// After `/from ` or `/to ` it suggests language codes instead of commands.
#[derive(Clone, Default)]
pub struct SlashCommandCompleter;

impl Autocomplete for SlashCommandCompleter {
    fn get_suggestions(&mut self, input: &str) -> Result<Vec<String>, inquire::CustomUserError> {
        if !input.starts_with('/') {
            return Ok(vec![]);
        }

        if let Some((cmd, prefix)) = input.split_once(' ')
            && matches!(cmd, "/from" | "/to")
        {
            let prefix = prefix.trim_start();
            let suggestions = LANGUAGES
                .iter()
                .filter(|lang| lang.code.starts_with(prefix))
                .map(|lang| format!("{cmd} {}  {} {}", lang.code, lang.glyph, lang.name))
                .collect();
            return Ok(suggestions);
        }

        let suggestions: Vec<String> = SLASH_COMMANDS
            .iter()
            .filter(|(cmd, _)| cmd.starts_with(input))
            .map(|(cmd, desc)| format!("{cmd}  {desc}"))
            .collect();

        Ok(suggestions)
    }

    fn get_completion(
        &mut self,
        _input: &str,
        highlighted_suggestion: Option<String>,
    ) -> Result<Replacement, inquire::CustomUserError> {
        // Everything before the two-space separator is the text to insert
        let replacement =
            highlighted_suggestion.map(|s| s.split("  ").next().unwrap_or("").to_string());
        Ok(replacement)
    }
}

/// Slash command types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlashCommand {
    From(Option<String>),
    To(Option<String>),
    Languages,
    History,
    Config,
    Help,
    Quit,
    Unknown(String),
}

/// Input types
#[derive(Debug)]
pub enum Input {
    /// Text to translate, exactly as typed.
    Text(String),
    Command(SlashCommand),
    Empty,
}

/// Splits a line into a command or text to translate.
///
/// A leading `//` escapes the command prefix: `//etc` translates `/etc`.
pub fn parse_input(input: &str) -> Input {
    let trimmed = input.trim();

    if trimmed.is_empty() {
        return Input::Empty;
    }

    if trimmed.starts_with("//") {
        return Input::Text(input.replacen('/', "", 1));
    }

    trimmed
        .strip_prefix('/')
        .map_or_else(|| Input::Text(input.to_string()), parse_slash_command)
}

fn parse_slash_command(cmd: &str) -> Input {
    let parts: Vec<&str> = cmd.split_whitespace().collect();
    let arg = parts.get(1).map(|s| (*s).to_string());

    match parts.first().copied() {
        Some("from") => Input::Command(SlashCommand::From(arg)),
        Some("to") => Input::Command(SlashCommand::To(arg)),
        Some("languages" | "langs") => Input::Command(SlashCommand::Languages),
        Some("history") => Input::Command(SlashCommand::History),
        Some("config") => Input::Command(SlashCommand::Config),
        Some("help") => Input::Command(SlashCommand::Help),
        Some("quit" | "exit" | "q") => Input::Command(SlashCommand::Quit),
        _ => Input::Command(SlashCommand::Unknown(parts.join(" "))),
    }
}
