use anyhow::Result;
use inquire::Text;
use inquire::ui::{Attributes, Color, RenderConfig, StyleSheet, Styled};
use std::sync::Arc;

use super::command::{Input, SlashCommand, SlashCommandCompleter, parse_input};
use super::ui;
use crate::config::ResolvedConfig;
use crate::session::{Session, SessionController, SubmitOutcome};
use crate::translation::{LanguageCatalog, TranslationClient, print_languages};
use crate::ui::{Spinner, is_prompt_cancelled};

/// An interactive chat session for translation.
///
/// Reads lines from the terminal, forwards them to the session controller
/// as intents, and renders whatever the controller appends.
pub struct ChatSession {
    config: ResolvedConfig,
    controller: SessionController,
}

impl ChatSession {
    /// Creates a chat session backed by the configured provider.
    pub fn new(config: ResolvedConfig) -> Result<Self> {
        let session = Session::new(
            LanguageCatalog::builtin(),
            config.source_language.code,
            config.target_language.code,
        )?;
        let client = TranslationClient::new(
            config.endpoint.clone(),
            config.model.clone(),
            config.api_key.clone(),
        );
        let controller = SessionController::new(session, Arc::new(client))
            .with_request_timeout(config.request_timeout);

        Ok(Self { config, controller })
    }

    pub async fn run(&mut self) -> Result<()> {
        ui::print_header(self.controller.session());
        for message in self.controller.session().transcript() {
            ui::print_message(message);
        }

        let prompt_style = Styled::new("❯")
            .with_fg(Color::LightBlue)
            .with_attr(Attributes::BOLD);
        let mut render_config = RenderConfig::default()
            .with_prompt_prefix(prompt_style)
            .with_answered_prompt_prefix(prompt_style);

        // Non-highlighted suggestions: gray
        render_config.option = StyleSheet::new().with_fg(Color::Grey);
        // Highlighted suggestion: purple
        render_config.selected_option = Some(StyleSheet::new().with_fg(Color::DarkMagenta));

        loop {
            let input = Text::new("")
                .with_render_config(render_config)
                .with_autocomplete(SlashCommandCompleter)
                .with_help_message("Type text to translate, /help for commands, Ctrl+C to quit")
                .prompt();

            match input {
                Ok(line) => match parse_input(&line) {
                    Input::Empty => {}
                    Input::Command(cmd) => {
                        if !self.handle_command(cmd) {
                            break;
                        }
                    }
                    Input::Text(text) => self.translate_and_print(text).await,
                },
                Err(e) if is_prompt_cancelled(&e) => {
                    println!(); // Clear line before goodbye message
                    break;
                }
                Err(e) => return Err(e.into()),
            }
        }

        ui::print_goodbye();
        Ok(())
    }

    fn handle_command(&mut self, cmd: SlashCommand) -> bool {
        match cmd {
            SlashCommand::From(code) => self.select_language(code.as_deref(), true),
            SlashCommand::To(code) => self.select_language(code.as_deref(), false),
            SlashCommand::Languages => print_languages(),
            SlashCommand::History => ui::print_transcript(self.controller.session().transcript()),
            SlashCommand::Config => ui::print_config(&self.config, &self.controller),
            SlashCommand::Help => ui::print_help(),
            SlashCommand::Quit => return false,
            SlashCommand::Unknown(cmd) => ui::print_error(&format!(
                "Unknown command: /{cmd} (start with // to translate it as text)"
            )),
        }
        true
    }

    fn select_language(&mut self, code: Option<&str>, source: bool) {
        let label = if source { "Source" } else { "Target" };
        let Some(code) = code else {
            let usage = if source { "/from <code>" } else { "/to <code>" };
            ui::print_error(&format!("Usage: {usage}"));
            return;
        };

        let result = if source {
            self.controller.select_source_language(code)
        } else {
            self.controller.select_target_language(code)
        };

        match result {
            Ok(()) => {
                let session = self.controller.session();
                let lang = if source {
                    session.source_language()
                } else {
                    session.target_language()
                };
                ui::print_language_set(label, lang);
            }
            Err(e) => ui::print_error(&format!("{e}\nRun /languages to see available codes.")),
        }
    }

    async fn translate_and_print(&mut self, text: String) {
        self.controller.update_draft(text);
        let already_shown = self.controller.session().transcript().len();

        let spinner = Spinner::translating(self.controller.session().target_language());
        let outcome = self.controller.submit_with_cancel(interrupted()).await;
        spinner.stop();

        if let SubmitOutcome::Ignored(rejection) = outcome {
            tracing::debug!(?rejection, "input not submitted");
            return;
        }

        // The user's line is already echoed by the prompt
        for message in &self.controller.session().transcript()[already_shown..] {
            if !message.is_user() {
                ui::print_message(message);
            }
        }
    }
}

/// Completes on Ctrl+C. Never completes if the handler cannot be installed.
async fn interrupted() {
    if tokio::signal::ctrl_c().await.is_err() {
        std::future::pending::<()>().await;
    }
}
