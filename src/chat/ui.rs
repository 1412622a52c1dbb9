//! Chat mode UI components.

use std::time::Duration;

use crate::config::ResolvedConfig;
use crate::session::{Message, Session, SessionController};
use crate::translation::Language;
use crate::ui::Style;

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn print_header(session: &Session) {
    println!(
        "{} {} - Interactive Translation Mode",
        Style::header("lingome"),
        Style::version(format!("v{VERSION}"))
    );
    print_language_pair(session);
    println!();
}

pub fn print_language_pair(session: &Session) {
    println!(
        "  {}  {} {}",
        describe(session.source_language()),
        Style::secondary("→"),
        describe(session.target_language())
    );
}

pub fn print_goodbye() {
    println!("{}", Style::success("Goodbye!"));
}

/// Renders one transcript entry.
pub fn print_message(message: &Message) {
    if message.is_user() {
        println!("{} {}", Style::user("you"), message.text());
    } else {
        println!("{} {}", Style::reply("lingome"), message.text());
    }

    if let Some(lang) = message.language() {
        println!("  {}", Style::tag(format!("{} {}", lang.glyph, lang.name)));
    }
    println!();
}

pub fn print_transcript(messages: &[Message]) {
    println!("{}", Style::header("Conversation"));
    for message in messages {
        print_message(message);
    }
}

pub fn print_config(config: &ResolvedConfig, controller: &SessionController) {
    let session = controller.session();
    println!("{}", Style::header("Configuration"));
    println!(
        "  {}   {}",
        Style::label("provider"),
        Style::value(&config.provider_name)
    );
    println!(
        "  {}      {}",
        Style::label("model"),
        Style::value(&config.model)
    );
    println!(
        "  {}       {}",
        Style::label("from"),
        describe(session.source_language())
    );
    println!(
        "  {}         {}",
        Style::label("to"),
        describe(session.target_language())
    );
    println!(
        "  {}   {}",
        Style::label("endpoint"),
        Style::secondary(&config.endpoint)
    );
    println!(
        "  {}    {}",
        Style::label("timeout"),
        Style::secondary(describe_timeout(controller.request_timeout()))
    );
    println!();
}

pub fn print_help() {
    println!("{}", Style::header("Available commands"));
    let commands = [
        ("/from <code>", "Set the source language"),
        ("/to <code>  ", "Set the target language"),
        ("/languages  ", "List available languages"),
        ("/history    ", "Show the conversation so far"),
        ("/config     ", "Show current configuration"),
        ("/help       ", "Show this help"),
        ("/quit       ", "Exit chat mode"),
        ("//text      ", "Translate text that starts with '/'"),
    ];
    for (command, description) in commands {
        println!(
            "  {}  {}",
            Style::command(command),
            Style::secondary(description)
        );
    }
    println!();
}

pub fn print_language_set(label: &str, lang: &Language) {
    println!(
        "{} {label} language set to {}\n",
        Style::success("✓"),
        describe(lang)
    );
}

pub fn print_error(message: &str) {
    eprintln!("{} {message}", Style::error("Error:"));
    eprintln!();
}

fn describe(lang: &Language) -> String {
    format!("{} {}", lang.glyph, Style::value(lang.name))
}

fn describe_timeout(timeout: Option<Duration>) -> String {
    timeout.map_or_else(|| "none".to_string(), |t| format!("{}s", t.as_secs()))
}
