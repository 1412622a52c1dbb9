//! # lingome - Interactive Translation Chat
//!
//! `lingome` is a terminal chat client for translating text with
//! OpenAI-compatible API endpoints. Pick a source and a target language,
//! type text, and the translation arrives as a reply in the conversation.
//!
//! ## Quick Start
//!
//! ```bash
//! # Start chatting (English to Hindi by default)
//! lingome
//!
//! # Choose the language pair up front
//! lingome --from en --to ta
//!
//! # List supported language codes
//! lingome languages
//! ```
//!
//! Inside the chat, `/to <code>` and `/from <code>` switch languages and
//! `/help` lists the other commands.
//!
//! ## Configuration
//!
//! Settings are read from `~/.config/lingome/config.toml`:
//!
//! ```toml
//! [lingome]
//! provider = "github-models"
//! model = "gpt-4o"
//! from = "en"
//! to = "hi"
//! timeout_secs = 60
//!
//! [providers.github-models]
//! endpoint = "https://models.inference.ai.azure.com"
//! api_key_env = "OPENAI_API_KEY"
//! models = ["gpt-4o"]
//! ```
//!
//! ## Embedding the session
//!
//! The conversation core does not depend on the terminal. Any
//! [`translation::TranslationCapability`] can back a
//! [`session::SessionController`]:
//!
//! ```ignore
//! let session = Session::with_defaults(LanguageCatalog::builtin())?;
//! let mut controller = SessionController::new(session, Arc::new(client));
//! controller.update_draft("hello");
//! controller.submit().await;
//! ```

/// Interactive chat mode (terminal presentation).
pub mod chat;

/// Command-line interface definitions and handlers.
pub mod cli;

/// Configuration file loading and resolution.
pub mod config;

/// Diagnostic logging setup.
pub mod logging;

/// XDG-style path utilities for configuration.
pub mod paths;

/// Session state and the controller that submits translations.
pub mod session;

/// Language catalog, request directive, and the translation client.
pub mod translation;

/// Terminal UI components (spinner, colors).
pub mod ui;
