use thiserror::Error;

use super::message::Message;
use crate::translation::{DEFAULT_SOURCE, Language, LanguageCatalog};

/// Greeting placed in every new transcript.
pub const GREETING: &str =
    "Select the language you want me to translate into, type your text and press Enter!";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("Invalid language code: '{0}'")]
    InvalidLanguage(String),
}

/// Conversation and settings state for one user.
///
/// Readers get shared access through the getters. Every mutator is
/// crate-private: `SessionController` is the only writer.
#[derive(Debug, Clone)]
pub struct Session {
    catalog: LanguageCatalog,
    transcript: Vec<Message>,
    source: &'static Language,
    target: &'static Language,
    draft: String,
    pending: bool,
}

impl Session {
    /// Creates a session with the greeting as its only message.
    pub fn new(
        catalog: LanguageCatalog,
        source: &str,
        target: &str,
    ) -> Result<Self, SessionError> {
        let source = lookup(catalog, source)?;
        let target = lookup(catalog, target)?;

        Ok(Self {
            catalog,
            transcript: vec![Message::system(GREETING)],
            source,
            target,
            draft: String::new(),
            pending: false,
        })
    }

    /// Creates a session with the catalog's default language pair.
    pub fn with_defaults(catalog: LanguageCatalog) -> Result<Self, SessionError> {
        let source = catalog
            .find(DEFAULT_SOURCE)
            .or_else(|| catalog.entries().first())
            .ok_or_else(|| SessionError::InvalidLanguage(DEFAULT_SOURCE.to_string()))?;
        let target = catalog
            .default_target_for(source.code)
            .ok_or_else(|| SessionError::InvalidLanguage(source.code.to_string()))?;
        Self::new(catalog, source.code, target.code)
    }

    pub const fn catalog(&self) -> LanguageCatalog {
        self.catalog
    }

    pub fn transcript(&self) -> &[Message] {
        &self.transcript
    }

    pub const fn source_language(&self) -> &'static Language {
        self.source
    }

    pub const fn target_language(&self) -> &'static Language {
        self.target
    }

    pub fn draft_input(&self) -> &str {
        &self.draft
    }

    pub const fn is_pending(&self) -> bool {
        self.pending
    }

    pub(crate) fn set_draft_input(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    pub(crate) fn set_source_language(&mut self, code: &str) -> Result<(), SessionError> {
        self.source = lookup(self.catalog, code)?;
        Ok(())
    }

    pub(crate) fn set_target_language(&mut self, code: &str) -> Result<(), SessionError> {
        self.target = lookup(self.catalog, code)?;
        Ok(())
    }

    pub(crate) fn append_message(&mut self, message: Message) {
        self.transcript.push(message);
    }

    pub(crate) const fn set_pending(&mut self, pending: bool) {
        self.pending = pending;
    }

    pub(crate) fn clear_draft(&mut self) {
        self.draft.clear();
    }
}

fn lookup(catalog: LanguageCatalog, code: &str) -> Result<&'static Language, SessionError> {
    catalog
        .find(code)
        .ok_or_else(|| SessionError::InvalidLanguage(code.to_string()))
}
