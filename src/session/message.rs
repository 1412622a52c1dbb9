use crate::translation::Language;

/// Who produced a transcript entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    User,
    System,
}

/// One transcript entry. Never modified after it is appended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    text: String,
    origin: Origin,
    language: Option<&'static Language>,
}

impl Message {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            origin: Origin::User,
            language: None,
        }
    }

    /// An untagged system message (greeting, error notice).
    pub fn system(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            origin: Origin::System,
            language: None,
        }
    }

    /// A translated reply, tagged with the language it was produced in.
    pub fn translation(text: impl Into<String>, language: &'static Language) -> Self {
        Self {
            text: text.into(),
            origin: Origin::System,
            language: Some(language),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub const fn origin(&self) -> Origin {
        self.origin
    }

    pub const fn language(&self) -> Option<&'static Language> {
        self.language
    }

    pub fn language_code(&self) -> Option<&'static str> {
        self.language.map(|lang| lang.code)
    }

    pub const fn is_user(&self) -> bool {
        matches!(self.origin, Origin::User)
    }
}
