mod capability;
mod client;
mod language;
mod prompt;

pub use capability::{TranslationCapability, TranslationError};
pub use client::{TranslationClient, TranslationRequest};
pub use language::{
    DEFAULT_SOURCE, DEFAULT_TARGET, LANGUAGES, Language, LanguageCatalog, print_languages,
    validate_language,
};
pub use prompt::{DIRECTIVE_TEMPLATE, build_directive};
