//! Language catalog and code validation.

use anyhow::Result;

use crate::ui::Style;

/// A language the session can translate from or into.
#[derive(Debug, PartialEq, Eq)]
pub struct Language {
    /// Unique short code (e.g. `hi`, `mni`).
    pub code: &'static str,
    /// Display name used in the directive and in message tags.
    pub name: &'static str,
    /// Flag glyph shown next to the name.
    pub glyph: &'static str,
}

impl Language {
    pub const fn new(code: &'static str, name: &'static str, glyph: &'static str) -> Self {
        Self { code, name, glyph }
    }
}

/// Built-in catalog. Any entry may be used as source or target.
pub const LANGUAGES: &[Language] = &[
    Language::new("hi", "Hindi", "🇮🇳"),
    Language::new("bn", "Bengali", "🇮🇳"),
    Language::new("ta", "Tamil", "🇮🇳"),
    Language::new("te", "Telugu", "🇮🇳"),
    Language::new("mr", "Marathi", "🇮🇳"),
    Language::new("gu", "Gujarati", "🇮🇳"),
    Language::new("pa", "Punjabi", "🇮🇳"),
    Language::new("ur", "Urdu", "🇮🇳"),
    Language::new("ml", "Malayalam", "🇮🇳"),
    Language::new("kn", "Kannada", "🇮🇳"),
    Language::new("or", "Odia", "🇮🇳"),
    Language::new("as", "Assamese", "🇮🇳"),
    Language::new("mni", "Manipuri", "🇮🇳"),
    Language::new("bho", "Bhojpuri", "🇮🇳"),
    Language::new("sd", "Sindhi", "🇮🇳"),
    Language::new("ks", "Kashmiri", "🇮🇳"),
    Language::new("sa", "Sanskrit", "🇮🇳"),
    Language::new("ne", "Nepali", "🇳🇵"),
    Language::new("en", "English", "🇬🇧"),
];

/// Default source language code.
pub const DEFAULT_SOURCE: &str = "en";

/// Preferred default target language code.
pub const DEFAULT_TARGET: &str = "hi";

/// An ordered, immutable set of languages keyed by code.
#[derive(Debug, Clone, Copy)]
pub struct LanguageCatalog {
    entries: &'static [Language],
}

impl LanguageCatalog {
    /// Wraps a static list of languages. Codes are expected to be unique;
    /// lookups return the first match.
    pub const fn new(entries: &'static [Language]) -> Self {
        Self { entries }
    }

    /// The catalog shipped with the application.
    pub const fn builtin() -> Self {
        Self::new(LANGUAGES)
    }

    pub const fn entries(&self) -> &'static [Language] {
        self.entries
    }

    pub fn find(&self, code: &str) -> Option<&'static Language> {
        self.entries.iter().find(|lang| lang.code == code)
    }

    pub fn contains(&self, code: &str) -> bool {
        self.find(code).is_some()
    }

    /// Picks the target used when none is configured.
    ///
    /// Prefers Hindi, unless it is missing or is already the source, in which
    /// case the first entry with a different code is used. Falls back to the
    /// source itself for a single-entry catalog.
    pub fn default_target_for(&self, source: &str) -> Option<&'static Language> {
        self.find(DEFAULT_TARGET)
            .filter(|lang| lang.code != source)
            .or_else(|| self.entries.iter().find(|lang| lang.code != source))
            .or_else(|| self.find(source))
    }
}

impl Default for LanguageCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Prints the built-in catalog to stdout.
pub fn print_languages() {
    println!("{}", Style::header("Supported languages"));
    for lang in LANGUAGES {
        println!(
            "  {} {:4} {}",
            lang.glyph,
            Style::code(lang.code),
            Style::secondary(lang.name)
        );
    }
}

/// Validates that the given language code is in the built-in catalog.
///
/// # Errors
///
/// Returns an error if the language code is not supported.
pub fn validate_language(lang: &str) -> Result<&'static Language> {
    LanguageCatalog::builtin().find(lang).ok_or_else(|| {
        anyhow::anyhow!(
            "Invalid language code: '{lang}'\n\n\
             Valid language codes: en, hi, bn, ta, te, mr, ...\n\
             Run 'lingome languages' to see all supported codes."
        )
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const SMALL: &[Language] = &[
        Language::new("en", "English", "🇬🇧"),
        Language::new("ta", "Tamil", "🇮🇳"),
    ];

    #[test]
    fn test_builtin_catalog_has_nineteen_unique_codes() {
        assert_eq!(LANGUAGES.len(), 19);
        let mut codes: Vec<_> = LANGUAGES.iter().map(|l| l.code).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), 19);
    }

    #[test]
    fn test_validate_language_valid() {
        assert_eq!(validate_language("hi").unwrap().name, "Hindi");
        assert_eq!(validate_language("mni").unwrap().name, "Manipuri");
        assert!(validate_language("en").is_ok());
    }

    #[test]
    fn test_validate_language_invalid() {
        assert!(validate_language("xx").is_err());
        assert!(validate_language("").is_err());
        assert!(validate_language("HI").is_err()); // Case sensitive
    }

    #[test]
    fn test_default_target_prefers_hindi() {
        let catalog = LanguageCatalog::builtin();
        assert_eq!(catalog.default_target_for("en").unwrap().code, "hi");
    }

    #[test]
    fn test_default_target_skips_source() {
        let catalog = LanguageCatalog::builtin();
        assert_eq!(catalog.default_target_for("hi").unwrap().code, "bn");
    }

    #[test]
    fn test_default_target_without_hindi() {
        let catalog = LanguageCatalog::new(SMALL);
        assert_eq!(catalog.default_target_for("en").unwrap().code, "ta");
    }

    #[test]
    fn test_find_unknown_code() {
        assert!(LanguageCatalog::builtin().find("xx").is_none());
        assert!(!LanguageCatalog::builtin().contains("xx"));
    }
}
