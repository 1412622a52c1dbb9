pub const DIRECTIVE_TEMPLATE: &str = "You are a translator. Translate the following text from {source_language} to {target_language}. \
     Respond with only the translated text, written in {target_language}, \
     without any additional commentary, preamble, or metadata.";

#[allow(clippy::literal_string_with_formatting_args)]
pub fn build_directive(source_language: &str, target_language: &str) -> String {
    // {source_language} and {target_language} are placeholders, not format arguments
    DIRECTIVE_TEMPLATE
        .replace("{source_language}", source_language)
        .replace("{target_language}", target_language)
}
