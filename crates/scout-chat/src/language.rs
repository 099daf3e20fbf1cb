//! Reply language registry.

/// Languages the assistant can be asked to switch to, with their BCP 47
/// codes. "mandarin" is an alias for the Chinese entry.
static LANGUAGES: &[(&str, &str)] = &[
    ("english", "en"),
    ("chinese", "zh-CN"),
    ("mandarin", "zh-CN"),
    ("french", "fr"),
];

/// Look up the language code for a (lowercased) language name.
pub fn language_code(name: &str) -> Option<&'static str> {
    LANGUAGES
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, code)| *code)
}

/// The names a user can ask for, in registry order.
pub fn supported_names() -> Vec<&'static str> {
    LANGUAGES.iter().map(|(n, _)| *n).collect()
}

/// Human-readable label for a language code. Unknown codes read as English,
/// the code a fresh session starts in.
pub fn language_name(code: &str) -> &'static str {
    match code {
        "zh-CN" => "Chinese (Mandarin)",
        "fr" => "French",
        _ => "English",
    }
}
