//! Display Language Detection
//!
//! Chooses the landing page language by scanning free-text content for
//! Arabic script. Pure and infallible: anything without Arabic code points
//! resolves to English.

use serde::{Deserialize, Serialize};

/// Supported display languages
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Ar,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Ar => "ar",
        }
    }

    /// Parse a client-supplied hint ("en"/"ar"); anything else is ignored
    pub fn from_hint(hint: &str) -> Option<Language> {
        match hint {
            "en" => Some(Language::En),
            "ar" => Some(Language::Ar),
            _ => None,
        }
    }
}

/// Arabic, Arabic Supplement and Arabic Presentation Forms ranges
const ARABIC_RANGES: [(u32, u32); 4] = [
    (0x0600, 0x06FF), // Arabic
    (0x0750, 0x077F), // Arabic Supplement
    (0xFB50, 0xFDFF), // Arabic Presentation Forms-A
    (0xFE70, 0xFEFF), // Arabic Presentation Forms-B
];

fn contains_arabic(text: &str) -> bool {
    text.chars().any(|c| {
        let cp = c as u32;
        ARABIC_RANGES
            .iter()
            .any(|(start, end)| cp >= *start && cp <= *end)
    })
}

/// Detect the display language from free-text strings.
///
/// Strings are scanned in the order given (callers pass business name
/// first, then category names, then item names/descriptions); the first
/// one containing Arabic script decides. No Arabic anywhere means English,
/// including for empty input.
pub fn detect_language<'a>(texts: impl IntoIterator<Item = &'a str>) -> Language {
    for text in texts {
        if contains_arabic(text) {
            return Language::Ar;
        }
    }
    Language::En
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arabic_business_name() {
        assert_eq!(detect_language(["مطعم الاصالة"]), Language::Ar);
    }

    #[test]
    fn test_latin_business_name() {
        assert_eq!(detect_language(["Tasty Burger"]), Language::En);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(detect_language(Vec::<&str>::new()), Language::En);
        assert_eq!(detect_language([""]), Language::En);
    }

    #[test]
    fn test_first_match_wins() {
        // Arabic in a later string still flips the result
        assert_eq!(
            detect_language(["Pizza House", "مشاوي", "Salads"]),
            Language::Ar
        );
    }

    #[test]
    fn test_mixed_text() {
        assert_eq!(detect_language(["Burger برجر"]), Language::Ar);
    }

    #[test]
    fn test_presentation_forms() {
        // U+FEF5 (lam-alef ligature) lives in Presentation Forms-B
        assert_eq!(detect_language(["\u{FEF5}"]), Language::Ar);
    }

    #[test]
    fn test_hint_parsing() {
        assert_eq!(Language::from_hint("ar"), Some(Language::Ar));
        assert_eq!(Language::from_hint("en"), Some(Language::En));
        assert_eq!(Language::from_hint("fr"), None);
    }
}
