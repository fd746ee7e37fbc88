//! Fixed table of languages offered in the selectors.

use serde::Serialize;

use crate::error::{Result, TranslateError};

/// Language information
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LanguageEntry {
    /// Name shown in the selectors (e.g., "English")
    pub display_name: &'static str,
    /// ISO 639-1 code understood by the model (e.g., "en")
    pub iso_code: &'static str,
}

const fn entry(display_name: &'static str, iso_code: &'static str) -> LanguageEntry {
    LanguageEntry {
        display_name,
        iso_code,
    }
}

/// Supported languages, in selector order
pub static LANGUAGES: &[LanguageEntry] = &[
    entry("English", "en"),
    entry("Spanish", "es"),
    entry("French", "fr"),
    entry("German", "de"),
    entry("Italian", "it"),
    entry("Portuguese", "pt"),
    entry("Russian", "ru"),
    entry("Chinese", "zh"),
    entry("Japanese", "ja"),
    entry("Korean", "ko"),
    entry("Arabic", "ar"),
    entry("Hindi", "hi"),
    entry("Bengali", "bn"),
    entry("Urdu", "ur"),
    entry("Turkish", "tr"),
    entry("Dutch", "nl"),
    entry("Polish", "pl"),
];

pub fn entries() -> &'static [LanguageEntry] {
    LANGUAGES
}

/// Display names in selector order.
pub fn list_languages() -> Vec<&'static str> {
    LANGUAGES.iter().map(|l| l.display_name).collect()
}

/// Get the ISO code for a display name.
pub fn code_for(display_name: &str) -> Result<&'static str> {
    LANGUAGES
        .iter()
        .find(|l| l.display_name == display_name)
        .map(|l| l.iso_code)
        .ok_or_else(|| TranslateError::UnknownLanguage(display_name.to_string()))
}

pub fn name_for(iso_code: &str) -> Option<&'static str> {
    LANGUAGES
        .iter()
        .find(|l| l.iso_code == iso_code)
        .map(|l| l.display_name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_list_order_is_stable() {
        let names = list_languages();
        assert_eq!(names.len(), 17);
        assert_eq!(names[0], "English");
        assert_eq!(names[1], "Spanish");
        assert_eq!(names[16], "Polish");
        assert_eq!(names, list_languages());
    }

    #[test]
    fn test_code_for_every_entry() {
        for lang in entries() {
            assert_eq!(code_for(lang.display_name).unwrap(), lang.iso_code);
            assert_eq!(name_for(lang.iso_code), Some(lang.display_name));
        }
        assert_eq!(code_for("Japanese").unwrap(), "ja");
    }

    #[test]
    fn test_display_names_and_codes_unique() {
        let names: HashSet<_> = entries().iter().map(|l| l.display_name).collect();
        let codes: HashSet<_> = entries().iter().map(|l| l.iso_code).collect();
        assert_eq!(names.len(), LANGUAGES.len());
        assert_eq!(codes.len(), LANGUAGES.len());
    }

    #[test]
    fn test_unknown_language() {
        match code_for("Klingon") {
            Err(TranslateError::UnknownLanguage(name)) => assert_eq!(name, "Klingon"),
            other => panic!("expected UnknownLanguage, got {:?}", other),
        }
        // lookups are exact
        assert!(code_for("english").is_err());
        assert_eq!(name_for("tlh"), None);
    }
}
