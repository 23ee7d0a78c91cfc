//! Internationalization — localized strings for the console session.
//!
//! One strongly-typed [`Locale`] record per language instead of a stringly
//! keyed table, so a missing string is a compile error rather than a runtime
//! hole. Supported languages: French (default), English.

/// Language code used when the requested one is unknown.
pub const DEFAULT_CODE: &str = "fr";

/// Every user-facing string for one language.
///
/// The greeting and farewell arrays are indexed by day-period
/// (0 morning, 1 afternoon, 2 evening/night).
#[derive(Debug)]
pub struct Locale {
    pub code: &'static str,
    pub greetings: [&'static str; 3],
    pub farewells: [&'static str; 3],
    /// Printed after the mirror line when the input is a palindrome.
    pub palindrome_response: &'static str,
    /// Startup prompt asking for a language code.
    pub choose_language: &'static str,
    /// Notice printed when an unknown language falls back to the default.
    pub unsupported: &'static str,
    /// Prefix for recoverable per-iteration errors.
    pub error: &'static str,
    /// Per-iteration input prompt.
    pub prompt: &'static str,
}

const FR: Locale = Locale {
    code: "fr",
    greetings: ["Bonjour", "Bon après-midi", "Bonsoir"],
    farewells: ["Au revoir", "Bonne soirée", "Bonne nuit"],
    palindrome_response: "Bien dit !",
    choose_language: "Choisissez la langue (fr/en) : ",
    unsupported: "Langue non supportée. Par défaut : français",
    error: "Erreur",
    prompt: ">>> ",
};

const EN: Locale = Locale {
    code: "en",
    greetings: ["Good morning", "Good afternoon", "Good evening"],
    farewells: ["Goodbye", "Have a nice evening", "Good night"],
    palindrome_response: "Well said!",
    choose_language: "Choose language (fr/en) : ",
    unsupported: "Unsupported language. Default: English",
    error: "Error",
    prompt: ">>> ",
};

const LOCALES: [&Locale; 2] = [&FR, &EN];

/// Look up a locale by language code, case-insensitively and trimmed.
pub fn lookup(code: &str) -> Option<&'static Locale> {
    let cleaned = code.trim().to_lowercase();
    LOCALES.iter().copied().find(|l| l.code == cleaned)
}

/// Look up a locale, falling back to `fallback_code` (and ultimately to the
/// built-in default) when unknown. The flag reports whether a fallback
/// happened, so the caller can print the unsupported-language notice.
pub fn lookup_or_default(code: &str, fallback_code: &str) -> (&'static Locale, bool) {
    match lookup(code) {
        Some(locale) => (locale, false),
        None => {
            let fallback = lookup(fallback_code).unwrap_or(&FR);
            (fallback, true)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_known_codes() {
        assert_eq!(lookup("fr").unwrap().code, "fr");
        assert_eq!(lookup("en").unwrap().code, "en");
    }

    #[test]
    fn test_lookup_is_trimmed_and_case_insensitive() {
        assert_eq!(lookup("  FR ").unwrap().code, "fr");
        assert_eq!(lookup("En\n").unwrap().code, "en");
    }

    #[test]
    fn test_lookup_unknown_is_none() {
        assert!(lookup("de").is_none());
        assert!(lookup("").is_none());
        assert!(lookup("french").is_none());
    }

    #[test]
    fn test_fallback_to_default() {
        let (locale, fell_back) = lookup_or_default("de", DEFAULT_CODE);
        assert!(fell_back);
        assert_eq!(locale.code, "fr");

        let (locale, fell_back) = lookup_or_default("en", DEFAULT_CODE);
        assert!(!fell_back);
        assert_eq!(locale.code, "en");
    }

    #[test]
    fn test_fallback_is_total_even_with_bogus_fallback_code() {
        let (locale, fell_back) = lookup_or_default("de", "klingon");
        assert!(fell_back);
        assert_eq!(locale.code, "fr");
    }

    #[test]
    fn test_locales_have_distinct_strings_per_period() {
        for locale in LOCALES {
            for s in locale.greetings.iter().chain(locale.farewells.iter()) {
                assert!(!s.is_empty(), "{} has an empty string", locale.code);
            }
            assert_ne!(locale.greetings[0], locale.greetings[2]);
            assert_ne!(locale.farewells[0], locale.farewells[2]);
            assert!(!locale.palindrome_response.is_empty());
            assert!(!locale.prompt.is_empty());
        }
    }
}
