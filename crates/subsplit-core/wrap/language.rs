//! Language-specific break preferences

/// Break rules for one language
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageRules {
    /// Words a line should not end with (compared case-insensitively)
    pub no_break_after: &'static [&'static str],
    /// Characters that must not start a new line
    pub no_line_start: &'static [char],
}

const ENGLISH: &[&str] = &["a", "an", "the", "mr.", "mrs.", "ms.", "dr.", "st."];
const FRENCH: &[&str] = &[
    "le", "la", "les", "un", "une", "des", "du", "de", "l'", "d'", "m.", "mme", "mlle",
];
const GERMAN: &[&str] = &[
    "der", "die", "das", "den", "dem", "des", "ein", "eine", "einen", "einem", "einer", "hr.",
    "fr.", "dr.",
];
const SPANISH: &[&str] = &["el", "la", "los", "las", "un", "una", "unos", "unas", "sr.", "sra."];
const PORTUGUESE: &[&str] = &["o", "a", "os", "as", "um", "uma", "sr.", "sra."];
const ITALIAN: &[&str] = &["il", "lo", "la", "i", "gli", "le", "un", "uno", "una", "sig."];
const DUTCH: &[&str] = &["de", "het", "een", "dhr.", "mevr."];
const SCANDINAVIAN: &[&str] = &["en", "ett", "et", "ei", "den", "det", "hr."];

const FRENCH_NO_LINE_START: &[char] = &['?', '!', ':', ';', '»'];

impl LanguageRules {
    /// Rules for languages without a word list
    pub const NEUTRAL: Self = Self {
        no_break_after: &[],
        no_line_start: &[],
    };

    /// Look up rules by language identifier (`"en"`, `"fr-CA"`, `"pt_BR"`, ...)
    #[must_use]
    pub fn for_language(language: &str) -> Self {
        let primary = language
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();

        let no_break_after = match primary.as_str() {
            "en" => ENGLISH,
            "fr" => FRENCH,
            "de" => GERMAN,
            "es" => SPANISH,
            "pt" => PORTUGUESE,
            "it" => ITALIAN,
            "nl" => DUTCH,
            "da" | "no" | "nb" | "nn" | "sv" => SCANDINAVIAN,
            _ => return Self::NEUTRAL,
        };

        let no_line_start = if primary == "fr" {
            FRENCH_NO_LINE_START
        } else {
            &[]
        };

        Self {
            no_break_after,
            no_line_start,
        }
    }

    /// Whether a line may end with `word`
    #[must_use]
    pub fn allows_break_after(&self, word: &str) -> bool {
        !self
            .no_break_after
            .iter()
            .any(|candidate| candidate.eq_ignore_ascii_case(word))
    }

    /// Whether a line may start with `word`
    #[must_use]
    pub fn allows_line_start(&self, word: &str) -> bool {
        word.chars()
            .next()
            .map_or(true, |first| !self.no_line_start.contains(&first))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn region_suffix_is_ignored() {
        assert_eq!(LanguageRules::for_language("fr-CA"), LanguageRules::for_language("fr"));
        assert_eq!(LanguageRules::for_language("pt_BR"), LanguageRules::for_language("PT"));
    }

    #[test]
    fn unknown_language_is_neutral() {
        let rules = LanguageRules::for_language("xx");
        assert_eq!(rules, LanguageRules::NEUTRAL);
        assert!(rules.allows_break_after("the"));
    }

    #[test]
    fn english_articles_block_breaks() {
        let rules = LanguageRules::for_language("en");
        assert!(!rules.allows_break_after("The"));
        assert!(!rules.allows_break_after("Mr."));
        assert!(rules.allows_break_after("cat"));
    }

    #[test]
    fn french_punctuation_never_starts_a_line() {
        let rules = LanguageRules::for_language("fr");
        assert!(!rules.allows_line_start("?"));
        assert!(rules.allows_line_start("Bonjour"));
        assert!(LanguageRules::for_language("en").allows_line_start("?"));
    }
}
