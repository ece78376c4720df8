//! Profanity detection and captain-name sanitization
//!
//! A [`ProfanityFilter`] holds one compiled whole-word matcher per lexicon
//! entry. Matchers are case-insensitive and use Unicode word boundaries, so
//! the Arabic-script entries and the digit-bearing Arabizi entries both match
//! whole tokens and never substrings of longer words ("classic" is not
//! flagged for "ass"). The set is compiled once and shared for the process
//! lifetime; every operation is pure and infallible.

use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};

use super::lexicon;

/// Fixed replacement for a matched word, regardless of the word's length
pub const REDACTION_MARKER: &str = "***";

/// Maximum length of a sanitized captain name, in characters
pub const NAME_MAX_CHARS: usize = 50;

// Matchers for the built-in lexicons, compiled once per process. Regex clones
// share the compiled program, so handing copies to each filter is cheap.
static BUILTIN_MATCHERS: Lazy<Vec<Matcher>> = Lazy::new(|| {
    lexicon::ALL
        .iter()
        .flat_map(|words| words.iter().map(|word| Matcher::compile(word)))
        .collect()
});

/// One lexicon entry with its compiled whole-word pattern
#[derive(Debug, Clone)]
struct Matcher {
    word: String,
    pattern: Regex,
}

impl Matcher {
    fn compile(word: &str) -> Self {
        let pattern = RegexBuilder::new(&format!(r"\b{}\b", regex::escape(word)))
            .case_insensitive(true)
            .build()
            .expect("escaped lexicon word is a valid pattern");
        Self {
            word: word.to_string(),
            pattern,
        }
    }
}

/// Multi-language profanity filter over the three built-in lexicons
#[derive(Debug, Clone)]
pub struct ProfanityFilter {
    matchers: Vec<Matcher>,
}

impl ProfanityFilter {
    /// Filter over the built-in English, Arabic, and Arabizi lexicons
    pub fn new() -> Self {
        Self {
            matchers: BUILTIN_MATCHERS.clone(),
        }
    }

    /// Built-in lexicons plus extra blocked words
    ///
    /// Extra words are trimmed and lowercased, then compiled through the same
    /// escape-and-bound path as the built-ins; blanks are dropped.
    pub(crate) fn with_extra_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut matchers = BUILTIN_MATCHERS.clone();
        for word in words {
            let word = word.as_ref().trim().to_lowercase();
            if !word.is_empty() {
                matchers.push(Matcher::compile(&word));
            }
        }
        Self { matchers }
    }

    /// Whether `text` contains any lexicon entry as a whole word
    pub fn contains_bad_words(&self, text: &str) -> bool {
        self.matchers.iter().any(|m| m.pattern.is_match(text))
    }

    /// The lexicon entries `text` violates, in lexicon order
    pub fn matches(&self, text: &str) -> Vec<&str> {
        self.matchers
            .iter()
            .filter(|m| m.pattern.is_match(text))
            .map(|m| m.word.as_str())
            .collect()
    }

    /// Replace every whole-word lexicon match with [`REDACTION_MARKER`]
    ///
    /// Matchers run in lexicon order (english, arabic, arabizi), each
    /// replacing all of its non-overlapping matches.
    pub fn filter_text(&self, text: &str) -> String {
        let mut filtered = text.to_string();
        for m in &self.matchers {
            if m.pattern.is_match(&filtered) {
                filtered = m.pattern.replace_all(&filtered, REDACTION_MARKER).into_owned();
            }
        }
        filtered
    }

    /// Sanitize a captain-supplied display name
    ///
    /// Redacts lexicon matches, collapses whitespace runs to single spaces,
    /// trims, and caps the result at [`NAME_MAX_CHARS`] characters. The cut
    /// lands on a `char` boundary, never inside a UTF-8 sequence; a trailing
    /// space exposed by the cut is trimmed. Never fails: the worst case is an
    /// empty or marker-only string, which callers replace with a fallback
    /// display name.
    pub fn clean_name(&self, name: &str) -> String {
        let filtered = self.filter_text(name);
        let collapsed = filtered.split_whitespace().collect::<Vec<_>>().join(" ");
        truncate_chars(&collapsed, NAME_MAX_CHARS).trim_end().to_string()
    }
}

impl Default for ProfanityFilter {
    fn default() -> Self {
        Self::new()
    }
}

/// First `max` characters of `s`, on a char boundary
fn truncate_chars(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_english_words_case_insensitively() {
        let filter = ProfanityFilter::new();
        assert!(filter.contains_bad_words("what the DAMN"));
        assert!(filter.contains_bad_words("Shit happens"));
        assert!(!filter.contains_bad_words("a perfectly polite sentence"));
        assert!(!filter.contains_bad_words(""));
    }

    #[test]
    fn whole_word_matching_ignores_superstrings() {
        let filter = ProfanityFilter::new();
        // "ass" inside "classic"/"assassin", "hell" inside "hello"
        assert!(!filter.contains_bad_words("a classic hello from the assassin"));
        assert!(filter.contains_bad_words("kiss my ass"));
        assert!(filter.contains_bad_words("hell no"));
    }

    #[test]
    fn detects_arabic_script_entries() {
        let filter = ProfanityFilter::new();
        assert!(filter.contains_bad_words("انت كلب"));
        // Bound by Arabic letters: not a whole word
        assert!(!filter.contains_bad_words("انتكلبه"));
    }

    #[test]
    fn detects_arabizi_digit_substitutions() {
        let filter = ProfanityFilter::new();
        assert!(filter.contains_bad_words("ya 7mar"));
        assert!(filter.contains_bad_words("5ara!"));
        assert!(!filter.contains_bad_words("my phone number is 57mar2"));
    }

    #[test]
    fn matches_reports_violated_entries_in_lexicon_order() {
        let filter = ProfanityFilter::new();
        assert_eq!(filter.matches("damn that 7mar"), vec!["damn", "7mar"]);
        assert!(filter.matches("all good here").is_empty());
    }

    #[test]
    fn filter_text_redacts_every_occurrence() {
        let filter = ProfanityFilter::new();
        assert_eq!(filter.filter_text("damn damn damn"), "*** *** ***");
        assert_eq!(filter.filter_text("Ahmed damn shit"), "Ahmed *** ***");
        assert_eq!(filter.filter_text("untouched text"), "untouched text");
    }

    #[test]
    fn filter_text_is_idempotent() {
        let filter = ProfanityFilter::new();
        let once = filter.filter_text("damn you and your 7mar كلب");
        assert_eq!(filter.filter_text(&once), once);
    }

    #[test]
    fn clean_name_collapses_and_trims_whitespace() {
        let filter = ProfanityFilter::new();
        assert_eq!(filter.clean_name("  Ahmed   Hassan \t"), "Ahmed Hassan");
        assert_eq!(filter.clean_name("damn Ali"), "*** Ali");
        assert_eq!(filter.clean_name(""), "");
    }

    #[test]
    fn clean_name_caps_length_at_fifty_chars() {
        let filter = ProfanityFilter::new();
        let long = "A".repeat(80);
        let cleaned = filter.clean_name(&long);
        assert_eq!(cleaned.chars().count(), NAME_MAX_CHARS);

        // Multi-byte input is cut on a char boundary
        let arabic_long = "م".repeat(80);
        let cleaned = filter.clean_name(&arabic_long);
        assert_eq!(cleaned.chars().count(), NAME_MAX_CHARS);
    }

    #[test]
    fn clean_name_trims_space_exposed_by_the_cut() {
        let filter = ProfanityFilter::new();
        // 49 chars + space + more: the cut lands right after the space
        let name = format!("{} {}", "A".repeat(49), "B".repeat(10));
        let cleaned = filter.clean_name(&name);
        assert_eq!(cleaned, "A".repeat(49));
        assert!(!cleaned.ends_with(' '));
    }

    #[test]
    fn clean_name_is_idempotent_for_typical_names() {
        let filter = ProfanityFilter::new();
        for name in ["Ahmed Hassan", "damn Ali", "  spaced   out  ", "أحمد حسن"] {
            let once = filter.clean_name(name);
            assert_eq!(filter.clean_name(&once), once);
        }
    }

    #[test]
    fn extra_words_behave_like_builtins() {
        let filter = ProfanityFilter::with_extra_words(["Zut ", ""]);
        assert!(filter.contains_bad_words("zut alors"));
        assert!(!filter.contains_bad_words("zutique"));
        assert_eq!(filter.filter_text("ZUT!"), "***!");
    }
}
