//! Response resolution for captain registration support
//!
//! [`SupportBot`] is an immutable service object: construct it once at
//! process start and share it by reference. All state (the compiled matcher
//! set, the fallback name) is read-only after construction, so the bot is
//! `Send + Sync` and safe to use from any number of threads without locking.

use chrono::Utc;
use tracing::{debug, warn};

use super::moderation::{ProfanityFilter, REDACTION_MARKER};
use super::templates::{self, GeneralTopic};
use super::types::{Language, RegistrationStatus, SupportResponse};

/// Display name substituted when sanitization leaves nothing usable
pub const FALLBACK_NAME: &str = "Captain";

/// Support responder for captain registration inquiries
#[derive(Debug, Clone)]
pub struct SupportBot {
    filter: ProfanityFilter,
    fallback_name: String,
}

impl SupportBot {
    /// Bot with the built-in lexicons and the default fallback name
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Start building a customized bot
    pub fn builder() -> SupportBotBuilder {
        SupportBotBuilder::new()
    }

    /// The bot's profanity filter
    pub fn filter(&self) -> &ProfanityFilter {
        &self.filter
    }

    /// Primary entry point: resolve and return the final message text
    ///
    /// If `user_message` is supplied and contains profanity, the incident is
    /// logged with the violated entries; the returned message is unaffected
    /// and the call never fails. The message itself plays no role in routing.
    pub fn process(
        &self,
        captain_name: &str,
        language: &str,
        registration_status: &str,
        user_message: Option<&str>,
    ) -> String {
        if let Some(message) = user_message {
            let flagged = self.filter.matches(message);
            if !flagged.is_empty() {
                warn!(words = ?flagged, "profanity detected in captain message");
            }
        }
        self.status_response(captain_name, language, registration_status)
            .message
    }

    /// Structured entry point: resolve into a full [`SupportResponse`] record
    ///
    /// An unrecognized status tag yields the localized "unknown" message with
    /// `success = false` and the offending tag quoted in `error`; it is never
    /// a failure of the call.
    pub fn status_response(
        &self,
        captain_name: &str,
        language: &str,
        registration_status: &str,
    ) -> SupportResponse {
        let name = self.display_name(captain_name);
        let language = self.resolve_language(language);

        match registration_status.parse::<RegistrationStatus>() {
            Ok(status) => SupportResponse {
                message: templates::render(templates::status_template(status, language), &name),
                captain_name: name,
                language,
                status: status.as_str().to_string(),
                timestamp: Utc::now(),
                success: true,
                error: None,
            },
            Err(err) => SupportResponse {
                message: templates::render(
                    templates::general_template(GeneralTopic::Unknown, language),
                    &name,
                ),
                captain_name: name,
                language,
                status: "unknown".to_string(),
                timestamp: Utc::now(),
                success: false,
                error: Some(err.to_string()),
            },
        }
    }

    /// Localized greeting
    pub fn greeting(&self, captain_name: &str, language: &str) -> String {
        self.general(GeneralTopic::Greeting, captain_name, language)
    }

    /// Localized closing acknowledgement
    pub fn thank_you(&self, captain_name: &str, language: &str) -> String {
        self.general(GeneralTopic::ThankYou, captain_name, language)
    }

    /// Localized fallback for requests the bot could not understand
    pub fn unknown_response(&self, captain_name: &str, language: &str) -> String {
        self.general(GeneralTopic::Unknown, captain_name, language)
    }

    fn general(&self, topic: GeneralTopic, captain_name: &str, language: &str) -> String {
        let name = self.display_name(captain_name);
        let language = self.resolve_language(language);
        templates::render(templates::general_template(topic, language), &name)
    }

    // Sanitized name, or the fallback when nothing displayable survives.
    fn display_name(&self, captain_name: &str) -> String {
        let cleaned = self.filter.clean_name(captain_name);
        if cleaned.is_empty() || cleaned == REDACTION_MARKER {
            self.fallback_name.clone()
        } else {
            cleaned
        }
    }

    // Unsupported tags coerce to English silently (logged at debug only).
    fn resolve_language(&self, tag: &str) -> Language {
        let language = Language::parse_or_default(tag);
        if !tag.trim().eq_ignore_ascii_case(language.as_str()) {
            debug!(requested = %tag, resolved = %language, "unsupported language tag, defaulting");
        }
        language
    }
}

impl Default for SupportBot {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for [`SupportBot`]
#[derive(Debug, Default)]
pub struct SupportBotBuilder {
    fallback_name: Option<String>,
    extra_words: Vec<String>,
}

impl SupportBotBuilder {
    /// Builder with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the fallback display name
    pub fn fallback_name(mut self, name: impl Into<String>) -> Self {
        self.fallback_name = Some(name.into());
        self
    }

    /// Add blocked words on top of the built-in lexicons
    pub fn block_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extra_words.extend(words.into_iter().map(Into::into));
        self
    }

    /// Build the bot
    pub fn build(self) -> SupportBot {
        let filter = if self.extra_words.is_empty() {
            ProfanityFilter::new()
        } else {
            ProfanityFilter::with_extra_words(&self.extra_words)
        };
        SupportBot {
            filter,
            fallback_name: self
                .fallback_name
                .unwrap_or_else(|| FALLBACK_NAME.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_name_replaces_empty_and_marker_only_results() {
        let bot = SupportBot::new();
        assert_eq!(bot.display_name(""), FALLBACK_NAME);
        assert_eq!(bot.display_name("   "), FALLBACK_NAME);
        assert_eq!(bot.display_name("damn"), FALLBACK_NAME);
        assert_eq!(bot.display_name("Ahmed"), "Ahmed");
        // Two redacted words are not "the marker alone"
        assert_eq!(bot.display_name("damn shit"), "*** ***");
    }

    #[test]
    fn builder_overrides_fallback_name() {
        let bot = SupportBot::builder().fallback_name("Driver").build();
        assert_eq!(bot.display_name(""), "Driver");
    }

    #[test]
    fn builder_extra_words_feed_the_filter() {
        let bot = SupportBot::builder().block_words(["fiddlesticks"]).build();
        assert!(bot.filter().contains_bad_words("oh fiddlesticks"));
        assert_eq!(bot.display_name("fiddlesticks"), FALLBACK_NAME);
    }

    #[test]
    fn greeting_localizes_and_applies_fallback() {
        let bot = SupportBot::new();
        let message = bot.greeting("", "arabizi");
        assert!(message.contains("Ahlan Captain Captain"));

        let message = bot.greeting("Omar", "arabic");
        assert!(message.contains("Omar"));
        assert!(message.contains("مرحباً"));
    }

    #[test]
    fn thank_you_defaults_unsupported_language_to_english() {
        let bot = SupportBot::new();
        let message = bot.thank_you("Sara", "klingon");
        assert!(message.contains("Thank you Captain Sara"));
    }
}
